use compsync::test_utils::ConfigFixture;

use super::react_env;

#[test]
fn test_remove_round_trip() {
    let env = react_env(&ConfigFixture::react());
    let source = env.source().unwrap();
    source.add_component("dialog").unwrap();

    let removed = source.remove_component("dialog").unwrap();

    assert_eq!(removed, vec!["src/components/ui/dialog.tsx"]);
    assert!(!env.file_exists("src/components/ui/dialog.tsx"));
    // Dependencies stay installed.
    assert!(env.file_exists("src/components/ui/button.tsx"));
    assert_eq!(source.list_installed_components().unwrap(), vec!["button"]);
}

#[test]
fn test_remove_not_installed_is_empty() {
    let env = react_env(&ConfigFixture::react());

    let removed = env.source().unwrap().remove_component("button").unwrap();

    assert!(removed.is_empty());
}
