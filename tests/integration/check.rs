use compsync::test_utils::ConfigFixture;
use serde_json::json;

use super::react_env;

#[test]
fn test_fresh_install_is_up_to_date() {
    let env = react_env(&ConfigFixture::react().tailwind("cssVariables", json!(false)));
    let source = env.source().unwrap();

    source.add_component("dialog").unwrap();

    assert!(source.is_component_up_to_date("dialog").unwrap());
    assert!(source.is_component_up_to_date("button").unwrap());
    assert!(source.list_outdated().unwrap().is_empty());
}

#[test]
fn test_local_edit_is_outdated() {
    let env = react_env(&ConfigFixture::react());
    let source = env.source().unwrap();
    source.add_component("dialog").unwrap();

    let path = "src/components/ui/button.tsx";
    let edited = env.read_file(path).unwrap().replace("rounded-md", "rounded-lg");
    env.create_file(path, &edited).unwrap();

    assert!(!source.is_component_up_to_date("button").unwrap());
    assert_eq!(source.list_outdated().unwrap(), vec!["button"]);
}

#[test]
fn test_missing_file_is_outdated() {
    let env = react_env(&ConfigFixture::react());
    let source = env.source().unwrap();

    assert!(!source.is_component_up_to_date("button").unwrap());
}

#[test]
fn test_config_change_is_seen_by_next_check() {
    let env = react_env(&ConfigFixture::react());
    let source = env.source().unwrap();
    source.add_component("button").unwrap();
    assert!(source.is_component_up_to_date("button").unwrap());

    let config = ConfigFixture::react().tailwind("prefix", json!("tw-"));
    env.create_file("components.json", &config.render()).unwrap();

    assert!(!source.is_component_up_to_date("button").unwrap());
}

#[test]
fn test_list_installed_components() {
    let env = react_env(&ConfigFixture::react());
    env.create_file("src/components/ui/card.tsx", "").unwrap();
    env.create_file("src/components/ui/.DS_Store", "").unwrap();
    let source = env.source().unwrap();

    source.add_component("dialog").unwrap();

    assert_eq!(source.list_installed_components().unwrap(), vec!["button", "card", "dialog"]);
}

#[test]
fn test_unreachable_registry_counts_as_outdated() {
    let env = react_env(&ConfigFixture::react());
    let source = env.source().unwrap();
    source.add_component("button").unwrap();

    env.registry.set_offline(true);

    assert!(source.is_component_up_to_date("button").is_err());
    assert_eq!(source.list_outdated().unwrap(), vec!["button"]);
}

#[test]
fn test_list_available_components() {
    let env = react_env(&ConfigFixture::react());
    let source = env.source().unwrap();

    let names: Vec<_> =
        source.list_available_components().into_iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["button", "dialog"]);

    env.registry.set_offline(true);
    assert!(source.list_available_components().is_empty());
}

#[test]
fn test_fetch_styles() {
    let env = react_env(&ConfigFixture::react());
    env.registry.set_styles(&json!([
        { "name": "new-york", "label": "New York" },
        { "name": "default", "label": "Default" }
    ]));

    let styles = env.source().unwrap().fetch_styles().unwrap();
    assert_eq!(styles.len(), 2);
    assert_eq!(styles[0].name, "new-york");
    assert_eq!(styles[0].label, "New York");
}
