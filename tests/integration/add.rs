use compsync::core::SyncError;
use compsync::test_utils::{ConfigFixture, fixtures};
use serde_json::json;

use super::react_env;

#[test]
fn test_add_installs_root_then_dependencies() {
    let env = react_env(&ConfigFixture::react());
    let source = env.source().unwrap();

    let report = source.add_component("dialog").unwrap();

    assert_eq!(report.components, vec!["dialog", "button"]);
    assert_eq!(
        report.files,
        vec!["src/components/ui/dialog.tsx", "src/components/ui/button.tsx"]
    );

    let dialog = env.read_file("src/components/ui/dialog.tsx").unwrap();
    assert_eq!(
        dialog,
        fixtures::REACT_DIALOG.replace("@/registry/new-york/ui/button", "@/components/ui/button")
    );

    let button = env.read_file("src/components/ui/button.tsx").unwrap();
    assert!(button.starts_with("\"use client\""));
    assert!(button.contains("import { cn } from \"@/lib/utils\""));
    // Class strings stay untouched with CSS variables on and no prefix.
    assert!(button.contains("bg-primary text-primary-foreground hover:bg-primary/90"));
    assert_eq!(env.registry.request_count("/colors/slate.json"), 0);
}

#[test]
fn test_add_is_idempotent() {
    let env = react_env(&ConfigFixture::react());
    let source = env.source().unwrap();

    source.add_component("button").unwrap();
    let first = env.read_file("src/components/ui/button.tsx").unwrap();

    source.add_component("button").unwrap();
    let second = env.read_file("src/components/ui/button.tsx").unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_add_skips_installed_dependencies() {
    let env = react_env(&ConfigFixture::react());
    env.create_file("src/components/ui/button.tsx", "// local edits\n").unwrap();
    let source = env.source().unwrap();

    let report = source.add_component("dialog").unwrap();

    assert_eq!(report.components, vec!["dialog"]);
    assert_eq!(env.read_file("src/components/ui/button.tsx").unwrap(), "// local edits\n");
    assert_eq!(env.registry.request_count("/button.json"), 0);
}

#[test]
fn test_add_fetches_shared_dependency_once() {
    let env = react_env(&ConfigFixture::react());
    let file = |name: &str| format!("export const {name} = 1\n");
    for (name, deps) in [("a", vec!["b", "c"]), ("b", vec!["d"]), ("c", vec!["d"]), ("d", vec![])] {
        let content = file(name);
        env.registry.set_component(
            "new-york",
            &fixtures::component(name, &deps, &[], &[(&format!("ui/{name}.tsx"), &content)]),
        );
    }

    let report = env.source().unwrap().add_component("a").unwrap();

    assert_eq!(report.components, vec!["a", "b", "c", "d"]);
    assert_eq!(env.registry.request_count("/new-york/d.json"), 1);
    assert!(env.file_exists("src/components/ui/d.tsx"));
}

#[test]
fn test_add_reports_missing_npm_dependencies() {
    let env = react_env(&ConfigFixture::react());
    env.create_file(
        "package.json",
        &json!({ "dependencies": { "@radix-ui/react-slot": "^1.0.0" } }).to_string(),
    )
    .unwrap();

    let report = env.source().unwrap().add_component("dialog").unwrap();

    assert_eq!(
        report.missing_dependencies,
        vec!["@radix-ui/react-dialog", "class-variance-authority"]
    );
}

#[test]
fn test_failed_add_writes_nothing() {
    let env = react_env(&ConfigFixture::react());
    env.registry.set_component(
        "new-york",
        &fixtures::component("broken", &["ghost"], &[], &[("ui/broken.tsx", "export {}\n")]),
    );

    let err = env.source().unwrap().add_component("broken").unwrap_err();

    assert!(matches!(err, SyncError::ComponentNotFound { ref name, .. } if name == "ghost"));
    assert!(!env.file_exists("src/components/ui/broken.tsx"));
}

#[test]
fn test_add_unknown_component_suggests_names() {
    let env = react_env(&ConfigFixture::react());
    let source = env.source().unwrap();

    let err = source.add_component("buton").unwrap_err();
    assert!(matches!(err, SyncError::ComponentNotFound { .. }));
    assert_eq!(source.suggest_components("buton"), vec!["button"]);
}

#[test]
fn test_add_with_static_colors_fetches_palette_once() {
    let env = react_env(&ConfigFixture::react().tailwind("cssVariables", json!(false)));

    env.source().unwrap().add_component("dialog").unwrap();

    let button = env.read_file("src/components/ui/button.tsx").unwrap();
    assert!(button.contains("bg-slate-900 dark:bg-slate-50"));
    assert!(button.contains("hover:bg-slate-900/90 dark:hover:bg-slate-50/90"));
    assert!(!button.contains("bg-primary"));
    // defaultVariants values are not class lists.
    assert!(button.contains("variant: \"default\""));
    assert_eq!(env.registry.request_count("/colors/slate.json"), 1);
}

#[test]
fn test_add_with_prefix() {
    let env = react_env(&ConfigFixture::react().tailwind("prefix", json!("tw-")));

    env.source().unwrap().add_component("dialog").unwrap();

    let dialog = env.read_file("src/components/ui/dialog.tsx").unwrap();
    assert!(dialog.contains("cn(\"tw-flex tw-gap-2\", className)"));
}

#[test]
fn test_add_javascript_project_adapts_extension() {
    let env = react_env(&ConfigFixture::react().set("tsx", json!(false)));
    env.create_file("jsconfig.json", &fixtures::react_tsconfig()).unwrap();

    let report = env.source().unwrap().add_component("button").unwrap();

    assert_eq!(report.files, vec!["src/components/ui/button.ts"]);
}

#[test]
fn test_add_rsc_strips_client_directive() {
    let env = react_env(&ConfigFixture::react().set("rsc", json!(true)));

    env.source().unwrap().add_component("button").unwrap();

    let button = env.read_file("src/components/ui/button.tsx").unwrap();
    assert!(button.starts_with("import * as React from \"react\""));
    assert!(!button.contains("use client"));
}

#[test]
fn test_add_without_rsc_keeps_client_directive() {
    let env = react_env(&ConfigFixture::react());

    env.source().unwrap().add_component("button").unwrap();

    let button = env.read_file("src/components/ui/button.tsx").unwrap();
    assert_eq!(button.lines().next(), Some("\"use client\""));
}
