use compsync::config::Framework;
use compsync::core::SyncError;
use compsync::test_utils::{ConfigFixture, FakeRunner, TestEnvironment, fixtures};

const SVELTE_BUTTON: &str = r#"<script lang="ts">
  import { cn } from "$lib/utils";
  let className = "";
  export { className as class };
</script>

<button class={cn("inline-flex rounded-md", className)}><slot /></button>
"#;

const VUE_BUTTON: &str = r#"<script setup lang="ts">
import { cn } from "@/lib/utils"
</script>

<template>
  <button :class="cn('inline-flex', $attrs.class ?? '')"><slot /></button>
</template>
"#;

fn svelte_env() -> TestEnvironment {
    let env = TestEnvironment::with_project(Framework::Svelte, &ConfigFixture::svelte(), None).unwrap();
    env.registry.set_component(
        "default",
        &fixtures::component(
            "button",
            &[],
            &["bits-ui"],
            &[
                ("button/button.svelte", SVELTE_BUTTON),
                ("button/index.ts", "export { default as Button } from \"./button.svelte\";\n"),
            ],
        ),
    );
    env
}

#[test]
fn test_svelte_installs_into_component_directory() {
    let env = svelte_env();
    let runner = FakeRunner::new().creating(
        env.project(),
        ".svelte-kit/tsconfig.json",
        &fixtures::svelte_kit_tsconfig(),
    );
    let env = env.with_runner(runner);
    let source = env.source().unwrap();

    let report = source.add_component("button").unwrap();

    assert_eq!(
        report.files,
        vec![
            "src/lib/components/ui/button/button.svelte",
            "src/lib/components/ui/button/index.ts"
        ]
    );
    assert_eq!(
        env.read_file("src/lib/components/ui/button/button.svelte").unwrap(),
        SVELTE_BUTTON
    );
    // The mapping file is generated once and reused afterwards.
    assert_eq!(env.runner.calls(), vec![vec!["npx", "svelte-kit", "sync"]]);

    assert_eq!(source.list_installed_components().unwrap(), vec!["button"]);
    assert!(source.is_component_up_to_date("button").unwrap());
    assert_eq!(env.runner.calls().len(), 1);

    let removed = source.remove_component("button").unwrap();
    assert_eq!(removed, vec!["src/lib/components/ui/button"]);
    assert!(!env.file_exists("src/lib/components/ui/button"));
}

#[test]
fn test_svelte_without_mapping_file_fails() {
    let env = svelte_env();

    let err = env.source().unwrap().add_component("button").unwrap_err();

    assert!(matches!(err, SyncError::FileNotFound { ref path } if path.contains(".svelte-kit/tsconfig.json")));
    assert_eq!(env.runner.calls().len(), 1);
    assert!(!env.file_exists("src/lib/components/ui/button"));
}

#[test]
fn test_vue_installs_into_component_directory() {
    let env = TestEnvironment::with_project(
        Framework::Vue,
        &ConfigFixture::vue(),
        Some(("tsconfig.json", &fixtures::react_tsconfig())),
    )
    .unwrap();
    env.registry.set_component(
        "default",
        &fixtures::component(
            "button",
            &[],
            &[],
            &[
                ("ui/button/Button.vue", VUE_BUTTON),
                ("ui/button/index.ts", "export { default as Button } from \"./Button.vue\"\n"),
            ],
        ),
    );
    let source = env.source().unwrap();
    assert_eq!(source.framework(), Framework::Vue);

    source.add_component("button").unwrap();

    assert_eq!(env.read_file("src/components/ui/button/Button.vue").unwrap(), VUE_BUTTON);
    assert!(env.file_exists("src/components/ui/button/index.ts"));
    assert_eq!(source.list_installed_components().unwrap(), vec!["button"]);
}

#[test]
fn test_solid_imports_without_style_segment() {
    let env = TestEnvironment::with_project(
        Framework::Solid,
        &ConfigFixture::solid(),
        Some(("tsconfig.json", &fixtures::solid_tsconfig())),
    )
    .unwrap();
    env.registry.set_component(
        "default",
        &fixtures::component("button", &[], &[], &[("ui/button.tsx", "export const Button = 1\n")]),
    );
    env.registry.set_component(
        "default",
        &fixtures::component(
            "dialog",
            &["button"],
            &[],
            &[(
                "ui/dialog.tsx",
                "import { cn } from \"~/lib/utils\"\nimport { Button } from \"~/registry/ui/button\"\n",
            )],
        ),
    );

    env.source().unwrap().add_component("dialog").unwrap();

    assert_eq!(
        env.read_file("src/components/ui/dialog.tsx").unwrap(),
        "import { cn } from \"~/lib/utils\"\nimport { Button } from \"~/components/ui/button\"\n"
    );
    assert!(env.file_exists("src/components/ui/button.tsx"));
}

#[test]
fn test_unknown_framework() {
    let env = TestEnvironment::new(Framework::React).unwrap();
    env.create_file("components.json", r#"{ "$schema": "https://example.com/schema.json" }"#)
        .unwrap();

    let err = env.source().err().unwrap();

    assert!(matches!(
        err.downcast_ref::<SyncError>(),
        Some(SyncError::UnknownFramework { .. })
    ));
}

#[test]
fn test_missing_config() {
    let env = TestEnvironment::new(Framework::React).unwrap();

    let err = env.source().err().unwrap();

    assert!(matches!(err.downcast_ref::<SyncError>(), Some(SyncError::ConfigNotFound { .. })));
}
