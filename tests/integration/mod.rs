//! Integration test suite for compsync
//!
//! End-to-end tests that drive a [`Source`](compsync::source::Source) against a
//! temporary project on disk and an in-memory registry, plus CLI smoke tests
//! that run the compiled binary.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **add**: Installing components and their registry dependencies
//! - **check**: Up-to-date detection and outdated listing
//! - **remove**: Removing installed components
//! - **frameworks**: Svelte, Vue and Solid layouts and path-mapping files
//! - **cli**: Command-line behavior of the binary

mod add;
mod check;
mod cli;
mod frameworks;
mod remove;

use compsync::config::Framework;
use compsync::test_utils::{ConfigFixture, TestEnvironment, fixtures};
use serde_json::json;

/// React project with `button` and `dialog` (which needs `button`) in the registry.
pub fn react_env(config: &ConfigFixture) -> TestEnvironment {
    let env = TestEnvironment::with_project(
        Framework::React,
        config,
        Some(("tsconfig.json", &fixtures::react_tsconfig())),
    )
    .unwrap();

    env.registry.set_index(&json!([
        { "name": "button", "type": "components:ui", "dependencies": ["@radix-ui/react-slot"] },
        { "name": "dialog", "type": "components:ui", "registryDependencies": ["button"] }
    ]));
    env.registry.set_component(
        "new-york",
        &fixtures::component(
            "button",
            &[],
            &["@radix-ui/react-slot", "class-variance-authority"],
            &[("ui/button.tsx", fixtures::REACT_BUTTON)],
        ),
    );
    env.registry.set_component(
        "new-york",
        &fixtures::component(
            "dialog",
            &["button"],
            &["@radix-ui/react-dialog"],
            &[("ui/dialog.tsx", fixtures::REACT_DIALOG)],
        ),
    );
    env.registry.set_palette("slate", &fixtures::palette());
    env
}
