//! compsync - UI component registry sync engine
//!
//! Installs, checks, updates and removes UI components published by
//! shadcn-style registries (shadcn, shadcn-vue, shadcn-svelte, shadcn-solid and
//! solid-ui), rewriting each file for the consuming project on the way in.
//!
//! # Architecture Overview
//!
//! A project is described by its `components.json`. From it compsync detects the
//! framework, derives the registry to talk to, and learns how the project wants
//! components rewritten:
//!
//! - Registry import paths are replaced by the project's aliases
//! - `"use client"` directives are dropped for React projects configured for RSC
//! - Semantic color utilities become static light/dark pairs when CSS variables are off
//! - A Tailwind prefix is applied to every utility class
//! - `.tsx`/`.jsx` files become `.ts`/`.js` for JavaScript projects
//!
//! Aliases in `components.json` are resolved to project directories through
//! the framework's path-mapping file (`tsconfig.json`, `jsconfig.json`, or the
//! one generated by `svelte-kit sync`).
//!
//! The same transformation pipeline runs for installing and for the up-to-date
//! check, so a freshly installed component always compares equal to the registry.
//!
//! # Core Modules
//!
//! - [`config`] - `components.json` models, framework detection, tool settings
//! - [`registry`] - Registry HTTP client and wire models
//! - [`alias`] - Alias resolution through path-mapping files
//! - [`transform`] - Import, directive, class and extension rewriting
//! - [`resolver`] - Registry dependency closure
//! - [`source`] - The source adapter tying the pieces together
//! - [`project`] - Project file access and external command seams
//! - [`cli`] - Command-line interface
//!
//! ## Supporting Modules
//!
//! - [`core`] - Error types and user-facing error formatting
//! - [`utils`] - File system helpers, JSONC parsing, progress display
//! - [`constants`] - Shared constants
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use compsync::config::Settings;
//! use compsync::project::{LocalProject, ProcessRunner};
//! use compsync::registry::HttpTransport;
//! use compsync::source::Source;
//!
//! # fn example() -> compsync::core::Result<()> {
//! let settings = Settings::default();
//! let source = Source::open(
//!     Arc::new(LocalProject::new("./web")),
//!     Arc::new(ProcessRunner::new("./web")),
//!     Arc::new(HttpTransport::new(settings.user_agent())),
//!     settings,
//! )?;
//!
//! let report = source.add_component("dialog")?;
//! println!("installed {:?}", report.components);
//! # Ok(())
//! # }
//! ```

pub mod alias;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod project;
pub mod registry;
pub mod resolver;
pub mod source;
pub mod transform;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
