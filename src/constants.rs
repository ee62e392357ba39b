//! Global constants used throughout the compsync codebase.
//!
//! File names, registry layout, and the class-prefix table live here so the
//! magic strings shared across modules are defined once.

use std::time::Duration;

/// Name of the project's local configuration file.
pub const CONFIG_FILE_NAME: &str = "components.json";

/// Name of the project's npm manifest, read for missing-dependency detection.
pub const PACKAGE_MANIFEST: &str = "package.json";

/// Characters that mark an import specifier as a symbolic alias.
pub const ALIAS_SIGILS: &[char] = &['$', '@', '~'];

/// Utility-class prefixes that are rewritten when CSS variables are disabled.
///
/// `ring-offset-` must be tested before `ring-`.
pub const COLOR_CLASS_PREFIXES: &[&str] = &["bg-", "text-", "border-", "ring-offset-", "ring-"];

/// Functions whose string arguments hold utility classes.
pub const CLASS_BUILDER_FUNCTIONS: &[&str] = &["cn", "cva", "clsx", "tv"];

/// Default orchestration timeout for one CLI operation.
pub const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_secs(60);

/// User agent sent to the registries.
pub const DEFAULT_USER_AGENT: &str = concat!("compsync/", env!("CARGO_PKG_VERSION"));
