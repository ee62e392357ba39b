//! Error handling for compsync
//!
//! This module provides the error taxonomy of the component synchronizer and the
//! user-facing rendering of those errors. The error system follows two rules:
//! 1. **Distinguishable kinds**: every failure the core can surface maps to one
//!    [`SyncError`] variant so callers can react to it precisely
//! 2. **Actionable messages**: the CLI wraps errors in an [`ErrorContext`] that
//!    carries details and a suggestion
//!
//! # Error Categories
//!
//! - **Configuration**: [`SyncError::UnparseableConfig`], [`SyncError::ConfigNotFound`],
//!   [`SyncError::UnknownFramework`]
//! - **Registry**: [`SyncError::ComponentNotFound`], [`SyncError::InvalidComponentName`],
//!   [`SyncError::MalformedRegistryResponse`], [`SyncError::RegistryUnreachable`]
//! - **Project files**: [`SyncError::AliasNotFound`], [`SyncError::FileNotFound`],
//!   [`SyncError::FileSystemError`]
//! - **External commands**: [`SyncError::CommandFailed`]
//!
//! None of these errors are retried by the core. The only local recovery is the
//! one-shot path-mapping regeneration performed by the alias resolver.
//!
//! # Examples
//!
//! ```rust,no_run
//! use compsync::core::{SyncError, user_friendly_error};
//!
//! let error = SyncError::ComponentNotFound {
//!     name: "buton".to_string(),
//!     url: "https://ui.shadcn.com/registry/styles/default/buton.json".to_string(),
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for compsync operations
///
/// Each variant names one failure mode of the core. Variants carry owned strings so
/// the error can be cloned, logged, and moved across the orchestration boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// The local configuration file failed to parse or validate
    ///
    /// Non-retryable: the user has to fix the file by hand.
    #[error("Invalid configuration file {file}: {reason}")]
    UnparseableConfig {
        /// Path of the configuration file
        file: String,
        /// Parser or validation message
        reason: String,
    },

    /// No local configuration file exists in the project
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// Path where the configuration file was expected
        path: String,
    },

    /// The configuration file matched none of the known registry markers
    #[error("Could not determine the component framework from {file}")]
    UnknownFramework {
        /// Path of the configuration file that was inspected
        file: String,
    },

    /// The registry answered 404, an error status, or an empty body
    #[error("Component '{name}' not found in registry ({url})")]
    ComponentNotFound {
        /// Component (or registry resource) that was requested
        name: String,
        /// URL that was requested
        url: String,
    },

    /// A component name that cannot be used as a single path segment
    #[error("Invalid component name '{name}'")]
    InvalidComponentName {
        /// The rejected name
        name: String,
    },

    /// The registry answered successfully but the body could not be decoded
    #[error("Malformed registry response from {url}: {reason}")]
    MalformedRegistryResponse {
        /// URL that was requested
        url: String,
        /// Decoder message
        reason: String,
    },

    /// The request never produced an HTTP status
    #[error("Registry unreachable at {url}: {reason}")]
    RegistryUnreachable {
        /// URL that was requested
        url: String,
        /// Transport error message
        reason: String,
    },

    /// An alias key is absent from the path-mapping table
    #[error("Alias '{alias}' not found in {mapping_file}")]
    AliasNotFound {
        /// The alias being resolved
        alias: String,
        /// The path-mapping file that was consulted
        mapping_file: String,
    },

    /// A required local file is absent and could not be regenerated
    #[error("Required file not found: {path}")]
    FileNotFound {
        /// Project-relative path of the missing file
        path: String,
    },

    /// The file collaborator failed to read, write, list, or delete
    #[error("File system error during {operation} on {path}: {reason}")]
    FileSystemError {
        /// Operation that failed (e.g. "write", "delete")
        operation: String,
        /// Project-relative path involved
        path: String,
        /// Underlying error message
        reason: String,
    },

    /// An external command exited unsuccessfully or could not be spawned
    #[error("Command '{command}' failed: {reason}")]
    CommandFailed {
        /// The command line that was run
        command: String,
        /// Failure description
        reason: String,
    },

    /// Anything else
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

impl SyncError {
    /// Builds a [`SyncError::FileSystemError`] from an I/O error.
    pub fn io(operation: &str, path: &str, error: &std::io::Error) -> Self {
        Self::FileSystemError {
            operation: operation.to_string(),
            path: path.to_string(),
            reason: error.to_string(),
        }
    }
}

/// Result alias used by the core modules.
pub type Result<T> = std::result::Result<T, SyncError>;

/// Error wrapper that adds a suggestion and details for CLI display
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: SyncError,
    /// What the user can do about it
    pub suggestion: Option<String>,
    /// Additional background on the failure
    pub details: Option<String>,
}

impl ErrorContext {
    #[must_use]
    pub const fn new(error: SyncError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Prints the error to stderr with colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] suitable for display.
///
/// Known [`SyncError`]s get a tailored suggestion; anything else is rendered with its
/// full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(sync_error) = error.downcast_ref::<SyncError>() {
        return create_error_context(sync_error.clone());
    }

    if error.downcast_ref::<tokio::time::error::Elapsed>().is_some() {
        return ErrorContext::new(SyncError::Other {
            message: "Operation timed out".to_string(),
        })
        .with_suggestion("Check your network connection or raise timeout_secs in the settings file");
    }

    let mut message = error.to_string();
    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(SyncError::Other {
        message,
    })
}

fn create_error_context(error: SyncError) -> ErrorContext {
    match &error {
        SyncError::UnparseableConfig { file, .. } => {
            let suggestion = format!(
                "Fix the JSON in {file}. It needs at least 'style', 'tailwind' and 'aliases' entries"
            );
            ErrorContext::new(error)
                .with_suggestion(suggestion)
                .with_details("The configuration is read fresh on every command and is never repaired automatically")
        }

        SyncError::ConfigNotFound { .. } => ErrorContext::new(error)
            .with_suggestion("Run the registry's init command to create components.json, or pass --project-dir")
            .with_details("compsync looks for components.json in the current directory and its parents"),

        SyncError::UnknownFramework { .. } => ErrorContext::new(error)
            .with_suggestion("Make sure the '$schema' URL points at one of the supported registries")
            .with_details("Supported: ui.shadcn.com, shadcn-vue.com, shadcn-svelte.com, shadcn-solid.com, solid-ui.com"),

        SyncError::ComponentNotFound { .. } => ErrorContext::new(error)
            .with_suggestion("Run 'compsync list' to see the components the registry offers"),

        SyncError::InvalidComponentName { .. } => ErrorContext::new(error)
            .with_suggestion("Component names are single words such as 'button' or 'alert-dialog'"),

        SyncError::MalformedRegistryResponse { .. } => ErrorContext::new(error)
            .with_suggestion("The registry may be mid-deployment; try again later")
            .with_details("The registry returned a successful status with a body that is not the expected JSON"),

        SyncError::RegistryUnreachable { .. } => ErrorContext::new(error)
            .with_suggestion("Check your internet connection and any registry override in the settings file"),

        SyncError::AliasNotFound { alias, mapping_file } => {
            let suggestion = format!(
                "Add a path mapping for '{alias}' under compilerOptions.paths in {mapping_file}"
            );
            ErrorContext::new(error).with_suggestion(suggestion)
        }

        SyncError::FileNotFound { path } => {
            let suggestion = format!("Create {path} or run your framework's sync/prepare command");
            ErrorContext::new(error).with_suggestion(suggestion)
        }

        SyncError::FileSystemError { .. } => ErrorContext::new(error)
            .with_suggestion("Check file permissions in the project directory"),

        SyncError::CommandFailed { .. } => ErrorContext::new(error)
            .with_suggestion("Make sure Node.js and npx are installed and on your PATH"),

        SyncError::Other { .. } => ErrorContext::new(error),
    }
}
