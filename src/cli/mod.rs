//! Command-line interface for compsync.
//!
//! The CLI is the orchestration layer around the synchronous core: it finds
//! the project, loads the tool settings, installs logging, and runs each core
//! operation on a blocking worker under the configured timeout.
//!
//! # Available Commands
//!
//! - `list` - Components offered by the registry, or installed ones with `--installed`
//! - `styles` - Styles offered by the registry
//! - `add` - Install components and their registry dependencies
//! - `remove` - Delete installed components
//! - `check` - Compare installed components with the registry
//! - `update` - Re-install components whose files differ from the registry
//!
//! # Basic Workflow
//!
//! ```bash
//! compsync list
//! compsync add button dialog
//! compsync check --strict
//! compsync update
//! compsync remove dialog
//! ```
//!
//! # Global Options
//!
//! - `--verbose` - Debug logging
//! - `--quiet` - Errors only, no progress spinner
//! - `--project-dir <DIR>` - Project directory instead of searching upwards
//! - `--settings <FILE>` - Tool settings file instead of the default location
//! - `--no-progress` - Disable the progress spinner

mod add;
mod check;
pub mod common;
mod list;
mod remove;
mod styles;
mod update;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use common::CommandContext;

/// Options derived from the global flags, passed to every command
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log filter directive; `None` falls back to `RUST_LOG`, then `warn`
    pub log_level: Option<String>,
    /// Whether spinners may be shown
    pub progress: bool,
    pub project_dir: Option<PathBuf>,
    pub settings_path: Option<PathBuf>,
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the global tracing subscriber. Later calls are no-ops.
    pub fn init_logging(&self) {
        let filter = match &self.log_level {
            Some(level) => EnvFilter::new(level),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

/// Keep shadcn-style UI components in sync with their registry.
#[derive(Parser)]
#[command(
    name = "compsync",
    about = "Sync UI components from shadcn-style registries into your project",
    version,
    long_about = "compsync installs, checks, updates and removes components from the shadcn, \
                  shadcn-vue, shadcn-svelte, shadcn-solid and solid-ui registries, rewriting \
                  them for the project's aliases and Tailwind settings."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only print errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Project directory containing components.json.
    ///
    /// By default the current directory and its parents are searched.
    #[arg(long, global = true, env = "COMPSYNC_PROJECT_DIR")]
    project_dir: Option<PathBuf>,

    /// Path to the tool settings file (TOML).
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Disable the progress spinner.
    #[arg(long, global = true)]
    no_progress: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List components offered by the registry, or installed ones.
    List(list::ListCommand),

    /// List styles offered by the registry.
    Styles(styles::StylesCommand),

    /// Install components together with their registry dependencies.
    Add(add::AddCommand),

    /// Delete installed components.
    Remove(remove::RemoveCommand),

    /// Report whether installed components match the registry.
    Check(check::CheckCommand),

    /// Re-install components whose local files differ from the registry.
    Update(update::UpdateCommand),
}

impl Cli {
    /// Execute the CLI with the configuration built from its flags.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("compsync=debug".to_string())
        } else if self.quiet {
            Some("error".to_string())
        } else {
            None
        };

        CliConfig {
            log_level,
            progress: !self.quiet && !self.no_progress,
            project_dir: self.project_dir.clone(),
            settings_path: self.settings.clone(),
        }
    }

    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.init_logging();

        let ctx = CommandContext::new(config.project_dir.clone(), config.settings_path.clone())?;

        match self.command {
            Commands::List(cmd) => cmd.execute(&ctx, &config).await,
            Commands::Styles(cmd) => cmd.execute(&ctx, &config).await,
            Commands::Add(cmd) => cmd.execute(&ctx, &config).await,
            Commands::Remove(cmd) => cmd.execute(&ctx, &config).await,
            Commands::Check(cmd) => cmd.execute(&ctx, &config).await,
            Commands::Update(cmd) => cmd.execute(&ctx, &config).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_config_verbosity() {
        let cli = Cli::parse_from(["compsync", "--verbose", "list"]);
        assert_eq!(cli.build_config().log_level.as_deref(), Some("compsync=debug"));
        assert!(cli.build_config().progress);

        let cli = Cli::parse_from(["compsync", "list", "--quiet"]);
        let config = cli.build_config();
        assert_eq!(config.log_level.as_deref(), Some("error"));
        assert!(!config.progress);
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["compsync", "-v", "-q", "list"]).is_err());
    }

    #[test]
    fn test_global_paths() {
        let cli = Cli::parse_from([
            "compsync",
            "add",
            "button",
            "--project-dir",
            "web",
            "--settings",
            "compsync.toml",
        ]);
        let config = cli.build_config();
        assert_eq!(config.project_dir, Some(PathBuf::from("web")));
        assert_eq!(config.settings_path, Some(PathBuf::from("compsync.toml")));
    }
}
