//! Common plumbing for CLI commands
//!
//! The core is synchronous and blocking. Commands therefore run each core
//! operation on tokio's blocking pool under the configured timeout, building
//! the collaborators (disk project, process runner, HTTP transport) inside the
//! blocking task so the blocking HTTP client never lives on the async runtime.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use crate::config::Settings;
use crate::constants::CONFIG_FILE_NAME;
use crate::core::SyncError;
use crate::project::{LocalProject, ProcessRunner};
use crate::registry::HttpTransport;
use crate::source::Source;
use crate::utils::fs::{find_project_root, normalize_path};

/// Project location and tool settings shared by every command
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Directory containing `components.json`
    pub project_dir: PathBuf,
    pub settings: Settings,
}

impl CommandContext {
    /// Locates the project and loads the tool settings.
    ///
    /// Without `project_dir`, walks up from the current directory until a
    /// `components.json` is found.
    pub fn new(project_dir: Option<PathBuf>, settings_path: Option<PathBuf>) -> Result<Self> {
        let settings = Settings::load(settings_path)?;

        let project_dir = match project_dir {
            Some(dir) => {
                let dir = if dir.is_absolute() {
                    dir
                } else {
                    std::env::current_dir()?.join(dir)
                };
                normalize_path(&dir)
            }
            None => {
                let cwd = std::env::current_dir().context("Cannot read the current directory")?;
                find_project_root(&cwd).map_err(|_| SyncError::ConfigNotFound {
                    path: cwd.join(CONFIG_FILE_NAME).display().to_string(),
                })?
            }
        };

        if !project_dir.join(CONFIG_FILE_NAME).is_file() {
            return Err(SyncError::ConfigNotFound {
                path: project_dir.join(CONFIG_FILE_NAME).display().to_string(),
            }
            .into());
        }

        debug!("Using project at {}", project_dir.display());
        Ok(Self {
            project_dir,
            settings,
        })
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Runs `operation` against a freshly opened [`Source`] on the blocking pool.
    ///
    /// Fails with a timeout error when the operation exceeds the configured
    /// timeout. The timed-out task is abandoned, not cancelled.
    pub async fn run<T, F>(&self, operation: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Source) -> crate::core::Result<T> + Send + 'static,
    {
        let project_dir = self.project_dir.clone();
        let settings = self.settings.clone();
        let timeout = settings.timeout();

        let task = tokio::task::spawn_blocking(move || {
            let transport = Arc::new(HttpTransport::new(settings.user_agent()));
            let project = Arc::new(LocalProject::new(&project_dir));
            let runner = Arc::new(ProcessRunner::new(&project_dir));
            let source = Source::open(project, runner, transport, settings)?;
            operation(&source)
        });

        let result = tokio::time::timeout(timeout, task)
            .await?
            .context("Background operation panicked")?;
        Ok(result?)
    }
}
