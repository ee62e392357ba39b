//! External command execution.
//!
//! Used only to regenerate framework-owned path-mapping files
//! (`svelte-kit sync`, `nuxi prepare`).

use std::path::PathBuf;
use std::process::Command;
use tracing::{debug, info};

use crate::core::{Result, SyncError};

/// Runs a command in the project and returns its stdout when it succeeds.
pub trait CommandRunner: Send + Sync {
    fn run(&self, args: &[String]) -> Result<Option<String>>;
}

/// [`CommandRunner`] that spawns real processes in the project root.
pub struct ProcessRunner {
    working_dir: PathBuf,
}

impl ProcessRunner {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, args: &[String]) -> Result<Option<String>> {
        let Some((program, rest)) = args.split_first() else {
            return Ok(None);
        };
        let command_line = args.join(" ");

        let executable = which::which(program).map_err(|e| SyncError::CommandFailed {
            command: command_line.clone(),
            reason: format!("{program} not found in PATH: {e}"),
        })?;

        info!("Running {command_line}");
        let output = Command::new(executable)
            .args(rest)
            .current_dir(&self.working_dir)
            .output()
            .map_err(|e| SyncError::CommandFailed {
                command: command_line.clone(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(SyncError::CommandFailed {
                command: command_line,
                reason: if stderr.is_empty() { output.status.to_string() } else { stderr },
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!("{command_line} finished: {}", stdout.trim());
        Ok(Some(stdout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_command_is_noop() {
        let runner = ProcessRunner::new(".");
        assert_eq!(runner.run(&[]).unwrap(), None);
    }

    #[test]
    fn test_missing_program_fails() {
        let runner = ProcessRunner::new(".");
        let err = runner.run(&["compsync-definitely-missing-binary".to_string()]).unwrap_err();
        assert!(matches!(err, SyncError::CommandFailed { .. }));
    }
}
