//! Collaborators that touch the user's project.
//!
//! The core never performs file or process I/O directly. It goes through
//! [`ProjectFiles`] for the project file tree and [`CommandRunner`] for the
//! one external command it may need (path-mapping regeneration). Paths are
//! project-relative and `/`-separated.

pub mod command;

pub use command::{CommandRunner, ProcessRunner};

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

use crate::core::{Result, SyncError};
use crate::utils::fs::{atomic_write, remove_path};

/// Synchronous access to the project file tree.
///
/// Every call either succeeds or returns an error; there is no partial success.
pub trait ProjectFiles: Send + Sync {
    /// Contents of a file, or `None` when it does not exist.
    fn read_file(&self, path: &str) -> Result<Option<String>>;

    /// Writes a file, creating parent directories.
    fn write_file(&self, path: &str, content: &str) -> Result<()>;

    /// Deletes a file or a directory tree. Deleting a missing path succeeds.
    fn delete_at_path(&self, path: &str) -> Result<()>;

    /// Names of the entries directly under a directory; empty when it is absent.
    fn list_files(&self, path: &str) -> Result<Vec<String>>;

    fn exists(&self, path: &str) -> bool;
}

/// [`ProjectFiles`] on the local disk, rooted at the project directory.
///
/// Writes are atomic per file and serialized through a mutex so concurrent
/// operations never interleave directory creation.
pub struct LocalProject {
    root: PathBuf,
    write_lock: Mutex<()>,
}

impl LocalProject {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            write_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn absolute(&self, path: &str) -> PathBuf {
        path.split('/').filter(|part| !part.is_empty()).fold(self.root.clone(), |acc, part| acc.join(part))
    }
}

impl ProjectFiles for LocalProject {
    fn read_file(&self, path: &str) -> Result<Option<String>> {
        let absolute = self.absolute(path);
        if !absolute.is_file() {
            return Ok(None);
        }
        std::fs::read_to_string(&absolute)
            .map(Some)
            .map_err(|e| SyncError::io("read", path, &e))
    }

    fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        debug!("Writing {path}");
        atomic_write(&self.absolute(path), content.as_bytes()).map_err(|e| {
            SyncError::FileSystemError {
                operation: "write".to_string(),
                path: path.to_string(),
                reason: format!("{e:#}"),
            }
        })
    }

    fn delete_at_path(&self, path: &str) -> Result<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        debug!("Deleting {path}");
        remove_path(&self.absolute(path)).map_err(|e| SyncError::FileSystemError {
            operation: "delete".to_string(),
            path: path.to_string(),
            reason: format!("{e:#}"),
        })
    }

    fn list_files(&self, path: &str) -> Result<Vec<String>> {
        let absolute = self.absolute(path);
        if !absolute.is_dir() {
            return Ok(Vec::new());
        }
        let entries = std::fs::read_dir(&absolute).map_err(|e| SyncError::io("list", path, &e))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| SyncError::io("list", path, &e))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    fn exists(&self, path: &str) -> bool {
        self.absolute(path).exists()
    }
}
