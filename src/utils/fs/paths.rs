//! Path utilities for normalization and project root discovery.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::constants::CONFIG_FILE_NAME;

/// Lexically normalizes a path, dropping `.` and folding `..`.
///
/// Does not touch the file system.
#[must_use]
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            std::path::Component::CurDir => {}
            std::path::Component::ParentDir => {
                components.pop();
            }
            c => components.push(c),
        }
    }

    components.iter().collect()
}

/// Joins `/`-separated project-relative segments and normalizes the result.
///
/// Empty segments are skipped; the output always uses `/`.
#[must_use]
pub fn join_relative(segments: &[&str]) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for segment in segments {
        for part in segment.split('/') {
            match part {
                "" | "." => {}
                ".." => {
                    parts.pop();
                }
                p => parts.push(p),
            }
        }
    }
    parts.join("/")
}

/// Walks up from `start` until a directory holding `components.json` is found.
pub fn find_project_root(start: &Path) -> Result<PathBuf> {
    let mut current = start.canonicalize().unwrap_or_else(|_| start.to_path_buf());

    loop {
        if current.join(CONFIG_FILE_NAME).exists() {
            return Ok(current);
        }

        if !current.pop() {
            return Err(anyhow::anyhow!(
                "No {CONFIG_FILE_NAME} found in current directory or any parent directory"
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(Path::new("./src/../lib/./utils")), PathBuf::from("lib/utils"));
    }

    #[test]
    fn test_join_relative() {
        assert_eq!(join_relative(&[".svelte-kit", "../src/lib", "components"]), "src/lib/components");
        assert_eq!(join_relative(&["", "./src", ""]), "src");
        assert_eq!(join_relative(&["src/components/", "ui"]), "src/components/ui");
    }

    #[test]
    fn test_find_project_root_walks_up() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILE_NAME), "{}").unwrap();
        let nested = temp.path().join("src/app");
        std::fs::create_dir_all(&nested).unwrap();

        let root = find_project_root(&nested).unwrap();
        assert_eq!(root, temp.path().canonicalize().unwrap());
    }

    #[test]
    fn test_find_project_root_missing() {
        let temp = TempDir::new().unwrap();
        assert!(find_project_root(temp.path()).is_err());
    }
}
