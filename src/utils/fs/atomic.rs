//! Atomic file write operations using temp-and-rename strategy.
//!
//! A component file is either fully written or left untouched; readers never
//! observe a half-written source file.

use crate::utils::fs::dirs::ensure_dir;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Atomically writes bytes to a file using a write-then-rename strategy.
///
/// 1. Creates missing parent directories
/// 2. Writes the content to a sibling temporary file and syncs it
/// 3. Renames the temporary file over the target
///
/// # Examples
///
/// ```rust,no_run
/// use compsync::utils::fs::atomic_write;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// atomic_write(Path::new("src/components/ui/button.tsx"), b"export {}")?;
/// # Ok(())
/// # }
/// ```
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    use std::io::Write;

    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    let temp_path = match path.file_name() {
        Some(name) => path.with_file_name(format!(".{}.tmp", name.to_string_lossy())),
        None => return Err(anyhow::anyhow!("Not a file path: {}", path.display())),
    };

    {
        let mut file = fs::File::create(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

        file.write_all(content)
            .with_context(|| format!("Failed to write to temp file: {}", temp_path.display()))?;

        file.sync_all().with_context(|| "Failed to sync file to disk")?;
    }

    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_creates_parents() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("src/components/ui/button.tsx");

        atomic_write(&target, b"export const Button = 1").unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "export const Button = 1");
        assert!(!temp.path().join("src/components/ui/.button.tsx.tmp").exists());
    }

    #[test]
    fn test_atomic_write_overwrites() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("utils.ts");

        atomic_write(&target, b"old").unwrap();
        atomic_write(&target, b"new").unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
    }
}
