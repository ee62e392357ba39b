//! File system helpers used by the on-disk project collaborator.

pub mod atomic;
pub mod dirs;
pub mod paths;

pub use atomic::atomic_write;
pub use dirs::{ensure_dir, remove_path};
pub use paths::{find_project_root, join_relative, normalize_path};
