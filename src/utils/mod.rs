//! Cross-cutting utilities: atomic file writes, path handling, lenient JSON
//! decoding, and terminal progress.

pub mod fs;
pub mod jsonc;
pub mod progress;

pub use fs::{atomic_write, ensure_dir, find_project_root, normalize_path};
pub use jsonc::strip_json_comments;
pub use progress::Spinner;
