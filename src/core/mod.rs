//! Core types shared by every compsync module.
//!
//! Currently this is the error taxonomy; see [`error`].

pub mod error;

pub use error::{ErrorContext, Result, SyncError, user_friendly_error};
