//! Terminal spinner for long-running registry operations.
//!
//! Hidden when stderr is not a terminal or when `COMPSYNC_NO_PROGRESS` is set, so
//! scripted output stays clean.

use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

fn is_progress_disabled() -> bool {
    std::env::var("COMPSYNC_NO_PROGRESS").is_ok() || !std::io::stderr().is_terminal()
}

/// A spinner that can be silenced.
#[derive(Clone)]
pub struct Spinner {
    inner: ProgressBar,
}

impl Spinner {
    /// Starts a spinner with the given message, or a hidden one when `enabled` is false.
    pub fn start(message: impl Into<String>, enabled: bool) -> Self {
        let inner = if !enabled || is_progress_disabled() {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
                bar.set_style(style);
            }
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        };
        inner.set_message(message.into());
        Self { inner }
    }

    pub fn set_message(&self, message: impl Into<String>) {
        self.inner.set_message(message.into());
    }

    /// Clears the spinner line.
    pub fn finish(&self) {
        self.inner.finish_and_clear();
    }
}
