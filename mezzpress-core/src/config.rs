//! Runtime configuration for a conversion run.

use std::path::PathBuf;

/// Configuration for one conversion run.
///
/// Constructed by the caller (typically the CLI) and handed to
/// [`run_pipeline`](crate::processing::run_pipeline). Scoped to a single
/// run; there is no process-wide state.
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Root directory scanned for convertible source files.
    pub input_dir: PathBuf,
}

impl CoreConfig {
    /// Creates a configuration rooted at `input_dir`.
    pub fn new(input_dir: PathBuf) -> Self {
        Self { input_dir }
    }
}
