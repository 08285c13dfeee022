//! Conversion pipeline logic and orchestration.
//!
//! Submodules cover the per-file steps in order: eligibility classification,
//! the transcode itself, and structural verification of the result. The
//! `pipeline` module sequences them across a discovered batch.

/// Eligibility classification for discovered files
pub mod classify;

/// Batch orchestration across discovered files
pub mod pipeline;

/// Output path derivation and the transcode step
pub mod transcode;

/// Structural verification of produced delivery files
pub mod verify;

pub use pipeline::run_pipeline;
