//! Core library for batch video conversion using ffmpeg and ffprobe.
//!
//! This crate discovers raw camera captures (`.braw`) and ProRes containers
//! (`.mov`) under a directory tree, transcodes each eligible file into a
//! standardized H.264/AAC delivery MP4 colocated with its source, and
//! verifies that the produced file holds a decodable video stream. All pixel
//! and sample processing is delegated to the external tools; this crate
//! supplies discovery, eligibility decisions, process orchestration, and
//! reporting.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use mezzpress_core::{run_pipeline, CoreConfig};
//! use mezzpress_core::external::{CommandEncoder, CommandProber};
//! use std::path::PathBuf;
//!
//! let config = CoreConfig::new(PathBuf::from("/path/to/footage"));
//! let report = run_pipeline(&CommandProber::new(), &CommandEncoder::new(), &config);
//!
//! let summary = report.summary();
//! println!("{} of {} files converted", summary.succeeded, summary.total);
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod processing;
pub mod reporting;

// Re-exports for public API
pub use config::CoreConfig;
pub use discovery::{find_convertible_files, MediaFile, SourceCategory};
pub use error::{CoreError, CoreResult};
pub use processing::run_pipeline;
pub use reporting::{ConversionReport, ConversionResult, ReportSummary};
