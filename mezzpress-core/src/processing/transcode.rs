//! Transcode step: output path derivation and encoder invocation.

use crate::error::CoreResult;
use crate::external::Encoder;

use std::path::{Path, PathBuf};

/// Derives the delivery path for `input`: same directory, same base name,
/// `.mp4` extension.
///
/// The derivation is deterministic, so rerunning the pipeline on an
/// unchanged tree produces the same path and overwrites the previous
/// delivery file instead of duplicating it.
pub fn derive_output_path(input: &Path) -> PathBuf {
    input.with_extension("mp4")
}

/// Transcodes `input` into its derived delivery path.
///
/// Returns the output path together with the encode outcome so the caller
/// can record the attempted path even when the encode fails. A failed run
/// may leave a partial file at that path; it is not cleaned up.
pub fn transcode<E: Encoder>(encoder: &E, input: &Path) -> (PathBuf, CoreResult<()>) {
    let output = derive_output_path(input);
    log::info!("Converting to: {}", output.display());
    let outcome = encoder.encode(input, &output);
    (output, outcome)
}
