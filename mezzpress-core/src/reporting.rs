//! Conversion results and the aggregate run report.

use std::path::{Path, PathBuf};

/// Outcome record for one discovered source file.
///
/// Exactly one of the constructors applies per file, and the record is
/// immutable afterwards:
/// - [`skipped`](Self::skipped): no transcode was attempted,
/// - [`failed`](Self::failed): a transcode was attempted and did not exit
///   cleanly,
/// - [`converted`](Self::converted): a clean transcode, carrying the
///   verification verdict.
///
/// The constructors enforce the record invariants: `verified` implies
/// `success`, and `error` is present exactly when `success` is false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    input: PathBuf,
    output: Option<PathBuf>,
    success: bool,
    verified: bool,
    error: Option<String>,
}

impl ConversionResult {
    /// No transcode was attempted: ineligible codec, probe failure, or an
    /// unsupported file reaching processing.
    pub fn skipped(input: PathBuf, error: impl Into<String>) -> Self {
        Self {
            input,
            output: None,
            success: false,
            verified: false,
            error: Some(error.into()),
        }
    }

    /// A transcode was attempted at `output` and the encoder failed.
    pub fn failed(input: PathBuf, output: PathBuf, error: impl Into<String>) -> Self {
        Self {
            input,
            output: Some(output),
            success: false,
            verified: false,
            error: Some(error.into()),
        }
    }

    /// The encoder exited cleanly; `verified` carries the verifier verdict.
    pub fn converted(input: PathBuf, output: PathBuf, verified: bool) -> Self {
        Self {
            input,
            output: Some(output),
            success: true,
            verified,
            error: None,
        }
    }

    /// Source path; always set.
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Delivery path; set only once a transcode was attempted.
    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    /// True only when the transcode process exited cleanly.
    pub fn success(&self) -> bool {
        self.success
    }

    /// True only when the output passed structural verification.
    pub fn verified(&self) -> bool {
        self.verified
    }

    /// Human-readable cause; present exactly when `success` is false.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Ordered results for one run, one per discovered file, in discovery
/// order.
#[derive(Debug, Clone, Default)]
pub struct ConversionReport {
    results: Vec<ConversionResult>,
}

impl ConversionReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: ConversionResult) {
        self.results.push(result);
    }

    pub fn results(&self) -> &[ConversionResult] {
        &self.results
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Results whose transcode did not succeed, skips included.
    pub fn failed(&self) -> impl Iterator<Item = &ConversionResult> {
        self.results.iter().filter(|r| !r.success())
    }

    /// Results with a clean transcode, verified or not.
    pub fn successful(&self) -> impl Iterator<Item = &ConversionResult> {
        self.results.iter().filter(|r| r.success())
    }

    /// Derived counts for the finished run.
    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            total: self.results.len(),
            succeeded: self.successful().count(),
            verified: self.results.iter().filter(|r| r.verified()).count(),
            failed: self.failed().count(),
        }
    }
}

/// Aggregate counts derived from a [`ConversionReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSummary {
    pub total: usize,
    pub succeeded: usize,
    pub verified: usize,
    pub failed: usize,
}
