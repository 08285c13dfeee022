//! Batch orchestration: sequences classification, transcode, and
//! verification for each discovered file and accumulates the run report.
//!
//! Files are processed strictly sequentially in discovery order. Each
//! file's result is fully resolved, verification included, before the next
//! file starts, so at most one external process is alive at any instant.
//! Encoding saturates the machine on its own; parallel encodes were
//! considered and not pursued.

use crate::config::CoreConfig;
use crate::discovery::{self, MediaFile};
use crate::external::{Encoder, StreamProber};
use crate::processing::classify::{self, Eligibility};
use crate::processing::{transcode, verify};
use crate::reporting::{ConversionReport, ConversionResult};

use log::{info, warn};

/// Error text recorded for container files outside the mezzanine family.
const NOT_MEZZANINE_ERROR: &str = "Not ProRes format";

/// Runs the full pipeline (discovery, classification, transcode,
/// verification) over `config.input_dir`.
///
/// Every fault that arises while processing a single file is folded into
/// that file's [`ConversionResult`]; nothing per-file aborts the batch. An
/// empty scan yields an empty report.
pub fn run_pipeline<P, E>(prober: &P, encoder: &E, config: &CoreConfig) -> ConversionReport
where
    P: StreamProber,
    E: Encoder,
{
    info!(
        "Scanning {} for .braw and .mov files (including subfolders)...",
        config.input_dir.display()
    );
    let files = discovery::find_convertible_files(&config.input_dir);
    info!("Found {} video file(s) to process", files.len());

    let mut report = ConversionReport::new();
    for file in &files {
        info!("Processing: {}", file.path().display());
        report.push(process_file(prober, encoder, file));
    }
    report
}

/// Resolves one file to its terminal state.
fn process_file<P, E>(prober: &P, encoder: &E, file: &MediaFile) -> ConversionResult
where
    P: StreamProber,
    E: Encoder,
{
    let input = file.path().to_path_buf();

    match classify::classify(prober, file) {
        Ok(Eligibility::Convert) => transcode_and_verify(prober, encoder, file),
        Ok(Eligibility::NotMezzanine) => {
            info!("Skipping {}: not ProRes", input.display());
            ConversionResult::skipped(input, NOT_MEZZANINE_ERROR)
        }
        Err(e) => {
            warn!("Skipping {}: {e}", input.display());
            ConversionResult::skipped(input, e.to_string())
        }
    }
}

fn transcode_and_verify<P, E>(prober: &P, encoder: &E, file: &MediaFile) -> ConversionResult
where
    P: StreamProber,
    E: Encoder,
{
    let input = file.path().to_path_buf();
    let (output, outcome) = transcode::transcode(encoder, file.path());

    match outcome {
        Ok(()) => {
            let verified = verify::verify_output(prober, &output);
            if verified {
                info!("Verification passed for {}", output.display());
            } else {
                warn!("Verification failed for {}", output.display());
            }
            ConversionResult::converted(input, output, verified)
        }
        Err(e) => {
            warn!("Conversion failed for {}: {e}", input.display());
            ConversionResult::failed(input, output, e.to_string())
        }
    }
}
