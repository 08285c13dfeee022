//! Structural verification of produced delivery files.

use crate::external::StreamProber;

use std::path::Path;

/// Confirms that `output` holds a decodable, non-empty video stream.
///
/// Passes only when the probe runs cleanly and reports a positive
/// readable-packet count for the first video stream. Every failure shape
/// (launch failure, unclean exit, unparseable or zero count) yields plain
/// `false`; verification never raises an error into the pipeline.
pub fn verify_output<P: StreamProber>(prober: &P, output: &Path) -> bool {
    match prober.count_readable_packets(output) {
        Ok(count) if count > 0 => true,
        Ok(_) => {
            log::debug!("{}: zero readable packets", output.display());
            false
        }
        Err(e) => {
            log::debug!("{}: verification probe failed: {e}", output.display());
            false
        }
    }
}
