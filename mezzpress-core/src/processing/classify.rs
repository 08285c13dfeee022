//! Eligibility classification for discovered source files.
//!
//! Raw captures are always converted. Container files are probed and
//! accepted only when their first video stream carries a ProRes-family
//! codec; everything else is left untouched.

use crate::discovery::{MediaFile, SourceCategory};
use crate::error::{CoreError, CoreResult};
use crate::external::StreamProber;

/// Codec-name tokens marking the ProRes mezzanine family. Matched as
/// substrings of the lowercased codec name, so encoder variants such as
/// `prores_ks` and `prores_aw` are covered.
const MEZZANINE_CODEC_TOKENS: &[&str] = &["prores", "prores_ks"];

/// Classification outcome for a discovered file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    /// The file should be transcoded.
    Convert,
    /// Container whose video codec is outside the mezzanine family (or
    /// which has no video stream at all).
    NotMezzanine,
}

/// Returns true when `codec_name` belongs to the ProRes family.
pub fn is_mezzanine_codec(codec_name: &str) -> bool {
    !codec_name.is_empty()
        && MEZZANINE_CODEC_TOKENS
            .iter()
            .any(|token| codec_name.contains(token))
}

/// Decides whether `file` is eligible for transcoding.
///
/// Raw files are eligible without probing. Container files are probed
/// through `prober`; a probe failure propagates so the caller can record
/// the file as skipped with the cause. A file with an unsupported
/// extension should never reach this point, but is rejected with an error
/// rather than a panic if it does.
pub fn classify<P: StreamProber>(prober: &P, file: &MediaFile) -> CoreResult<Eligibility> {
    match file.category() {
        SourceCategory::Raw => Ok(Eligibility::Convert),
        SourceCategory::Container => {
            let probe = prober.probe_streams(file.path())?;
            let codec_name = probe.video_codec_name();
            if is_mezzanine_codec(&codec_name) {
                log::debug!(
                    "{}: ProRes stream detected ({codec_name})",
                    file.path().display()
                );
                Ok(Eligibility::Convert)
            } else {
                log::debug!(
                    "{}: video codec {codec_name:?} is not ProRes",
                    file.path().display()
                );
                Ok(Eligibility::NotMezzanine)
            }
        }
        SourceCategory::Unsupported => Err(CoreError::UnsupportedFile(
            file.path().display().to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mezzanine_codec_matching() {
        assert!(is_mezzanine_codec("prores"));
        assert!(is_mezzanine_codec("prores_ks"));
        assert!(is_mezzanine_codec("prores_aw"));
        assert!(!is_mezzanine_codec("h264"));
        assert!(!is_mezzanine_codec("dnxhd"));
        // No video stream probes as an empty name.
        assert!(!is_mezzanine_codec(""));
    }
}
