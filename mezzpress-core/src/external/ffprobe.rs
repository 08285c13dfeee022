//! FFprobe integration for stream metadata and packet counting.
//!
//! Two invocation modes back the two pipeline questions: full stream
//! metadata as JSON (classification) and a readable-packet count for the
//! first video stream (verification).

use crate::error::{command_failed_error, command_start_error, CoreError, CoreResult};
use crate::external::StreamProber;

use serde::Deserialize;
use std::path::Path;
use std::process::Command;

/// Parsed ffprobe `-show_streams` output.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ProbeOutput {
    #[serde(default)]
    pub streams: Vec<ProbeStream>,
}

/// A single stream entry from ffprobe output. Only the fields the pipeline
/// inspects are kept; everything else in the JSON is ignored.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ProbeStream {
    pub codec_type: Option<String>,
    pub codec_name: Option<String>,
}

impl ProbeOutput {
    /// Lowercased codec name of the first video stream, or an empty string
    /// when no video stream is present.
    pub fn video_codec_name(&self) -> String {
        self.streams
            .iter()
            .find(|s| s.codec_type.as_deref() == Some("video"))
            .and_then(|s| s.codec_name.as_deref())
            .map(|name| name.to_ascii_lowercase())
            .unwrap_or_default()
    }
}

/// [`StreamProber`] backed by the system `ffprobe` binary.
#[derive(Debug, Clone, Default)]
pub struct CommandProber;

impl CommandProber {
    pub fn new() -> Self {
        Self
    }
}

impl StreamProber for CommandProber {
    fn probe_streams(&self, path: &Path) -> CoreResult<ProbeOutput> {
        log::debug!("Running ffprobe for stream metadata on: {}", path.display());

        let output = Command::new("ffprobe")
            .args(["-v", "quiet", "-print_format", "json", "-show_streams"])
            .arg(path)
            .output()
            .map_err(|e| command_start_error("ffprobe", e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            return Err(command_failed_error("ffprobe", output.status, stderr));
        }

        serde_json::from_slice(&output.stdout).map_err(|e| {
            CoreError::FfprobeParse(format!("stream metadata for {}: {e}", path.display()))
        })
    }

    fn count_readable_packets(&self, path: &Path) -> CoreResult<u64> {
        log::debug!("Running ffprobe packet count on: {}", path.display());

        let output = Command::new("ffprobe")
            .args([
                "-v",
                "error",
                "-select_streams",
                "v:0",
                "-count_packets",
                "-show_entries",
                "stream=nb_read_packets",
                "-of",
                "csv=p=0",
            ])
            .arg(path)
            .output()
            .map_err(|e| command_start_error("ffprobe", e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            return Err(command_failed_error("ffprobe", output.status, stderr));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let count_str = stdout.trim();
        count_str.parse::<u64>().map_err(|_| {
            CoreError::FfprobeParse(format!(
                "packet count for {}: {count_str:?} is not an integer",
                path.display()
            ))
        })
    }
}
