//! FFmpeg invocation with the fixed delivery profile.
//!
//! The profile below is the single source of output quality and
//! compatibility. Any change to delivery characteristics happens in this
//! table, never through per-call parameters.

use crate::error::{command_failed_error, command_start_error, CoreResult};
use crate::external::Encoder;

use std::path::Path;
use std::process::Command;

/// Fixed encoding parameters applied to every transcode: H.264 High@4.1 in
/// 8-bit 4:2:0 at CRF 18 with a 50M bitrate ceiling, AAC-LC audio at 256k,
/// and a faststart MP4 container.
#[rustfmt::skip]
pub const DELIVERY_PROFILE: &[&str] = &[
    "-c:v", "libx264",          // H.264 video codec
    "-profile:v", "high",       // High profile for better quality
    "-level", "4.1",            // Level pinned for device compatibility
    "-pix_fmt", "yuv420p",      // 8-bit 4:2:0 for maximum compatibility
    "-preset", "slower",        // Quality/compression over encode speed
    "-crf", "18",               // Visually lossless constant quality
    "-maxrate", "50M",          // Bitrate ceiling to bound file size
    "-bufsize", "100M",         // Rate control buffer
    "-c:a", "aac",              // AAC audio codec
    "-profile:a", "aac_low",    // AAC-LC profile
    "-b:a", "256k",             // Audio bitrate
    "-movflags", "+faststart",  // Progressive playback optimization
    "-f", "mp4",                // Explicit container format
];

/// [`Encoder`] backed by the system `ffmpeg` binary.
#[derive(Debug, Clone, Default)]
pub struct CommandEncoder;

impl CommandEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl Encoder for CommandEncoder {
    fn encode(&self, input: &Path, output: &Path) -> CoreResult<()> {
        let mut cmd = Command::new("ffmpeg");
        cmd.arg("-i").arg(input);
        cmd.args(DELIVERY_PROFILE);
        // Overwrite an existing delivery file: rerunning on the same input
        // derives the same output path.
        cmd.arg("-y").arg(output);

        log::debug!("Running ffmpeg command: {cmd:?}");

        // .output() drains both pipes before the exit status is read; an
        // unread stderr buffer can deadlock ffmpeg on chatty encodes.
        let process_output = cmd.output().map_err(|e| command_start_error("ffmpeg", e))?;

        if !process_output.status.success() {
            let stderr = String::from_utf8_lossy(&process_output.stderr);
            log::debug!("ffmpeg stderr for {}:\n{}", input.display(), stderr.trim_end());
            return Err(command_failed_error(
                "ffmpeg",
                process_output.status,
                last_lines(&stderr, 5),
            ));
        }

        Ok(())
    }
}

/// Keeps the tail of ffmpeg's stderr for error messages; the full transcript
/// goes to the debug log only.
fn last_lines(text: &str, count: usize) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let start = lines.len().saturating_sub(count);
    lines[start..].join("\n")
}
