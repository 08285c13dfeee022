//! Interactions with the external ffmpeg and ffprobe tools.
//!
//! The pipeline reaches the outside world only through the [`StreamProber`]
//! and [`Encoder`] traits defined here. The command-backed implementations
//! live in the submodules; tests substitute their own implementations, so
//! no real binary is ever spawned from a test.
//!
//! The core depends only on the documented contracts of the tools: exit
//! code zero means the invocation ran successfully, and probe output is
//! JSON metadata listing streams with `codec_type` and `codec_name`.

use crate::error::{CoreError, CoreResult};

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// ffmpeg argument building and the command-backed encoder
pub mod ffmpeg;

/// ffprobe invocation and output parsing
pub mod ffprobe;

// ----- Re-exports -----
pub use ffmpeg::{CommandEncoder, DELIVERY_PROFILE};
pub use ffprobe::{CommandProber, ProbeOutput, ProbeStream};

/// Probing capability: structured stream metadata plus readable-packet
/// counting for structural verification.
pub trait StreamProber {
    /// Returns parsed stream metadata for `path`.
    fn probe_streams(&self, path: &Path) -> CoreResult<ProbeOutput>;

    /// Returns the readable-packet count of the first video stream of
    /// `path`.
    fn count_readable_packets(&self, path: &Path) -> CoreResult<u64>;
}

/// Encoding capability: transcode `input` into `output` with the fixed
/// delivery profile. Succeeds only on a clean process exit.
pub trait Encoder {
    fn encode(&self, input: &Path, output: &Path) -> CoreResult<()>;
}

/// Checks that a required external command is available and executable.
///
/// Runs the command with `-version`, discarding its output. Used at startup
/// to surface a missing ffmpeg/ffprobe before the batch begins instead of
/// failing file by file.
pub fn check_dependency(cmd_name: &str) -> CoreResult<()> {
    let result = Command::new(cmd_name)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {cmd_name}");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{cmd_name}' not found.");
            Err(CoreError::DependencyNotFound(cmd_name.to_string()))
        }
        Err(e) => {
            log::error!("Failed to start dependency check command '{cmd_name}': {e}");
            Err(CoreError::CommandStart(cmd_name.to_string(), e))
        }
    }
}
