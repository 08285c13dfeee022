// mezzpress-cli/src/main.rs
//
// Command-line entry point for Mezzpress. Responsibilities:
// - Parsing the single optional root-directory argument.
// - Initializing logging (env_logger, RUST_LOG, default level info).
// - Validating the root and checking external tools before the batch.
// - Invoking the core pipeline and printing the final summary.
// - Exit code 0 on normal completion, per-file failures included; non-zero
//   only on a startup-level fault.

use clap::Parser;
use colored::*;
use mezzpress_core::external::{check_dependency, CommandEncoder, CommandProber};
use mezzpress_core::{run_pipeline, CoreConfig, CoreError};
use std::fs;
use std::path::PathBuf;
use std::process;

mod config;
mod output;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Mezzpress: batch conversion of BRAW and ProRes sources to delivery MP4s"
)]
struct Cli {
    /// Root directory to scan for .braw and .mov files (defaults to the
    /// built-in input folder)
    #[arg(value_name = "ROOT_DIR")]
    root: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let root = cli
        .root
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_INPUT_DIR));

    // Startup faults surface here with a non-zero exit; anything that goes
    // wrong per file later is reported in the summary instead.
    let metadata = fs::metadata(&root).map_err(|e| {
        CoreError::PathError(format!("Invalid input folder '{}': {}", root.display(), e))
    })?;
    if !metadata.is_dir() {
        return Err(CoreError::PathError(format!(
            "Input path '{}' is not a directory",
            root.display()
        ))
        .into());
    }
    // Canonicalize so the report carries absolute paths.
    let root = root.canonicalize().map_err(|e| {
        CoreError::PathError(format!(
            "Cannot resolve input folder '{}': {}",
            root.display(),
            e
        ))
    })?;

    check_dependency("ffmpeg")?;
    check_dependency("ffprobe")?;

    output::print_run_started(&root);

    let config = CoreConfig::new(root);
    let report = run_pipeline(&CommandProber::new(), &CommandEncoder::new(), &config);

    output::print_summary(&report);
    output::print_run_finished();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_args_uses_default_root() {
        let cli = Cli::parse_from(["mezzpress"]);
        assert!(cli.root.is_none());
    }

    #[test]
    fn test_parse_root_argument() {
        let cli = Cli::parse_from(["mezzpress", "/footage/card_a"]);
        assert_eq!(cli.root, Some(PathBuf::from("/footage/card_a")));
    }

    #[test]
    fn test_parse_rejects_extra_arguments() {
        let result = Cli::try_parse_from(["mezzpress", "one", "two"]);
        assert!(result.is_err());
    }
}
