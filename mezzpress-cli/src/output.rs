// mezzpress-cli/src/output.rs
//
// Console narration for a conversion run. The core reports progress through
// the `log` facade; everything printed for the user lives here.

use colored::*;
use mezzpress_core::ConversionReport;
use std::path::Path;

/// Print a heading with colored styling and clear separation
pub fn print_heading(text: &str) {
    let line = "=".repeat(50).bright_blue();
    println!("\n{}", line);
    println!("{}", text.bold().bright_white());
    println!("{}", line);
}

pub fn print_run_started(root: &Path) {
    print_heading("Mezzpress Conversion Run");
    println!("{} {}", "Run started:".bold(), chrono::Local::now());
    println!("{} {}", "Input folder:".bold(), root.display());
}

pub fn print_run_finished() {
    println!("{} {}", "Run finished:".bold(), chrono::Local::now());
}

/// Prints the final summary: aggregate counts, failed files with their
/// captured error text, and successful files with a verification marker.
pub fn print_summary(report: &ConversionReport) {
    let summary = report.summary();

    print_heading("CONVERSION SUMMARY");
    println!("Total files processed: {}", summary.total);
    println!(
        "Successfully converted: {}",
        summary.succeeded.to_string().green().bold()
    );
    println!(
        "Verified as working: {}",
        summary.verified.to_string().green()
    );
    let failed_count = if summary.failed > 0 {
        summary.failed.to_string().red().bold()
    } else {
        summary.failed.to_string().normal()
    };
    println!("Failed conversions: {}", failed_count);

    if summary.failed > 0 {
        println!("\nFailed files:");
        for result in report.failed() {
            println!(
                "  {} {}: {}",
                "[FAIL]".red().bold(),
                file_name(result.input()),
                result.error().unwrap_or("unknown error")
            );
        }
    }

    if summary.succeeded > 0 {
        println!("\nSuccessful conversions:");
        for result in report.successful() {
            let marker = if result.verified() {
                "[OK]".green()
            } else {
                "[WARN]".yellow()
            };
            let output = result
                .output()
                .map(file_name)
                .unwrap_or_else(|| "?".to_string());
            println!(
                "  {} {} -> {}",
                marker,
                file_name(result.input()),
                output
            );
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
