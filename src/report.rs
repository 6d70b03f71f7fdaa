// minipix/src/report.rs
use crate::core::Summary;
use colored::Colorize;
use std::io::{self, Write};
use std::path::PathBuf;

pub const HELP_TEXT: &str = "
    This tool scans a directory for image files and moves or copies images smaller than a specified size to a new directory.

    Usage:
        - The tool will prompt for a directory to scan.
        - It will identify all image files in the directory and subdirectories.
        - You can specify a minimum file size in KB (default is 90 KB).
        - Files smaller than that size are moved or copied to a new directory named with the current timestamp.

    Features:
        - Supports common image formats including .webp.
        - Displays statistics such as the total number of images found, moved, and their average sizes.
        - Offers an option to process another directory after completion.
        - Optionally deletes empty directories after processing.
        - Color-coded minimal text output for better readability.

    Arguments:
        -h, --help: Display this help message and exit.
";

pub fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", HELP_TEXT.green())
}

pub fn print_summary<W: Write>(out: &mut W, summary: &Summary) -> io::Result<()> {
    writeln!(out, "{}", format!("Total images found: {}", summary.total_found).yellow())?;
    writeln!(out, "{}", format!("Total images moved: {}", summary.total_moved).yellow())?;

    for stats in &summary.per_format {
        writeln!(
            out,
            "{}",
            format!(
                "{} - Found: {}, Moved: {}",
                stats.extension.to_uppercase(),
                stats.found,
                stats.moved
            )
            .blue()
        )?;
    }

    writeln!(
        out,
        "{}",
        format!("Average size of images found: {:.2} KB", summary.average_found_kb).yellow()
    )?;
    writeln!(
        out,
        "{}",
        format!("Average size of images moved: {:.2} KB", summary.average_moved_kb).yellow()
    )
}

pub fn print_pruned<W: Write>(out: &mut W, removed: &[PathBuf]) -> io::Result<()> {
    for dir in removed {
        writeln!(
            out,
            "{}",
            format!("Deleted empty directory: {}", dir.display()).magenta()
        )?;
    }
    Ok(())
}

pub fn print_notice<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{}", message.green())
}
