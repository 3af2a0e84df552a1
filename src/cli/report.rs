//! Progress and summary output.
//!
//! Every function writes to a caller-supplied writer so output can be
//! captured in tests. The run itself passes a locked stdout.

use std::io::{self, Write};

use colored::Colorize;

use crate::core::{FileOutcome, FileStatus, RunSummary};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print_scan_header<W: Write>(root: &str, writer: &mut W) {
    let _ = writeln!(writer, "Scanning for Swift files in: {}", root.cyan());
}

pub fn print_exclude_patterns<W: Write>(patterns: &[String], writer: &mut W) {
    if patterns.is_empty() {
        return;
    }
    let _ = writeln!(writer, "Excluding patterns: {}", patterns.join(", ").dimmed());
}

pub fn print_config_source<W: Write>(path: &str, writer: &mut W) {
    let _ = writeln!(writer, "Using config: {}", path.cyan());
}

pub fn print_files_found<W: Write>(count: usize, dry_run: bool, writer: &mut W) {
    let _ = writeln!(writer, "Found {} Swift file(s) to process", count);
    if dry_run {
        let _ = writeln!(
            writer,
            "{}",
            "DRY RUN MODE - No files will be modified".yellow().bold()
        );
    }
}

/// Warn about unreadable paths when verbose mode is not already listing them.
pub fn print_skipped_warning(count: usize, verbose: bool) {
    print_skipped_warning_to(count, verbose, &mut io::stderr().lock());
}

pub fn print_skipped_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} path(s) could not be accessed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

pub fn print_processing<W: Write>(relative_path: &str, writer: &mut W) {
    let _ = writeln!(writer);
    let _ = writeln!(writer, "{} {}", "Processing:".bold(), relative_path);
}

/// Print the per-declaration notices and the outcome line for one file.
pub fn print_file_outcome<W: Write>(
    outcome: &FileOutcome,
    relative_path: &str,
    verbose: bool,
    writer: &mut W,
) {
    let verb = match outcome.status {
        FileStatus::WouldModify => "Would add",
        _ => "Added",
    };
    for found in &outcome.inserted {
        let _ = writeln!(
            writer,
            "  {} @available to: {}",
            verb.green(),
            found.declaration
        );
    }

    if verbose {
        for (found, reason) in &outcome.skipped {
            let _ = writeln!(
                writer,
                "  {} line {}: {}",
                format!("Skipped ({})", reason).dimmed(),
                found.line(),
                found.declaration
            );
        }
    }

    let count = outcome.change_count();
    match outcome.status {
        FileStatus::Modified => {
            let _ = writeln!(
                writer,
                "{} Modified {} - added {} @available annotation(s)",
                SUCCESS_MARK.green(),
                relative_path,
                count
            );
        }
        FileStatus::WouldModify => {
            let _ = writeln!(
                writer,
                "{} {} - {} @available annotation(s)",
                "Would modify".yellow().bold(),
                relative_path,
                count
            );
        }
        FileStatus::Unchanged => {
            let _ = writeln!(writer, "{}", format!("No changes needed for {}", relative_path).dimmed());
        }
    }
}

pub fn print_file_error<W: Write>(relative_path: &str, error: &anyhow::Error, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} Error processing {}: {:#}",
        FAILURE_MARK.red(),
        relative_path,
        error
    );
}

pub fn print_summary<W: Write>(summary: &RunSummary, dry_run: bool, writer: &mut W) {
    let _ = writeln!(writer);
    let _ = writeln!(writer, "{}", "Summary:".bold());
    let _ = writeln!(writer, "  Total files scanned: {}", summary.files_scanned);
    let _ = writeln!(writer, "  Files modified: {}", summary.files_modified);
    let _ = writeln!(
        writer,
        "  Total annotations added: {}",
        summary.annotations_added
    );
    if summary.files_failed > 0 {
        let _ = writeln!(
            writer,
            "  {} {}",
            "Files failed:".red(),
            summary.files_failed
        );
    }

    if dry_run {
        let _ = writeln!(writer);
        let _ = writeln!(
            writer,
            "Run without {} to apply changes.",
            "--dry-run".cyan()
        );
    }
}
