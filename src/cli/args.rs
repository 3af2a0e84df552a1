//! CLI argument definitions using clap.
//!
//! `avail` has a single mode of operation, so there are no subcommands: the
//! scan root is positional and everything else is a flag. Values left unset
//! here fall back to `.availrc.json`, then to built-in defaults.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Directory to scan for Swift files
    pub directory: PathBuf,

    /// iOS version for the annotation, also used for tvOS [default: 15.0]
    #[arg(long, value_name = "VERSION")]
    pub ios_version: Option<String>,

    /// macOS version for the annotation [default: 12.0]
    #[arg(long, value_name = "VERSION")]
    pub macos_version: Option<String>,

    /// watchOS version for the annotation [default: 8.0]
    #[arg(long, value_name = "VERSION")]
    pub watchos_version: Option<String>,

    /// Show what would be changed without modifying any file
    #[arg(long)]
    pub dry_run: bool,

    /// Exclude files whose path relative to DIRECTORY matches this glob
    /// Can be specified multiple times: --exclude 'Generated/**' --exclude '*Mock*'
    #[arg(long, value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Include test files (excluded by default)
    #[arg(long)]
    pub include_tests: bool,

    /// Exit with a non-zero status if any file could not be processed
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
