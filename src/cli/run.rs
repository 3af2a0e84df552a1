//! Run orchestration.
//!
//! Discovery and rewriting are two separate phases: every file is located
//! before the first one is touched, then files are rewritten one at a time
//! in the scanner's (sorted) order. A failing file is reported and counted;
//! it never stops the run.

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::Result;

use super::{args::Arguments, report};
use crate::{
    config::{
        Config, DEFAULT_IOS_VERSION, DEFAULT_MACOS_VERSION, DEFAULT_WATCHOS_VERSION,
        TEST_FILE_PATTERNS, load_config,
    },
    core::{AvailabilityAnnotation, RunSummary, rewrite_file, scan_files},
};

/// Settings for one run, after merging flags, config file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub root: PathBuf,
    pub annotation: AvailabilityAnnotation,
    pub dry_run: bool,
    pub exclude_patterns: Vec<String>,
    pub verbose: bool,
}

impl RunOptions {
    /// Merge command-line arguments over a loaded config.
    ///
    /// Exclude patterns from the config come first, then those from the
    /// command line, then the default test patterns unless tests are
    /// included by either source.
    pub fn resolve(args: &Arguments, config: Config) -> Self {
        let annotation = AvailabilityAnnotation {
            ios: pick(&args.ios_version, config.ios_version, DEFAULT_IOS_VERSION),
            macos: pick(&args.macos_version, config.macos_version, DEFAULT_MACOS_VERSION),
            watchos: pick(
                &args.watchos_version,
                config.watchos_version,
                DEFAULT_WATCHOS_VERSION,
            ),
        };

        let mut exclude_patterns = config.exclude;
        exclude_patterns.extend(args.exclude.iter().cloned());
        if !(args.include_tests || config.include_tests) {
            exclude_patterns.extend(TEST_FILE_PATTERNS.iter().map(|p| p.to_string()));
        }

        Self {
            root: args.directory.clone(),
            annotation,
            dry_run: args.dry_run,
            exclude_patterns,
            verbose: args.verbose,
        }
    }
}

fn pick(flag: &Option<String>, configured: Option<String>, default: &str) -> String {
    flag.clone()
        .or(configured)
        .unwrap_or_else(|| default.to_string())
}

pub fn run(args: Arguments) -> Result<RunSummary> {
    let loaded = load_config(&args.directory)?;
    let options = RunOptions::resolve(&args, loaded.config);

    let mut out = io::stdout().lock();
    if options.verbose
        && let Some(path) = &loaded.path
    {
        report::print_config_source(&path.display().to_string(), &mut out);
    }

    Ok(run_with_options(&options, &mut out))
}

/// Execute a run, writing progress to `writer`.
pub fn run_with_options<W: Write>(options: &RunOptions, writer: &mut W) -> RunSummary {
    report::print_scan_header(&options.root.display().to_string(), writer);
    report::print_exclude_patterns(&options.exclude_patterns, writer);

    let scan = scan_files(&options.root, &options.exclude_patterns, options.verbose);
    report::print_skipped_warning(scan.skipped_count, options.verbose);
    report::print_files_found(scan.files.len(), options.dry_run, writer);

    let mut summary = RunSummary::new(scan.files.len());
    for path in &scan.files {
        let relative = relative_display(path, &scan.root);
        report::print_processing(&relative, writer);

        match rewrite_file(path, &options.annotation, options.dry_run) {
            Ok(outcome) => {
                report::print_file_outcome(&outcome, &relative, options.verbose, writer);
                summary.record(&outcome);
            }
            Err(err) => {
                report::print_file_error(&relative, &err, writer);
                summary.record_failure();
            }
        }
    }

    report::print_summary(&summary, options.dry_run, writer);

    summary
}

fn relative_display(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
