use std::{
    fs,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::{Pattern, PatternError};
use walkdir::{DirEntry, WalkDir};

use crate::config::{SKIPPED_DIR_NAMES, SOURCE_EXTENSION};

/// Result of scanning files.
pub struct ScanResult {
    /// Root the scan ran from, canonicalized when possible.
    pub root: PathBuf,
    /// Matching source files, sorted.
    pub files: Vec<PathBuf>,
    /// Entries that could not be read during traversal.
    pub skipped_count: usize,
}

/// Collect every Swift file under `root` that is not excluded.
///
/// Hidden directories and build output directories are pruned during the
/// walk. Exclude patterns are matched against the path relative to `root`;
/// patterns that fail to compile never match anything.
pub fn scan_files(root: &Path, exclude_patterns: &[String], verbose: bool) -> ScanResult {
    let root = fs::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());
    let patterns = compile_patterns(exclude_patterns, verbose);

    let mut files: Vec<PathBuf> = Vec::new();
    let mut skipped_count = 0;

    let walker = WalkDir::new(&root)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_pruned_dir(entry));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();

        if !path.is_file() || !is_source_file(path) {
            continue;
        }

        let relative = path.strip_prefix(&root).unwrap_or(path);
        if is_excluded(relative, &patterns) {
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();

    ScanResult {
        root,
        files,
        skipped_count,
    }
}

fn compile_patterns(exclude_patterns: &[String], verbose: bool) -> Vec<Pattern> {
    exclude_patterns
        .iter()
        .filter_map(|p| match compile_pattern(p) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid exclude pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    );
                }
                None
            }
        })
        .collect()
}

/// Compile an exclude pattern with shell `fnmatch` semantics.
///
/// `**` is only special to `glob` as a whole path component; anywhere else
/// it is collapsed to `*`, which already crosses `/` under the default
/// match options.
pub fn compile_pattern(pattern: &str) -> Result<Pattern, PatternError> {
    Pattern::new(&normalize_pattern(pattern))
}

fn normalize_pattern(pattern: &str) -> String {
    pattern
        .split('/')
        .map(|segment| {
            if segment == "**" {
                return segment.to_string();
            }
            let mut collapsed = String::with_capacity(segment.len());
            for c in segment.chars() {
                if c == '*' && collapsed.ends_with('*') {
                    continue;
                }
                collapsed.push(c);
            }
            collapsed
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn is_pruned_dir(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || SKIPPED_DIR_NAMES.iter().any(|skipped| name == *skipped)
}

fn is_source_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(SOURCE_EXTENSION)
}

fn is_excluded(relative: &Path, patterns: &[Pattern]) -> bool {
    let relative = relative.to_string_lossy();
    patterns.iter().any(|p| p.matches(&relative))
}
