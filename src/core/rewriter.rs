//! Insertion of availability annotations into source files.
//!
//! [`annotate_source`] is the pure line transformation; [`rewrite_file`]
//! wraps it with the read / write of a single file.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::{
    annotation::AvailabilityAnnotation,
    declaration::{DeclarationMatch, SkipReason, find_declaration, skip_reason},
};

/// Result of annotating one file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedSource {
    /// The content with annotations inserted.
    pub content: String,
    /// Declarations that received an annotation, in file order.
    pub inserted: Vec<DeclarationMatch>,
    /// Declarations that matched a pattern but were left alone.
    pub skipped: Vec<(DeclarationMatch, SkipReason)>,
}

impl AnnotatedSource {
    pub fn change_count(&self) -> usize {
        self.inserted.len()
    }
}

/// Insert an annotation line above every eligible declaration in `content`.
///
/// Lines are split on `\n` only and joined back the same way, so untouched
/// content (including `\r` characters and a trailing newline) survives
/// byte for byte.
pub fn annotate_source(content: &str, annotation: &AvailabilityAnnotation) -> AnnotatedSource {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut output: Vec<String> = Vec::with_capacity(lines.len());
    let mut inserted = Vec::new();
    let mut skipped = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        if let Some(found) = find_declaration(&lines, index) {
            match skip_reason(&lines, index) {
                Some(reason) => skipped.push((found, reason)),
                None => {
                    output.push(annotation.line(&found.indentation));
                    inserted.push(found);
                }
            }
        }
        output.push((*line).to_string());
    }

    AnnotatedSource {
        content: output.join("\n"),
        inserted,
        skipped,
    }
}

/// What happened to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// Annotations were written to disk.
    Modified,
    /// Annotations were found but not written (dry run).
    WouldModify,
    /// Nothing to insert.
    Unchanged,
}

/// Outcome of processing one file.
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub status: FileStatus,
    pub inserted: Vec<DeclarationMatch>,
    pub skipped: Vec<(DeclarationMatch, SkipReason)>,
}

impl FileOutcome {
    pub fn change_count(&self) -> usize {
        self.inserted.len()
    }
}

/// Annotate a file in place.
///
/// In dry-run mode the file is only read. A file with no eligible
/// declaration is never written.
pub fn rewrite_file(
    path: &Path,
    annotation: &AvailabilityAnnotation,
    dry_run: bool,
) -> Result<FileOutcome> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let annotated = annotate_source(&content, annotation);

    let status = if annotated.change_count() == 0 {
        FileStatus::Unchanged
    } else if dry_run {
        FileStatus::WouldModify
    } else {
        fs::write(path, &annotated.content)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        FileStatus::Modified
    };

    Ok(FileOutcome {
        path: path.to_path_buf(),
        status,
        inserted: annotated.inserted,
        skipped: annotated.skipped,
    })
}
