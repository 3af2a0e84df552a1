use super::rewriter::{FileOutcome, FileStatus};

/// Totals for a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of files handed to the rewriter.
    pub files_scanned: usize,
    /// Files with at least one annotation (written, or would be in a dry run).
    pub files_modified: usize,
    /// Annotations inserted, or that would be inserted in a dry run.
    pub annotations_added: usize,
    /// Files that could not be read or written.
    pub files_failed: usize,
}

impl RunSummary {
    pub fn new(files_scanned: usize) -> Self {
        Self {
            files_scanned,
            ..Default::default()
        }
    }

    pub fn record(&mut self, outcome: &FileOutcome) {
        if outcome.status != FileStatus::Unchanged {
            self.files_modified += 1;
        }
        self.annotations_added += outcome.change_count();
    }

    pub fn record_failure(&mut self) {
        self.files_failed += 1;
    }
}
