//! Core engine: file discovery and annotation rewriting.
//!
//! Nothing in here prints to stdout; the CLI layer renders the returned
//! values. The only exception is verbose warnings from the scanner, which go
//! to stderr.
//!
//! ## Module Structure
//!
//! - `file_scanner`: Walks the tree and applies exclude globs
//! - `declaration`: Declaration prefix patterns and skip rules
//! - `annotation`: The `@available` directive
//! - `rewriter`: Per-file read, annotate, write
//! - `summary`: Run totals

pub mod annotation;
pub mod declaration;
pub mod file_scanner;
pub mod rewriter;
pub mod summary;

pub use annotation::AvailabilityAnnotation;
pub use file_scanner::{ScanResult, scan_files};
pub use rewriter::{AnnotatedSource, FileOutcome, FileStatus, annotate_source, rewrite_file};
pub use summary::RunSummary;
