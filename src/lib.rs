//! Avail - adds `@available` annotations to Swift declarations
//!
//! Avail is a CLI tool and library that walks a directory tree, finds
//! top-level `struct` and `extension` declarations in Swift files that are
//! not yet gated by an `@available` attribute, and inserts one above each.
//! A dry-run mode reports the changes without writing them.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, run orchestration, output)
//! - `config`: Constants and the optional `.availrc.json` file
//! - `core`: File discovery and annotation rewriting

pub mod cli;
pub mod config;
pub mod core;
