//! Recognition of candidate type declarations.
//!
//! Matching is line based: a trimmed line is tested against a fixed,
//! ordered list of declaration prefixes. No Swift grammar is involved, so
//! multi-line declarations, string literals and commented-out code can all
//! produce false positives or negatives.

use std::{fmt, sync::LazyLock};

use regex::Regex;

use super::annotation::ANNOTATION_KEYWORD;

/// A declaration prefix that makes a line eligible for an annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationPattern {
    PublicStruct,
    PublicExtension,
    Struct,
    Extension,
    PrivateStruct,
    PrivateExtension,
    InternalStruct,
    InternalExtension,
    FrozenPublicStruct,
    FrozenStruct,
}

impl DeclarationPattern {
    /// All patterns, in the order they are tried.
    pub const ALL: [DeclarationPattern; 10] = [
        DeclarationPattern::PublicStruct,
        DeclarationPattern::PublicExtension,
        DeclarationPattern::Struct,
        DeclarationPattern::Extension,
        DeclarationPattern::PrivateStruct,
        DeclarationPattern::PrivateExtension,
        DeclarationPattern::InternalStruct,
        DeclarationPattern::InternalExtension,
        DeclarationPattern::FrozenPublicStruct,
        DeclarationPattern::FrozenStruct,
    ];

    fn regex_source(self) -> &'static str {
        match self {
            DeclarationPattern::PublicStruct => r"^public\s+struct\s+",
            DeclarationPattern::PublicExtension => r"^public\s+extension\s+",
            DeclarationPattern::Struct => r"^struct\s+",
            DeclarationPattern::Extension => r"^extension\s+",
            DeclarationPattern::PrivateStruct => r"^private\s+struct\s+",
            DeclarationPattern::PrivateExtension => r"^private\s+extension\s+",
            DeclarationPattern::InternalStruct => r"^internal\s+struct\s+",
            DeclarationPattern::InternalExtension => r"^internal\s+extension\s+",
            DeclarationPattern::FrozenPublicStruct => r"^@frozen\s+public\s+struct\s+",
            DeclarationPattern::FrozenStruct => r"^@frozen\s+struct\s+",
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            DeclarationPattern::PublicStruct => "public struct",
            DeclarationPattern::PublicExtension => "public extension",
            DeclarationPattern::Struct => "struct",
            DeclarationPattern::Extension => "extension",
            DeclarationPattern::PrivateStruct => "private struct",
            DeclarationPattern::PrivateExtension => "private extension",
            DeclarationPattern::InternalStruct => "internal struct",
            DeclarationPattern::InternalExtension => "internal extension",
            DeclarationPattern::FrozenPublicStruct => "@frozen public struct",
            DeclarationPattern::FrozenStruct => "@frozen struct",
        }
    }
}

impl fmt::Display for DeclarationPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static DECLARATION_REGEXES: LazyLock<Vec<(DeclarationPattern, Regex)>> = LazyLock::new(|| {
    DeclarationPattern::ALL
        .iter()
        .map(|&pattern| (pattern, Regex::new(pattern.regex_source()).unwrap()))
        .collect()
});

/// `extension Name: Protocol` with a single plain identifier on each side.
static SIMPLE_CONFORMANCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"extension\s+\w+\s*:\s*\w+").unwrap());

/// Why a matched declaration line did not get an annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// The previous line is already an `@available` annotation.
    AlreadyAnnotated,
    /// The declaration is indented, so it is assumed to be nested.
    NotTopLevel,
    /// A plain protocol conformance extension.
    ProtocolConformance,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::AlreadyAnnotated => "already annotated",
            SkipReason::NotTopLevel => "not top-level",
            SkipReason::ProtocolConformance => "protocol conformance",
        };
        f.write_str(text)
    }
}

/// A declaration line found in a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationMatch {
    /// Zero-based index of the line in the original file.
    pub line_index: usize,
    /// Leading whitespace of the untrimmed line.
    pub indentation: String,
    pub pattern: DeclarationPattern,
    /// The declaration line with surrounding whitespace removed.
    pub declaration: String,
}

impl DeclarationMatch {
    /// One-based line number, for display.
    pub fn line(&self) -> usize {
        self.line_index + 1
    }
}

/// Return the first declaration pattern matching the trimmed line.
pub fn match_declaration(trimmed: &str) -> Option<DeclarationPattern> {
    DECLARATION_REGEXES
        .iter()
        .find(|(_, regex)| regex.is_match(trimmed))
        .map(|(pattern, _)| *pattern)
}

/// Leading whitespace of `line`.
pub fn leading_whitespace(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}

/// Find a declaration at `lines[index]`.
pub fn find_declaration(lines: &[&str], index: usize) -> Option<DeclarationMatch> {
    let line = lines.get(index)?;
    let trimmed = line.trim();
    let pattern = match_declaration(trimmed)?;

    Some(DeclarationMatch {
        line_index: index,
        indentation: leading_whitespace(line).to_string(),
        pattern,
        declaration: trimmed.to_string(),
    })
}

/// Decide whether the declaration at `lines[index]` should be left alone.
///
/// Rules are checked against the original, unmodified lines and the first
/// one that applies wins.
pub fn skip_reason(lines: &[&str], index: usize) -> Option<SkipReason> {
    let line = lines.get(index)?;
    let trimmed = line.trim();

    if index > 0
        && let Some(previous) = lines.get(index - 1)
        && previous.trim().starts_with(ANNOTATION_KEYWORD)
    {
        return Some(SkipReason::AlreadyAnnotated);
    }

    if !leading_whitespace(line).is_empty() {
        return Some(SkipReason::NotTopLevel);
    }

    if is_simple_conformance(trimmed) {
        return Some(SkipReason::ProtocolConformance);
    }

    None
}

fn is_simple_conformance(trimmed: &str) -> bool {
    trimmed.contains("extension")
        && trimmed.contains(':')
        && SIMPLE_CONFORMANCE_REGEX.is_match(trimmed)
}
