//! Section detection by anchored header matching
//!
//! A section counts as present only when one of its header alternatives
//! starts a line (after optional indentation or a `#`, `*`, `-`, `•` prefix)
//! and is followed by a colon or the end of the line. A sentence such as
//! "I gained experience working with teams" never registers a section.

use crate::processing::lexicon::{CANONICAL_SECTIONS, REQUIRED_SECTIONS, SECTION_HEADERS};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static SECTION_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    SECTION_HEADERS
        .iter()
        .map(|(name, alternatives)| (*name, header_regex(alternatives)))
        .collect()
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionReport {
    /// Canonical sections found, in canonical order.
    pub found: Vec<String>,
    /// Required sections not found, in canonical order.
    pub missing: Vec<String>,
    pub pass: bool,
}

fn header_regex(alternatives: &[&str]) -> Regex {
    let alternation = alternatives
        .iter()
        .map(|alt| regex::escape(alt))
        .collect::<Vec<_>>()
        .join("|");

    let pattern = format!(r"(?m)^[ \t]*(?:[#*\-•]+[ \t]*)?(?:{alternation})[ \t]*(?::|\r?$)");
    Regex::new(&pattern).expect("Invalid section header regex")
}

/// Determine which canonical sections the resume contains.
pub fn detect_sections(text: &str) -> SectionReport {
    let lowercase = text.to_lowercase();

    let found: Vec<String> = CANONICAL_SECTIONS
        .iter()
        .filter(|section| section_present(&lowercase, section))
        .map(|section| section.to_string())
        .collect();

    let missing: Vec<String> = REQUIRED_SECTIONS
        .iter()
        .filter(|required| !found.iter().any(|f| f == *required))
        .map(|required| required.to_string())
        .collect();

    SectionReport {
        pass: missing.is_empty(),
        found,
        missing,
    }
}

fn section_present(lowercase_text: &str, section: &str) -> bool {
    SECTION_PATTERNS
        .iter()
        .any(|(name, pattern)| *name == section && pattern.is_match(lowercase_text))
}

/// Whether a single line is a recognized section header.
pub fn is_header_line(line: &str) -> bool {
    let lowercase = line.to_lowercase();
    SECTION_PATTERNS
        .iter()
        .any(|(_, pattern)| pattern.is_match(&lowercase))
}
