//! Individual pass/fail checks
//!
//! Each heuristic lives behind its own function with its threshold as a named
//! constant. The `*_checks` functions assemble them into the ordered check
//! lists of the Content, Sections and ATS Essentials categories.

use crate::input::file_detector::{FileCompatibility, FileMetadata};
use crate::processing::lexicon::{ACTION_VERBS, COMPLEX_LAYOUT_KEYWORDS, MISSPELLINGS, WEAK_PHRASES};
use crate::processing::sections::{is_header_line, SectionReport};
use crate::processing::text_processor::{raw_words, tokenize, words, ProcessedText};
use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Parse-rate check passes when the text is longer than this many characters.
pub const MIN_PARSE_CHARS: usize = 100;
/// Action-verb check passes with more than this many action verbs.
pub const MIN_ACTION_VERBS: usize = 5;
/// Below this many tokens the repetition check always passes.
pub const REPETITION_MIN_TOKENS: usize = 50;
/// Highest share of all tokens the most frequent token may take.
pub const MAX_REPETITION_RATIO: f64 = 0.03;
/// Spelling check fails at this many known misspellings.
pub const MISSPELLING_LIMIT: usize = 3;
/// Paragraph-length check fails when a paragraph has more words than this.
pub const MAX_PARAGRAPH_WORDS: usize = 100;
/// Capitalization check fails at this many all-caps words.
pub const ALL_CAPS_LIMIT: usize = 5;
/// Weak-verb check fails at this many weak phrases.
pub const WEAK_PHRASE_LIMIT: usize = 3;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\w.+-]+@[\w-]+(?:\.[\w-]+)*\.\w{2,}").expect("Invalid email regex")
});

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:\+?1[-. ]?)?\(?[0-9]{3}\)?[-. ]?[0-9]{3}[-. ]?[0-9]{4}\b")
        .expect("Invalid phone regex")
});

static WEAK_PHRASE_MATCHER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(WEAK_PHRASES)
        .expect("Failed to build weak phrase matcher")
});

static LAYOUT_MATCHER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::new(COMPLEX_LAYOUT_KEYWORDS).expect("Failed to build layout keyword matcher")
});

/// One atomic pass/fail rule with its explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Check {
    pub name: String,
    pub pass: bool,
    /// Marks checks shown as paid-tier insights. Never affects scoring.
    pub premium: bool,
    pub details: String,
}

impl Check {
    pub fn new(name: &str, pass: bool, premium: bool, details: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            pass,
            premium,
            details: details.into(),
        }
    }

    /// Build a check whose details depend only on the outcome.
    pub fn with_outcome(name: &str, pass: bool, premium: bool, passed: &str, failed: &str) -> Self {
        Self::new(name, pass, premium, if pass { passed } else { failed })
    }
}

// Content heuristics

pub fn parse_rate_ok(character_count: usize) -> bool {
    character_count > MIN_PARSE_CHARS
}

/// Any word carrying a digit, a percentage or a currency amount.
pub fn has_quantified_impact(text: &str) -> bool {
    raw_words(text).any(|word| word.chars().any(|c| c.is_ascii_digit() || c == '%' || c == '$'))
}

pub fn count_action_verbs(tokens: &[String]) -> usize {
    tokens.iter().filter(|t| ACTION_VERBS.contains(t.as_str())).count()
}

/// Share of all tokens taken by the most frequent one; 0.0 when empty.
pub fn most_frequent_ratio(tokens: &[String]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }

    let mut frequencies: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        *frequencies.entry(token.as_str()).or_insert(0) += 1;
    }

    let most_frequent = frequencies.values().copied().max().unwrap_or(0);
    most_frequent as f64 / tokens.len() as f64
}

pub fn repetition_ok(tokens: &[String]) -> bool {
    tokens.len() < REPETITION_MIN_TOKENS || most_frequent_ratio(tokens) <= MAX_REPETITION_RATIO
}

pub fn count_misspellings(tokens: &[String]) -> usize {
    tokens.iter().filter(|t| MISSPELLINGS.contains_key(t.as_str())).count()
}

/// Misspelled tokens in order of first appearance, with their correction.
pub fn find_misspellings(tokens: &[String]) -> Vec<(String, &'static str)> {
    let mut found: Vec<(String, &'static str)> = Vec::new();
    for token in tokens {
        if let Some(correction) = MISSPELLINGS.get(token.as_str()) {
            if !found.iter().any(|(wrong, _)| wrong == token) {
                found.push((token.clone(), *correction));
            }
        }
    }
    found
}

// Contact heuristics

pub fn has_email(text: &str) -> bool {
    EMAIL_REGEX.is_match(text)
}

pub fn has_phone(text: &str) -> bool {
    PHONE_REGEX.is_match(text)
}

// Formatting heuristics

pub fn has_complex_layout(lowercase_text: &str) -> bool {
    LAYOUT_MATCHER.is_match(lowercase_text)
}

pub fn has_hyperlink(lowercase_text: &str) -> bool {
    lowercase_text.contains("http://") || lowercase_text.contains("https://")
}

/// Word count of the longest paragraph.
pub fn longest_paragraph_words(paragraphs: &[&str]) -> usize {
    paragraphs.iter().map(|p| tokenize(p).len()).max().unwrap_or(0)
}

/// Words longer than three characters written entirely in capitals.
/// Section header lines are skipped.
pub fn count_all_caps_words(text: &str) -> usize {
    text.lines()
        .filter(|line| !is_header_line(line))
        .flat_map(|line| words(line))
        .filter(|word| is_all_caps(word))
        .count()
}

fn is_all_caps(word: &str) -> bool {
    word.chars().count() > 3
        && word.chars().any(char::is_alphabetic)
        && word.to_uppercase() == word
}

pub fn count_weak_phrases(lowercase_text: &str) -> usize {
    WEAK_PHRASE_MATCHER.find_iter(lowercase_text).count()
}

// Category check lists

pub fn content_checks(text: &ProcessedText) -> Vec<Check> {
    let action_verbs = count_action_verbs(&text.tokens);
    let misspellings = find_misspellings(&text.tokens);
    let misspelling_count = count_misspellings(&text.tokens);
    let spelling_ok = misspelling_count < MISSPELLING_LIMIT;

    vec![
        Check::with_outcome(
            "ATS Parse Rate",
            parse_rate_ok(text.character_count),
            false,
            "Resume text was successfully parsed.",
            "Could not read enough text from the resume.",
        ),
        Check::with_outcome(
            "Quantifying Impact",
            has_quantified_impact(text.original),
            true,
            "Achievements are quantified with numbers.",
            "Add numbers, percentages, or dollar amounts to show impact.",
        ),
        Check::new(
            "Action Verbs",
            action_verbs > MIN_ACTION_VERBS,
            false,
            if action_verbs > MIN_ACTION_VERBS {
                format!("Strong action verbs are used ({action_verbs} found).")
            } else {
                format!(
                    "Only {action_verbs} action verbs found. Replace weak phrases with stronger action verbs."
                )
            },
        ),
        Check::with_outcome(
            "Word Repetition",
            repetition_ok(&text.tokens),
            false,
            "Word usage is varied and effective.",
            "Some words are overused. Try to diversify your language.",
        ),
        Check::new(
            "Spelling & Grammar",
            spelling_ok,
            true,
            if spelling_ok {
                "No major spelling errors found.".to_string()
            } else {
                let examples: Vec<String> = misspellings
                    .iter()
                    .take(3)
                    .map(|(wrong, right)| format!("{wrong} → {right}"))
                    .collect();
                format!(
                    "Potential spelling or grammar issues detected: {}.",
                    examples.join(", ")
                )
            },
        ),
    ]
}

pub fn section_checks(text: &ProcessedText, sections: &SectionReport) -> Vec<Check> {
    let contact_ok = has_email(text.original) && has_phone(text.original);

    vec![
        Check::new(
            "Essential Sections",
            sections.pass,
            true,
            if sections.pass {
                "All key sections like Experience and Skills are present.".to_string()
            } else {
                format!("Missing sections: {}", sections.missing.join(", "))
            },
        ),
        Check::with_outcome(
            "Contact Information",
            contact_ok,
            false,
            "Contact info (email & phone) is present.",
            "Missing a valid email or phone number.",
        ),
    ]
}

pub fn ats_essential_checks(text: &ProcessedText, file: Option<&FileMetadata>) -> Vec<Check> {
    let mut checks = Vec::new();

    if let Some(file) = file {
        checks.push(file_format_check(file));
    }

    let longest_paragraph = longest_paragraph_words(&text.paragraphs);
    let all_caps = count_all_caps_words(text.original);
    let weak_phrases = count_weak_phrases(&text.lowercase);

    checks.push(Check::with_outcome(
        "Simple Design",
        !has_complex_layout(&text.lowercase),
        false,
        "Resume has a clean, single-column layout.",
        "Complex layouts with tables or columns can confuse ATS.",
    ));
    checks.push(Check::with_outcome(
        "Email Address",
        has_email(text.original),
        false,
        "A professional email address was found.",
        "An email address could not be found.",
    ));
    checks.push(Check::with_outcome(
        "Phone Number",
        has_phone(text.original),
        false,
        "A phone number was found.",
        "A phone number could not be found.",
    ));
    checks.push(Check::with_outcome(
        "Hyperlinks",
        has_hyperlink(&text.lowercase),
        true,
        "Includes links to portfolios or LinkedIn.",
        "Consider adding a link to your LinkedIn or portfolio.",
    ));
    checks.push(Check::new(
        "Paragraph Length",
        longest_paragraph <= MAX_PARAGRAPH_WORDS,
        false,
        if longest_paragraph <= MAX_PARAGRAPH_WORDS {
            "Paragraphs are short and scannable.".to_string()
        } else {
            format!(
                "A paragraph runs {longest_paragraph} words. Break blocks longer than {MAX_PARAGRAPH_WORDS} words into bullet points."
            )
        },
    ));
    checks.push(Check::new(
        "Capitalization",
        all_caps < ALL_CAPS_LIMIT,
        false,
        if all_caps < ALL_CAPS_LIMIT {
            "Capital letters are used sparingly.".to_string()
        } else {
            format!("{all_caps} words are written in all caps. Reserve capitals for headings.")
        },
    ));
    checks.push(Check::new(
        "Weak Verbs",
        weak_phrases < WEAK_PHRASE_LIMIT,
        true,
        if weak_phrases < WEAK_PHRASE_LIMIT {
            "Bullet points avoid passive, weak phrasing.".to_string()
        } else {
            format!(
                "Found {weak_phrases} weak phrases such as \"responsible for\" or \"helped\". Lead with what you achieved."
            )
        },
    ));

    checks
}

fn file_format_check(file: &FileMetadata) -> Check {
    let compatibility = file.compatibility();
    let details = match compatibility {
        FileCompatibility::Compatible => format!(
            "File is a compatible format (PDF/DOCX) and size (<{}).",
            file.max_size_display()
        ),
        FileCompatibility::LegacyWord => {
            "Legacy .doc files are not supported. Please use .docx or .pdf.".to_string()
        }
        FileCompatibility::UnsupportedType => format!(
            "Files of type {} are not ATS friendly. Upload a PDF or DOCX.",
            file.media_type
        ),
        FileCompatibility::TooLarge => format!(
            "File is {} bytes. Keep it under {}.",
            file.size_bytes,
            file.max_size_display()
        ),
    };

    Check::new(
        "File Format & Size",
        compatibility == FileCompatibility::Compatible,
        false,
        details,
    )
}
