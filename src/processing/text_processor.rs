//! Text normalization and tokenization
//!
//! Every word-level statistic in the crate goes through [`tokenize`] (or its
//! case-preserving twin [`words`]); checks never split text on their own.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("Invalid paragraph regex"));

/// Text prepared once per analysis and shared by all checks.
#[derive(Debug, Clone)]
pub struct ProcessedText<'a> {
    pub original: &'a str,
    pub lowercase: String,
    pub tokens: Vec<String>,
    pub words: Vec<String>,
    pub paragraphs: Vec<&'a str>,
    pub word_count: usize,
    pub character_count: usize,
}

impl<'a> ProcessedText<'a> {
    pub fn new(text: &'a str) -> Self {
        let words = words(text);
        let tokens: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();

        Self {
            original: text,
            lowercase: text.to_lowercase(),
            word_count: tokens.len(),
            character_count: text.graphemes(true).count(),
            paragraphs: paragraphs(text),
            tokens,
            words,
        }
    }
}

/// Lowercase tokens with punctuation removed. Internal hyphens survive,
/// leading and trailing ones do not.
pub fn tokenize(text: &str) -> Vec<String> {
    words(text).into_iter().map(|w| w.to_lowercase()).collect()
}

/// Same normalization as [`tokenize`] without lowercasing.
pub fn words(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let cleaned: String = text
        .chars()
        .map(|c| if keeps_char(c) { c } else { ' ' })
        .collect();

    cleaned
        .split_whitespace()
        .map(|w| w.trim_matches('-'))
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whitespace-separated words with punctuation intact.
pub fn raw_words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Split on blank lines. Whitespace-only paragraphs are dropped.
pub fn paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

fn keeps_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-' || c.is_whitespace()
}
