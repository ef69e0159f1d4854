//! Job-description keyword extraction and resume matching

use crate::processing::checks::Check;
use crate::processing::lexicon::{role_keywords, STOP_WORDS};
use crate::processing::text_processor::tokenize;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Maximum number of keywords taken from a job description.
pub const MAX_JOB_KEYWORDS: usize = 30;
/// Tokens shorter than this never become keywords.
pub const MIN_KEYWORD_LEN: usize = 3;
/// Coverage check passes when at least this share of keywords is matched.
pub const MIN_KEYWORD_COVERAGE: f64 = 0.6;
/// Density check passes at or above this percentage.
pub const MIN_KEYWORD_DENSITY: f64 = 2.0;

/// How many missing keywords to list in a check explanation.
const MISSING_PREVIEW: usize = 8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordReport {
    /// Target keywords: ranked job-description keywords, then role keywords.
    pub keywords: Vec<String>,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    /// Percentage of resume tokens that are target keywords.
    pub density: f64,
}

impl KeywordReport {
    /// Matched share of the target keywords; 1.0 when there are none.
    pub fn coverage(&self) -> f64 {
        if self.keywords.is_empty() {
            1.0
        } else {
            self.matched.len() as f64 / self.keywords.len() as f64
        }
    }
}

/// Most frequent non-stop-word tokens of `text`. Equal frequencies keep the
/// order in which the tokens first appear.
pub fn extract_keywords(text: &str, limit: usize) -> Vec<String> {
    let mut order: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for token in tokenize(text) {
        if token.chars().count() < MIN_KEYWORD_LEN || STOP_WORDS.contains(token.as_str()) {
            continue;
        }
        match index.get(&token) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(token.clone(), order.len());
                order.push((token, 1));
            }
        }
    }

    // sort_by is stable, so ties stay in first-occurrence order
    order.sort_by(|a, b| b.1.cmp(&a.1));

    order.into_iter().take(limit).map(|(token, _)| token).collect()
}

/// Job-description keywords merged with the role's skill list.
pub fn target_keywords(job_description: Option<&str>, role: Option<&str>) -> Vec<String> {
    let mut keywords = job_description
        .map(|jd| extract_keywords(jd, MAX_JOB_KEYWORDS))
        .unwrap_or_default();

    if let Some(role) = role {
        for keyword in role_keywords(role) {
            if !keywords.iter().any(|k| k == keyword) {
                keywords.push(keyword.to_string());
            }
        }
    }

    keywords
}

/// Compare target keywords against the resume's tokens.
pub fn match_keywords(keywords: Vec<String>, resume_tokens: &[String]) -> KeywordReport {
    let resume_set: HashSet<&str> = resume_tokens.iter().map(String::as_str).collect();
    let keyword_set: HashSet<&str> = keywords.iter().map(String::as_str).collect();

    let (matched, missing): (Vec<String>, Vec<String>) = keywords
        .iter()
        .cloned()
        .partition(|k| resume_set.contains(k.as_str()));

    let density = if resume_tokens.is_empty() {
        0.0
    } else {
        let hits = resume_tokens
            .iter()
            .filter(|t| keyword_set.contains(t.as_str()))
            .count();
        hits as f64 / resume_tokens.len() as f64 * 100.0
    };

    KeywordReport {
        keywords,
        matched,
        missing,
        density,
    }
}

pub fn keyword_checks(report: &KeywordReport) -> Vec<Check> {
    let coverage = report.coverage();
    let coverage_ok = coverage >= MIN_KEYWORD_COVERAGE;
    let density_ok = report.keywords.is_empty() || report.density >= MIN_KEYWORD_DENSITY;

    let coverage_details = if report.keywords.is_empty() {
        "No target keywords to match.".to_string()
    } else if coverage_ok {
        format!(
            "Matched {} of {} target keywords.",
            report.matched.len(),
            report.keywords.len()
        )
    } else {
        let preview: Vec<&str> = report
            .missing
            .iter()
            .take(MISSING_PREVIEW)
            .map(String::as_str)
            .collect();
        format!(
            "Matched {} of {} target keywords. Consider adding: {}.",
            report.matched.len(),
            report.keywords.len(),
            preview.join(", ")
        )
    };

    let density_details = if density_ok {
        format!("Keyword density is {:.1}%.", report.density)
    } else {
        format!(
            "Keyword density is {:.1}%. Aim for at least {:.0}% by weaving job terms into your bullets.",
            report.density, MIN_KEYWORD_DENSITY
        )
    };

    vec![
        Check::new("Keyword Coverage", coverage_ok, false, coverage_details),
        Check::new("Keyword Density", density_ok, true, density_details),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_drops_stop_words_and_short_tokens() {
        let keywords = extract_keywords("We need an AI and ML expert with Python and the SQL stack", 30);
        assert_eq!(keywords, vec!["need", "expert", "python", "sql", "stack"]);
    }

    #[test]
    fn test_three_character_tokens_are_kept() {
        assert_eq!(extract_keywords("go c ml aws gcp", 30), vec!["aws", "gcp"]);
    }

    #[test]
    fn test_ranking_is_frequency_then_first_occurrence() {
        let jd = "docker python sql python docker kafka sql python";
        assert_eq!(extract_keywords(jd, 30), vec!["python", "docker", "sql", "kafka"]);
        assert_eq!(extract_keywords(jd, 2), vec!["python", "docker"]);
    }

    #[test]
    fn test_ranking_is_reproducible() {
        let jd = "rust golang kotlin swift scala haskell elixir clojure ocaml erlang";
        let first = extract_keywords(jd, 5);
        for _ in 0..10 {
            assert_eq!(extract_keywords(jd, 5), first);
        }
        assert_eq!(first, vec!["rust", "golang", "kotlin", "swift", "scala"]);
    }

    #[test]
    fn test_match_and_density() {
        let keywords = vec!["python".to_string(), "sql".to_string(), "docker".to_string()];
        let report = match_keywords(keywords, &tokenize("python"));
        assert_eq!(report.matched, vec!["python"]);
        assert_eq!(report.missing, vec!["sql", "docker"]);
        assert!((report.density - 100.0).abs() < 1e-9);

        let keywords = vec!["python".to_string(), "sql".to_string(), "docker".to_string()];
        let resume = tokenize("Wrote Python services and Python tooling");
        let report = match_keywords(keywords, &resume);
        assert!((report.density - 2.0 / 6.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_resume_has_zero_density() {
        let report = match_keywords(vec!["python".to_string()], &[]);
        assert_eq!(report.density, 0.0);
        assert_eq!(report.missing, vec!["python"]);
    }

    #[test]
    fn test_role_keywords_are_merged_without_duplicates() {
        let keywords = target_keywords(Some("python python sql"), Some("data-scientist"));
        assert_eq!(&keywords[..2], &["python".to_string(), "sql".to_string()]);
        assert_eq!(keywords.iter().filter(|k| *k == "python").count(), 1);
        assert!(keywords.contains(&"pandas".to_string()));

        let unknown = target_keywords(Some("python"), Some("astronaut"));
        assert_eq!(unknown, vec!["python"]);

        assert!(target_keywords(None, None).is_empty());
    }

    #[test]
    fn test_keyword_checks() {
        let report = match_keywords(
            vec!["python".to_string(), "sql".to_string(), "docker".to_string()],
            &tokenize("python sql"),
        );
        let checks = keyword_checks(&report);
        assert_eq!(checks[0].name, "Keyword Coverage");
        assert!(checks[0].pass);
        assert!(checks[1].pass);

        let report = match_keywords(
            vec!["python".to_string(), "sql".to_string(), "docker".to_string()],
            &tokenize("python"),
        );
        let checks = keyword_checks(&report);
        assert!(!checks[0].pass);
        assert!(checks[0].details.contains("sql, docker"));
    }

    #[test]
    fn test_no_keywords_passes_vacuously() {
        let report = match_keywords(Vec::new(), &tokenize("anything at all"));
        assert!(keyword_checks(&report).iter().all(|c| c.pass));
    }
}
