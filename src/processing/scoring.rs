//! Category aggregation and the weighted overall score

use crate::processing::checks::Check;
use serde::{Deserialize, Serialize};

/// A named group of checks with a derived 0-100 score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub score: u8,
    pub checks: Vec<Check>,
}

impl Category {
    pub fn from_checks(checks: Vec<Check>) -> Self {
        Self {
            score: category_score(&checks),
            checks,
        }
    }

    pub fn failed(&self) -> impl Iterator<Item = &Check> {
        self.checks.iter().filter(|c| !c.pass)
    }

    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.pass).count()
    }
}

/// round(100 * passed / total); an empty category scores 100.
pub fn category_score(checks: &[Check]) -> u8 {
    if checks.is_empty() {
        return 100;
    }
    let passed = checks.iter().filter(|c| c.pass).count();
    (100.0 * passed as f64 / checks.len() as f64).round() as u8
}

/// Category weights of the overall score. Each table sums to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub content: f64,
    pub sections: f64,
    pub ats_essentials: f64,
    pub keyword_match: f64,
}

impl ScoringWeights {
    /// Used when no job description or role is supplied.
    pub const STANDARD: ScoringWeights = ScoringWeights {
        content: 0.30,
        sections: 0.30,
        ats_essentials: 0.40,
        keyword_match: 0.0,
    };

    /// Used when the keyword category is present.
    pub const TARGETED: ScoringWeights = ScoringWeights {
        content: 0.20,
        sections: 0.20,
        ats_essentials: 0.25,
        keyword_match: 0.35,
    };

    pub fn total(&self) -> f64 {
        self.content + self.sections + self.ats_essentials + self.keyword_match
    }
}

/// Weighted combination of category scores, rounded and clamped to 0-100.
pub fn overall_score(
    weights: &ScoringWeights,
    content: u8,
    sections: u8,
    ats_essentials: u8,
    keyword_match: Option<u8>,
) -> u8 {
    let weighted = weights.content * f64::from(content)
        + weights.sections * f64::from(sections)
        + weights.ats_essentials * f64::from(ats_essentials)
        + weights.keyword_match * f64::from(keyword_match.unwrap_or(0));

    weighted.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checks(passed: usize, failed: usize) -> Vec<Check> {
        (0..passed)
            .map(|i| Check::new(&format!("pass {i}"), true, false, ""))
            .chain((0..failed).map(|i| Check::new(&format!("fail {i}"), false, false, "")))
            .collect()
    }

    #[test]
    fn test_category_score_rounding() {
        assert_eq!(category_score(&checks(0, 0)), 100);
        assert_eq!(category_score(&checks(3, 0)), 100);
        assert_eq!(category_score(&checks(0, 4)), 0);
        assert_eq!(category_score(&checks(1, 2)), 33);
        assert_eq!(category_score(&checks(2, 1)), 67);
        assert_eq!(category_score(&checks(1, 7)), 13);
    }

    #[test]
    fn test_weights_sum_to_one() {
        assert!((ScoringWeights::STANDARD.total() - 1.0).abs() < 1e-9);
        assert!((ScoringWeights::TARGETED.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_overall_score() {
        let w = ScoringWeights::STANDARD;
        assert_eq!(overall_score(&w, 100, 100, 100, None), 100);
        assert_eq!(overall_score(&w, 0, 0, 0, None), 0);
        // 0.3 * 60 + 0.3 * 50 + 0.4 * 75 = 63
        assert_eq!(overall_score(&w, 60, 50, 75, None), 63);

        let t = ScoringWeights::TARGETED;
        // 0.2 * 80 + 0.2 * 50 + 0.25 * 88 + 0.35 * 60 = 69
        assert_eq!(overall_score(&t, 80, 50, 88, Some(60)), 69);
        // 0.2 * 67 + 0.2 * 50 + 0.25 * 71 + 0.35 * 0 = 41.15
        assert_eq!(overall_score(&t, 67, 50, 71, Some(0)), 41);
    }

    #[test]
    fn test_category_helpers() {
        let category = Category::from_checks(checks(2, 1));
        assert_eq!(category.score, 67);
        assert_eq!(category.passed_count(), 2);
        assert_eq!(category.failed().count(), 1);
    }
}
