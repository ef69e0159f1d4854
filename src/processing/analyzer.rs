//! Analysis engine: runs every check and combines the category scores
//!
//! `AnalysisEngine::analyze` is a pure function of its request. It performs
//! no I/O, keeps no state between calls and returns the same result for the
//! same input, so one engine can serve concurrent callers.

use crate::input::file_detector::FileMetadata;
use crate::processing::checks::{
    self, ats_essential_checks, content_checks, section_checks, Check,
};
use crate::processing::keywords::{keyword_checks, match_keywords, target_keywords, KeywordReport};
use crate::processing::scoring::{overall_score, Category, ScoringWeights};
use crate::processing::sections::{detect_sections, SectionReport};
use crate::processing::text_processor::ProcessedText;
use log::debug;
use serde::{Deserialize, Serialize};

/// Inputs of a single analysis.
#[derive(Debug, Clone, Default)]
pub struct AnalysisRequest<'a> {
    pub resume_text: &'a str,
    pub job_description: Option<&'a str>,
    pub role: Option<&'a str>,
    pub file: Option<&'a FileMetadata>,
}

impl<'a> AnalysisRequest<'a> {
    pub fn new(resume_text: &'a str) -> Self {
        Self {
            resume_text,
            ..Default::default()
        }
    }

    pub fn with_job_description(mut self, job_description: &'a str) -> Self {
        self.job_description = Some(job_description);
        self
    }

    pub fn with_role(mut self, role: &'a str) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_file(mut self, file: &'a FileMetadata) -> Self {
        self.file = Some(file);
        self
    }

    /// Whether the caller targets a job or a role. A target that yields no
    /// keywords still produces no keyword category.
    pub fn is_targeted(&self) -> bool {
        self.job_description.is_some() || self.role.is_some()
    }
}

/// Word-level statistics gathered while running the checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStats {
    pub character_count: usize,
    pub word_count: usize,
    pub paragraph_count: usize,
    pub longest_paragraph_words: usize,
    pub action_verb_count: usize,
    pub weak_phrase_count: usize,
    pub all_caps_count: usize,
    pub misspelling_count: usize,
    pub most_frequent_ratio: f64,
}

/// Complete result of one analysis. Built once and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Overall score, 0-100.
    pub score: u8,
    /// Number of failing checks across all categories.
    pub issue_count: usize,
    pub content: Category,
    pub sections: Category,
    pub ats_essentials: Category,
    pub keyword_match: Option<Category>,
    pub weights: ScoringWeights,
    pub section_report: SectionReport,
    pub keyword_report: Option<KeywordReport>,
    pub stats: TextStats,
}

impl AnalysisResult {
    /// Categories in display order, with their labels.
    pub fn categories(&self) -> Vec<(&'static str, &Category)> {
        let mut categories = vec![
            ("Content", &self.content),
            ("Sections", &self.sections),
            ("ATS Essentials", &self.ats_essentials),
        ];
        if let Some(keyword_match) = &self.keyword_match {
            categories.push(("Keyword Match", keyword_match));
        }
        categories
    }

    pub fn all_checks(&self) -> impl Iterator<Item = &Check> {
        self.content
            .checks
            .iter()
            .chain(self.sections.checks.iter())
            .chain(self.ats_essentials.checks.iter())
            .chain(self.keyword_match.iter().flat_map(|c| c.checks.iter()))
    }

    pub fn failed_checks(&self) -> impl Iterator<Item = &Check> {
        self.all_checks().filter(|c| !c.pass)
    }

    /// One-sentence verdict for the user.
    pub fn summary(&self) -> String {
        match self.issue_count {
            0 => "Great work! Your resume looks solid.".to_string(),
            1 => "Your resume has 1 issue that needs attention.".to_string(),
            n => format!("Your resume has {n} issues that need attention."),
        }
    }
}

/// Scoring engine. Holds no per-call state.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisEngine;

impl AnalysisEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, request: &AnalysisRequest<'_>) -> AnalysisResult {
        let text = ProcessedText::new(request.resume_text);
        let section_report = detect_sections(request.resume_text);

        let content = Category::from_checks(content_checks(&text));
        let sections = Category::from_checks(section_checks(&text, &section_report));
        let ats_essentials = Category::from_checks(ats_essential_checks(&text, request.file));

        let keyword_report = request
            .is_targeted()
            .then(|| target_keywords(request.job_description, request.role))
            .filter(|keywords| !keywords.is_empty())
            .map(|keywords| match_keywords(keywords, &text.tokens));
        let keyword_match = keyword_report
            .as_ref()
            .map(|report| Category::from_checks(keyword_checks(report)));

        let weights = if keyword_match.is_some() {
            ScoringWeights::TARGETED
        } else {
            ScoringWeights::STANDARD
        };

        let score = overall_score(
            &weights,
            content.score,
            sections.score,
            ats_essentials.score,
            keyword_match.as_ref().map(|c| c.score),
        );

        let issue_count = content.failed().count()
            + sections.failed().count()
            + ats_essentials.failed().count()
            + keyword_match.as_ref().map_or(0, |c| c.failed().count());

        let stats = Self::collect_stats(&text);

        debug!(
            "Analysis complete: score={} issues={} content={} sections={} ats={} keywords={:?}",
            score,
            issue_count,
            content.score,
            sections.score,
            ats_essentials.score,
            keyword_match.as_ref().map(|c| c.score)
        );

        AnalysisResult {
            score,
            issue_count,
            content,
            sections,
            ats_essentials,
            keyword_match,
            weights,
            section_report,
            keyword_report,
            stats,
        }
    }

    fn collect_stats(text: &ProcessedText) -> TextStats {
        TextStats {
            character_count: text.character_count,
            word_count: text.word_count,
            paragraph_count: text.paragraphs.len(),
            longest_paragraph_words: checks::longest_paragraph_words(&text.paragraphs),
            action_verb_count: checks::count_action_verbs(&text.tokens),
            weak_phrase_count: checks::count_weak_phrases(&text.lowercase),
            all_caps_count: checks::count_all_caps_words(text.original),
            misspelling_count: checks::count_misspellings(&text.tokens),
            most_frequent_ratio: checks::most_frequent_ratio(&text.tokens),
        }
    }
}

/// Analyze a resume with the default engine.
pub fn analyze(
    resume_text: &str,
    job_description: Option<&str>,
    role: Option<&str>,
    file: Option<&FileMetadata>,
) -> AnalysisResult {
    let request = AnalysisRequest {
        resume_text,
        job_description,
        role,
        file,
    };
    AnalysisEngine::new().analyze(&request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::file_detector::{MEDIA_TYPE_DOCX, MEDIA_TYPE_PDF};

    const STRONG_RESUME: &str = "Jane Doe
jane.doe@example.com | 555-123-4567 | https://linkedin.com/in/janedoe

Summary
Backend engineer focused on reliable data platforms.

Experience
Acme Corp, Senior Engineer, 2019-2024
- Led migration of billing to Rust, cutting p99 latency by 45%
- Designed event pipeline handling 2M messages per day
- Mentored 4 engineers and launched an on-call rotation
- Automated release checks, saving $120k yearly
- Optimized Postgres queries and reduced storage costs by 30%
- Built internal tooling adopted across 12 product groups

Skills
Rust, Python, SQL, Docker, Kubernetes, Kafka

Education
B.Sc. Computer Science, State University";

    #[test]
    fn test_strong_resume_scores_well() {
        let result = analyze(STRONG_RESUME, None, None, None);

        assert!(result.section_report.pass);
        assert_eq!(result.sections.score, 100);
        assert_eq!(result.weights, ScoringWeights::STANDARD);
        assert!(result.keyword_match.is_none());
        assert!(result.score >= 80, "score was {}", result.score);
        assert_eq!(result.issue_count, result.failed_checks().count());
    }

    #[test]
    fn test_empty_resume_is_valid_input() {
        let result = analyze("", None, None, None);
        assert!(result.score <= 100);
        assert!(result.issue_count > 0);
        assert_eq!(result.stats.word_count, 0);
        assert_eq!(result.sections.score, 0);
    }

    #[test]
    fn test_job_description_adds_keyword_category() {
        let jd = "Looking for a Rust engineer with Kafka, Kubernetes and Terraform experience.";
        let result = analyze(STRONG_RESUME, Some(jd), None, None);

        assert_eq!(result.weights, ScoringWeights::TARGETED);
        let report = result.keyword_report.as_ref().expect("keyword report");
        assert!(report.matched.contains(&"rust".to_string()));
        assert!(report.missing.contains(&"terraform".to_string()));
        assert_eq!(result.categories().len(), 4);
    }

    #[test]
    fn test_role_only_targets_role_keywords() {
        let result = analyze(STRONG_RESUME, None, Some("devops-engineer"), None);
        let report = result.keyword_report.expect("keyword report");
        assert!(report.keywords.contains(&"terraform".to_string()));
        assert!(report.matched.contains(&"docker".to_string()));
    }

    #[test]
    fn test_unknown_role_scores_like_no_role() {
        for resume in [STRONG_RESUME, "helped with stuff"] {
            let plain = analyze(resume, None, None, None);
            let unknown = analyze(resume, None, Some("lion-tamer"), None);
            assert_eq!(unknown.score, plain.score);
            assert_eq!(unknown.weights, ScoringWeights::STANDARD);
            assert!(unknown.keyword_match.is_none());
            assert!(unknown.keyword_report.is_none());
            assert_eq!(unknown, plain);
        }
    }

    #[test]
    fn test_empty_job_description_scores_like_no_target() {
        for resume in [STRONG_RESUME, "helped with stuff"] {
            let plain = analyze(resume, None, None, None);
            assert_eq!(analyze(resume, Some(""), None, None), plain);
            assert_eq!(analyze(resume, Some("the and of a"), None, None), plain);
            assert_eq!(analyze(resume, Some(""), Some("lion-tamer"), None), plain);
        }
    }

    #[test]
    fn test_file_metadata_feeds_file_check() {
        let pdf = FileMetadata::new(MEDIA_TYPE_PDF, 40_000);
        let ok = analyze(STRONG_RESUME, None, None, Some(&pdf));
        assert_eq!(ok.ats_essentials.checks[0].name, "File Format & Size");
        assert!(ok.ats_essentials.checks[0].pass);

        let huge = FileMetadata::new(MEDIA_TYPE_DOCX, 3 * 1024 * 1024);
        let bad = analyze(STRONG_RESUME, None, None, Some(&huge));
        assert!(!bad.ats_essentials.checks[0].pass);
        assert_eq!(bad.issue_count, ok.issue_count + 1);
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let jd = "Rust Kafka Kubernetes SQL Terraform AWS";
        let first = analyze(STRONG_RESUME, Some(jd), Some("software-engineer"), None);
        let second = analyze(STRONG_RESUME, Some(jd), Some("software-engineer"), None);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_scores_stay_in_range_for_extreme_inputs() {
        let shouting = "RESPONSIBLE FOR HELPED WORKED ON TABLE COLUMN CHART ".repeat(200);
        let inputs = [
            String::new(),
            "!!!???".to_string(),
            shouting,
            "word ".repeat(5000),
        ];
        for input in &inputs {
            let result = analyze(input, Some("python sql docker"), Some("designer"), None);
            assert!(result.score <= 100);
            for (_, category) in result.categories() {
                assert!(category.score <= 100);
            }
        }
    }

    #[test]
    fn test_summary_sentence() {
        let mut result = analyze(STRONG_RESUME, None, None, None);
        result.issue_count = 0;
        assert_eq!(result.summary(), "Great work! Your resume looks solid.");
        result.issue_count = 1;
        assert_eq!(result.summary(), "Your resume has 1 issue that needs attention.");
        result.issue_count = 4;
        assert_eq!(result.summary(), "Your resume has 4 issues that need attention.");
    }

    #[test]
    fn test_engine_is_shareable_across_threads() {
        let engine = AnalysisEngine::new();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(move || {
                    engine.analyze(&AnalysisRequest::new(STRONG_RESUME)).score
                })
            })
            .collect();
        let scores: Vec<u8> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(scores.windows(2).all(|w| w[0] == w[1]));
    }
}
