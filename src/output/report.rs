//! Report wrapper around an analysis result

use crate::processing::analyzer::AnalysisResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An analysis plus the context it was produced in. The timestamp lives here
/// so that `AnalysisResult` itself stays reproducible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsReport {
    pub metadata: ReportMetadata,
    pub summary: String,
    pub analysis: AnalysisResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub resume_file: String,
    pub job_file: Option<String>,
    pub role: Option<String>,
    pub version: String,
}

impl AtsReport {
    pub fn new(
        analysis: AnalysisResult,
        resume_file: impl Into<String>,
        job_file: Option<String>,
        role: Option<String>,
    ) -> Self {
        Self {
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                resume_file: resume_file.into(),
                job_file,
                role,
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            summary: analysis.summary(),
            analysis,
        }
    }

    pub fn generated_at_display(&self) -> String {
        self.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
    }

    /// Target line for headers, e.g. "job.txt (software-engineer)".
    pub fn target_display(&self) -> Option<String> {
        match (&self.metadata.job_file, &self.metadata.role) {
            (Some(job), Some(role)) => Some(format!("{} ({})", job, role)),
            (Some(job), None) => Some(job.clone()),
            (None, Some(role)) => Some(role.clone()),
            (None, None) => None,
        }
    }
}

/// Label for an overall or category score.
pub fn score_label(score: u8) -> &'static str {
    match score {
        90..=100 => "Excellent",
        80..=89 => "Very Good",
        70..=79 => "Good",
        60..=69 => "Fair",
        50..=59 => "Below Average",
        _ => "Poor",
    }
}
