//! Prompt template for the resume rewrite service

use serde::{Deserialize, Serialize};

/// System message sent ahead of the rendered prompt.
pub const SYSTEM_PROMPT: &str =
    "You rewrite resumes. Reply with the improved resume text only, without commentary.";

#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub improve_bullet_points: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            improve_bullet_points: IMPROVE_BULLET_POINTS_TEMPLATE.to_string(),
        }
    }
}

/// Parameters for prompt template substitution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptParams {
    pub resume_content: String,
    /// Empty when no job description was supplied.
    pub job_content: String,
}

impl PromptTemplates {
    pub fn render_improve_bullet_points(&self, params: &PromptParams) -> String {
        log::debug!(
            "Rendering rewrite prompt: resume {} chars, job {} chars",
            params.resume_content.len(),
            params.job_content.len()
        );

        self.improve_bullet_points
            .replace("{job}", &params.job_content)
            .replace("{resume}", &params.resume_content)
    }
}

const IMPROVE_BULLET_POINTS_TEMPLATE: &str = r#"You are an expert resume writer specializing in improving bullet points to be more appealing to potential employers.

You will be provided with the text of a resume, and you will identify the bullet points and rewrite them to be more action-oriented and highlight the skills and impact of the candidate.

If a job description is provided, tailor the bullet points to match the requirements of the job description.

Resume:
{resume}

Job Description (Optional):
{job}

Improved Resume:
"#;
