//! HTTP client for the resume rewrite service

use crate::config::Config;
use crate::error::{AtsCheckerError, Result};
use crate::rewrite::prompts::{PromptParams, PromptTemplates, SYSTEM_PROMPT};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewriteRequest {
    pub resume_text: String,
    pub job_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewriteResponse {
    pub improved_resume_text: String,
}

/// A service that rewrites resume bullet points. Independent of scoring.
pub trait ResumeRewriter {
    fn rewrite(
        &self,
        request: &RewriteRequest,
    ) -> impl std::future::Future<Output = Result<RewriteResponse>> + Send;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Rewriter backed by an OpenAI-compatible chat-completions endpoint.
pub struct HttpRewriter {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
    temperature: f32,
    templates: PromptTemplates,
}

impl HttpRewriter {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: None,
            temperature: 0.4,
            templates: PromptTemplates::default(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let rewrite = &config.rewrite;
        let mut rewriter = Self::new(
            rewrite.endpoint.clone(),
            rewrite.model.clone(),
            Duration::from_secs(rewrite.timeout_secs),
        )?
        .with_temperature(rewrite.temperature);

        match config.rewrite_api_key() {
            Some(key) => rewriter = rewriter.with_api_key(key),
            None => warn!(
                "{} is not set; calling {} without credentials",
                rewrite.api_key_env, rewrite.endpoint
            ),
        }

        Ok(rewriter)
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    fn build_messages(&self, request: &RewriteRequest) -> Vec<ChatMessage> {
        let params = PromptParams {
            resume_content: request.resume_text.clone(),
            job_content: request.job_description.clone().unwrap_or_default(),
        };

        vec![
            ChatMessage {
                role: "system".to_string(),
                content: SYSTEM_PROMPT.to_string(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: self.templates.render_improve_bullet_points(&params),
            },
        ]
    }

    async fn send(&self, request: &RewriteRequest) -> Result<String> {
        let body = ChatRequest {
            model: &self.model,
            messages: self.build_messages(request),
            temperature: self.temperature,
        };

        info!("Requesting rewrite from {}", self.endpoint);

        let mut http_request = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            http_request = http_request.bearer_auth(key);
        }

        let response = http_request
            .send()
            .await
            .map_err(|e| AtsCheckerError::RewriteService(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AtsCheckerError::RewriteService(e.to_string()))?;
        debug!("Rewrite service responded with {} ({} bytes)", status, text.len());

        if !status.is_success() {
            return Err(AtsCheckerError::RewriteService(format!(
                "Service returned error status {}: {}",
                status, text
            )));
        }

        Ok(text)
    }
}

impl ResumeRewriter for HttpRewriter {
    async fn rewrite(&self, request: &RewriteRequest) -> Result<RewriteResponse> {
        if request.resume_text.trim().is_empty() {
            return Err(AtsCheckerError::InvalidInput(
                "Resume text is required.".to_string(),
            ));
        }

        let body = self.send(request).await?;
        let improved_resume_text = parse_completion(&body)?;

        Ok(RewriteResponse {
            improved_resume_text,
        })
    }
}

/// Pull the first choice's message out of a chat-completions body.
pub fn parse_completion(body: &str) -> Result<String> {
    let response: ChatResponse = serde_json::from_str(body).map_err(|e| {
        AtsCheckerError::RewriteService(format!("Unexpected response format: {}", e))
    })?;

    let content = response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content.trim().to_string())
        .unwrap_or_default();

    if content.is_empty() {
        return Err(AtsCheckerError::RewriteService(
            "The service returned an empty response.".to_string(),
        ));
    }

    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_rewriter() -> HttpRewriter {
        HttpRewriter::new(
            "http://127.0.0.1:1/v1/chat/completions",
            "test-model",
            Duration::from_secs(2),
        )
        .unwrap()
    }

    #[test]
    fn test_parse_completion() {
        let body = r#"{"id":"x","choices":[{"index":0,"message":{"role":"assistant","content":"  Led a team of 5\n"},"finish_reason":"stop"}]}"#;
        assert_eq!(parse_completion(body).unwrap(), "Led a team of 5");
    }

    #[test]
    fn test_parse_completion_failures() {
        let empty = parse_completion(r#"{"choices":[]}"#).unwrap_err();
        assert!(empty.to_string().starts_with("Failed to get suggestions."));

        let garbage = parse_completion("<html>502</html>").unwrap_err();
        assert!(matches!(garbage, AtsCheckerError::RewriteService(_)));
    }

    #[test]
    fn test_messages_carry_rendered_prompt() {
        let rewriter = unreachable_rewriter();
        let request = RewriteRequest {
            resume_text: "Helped with reports".to_string(),
            job_description: Some("Data analyst".to_string()),
        };

        let messages = rewriter.build_messages(&request);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert!(messages[1].content.contains("Helped with reports"));
        assert!(messages[1].content.contains("Data analyst"));
    }

    #[tokio::test]
    async fn test_empty_resume_is_rejected_before_any_request() {
        let request = RewriteRequest {
            resume_text: "   ".to_string(),
            job_description: None,
        };

        let err = unreachable_rewriter().rewrite(&request).await.unwrap_err();
        match err {
            AtsCheckerError::InvalidInput(msg) => assert_eq!(msg, "Resume text is required."),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_connection_failure_is_a_service_error() {
        let request = RewriteRequest {
            resume_text: "Experience\nBuilt things".to_string(),
            job_description: None,
        };

        let err = unreachable_rewriter().rewrite(&request).await.unwrap_err();
        assert!(matches!(err, AtsCheckerError::RewriteService(_)));
    }
}
