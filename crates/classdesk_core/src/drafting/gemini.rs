//! Gemini `generateContent` client for lesson-plan drafting.
//!
//! # Responsibility
//! - Build the drafting prompt and structured-output schema.
//! - Map HTTP and payload failures into `DraftError`.
//!
//! # Invariants
//! - The API key travels only in the `x-goog-api-key` header.
//! - Logged events carry status and sizes only, never prompt text.

use crate::config::DraftingConfig;
use crate::drafting::{DraftError, DraftRequest, DraftedContent, LessonPlanDrafter};
use log::{info, warn};
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

const MAX_ERROR_BODY_CHARS: usize = 240;

/// Drafter backed by the Gemini REST API.
#[derive(Debug)]
pub struct GeminiDrafter {
    config: DraftingConfig,
    client: Client,
}

impl GeminiDrafter {
    /// Builds the HTTP client with the configured timeout.
    pub fn new(config: DraftingConfig) -> Result<Self, DraftError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &DraftingConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }
}

impl LessonPlanDrafter for GeminiDrafter {
    fn draft(&self, request: &DraftRequest) -> Result<DraftedContent, DraftError> {
        let body = build_request_body(request);
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        let text = response.text()?;
        if !status.is_success() {
            warn!(
                "event=draft_request module=drafting status=error http_status={}",
                status.as_u16()
            );
            return Err(DraftError::Status {
                code: status.as_u16(),
                body: truncate(&text, MAX_ERROR_BODY_CHARS),
            });
        }

        let content = parse_generate_response(&text)?;
        info!(
            "event=draft_request module=drafting status=ok objectives={}",
            content.objectives.len()
        );
        Ok(content)
    }
}

/// Builds the prompt sent to the model.
pub fn build_prompt(request: &DraftRequest) -> String {
    format!(
        "Create a detailed lesson plan for a teacher.\n\
         Subject: {}\n\
         Topic: {}\n\
         Grade: {}\n\
         Additional notes: {}\n\n\
         The plan must be well organized and include objectives, required materials, \
         lesson content and homework.",
        request.subject, request.topic, request.grade_label, request.notes
    )
}

fn build_request_body(request: &DraftRequest) -> Value {
    json!({
        "contents": [{ "parts": [{ "text": build_prompt(request) }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "objectives": {
                        "type": "ARRAY",
                        "items": { "type": "STRING" },
                        "description": "List of lesson objectives"
                    },
                    "materials": {
                        "type": "STRING",
                        "description": "Materials and tools needed"
                    },
                    "content": {
                        "type": "STRING",
                        "description": "Summary of the explanation and classroom activities"
                    },
                    "homework": {
                        "type": "STRING",
                        "description": "Suggested homework"
                    }
                }
            }
        }
    })
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

/// Extracts the drafted body from a raw `generateContent` response.
pub fn parse_generate_response(raw: &str) -> Result<DraftedContent, DraftError> {
    let response: GenerateResponse = serde_json::from_str(raw)?;
    let text = response
        .candidates
        .into_iter()
        .filter_map(|candidate| candidate.content)
        .flat_map(|content| content.parts)
        .filter_map(|part| part.text)
        .collect::<String>();
    if text.trim().is_empty() {
        return Err(DraftError::EmptyResponse);
    }
    Ok(serde_json::from_str(text.trim())?)
}

fn truncate(value: &str, max_chars: usize) -> String {
    let mut truncated = value.chars().take(max_chars).collect::<String>();
    if value.chars().count() > max_chars {
        truncated.push_str("...");
    }
    truncated
}
