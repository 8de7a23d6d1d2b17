/// Generative-text client — the single point of entry for the suggestion endpoint.
///
/// Wire format: POST `{"contents":[{"parts":[{"text": ...}]}]}`, answer read from
/// `candidates[0].content.parts[0].text`. One attempt per call, no retries.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::LlmSettings;

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The body was JSON but held no generated text. `raw` is kept for debugging.
    #[error("response contained no generated candidate")]
    MissingCandidate { raw: serde_json::Value },
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

impl GenerateResponse {
    /// Text of the first part of the first candidate.
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .and_then(|p| p.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Anything that turns a prompt into generated text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Clone)]
pub struct GenerativeClient {
    client: Client,
    api_url: String,
    api_key: Option<String>,
}

impl GenerativeClient {
    pub fn new(settings: &LlmSettings) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(settings.timeout).build()?,
            api_url: settings.api_url.clone(),
            api_key: settings.api_key.clone(),
        })
    }
}

#[async_trait]
impl TextGenerator for GenerativeClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let mut request = self
            .client
            .post(&self.api_url)
            .header("content-type", "application/json")
            .json(&request_body);
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Generation API returned {}: {}", status, body);
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let raw: serde_json::Value = serde_json::from_str(&body)?;
        extract_text(raw)
    }
}

/// Pulls the generated text out of a response body, keeping the whole body
/// in the error when the expected structure is absent.
fn extract_text(raw: serde_json::Value) -> Result<String, LlmError> {
    let text = GenerateResponse::deserialize(&raw)
        .ok()
        .and_then(|r| r.text().map(str::to_string));

    match text {
        Some(text) => {
            debug!("Generation succeeded: {} chars", text.len());
            Ok(text)
        }
        None => Err(LlmError::MissingCandidate { raw }),
    }
}
