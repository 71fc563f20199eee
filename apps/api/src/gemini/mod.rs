/// Gemini client — the single point of entry for all generative-language
/// calls in Sahayak.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// Everything goes through the proxy, and the proxy goes through this client.
///
/// The request payload is opaque here: clients assemble the full
/// `{contents, systemInstruction, generationConfig}` body and this module
/// forwards it verbatim. Exactly one outbound call per invocation — failures
/// are terminal, never retried.
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

const GENERATIVE_LANGUAGE_API_BASE: &str =
    "https://generativelanguage.googleapis.com/v1beta/models";
/// Model used when GEMINI_MODEL is not set.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API key not configured")]
    ApiKeyMissing,

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Content,
}

#[derive(Debug, Default, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
pub struct Part {
    // Non-text parts (inline data etc.) deserialize with text = None.
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// The first candidate's first content part's text — the only data the
    /// proxy ever consumes from an upstream response.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .parts
            .first()?
            .text
            .as_deref()
    }
}

#[derive(Debug, Deserialize)]
struct GeminiErrorEnvelope {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    #[serde(default)]
    message: String,
}

/// The shared Gemini client. Holds the credential and model identifier; the
/// key is checked per call so a missing credential fails the request, not
/// the process.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>, model: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Forwards `payload` verbatim to the generateContent endpoint.
    pub async fn generate_content(
        &self,
        payload: &Value,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let api_key = self.api_key.as_deref().ok_or(GeminiError::ApiKeyMissing)?;

        let url = format!(
            "{GENERATIVE_LANGUAGE_API_BASE}/{}:generateContent?key={api_key}",
            self.model
        );

        let response = self.client.post(&url).json(payload).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Gemini API returned {status}: {body}");
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message: upstream_error_message(status.as_u16(), &body),
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        debug!("Gemini call succeeded: {} candidate(s)", parsed.candidates.len());
        Ok(parsed)
    }
}

/// Best-effort message extraction from an upstream error body.
/// Tolerates non-JSON, empty, and message-less bodies — the error path must
/// never itself error.
fn upstream_error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<GeminiErrorEnvelope>(body)
        .ok()
        .map(|envelope| envelope.error.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| format!("API Error ({status})"))
}
