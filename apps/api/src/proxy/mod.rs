//! Generation proxy — reshapes upstream Gemini responses per purpose tag.
//!
//! The proxy is fully stateless: it validates the request, forwards the
//! opaque payload upstream with the server-held credential, and reshapes the
//! extracted text into one of three result shapes. It never retries.

pub mod handlers;

use anyhow::anyhow;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::gemini::{GeminiClient, GeminiError, GenerateContentResponse};

/// Client-supplied tag selecting how the upstream result is reshaped.
/// Anything that is not `quiz` or `career-path` (including an absent tag)
/// gets the chat shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Purpose {
    Quiz,
    CareerPath,
    #[default]
    #[serde(other)]
    Chat,
}

/// A reshaped upstream result, keyed per purpose on the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Generated {
    Recommendations {
        recommendations: Value,
    },
    CareerPath {
        #[serde(rename = "careerPath")]
        career_path: Value,
    },
    Chat {
        response: String,
    },
}

/// Seam between the guidance flows and the proxy. The flows speak this
/// contract only; tests substitute a stub.
#[async_trait]
pub trait Generate: Send + Sync {
    async fn generate(&self, payload: &Value, purpose: Purpose) -> Result<Generated, AppError>;
}

/// The production implementation: one outbound Gemini call, then `shape`.
pub struct ProxyService {
    gemini: GeminiClient,
}

impl ProxyService {
    pub fn new(gemini: GeminiClient) -> Self {
        Self { gemini }
    }
}

#[async_trait]
impl Generate for ProxyService {
    async fn generate(&self, payload: &Value, purpose: Purpose) -> Result<Generated, AppError> {
        let response = self.gemini.generate_content(payload).await?;
        shape(purpose, &response)
    }
}

impl From<GeminiError> for AppError {
    fn from(error: GeminiError) -> Self {
        match error {
            GeminiError::ApiKeyMissing => AppError::MissingApiKey,
            GeminiError::Api { status, message } => AppError::Upstream { status, message },
            GeminiError::Http(e) => AppError::Internal(anyhow!(e)),
        }
    }
}

/// Reshapes a successful upstream response according to the purpose tag.
///
/// The extracted text is load-bearing for all three branches. The quiz and
/// career-path branches parse it as JSON; the chat branch returns it
/// verbatim, even if it happens to look like JSON. A parse failure is
/// reported through the generic 500 path, matching the contract.
pub fn shape(purpose: Purpose, response: &GenerateContentResponse) -> Result<Generated, AppError> {
    match purpose {
        Purpose::Quiz => {
            let text = response
                .first_text()
                .ok_or(AppError::EmptyCandidate("No recommendations received"))?;
            let recommendations = serde_json::from_str(text)
                .map_err(|e| anyhow!("recommendations were not valid JSON: {e}"))?;
            Ok(Generated::Recommendations { recommendations })
        }
        Purpose::CareerPath => {
            let text = response
                .first_text()
                .ok_or(AppError::EmptyCandidate("No career path received"))?;
            let career_path = serde_json::from_str(text)
                .map_err(|e| anyhow!("career path was not valid JSON: {e}"))?;
            Ok(Generated::CareerPath { career_path })
        }
        Purpose::Chat => {
            let text = response
                .first_text()
                .ok_or(AppError::EmptyCandidate("No response from AI"))?;
            Ok(Generated::Chat {
                response: text.to_string(),
            })
        }
    }
}
