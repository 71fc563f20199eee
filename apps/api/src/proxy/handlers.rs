//! Axum route handlers for the generation proxy.

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::proxy::{Generated, Purpose};
use crate::state::AppState;

/// Body of POST /api/gemini. `payload` is opaque and forwarded verbatim;
/// `type` selects the response shape and defaults to chat.
#[derive(Debug, Deserialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub payload: Option<Value>,
    #[serde(rename = "type", default)]
    pub purpose: Purpose,
}

/// POST /api/gemini
///
/// The payload check precedes the credential check: a request with no
/// payload is a 400 even on a misconfigured deployment, and neither case
/// ever reaches upstream.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<Generated>, AppError> {
    let payload = match request.payload {
        Some(payload) if !payload.is_null() => payload,
        _ => return Err(AppError::Validation("Payload is required".to_string())),
    };

    let generated = state.generator.generate(&payload, request.purpose).await?;
    Ok(Json(generated))
}

/// Any method other than POST (OPTIONS preflights are answered by the CORS
/// layer before routing).
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
