use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The wire shape is `{"error": <message>}` (plus `"details"` on generic
/// 500s) — fixed by the proxy contract, so the `Display` text of each
/// variant IS the client-visible message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("API key not configured")]
    MissingApiKey,

    /// Upstream non-2xx, passed through with its own status code.
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// Upstream 2xx whose response carried no extractable text.
    #[error("{0}")]
    EmptyCandidate(&'static str),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MissingApiKey => {
                tracing::error!("GEMINI_API_KEY not found in environment");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::EmptyCandidate(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = match &self {
            AppError::Internal(e) => Json(json!({
                "error": "Internal server error",
                "details": e.to_string(),
            })),
            other => Json(json!({ "error": other.to_string() })),
        };

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_upstream_error_keeps_status_and_message() {
        let response = AppError::Upstream {
            status: 429,
            message: "rate limited".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        let body = body_json(response).await;
        assert_eq!(body["error"], "rate limited");
    }

    #[tokio::test]
    async fn test_internal_error_includes_details() {
        let response = AppError::Internal(anyhow::anyhow!("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Internal server error");
        assert_eq!(body["details"], "boom");
    }

    #[tokio::test]
    async fn test_validation_is_400_with_message() {
        let response = AppError::Validation("Payload is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Payload is required");
    }

    #[test]
    fn test_display_is_the_client_message() {
        assert_eq!(AppError::MethodNotAllowed.to_string(), "Method not allowed");
        assert_eq!(AppError::MissingApiKey.to_string(), "API key not configured");
        assert_eq!(
            AppError::EmptyCandidate("No response from AI").to_string(),
            "No response from AI"
        );
    }
}
