pub mod health;

use axum::{
    http::{header, Method},
    routing::{get, patch, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::advisor::handlers as advisor;
use crate::proxy::handlers as proxy;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // CORS is part of the proxy contract (origin *, POST/OPTIONS,
    // Content-Type), so the layer lives here rather than in main — the
    // preflight answer must hold in router-level tests too.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health::health_handler))
        // Generation proxy
        .route(
            "/api/gemini",
            post(proxy::handle_generate).fallback(proxy::method_not_allowed),
        )
        // Guidance sessions
        .route("/api/v1/sessions", post(advisor::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(advisor::handle_get_session).delete(advisor::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/profile",
            patch(advisor::handle_update_profile),
        )
        .route(
            "/api/v1/sessions/:id/quiz",
            get(advisor::handle_quiz_state),
        )
        .route(
            "/api/v1/sessions/:id/quiz/answer",
            post(advisor::handle_quiz_answer),
        )
        .route(
            "/api/v1/sessions/:id/paths/explore",
            post(advisor::handle_explore_path),
        )
        .route("/api/v1/sessions/:id/chat", post(advisor::handle_chat))
        .layer(cors)
        .with_state(state)
}
