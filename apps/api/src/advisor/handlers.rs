//! Axum route handlers for the guidance flows.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::advisor::i18n::Language;
use crate::advisor::models::{
    split_list, CareerPath, ChatMessage, Recommendation, StudentProfile,
};
use crate::advisor::questions::Question;
use crate::advisor::quiz::QuizOutcome;
use crate::advisor::session::Session;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub language: Language,
    /// Display name from the auth layer; defaults to "Student" when absent.
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPathsView {
    pub paths: Vec<CareerPath>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// The dashboard view: everything a session holds.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    pub language: Language,
    pub profile: StudentProfile,
    pub recommendations: Vec<Recommendation>,
    pub career_paths: CareerPathsView,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct QuizStateResponse {
    pub question: &'static Question,
    pub progress: Progress,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct QuizAnswerRequest {
    pub answer: String,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum QuizAnswerResponse {
    InProgress {
        question: &'static Question,
        progress: Progress,
    },
    Completed {
        recommendations: Vec<Recommendation>,
        profile: StudentProfile,
    },
    Failed {
        error: String,
    },
}

#[derive(Debug, Deserialize)]
pub struct ExploreRequest {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: ChatMessage,
}

/// Manual profile edit, mirroring the profile form: interests and strengths
/// arrive comma-separated.
#[derive(Debug, Deserialize)]
pub struct ProfileUpdateRequest {
    pub name: String,
    pub grade: String,
    pub location: String,
    pub interests: String,
    pub strengths: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

async fn session_or_404(state: &AppState, id: Uuid) -> Result<Arc<Session>, AppError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
}

async fn snapshot(session: &Session) -> SessionSnapshot {
    let profile = session.profile.read().await.clone();
    let recommendations = session.recommendations.read().await.clone();
    let career_paths = {
        let board = session.paths.lock().await;
        CareerPathsView {
            paths: board.paths().to_vec(),
            error: board.error().map(String::from),
        }
    };
    let messages = session.chat.lock().await.messages().to_vec();

    SessionSnapshot {
        session_id: session.id,
        language: session.language,
        profile,
        recommendations,
        career_paths,
        messages,
    }
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let session = state
        .sessions
        .create(request.language, request.display_name)
        .await;
    Ok(Json(snapshot(&session).await))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let session = session_or_404(&state, id).await?;
    Ok(Json(snapshot(&session).await))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Session {id} not found")))
    }
}

/// PATCH /api/v1/sessions/:id/profile
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ProfileUpdateRequest>,
) -> Result<Json<StudentProfile>, AppError> {
    let session = session_or_404(&state, id).await?;

    let mut profile = session.profile.write().await;
    profile.name = request.name;
    profile.class = request.grade;
    profile.location = request.location;
    profile.interests = split_list(&request.interests);
    profile.strengths = split_list(&request.strengths);
    profile.profile_completion = 100;

    Ok(Json(profile.clone()))
}

/// GET /api/v1/sessions/:id/quiz
pub async fn handle_quiz_state(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<QuizStateResponse>, AppError> {
    let session = session_or_404(&state, id).await?;
    let quiz = session.quiz.lock().await;
    let (current, total) = quiz.progress();

    Ok(Json(QuizStateResponse {
        question: quiz.current_question(),
        progress: Progress { current, total },
        completed: quiz.is_completed(),
        error: quiz.error().map(String::from),
    }))
}

/// POST /api/v1/sessions/:id/quiz/answer
///
/// Answers the current question. The final answer triggers recommendation
/// generation; on success the recommendations land on the session and the
/// quiz answers are applied to the profile.
pub async fn handle_quiz_answer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<QuizAnswerRequest>,
) -> Result<Json<QuizAnswerResponse>, AppError> {
    let session = session_or_404(&state, id).await?;

    let mut quiz = session.quiz.lock().await;
    let outcome = quiz
        .answer(&request.answer, state.generator.as_ref())
        .await?;

    let response = match outcome {
        QuizOutcome::Advanced => {
            let (current, total) = quiz.progress();
            QuizAnswerResponse::InProgress {
                question: quiz.current_question(),
                progress: Progress { current, total },
            }
        }
        QuizOutcome::Completed(recommendations) => {
            let profile = {
                let mut profile = session.profile.write().await;
                quiz.apply_to_profile(&mut profile);
                profile.clone()
            };
            *session.recommendations.write().await = recommendations.clone();
            QuizAnswerResponse::Completed {
                recommendations,
                profile,
            }
        }
        QuizOutcome::Failed(error) => QuizAnswerResponse::Failed { error },
    };

    Ok(Json(response))
}

/// POST /api/v1/sessions/:id/paths/explore
pub async fn handle_explore_path(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ExploreRequest>,
) -> Result<Json<CareerPathsView>, AppError> {
    let session = session_or_404(&state, id).await?;

    let mut board = session.paths.lock().await;
    board
        .explore(&request.title, session.language, state.generator.as_ref())
        .await?;

    Ok(Json(CareerPathsView {
        paths: board.paths().to_vec(),
        error: board.error().map(String::from),
    }))
}

/// POST /api/v1/sessions/:id/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let session = session_or_404(&state, id).await?;

    let profile = session.profile.read().await.clone();
    let mut chat = session.chat.lock().await;
    let reply = chat
        .send(
            &request.message,
            &profile,
            session.language,
            state.generator.as_ref(),
        )
        .await?
        .clone();

    Ok(Json(ChatResponse { reply }))
}
