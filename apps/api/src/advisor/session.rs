//! Per-session state containers and the in-memory registry.
//!
//! One owned `Session` per active session; nothing is persisted and nothing
//! survives a restart. Each flow sits behind its own lock so that, within a
//! session, a chat turn can run while a career-path fetch is outstanding —
//! the locks only serialize re-invocations of the same flow (the server
//! analog of the UI disabling the triggering control).

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::advisor::chat::ChatSession;
use crate::advisor::i18n::Language;
use crate::advisor::models::{Recommendation, StudentProfile};
use crate::advisor::paths::CareerPathBoard;
use crate::advisor::quiz::QuizFlow;

pub struct Session {
    pub id: Uuid,
    pub language: Language,
    pub profile: RwLock<StudentProfile>,
    pub quiz: Mutex<QuizFlow>,
    pub recommendations: RwLock<Vec<Recommendation>>,
    pub paths: Mutex<CareerPathBoard>,
    pub chat: Mutex<ChatSession>,
}

impl Session {
    fn new(language: Language, display_name: Option<String>) -> Self {
        let mut profile = StudentProfile::default();
        if let Some(name) = display_name.filter(|name| !name.trim().is_empty()) {
            profile.name = name.trim().to_string();
        }
        let chat = ChatSession::new(&profile.name, language);

        Session {
            id: Uuid::new_v4(),
            language,
            profile: RwLock::new(profile),
            quiz: Mutex::new(QuizFlow::new(language)),
            recommendations: RwLock::new(Vec::new()),
            paths: Mutex::new(CareerPathBoard::default()),
            chat: Mutex::new(chat),
        }
    }
}

/// In-memory session registry. Lookups clone the `Arc` and release the map
/// lock, so no flow ever holds the registry across an upstream call.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Arc<Session>>>>,
}

impl SessionStore {
    pub async fn create(
        &self,
        language: Language,
        display_name: Option<String>,
    ) -> Arc<Session> {
        let session = Arc::new(Session::new(language, display_name));
        self.inner
            .write()
            .await
            .insert(session.id, Arc::clone(&session));
        session
    }

    pub async fn get(&self, id: Uuid) -> Option<Arc<Session>> {
        self.inner.read().await.get(&id).cloned()
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        self.inner.write().await.remove(&id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_seeds_profile_and_greeting_from_display_name() {
        let store = SessionStore::default();
        let session = store
            .create(Language::En, Some("Priya Sharma".to_string()))
            .await;

        assert_eq!(session.profile.read().await.name, "Priya Sharma");
        let chat = session.chat.lock().await;
        assert!(chat.messages()[0].text.contains("Priya Sharma"));
    }

    #[tokio::test]
    async fn test_blank_display_name_keeps_the_default() {
        let store = SessionStore::default();
        let session = store.create(Language::En, Some("   ".to_string())).await;
        assert_eq!(session.profile.read().await.name, "Student");
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let store = SessionStore::default();
        let a = store.create(Language::En, Some("A".to_string())).await;
        let b = store.create(Language::Hi, Some("B".to_string())).await;

        a.profile.write().await.profile_completion = 100;
        assert_eq!(b.profile.read().await.profile_completion, 25);
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_remove_forgets_the_session() {
        let store = SessionStore::default();
        let session = store.create(Language::En, None).await;
        assert!(store.get(session.id).await.is_some());
        assert!(store.remove(session.id).await);
        assert!(store.get(session.id).await.is_none());
        assert!(!store.remove(session.id).await);
    }
}
