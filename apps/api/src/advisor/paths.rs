//! Recommendation → career path flow.
//!
//! Each explored title yields a fresh roadmap. The board keeps at most one
//! path per title: re-exploring replaces the older entry and the newest path
//! is always prepended.

use crate::advisor::i18n::{strings, Language};
use crate::advisor::models::CareerPath;
use crate::advisor::prompts::career_path_payload;
use crate::errors::AppError;
use crate::proxy::{Generate, Generated, Purpose};

/// Generated roadmaps, newest first, deduplicated by title.
#[derive(Default)]
pub struct CareerPathBoard {
    paths: Vec<CareerPath>,
    error: Option<String>,
}

impl CareerPathBoard {
    pub fn paths(&self) -> &[CareerPath] {
        &self.paths
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Generates a roadmap for `title` and inserts it. On failure the error
    /// message (localized prefix + proxy message) is stored and the existing
    /// list is left untouched — nothing partial is retained from the failed
    /// attempt.
    pub async fn explore(
        &mut self,
        title: &str,
        language: Language,
        generator: &dyn Generate,
    ) -> Result<(), AppError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::Validation("Title cannot be empty".to_string()));
        }

        self.error = None;

        let payload = career_path_payload(title, language);
        match generator.generate(&payload, Purpose::CareerPath).await {
            Ok(Generated::CareerPath { career_path }) => {
                match serde_json::from_value::<CareerPath>(career_path) {
                    Ok(path) => self.insert(path),
                    Err(e) => self.fail(language, &e.to_string()),
                }
            }
            Ok(_) => self.fail(language, "No career path received from the model."),
            Err(e) => self.fail(language, &e.to_string()),
        }
        Ok(())
    }

    /// Dedup by title: any older path with the same title is dropped and the
    /// new one goes to the front.
    fn insert(&mut self, path: CareerPath) {
        self.paths.retain(|existing| existing.title != path.title);
        self.paths.insert(0, path);
    }

    fn fail(&mut self, language: Language, message: &str) {
        self.error = Some(format!(
            "{} {}",
            strings(language).error_generating_path,
            message
        ));
    }
}
