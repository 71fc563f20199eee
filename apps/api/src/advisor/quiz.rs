//! Quiz → recommendations flow.
//!
//! Accumulates one answer per question across the fixed ordered bank; the
//! final answer triggers a single-shot submission through the proxy seam.
//! There is no back navigation and no retry — a failed submission leaves the
//! flow on the last question with its answers retained, and answering again
//! re-triggers the submission.

use rand::Rng;
use serde_json::{Map, Value};

use crate::advisor::i18n::{strings, Language};
use crate::advisor::models::{split_list, Recommendation, StudentProfile};
use crate::advisor::prompts::quiz_payload;
use crate::advisor::questions::{questions, Question};
use crate::errors::AppError;
use crate::proxy::{Generate, Generated, Purpose};

pub struct QuizFlow {
    language: Language,
    current: usize,
    answers: Map<String, Value>,
    completed: bool,
    error: Option<String>,
}

/// What answering the current question led to.
pub enum QuizOutcome {
    /// Advanced to the next question.
    Advanced,
    /// Final answer submitted and recommendations generated.
    Completed(Vec<Recommendation>),
    /// Final answer submitted but generation failed; the message replaces
    /// the question in the UI and the flow stays on the last question.
    Failed(String),
}

impl QuizFlow {
    pub fn new(language: Language) -> Self {
        QuizFlow {
            language,
            current: 0,
            answers: Map::new(),
            completed: false,
            error: None,
        }
    }

    pub fn current_question(&self) -> &'static Question {
        &questions(self.language)[self.current]
    }

    /// 1-based position and total, for "Question {current} of {total}".
    pub fn progress(&self) -> (usize, usize) {
        (self.current + 1, questions(self.language).len())
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Records the answer to the current question. Advances on all but the
    /// last question; on the last, assembles the full answer set and submits
    /// it for recommendation generation.
    pub async fn answer(
        &mut self,
        answer: &str,
        generator: &dyn Generate,
    ) -> Result<QuizOutcome, AppError> {
        let answer = answer.trim();
        if answer.is_empty() {
            return Err(AppError::Validation("Answer cannot be empty".to_string()));
        }

        let bank = questions(self.language);
        let question = &bank[self.current];
        self.answers
            .insert(question.id.to_string(), Value::String(answer.to_string()));

        if self.current < bank.len() - 1 {
            self.current += 1;
            return Ok(QuizOutcome::Advanced);
        }

        self.error = None;
        self.completed = false;

        let payload = quiz_payload(&self.answers, self.language);
        match generator.generate(&payload, Purpose::Quiz).await {
            Ok(Generated::Recommendations { recommendations }) => {
                match serde_json::from_value::<Vec<Recommendation>>(recommendations) {
                    Ok(recommendations) => {
                        self.completed = true;
                        Ok(QuizOutcome::Completed(recommendations))
                    }
                    Err(e) => Ok(self.fail(&e.to_string())),
                }
            }
            Ok(_) => Ok(self.fail("No recommendations received.")),
            Err(e) => Ok(self.fail(&e.to_string())),
        }
    }

    fn fail(&mut self, message: &str) -> QuizOutcome {
        let shown = format!(
            "{} {}",
            strings(self.language).error_generating_recommendations,
            message
        );
        self.error = Some(shown.clone());
        QuizOutcome::Failed(shown)
    }

    /// Profile mutation applied on completion: identity fields from the
    /// name/grade answers, interests from the comma-split free-time answer,
    /// strengths from the favorite-subject answer, a fresh aptitude score,
    /// and completion bumped to 75.
    pub fn apply_to_profile(&self, profile: &mut StudentProfile) {
        if let Some(name) = self.answer_text("name") {
            profile.name = name.to_string();
        }
        if let Some(grade) = self.answer_text("grade") {
            profile.class = grade.to_string();
        }
        profile.interests = split_list(self.answer_text("freeTime").unwrap_or_default());
        profile.strengths = split_list(self.answer_text("favoriteSubject").unwrap_or_default());
        profile.aptitude_score = rand::thread_rng().gen_range(80..=95);
        profile.profile_completion = 75;
    }

    fn answer_text(&self, id: &str) -> Option<&str> {
        self.answers.get(id).and_then(|value| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use serde_json::json;

    use super::*;

    /// Stub proxy seam returning a canned result.
    enum StubGenerator {
        Recommendations(Value),
        Upstream { status: u16, message: &'static str },
    }

    #[async_trait]
    impl Generate for StubGenerator {
        async fn generate(&self, _payload: &Value, purpose: Purpose) -> Result<Generated, AppError> {
            assert_eq!(purpose, Purpose::Quiz);
            match self {
                StubGenerator::Recommendations(value) => Ok(Generated::Recommendations {
                    recommendations: value.clone(),
                }),
                StubGenerator::Upstream { status, message } => Err(AppError::Upstream {
                    status: *status,
                    message: message.to_string(),
                }),
            }
        }
    }

    fn canned_recommendations() -> Value {
        json!([
            {
                "type": "Stream/Path",
                "title": "Science with Computer Science",
                "description": "Take PCM with CS.",
                "reasoning": "Strong logic skills."
            },
            {
                "type": "Skill to Build",
                "title": "Programming",
                "description": "Learn Python.",
                "reasoning": "Pairs well with your interests."
            }
        ])
    }

    /// Answers every question; the stub decides how the submission ends.
    async fn run_quiz(flow: &mut QuizFlow, generator: &dyn Generate) -> QuizOutcome {
        let answers = [
            "Priya Sharma",
            "12th Grade",
            "Physics, Maths",
            "By doing (experiments, projects)",
            "Building apps, robotics",
            "Analyze it with logic and data",
            "A quiet, focused space for independent work",
            "Creativity, innovation, and self-expression",
            "Technology & Engineering",
            "Lead a team at Google",
        ];
        let mut last = None;
        for answer in answers {
            last = Some(flow.answer(answer, generator).await.unwrap());
        }
        last.unwrap()
    }

    #[tokio::test]
    async fn test_empty_answer_is_rejected_and_does_not_advance() {
        let stub = StubGenerator::Recommendations(canned_recommendations());
        let mut flow = QuizFlow::new(Language::En);
        assert!(flow.answer("   ", &stub).await.is_err());
        assert_eq!(flow.progress(), (1, 10));
    }

    #[tokio::test]
    async fn test_advances_one_question_per_answer() {
        let stub = StubGenerator::Recommendations(canned_recommendations());
        let mut flow = QuizFlow::new(Language::En);
        assert!(matches!(
            flow.answer("Priya", &stub).await.unwrap(),
            QuizOutcome::Advanced
        ));
        assert_eq!(flow.progress(), (2, 10));
        assert_eq!(flow.current_question().id, "grade");
    }

    #[tokio::test]
    async fn test_final_answer_completes_with_parsed_recommendations() {
        let stub = StubGenerator::Recommendations(canned_recommendations());
        let mut flow = QuizFlow::new(Language::En);
        let outcome = run_quiz(&mut flow, &stub).await;

        match outcome {
            QuizOutcome::Completed(recommendations) => {
                assert_eq!(recommendations.len(), 2);
                assert_eq!(recommendations[0].kind, "Stream/Path");
            }
            _ => panic!("expected completion"),
        }
        assert!(flow.is_completed());
        assert!(flow.error().is_none());
    }

    #[tokio::test]
    async fn test_failure_keeps_flow_on_last_question_with_prefixed_error() {
        let stub = StubGenerator::Upstream {
            status: 429,
            message: "rate limited",
        };
        let mut flow = QuizFlow::new(Language::En);
        let outcome = run_quiz(&mut flow, &stub).await;

        match outcome {
            QuizOutcome::Failed(message) => {
                assert_eq!(
                    message,
                    "Sorry, I couldn't generate recommendations. rate limited"
                );
                assert_eq!(flow.error().unwrap(), message);
            }
            _ => panic!("expected failure"),
        }
        assert_eq!(flow.progress(), (10, 10));
        assert!(!flow.is_completed());
    }

    #[tokio::test]
    async fn test_reanswering_after_failure_retries_and_clears_error() {
        let failing = StubGenerator::Upstream {
            status: 503,
            message: "API Error (503)",
        };
        let mut flow = QuizFlow::new(Language::En);
        run_quiz(&mut flow, &failing).await;
        assert!(flow.error().is_some());

        let ok = StubGenerator::Recommendations(canned_recommendations());
        let outcome = flow.answer("Start my own design firm", &ok).await.unwrap();
        assert!(matches!(outcome, QuizOutcome::Completed(_)));
        assert!(flow.error().is_none());
    }

    #[tokio::test]
    async fn test_unparseable_recommendations_fail_the_flow() {
        let stub = StubGenerator::Recommendations(json!({"not": "an array"}));
        let mut flow = QuizFlow::new(Language::En);
        let outcome = run_quiz(&mut flow, &stub).await;
        assert!(matches!(outcome, QuizOutcome::Failed(_)));
    }

    #[tokio::test]
    async fn test_completion_applies_quiz_answers_to_profile() {
        let stub = StubGenerator::Recommendations(canned_recommendations());
        let mut flow = QuizFlow::new(Language::En);
        run_quiz(&mut flow, &stub).await;

        let mut profile = StudentProfile::default();
        flow.apply_to_profile(&mut profile);

        assert_eq!(profile.name, "Priya Sharma");
        assert_eq!(profile.class, "12th Grade");
        assert_eq!(profile.interests, vec!["Building apps", "robotics"]);
        assert_eq!(profile.strengths, vec!["Physics", "Maths"]);
        assert!((80..=95).contains(&profile.aptitude_score));
        assert_eq!(profile.profile_completion, 75);
    }

    #[tokio::test]
    async fn test_hindi_flow_uses_localized_error_prefix() {
        let stub = StubGenerator::Upstream {
            status: 500,
            message: "API Error (500)",
        };
        let mut flow = QuizFlow::new(Language::Hi);
        let outcome = run_quiz(&mut flow, &stub).await;
        match outcome {
            QuizOutcome::Failed(message) => {
                assert!(message.starts_with("क्षमा करें"));
                assert!(message.ends_with("API Error (500)"));
            }
            _ => panic!("expected failure"),
        }
    }
}
