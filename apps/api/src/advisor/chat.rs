//! Chat flow — the Sahayak AI assistant.
//!
//! The transcript is in-memory, ordered, and replayed upstream in full on
//! every turn; there is no truncation. The user's message is appended before
//! the call (optimistic), and a failure appends the localized apology as the
//! AI turn instead of surfacing the real error — unlike the quiz and
//! career-path flows, this flow never shows the underlying message.

use tracing::error;

use crate::advisor::i18n::{strings, Language};
use crate::advisor::models::{ChatMessage, Sender, StudentProfile};
use crate::advisor::prompts::chat_payload;
use crate::errors::AppError;
use crate::proxy::{Generate, Generated, Purpose};

pub struct ChatSession {
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    /// Starts a transcript seeded with the localized greeting.
    pub fn new(profile_name: &str, language: Language) -> Self {
        ChatSession {
            messages: vec![ChatMessage {
                sender: Sender::Ai,
                text: strings(language).greeting.replace("{name}", profile_name),
            }],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// One chat turn. Appends the user message, replays the transcript
    /// upstream, and appends exactly one AI message — the model's reply, or
    /// the apology on any failure. Returns the appended AI message.
    pub async fn send(
        &mut self,
        text: &str,
        profile: &StudentProfile,
        language: Language,
        generator: &dyn Generate,
    ) -> Result<&ChatMessage, AppError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::Validation("Message cannot be empty".to_string()));
        }

        self.messages.push(ChatMessage {
            sender: Sender::User,
            text: text.to_string(),
        });

        let payload = chat_payload(&self.messages, profile, language);
        let reply = match generator.generate(&payload, Purpose::Chat).await {
            Ok(Generated::Chat { response }) => response,
            Ok(_) => {
                error!("Sahayak AI error: chat call returned a non-chat shape");
                strings(language).connection_trouble.to_string()
            }
            Err(e) => {
                error!("Sahayak AI error: {e}");
                strings(language).connection_trouble.to_string()
            }
        };

        self.messages.push(ChatMessage {
            sender: Sender::Ai,
            text: reply,
        });
        Ok(self.messages.last().expect("just pushed"))
    }
}
