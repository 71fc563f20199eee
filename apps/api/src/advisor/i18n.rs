//! Languages and the localized strings the guidance flows surface.
//!
//! Only strings that flow logic emits live here — everything presentational
//! belongs to the frontend.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl Language {
    /// Name used in system instructions ("Respond in the language: ...").
    pub fn name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "Hindi",
        }
    }
}

/// Flow-level strings per language.
pub struct FlowStrings {
    /// Prefixed onto the proxy error when quiz generation fails.
    pub error_generating_recommendations: &'static str,
    /// Prefixed onto the proxy error when roadmap generation fails.
    pub error_generating_path: &'static str,
    /// Appended as the AI turn when a chat call fails. The real error is
    /// never shown on the chat flow.
    pub connection_trouble: &'static str,
    /// Greeting seeding a fresh transcript. `{name}` is replaced.
    pub greeting: &'static str,
}

const EN: FlowStrings = FlowStrings {
    error_generating_recommendations: "Sorry, I couldn't generate recommendations.",
    error_generating_path: "Sorry, I couldn't generate the career path.",
    connection_trouble: "I seem to be having trouble connecting. Please try again in a moment.",
    greeting: "Hello {name}! I am Sahayak AI. How can I help you today?",
};

const HI: FlowStrings = FlowStrings {
    error_generating_recommendations: "क्षमा करें, मैं सिफारिशें नहीं बना सका।",
    error_generating_path: "क्षमा करें, मैं कैरियर पथ नहीं बना सका।",
    connection_trouble: "लगता है कनेक्शन में समस्या आ रही है। कृपया थोड़ी देर में पुनः प्रयास करें।",
    greeting: "नमस्ते {name}! मैं सहायक AI हूं। आज मैं आपकी कैसे मदद कर सकता हूं?",
};

pub fn strings(language: Language) -> &'static FlowStrings {
    match language {
        Language::En => &EN,
        Language::Hi => &HI,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_serde_tags_are_lowercase() {
        assert_eq!(serde_json::to_string(&Language::Hi).unwrap(), r#""hi""#);
        assert_eq!(
            serde_json::from_str::<Language>(r#""en""#).unwrap(),
            Language::En
        );
    }

    #[test]
    fn test_greeting_templates_carry_name_placeholder() {
        for language in [Language::En, Language::Hi] {
            assert!(strings(language).greeting.contains("{name}"));
        }
    }

    #[test]
    fn test_default_language_is_english() {
        assert_eq!(Language::default(), Language::En);
    }
}
