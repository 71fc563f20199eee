//! System instructions, response schemas, and payload assembly for the three
//! guidance flows.
//!
//! Each flow produces the full `{contents, systemInstruction,
//! generationConfig}` body here; the proxy forwards it verbatim, so every
//! Gemini-facing convention lives in this one file.

use serde_json::{json, Map, Value};

use crate::advisor::i18n::Language;
use crate::advisor::models::{ChatMessage, Sender, StudentProfile};

/// Quiz counselor persona. Replace `{language}`.
const QUIZ_SYSTEM_TEMPLATE: &str = "Act as Sahayak, an expert career and education counselor for students in India. \
A student has just completed a quiz. Based on their answers, generate 4-5 personalized, motivational, and student-friendly recommendations. \
Respond in the language: {language}. The recommendations must cover:\n\
1.  The best academic stream or degree path.\n\
2.  A potential career path roadmap (Course -> Exams -> Jobs).\n\
3.  Skill development activities.\n\
For each recommendation, provide a title, a short description, its type (e.g., 'Stream/Path', 'Career Roadmap', 'Skill to Build'), \
and a brief 'reasoning' explaining why it's a good fit. Ensure the output is a valid JSON array matching the provided schema.";

/// Roadmap persona. Replace `{title}` and `{language}`.
const CAREER_PATH_SYSTEM_TEMPLATE: &str = "Act as an expert career counselor in India. \
A student is exploring the career path for \"{title}\". Generate a detailed, step-by-step career path roadmap. \
Respond in the language: {language}. The roadmap should be structured as a JSON object with a title, avgSalary, timeframe, and an array of steps. \
Each step must have a 'stage' (e.g., 'Foundation (11th-12th)', 'Higher Education', 'Skill Development', 'Experience Building', 'Job Market'), \
a 'description' of that stage, and an array of 'details' (bullet points). Provide practical, India-specific advice.";

/// Chat assistant persona. Replace `{language}`, `{name}`, `{class}`,
/// `{interests}`.
const CHAT_SYSTEM_TEMPLATE: &str = "Act as Sahayak AI, a friendly and expert career counselor for students in India. \
Your response must be in {language}. The student you are talking to is {name}, who is in {class}. \
Their known interests include: {interests}. \
Your goal is to provide helpful, concise, and encouraging answers to their questions about career paths, \
entrance exams (like JEE, NEET, CUET), scholarships, and skill development. \
Format your responses for clarity: use **bold text** for emphasis and bullet points (using '* ' at the start of a line) for lists. \
Be specific to the Indian context where possible.";

/// Output constraint for quiz generation: an array of recommendation objects
/// with every field required.
fn quiz_response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "type": { "type": "STRING" },
                "title": { "type": "STRING" },
                "description": { "type": "STRING" },
                "reasoning": { "type": "STRING" }
            },
            "required": ["type", "title", "description", "reasoning"]
        }
    })
}

/// Output constraint for roadmap generation: fixed top-level fields plus an
/// array of stage objects.
fn career_path_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "avgSalary": { "type": "STRING" },
            "timeframe": { "type": "STRING" },
            "steps": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "stage": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "details": { "type": "ARRAY", "items": { "type": "STRING" } }
                    },
                    "required": ["stage", "description", "details"]
                }
            }
        },
        "required": ["title", "avgSalary", "timeframe", "steps"]
    })
}

fn generation_payload(contents: Value, system: &str, schema: Option<Value>) -> Value {
    let mut payload = json!({
        "contents": contents,
        "systemInstruction": { "parts": [{ "text": system }] },
    });
    if let Some(schema) = schema {
        payload["generationConfig"] = json!({
            "responseMimeType": "application/json",
            "responseSchema": schema,
        });
    }
    payload
}

/// Payload for quiz → recommendations. The accumulated answers are embedded
/// pretty-printed in the user query.
pub fn quiz_payload(answers: &Map<String, Value>, language: Language) -> Value {
    let system = QUIZ_SYSTEM_TEMPLATE.replace("{language}", language.name());
    let query = format!(
        "Student's Quiz Answers: {}",
        serde_json::to_string_pretty(answers).unwrap_or_default()
    );
    generation_payload(
        json!([{ "parts": [{ "text": query }] }]),
        &system,
        Some(quiz_response_schema()),
    )
}

/// Payload for recommendation → career path.
pub fn career_path_payload(title: &str, language: Language) -> Value {
    let system = CAREER_PATH_SYSTEM_TEMPLATE
        .replace("{title}", title)
        .replace("{language}", language.name());
    let query = format!("Generate the career path for: {title}");
    generation_payload(
        json!([{ "parts": [{ "text": query }] }]),
        &system,
        Some(career_path_response_schema()),
    )
}

/// Payload for a chat turn. The whole transcript (the new user message
/// included) is replayed with the upstream role vocabulary.
pub fn chat_payload(
    messages: &[ChatMessage],
    profile: &StudentProfile,
    language: Language,
) -> Value {
    let system = CHAT_SYSTEM_TEMPLATE
        .replace("{language}", language.name())
        .replace("{name}", &profile.name)
        .replace("{class}", &profile.class)
        .replace("{interests}", &profile.interests.join(", "));

    let contents: Vec<Value> = messages
        .iter()
        .map(|message| {
            let role = match message.sender {
                Sender::Ai => "model",
                Sender::User => "user",
            };
            json!({ "role": role, "parts": [{ "text": message.text }] })
        })
        .collect();

    generation_payload(Value::Array(contents), &system, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers() -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("name".to_string(), Value::String("Priya Sharma".into()));
        map.insert("grade".to_string(), Value::String("12th Grade".into()));
        map
    }

    #[test]
    fn test_quiz_payload_attaches_schema_and_answers() {
        let payload = quiz_payload(&answers(), Language::En);
        let schema = &payload["generationConfig"]["responseSchema"];
        assert_eq!(schema["type"], "ARRAY");
        assert_eq!(
            schema["items"]["required"],
            json!(["type", "title", "description", "reasoning"])
        );
        assert_eq!(
            payload["generationConfig"]["responseMimeType"],
            "application/json"
        );

        let query = payload["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(query.starts_with("Student's Quiz Answers:"));
        assert!(query.contains("Priya Sharma"));
    }

    #[test]
    fn test_quiz_system_names_the_output_language() {
        let payload = quiz_payload(&answers(), Language::Hi);
        let system = payload["systemInstruction"]["parts"][0]["text"]
            .as_str()
            .unwrap();
        assert!(system.contains("Respond in the language: Hindi"));
    }

    #[test]
    fn test_career_path_payload_names_the_title_in_system_and_query() {
        let payload = career_path_payload("Software Engineer", Language::En);
        let system = payload["systemInstruction"]["parts"][0]["text"]
            .as_str()
            .unwrap();
        assert!(system.contains("\"Software Engineer\""));
        assert_eq!(
            payload["contents"][0]["parts"][0]["text"],
            "Generate the career path for: Software Engineer"
        );
        assert_eq!(
            payload["generationConfig"]["responseSchema"]["required"],
            json!(["title", "avgSalary", "timeframe", "steps"])
        );
    }

    #[test]
    fn test_chat_payload_maps_roles_and_skips_schema() {
        let messages = vec![
            ChatMessage {
                sender: Sender::Ai,
                text: "Hello!".to_string(),
            },
            ChatMessage {
                sender: Sender::User,
                text: "Tell me about NEET.".to_string(),
            },
        ];
        let payload = chat_payload(&messages, &StudentProfile::default(), Language::En);

        assert_eq!(payload["contents"][0]["role"], "model");
        assert_eq!(payload["contents"][1]["role"], "user");
        assert_eq!(payload["contents"][1]["parts"][0]["text"], "Tell me about NEET.");
        assert!(payload.get("generationConfig").is_none());
    }

    #[test]
    fn test_chat_system_embeds_the_profile() {
        let mut profile = StudentProfile::default();
        profile.name = "Priya".to_string();
        profile.class = "12th Grade".to_string();
        profile.interests = vec!["AI".to_string(), "Robotics".to_string()];

        let payload = chat_payload(&[], &profile, Language::En);
        let system = payload["systemInstruction"]["parts"][0]["text"]
            .as_str()
            .unwrap();
        assert!(system.contains("Priya"));
        assert!(system.contains("12th Grade"));
        assert!(system.contains("AI, Robotics"));
    }
}
