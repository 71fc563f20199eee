//! Session-held entities of the guidance flows.
//!
//! None of these survive a restart — there is no backing store. Identity is
//! positional (recommendations) or by title (career paths).

use serde::{Deserialize, Serialize};

/// One AI-generated suggestion. Produced in sets of 4-5 from quiz answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    /// e.g. "Stream/Path", "Career Roadmap", "Skill to Build".
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerPathStep {
    /// e.g. "Foundation (11th-12th)", "Higher Education", "Job Market".
    pub stage: String,
    pub description: String,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPath {
    pub title: String,
    pub avg_salary: String,
    pub timeframe: String,
    pub steps: Vec<CareerPathStep>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

/// Client-visible student profile. Seeded from the auth display name,
/// mutated by quiz completion and manual edits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub name: String,
    pub class: String,
    pub location: String,
    pub aptitude_score: u8,
    pub profile_completion: u8,
    pub goals: Vec<String>,
    pub interests: Vec<String>,
    pub strengths: Vec<String>,
}

impl Default for StudentProfile {
    fn default() -> Self {
        StudentProfile {
            name: "Student".to_string(),
            class: "10th Grade".to_string(),
            location: "India".to_string(),
            aptitude_score: 0,
            profile_completion: 25,
            goals: Vec::new(),
            interests: Vec::new(),
            strengths: Vec::new(),
        }
    }
}

/// Splits a comma-separated field into trimmed, non-empty items — the shape
/// the profile form and quiz answers use for interests/strengths.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}
