//! The fixed, ordered quiz question banks.
//!
//! One answer is collected per question; advancing is driven purely by
//! answering the current question. Question ids are shared across languages
//! so answers keep the same keys either way.

use serde::Serialize;

use crate::advisor::i18n::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Free text input.
    Text,
    /// Single-select dropdown.
    Select,
    /// Single-choice buttons.
    Radio,
}

#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    pub kind: QuestionKind,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub options: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
}

const fn text(id: &'static str, text: &'static str, placeholder: &'static str) -> Question {
    Question {
        id,
        text,
        kind: QuestionKind::Text,
        options: &[],
        placeholder: Some(placeholder),
    }
}

const fn select(id: &'static str, text: &'static str, options: &'static [&'static str]) -> Question {
    Question {
        id,
        text,
        kind: QuestionKind::Select,
        options,
        placeholder: None,
    }
}

const fn radio(id: &'static str, text: &'static str, options: &'static [&'static str]) -> Question {
    Question {
        id,
        text,
        kind: QuestionKind::Radio,
        options,
        placeholder: None,
    }
}

const QUESTIONS_EN: &[Question] = &[
    text("name", "To start, what is your full name?", "e.g., Priya Sharma"),
    select(
        "grade",
        "Which grade are you in, or what is your current educational status?",
        &["10th Grade", "11th Grade", "12th Grade", "Completed 12th", "In College"],
    ),
    text(
        "favoriteSubject",
        "Think about your classes. Which subject do you enjoy the most, and why?",
        "e.g., \"Physics, because I love solving problems.\"",
    ),
    radio(
        "learningStyle",
        "How do you learn best?",
        &[
            "By seeing (diagrams, videos)",
            "By doing (experiments, projects)",
            "By reading (textbooks, articles)",
            "By listening (lectures, discussions)",
        ],
    ),
    text(
        "freeTime",
        "What do you genuinely enjoy doing in your free time?",
        "e.g., Building apps, painting, debating, playing guitar",
    ),
    radio(
        "problemSolving",
        "When faced with a difficult challenge, what is your first instinct?",
        &[
            "Analyze it with logic and data",
            "Brainstorm creative and new solutions",
            "Organize a plan and follow it step-by-step",
            "Discuss it with others to find a solution",
        ],
    ),
    radio(
        "workEnvironment",
        "Imagine your future workplace. What feels right?",
        &[
            "A busy, collaborative team environment",
            "A quiet, focused space for independent work",
            "A dynamic, flexible and creative studio",
            "A stable, structured, and predictable office",
        ],
    ),
    radio(
        "careerValues",
        "What is MOST important to you in a future career?",
        &[
            "High earning potential and financial security",
            "Making a positive impact on society",
            "Work-life balance and personal time",
            "Creativity, innovation, and self-expression",
        ],
    ),
    select(
        "interestedFields",
        "Which of these broad fields sparks your curiosity the most?",
        &[
            "Technology & Engineering",
            "Healthcare & Medicine",
            "Business & Finance",
            "Arts & Design",
            "Law & Public Policy",
            "Sciences & Research",
        ],
    ),
    text(
        "dreamGoal",
        "Don't be shy! What is a dream goal or achievement you imagine for yourself?",
        "e.g., \"Lead a team at Google,\" \"Start my own design firm\"",
    ),
];

const QUESTIONS_HI: &[Question] = &[
    text("name", "शुरू करने के लिए, आपका पूरा नाम क्या है?", "जैसे, प्रिया शर्मा"),
    select(
        "grade",
        "आप किस कक्षा में हैं, या आपकी वर्तमान शैक्षिक स्थिति क्या है?",
        &["10वीं कक्षा", "11वीं कक्षा", "12वीं कक्षा", "12वीं पूरी की", "कॉलेज में"],
    ),
    text(
        "favoriteSubject",
        "अपनी कक्षाओं के बारे में सोचें। आपको कौन सा विषय सबसे ज्यादा पसंद है, और क्यों?",
        "जैसे, \"भौतिकी, क्योंकि मुझे समस्याएं हल करना पसंद है।\"",
    ),
    radio(
        "learningStyle",
        "आप सबसे अच्छे तरीके से कैसे सीखते हैं?",
        &[
            "देखकर (आरेख, वीडियो)",
            "करके (प्रयोग, परियोजनाएं)",
            "पढ़कर (पाठ्यपुस्तकें, लेख)",
            "सुनकर (व्याख्यान, चर्चा)",
        ],
    ),
    text(
        "freeTime",
        "आप अपने खाली समय में वास्तव में क्या करना पसंद करते हैं?",
        "जैसे, ऐप बनाना, पेंटिंग, बहस, गिटार बजाना",
    ),
    radio(
        "problemSolving",
        "जब एक कठिन चुनौती का सामना करना पड़ता है, तो आपकी पहली वृत्ति क्या होती है?",
        &[
            "तर्क और डेटा के साथ इसका विश्लेषण करें",
            "रचनात्मक और नए समाधानों पर विचार करें",
            "एक योजना बनाएं और उसका चरण-दर-चरण पालन करें",
            "समाधान खोजने के लिए दूसरों के साथ चर्चा करें",
        ],
    ),
    radio(
        "workEnvironment",
        "अपने भविष्य के कार्यस्थल की कल्पना करें। क्या सही लगता है?",
        &[
            "एक व्यस्त, सहयोगी टीम का माहौल",
            "स्वतंत्र काम के लिए एक शांत, केंद्रित स्थान",
            "एक गतिशील, लचीला और रचनात्मक स्टूडियो",
            "एक स्थिर, संरचित और अनुमानित कार्यालय",
        ],
    ),
    radio(
        "careerValues",
        "भविष्य के करियर में आपके लिए सबसे महत्वपूर्ण क्या है?",
        &[
            "उच्च कमाई की क्षमता और वित्तीय सुरक्षा",
            "समाज पर सकारात्मक प्रभाव डालना",
            "कार्य-जीवन संतुलन और व्यक्तिगत समय",
            "रचनात्मकता, नवीनता और आत्म-अभिव्यक्ति",
        ],
    ),
    select(
        "interestedFields",
        "इनमें से कौन सा व्यापक क्षेत्र आपकी जिज्ञासा को सबसे अधिक जगाता है?",
        &[
            "प्रौद्योगिकी और इंजीनियरिंग",
            "स्वास्थ्य सेवा और चिकित्सा",
            "व्यापार और वित्त",
            "कला और डिजाइन",
            "कानून और सार्वजनिक नीति",
            "विज्ञान और अनुसंधान",
        ],
    ),
    text(
        "dreamGoal",
        "शर्माएं नहीं! आप अपने लिए क्या सपना या उपलब्धि की कल्पना करते हैं?",
        "जैसे, \"Google में एक टीम का नेतृत्व करना,\" \"अपनी खुद की डिजाइन फर्म शुरू करना\"",
    ),
];

pub fn questions(language: Language) -> &'static [Question] {
    match language {
        Language::En => QUESTIONS_EN,
        Language::Hi => QUESTIONS_HI,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banks_share_length_and_ids() {
        let en = questions(Language::En);
        let hi = questions(Language::Hi);
        assert_eq!(en.len(), 10);
        assert_eq!(en.len(), hi.len());
        for (a, b) in en.iter().zip(hi) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.kind, b.kind);
            assert_eq!(a.options.len(), b.options.len());
        }
    }

    #[test]
    fn test_first_question_collects_the_name() {
        assert_eq!(questions(Language::En)[0].id, "name");
        assert_eq!(questions(Language::En)[0].kind, QuestionKind::Text);
    }

    #[test]
    fn test_choice_questions_have_options_and_no_placeholder() {
        for question in questions(Language::En) {
            match question.kind {
                QuestionKind::Text => {
                    assert!(question.options.is_empty());
                    assert!(question.placeholder.is_some());
                }
                QuestionKind::Select | QuestionKind::Radio => {
                    assert!(!question.options.is_empty());
                    assert!(question.placeholder.is_none());
                }
            }
        }
    }

    #[test]
    fn test_question_serializes_without_empty_fields() {
        let wire = serde_json::to_value(&questions(Language::En)[0]).unwrap();
        assert_eq!(wire["id"], "name");
        assert_eq!(wire["kind"], "text");
        assert!(wire.get("options").is_none());
    }
}
