//! Assessment questions produced by the model for the onboarding quiz.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionKind {
    MultipleChoice,
    Scenario,
}

/// A single assessment question. The producer contract requires id, text,
/// kind and difficulty; options, the canonical answer and the explanation
/// are only meaningful for multiple-choice questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentQuestion {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(rename = "correctAnswer", default, skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    /// 1–10 by producer contract.
    pub difficulty: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiple_choice_question_deserializes() {
        let json = r#"{
            "id": "q1",
            "text": "Which HTTP status code indicates a client error?",
            "type": "MultipleChoice",
            "options": ["200", "301", "404", "502"],
            "correctAnswer": "404",
            "explanation": "4xx codes are client errors.",
            "difficulty": 2
        }"#;
        let q: AssessmentQuestion = serde_json::from_str(json).unwrap();
        assert_eq!(q.kind, QuestionKind::MultipleChoice);
        assert_eq!(q.options.as_ref().unwrap().len(), 4);
        assert_eq!(q.correct_answer.as_deref(), Some("404"));
    }

    #[test]
    fn test_scenario_question_needs_no_options() {
        let json = r#"{
            "id": "q2",
            "text": "Walk through debugging a memory leak in production.",
            "type": "Scenario",
            "difficulty": 7.5
        }"#;
        let q: AssessmentQuestion = serde_json::from_str(json).unwrap();
        assert_eq!(q.kind, QuestionKind::Scenario);
        assert!(q.options.is_none());
        assert!(q.correct_answer.is_none());
    }

    #[test]
    fn test_question_without_difficulty_is_rejected() {
        let json = r#"{"id": "q3", "text": "x", "type": "Scenario"}"#;
        assert!(serde_json::from_str::<AssessmentQuestion>(json).is_err());
    }
}
