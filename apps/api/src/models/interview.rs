//! Mock-interview evaluation result.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewFeedback {
    /// 0–100 by producer contract; clamped on receipt.
    pub score: f32,
    pub critique: String,
    #[serde(rename = "improvedAnswer")]
    pub improved_answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_deserializes_from_model_json() {
        let json = r#"{"score": 82, "critique": "Good", "improvedAnswer": "Better"}"#;
        let feedback: InterviewFeedback = serde_json::from_str(json).unwrap();
        assert!((feedback.score - 82.0).abs() < f32::EPSILON);
        assert_eq!(feedback.critique, "Good");
        assert_eq!(feedback.improved_answer, "Better");
    }

    #[test]
    fn test_feedback_missing_critique_is_rejected() {
        let json = r#"{"score": 50, "improvedAnswer": "x"}"#;
        assert!(serde_json::from_str::<InterviewFeedback>(json).is_err());
    }
}
