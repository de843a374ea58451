// All Gemini prompt constants and response schemas for the Interview module.

use serde_json::{json, Value};

/// Next-question prompt template.
/// Replace: {level}, {role}, {skills}
pub const NEXT_QUESTION_PROMPT_TEMPLATE: &str = "Generate ONE challenging interview question for a {level} {role} focusing on {skills}. Return only the question text as a plain string.";

/// Fixed fallback when the question call legitimately returns no text.
pub const NEXT_QUESTION_FALLBACK: &str =
    "Can you explain a complex technical problem you solved recently and the steps you took?";

/// Evaluation prompt template.
/// Replace: {level}, {role}, {question}, {answer}
pub const EVALUATE_PROMPT_TEMPLATE: &str = r#"Act as a senior technical interviewer for a {level} {role} position.
Question: "{question}"
Candidate Answer: "{answer}"
Evaluate the response. Provide a score (1-100), a concise critique, and a "perfect" version of the answer."#;

/// Response schema for the evaluation call.
pub fn evaluation_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "score": { "type": "NUMBER" },
            "critique": { "type": "STRING" },
            "improvedAnswer": { "type": "STRING" }
        },
        "required": ["score", "critique", "improvedAnswer"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluation_schema_requires_all_fields() {
        let schema = evaluation_schema();
        let required = schema["required"].as_array().unwrap();
        assert_eq!(required.len(), 3);
        assert!(required.contains(&json!("improvedAnswer")));
    }
}
