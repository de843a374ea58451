// All Gemini prompt constants and response schemas for the Assessment module.

use serde_json::{json, Value};

/// Assessment generation prompt template.
/// Replace: {level}, {role}, {skills}
pub const ASSESSMENT_PROMPT_TEMPLATE: &str = r#"Generate 5 high-quality technical interview questions for a {level} {role} developer.
Focus on: {skills}.
Include a mix of conceptual and scenario-based questions.
Return a JSON array with: id, text, type ("MultipleChoice" or "Scenario"), options (if multiple choice), correctAnswer (the full string of the correct choice), explanation (why it's correct), difficulty (1-10).
For MultipleChoice questions the correctAnswer MUST be one of the options, verbatim."#;

/// Response schema for the assessment call.
pub fn assessment_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": { "type": "STRING" },
                "text": { "type": "STRING" },
                "type": { "type": "STRING" },
                "options": { "type": "ARRAY", "items": { "type": "STRING" } },
                "correctAnswer": { "type": "STRING" },
                "explanation": { "type": "STRING" },
                "difficulty": { "type": "NUMBER" }
            },
            "required": ["id", "text", "type", "difficulty"]
        }
    })
}
