// All Gemini prompt constants and response schemas for the Roadmap module.

use serde_json::{json, Value};

/// Roadmap generation prompt template.
/// Replace: {level}, {role}, {gaps}
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"Create a personalized learning roadmap for a {level} {role}.
Gaps: {gaps}
Provide exactly 3 high-quality learning resources for each topic — each a URL or a well-known resource name.
priority is one of "High", "Medium", "Low"; type is "Learn" for new ground or "Revise" for weak areas; status starts as "Pending".
Return a JSON array of roadmap items with: id, topic, priority, type, resources, status."#;

/// Quick-study prompt template.
/// Replace: {resource}, {topic}
pub const STUDY_GUIDE_PROMPT_TEMPLATE: &str = r#"Provide a comprehensive "Quick Study" guide for the following resource/topic: "{resource}" in the context of "{topic}".
Format it in Markdown with bullet points, code examples if applicable, and key takeaways for an interview."#;

/// Fixed fallback when the study-guide call legitimately returns no text.
pub const STUDY_GUIDE_FALLBACK: &str = "Failed to generate study content. Please try again.";

/// Response schema for the roadmap call.
pub fn roadmap_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": { "type": "STRING" },
                "topic": { "type": "STRING" },
                "priority": { "type": "STRING" },
                "type": { "type": "STRING" },
                "resources": { "type": "ARRAY", "items": { "type": "STRING" } },
                "status": { "type": "STRING" }
            },
            "required": ["id", "topic", "priority", "type", "resources", "status"]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_requires_every_item_field() {
        let schema = roadmap_schema();
        let required = schema["items"]["required"].as_array().unwrap();
        for field in ["id", "topic", "priority", "type", "resources", "status"] {
            assert!(required.contains(&json!(field)), "missing {field}");
        }
    }
}
