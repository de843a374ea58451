// All Gemini prompt constants and response schemas for the Analysis module.

use serde_json::{json, Value};

/// Gap analysis prompt template.
/// Replace: {role}, {level}, {skills}, {confidence}, {resume}
pub const GAP_ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze this developer profile and resume. Identify technical skill gaps based on their target role: {role} at {level} level.
Declared Skills: {skills}
Confidence: {confidence}
Resume Text: {resume}

For each gap, rate gapLevel as exactly one of "Low", "Medium" or "High" and justify it in one or two sentences.
Also provide resumeAnalysis: a short narrative read of the resume against the target role.
Output valid JSON only."#;

/// Response schema for the gap analysis call.
pub fn gap_analysis_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "gaps": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "skill": { "type": "STRING" },
                        "gapLevel": { "type": "STRING" },
                        "reason": { "type": "STRING" }
                    },
                    "required": ["skill", "gapLevel", "reason"]
                }
            },
            "resumeAnalysis": { "type": "STRING" }
        },
        "required": ["gaps", "resumeAnalysis"]
    })
}
