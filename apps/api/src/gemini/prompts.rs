#![allow(dead_code)]

// Shared prompt constants and prompt-building utilities.
// Each feature that needs Gemini calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Instruction appended to structured prompts. The response schema already
/// constrains the output, but flash models drift less when told twice.
pub const JSON_ONLY_INSTRUCTION: &str = "Output valid JSON only. \
    Do not include any text outside the JSON payload. \
    Do not use markdown code fences.";

/// Replaces `{name}` placeholders in a prompt template.
/// Placeholders that do not appear in `pairs` are left untouched.
pub fn fill_template(template: &str, pairs: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in pairs {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_template_replaces_all_occurrences() {
        let filled = fill_template("{role} at {level}, again: {role}", &[("role", "Backend"), ("level", "Senior")]);
        assert_eq!(filled, "Backend at Senior, again: Backend");
    }

    #[test]
    fn test_fill_template_leaves_unknown_placeholders() {
        let filled = fill_template("{role} / {unknown}", &[("role", "Mobile")]);
        assert_eq!(filled, "Mobile / {unknown}");
    }
}
