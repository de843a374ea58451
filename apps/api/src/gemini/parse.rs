//! Payload extraction — pulls a JSON object or array out of free-form model text.
//!
//! Gemini is asked for `application/json`, but grounded or chatty responses
//! still arrive wrapped in prose ("Sure! Here you go: {...}"). The extraction
//! is deliberately simple: the span from the first `{` or `[` to the last
//! matching close character in the text. If a response contains two
//! independent fragments, the span covers both and the decode fails — callers
//! get `MalformedPayload`, never a half-merged value.

use serde::de::DeserializeOwned;

use crate::gemini::GeminiError;

/// Decodes model output text into `T`.
///
/// Empty or whitespace-only text fails with `EmptyResponse` before any JSON
/// handling. Otherwise the first balanced-looking span is decoded; if no span
/// exists the whole text is tried as-is. Syntactically invalid JSON and
/// missing required fields both surface as `MalformedPayload`.
pub fn parse_payload<T: DeserializeOwned>(text: &str) -> Result<T, GeminiError> {
    if text.trim().is_empty() {
        return Err(GeminiError::EmptyResponse);
    }

    let candidate = find_json_span(text).unwrap_or(text);

    serde_json::from_str(candidate).map_err(|e| {
        tracing::error!("Failed to decode model JSON payload: {e}");
        GeminiError::MalformedPayload(e.to_string())
    })
}

/// Returns the substring from the first `{` or `[` to the last corresponding
/// close character after it. Openers with no matching close later in the text
/// are skipped in favour of the next candidate.
fn find_json_span(text: &str) -> Option<&str> {
    for (start, ch) in text.char_indices() {
        let close = match ch {
            '{' => '}',
            '[' => ']',
            _ => continue,
        };
        if let Some(end) = text.rfind(close) {
            if end > start {
                return Some(&text[start..=end]);
            }
        }
    }
    None
}
