//! Resume text extraction — PDF via pdf-extract, anything else as UTF-8.

use crate::errors::AppError;

/// Upper bound on an uploaded resume file.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
/// Extracted text is capped before prompt embedding; resumes longer than this
/// add token cost without adding signal.
const MAX_RESUME_CHARS: usize = 20_000;

/// Extracts prompt-ready resume text from an uploaded file.
/// PDF payloads go through pdf-extract; everything else is treated as plain
/// text. Extraction failures are the uploader's problem (400), not a 500.
pub fn extract_resume_text(file_name: &str, bytes: &[u8]) -> Result<String, AppError> {
    let raw = if is_pdf(file_name, bytes) {
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
            AppError::Validation(format!("Could not extract text from PDF: {e}"))
        })?
    } else {
        String::from_utf8_lossy(bytes).into_owned()
    };

    let text = truncate_chars(&tidy_text(&raw), MAX_RESUME_CHARS);
    if text.is_empty() {
        return Err(AppError::Validation(
            "Uploaded resume contains no extractable text".to_string(),
        ));
    }

    Ok(text)
}

fn is_pdf(file_name: &str, bytes: &[u8]) -> bool {
    bytes.starts_with(b"%PDF-") || file_name.to_ascii_lowercase().ends_with(".pdf")
}

/// Trims trailing whitespace per line and collapses runs of blank lines.
/// PDF extraction tends to leave both behind.
fn tidy_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut blank_run = 0usize;

    for line in raw.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        out.push_str(line);
        out.push('\n');
    }

    out.trim().to_string()
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    tracing::warn!("Resume text truncated to {max_chars} characters");
    text.chars().take(max_chars).collect()
}
