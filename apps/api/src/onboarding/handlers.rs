//! Axum route handlers for the Onboarding API.

use axum::extract::Multipart;
use axum::Json;
use bytes::Bytes;
use serde::Serialize;

use crate::errors::AppError;
use crate::onboarding::resume::{extract_resume_text, MAX_UPLOAD_BYTES};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeUploadResponse {
    pub file_name: String,
    pub text: String,
}

/// POST /api/v1/onboarding/resume
///
/// Accepts a multipart upload under the field name `file` and returns the
/// extracted resume text for the client to fold into its profile.
pub async fn handle_resume_upload(
    mut multipart: Multipart,
) -> Result<Json<ResumeUploadResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("resume").to_string();
        let bytes: Bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

        if bytes.len() > MAX_UPLOAD_BYTES {
            return Err(AppError::Validation(format!(
                "Resume exceeds the {} MB upload limit",
                MAX_UPLOAD_BYTES / (1024 * 1024)
            )));
        }

        let text = extract_resume_text(&file_name, &bytes)?;

        tracing::debug!("Extracted {} chars of resume text from '{file_name}'", text.len());

        return Ok(Json(ResumeUploadResponse { file_name, text }));
    }

    Err(AppError::Validation(
        "multipart field 'file' is required".to_string(),
    ))
}
