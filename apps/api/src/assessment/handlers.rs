//! Axum route handlers for the Assessment API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::assessment::generator::generate_assessment;
use crate::errors::AppError;
use crate::models::assessment::AssessmentQuestion;
use crate::models::profile::UserProfile;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AssessmentResponse {
    pub questions: Vec<AssessmentQuestion>,
}

/// POST /api/v1/assessment/generate
///
/// Generates the adaptive onboarding quiz for a freshly built profile.
pub async fn handle_generate_assessment(
    State(state): State<AppState>,
    Json(profile): Json<UserProfile>,
) -> Result<Json<AssessmentResponse>, AppError> {
    if profile.skills.is_empty() {
        return Err(AppError::Validation("skills cannot be empty".to_string()));
    }

    let questions = generate_assessment(&profile, &state.gemini).await?;

    Ok(Json(AssessmentResponse { questions }))
}
