//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};

use crate::analysis::analyzer::analyze_skill_gaps;
use crate::errors::AppError;
use crate::models::analysis::GapAnalysis;
use crate::models::profile::UserProfile;
use crate::state::AppState;

/// POST /api/v1/analysis/gaps
///
/// Analyzes the profile (and resume text, if present) against the target role
/// and returns ordered skill gaps plus a narrative resume read.
pub async fn handle_analyze_gaps(
    State(state): State<AppState>,
    Json(profile): Json<UserProfile>,
) -> Result<Json<GapAnalysis>, AppError> {
    if profile.skills.is_empty() {
        return Err(AppError::Validation("skills cannot be empty".to_string()));
    }

    let analysis = analyze_skill_gaps(&profile, &state.gemini).await?;

    Ok(Json(analysis))
}
