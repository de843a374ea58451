//! Axum route handlers for the Roadmap API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::analysis::SkillGap;
use crate::models::profile::UserProfile;
use crate::models::roadmap::RoadmapItem;
use crate::roadmap::builder::generate_roadmap;
use crate::roadmap::study::generate_study_guide;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RoadmapRequest {
    pub profile: UserProfile,
    #[serde(default)]
    pub gaps: Vec<SkillGap>,
}

#[derive(Debug, Serialize)]
pub struct RoadmapResponse {
    pub items: Vec<RoadmapItem>,
}

#[derive(Debug, Deserialize)]
pub struct StudyGuideRequest {
    pub resource: String,
    pub topic: String,
}

#[derive(Debug, Serialize)]
pub struct StudyGuideResponse {
    pub content: String,
}

/// POST /api/v1/roadmap/generate
///
/// Builds (or rebuilds) the learning roadmap from the current gap report.
/// Called again later with the same shape to refresh against market trends.
pub async fn handle_generate_roadmap(
    State(state): State<AppState>,
    Json(request): Json<RoadmapRequest>,
) -> Result<Json<RoadmapResponse>, AppError> {
    if request.profile.skills.is_empty() {
        return Err(AppError::Validation("skills cannot be empty".to_string()));
    }

    let items = generate_roadmap(&request.profile, &request.gaps, &state.gemini).await?;

    Ok(Json(RoadmapResponse { items }))
}

/// POST /api/v1/roadmap/study-guide
///
/// Expands one roadmap resource into a markdown quick-study guide.
pub async fn handle_study_guide(
    State(state): State<AppState>,
    Json(request): Json<StudyGuideRequest>,
) -> Result<Json<StudyGuideResponse>, AppError> {
    if request.resource.trim().is_empty() {
        return Err(AppError::Validation("resource cannot be empty".to_string()));
    }
    if request.topic.trim().is_empty() {
        return Err(AppError::Validation("topic cannot be empty".to_string()));
    }

    let content = generate_study_guide(&request.resource, &request.topic, &state.gemini).await?;

    Ok(Json(StudyGuideResponse { content }))
}
