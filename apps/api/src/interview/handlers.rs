//! Axum route handlers for the Interview API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::interview::interviewer::{evaluate_answer, next_question};
use crate::models::interview::InterviewFeedback;
use crate::models::profile::UserProfile;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextQuestionRequest {
    pub profile: UserProfile,
    #[serde(default)]
    pub focus_skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct NextQuestionResponse {
    pub question: String,
}

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub profile: UserProfile,
    pub question: String,
    pub answer: String,
}

/// POST /api/v1/interview/question
///
/// Produces the next mock-interview question. Focus skills default to the
/// profile's declared skills when the client sends none.
pub async fn handle_next_question(
    State(state): State<AppState>,
    Json(request): Json<NextQuestionRequest>,
) -> Result<Json<NextQuestionResponse>, AppError> {
    let focus_skills = if request.focus_skills.is_empty() {
        request.profile.skills.clone()
    } else {
        request.focus_skills
    };

    if focus_skills.is_empty() {
        return Err(AppError::Validation(
            "focusSkills cannot be empty".to_string(),
        ));
    }

    let question = next_question(&request.profile, &focus_skills, &state.gemini).await?;

    Ok(Json(NextQuestionResponse { question }))
}

/// POST /api/v1/interview/evaluate
///
/// Scores a candidate answer and returns critique plus an improved answer.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<InterviewFeedback>, AppError> {
    if request.question.trim().is_empty() {
        return Err(AppError::Validation("question cannot be empty".to_string()));
    }
    if request.answer.trim().is_empty() {
        return Err(AppError::Validation("answer cannot be empty".to_string()));
    }

    let feedback = evaluate_answer(
        &request.profile,
        &request.question,
        &request.answer,
        &state.gemini,
    )
    .await?;

    Ok(Json(feedback))
}
