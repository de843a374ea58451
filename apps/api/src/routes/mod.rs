pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::onboarding::resume::MAX_UPLOAD_BYTES;
use crate::state::AppState;
use crate::{analysis, assessment, interview, news, onboarding, roadmap};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Onboarding
        .route(
            "/api/v1/onboarding/resume",
            post(onboarding::handlers::handle_resume_upload)
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        // Assessment
        .route(
            "/api/v1/assessment/generate",
            post(assessment::handlers::handle_generate_assessment),
        )
        // Analysis
        .route(
            "/api/v1/analysis/gaps",
            post(analysis::handlers::handle_analyze_gaps),
        )
        // Roadmap
        .route(
            "/api/v1/roadmap/generate",
            post(roadmap::handlers::handle_generate_roadmap),
        )
        .route(
            "/api/v1/roadmap/study-guide",
            post(roadmap::handlers::handle_study_guide),
        )
        // Interview
        .route(
            "/api/v1/interview/question",
            post(interview::handlers::handle_next_question),
        )
        .route(
            "/api/v1/interview/evaluate",
            post(interview::handlers::handle_evaluate),
        )
        // News
        .route("/api/v1/news", get(news::handlers::handle_fetch_news))
        .with_state(state)
}
