//! Axum route handlers for the News API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::news::TechNewsResponse;
use crate::models::profile::Role;
use crate::news::feed::fetch_tech_news;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct NewsQuery {
    pub role: Role,
}

/// GET /api/v1/news?role=Backend
///
/// Returns the search-grounded market-news feed for the role.
pub async fn handle_fetch_news(
    State(state): State<AppState>,
    Query(query): Query<NewsQuery>,
) -> Result<Json<TechNewsResponse>, AppError> {
    let news = fetch_tech_news(query.role, &state.gemini).await?;

    Ok(Json(news))
}
