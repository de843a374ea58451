//! Tech-news feed — search-grounded narrative with (title, uri) citations.

use chrono::{Datelike, Utc};

use crate::errors::AppError;
use crate::gemini::prompts::fill_template;
use crate::gemini::{GeminiClient, GenerateResponse, PRO_MODEL};
use crate::models::news::{NewsSource, TechNewsResponse};
use crate::models::profile::Role;
use crate::news::prompts::{
    SOURCE_TITLE_FALLBACK, SOURCE_URI_FALLBACK, TECH_NEWS_FALLBACK, TECH_NEWS_PROMPT_TEMPLATE,
};

pub async fn fetch_tech_news(role: Role, gemini: &GeminiClient) -> Result<TechNewsResponse, AppError> {
    let year = Utc::now().year();
    let years = format!("late {} and {}", year - 1, year);

    let prompt = fill_template(
        TECH_NEWS_PROMPT_TEMPLATE,
        &[("role", &role.to_string()), ("years", &years)],
    );

    let response = gemini.generate_grounded(PRO_MODEL, &prompt).await?;

    Ok(TechNewsResponse {
        text: response
            .text()
            .unwrap_or_else(|| TECH_NEWS_FALLBACK.to_string()),
        sources: sources_from(&response),
    })
}

/// Maps grounding chunks to citations, preserving the model's citation order.
/// Chunks without web metadata are dropped; missing titles/uris get fixed
/// placeholders so the client always renders a link row.
fn sources_from(response: &GenerateResponse) -> Vec<NewsSource> {
    response
        .grounding_sources()
        .into_iter()
        .map(|web| NewsSource {
            title: web
                .title
                .clone()
                .unwrap_or_else(|| SOURCE_TITLE_FALLBACK.to_string()),
            uri: web
                .uri
                .clone()
                .unwrap_or_else(|| SOURCE_URI_FALLBACK.to_string()),
        })
        .collect()
}
