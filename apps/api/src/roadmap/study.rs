//! Quick-study guide — expands a single roadmap resource into a markdown
//! crash course for interview prep.

use crate::errors::AppError;
use crate::gemini::prompts::fill_template;
use crate::gemini::{GeminiClient, FLASH_MODEL};
use crate::roadmap::prompts::{STUDY_GUIDE_FALLBACK, STUDY_GUIDE_PROMPT_TEMPLATE};

pub async fn generate_study_guide(
    resource: &str,
    topic: &str,
    gemini: &GeminiClient,
) -> Result<String, AppError> {
    let prompt = fill_template(
        STUDY_GUIDE_PROMPT_TEMPLATE,
        &[("resource", resource), ("topic", topic)],
    );

    let response = gemini.generate(FLASH_MODEL, &prompt).await?;

    // Free-text call: empty text gets the fixed fallback, never an error.
    Ok(response
        .text()
        .unwrap_or_else(|| STUDY_GUIDE_FALLBACK.to_string()))
}
