//! Roadmap builder — turns the gap report into prioritized learning items.

use crate::errors::AppError;
use crate::gemini::prompts::fill_template;
use crate::gemini::{GeminiClient, FLASH_MODEL};
use crate::models::analysis::SkillGap;
use crate::models::profile::UserProfile;
use crate::models::roadmap::RoadmapItem;
use crate::roadmap::prompts::{roadmap_schema, ROADMAP_PROMPT_TEMPLATE};

/// Resource count the producer is instructed to return per item.
const EXPECTED_RESOURCES: usize = 3;

pub async fn generate_roadmap(
    profile: &UserProfile,
    gaps: &[SkillGap],
    gemini: &GeminiClient,
) -> Result<Vec<RoadmapItem>, AppError> {
    let gaps_json = serde_json::to_string(gaps).map_err(anyhow::Error::from)?;

    let prompt = fill_template(
        ROADMAP_PROMPT_TEMPLATE,
        &[
            ("level", &profile.level.to_string()),
            ("role", &profile.role.to_string()),
            ("gaps", &gaps_json),
        ],
    );

    let items: Vec<RoadmapItem> = gemini
        .generate_json(FLASH_MODEL, &prompt, roadmap_schema())
        .await?;

    log_resource_count_drift(&items);

    Ok(items)
}

/// The three-resources rule is a producer contract. A drifting count is worth
/// a warning but not a failed roadmap — the items are still consumable.
fn log_resource_count_drift(items: &[RoadmapItem]) {
    for item in items {
        if item.resources.len() != EXPECTED_RESOURCES {
            tracing::warn!(
                "Roadmap item '{}' came back with {} resources (expected {})",
                item.id,
                item.resources.len(),
                EXPECTED_RESOURCES
            );
        }
    }
}
