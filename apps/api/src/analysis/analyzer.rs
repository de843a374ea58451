//! Gap analyzer — turns a profile into a structured gap report via Gemini.

use crate::analysis::prompts::{gap_analysis_schema, GAP_ANALYSIS_PROMPT_TEMPLATE};
use crate::errors::AppError;
use crate::gemini::prompts::fill_template;
use crate::gemini::{GeminiClient, FLASH_MODEL};
use crate::models::analysis::GapAnalysis;
use crate::models::profile::UserProfile;

pub async fn analyze_skill_gaps(
    profile: &UserProfile,
    gemini: &GeminiClient,
) -> Result<GapAnalysis, AppError> {
    let prompt = build_prompt(profile);

    let analysis: GapAnalysis = gemini
        .generate_json(FLASH_MODEL, &prompt, gap_analysis_schema())
        .await?;

    tracing::debug!(
        "Gap analysis produced {} gaps for a {} {}",
        analysis.gaps.len(),
        profile.level,
        profile.role
    );

    Ok(analysis)
}

fn build_prompt(profile: &UserProfile) -> String {
    let resume = profile
        .resume_content
        .as_deref()
        .unwrap_or("No resume uploaded.");

    fill_template(
        GAP_ANALYSIS_PROMPT_TEMPLATE,
        &[
            ("role", &profile.role.to_string()),
            ("level", &profile.level.to_string()),
            ("skills", &profile.skills_line()),
            ("confidence", &profile.confidence_lines()),
            ("resume", resume),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{Confidence, Level, Role};
    use std::collections::HashMap;

    fn profile_with_resume(resume: Option<&str>) -> UserProfile {
        let mut confidence_levels = HashMap::new();
        confidence_levels.insert("React".to_string(), Confidence::Somewhat);
        UserProfile {
            role: Role::FullStack,
            level: Level::MidLevel,
            skills: vec!["React".to_string(), "SQL".to_string()],
            confidence_levels,
            resume_content: resume.map(String::from),
            resume_file_name: None,
        }
    }

    #[test]
    fn test_prompt_embeds_profile_fields() {
        let prompt = build_prompt(&profile_with_resume(Some("Shipped a design system.")));
        assert!(prompt.contains("Full Stack at Mid-Level level"));
        assert!(prompt.contains("Declared Skills: React, SQL"));
        assert!(prompt.contains("React: Somewhat"));
        assert!(prompt.contains("Shipped a design system."));
        assert!(!prompt.contains("{role}"));
        assert!(!prompt.contains("{resume}"));
    }

    #[test]
    fn test_prompt_notes_missing_resume() {
        let prompt = build_prompt(&profile_with_resume(None));
        assert!(prompt.contains("No resume uploaded."));
    }
}
