//! Mock interviewer — asks one question at a time and scores free-form
//! answers against the target role and level.

use crate::errors::AppError;
use crate::gemini::prompts::fill_template;
use crate::gemini::{GeminiClient, FLASH_MODEL};
use crate::interview::prompts::{
    evaluation_schema, EVALUATE_PROMPT_TEMPLATE, NEXT_QUESTION_FALLBACK,
    NEXT_QUESTION_PROMPT_TEMPLATE,
};
use crate::models::interview::InterviewFeedback;
use crate::models::profile::UserProfile;

pub async fn next_question(
    profile: &UserProfile,
    focus_skills: &[String],
    gemini: &GeminiClient,
) -> Result<String, AppError> {
    let prompt = fill_template(
        NEXT_QUESTION_PROMPT_TEMPLATE,
        &[
            ("level", &profile.level.to_string()),
            ("role", &profile.role.to_string()),
            ("skills", &focus_skills.join(", ")),
        ],
    );

    let response = gemini.generate(FLASH_MODEL, &prompt).await?;

    // Free-text call: empty text gets the fixed fallback, never an error.
    Ok(response
        .text()
        .unwrap_or_else(|| NEXT_QUESTION_FALLBACK.to_string()))
}

pub async fn evaluate_answer(
    profile: &UserProfile,
    question: &str,
    answer: &str,
    gemini: &GeminiClient,
) -> Result<InterviewFeedback, AppError> {
    let prompt = fill_template(
        EVALUATE_PROMPT_TEMPLATE,
        &[
            ("level", &profile.level.to_string()),
            ("role", &profile.role.to_string()),
            ("question", question),
            ("answer", answer),
        ],
    );

    let mut feedback: InterviewFeedback = gemini
        .generate_json(FLASH_MODEL, &prompt, evaluation_schema())
        .await?;

    feedback.score = clamp_score(feedback.score);

    Ok(feedback)
}

/// The 0–100 range is a producer contract; out-of-range scores are clamped on
/// receipt rather than crashing downstream aggregation.
fn clamp_score(score: f32) -> f32 {
    if !(0.0..=100.0).contains(&score) {
        tracing::warn!("Interview score {score} outside 0-100, clamping");
    }
    score.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{Level, Role};
    use std::collections::HashMap;

    fn profile() -> UserProfile {
        UserProfile {
            role: Role::Backend,
            level: Level::Senior,
            skills: vec!["Go".to_string()],
            confidence_levels: HashMap::new(),
            resume_content: None,
            resume_file_name: None,
        }
    }

    #[test]
    fn test_clamp_score_passes_valid_scores_through() {
        assert!((clamp_score(82.0) - 82.0).abs() < f32::EPSILON);
        assert!((clamp_score(0.0)).abs() < f32::EPSILON);
        assert!((clamp_score(100.0) - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_clamp_score_bounds_out_of_range_values() {
        assert!((clamp_score(140.0) - 100.0).abs() < f32::EPSILON);
        assert!(clamp_score(-5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_question_prompt_embeds_focus_skills() {
        let p = profile();
        let prompt = fill_template(
            NEXT_QUESTION_PROMPT_TEMPLATE,
            &[
                ("level", &p.level.to_string()),
                ("role", &p.role.to_string()),
                ("skills", "Go, gRPC"),
            ],
        );
        assert!(prompt.contains("Senior Backend"));
        assert!(prompt.contains("Go, gRPC"));
    }

    #[test]
    fn test_evaluate_prompt_quotes_question_and_answer() {
        let prompt = fill_template(
            EVALUATE_PROMPT_TEMPLATE,
            &[
                ("level", "Junior"),
                ("role", "Mobile"),
                ("question", "What is an ANR?"),
                ("answer", "A frozen main thread."),
            ],
        );
        assert!(prompt.contains(r#"Question: "What is an ANR?""#));
        assert!(prompt.contains(r#"Candidate Answer: "A frozen main thread.""#));
    }
}
