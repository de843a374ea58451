//! Assessment generator — produces the onboarding quiz and verifies the
//! multiple-choice contract locally instead of trusting the producer.

use crate::assessment::prompts::{assessment_schema, ASSESSMENT_PROMPT_TEMPLATE};
use crate::errors::AppError;
use crate::gemini::prompts::fill_template;
use crate::gemini::{GeminiClient, GeminiError, FLASH_MODEL};
use crate::models::assessment::{AssessmentQuestion, QuestionKind};
use crate::models::profile::UserProfile;

pub async fn generate_assessment(
    profile: &UserProfile,
    gemini: &GeminiClient,
) -> Result<Vec<AssessmentQuestion>, AppError> {
    let prompt = fill_template(
        ASSESSMENT_PROMPT_TEMPLATE,
        &[
            ("level", &profile.level.to_string()),
            ("role", &profile.role.to_string()),
            ("skills", &profile.skills_line()),
        ],
    );

    let questions: Vec<AssessmentQuestion> = gemini
        .generate_json(FLASH_MODEL, &prompt, assessment_schema())
        .await?;

    validate_questions(&questions)?;

    Ok(questions)
}

/// Cross-field contract checks the response schema cannot express.
/// A violated contract is a malformed payload, not a usable question set.
fn validate_questions(questions: &[AssessmentQuestion]) -> Result<(), GeminiError> {
    if questions.is_empty() {
        return Err(GeminiError::MalformedPayload(
            "assessment contained no questions".to_string(),
        ));
    }

    for question in questions {
        if question.kind != QuestionKind::MultipleChoice {
            continue;
        }

        let options = question.options.as_deref().unwrap_or_default();
        if options.is_empty() {
            return Err(GeminiError::MalformedPayload(format!(
                "multiple-choice question '{}' has no options",
                question.id
            )));
        }

        if let Some(answer) = &question.correct_answer {
            if !options.iter().any(|o| o == answer) {
                return Err(GeminiError::MalformedPayload(format!(
                    "correct answer for question '{}' is not among its options",
                    question.id
                )));
            }
        }
    }

    Ok(())
}
