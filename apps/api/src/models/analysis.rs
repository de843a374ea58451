//! Skill-gap analysis output.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How far a skill is from the target role's expectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GapLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for GapLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GapLevel::Low => write!(f, "Low"),
            GapLevel::Medium => write!(f, "Medium"),
            GapLevel::High => write!(f, "High"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill: String,
    #[serde(rename = "gapLevel")]
    pub gap_level: GapLevel,
    pub reason: String,
}

/// Full analysis result: ordered gaps plus a narrative resume read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapAnalysis {
    pub gaps: Vec<SkillGap>,
    #[serde(rename = "resumeAnalysis")]
    pub resume_analysis: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gap_analysis_deserializes_from_model_json() {
        let json = r#"{
            "gaps": [
                {"skill": "Kubernetes", "gapLevel": "High", "reason": "No orchestration experience listed."},
                {"skill": "SQL", "gapLevel": "Low", "reason": "Solid fundamentals."}
            ],
            "resumeAnalysis": "Strong frontend foundation, thin on infrastructure."
        }"#;
        let analysis: GapAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.gaps.len(), 2);
        assert_eq!(analysis.gaps[0].gap_level, GapLevel::High);
        assert_eq!(analysis.gaps[1].skill, "SQL");
        assert!(analysis.resume_analysis.starts_with("Strong"));
    }

    #[test]
    fn test_missing_resume_analysis_is_rejected() {
        let json = r#"{"gaps": []}"#;
        assert!(serde_json::from_str::<GapAnalysis>(json).is_err());
    }

    #[test]
    fn test_unknown_gap_level_is_rejected() {
        let json = r#"{"skill": "Go", "gapLevel": "Severe", "reason": "x"}"#;
        assert!(serde_json::from_str::<SkillGap>(json).is_err());
    }
}
