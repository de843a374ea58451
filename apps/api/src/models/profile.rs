//! User profile — constructed once during onboarding and immutable afterwards.
//! The service is stateless, so the profile travels with every request.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Target role chosen during onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Frontend,
    Backend,
    #[serde(rename = "Full Stack")]
    FullStack,
    DevOps,
    Mobile,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Frontend => write!(f, "Frontend"),
            Role::Backend => write!(f, "Backend"),
            Role::FullStack => write!(f, "Full Stack"),
            Role::DevOps => write!(f, "DevOps"),
            Role::Mobile => write!(f, "Mobile"),
        }
    }
}

/// Experience level for the target role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Junior,
    #[serde(rename = "Mid-Level")]
    MidLevel,
    Senior,
    Lead,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Junior => write!(f, "Junior"),
            Level::MidLevel => write!(f, "Mid-Level"),
            Level::Senior => write!(f, "Senior"),
            Level::Lead => write!(f, "Lead"),
        }
    }
}

/// Self-rated confidence in a declared skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    Confident,
    Somewhat,
    #[serde(rename = "Not Familiar")]
    NotFamiliar,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::Confident => write!(f, "Confident"),
            Confidence::Somewhat => write!(f, "Somewhat"),
            Confidence::NotFamiliar => write!(f, "Not Familiar"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub role: Role,
    pub level: Level,
    pub skills: Vec<String>,
    #[serde(default)]
    pub confidence_levels: HashMap<String, Confidence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_file_name: Option<String>,
}

impl UserProfile {
    /// Comma-separated skill list for prompt embedding.
    pub fn skills_line(&self) -> String {
        self.skills.join(", ")
    }

    /// "skill: confidence" pairs for prompt embedding.
    pub fn confidence_lines(&self) -> String {
        let mut pairs: Vec<_> = self.confidence_levels.iter().collect();
        pairs.sort_by(|a, b| a.0.cmp(b.0));
        pairs
            .iter()
            .map(|(skill, confidence)| format!("{skill}: {confidence}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
