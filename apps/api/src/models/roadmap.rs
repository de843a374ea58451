//! Learning roadmap items. Status and priority are only ever touched for
//! client-side sorting; the service never mutates an item after creation.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Whether the item covers new ground or revisits a weak area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    Learn,
    Revise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapItem {
    pub id: String,
    pub topic: String,
    pub priority: Priority,
    #[serde(rename = "type")]
    pub activity: ActivityKind,
    /// Producer contract: exactly three resource references, each either a
    /// URL or a free-text resource name.
    pub resources: Vec<String>,
    pub status: ItemStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roadmap_item_deserializes_from_model_json() {
        let json = r#"{
            "id": "1",
            "topic": "Distributed Systems",
            "priority": "High",
            "type": "Learn",
            "resources": ["Designing Data-Intensive Applications", "https://example.com/ddia", "MIT 6.824 lectures"],
            "status": "Pending"
        }"#;
        let item: RoadmapItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.priority, Priority::High);
        assert_eq!(item.activity, ActivityKind::Learn);
        assert_eq!(item.status, ItemStatus::Pending);
        assert_eq!(item.resources.len(), 3);
    }

    #[test]
    fn test_in_progress_status_wire_name() {
        let status: ItemStatus = serde_json::from_str(r#""In Progress""#).unwrap();
        assert_eq!(status, ItemStatus::InProgress);
        assert_eq!(serde_json::to_string(&status).unwrap(), r#""In Progress""#);
    }

    #[test]
    fn test_item_without_resources_is_rejected() {
        let json = r#"{"id": "1", "topic": "X", "priority": "Low", "type": "Revise", "status": "Pending"}"#;
        assert!(serde_json::from_str::<RoadmapItem>(json).is_err());
    }
}
