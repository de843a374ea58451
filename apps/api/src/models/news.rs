//! Search-grounded market-news payload.

use serde::{Deserialize, Serialize};

/// A grounding citation: a source the model consulted for the narrative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsSource {
    pub title: String,
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechNewsResponse {
    pub text: String,
    pub sources: Vec<NewsSource>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_news_response_round_trips() {
        let response = TechNewsResponse {
            text: "Framework churn continues.".to_string(),
            sources: vec![NewsSource {
                title: "Release notes".to_string(),
                uri: "https://example.com/notes".to_string(),
            }],
        };
        let json = serde_json::to_string(&response).unwrap();
        let back: TechNewsResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back.sources.len(), 1);
        assert_eq!(back.sources[0].title, "Release notes");
    }
}
