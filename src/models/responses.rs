use serde::{Deserialize, Serialize};

/// Body of a successful `POST /find_me`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResponse {
    /// Status text from the backend, diagnostic only
    pub message: String,
    /// Opaque photo identifiers, in backend order
    pub matches: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_response_deserializes_in_order() {
        let body = r#"{"message":"Found 3 matches.","matches":["c.jpg","a.jpg","b.jpg"]}"#;
        let resp: MatchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.message, "Found 3 matches.");
        assert_eq!(resp.matches, vec!["c.jpg", "a.jpg", "b.jpg"]);
    }

    #[test]
    fn test_match_response_rejects_missing_matches() {
        let body = r#"{"error":"No file part"}"#;
        assert!(serde_json::from_str::<MatchResponse>(body).is_err());
    }
}
