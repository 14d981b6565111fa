//! Response Extractor
//!
//! Pulls the generated text out of a `generateContent` reply. Only the first
//! candidate's first part is read; every other shape degrades to
//! [`FALLBACK_ANSWER`].

use serde_json::Value;

/// Text returned when the model reply has no extractable answer
pub const FALLBACK_ANSWER: &str = "No response received from the model.";

/// Outcome of reading a model reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// `candidates[0].content.parts[0].text` was present
    Text(String),
    /// The reply did not have the expected shape
    Fallback,
}

impl Extraction {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Extraction::Fallback)
    }

    pub fn into_text(self) -> String {
        match self {
            Extraction::Text(text) => text,
            Extraction::Fallback => FALLBACK_ANSWER.to_string(),
        }
    }
}

/// Navigate `candidates[0].content.parts[0].text`.
pub fn extract_answer(root: &Value) -> Extraction {
    first_part_text(root)
        .map(|text| Extraction::Text(text.to_string()))
        .unwrap_or(Extraction::Fallback)
}

fn first_part_text(root: &Value) -> Option<&str> {
    root.get("candidates")?
        .as_array()?
        .first()?
        .get("content")?
        .get("parts")?
        .as_array()?
        .first()?
        .get("text")?
        .as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extracts_first_part_text() {
        let reply = json!({"candidates":[{"content":{"parts":[{"text":"Hello"}]}}]});
        assert_eq!(extract_answer(&reply), Extraction::Text("Hello".to_string()));
    }

    #[test]
    fn test_only_first_candidate_and_part_are_read() {
        let reply = json!({
            "candidates": [
                {"content": {"parts": [{"text": "first"}, {"text": "second"}]}},
                {"content": {"parts": [{"text": "other candidate"}]}}
            ]
        });
        assert_eq!(extract_answer(&reply).into_text(), "first");
    }

    #[test]
    fn test_missing_shapes_fall_back() {
        let replies = [
            json!({}),
            json!({"candidates": []}),
            json!({"candidates": [{"content": {}}]}),
            json!({"candidates": [{"content": {"parts": []}}]}),
            json!({"candidates": [{"content": {"parts": [{}]}}]}),
            json!({"candidates": {"content": "not an array"}}),
            json!({"candidates": [{"content": {"parts": [{"text": 42}]}}]}),
            json!([1, 2, 3]),
            json!(null),
            json!("text"),
        ];

        for reply in &replies {
            let extraction = extract_answer(reply);
            assert!(extraction.is_fallback(), "expected fallback for {}", reply);
            assert_eq!(extraction.into_text(), FALLBACK_ANSWER);
        }
    }

    #[test]
    fn test_empty_text_is_still_text() {
        let reply = json!({"candidates":[{"content":{"parts":[{"text":""}]}}]});
        assert_eq!(extract_answer(&reply), Extraction::Text(String::new()));
    }
}
