//! API types matching the search backend

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Search request body for `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    pub message: String,
    pub top_k: u32,
}

/// Raw search response as sent by the backend.
///
/// Both fields are kept as untyped values so that an absent or mistyped
/// field degrades to "no results" / "no echo" instead of a decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub query_info: Value,
    #[serde(default)]
    pub results: Value,
}

/// Query echo, possibly translated by the backend
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryInfo {
    pub translated: Option<String>,
    pub original: Option<String>,
}

impl QueryInfo {
    /// Read the echo fields from whatever the backend sent; anything that is
    /// not an object, and any non-string field, counts as absent.
    pub fn from_value(value: &Value) -> Self {
        let field = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);
        Self {
            translated: field("translated"),
            original: field("original"),
        }
    }

    /// Translated query if present, otherwise the original one.
    pub fn echo(&self) -> Option<&str> {
        self.translated.as_deref().or(self.original.as_deref())
    }
}

/// A single ranked search hit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "Name", alias = "name", default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(rename = "URL", alias = "url", default, deserialize_with = "lenient_string")]
    pub url: String,
    #[serde(rename = "Summary", alias = "summary", default, deserialize_with = "lenient_string")]
    pub summary: String,
    #[serde(rename = "Category", alias = "category", default, deserialize_with = "lenient_opt_string")]
    pub category: Option<String>,
    #[serde(rename = "Score", alias = "score", default, deserialize_with = "lenient_score")]
    pub score: Option<f64>,
}

/// `null` becomes empty; numbers and booleans are shown as written.
fn lenient_string<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    Ok(lenient_opt_string(de)?.unwrap_or_default())
}

fn lenient_opt_string<'de, D: Deserializer<'de>>(de: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(de)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// Only numeric scores are kept; anything else is treated as missing.
fn lenient_score<'de, D: Deserializer<'de>>(de: D) -> Result<Option<f64>, D::Error> {
    Ok(Value::deserialize(de)?.as_f64())
}

impl SearchResult {
    /// Score with four decimals, e.g. `0.9200`
    pub fn score_label(&self) -> Option<String> {
        self.score.map(|s| format!("{:.4}", s))
    }

    /// `Category — 0.9200`, leaving out whichever part is missing
    pub fn meta_line(&self) -> String {
        let category = self.category.as_deref().filter(|c| !c.is_empty());
        match (category, self.score_label()) {
            (Some(c), Some(s)) => format!("{} — {}", c, s),
            (Some(c), None) => c.to_string(),
            (None, Some(s)) => s,
            (None, None) => String::new(),
        }
    }
}

/// Error body from non-2xx responses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub detail: Option<String>,
}

/// Decoded outcome of a successful search
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOutcome {
    pub results: Vec<SearchResult>,
    pub echo: String,
}

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// Message in the conversation log
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: String,
    pub sender: Sender,
    pub text: Option<String>,
    pub results: Option<Vec<SearchResult>>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            sender: Sender::User,
            text: Some(text.into()),
            results: None,
            timestamp: chrono::Utc::now(),
        }
    }

    /// Bot reply; an empty text is stored as `None`
    pub fn bot(results: Vec<SearchResult>, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            sender: Sender::Bot,
            text: (!text.is_empty()).then_some(text),
            results: Some(results),
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }

    pub fn result_count(&self) -> usize {
        self.results.as_ref().map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_result_accepts_capitalized_keys() {
        let r: SearchResult = serde_json::from_value(json!({
            "Name": "Acme Pantry",
            "URL": "https://x",
            "Summary": "Free groceries",
            "Category": "Food",
            "Score": 0.92
        }))
        .unwrap();

        assert_eq!(r.name, "Acme Pantry");
        assert_eq!(r.url, "https://x");
        assert_eq!(r.category.as_deref(), Some("Food"));
        assert_eq!(r.score_label().as_deref(), Some("0.9200"));
    }

    #[test]
    fn test_result_accepts_lowercase_keys_and_missing_fields() {
        let r: SearchResult = serde_json::from_value(json!({ "name": "Shelter" })).unwrap();
        assert_eq!(r.name, "Shelter");
        assert!(r.url.is_empty());
        assert!(r.category.is_none());
        assert!(r.score.is_none());
    }

    #[test]
    fn test_result_treats_null_and_mistyped_fields_leniently() {
        let r: SearchResult = serde_json::from_value(json!({
            "Name": 42,
            "URL": null,
            "Summary": null,
            "Category": null,
            "Score": "high"
        }))
        .unwrap();

        assert_eq!(r.name, "42");
        assert!(r.url.is_empty());
        assert!(r.summary.is_empty());
        assert!(r.category.is_none());
        assert!(r.score.is_none());
    }

    #[test]
    fn test_query_info_from_value() {
        let info = QueryInfo::from_value(&json!({ "translated": "food bank", "original": "banco" }));
        assert_eq!(info.echo(), Some("food bank"));

        let info = QueryInfo::from_value(&json!({ "translated": null, "original": "banco" }));
        assert_eq!(info.echo(), Some("banco"));

        assert_eq!(QueryInfo::from_value(&json!("x")).echo(), None);
        assert_eq!(QueryInfo::from_value(&json!(null)).echo(), None);
    }

    #[test]
    fn test_meta_line_omits_missing_parts() {
        let mut r = SearchResult {
            category: Some("Housing".into()),
            score: Some(0.5),
            ..Default::default()
        };
        assert_eq!(r.meta_line(), "Housing — 0.5000");

        r.score = None;
        assert_eq!(r.meta_line(), "Housing");

        r.category = None;
        r.score = Some(0.12345);
        assert_eq!(r.meta_line(), "0.1235");

        r.score = None;
        assert_eq!(r.meta_line(), "");
    }

    #[test]
    fn test_query_echo_prefers_translation() {
        let info = QueryInfo {
            translated: Some("food bank".into()),
            original: Some("banco de comida".into()),
        };
        assert_eq!(info.echo(), Some("food bank"));

        let info = QueryInfo {
            translated: None,
            original: Some("shelter".into()),
        };
        assert_eq!(info.echo(), Some("shelter"));
        assert_eq!(QueryInfo::default().echo(), None);
    }

    #[test]
    fn test_bot_message_drops_empty_text() {
        let msg = Message::bot(vec![], "");
        assert!(msg.text.is_none());
        assert_eq!(msg.result_count(), 0);
        assert!(!msg.is_user());
    }

    #[test]
    fn test_request_serializes_wire_shape() {
        let req = SearchRequest {
            message: "food pantry".into(),
            top_k: 5,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({ "message": "food pantry", "top_k": 5 })
        );
    }
}
