//! Query translation: natural language to registry search parameters.

pub mod openai;
pub mod prompt;

use std::sync::Arc;

use async_trait::async_trait;
use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::AppError;

/// Search parameters derived from one query. Keys are registry v2 parameter
/// names; insertion order is kept so the echoed mapping matches what the
/// provider produced.
pub type ParamMap = IndexMap<String, Value>;

/// Single-turn completion seam. The production implementation is
/// [`openai::OpenAiClient`]; tests substitute a canned stub.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, AppError>;
}

/// Turns a free-text query into a [`ParamMap`] via one completion call.
#[derive(Clone)]
pub struct QueryTranslator {
    chat: Arc<dyn ChatClient>,
}

impl QueryTranslator {
    pub fn new(chat: Arc<dyn ChatClient>) -> Self {
        Self { chat }
    }

    /// Translate one query. Fails with [`AppError::EmptyQuery`] on blank
    /// input and [`AppError::Translation`] when the provider call or the
    /// parse of its output fails. Never falls back to default parameters.
    pub async fn translate(&self, query: &str) -> Result<ParamMap, AppError> {
        if query.trim().is_empty() {
            return Err(AppError::EmptyQuery);
        }
        let rendered = prompt::render(query);
        let output = self.chat.complete(&rendered).await?;
        debug!(%output, "raw provider output");
        parse_params(&output)
    }
}

/// Parse provider output into a flat string-to-scalar mapping.
///
/// The text is treated strictly as data: the first `{ ... }` block is
/// extracted and handed to `serde_json`. Anything that is not a JSON object
/// of scalar values is rejected; keys outside [`prompt::KNOWN_KEYS`] are
/// dropped with a warning.
pub fn parse_params(text: &str) -> Result<ParamMap, AppError> {
    let start = text.find('{');
    let end = text.rfind('}');
    let (start, end) = match (start, end) {
        (Some(s), Some(e)) if s < e => (s, e),
        _ => {
            return Err(AppError::Translation(format!(
                "provider output contained no JSON object: {text:.120}"
            )))
        }
    };

    let object: IndexMap<String, Value> = serde_json::from_str(&text[start..=end])
        .map_err(|e| AppError::Translation(format!("provider output is not valid JSON: {e}")))?;

    let mut params = ParamMap::new();
    for (key, value) in object {
        if !matches!(
            value,
            Value::String(_) | Value::Number(_) | Value::Bool(_)
        ) {
            return Err(AppError::Translation(format!(
                "parameter {key:?} has a non-scalar value"
            )));
        }
        if prompt::KNOWN_KEYS.contains(&key.as_str()) {
            params.insert(key, value);
        } else {
            warn!(%key, "dropping unknown parameter from provider output");
        }
    }
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_plain_json_object() {
        let params = parse_params(
            r#"{"query.cond": "diabetes", "pageSize": 5, "sort": "LastUpdatePostDate"}"#,
        )
        .unwrap();
        assert_eq!(params["query.cond"], json!("diabetes"));
        assert_eq!(params["pageSize"], json!(5));
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn extracts_object_from_surrounding_prose() {
        let params =
            parse_params(r#"Sure, here you go: {"query.cond": "asthma"} hope that helps"#)
                .unwrap();
        assert_eq!(params["query.cond"], json!("asthma"));
    }

    #[test]
    fn preserves_provider_key_order() {
        let params = parse_params(
            r#"{"sort": "LastUpdatePostDate", "query.cond": "lupus", "pageSize": 3}"#,
        )
        .unwrap();
        let keys: Vec<_> = params.keys().cloned().collect();
        assert_eq!(keys, ["sort", "query.cond", "pageSize"]);
    }

    #[test]
    fn rejects_python_dict_literal() {
        // Single-quoted dicts are executable-looking, not JSON.
        let err = parse_params("{'query.cond': 'diabetes'}").unwrap_err();
        assert!(matches!(err, AppError::Translation(_)));
    }

    #[test]
    fn rejects_text_without_object() {
        let err = parse_params("__import__('os').system('id')").unwrap_err();
        assert!(matches!(err, AppError::Translation(_)));
    }

    #[test]
    fn rejects_non_object_json() {
        let err = parse_params(r#"["query.cond", "diabetes"]"#).unwrap_err();
        assert!(matches!(err, AppError::Translation(_)));
    }

    #[test]
    fn rejects_nested_values() {
        let err = parse_params(r#"{"query.cond": {"inner": true}}"#).unwrap_err();
        assert!(matches!(err, AppError::Translation(_)));
    }

    #[test]
    fn drops_unknown_keys() {
        let params =
            parse_params(r#"{"query.cond": "copd", "reasoning": "the user wants copd"}"#).unwrap();
        assert_eq!(params.len(), 1);
        assert!(params.contains_key("query.cond"));
    }

    #[test]
    fn accepts_empty_mapping() {
        let params = parse_params("{}").unwrap();
        assert!(params.is_empty());
    }
}
