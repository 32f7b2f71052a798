//! Shared record helpers for use cases.
//!
//! Field access on JSONL records read from datasets and results files.

use serde_json::{Map, Value};

/// Field holding the patent text.
pub(crate) const DESCRIPTION_FIELD: &str = "description_text";

/// Ground-truth label field in datasets.
pub(crate) const LABEL_FIELD: &str = "sdg";

/// Ground-truth label field in results files.
pub(crate) const TRUE_LABEL_FIELD: &str = "true_sdg";

/// Prediction fields of results files, most specific first. `sdg_balise`
/// is read for results written by earlier tooling.
pub(crate) const PREDICTION_FIELDS: [&str; 3] = ["predicted_sdg", "sdg_tag", "sdg_balise"];

/// Parse one JSONL line into an object.
pub(crate) fn parse_object(content: &str) -> Result<Map<String, Value>, String> {
    match serde_json::from_str::<Value>(content) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err("record is not a JSON object".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

/// Ground-truth value: `true_sdg`, falling back to `sdg`.
pub(crate) fn truth_value(record: &Map<String, Value>) -> Option<&Value> {
    record
        .get(TRUE_LABEL_FIELD)
        .or_else(|| record.get(LABEL_FIELD))
}

/// Render a truth value as text: strings as-is, string arrays comma-joined.
pub(crate) fn truth_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Array(items) => {
            let labels: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
            (!labels.is_empty()).then(|| labels.join(", "))
        }
        _ => None,
    }
}

/// Patent identifier for display, whether stored as string or number.
pub(crate) fn patent_number(record: &Map<String, Value>) -> Option<String> {
    match record.get("patent_number")? {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

pub(crate) fn description(record: &Map<String, Value>) -> &str {
    record
        .get(DESCRIPTION_FIELD)
        .and_then(Value::as_str)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_object() {
        assert!(parse_object(r#"{"sdg":"SDG1"}"#).is_ok());
        assert!(parse_object("[1,2]").is_err());
        assert!(parse_object("{broken").is_err());
    }

    #[test]
    fn test_truth_lookup_prefers_true_sdg() {
        let record = parse_object(r#"{"sdg":"SDG1","true_sdg":"SDG2"}"#).unwrap();
        assert_eq!(truth_value(&record), Some(&json!("SDG2")));
    }

    #[test]
    fn test_truth_text_shapes() {
        assert_eq!(truth_text(&json!(" SDG3 ")), Some("SDG3".to_string()));
        assert_eq!(truth_text(&json!(["SDG1", "SDG3"])), Some("SDG1, SDG3".to_string()));
        assert_eq!(truth_text(&json!("")), None);
        assert_eq!(truth_text(&json!([])), None);
        assert_eq!(truth_text(&json!(3)), None);
    }

    #[test]
    fn test_patent_number_shapes() {
        let record = parse_object(r#"{"patent_number":1234}"#).unwrap();
        assert_eq!(patent_number(&record), Some("1234".to_string()));
        let record = parse_object(r#"{"patent_number":"EP1"}"#).unwrap();
        assert_eq!(patent_number(&record), Some("EP1".to_string()));
        assert_eq!(patent_number(&Map::new()), None);
    }
}
