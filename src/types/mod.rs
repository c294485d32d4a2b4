// src/types/mod.rs
//! Data model for backend results and client-side records

pub mod analysis;
pub mod history;
pub mod insights;
pub mod response;
pub mod skills_db;
pub mod suggestion;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub use analysis::{AnalysisResult, ExperienceLevel, SkillCategory, SkillEntry};
pub use history::{AnalysisHistory, AnalysisHistoryEntry, MAX_HISTORY_ENTRIES};
pub use insights::{AiRecommendation, AiSummary, CareerPath, CareerSuggestions, JobComparison};
pub use skills_db::{DemandLevel, SkillsDatabase};
pub use suggestion::{EnhancementSuggestion, Priority, SuggestionType};

/// Parse a sub-tree into a typed view, falling back to the default view
/// when it is absent or shaped unexpectedly.
pub(crate) fn lenient<T>(value: Option<&Value>, what: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match value {
        None | Some(Value::Null) => T::default(),
        Some(v) => serde_json::from_value(v.clone()).unwrap_or_else(|e| {
            crate::app_log!(warn, "Ignoring malformed {}: {}", what, e);
            T::default()
        }),
    }
}

/// Scalar JSON rendered the way a template literal would print it.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(format_number(n.as_f64().unwrap_or_default())),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// `85.0` prints as `85`, `72.5` stays `72.5`.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

pub(crate) fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(value_text)
        .filter(|s| !s.is_empty()))
}

pub(crate) fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items.iter().filter_map(value_text).collect(),
        _ => Vec::new(),
    })
}

pub(crate) fn number_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or_default(),
        Some(Value::String(s)) => s.trim().parse().unwrap_or_default(),
        _ => 0.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(85.0), "85");
        assert_eq!(format_number(72.5), "72.5");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_value_text() {
        assert_eq!(value_text(&json!("Senior")), Some("Senior".to_string()));
        assert_eq!(value_text(&json!(5)), Some("5".to_string()));
        assert_eq!(value_text(&json!(null)), None);
        assert_eq!(value_text(&json!({"a": 1})), None);
    }

    #[test]
    fn test_lenient_falls_back_to_default() {
        let summary: AiSummary = lenient(Some(&json!("not an object")), "ai_summary");
        assert!(summary.summary.is_none());

        let summary: AiSummary = lenient(None, "ai_summary");
        assert!(summary.key_strengths.is_empty());
    }
}
