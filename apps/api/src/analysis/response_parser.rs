//! Extracts and validates the JSON object embedded in completion text.
//!
//! The extraction contract is deliberately narrow: the span from the first
//! `{` to the last `}`. A completion containing two JSON-ish spans, or
//! braces inside the summary text itself, defeats it. The real fix for that
//! fragility is constraining the model's output format upstream, not a
//! smarter scanner here.

use serde_json::Value;
use tracing::error;

use crate::analysis::models::AnalysisResult;
use crate::errors::AppError;

const REQUIRED_KEYS: [&str; 4] = ["summary", "checklist", "warnings", "questions"];

/// The first-`{`-to-last-`}` span of `text`, or None when no such span exists.
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Parses completion text into a validated `AnalysisResult`.
///
/// The offending text is logged on failure, never returned to the client.
/// On success the object passes through unchanged: no truncation, no
/// re-ordering, no cap on item counts.
pub fn extract_and_validate(completion_text: &str) -> Result<AnalysisResult, AppError> {
    let span = extract_json_object(completion_text).ok_or_else(|| {
        error!("No JSON object in completion text: {completion_text}");
        AppError::Parse
    })?;

    let value: Value = serde_json::from_str(span).map_err(|e| {
        error!("Completion span is not valid JSON ({e}): {completion_text}");
        AppError::Parse
    })?;

    for key in REQUIRED_KEYS {
        if value.get(key).map_or(true, Value::is_null) {
            error!("Completion JSON missing required key '{key}'");
            return Err(AppError::Schema);
        }
    }

    serde_json::from_value(value).map_err(|e| {
        error!("Completion JSON does not match the result shape: {e}");
        AppError::Schema
    })
}
