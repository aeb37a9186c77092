//! JSON plan extraction from raw completion text.
//!
//! Chat-tuned models routinely wrap their JSON in prose or code fences. The
//! strategy is strict-then-lenient: try the whole trimmed text first, then
//! fall back to the slice between the first `{` and the last `}`. The slice
//! heuristic can mis-extract when the surrounding prose itself contains
//! braces; that fragility is a known property of this extractor, bounded by
//! what completion services actually emit.

use crate::errors::UiforgeError;
use serde_json::Value;

/// Extract a candidate plan from raw completion text. The returned value is
/// untyped and untrusted — run it through `plan::validate` before use.
pub fn extract_plan(raw: &str) -> Result<Value, UiforgeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(UiforgeError::EmptyInput);
    }

    if let Ok(value) = serde_json::from_str(trimmed) {
        return Ok(value);
    }

    // Both indices are byte offsets of ASCII braces, so slicing is safe.
    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if start < end => serde_json::from_str(&trimmed[start..=end])
            .map_err(|err| UiforgeError::MalformedResponse(err.to_string())),
        _ => Err(UiforgeError::MalformedResponse(
            "response did not contain a JSON object".to_string(),
        )),
    }
}
