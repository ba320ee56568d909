use serde_json::{Map, Value};

use crate::models::ErrorResult;

pub const EMPTY_RESPONSE_MESSAGE: &str = "empty response";
pub const FORMAT_INVALID_MESSAGE: &str = "response format invalid";

/// Result of normalizing one raw Gemini reply. Total over any input: either
/// a decoded key/value payload or an `ErrorResult`, never a panic.
#[derive(Debug)]
pub enum Normalized {
    Data(Map<String, Value>),
    Failed(ErrorResult),
}

/// Strips optional code-fence wrapping and decodes the remainder as JSON.
///
/// Fence handling intentionally mirrors the narrow scope of the upstream
/// behavior: a tagged opener paired with an untagged closer is not handled,
/// and fences are only recognized after the outer trim. See the degenerate
/// overlap tests below.
pub fn normalize(raw: &str) -> Normalized {
    let mut text = raw.trim();

    if text.starts_with("```json") && text.ends_with("```") {
        text = strip_ends(text, 7, 3).trim();
    } else if text.starts_with("```") && text.ends_with("```") {
        text = strip_ends(text, 3, 3).trim();
    }

    if text.is_empty() {
        return Normalized::Failed(ErrorResult::new(EMPTY_RESPONSE_MESSAGE));
    }

    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Normalized::Data(map),
        // The contract is key/value data; a bare string or array decodes but
        // is still unusable downstream.
        Ok(_) | Err(_) => {
            Normalized::Failed(ErrorResult::with_debug(FORMAT_INVALID_MESSAGE, text))
        }
    }
}

/// Drops `prefix` bytes from the front and `suffix` from the back, yielding
/// "" when the two regions overlap (e.g. the whole input is just the fence
/// markers). Marker lengths are ASCII so the slice boundaries are valid.
fn strip_ends(s: &str, prefix: usize, suffix: usize) -> &str {
    if s.len() >= prefix + suffix {
        &s[prefix..s.len() - suffix]
    } else {
        ""
    }
}
