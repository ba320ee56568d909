use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key Gemini is asked to put the nutrient map under.
pub const NUTRIENTS_KEY: &str = "nutrisi";
/// Key Gemini is asked to put the assessment text under.
pub const ASSESSMENT_KEY: &str = "penilaian";

/// Shown when the decoded payload carries no assessment text.
pub const NO_ASSESSMENT_PLACEHOLDER: &str = "Tidak ada penilaian gizi.";

/// Body of POST /check_gizi. `age` stays a raw JSON value so that a wrong
/// type (e.g. "12") is rejected by our validation with a proper message
/// instead of a deserialization error.
#[derive(Debug, Deserialize)]
pub struct CheckGiziRequest {
    #[serde(default)]
    pub food: Option<String>,
    #[serde(default)]
    pub drink: Option<String>,
    #[serde(default)]
    pub age: Option<Value>,
}

/// One nutrition lookup: a single item for a single user age.
#[derive(Debug, Clone)]
pub struct NutritionQuery {
    /// Non-empty, trimmed and lowercased.
    pub item_name: String,
    pub age: u64,
}

impl NutritionQuery {
    /// Builds a query from a raw request field. Returns None when the field
    /// is absent or blank after trimming.
    pub fn from_field(raw: Option<&str>, age: u64) -> Option<Self> {
        let item_name = raw?.trim().to_lowercase();
        if item_name.is_empty() {
            return None;
        }
        Some(Self { item_name, age })
    }
}

/// Successful per-item result relayed to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct ItemReport {
    pub name: String,
    pub nutrients: Value,
    pub assessment: String,
}

impl ItemReport {
    /// Extracts the two expected keys from a decoded Gemini payload. The
    /// nutrient map is passed through unchanged; missing keys fall back to
    /// an empty map / the placeholder assessment.
    pub fn from_payload(item_name: &str, mut payload: serde_json::Map<String, Value>) -> Self {
        let nutrients = payload
            .remove(NUTRIENTS_KEY)
            .unwrap_or_else(|| Value::Object(serde_json::Map::new()));
        let assessment = match payload.remove(ASSESSMENT_KEY) {
            Some(Value::String(text)) => text,
            _ => NO_ASSESSMENT_PLACEHOLDER.to_string(),
        };

        Self {
            name: capitalize(item_name),
            nutrients,
            assessment,
        }
    }
}

/// Per-item failure. `debug_response` carries the fence-stripped raw text
/// for format-decode failures only; service failures never expose the
/// upstream payload to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResult {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_response: Option<String>,
}

impl ErrorResult {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            debug_response: None,
        }
    }

    pub fn with_debug(message: impl Into<String>, debug_response: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            debug_response: Some(debug_response.into()),
        }
    }
}

/// Outcome of one item lookup. Exactly one of report/failure per supplied
/// field ends up in the aggregate response.
#[derive(Debug)]
pub enum ItemOutcome {
    Report(ItemReport),
    Failed(ErrorResult),
}

/// First letter uppercased, rest untouched (input is already lowercased).
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
