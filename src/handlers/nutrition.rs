use std::sync::Arc;

use crate::models::{ErrorResult, ItemOutcome, ItemReport, NutritionQuery};
use crate::normalize::{normalize, Normalized};
use crate::prompt::nutrition_prompt;
use crate::services::NutritionAi;

pub const SERVICE_FAILURE_MESSAGE: &str = "failed to reach the nutrition service";

/// Runs the prompt → Gemini → normalizer pipeline for single items. Holds no
/// per-request state; one instance is shared across all requests.
pub struct NutritionHandler {
    ai: Arc<dyn NutritionAi>,
}

impl NutritionHandler {
    pub fn new(ai: Arc<dyn NutritionAi>) -> Self {
        Self { ai }
    }

    /// Looks up one item. Failures stay local: a dead upstream or a garbled
    /// reply degrades to `ItemOutcome::Failed`, never an error.
    pub async fn check_item(&self, query: &NutritionQuery) -> ItemOutcome {
        let prompt = nutrition_prompt(&query.item_name, query.age);

        let raw = match self.ai.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                log::error!("❌ Nutrition lookup failed for '{}': {:#}", query.item_name, e);
                // Upstream detail goes to the caller, raw payloads do not.
                return ItemOutcome::Failed(ErrorResult::new(format!(
                    "{SERVICE_FAILURE_MESSAGE}: {e}"
                )));
            }
        };

        match normalize(&raw) {
            Normalized::Data(payload) => {
                ItemOutcome::Report(ItemReport::from_payload(&query.item_name, payload))
            }
            Normalized::Failed(err) => {
                log::error!(
                    "❌ Unusable Gemini reply for '{}': {} (raw: {:?})",
                    query.item_name,
                    err.message,
                    err.debug_response
                );
                ItemOutcome::Failed(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    /// Canned backend: returns a fixed reply, or fails when none is set.
    struct CannedAi {
        reply: Option<&'static str>,
    }

    #[async_trait::async_trait]
    impl NutritionAi for CannedAi {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            match self.reply {
                Some(text) => Ok(text.to_string()),
                None => anyhow::bail!("connection refused"),
            }
        }
    }

    fn handler(reply: Option<&'static str>) -> NutritionHandler {
        NutritionHandler::new(Arc::new(CannedAi { reply }))
    }

    fn query(item: &str) -> NutritionQuery {
        NutritionQuery {
            item_name: item.to_string(),
            age: 10,
        }
    }

    #[tokio::test]
    async fn test_fenced_reply_becomes_report() {
        let raw = "```json\n{\"nutrisi\":{\"Kalori\":\"95 kcal\"},\"penilaian\":\"Baik untuk usia 10 tahun.\"}\n```";
        let outcome = handler(Some(raw)).check_item(&query("apel")).await;

        match outcome {
            ItemOutcome::Report(report) => {
                assert_eq!(report.name, "Apel");
                assert_eq!(report.nutrients["Kalori"], "95 kcal");
                assert_eq!(report.assessment, "Baik untuk usia 10 tahun.");
            }
            ItemOutcome::Failed(err) => panic!("unexpected failure: {}", err.message),
        }
    }

    #[tokio::test]
    async fn test_service_failure_has_no_debug_payload() {
        let outcome = handler(None).check_item(&query("es teh")).await;

        match outcome {
            ItemOutcome::Failed(err) => {
                assert!(err.message.contains(SERVICE_FAILURE_MESSAGE));
                assert!(err.debug_response.is_none());
            }
            ItemOutcome::Report(_) => panic!("expected failure"),
        }
    }

    #[tokio::test]
    async fn test_garbled_reply_keeps_debug_payload() {
        let outcome = handler(Some("not json")).check_item(&query("apel")).await;

        match outcome {
            ItemOutcome::Failed(err) => {
                assert_eq!(err.message, crate::normalize::FORMAT_INVALID_MESSAGE);
                assert_eq!(err.debug_response.as_deref(), Some("not json"));
            }
            ItemOutcome::Report(_) => panic!("expected failure"),
        }
    }
}
