use anyhow::Result;

/// Trait for generative-language backends (Gemini, or a test double).
///
/// One operation: free-text prompt in, raw reply text out. Callers never see
/// the wire format, only the text or the failure cause.
#[async_trait::async_trait]
pub trait NutritionAi: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}
