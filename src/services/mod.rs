pub mod ai_service;
pub mod gemini; // Gemini generative-language REST client

pub use ai_service::NutritionAi;
pub use gemini::GeminiClient;
