mod config;
mod handlers;
mod models;
mod normalize;
mod prompt;
mod server;
mod services;

use anyhow::Result;
use dotenv::dotenv;
use std::sync::Arc;

use config::Config;
use handlers::NutritionHandler;
use services::{GeminiClient, NutritionAi};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger
    env_logger::init();

    // Load environment variables
    dotenv().ok();

    log::info!("🚀 Starting Gizi Check backend...");

    let config = Config::from_env()?;

    let gemini = Arc::new(GeminiClient::new(config.gemini_api_key.clone()));
    log::info!("✅ Gemini client initialized with model: {}", gemini.model());

    let nutrition = Arc::new(NutritionHandler::new(gemini as Arc<dyn NutritionAi>));
    log::info!("✅ Nutrition handler initialized");

    let app = server::create_router(nutrition);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log::info!("🌐 Server listening on http://{}", addr);
    log::info!("🎉 Gizi Check is ready!");

    axum::serve(listener, app).await?;

    Ok(())
}
