use anyhow::{Context, Result};
use std::env;

const DEFAULT_PORT: u16 = 5000;

/// Process-wide configuration, read once at startup and read-only after.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub port: u16,
}

impl Config {
    /// A missing API key aborts startup; the process must not come up and
    /// then fail on the first request.
    pub fn from_env() -> Result<Self> {
        let gemini_api_key =
            env::var("GEMINI_API_KEY").context("GEMINI_API_KEY must be set in .env file")?;

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {raw}"))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            gemini_api_key,
            port,
        })
    }
}
