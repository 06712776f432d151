use anyhow::{Context, Result};

/// The `.env.example` value that signals the key was never configured.
const PLACEHOLDER_KEY: &str = "your-api-key-here";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenAI API key. Optional at startup: absence is warned about, not fatal.
    pub openai_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// True when the configured key is the unedited placeholder.
    pub fn is_placeholder_key(key: &str) -> bool {
        key == PLACEHOLDER_KEY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_key_detected() {
        assert!(Config::is_placeholder_key("your-api-key-here"));
        assert!(!Config::is_placeholder_key("sk-proj-abc123"));
        assert!(!Config::is_placeholder_key(""));
    }
}
