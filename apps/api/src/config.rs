use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if a required variable is missing.
#[derive(Debug, Clone)]
pub struct Config {
    /// Hosted storage base URL. Unset means the in-memory store.
    pub storage_url: Option<String>,
    pub storage_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
    /// Credits granted to users the in-memory store has not seen yet.
    pub signup_credits: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let storage_url = optional_env("STORAGE_URL");
        let storage_api_key = match storage_url {
            Some(_) => Some(require_env("STORAGE_API_KEY")?),
            None => optional_env("STORAGE_API_KEY"),
        };

        Ok(Config {
            storage_url,
            storage_api_key,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            signup_credits: std::env::var("SIGNUP_CREDITS")
                .unwrap_or_else(|_| "3".to_string())
                .parse::<i64>()
                .context("SIGNUP_CREDITS must be an integer")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
