use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_OUTPUT_FILE: &str = "resume_suggestions.txt";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Application configuration loaded from environment variables.
/// Fails at startup if `API_URL` is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub llm: LlmSettings,
    pub output_path: PathBuf,
    pub rust_log: String,
}

/// Everything the generative-text client needs. Passed explicitly to the
/// client constructor; nothing downstream reads the environment.
#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub api_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let timeout_secs = match optional_env("API_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .context("API_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Config {
            llm: LlmSettings {
                api_url: require_env("API_URL")?,
                api_key: optional_env("API_KEY"),
                timeout: Duration::from_secs(timeout_secs),
            },
            output_path: optional_env("OUTPUT_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE)),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Treats an empty value the same as an unset one.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
