// src/config.rs
use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

pub const DEFAULT_QUOTES_BASE_URL: &str = "https://stooq.com";
pub const DEFAULT_NEWS_BASE_URL: &str = "https://newsapi.org";
pub const DEFAULT_MODEL_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL_NAME: &str = "gemini-2.0-flash";

pub const ENV_SYMBOLS_PATH: &str = "SYMBOLS_PATH";
pub const DEFAULT_SYMBOLS_PATH: &str = "config/symbols.json";

const DEFAULT_PORT: u16 = 3000;

/// Runtime configuration, read once at startup.
///
/// Provider API keys come exclusively from the environment (or a local
/// `.env` in development); there are no literal defaults, and a missing key
/// is a startup error rather than a runtime one.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// News provider key (`NEWS_API_KEY`).
    pub news_api_key: String,
    /// Generative model key (`GEMINI_API_KEY`).
    pub model_api_key: String,
    pub quotes_base_url: String,
    pub news_base_url: String,
    pub model_base_url: String,
    pub model_name: String,
    pub port: u16,
    pub symbols_path: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let news_api_key = require_env("NEWS_API_KEY")?;
        let model_api_key = require_env("GEMINI_API_KEY")?;

        let port = match env::var("PORT") {
            Ok(v) => v
                .parse::<u16>()
                .with_context(|| format!("invalid PORT value '{v}'"))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            news_api_key,
            model_api_key,
            quotes_base_url: env_or("QUOTES_BASE_URL", DEFAULT_QUOTES_BASE_URL),
            news_base_url: env_or("NEWS_BASE_URL", DEFAULT_NEWS_BASE_URL),
            model_base_url: env_or("GEMINI_BASE_URL", DEFAULT_MODEL_BASE_URL),
            model_name: env_or("GEMINI_MODEL", DEFAULT_MODEL_NAME),
            port,
            symbols_path: env::var(ENV_SYMBOLS_PATH)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_SYMBOLS_PATH)),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    let value = env::var(key).map_err(|_| anyhow::anyhow!("Missing {key} env var"))?;
    if value.trim().is_empty() {
        bail!("{key} is set but empty");
    }
    Ok(value)
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
