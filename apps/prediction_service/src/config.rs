use std::path::PathBuf;

use astro_llm::{LLMClientConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
use thiserror::Error;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_STATIC_DIR: &str = "public";
const REFERER: &str = "https://horoscope-career-prediction.com";
const TITLE: &str = "Horoscope Career Prediction";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub port: u16,
    pub environment: String,
    pub static_dir: PathBuf,
    pub llm: LLMClientConfig,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. The API key has no default; startup fails without it.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get("OPENAI_API_KEY").ok_or(ConfigError::Missing("OPENAI_API_KEY"))?;

        let port = match get("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                name: "PORT",
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let llm = LLMClientConfig::new(api_key)
            .with_base_url(get("LLM_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()))
            .with_model(get("LLM_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()))
            .with_referer(REFERER)
            .with_title(TITLE);

        Ok(Self {
            port,
            environment: get("APP_ENVIRONMENT").unwrap_or_else(|| "dev".to_string()),
            static_dir: PathBuf::from(
                get("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
            ),
            llm,
        })
    }

    pub fn is_dev(&self) -> bool {
        self.environment == "dev"
    }
}
