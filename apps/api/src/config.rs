use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434/api/generate";
pub const DEFAULT_MODEL: &str = "llama3.2:latest";

/// Application configuration loaded from environment variables.
/// Every variable has a default; only unparseable values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub ollama_url: String,
    /// Model behind the interactive poem endpoint.
    pub poetry_model: String,
    /// Model used to translate seed words before prompting.
    pub translation_model: String,
    /// Model used by the dataset builder.
    pub dataset_model: String,
    pub dataset_path: PathBuf,
    pub samples_per_combo: u32,
    /// Fixed seed for word sampling; random when unset.
    pub dataset_seed: Option<u64>,
    pub translate_words: bool,
    pub oracle_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            ollama_url: env_or("OLLAMA_URL", DEFAULT_OLLAMA_URL),
            poetry_model: env_or("POETRY_MODEL", DEFAULT_MODEL),
            translation_model: env_or("TRANSLATION_MODEL", DEFAULT_MODEL),
            dataset_model: env_or("DATASET_MODEL", DEFAULT_MODEL),
            dataset_path: PathBuf::from(env_or("DATASET_PATH", "dataset.jsonl")),
            samples_per_combo: parse_env("DATASET_SAMPLES_PER_COMBO", 10)?,
            dataset_seed: parse_optional_env("DATASET_SEED")?,
            translate_words: parse_env("POEM_TRANSLATE_WORDS", true)?,
            oracle_timeout: Duration::from_secs(parse_env("ORACLE_TIMEOUT_SECS", 120)?),
            port: parse_env("PORT", 7860)?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            ollama_url: DEFAULT_OLLAMA_URL.to_string(),
            poetry_model: DEFAULT_MODEL.to_string(),
            translation_model: DEFAULT_MODEL.to_string(),
            dataset_model: DEFAULT_MODEL.to_string(),
            dataset_path: PathBuf::from("dataset.jsonl"),
            samples_per_combo: 10,
            dataset_seed: None,
            translate_words: true,
            oracle_timeout: Duration::from_secs(120),
            port: 7860,
            rust_log: "info".to_string(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}

fn parse_optional_env<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_local_ollama() {
        let config = Config::default();
        assert_eq!(config.ollama_url, "http://localhost:11434/api/generate");
        assert_eq!(config.samples_per_combo, 10);
        assert_eq!(config.oracle_timeout, Duration::from_secs(120));
        assert!(config.translate_words);
        assert!(config.dataset_seed.is_none());
    }

    #[test]
    fn test_parse_env_uses_default_when_unset() {
        let value: u32 = parse_env("POEM_API_TEST_SURELY_UNSET_VAR", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("POEM_API_TEST_BAD_PORT", "not-a-port");
        let result: Result<u16> = parse_env("POEM_API_TEST_BAD_PORT", 8080);
        assert!(result.is_err());
        std::env::remove_var("POEM_API_TEST_BAD_PORT");
    }

    #[test]
    fn test_parse_optional_env_blank_is_none() {
        std::env::set_var("POEM_API_TEST_BLANK_SEED", "  ");
        let seed: Option<u64> = parse_optional_env("POEM_API_TEST_BLANK_SEED").unwrap();
        assert!(seed.is_none());
        std::env::remove_var("POEM_API_TEST_BLANK_SEED");
    }
}
