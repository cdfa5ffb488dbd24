//! Drafting service configuration.
//!
//! # Responsibility
//! - Resolve API credentials and endpoint settings from the environment.
//! - Normalize values so the HTTP client never sees blank settings.
//!
//! # Invariants
//! - `api_key` is never empty in a constructed config.
//! - `timeout_secs` is always greater than zero.
//! - The key itself is never logged.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub const API_KEY_ENV: &str = "CLASSDESK_GEMINI_API_KEY";
pub const FALLBACK_API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const MODEL_ENV: &str = "CLASSDESK_GEMINI_MODEL";
pub const BASE_URL_ENV: &str = "CLASSDESK_GEMINI_BASE_URL";
pub const TIMEOUT_ENV: &str = "CLASSDESK_DRAFT_TIMEOUT_SECS";

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingApiKey,
    InvalidTimeout(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingApiKey => write!(
                f,
                "drafting API key is not set; export {API_KEY_ENV} or {FALLBACK_API_KEY_ENV}"
            ),
            Self::InvalidTimeout(raw) => {
                write!(f, "invalid drafting timeout `{raw}`; expected whole seconds > 0")
            }
        }
    }
}

impl Error for ConfigError {}

/// Settings for the Gemini-backed drafter.
#[derive(Clone, PartialEq, Eq)]
pub struct DraftingConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

// Manual impl so the key never reaches logs or panic messages.
impl std::fmt::Debug for DraftingConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DraftingConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl DraftingConfig {
    /// Creates a config with default model, endpoint and timeout.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let api_key = non_blank(Some(api_key.into())).ok_or(ConfigError::MissingApiKey)?;
        Ok(Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Reads settings from process environment variables.
    ///
    /// # Errors
    /// - `MissingApiKey` when neither key variable holds a value.
    /// - `InvalidTimeout` when the timeout variable is not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` over an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = non_blank(lookup(API_KEY_ENV))
            .or_else(|| non_blank(lookup(FALLBACK_API_KEY_ENV)))
            .ok_or(ConfigError::MissingApiKey)?;
        let mut config = Self::new(api_key)?;
        if let Some(model) = non_blank(lookup(MODEL_ENV)) {
            config.model = model;
        }
        if let Some(base_url) = non_blank(lookup(BASE_URL_ENV)) {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(raw) = non_blank(lookup(TIMEOUT_ENV)) {
            config.timeout_secs = parse_timeout(&raw)?;
        }
        Ok(config)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs.max(1);
        self
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

fn parse_timeout(raw: &str) -> Result<u64, ConfigError> {
    raw.parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .ok_or_else(|| ConfigError::InvalidTimeout(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, DraftingConfig, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn falls_back_to_generic_key_and_defaults() {
        let config = DraftingConfig::from_lookup(lookup(&[("GEMINI_API_KEY", " k-123 ")])).unwrap();
        assert_eq!(config.api_key, "k-123");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn blank_key_is_missing() {
        let err = DraftingConfig::from_lookup(lookup(&[("CLASSDESK_GEMINI_API_KEY", "  ")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingApiKey);
    }

    #[test]
    fn rejects_zero_timeout_and_trims_base_url() {
        let err = DraftingConfig::from_lookup(lookup(&[
            ("CLASSDESK_GEMINI_API_KEY", "k"),
            ("CLASSDESK_DRAFT_TIMEOUT_SECS", "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimeout(_)));

        let config = DraftingConfig::from_lookup(lookup(&[
            ("CLASSDESK_GEMINI_API_KEY", "k"),
            ("CLASSDESK_GEMINI_BASE_URL", "http://localhost:9000/v1/"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:9000/v1");
    }

    #[test]
    fn debug_output_redacts_key() {
        let config = DraftingConfig::new("secret-key").unwrap();
        assert!(!format!("{config:?}").contains("secret-key"));
    }
}
