//! Core configuration.
//!
//! # Responsibility
//! - Hold logging, language and insight-provider settings with defaults.
//! - Apply environment overrides on top of defaults or a JSON file.
//!
//! # Invariants
//! - Blank environment values are ignored rather than treated as overrides.
//! - Invalid override values are reported, never silently dropped.

use crate::i18n::Language;
use crate::logging::default_log_level;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

pub const ENV_LOG_LEVEL: &str = "LIFEOS_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "LIFEOS_LOG_DIR";
pub const ENV_LANGUAGE: &str = "LIFEOS_LANGUAGE";
pub const ENV_INSIGHT_MODEL: &str = "LIFEOS_INSIGHT_MODEL";
pub const ENV_INSIGHT_ENDPOINT: &str = "LIFEOS_INSIGHT_ENDPOINT";
pub const ENV_INSIGHT_TIMEOUT_SECS: &str = "LIFEOS_INSIGHT_TIMEOUT_SECS";
/// Checked first; `API_KEY` is the fallback name.
pub const ENV_GEMINI_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_API_KEY: &str = "API_KEY";

pub const DEFAULT_INSIGHT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_INSIGHT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_INSIGHT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An override could not be parsed.
    InvalidValue { key: &'static str, message: String },
    /// The configuration document is not valid JSON for `CoreConfig`.
    Parse(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, message } => write!(f, "invalid `{key}`: {message}"),
            Self::Parse(message) => write!(f, "invalid configuration: {message}"),
        }
    }
}

impl Error for ConfigError {}

/// Settings for the external insight provider.
///
/// `Debug` output redacts the credential.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightConfig {
    /// Provider credential; the generator falls back when absent.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub model: String,
    /// Base URL up to and including the API version segment.
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_INSIGHT_MODEL.to_string(),
            endpoint: DEFAULT_INSIGHT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_INSIGHT_TIMEOUT_SECS,
        }
    }
}

impl Debug for InsightConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InsightConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl InsightConfig {
    pub fn is_configured(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    pub log_level: String,
    /// Absolute directory for rolling logs; logging stays off when `None`.
    pub log_dir: Option<String>,
    pub language: Language,
    pub insight: InsightConfig,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            language: Language::default(),
            insight: InsightConfig::default(),
        }
    }
}

impl CoreConfig {
    /// Defaults with process environment overrides applied.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Parses a JSON configuration document; missing fields use defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    /// Applies overrides resolved through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(level) = get(ENV_LOG_LEVEL) {
            self.log_level = level;
        }
        if let Some(dir) = get(ENV_LOG_DIR) {
            self.log_dir = Some(dir);
        }
        if let Some(language) = get(ENV_LANGUAGE) {
            self.language = language
                .parse()
                .map_err(|message| ConfigError::InvalidValue {
                    key: ENV_LANGUAGE,
                    message,
                })?;
        }
        if let Some(model) = get(ENV_INSIGHT_MODEL) {
            self.insight.model = model;
        }
        if let Some(endpoint) = get(ENV_INSIGHT_ENDPOINT) {
            self.insight.endpoint = endpoint.trim_end_matches('/').to_string();
        }
        if let Some(timeout) = get(ENV_INSIGHT_TIMEOUT_SECS) {
            let secs = timeout
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidValue {
                    key: ENV_INSIGHT_TIMEOUT_SECS,
                    message: format!("expected a positive integer, got `{timeout}`"),
                })?;
            self.insight.timeout_secs = secs;
        }
        if let Some(key) = get(ENV_GEMINI_API_KEY).or_else(|| get(ENV_API_KEY)) {
            self.insight.api_key = Some(key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        ConfigError, CoreConfig, DEFAULT_INSIGHT_MODEL, ENV_API_KEY, ENV_GEMINI_API_KEY,
        ENV_INSIGHT_TIMEOUT_SECS, ENV_LANGUAGE,
    };
    use crate::i18n::Language;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn overrides_apply_and_blank_values_are_ignored() {
        let mut config = CoreConfig::default();
        config
            .apply_overrides(lookup(&[
                (ENV_LANGUAGE, "zh"),
                (ENV_GEMINI_API_KEY, "  "),
                (ENV_API_KEY, "secret"),
            ]))
            .unwrap();

        assert_eq!(config.language, Language::Zh);
        assert_eq!(config.insight.api_key.as_deref(), Some("secret"));
        assert_eq!(config.insight.model, DEFAULT_INSIGHT_MODEL);
        assert!(config.insight.is_configured());
    }

    #[test]
    fn debug_output_redacts_the_api_key() {
        let mut config = CoreConfig::default();
        config
            .apply_overrides(lookup(&[(ENV_GEMINI_API_KEY, "sk-live-123")]))
            .unwrap();

        let printed = format!("{config:?}");
        assert!(!printed.contains("sk-live-123"));
        assert!(printed.contains("<redacted>"));
        assert!(format!("{:?}", CoreConfig::default()).contains("api_key: None"));
    }

    #[test]
    fn invalid_timeout_is_reported() {
        let mut config = CoreConfig::default();
        let err = config
            .apply_overrides(lookup(&[(ENV_INSIGHT_TIMEOUT_SECS, "0")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                key: ENV_INSIGHT_TIMEOUT_SECS,
                ..
            }
        ));
    }

    #[test]
    fn json_document_fills_missing_fields_with_defaults() {
        let config =
            CoreConfig::from_json_str(r#"{"language":"zh","insight":{"timeout_secs":5}}"#)
                .unwrap();
        assert_eq!(config.language, Language::Zh);
        assert_eq!(config.insight.timeout_secs, 5);
        assert_eq!(config.insight.model, DEFAULT_INSIGHT_MODEL);
        assert!(!config.insight.is_configured());
    }
}
