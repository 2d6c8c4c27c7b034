//! Configuration management for the policy gate
//!
//! This module provides configuration loading from multiple sources:
//! - Default values
//! - Configuration files (TOML, JSON, YAML)
//! - Environment variables
//!
//! The classification service API key is a secret and is deliberately not
//! part of the file-loadable configuration. It is resolved from the
//! environment via [`ClassifierSettings::resolve_api_key`], which fails
//! before any request is accepted when the variable is unset.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration for the policy gate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Classification service settings
    pub classifier: ClassifierSettings,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Use JSON format
    #[serde(default)]
    pub json: bool,
}

/// Settings for the classification service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierSettings {
    /// Model used for classification calls
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the OpenAI-compatible chat completions API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta/openai".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: default_log_level(),
                json: false,
            },
            classifier: ClassifierSettings::default(),
        }
    }
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            api_key_env: default_api_key_env(),
        }
    }
}

impl ClassifierSettings {
    /// Resolve the classification service API key from the environment
    ///
    /// The key is required: an unset or empty variable is a configuration
    /// error and must abort startup before any request is processed.
    pub fn resolve_api_key(&self) -> Result<String> {
        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(CoreError::config(format!(
                "{} is not set. The classification service cannot be reached without it.",
                self.api_key_env
            ))),
        }
    }
}

/// Load configuration from a file
///
/// Supports TOML, JSON, and YAML formats based on file extension.
/// Values can be overridden with `GATE__`-prefixed environment variables,
/// e.g. `GATE__CLASSIFIER__MODEL`.
///
/// # Example
///
/// ```no_run
/// use gate_core::config::load_config;
///
/// let config = load_config("gate.toml").unwrap();
/// println!("Classifier model: {}", config.classifier.model);
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<GateConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(CoreError::config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    let settings = config::Config::builder()
        .add_source(config::File::from(path))
        .add_source(config::Environment::with_prefix("GATE").separator("__"))
        .build()?;

    let config: GateConfig = settings.try_deserialize()?;

    tracing::info!("Configuration loaded from {}", path.display());

    Ok(config)
}

/// Load configuration with defaults if file doesn't exist
///
/// This is useful for optional configuration files.
pub fn load_config_or_default<P: AsRef<Path>>(path: P) -> GateConfig {
    match load_config(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            GateConfig::default()
        }
    }
}
