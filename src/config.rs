//! Configuration management for Prop-Imitation

use crate::{Error, Result};
use serde::Deserialize;
use std::env;

/// Imitation configuration, loaded once before the first selection
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fingerprint reported to the security-check client
    pub certified_fingerprint: Option<String>,

    /// Model reported alongside the certified fingerprint
    pub certified_model: Option<String>,

    /// Stock fingerprint reported to the AR platform
    pub stock_fingerprint: Option<String>,

    /// Spoof Pixel identities for selected Google apps
    pub spoof_google_apps: bool,

    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            certified_fingerprint: None,
            certified_model: None,
            stock_fingerprint: None,
            spoof_google_apps: true,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Config::default();

        if let Ok(fp) = env::var("PROP_IMITATION_CERTIFIED_FINGERPRINT") {
            config.certified_fingerprint = Some(fp);
        }

        if let Ok(model) = env::var("PROP_IMITATION_CERTIFIED_MODEL") {
            config.certified_model = Some(model);
        }

        if let Ok(fp) = env::var("PROP_IMITATION_STOCK_FINGERPRINT") {
            config.stock_fingerprint = Some(fp);
        }

        if let Ok(spoof) = env::var("PROP_IMITATION_SPOOF_GAPPS") {
            config.spoof_google_apps = spoof
                .parse()
                .map_err(|_| Error::configuration("Invalid PROP_IMITATION_SPOOF_GAPPS"))?;
        }

        if let Ok(log_level) = env::var("PROP_IMITATION_LOG_LEVEL") {
            config.log_level = log_level;
        }

        Ok(config)
    }

    /// Load configuration from a file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML document
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::configuration(format!("Failed to parse config: {}", e)))
    }

    /// Certified fingerprint, if configured and non-empty
    pub fn certified_fingerprint(&self) -> Option<&str> {
        non_empty(&self.certified_fingerprint)
    }

    /// Certified model, if configured and non-empty
    pub fn certified_model(&self) -> Option<&str> {
        non_empty(&self.certified_model)
    }

    /// Stock fingerprint, if configured and non-empty
    pub fn stock_fingerprint(&self) -> Option<&str> {
        non_empty(&self.stock_fingerprint)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
