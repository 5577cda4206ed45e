//! stransi configuration
//!
//! TOML-backed settings for logging and for the escape decoder.

#![warn(missing_docs)]
#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use stransi_core::logging::{LogLevel, LoggingConfig};
use stransi_core::StransiError;
use stransi_parser::DecoderOptions;
use tracing::{debug, error, info, instrument, warn};

/// Main configuration structure for stransi
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Decoder configuration
    pub decoder: DecoderOptions,
}

impl Config {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> stransi_core::Result<Self> {
        toml::from_str(content).map_err(|e| {
            StransiError::Configuration(format!("Failed to parse config: {}", e))
        })
    }

    /// Serialize configuration to TOML text
    pub fn to_toml(&self) -> stransi_core::Result<String> {
        toml::to_string_pretty(self).map_err(|e| {
            StransiError::Configuration(format!("Failed to serialize config: {}", e))
        })
    }

    /// Load configuration from file
    #[instrument(name = "config_load", skip(path))]
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> stransi_core::Result<Self> {
        let path = path.as_ref();
        info!(config_file = ?path, "Loading configuration from file");

        let content = std::fs::read_to_string(path).map_err(|e| {
            error!(config_file = ?path, error = %e, "Failed to read configuration file");
            StransiError::Configuration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::from_toml(&content).map_err(|e| {
            error!(config_file = ?path, error = %e, "Failed to parse configuration file");
            e
        })?;

        debug!(
            config_file = ?path,
            logging_level = ?config.logging.global_level,
            log_unsupported = config.decoder.log_unsupported,
            "Configuration loaded successfully"
        );

        Ok(config)
    }

    /// Save configuration to file
    #[instrument(name = "config_save", skip(self, path))]
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> stransi_core::Result<()> {
        let path = path.as_ref();
        info!(config_file = ?path, "Saving configuration to file");

        let content = self.to_toml().map_err(|e| {
            error!(error = %e, "Failed to serialize configuration");
            e
        })?;

        std::fs::write(path, content).map_err(|e| {
            error!(config_file = ?path, error = %e, "Failed to write configuration file");
            StransiError::Configuration(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!(config_file = ?path, "Configuration saved successfully");
        Ok(())
    }

    /// Get default configuration file path
    pub fn default_config_path() -> PathBuf {
        let config_dir = match dirs::config_dir() {
            Some(config_dir) => config_dir.join("stransi"),
            None => {
                warn!("No standard config directory found, using current directory");
                PathBuf::from(".")
            }
        };

        config_dir.join("config.toml")
    }

    /// Load configuration from the default path, falling back to defaults
    #[instrument(name = "config_load_or_default")]
    pub fn load_or_default() -> Self {
        Self::load_from_path_or_default(Self::default_config_path())
    }

    /// Load configuration from `path`, falling back to defaults when the
    /// file is missing or broken
    pub fn load_from_path_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            debug!(config_file = ?path, "Configuration file does not exist, using defaults");
            return Self::default();
        }

        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    config_file = ?path,
                    error = %e,
                    "Failed to load config file, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Update logging level for a specific module
    #[instrument(name = "config_update_log_level", skip(self))]
    pub fn update_log_level(&mut self, module: &str, level: LogLevel) {
        debug!(module = module, level = ?level, "Updating log level for module");
        self.logging.module_levels.insert(module.to_string(), level);
    }

    /// Validate configuration values
    #[instrument(name = "config_validate", skip(self))]
    pub fn validate(&self) -> stransi_core::Result<()> {
        debug!("Validating configuration");

        for module in self.logging.module_levels.keys() {
            let valid = !module.is_empty()
                && module
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':' || c == '-');
            if !valid {
                error!(module = module.as_str(), "Invalid module name in logging config");
                return Err(StransiError::Configuration(format!(
                    "Invalid module name '{}' in logging.module_levels",
                    module
                )));
            }
        }

        debug!("Configuration validation passed");
        Ok(())
    }
}
