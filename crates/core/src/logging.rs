//! Structured logging for stransi
//!
//! Centralized `tracing` setup with per-module level controls and an
//! environment override. The decoder itself only emits events; a host
//! application (or a test) calls [`init_logging`] once to install a
//! subscriber.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;
use tracing::Level;
use tracing_subscriber::{
    filter::Directive,
    fmt::{self, time::ChronoUtc},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

use crate::StransiError;

/// Environment variable holding extra filter directives
pub const LOG_ENV_VAR: &str = "STRANSI_LOG";

/// Logging configuration for stransi
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Global log level (applies when module-specific level not set)
    pub global_level: LogLevel,
    /// Whether to include timestamps in log output
    pub include_timestamps: bool,
    /// Whether to include severity levels in log output
    pub include_severity: bool,
    /// Whether to include target (module) names in log output
    pub include_target: bool,
    /// Whether to use JSON format for structured output
    pub json_format: bool,
    /// Whether to use ANSI colors in output (when not JSON)
    pub use_colors: bool,
    /// Per-module log level overrides
    pub module_levels: HashMap<String, LogLevel>,
}

/// Log levels for stransi modules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show all logs including trace
    Trace,
    /// Show debug and above
    Debug,
    /// Show info and above (default)
    Info,
    /// Show warnings and above
    Warn,
    /// Show only errors
    Error,
    /// Disable all logging for this module
    Off,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            global_level: LogLevel::Info,
            module_levels: HashMap::new(),
            include_timestamps: true,
            include_severity: true,
            include_target: true,
            json_format: false,
            use_colors: true,
        }
    }
}

impl LogLevel {
    /// Filter directive spelling of this level
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

impl From<LogLevel> for Option<Level> {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Some(Level::TRACE),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Off => None,
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" | "none" => Ok(LogLevel::Off),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_directive())
    }
}

/// Module names for per-module logging configuration
pub mod modules {
    /// Core module logging identifier
    pub const CORE: &str = "stransi_core";
    /// Parser module logging identifier
    pub const PARSER: &str = "stransi_parser";
    /// Configuration module logging identifier
    pub const CONFIG: &str = "stransi_config";
}

/// Initialize the logging system with the given configuration
pub fn init_logging(config: &LoggingConfig) -> crate::Result<()> {
    let env_filter = build_env_filter(config)?;
    let registry = Registry::default().with(env_filter);

    if config.json_format {
        let json_layer = fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_timer(ChronoUtc::rfc_3339());

        registry.with(json_layer).try_init().map_err(|e| {
            StransiError::Configuration(format!("Failed to initialize JSON logging: {}", e))
        })?;
    } else if config.include_timestamps {
        let fmt_layer = fmt::layer()
            .with_target(config.include_target)
            .with_level(config.include_severity)
            .with_ansi(config.use_colors)
            .with_timer(ChronoUtc::rfc_3339());

        registry.with(fmt_layer).try_init().map_err(|e| {
            StransiError::Configuration(format!("Failed to initialize logging: {}", e))
        })?;
    } else {
        let fmt_layer = fmt::layer()
            .with_target(config.include_target)
            .with_level(config.include_severity)
            .with_ansi(config.use_colors)
            .without_time();

        registry.with(fmt_layer).try_init().map_err(|e| {
            StransiError::Configuration(format!("Failed to initialize logging: {}", e))
        })?;
    }

    Ok(())
}

/// Build an environment filter from the logging configuration
pub fn build_env_filter(config: &LoggingConfig) -> crate::Result<EnvFilter> {
    let mut filter = EnvFilter::new("");

    for module in [modules::CORE, modules::PARSER, modules::CONFIG] {
        filter = filter.add_directive(directive(module, config.global_level)?);
    }

    // Module overrides come after the global level so they win.
    for (module, level) in &config.module_levels {
        filter = filter.add_directive(directive(module, *level)?);
    }

    if let Ok(env_filter) = std::env::var(LOG_ENV_VAR) {
        for part in env_filter.split(',').filter(|p| !p.trim().is_empty()) {
            match part.trim().parse::<Directive>() {
                Ok(d) => filter = filter.add_directive(d),
                Err(e) => tracing::warn!(
                    directive = part,
                    error = %e,
                    "Ignoring invalid {} directive",
                    LOG_ENV_VAR
                ),
            }
        }
    }

    Ok(filter)
}

fn directive(module: &str, level: LogLevel) -> crate::Result<Directive> {
    format!("{}={}", module, level.as_directive())
        .parse()
        .map_err(|e| {
            StransiError::Configuration(format!(
                "Invalid log directive for module '{}': {}",
                module, e
            ))
        })
}

/// Get default development logging configuration
pub fn dev_config() -> LoggingConfig {
    let mut config = LoggingConfig {
        global_level: LogLevel::Debug,
        use_colors: true,
        json_format: false,
        ..LoggingConfig::default()
    };

    config
        .module_levels
        .insert(modules::PARSER.to_string(), LogLevel::Debug);

    config
}

/// Get default production logging configuration
pub fn prod_config() -> LoggingConfig {
    let mut config = LoggingConfig {
        global_level: LogLevel::Info,
        use_colors: false,
        json_format: true,
        ..LoggingConfig::default()
    };

    // Unsupported codes are routine in real output; keep them quiet.
    config
        .module_levels
        .insert(modules::PARSER.to_string(), LogLevel::Warn);
    config
        .module_levels
        .insert(modules::CONFIG.to_string(), LogLevel::Info);

    config
}

/// Get CI/testing logging configuration
pub fn ci_config() -> LoggingConfig {
    let mut config = LoggingConfig {
        global_level: LogLevel::Info,
        use_colors: false,
        json_format: true,
        include_timestamps: true,
        include_severity: true,
        include_target: true,
        ..LoggingConfig::default()
    };

    config
        .module_levels
        .insert(modules::CORE.to_string(), LogLevel::Debug);
    config
        .module_levels
        .insert(modules::PARSER.to_string(), LogLevel::Debug);

    config
}
