//! Application settings
//!
//! Loaded once in `main` and passed by reference to whatever needs it.
//! Every key is read from an upper-case environment variable, with a `.env`
//! file honoured through `dotenvy`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::Level;

/// Origins always allowed alongside configured ones, for a local frontend dev server
pub const DEV_CORS_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://127.0.0.1:5173"];

/// Settings loading errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value `{value}` for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    /// Name of the environment variable at fault
    pub fn key(&self) -> &'static str {
        match self {
            ConfigError::Invalid { key, .. } => key,
        }
    }

    fn invalid(key: &'static str, value: &str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            key,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" | "console" | "text" => Ok(LogFormat::Pretty),
            other => Err(format!("unknown log format `{}`", other)),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Json => write!(f, "json"),
            LogFormat::Pretty => write!(f, "pretty"),
        }
    }
}

/// Process-wide settings
#[derive(Debug, Clone)]
pub struct Settings {
    // Application
    pub app_name: String,
    pub app_version: String,
    pub debug: bool,
    pub environment: String,

    // Server
    pub host: String,
    pub port: u16,

    // Logging
    pub log_level: Level,
    pub log_format: LogFormat,

    // API
    pub api_v1_prefix: String,
    pub cors_origins: Vec<String>,

    // Feature flags
    pub enable_metrics: bool,
    pub enable_docs: bool,
    pub enable_health_check: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: "Arbah Quotes API".to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            debug: false,
            environment: "development".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8000,
            log_level: Level::INFO,
            log_format: LogFormat::Json,
            api_v1_prefix: "/api/v1".to_string(),
            cors_origins: Vec::new(),
            enable_metrics: true,
            enable_docs: true,
            enable_health_check: true,
        }
    }
}

impl Settings {
    /// Load settings from the process environment (and `.env`, if present)
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings from an arbitrary key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let string = |key: &str, default: String| lookup(key).unwrap_or(default);

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::invalid("PORT", &raw, e.to_string()))?,
            None => defaults.port,
        };

        let log_level = match lookup("LOG_LEVEL") {
            Some(raw) => parse_level(&raw)?,
            None => defaults.log_level,
        };

        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => raw
                .parse::<LogFormat>()
                .map_err(|reason| ConfigError::invalid("LOG_FORMAT", &raw, reason))?,
            None => defaults.log_format,
        };

        let cors_origins = match lookup("CORS_ORIGINS") {
            Some(raw) => parse_cors_origins(&raw)?,
            None => defaults.cors_origins,
        };

        let api_v1_prefix = normalize_prefix(&string("API_V1_PREFIX", defaults.api_v1_prefix));

        Ok(Self {
            app_name: string("APP_NAME", defaults.app_name),
            app_version: string("APP_VERSION", defaults.app_version),
            debug: parse_flag(&lookup, "DEBUG", defaults.debug)?,
            environment: string("ENVIRONMENT", defaults.environment),
            host: string("HOST", defaults.host),
            port,
            log_level,
            log_format,
            api_v1_prefix,
            cors_origins,
            enable_metrics: parse_flag(&lookup, "ENABLE_METRICS", defaults.enable_metrics)?,
            enable_docs: parse_flag(&lookup, "ENABLE_DOCS", defaults.enable_docs)?,
            enable_health_check: parse_flag(
                &lookup,
                "ENABLE_HEALTH_CHECK",
                defaults.enable_health_check,
            )?,
        })
    }

    /// Address the HTTP listener binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Origins passed to the CORS layer
    ///
    /// Empty when no origin is configured, which disables CORS entirely.
    pub fn cors_allowed_origins(&self) -> Vec<String> {
        if self.cors_origins.is_empty() {
            return Vec::new();
        }

        let mut origins = self.cors_origins.clone();
        for dev in DEV_CORS_ORIGINS {
            if !origins.iter().any(|o| o == dev) {
                origins.push(dev.to_string());
            }
        }
        origins
    }

    /// Default `EnvFilter` directive when `RUST_LOG` is unset
    pub fn log_directive(&self) -> String {
        let level = self.log_level.as_str().to_ascii_lowercase();
        format!("quotes_api={level},tower_http={level}")
    }
}

fn parse_flag<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::invalid(key, &raw, "expected a boolean")),
    }
}

fn parse_level(raw: &str) -> Result<Level, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" | "critical" => Ok(Level::ERROR),
        _ => Err(ConfigError::invalid("LOG_LEVEL", raw, "unknown log level")),
    }
}

/// Accepts a comma separated list or a JSON array of strings
fn parse_cors_origins(raw: &str) -> Result<Vec<String>, ConfigError> {
    let trimmed = raw.trim();
    let candidates: Vec<String> = if trimmed.starts_with('[') {
        serde_json::from_str(trimmed)
            .map_err(|e| ConfigError::invalid("CORS_ORIGINS", raw, e.to_string()))?
    } else {
        trimmed.split(',').map(|s| s.trim().to_string()).collect()
    };

    candidates
        .into_iter()
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            if origin.starts_with("http://") || origin.starts_with("https://") {
                Ok(origin.trim_end_matches('/').to_string())
            } else {
                Err(ConfigError::invalid(
                    "CORS_ORIGINS",
                    &origin,
                    "origin must be an http or https URL",
                ))
            }
        })
        .collect()
}

fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}
