use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Quote;

/// Envelope for a single quote
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuoteResponse {
    #[schema(example = true)]
    pub success: bool,
    pub data: Quote,
    #[schema(example = "Quote retrieved successfully")]
    pub message: String,
}

impl QuoteResponse {
    pub fn new(quote: &Quote, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: quote.clone(),
            message: message.into(),
        }
    }
}

/// Envelope for several quotes
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuoteListResponse {
    #[schema(example = true)]
    pub success: bool,
    pub data: Vec<Quote>,
    #[schema(example = 10)]
    pub count: usize,
    #[schema(example = "Quotes retrieved successfully")]
    pub message: String,
}

impl QuoteListResponse {
    pub fn new<'a>(quotes: impl IntoIterator<Item = &'a Quote>, message: impl Into<String>) -> Self {
        let data: Vec<Quote> = quotes.into_iter().cloned().collect();
        Self {
            success: true,
            count: data.len(),
            data,
            message: message.into(),
        }
    }
}

/// Error body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
    #[schema(example = "Quote with ID 9999 not found")]
    pub message: String,
}

/// Machine-readable error description
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    #[schema(example = "QuoteNotFound")]
    pub error: String,
    #[schema(example = "QUOTE_NOT_FOUND")]
    pub error_code: String,
    pub message: String,
    #[schema(value_type = Object)]
    pub details: serde_json::Value,
}

/// Welcome document served at `/`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub docs: Option<String>,
    pub health: Option<String>,
    pub quotes: String,
}

/// Application information
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AppInfoResponse {
    pub name: String,
    pub version: String,
    pub description: String,
    pub environment: String,
    #[schema(example = "v1")]
    pub api_version: String,
    pub docs_url: Option<String>,
}

/// Distinct categories
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
    pub count: usize,
}

/// Distinct authors
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthorsResponse {
    pub authors: Vec<String>,
    pub count: usize,
}

/// Basic health status
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    /// Unix timestamp, in seconds
    pub timestamp: i64,
    pub app_name: String,
    pub version: String,
    pub environment: String,
    pub uptime_seconds: u64,
}

/// Health status with host and feature information
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DetailedHealthResponse {
    #[serde(flatten)]
    pub health: HealthResponse,
    pub system: SystemInfo,
    pub features: FeatureFlags,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SystemInfo {
    #[schema(example = "linux")]
    pub os: String,
    #[schema(example = "x86_64")]
    pub arch: String,
    #[schema(example = "unix")]
    pub family: String,
    pub cpus: usize,
    pub pid: u32,
    /// Global CPU load, in percent
    pub cpu_percent: f32,
    pub memory: MemoryInfo,
}

/// Host memory, in bytes
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MemoryInfo {
    pub total: u64,
    pub available: u64,
    /// Share of memory in use, in percent
    pub percent: f64,
}

impl MemoryInfo {
    pub fn new(total: u64, available: u64) -> Self {
        let percent = if total == 0 {
            0.0
        } else {
            total.saturating_sub(available) as f64 * 100.0 / total as f64
        };
        Self {
            total,
            available,
            percent: (percent * 10.0).round() / 10.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FeatureFlags {
    pub metrics_enabled: bool,
    pub docs_enabled: bool,
    pub health_check_enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PingResponse {
    #[schema(example = "pong")]
    pub ping: String,
}
