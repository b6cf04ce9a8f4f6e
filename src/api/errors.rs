//! HTTP-facing error type
//!
//! The query service never fails; these errors come from request
//! validation and from turning empty results into 404s.

use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use super::responses::{ErrorDetail, ErrorResponse};

/// Errors returned by API handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// No quote satisfied the lookup, filter or search
    #[error("{message}")]
    NotFound {
        message: String,
        details: serde_json::Value,
    },

    /// No route matches the request path
    #[error("Route not found: {0}")]
    RouteNotFound(String),

    /// Malformed request input, rejected before reaching the query service
    #[error("{message}")]
    Validation {
        field: &'static str,
        value: Option<String>,
        message: String,
    },

    /// Reserved; no handler applies a rate limit
    #[error("Rate limit exceeded: {limit} requests per {window} seconds")]
    RateLimitExceeded {
        limit: u32,
        window: u64,
        reset_time: i64,
    },
}

impl ApiError {
    pub fn quote_not_found(id: i64) -> Self {
        ApiError::NotFound {
            message: format!("Quote with ID {} not found", id),
            details: json!({ "quote_id": id }),
        }
    }

    /// A filter or search that matched nothing
    pub fn no_matches(message: String, key: &str, value: &str) -> Self {
        ApiError::NotFound {
            message,
            details: json!({ key: value }),
        }
    }

    pub fn validation(field: &'static str, value: Option<&str>, message: impl Into<String>) -> Self {
        ApiError::Validation {
            field,
            value: value.map(str::to_string),
            message: message.into(),
        }
    }

    /// Query string the extractor could not deserialize
    pub fn invalid_query(field: &'static str, rejection: &QueryRejection) -> Self {
        ApiError::Validation {
            field,
            value: None,
            message: rejection.body_text(),
        }
    }

    /// Path segment the extractor could not decode
    pub fn invalid_path(field: &'static str, rejection: &PathRejection) -> Self {
        ApiError::Validation {
            field,
            value: None,
            message: rejection.body_text(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } | ApiError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::RateLimitExceeded { .. } => StatusCode::TOO_MANY_REQUESTS,
        }
    }

    /// Stable machine-readable code
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } => "QUOTE_NOT_FOUND",
            ApiError::RouteNotFound(_) => "NOT_FOUND",
            ApiError::Validation { .. } => "VALIDATION_ERROR",
            ApiError::RateLimitExceeded { .. } => "RATE_LIMIT_EXCEEDED",
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } => "QuoteNotFound",
            ApiError::RouteNotFound(_) => "RouteNotFound",
            ApiError::Validation { .. } => "ValidationError",
            ApiError::RateLimitExceeded { .. } => "RateLimitExceeded",
        }
    }

    fn details(&self) -> serde_json::Value {
        match self {
            ApiError::NotFound { details, .. } => details.clone(),
            ApiError::RouteNotFound(path) => json!({ "path": path }),
            ApiError::Validation { field, value, .. } => match value {
                Some(value) => json!({ "field": field, "value": value }),
                None => json!({ "field": field }),
            },
            ApiError::RateLimitExceeded {
                limit,
                window,
                reset_time,
            } => json!({ "limit": limit, "window": window, "reset_time": reset_time }),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::debug!(error_code = self.error_code(), "{}", self);

        let message = self.to_string();
        let body = ErrorResponse {
            success: false,
            error: ErrorDetail {
                error: self.kind().to_string(),
                error_code: self.error_code().to_string(),
                message: message.clone(),
                details: self.details(),
            },
            message,
        };

        (status, Json(body)).into_response()
    }
}

/// Fallback for unknown routes
pub async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::RouteNotFound(uri.path().to_string())
}
