use axum::{
    extract::{ConnectInfo, Request},
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;
use std::time::Instant;

/// Response header carrying the handling time, in seconds
pub const PROCESS_TIME_HEADER: &str = "x-process-time";

/// Log every request and stamp the response with its processing time
///
/// Responses with a status of 400 or above are logged at `error`.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();

    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let user_agent = request
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();
    let remote_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "-".to_string());

    let mut response = next.run(request).await;

    let elapsed = start.elapsed();
    let status_code = response.status().as_u16();
    let duration_ms = (elapsed.as_secs_f64() * 100_000.0).round() / 100.0;

    if status_code >= 400 {
        tracing::error!(
            %method,
            %path,
            status_code,
            duration_ms,
            %user_agent,
            %remote_addr,
            "HTTP request error"
        );
    } else {
        tracing::info!(
            %method,
            %path,
            status_code,
            duration_ms,
            %user_agent,
            %remote_addr,
            "HTTP request"
        );
    }

    if let Ok(value) = HeaderValue::from_str(&elapsed.as_secs_f64().to_string()) {
        response.headers_mut().insert(PROCESS_TIME_HEADER, value);
    }

    response
}
