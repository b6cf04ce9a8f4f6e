use axum::{extract::State, Json};
use chrono::Utc;
use sysinfo::{System, MINIMUM_CPU_UPDATE_INTERVAL};

use super::responses::*;
use super::state::AppState;

/// Sample CPU load and memory
///
/// CPU usage is a delta between two refreshes, so this waits one minimum
/// update interval between them.
async fn sample_resources() -> (f32, MemoryInfo) {
    let mut sys = System::new();
    sys.refresh_cpu();
    tokio::time::sleep(MINIMUM_CPU_UPDATE_INTERVAL).await;
    sys.refresh_cpu();
    sys.refresh_memory();

    let cpu_percent = sys.global_cpu_info().cpu_usage();
    (
        cpu_percent,
        MemoryInfo::new(sys.total_memory(), sys.available_memory()),
    )
}

fn health_status(state: &AppState) -> HealthResponse {
    HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().timestamp(),
        app_name: state.settings.app_name.clone(),
        version: state.settings.app_version.clone(),
        environment: state.settings.environment.clone(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    }
}

/// Health check
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(health_status(&state))
}

/// Health check with host and feature information
#[utoipa::path(
    get,
    path = "/api/v1/health/detailed",
    tag = "Health",
    responses(
        (status = 200, description = "Detailed health status", body = DetailedHealthResponse)
    )
)]
pub async fn detailed_health_check(State(state): State<AppState>) -> Json<DetailedHealthResponse> {
    let cpus = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    let (cpu_percent, memory) = sample_resources().await;

    Json(DetailedHealthResponse {
        health: health_status(&state),
        system: SystemInfo {
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            family: std::env::consts::FAMILY.to_string(),
            cpus,
            pid: std::process::id(),
            cpu_percent,
            memory,
        },
        features: FeatureFlags {
            metrics_enabled: state.settings.enable_metrics,
            docs_enabled: state.settings.enable_docs,
            health_check_enabled: state.settings.enable_health_check,
        },
    })
}

/// Connectivity probe
#[utoipa::path(
    get,
    path = "/api/v1/health/ping",
    tag = "Health",
    responses(
        (status = 200, description = "Pong", body = PingResponse)
    )
)]
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        ping: "pong".to_string(),
    })
}
