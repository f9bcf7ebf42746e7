use crate::routes::types::{iso_timestamp, HealthCheckResponse, HealthErrorResponse, HealthState};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;
use std::time::Instant;

use super::AppState;

/// Build the health report for a server that started at `started_at`.
pub fn build_health_report(
    environment: &str,
    started_at: Instant,
    now: Instant,
) -> Result<HealthCheckResponse, String> {
    let uptime = now
        .checked_duration_since(started_at)
        .ok_or_else(|| "Monotonic clock reads earlier than server start".to_string())?;

    Ok(HealthCheckResponse {
        status: HealthState::Healthy,
        timestamp: iso_timestamp(),
        uptime: uptime.as_secs_f64(),
        environment: environment.to_string(),
    })
}

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> Response {
    match build_health_report(&state.environment, state.started_at, Instant::now()) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(message) => {
            tracing::error!("Health check failed: {}", message);
            let body = HealthErrorResponse {
                status: HealthState::Error,
                message,
                timestamp: iso_timestamp(),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

/// Liveness probe
pub async fn ping() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_health_report_uptime() {
        let started_at = Instant::now();
        let now = started_at + Duration::from_millis(1500);

        let report = build_health_report("production", started_at, now).unwrap();
        assert_eq!(report.status, HealthState::Healthy);
        assert_eq!(report.environment, "production");
        assert!((report.uptime - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_health_report_clock_behind_start() {
        let now = Instant::now();
        let started_at = now + Duration::from_secs(1);

        assert!(build_health_report("test", started_at, now).is_err());
    }

    #[tokio::test]
    async fn test_ping() {
        assert_eq!(ping().await, "OK");
    }
}
