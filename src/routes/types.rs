use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Reported service state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Healthy,
    Error,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: HealthState,
    pub timestamp: String,
    /// Seconds since the server started
    pub uptime: f64,
    pub environment: String,
}

/// Body returned when the health check itself fails
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthErrorResponse {
    pub status: HealthState,
    pub message: String,
    pub timestamp: String,
}

/// Current UTC time as an ISO-8601 string with millisecond precision
pub fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
