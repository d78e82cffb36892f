//! JSON response building module
//!
//! Payload types for the three routes and builders for the HTTP responses
//! that carry them, decoupled from routing logic.

use chrono::{SecondsFormat, Utc};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use serde::Serialize;

use crate::config::Config;
use crate::logger;

/// Value of the `status` field on both the root and health payloads.
pub const STATUS_HEALTHY: &str = "healthy";

/// Payload for `GET /`: the configured values plus per-request runtime
/// facts (timestamp and hostname).
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub message: String,
    pub version: String,
    pub environment: String,
    pub timestamp: String,
    pub hostname: String,
    pub status: &'static str,
}

/// Payload for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Payload for unmatched routes.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}

impl StatusResponse {
    pub fn new(config: &Config) -> Self {
        Self {
            message: config.app_message.clone(),
            version: config.app_version.clone(),
            environment: config.environment.clone(),
            timestamp: current_timestamp(),
            hostname: local_hostname(),
            status: STATUS_HEALTHY,
        }
    }
}

/// Current UTC time as ISO-8601 with millisecond precision,
/// e.g. `2024-11-02T09:41:27.103Z`.
fn current_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn local_hostname() -> String {
    hostname::get().map_or_else(
        |_| "unknown".to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

/// Build the 200 response for the root route (pretty-printed JSON)
pub fn build_status_response(config: &Config) -> Response<Full<Bytes>> {
    let payload = StatusResponse::new(config);
    let body = serde_json::to_string_pretty(&payload).unwrap_or_else(|e| {
        logger::log_build_error("status body", &e);
        String::from("{}")
    });
    json_response(200, body)
}

/// Build the 200 health-check response (compact JSON)
pub fn build_health_response() -> Response<Full<Bytes>> {
    let payload = HealthResponse {
        status: STATUS_HEALTHY,
    };
    let body = serde_json::to_string(&payload).unwrap_or_else(|e| {
        logger::log_build_error("health body", &e);
        String::from("{}")
    });
    json_response(200, body)
}

/// Build the 404 Not Found response (compact JSON)
pub fn build_404_response() -> Response<Full<Bytes>> {
    let payload = ErrorResponse { error: "Not found" };
    let body = serde_json::to_string(&payload).unwrap_or_else(|e| {
        logger::log_build_error("404 body", &e);
        String::from("{}")
    });
    json_response(404, body)
}

/// Assemble an `application/json` response with the given status code.
fn json_response(status: u16, body: String) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            logger::log_build_error("response", &e);
            Response::new(Full::new(Bytes::new()))
        })
}
