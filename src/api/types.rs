//! API Data Types
//!
//! Request/response DTOs and the static service metadata.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::store::TrackId;

/// Body of `POST /track`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub url: String,
}

/// Body of a successful `POST /track`.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub id: TrackId,
}

/// Body of `GET /`.
#[derive(Debug, Serialize)]
pub struct ServiceMetaResponse {
    pub uptime: String,
    pub info: String,
    pub version: String,
}

/// Static service facts plus the start instant the uptime is measured from.
#[derive(Debug, Clone)]
pub struct ServiceInfo {
    started: Instant,
}

impl ServiceInfo {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn meta(&self) -> ServiceMetaResponse {
        ServiceMetaResponse {
            uptime: iso8601_duration(self.started.elapsed()),
            info: "Service for registering and inspecting IGC flight tracks".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders a duration as an ISO 8601 duration string, e.g. `P1DT2H3M4S`.
fn iso8601_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;
    format!("P{}DT{}H{}M{}S", days, hours, minutes, seconds)
}
