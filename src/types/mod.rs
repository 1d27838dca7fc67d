//! Shared types for the vibe playlist API.
//!
//! These types are used for request/response handling; the domain types
//! they carry live in [`crate::vibe`] and [`crate::catalog`].

pub mod catalog;
pub mod vibe;

use serde::{Deserialize, Serialize};

pub use catalog::*;
pub use vibe::*;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    /// Seconds since the server started
    #[serde(default)]
    pub uptime_s: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Configuration response (subset of config safe to expose)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigResponse {
    pub server: ServerInfo,
    pub catalog: CatalogInfo,
    /// Vibes whose search terms were overridden in configuration
    pub overridden_vibes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogInfo {
    pub api_base_url: String,
    pub market: String,
    pub search_limit: u32,
    pub max_tracks: usize,
    pub query_delay_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status_is_lowercase() {
        let json = serde_json::to_string(&HealthStatus::Healthy).unwrap();
        assert_eq!(json, "\"healthy\"");
    }
}
