//!
//! Shared helpers for the integration tests.
//!

use serde::{Deserialize, Serialize};

/// A realistic configuration shape: nested structs, a vec, an optional
/// field, and PascalCase keys on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Port")]
    pub port: u16,
    #[serde(rename = "Endpoints")]
    pub endpoints: Vec<Endpoint>,
    #[serde(rename = "LogLevel", skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endpoint {
    #[serde(rename = "Host")]
    pub host: String,
    #[serde(rename = "Port")]
    pub port: u16,
}

pub fn sample_config() -> AppConfig {
    AppConfig {
        name: "svc1".to_string(),
        port: 8080,
        endpoints: vec![
            Endpoint {
                host: "db.internal".to_string(),
                port: 5432,
            },
            Endpoint {
                host: "cache.internal".to_string(),
                port: 6379,
            },
        ],
        log_level: Some("info".to_string()),
    }
}
