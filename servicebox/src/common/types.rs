//! JSONレスポンスボディ
//!
//! Field order of every struct is the serialized key order.

use serde::{Deserialize, Serialize};

/// `/health` body once the service is ready.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthyStatus {
    /// Always `"healthy"`
    pub status: String,
    /// Service name
    pub service: String,
    /// Whole seconds since the ready transition
    pub uptime_seconds: u64,
    /// Request counter, including the request being answered
    pub requests_served: u64,
    /// OS process id
    pub pid: u32,
}

impl HealthyStatus {
    /// Build a healthy body for the current process.
    pub fn new(service: &str, uptime_seconds: u64, requests_served: u64) -> Self {
        Self {
            status: "healthy".to_string(),
            service: service.to_string(),
            uptime_seconds,
            requests_served,
            pid: std::process::id(),
        }
    }
}

/// `/health` body while the service is still booting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StartingStatus {
    /// Always `"starting"`
    pub status: String,
    /// Service name
    pub service: String,
}

impl StartingStatus {
    /// Build a starting body.
    pub fn new(service: &str) -> Self {
        Self {
            status: "starting".to_string(),
            service: service.to_string(),
        }
    }
}

/// 404 body for paths outside `/health` and the route table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotFoundBody {
    /// Always `"not found"`
    pub error: String,
    /// Requested path
    pub path: String,
}

impl NotFoundBody {
    /// Build a not-found body for `path`.
    pub fn new(path: &str) -> Self {
        Self {
            error: "not found".to_string(),
            path: path.to_string(),
        }
    }
}

/// 405 body for methods other than GET/POST on a known path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MethodNotAllowedBody {
    /// Always `"method not allowed"`
    pub error: String,
    /// Rejected method
    pub method: String,
}

impl MethodNotAllowedBody {
    /// Build a method-not-allowed body.
    pub fn new(method: &str) -> Self {
        Self {
            error: "method not allowed".to_string(),
            method: method.to_string(),
        }
    }
}
