//! Response DTOs for the student API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for DELETE /students/:id
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub message: String,
    pub id: i64,
}

impl DeleteResponse {
    pub fn new(id: i64) -> Self {
        Self {
            message: format!("Student {} deleted", id),
            id,
        }
    }
}

/// Response body for GET /stats
///
/// Describes the listing cache only; single-record reads are never cached.
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub expirations: u64,
    pub invalidations: u64,
    pub total_entries: usize,
    /// hits / (hits + misses)
    pub hit_rate: f64,
    pub ttl_seconds: u64,
    pub capacity: usize,
}

impl StatsResponse {
    pub fn new(stats: CacheStats, ttl_seconds: u64, capacity: usize) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            expirations: stats.expirations,
            invalidations: stats.invalidations,
            total_entries: stats.total_entries,
            ttl_seconds,
            capacity,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Body of the fixed /v1/students and /v2/students descriptors.
#[derive(Debug, Clone, Serialize)]
pub struct VersionResponse {
    pub version: String,
    pub message: String,
}

impl VersionResponse {
    pub fn v1() -> Self {
        Self {
            version: "v1".to_string(),
            message: "Using v1 structure".to_string(),
        }
    }

    pub fn v2() -> Self {
        Self {
            version: "v2".to_string(),
            message: "Using v2 structure with new features".to_string(),
        }
    }
}

/// Body of GET /students-deprecated, sent with a `Deprecation: true` header.
#[derive(Debug, Clone, Serialize)]
pub struct DeprecationNotice {
    pub message: String,
}

impl DeprecationNotice {
    pub fn students() -> Self {
        Self {
            message: "This endpoint is deprecated. Please use /students".to_string(),
        }
    }
}

/// Acknowledgement echoed back by POST /webhook.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookAck {
    pub status: String,
    pub data: serde_json::Value,
}

impl WebhookAck {
    pub fn received(data: serde_json::Value) -> Self {
        Self {
            status: "received".to_string(),
            data,
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
