//! Data Transfer Objects
//!
//! Response types for the API endpoints that are not plain catalog records.
//! Food bodies are the store types themselves (`Food`, `NewFoodRecord`,
//! `FoodUpdate`), serialized as-is.

use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: "healthy" or "unhealthy"
    pub status: String,
    /// Storage status: "ok" or "error"
    pub storage: String,
    /// Number of foods in the catalog
    pub foods: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Server version
    pub version: String,
}

/// Body returned by a successful delete: an empty JSON object
#[derive(Debug, Default, Serialize)]
pub struct EmptyResponse {}
