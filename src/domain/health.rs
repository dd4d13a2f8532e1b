//! src/domain/health.rs
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: &'static str,
    pub message: &'static str,
}

impl HealthStatus {
    pub fn running() -> Self {
        Self {
            status: "ok",
            message: "Service is running",
        }
    }
}
