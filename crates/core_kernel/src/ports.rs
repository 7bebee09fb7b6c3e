//! Ports and Adapters Infrastructure
//!
//! Marker and health-check traits shared by every port in the system.
//!
//! ```text
//!        ┌───────────────────────────────┐
//!        │   MatchService (domain_match) │
//!        └───────────────┬───────────────┘
//!                        ▼
//!              MatchPort: DomainPort + HealthCheckable
//!                 ▲                       ▲
//!     ┌───────────┴──────────┐  ┌─────────┴─────────┐
//!     │ MatchRepository      │  │ MockMatchPort      │
//!     │ (PostgreSQL, infra_db)│  │ (in-memory, tests) │
//!     └──────────────────────┘  └───────────────────┘
//! ```

use serde::{Deserialize, Serialize};

/// Marker trait for all domain ports
///
/// Ports are shared across request tasks, so implementations must be
/// thread-safe and `'static`.
pub trait DomainPort: Send + Sync + 'static {}

/// Health status for an adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterHealth {
    /// Adapter is healthy and operational
    Healthy,
    /// Adapter is unhealthy and not operational
    Unhealthy,
}

/// Health check result for an adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResult {
    /// Adapter identifier
    pub adapter_id: String,
    /// Current health status
    pub status: AdapterHealth,
    /// Latency of the health check in milliseconds
    pub latency_ms: u64,
    /// Optional message with additional details
    pub message: Option<String>,
    /// Timestamp of the health check
    pub checked_at: chrono::DateTime<chrono::Utc>,
}

impl HealthCheckResult {
    /// Returns true if the adapter reported itself healthy
    pub fn is_healthy(&self) -> bool {
        self.status == AdapterHealth::Healthy
    }
}

/// Trait for adapters that support health checks
#[async_trait::async_trait]
pub trait HealthCheckable: Send + Sync {
    /// Performs a health check on the adapter
    async fn health_check(&self) -> HealthCheckResult;
}
