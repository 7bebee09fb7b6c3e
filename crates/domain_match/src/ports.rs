//! Match Domain Ports
//!
//! The `MatchPort` trait is the seam between the match domain and whatever
//! stores the matches. Two implementations exist:
//!
//! - **PostgreSQL**: `infra_db::MatchRepository`
//! - **In-memory**: [`mock::MockMatchPort`], for tests without a database
//!
//! Every method is a single atomic step against the store. Implementations
//! must not retry, and must report a missing row as `MatchError::NotFound`
//! for every id-addressed operation.

use async_trait::async_trait;

use core_kernel::{DomainPort, HealthCheckable, MatchId};

use crate::error::MatchError;
use crate::model::{Match, MatchDetails, MatchEvent};

/// Storage operations for matches
#[async_trait]
pub trait MatchPort: DomainPort + HealthCheckable {
    /// Returns every stored match ordered by id
    async fn list_matches(&self) -> Result<Vec<Match>, MatchError>;

    /// Retrieves a match by id, or `MatchError::NotFound`
    async fn get_match(&self, id: MatchId) -> Result<Match, MatchError>;

    /// Stores a new match and returns the id assigned to it
    async fn create_match(&self, details: &MatchDetails) -> Result<MatchId, MatchError>;

    /// Overwrites team names and date of an existing match
    async fn update_match(&self, id: MatchId, details: &MatchDetails) -> Result<(), MatchError>;

    /// Permanently removes a match
    async fn delete_match(&self, id: MatchId) -> Result<(), MatchError>;

    /// Atomically records one in-match event
    ///
    /// Counter events add exactly one to their own column and touch nothing
    /// else; `ExtraTime` sets the flag to `true`.
    async fn record_event(&self, id: MatchId, event: MatchEvent) -> Result<(), MatchError>;
}

/// In-memory implementation of MatchPort for testing
///
/// Ids are assigned sequentially from 1, like a fresh `SERIAL` column.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use chrono::Utc;
    use core_kernel::{AdapterHealth, HealthCheckResult};
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::RwLock;

    #[derive(Debug, Default)]
    struct Table {
        rows: BTreeMap<MatchId, Match>,
        last_id: i32,
    }

    /// In-memory mock implementation of MatchPort
    #[derive(Debug, Default)]
    pub struct MockMatchPort {
        table: RwLock<Table>,
        writes: AtomicUsize,
    }

    impl MockMatchPort {
        /// Creates an empty mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Number of write statements that reached the store
        ///
        /// Failed id lookups still count, as they would against a database.
        pub fn write_count(&self) -> usize {
            self.writes.load(Ordering::SeqCst)
        }

        fn count_write(&self) {
            self.writes.fetch_add(1, Ordering::SeqCst);
        }
    }

    impl DomainPort for MockMatchPort {}

    #[async_trait]
    impl HealthCheckable for MockMatchPort {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult {
                adapter_id: "mock-match-port".to_string(),
                status: AdapterHealth::Healthy,
                latency_ms: 0,
                message: Some("Mock adapter always healthy".to_string()),
                checked_at: Utc::now(),
            }
        }
    }

    #[async_trait]
    impl MatchPort for MockMatchPort {
        async fn list_matches(&self) -> Result<Vec<Match>, MatchError> {
            Ok(self.table.read().await.rows.values().cloned().collect())
        }

        async fn get_match(&self, id: MatchId) -> Result<Match, MatchError> {
            self.table
                .read()
                .await
                .rows
                .get(&id)
                .cloned()
                .ok_or(MatchError::NotFound(id))
        }

        async fn create_match(&self, details: &MatchDetails) -> Result<MatchId, MatchError> {
            self.count_write();
            let mut table = self.table.write().await;
            table.last_id += 1;
            let id = MatchId::new(table.last_id);
            table.rows.insert(id, Match::new(id, details.clone()));
            Ok(id)
        }

        async fn update_match(&self, id: MatchId, details: &MatchDetails) -> Result<(), MatchError> {
            self.count_write();
            let mut table = self.table.write().await;
            let row = table.rows.get_mut(&id).ok_or(MatchError::NotFound(id))?;
            row.replace_details(details.clone());
            Ok(())
        }

        async fn delete_match(&self, id: MatchId) -> Result<(), MatchError> {
            self.count_write();
            self.table
                .write()
                .await
                .rows
                .remove(&id)
                .map(|_| ())
                .ok_or(MatchError::NotFound(id))
        }

        async fn record_event(&self, id: MatchId, event: MatchEvent) -> Result<(), MatchError> {
            self.count_write();
            let mut table = self.table.write().await;
            let row = table.rows.get_mut(&id).ok_or(MatchError::NotFound(id))?;
            row.apply(event);
            Ok(())
        }
    }
}
