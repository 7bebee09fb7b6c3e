//! Match domain service
//!
//! `MatchService` is what request handlers talk to. It validates caller
//! input, then forwards exactly one call to the configured [`MatchPort`].
//! It never retries and holds no state of its own beyond the port handle,
//! so cloning it is cheap and every clone shares the same store.

use std::sync::Arc;

use tracing::debug;

use core_kernel::{HealthCheckResult, MatchId};

use crate::error::MatchError;
use crate::model::{Match, MatchEvent};
use crate::ports::MatchPort;
use crate::validation::MatchInput;

/// Entry point for all match operations
#[derive(Clone)]
pub struct MatchService {
    port: Arc<dyn MatchPort>,
}

impl MatchService {
    /// Creates a service backed by the given port
    pub fn new(port: Arc<dyn MatchPort>) -> Self {
        Self { port }
    }

    /// Lists all matches, ordered by id
    pub async fn list_matches(&self) -> Result<Vec<Match>, MatchError> {
        self.port.list_matches().await
    }

    /// Fetches a single match
    ///
    /// # Errors
    ///
    /// `MatchError::NotFound` if no match has this id
    pub async fn get_match(&self, id: MatchId) -> Result<Match, MatchError> {
        self.port.get_match(id).await
    }

    /// Validates and stores a new match, returning its assigned id
    ///
    /// Validation failures are returned before the port is touched.
    pub async fn create_match(&self, input: MatchInput) -> Result<MatchId, MatchError> {
        let details = input.into_details()?;
        let id = self.port.create_match(&details).await?;
        debug!(match_id = %id, "Match created");
        Ok(id)
    }

    /// Replaces team names and date of an existing match
    pub async fn update_match(&self, id: MatchId, input: MatchInput) -> Result<(), MatchError> {
        let details = input.into_details()?;
        self.port.update_match(id, &details).await
    }

    /// Permanently deletes a match
    pub async fn delete_match(&self, id: MatchId) -> Result<(), MatchError> {
        self.port.delete_match(id).await
    }

    pub async fn increment_goals(&self, id: MatchId) -> Result<(), MatchError> {
        self.port.record_event(id, MatchEvent::Goal).await
    }

    pub async fn increment_yellow_cards(&self, id: MatchId) -> Result<(), MatchError> {
        self.port.record_event(id, MatchEvent::YellowCard).await
    }

    pub async fn increment_red_cards(&self, id: MatchId) -> Result<(), MatchError> {
        self.port.record_event(id, MatchEvent::RedCard).await
    }

    /// Marks the match as having gone to extra time; repeating it is harmless
    pub async fn set_extra_time(&self, id: MatchId) -> Result<(), MatchError> {
        self.port.record_event(id, MatchEvent::ExtraTime).await
    }

    /// Reports the health of the underlying store
    pub async fn health_check(&self) -> HealthCheckResult {
        self.port.health_check().await
    }
}
