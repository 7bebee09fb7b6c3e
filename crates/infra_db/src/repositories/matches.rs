//! Match repository implementation
//!
//! This module provides PostgreSQL access to the `matches` table. Every
//! method issues exactly one statement and relies on PostgreSQL's own
//! atomicity for it. The event mutators are written as `col = col + 1` /
//! `extra_time = TRUE` so that concurrent reporters never lose an update:
//! two increments of the same column on the same row are serialized by the
//! row lock PostgreSQL takes for the `UPDATE`.

use std::time::Instant;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sqlx::postgres::PgQueryResult;
use sqlx::PgPool;
use tracing::{debug, instrument, warn};

use core_kernel::{AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, MatchId};
use domain_match::{Match, MatchDetails, MatchError, MatchEvent, MatchPort};

use crate::error::DatabaseError;
use crate::pool::probe;

const SELECT_ALL: &str = r#"
    SELECT id, home_team, away_team, match_date,
           goals_match, yellow_cards_match, red_cards_match, extra_time
    FROM matches
    ORDER BY id
"#;

const SELECT_ONE: &str = r#"
    SELECT id, home_team, away_team, match_date,
           goals_match, yellow_cards_match, red_cards_match, extra_time
    FROM matches
    WHERE id = $1
"#;

const INSERT: &str = r#"
    INSERT INTO matches (home_team, away_team, match_date)
    VALUES ($1, $2, $3)
    RETURNING id
"#;

const UPDATE: &str = r#"
    UPDATE matches
    SET home_team = $1, away_team = $2, match_date = $3
    WHERE id = $4
"#;

const DELETE: &str = "DELETE FROM matches WHERE id = $1";

const INCREMENT_GOALS: &str = "UPDATE matches SET goals_match = goals_match + 1 WHERE id = $1";
const INCREMENT_YELLOW_CARDS: &str =
    "UPDATE matches SET yellow_cards_match = yellow_cards_match + 1 WHERE id = $1";
const INCREMENT_RED_CARDS: &str =
    "UPDATE matches SET red_cards_match = red_cards_match + 1 WHERE id = $1";
const SET_EXTRA_TIME: &str = "UPDATE matches SET extra_time = TRUE WHERE id = $1";

/// Repository for the `matches` table
///
/// Holds a clone of the shared pool; cloning the repository is cheap and
/// every clone uses the same connections.
#[derive(Debug, Clone)]
pub struct MatchRepository {
    pool: PgPool,
}

/// Database row for a match
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MatchRow {
    pub id: i32,
    pub home_team: String,
    pub away_team: String,
    pub match_date: NaiveDate,
    pub goals_match: i32,
    pub yellow_cards_match: i32,
    pub red_cards_match: i32,
    pub extra_time: bool,
}

impl TryFrom<MatchRow> for Match {
    type Error = MatchError;

    fn try_from(row: MatchRow) -> Result<Self, Self::Error> {
        let counter = |value: i32, column: &str| {
            u32::try_from(value).map_err(|_| {
                MatchError::store(
                    "failed to read match",
                    format!("column {column} of match {} holds negative value {value}", row.id),
                )
            })
        };

        Ok(Match {
            id: MatchId::new(row.id),
            goals: counter(row.goals_match, "goals_match")?,
            yellow_cards: counter(row.yellow_cards_match, "yellow_cards_match")?,
            red_cards: counter(row.red_cards_match, "red_cards_match")?,
            extra_time: row.extra_time,
            match_date: row.match_date,
            home_team: row.home_team,
            away_team: row.away_team,
        })
    }
}

impl MatchRepository {
    /// Creates a new MatchRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists every match ordered by id
    #[instrument(skip(self))]
    pub async fn list_matches(&self) -> Result<Vec<Match>, MatchError> {
        let rows = sqlx::query_as::<_, MatchRow>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| store_error("failed to list matches", e))?;

        debug!(count = rows.len(), "Fetched matches");
        rows.into_iter().map(Match::try_from).collect()
    }

    /// Retrieves a match by its identifier
    #[instrument(skip(self), fields(match_id = %id))]
    pub async fn get_match(&self, id: MatchId) -> Result<Match, MatchError> {
        sqlx::query_as::<_, MatchRow>(SELECT_ONE)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| store_error("failed to fetch match", e))?
            .ok_or(MatchError::NotFound(id))?
            .try_into()
    }

    /// Inserts a new match and returns the id PostgreSQL assigned to it
    ///
    /// Counters and `extra_time` take their column defaults.
    #[instrument(skip(self, details), fields(home = %details.home_team, away = %details.away_team))]
    pub async fn create_match(&self, details: &MatchDetails) -> Result<MatchId, MatchError> {
        let id = sqlx::query_scalar::<_, i32>(INSERT)
            .bind(&details.home_team)
            .bind(&details.away_team)
            .bind(details.match_date)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| store_error("failed to create match", e))?;

        debug!(match_id = id, "Inserted match");
        Ok(MatchId::new(id))
    }

    /// Overwrites team names and date of a match
    #[instrument(skip(self, details), fields(match_id = %id))]
    pub async fn update_match(&self, id: MatchId, details: &MatchDetails) -> Result<(), MatchError> {
        let result = sqlx::query(UPDATE)
            .bind(&details.home_team)
            .bind(&details.away_team)
            .bind(details.match_date)
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| store_error("failed to update match", e))?;

        require_row(id, result)
    }

    /// Hard-deletes a match
    #[instrument(skip(self), fields(match_id = %id))]
    pub async fn delete_match(&self, id: MatchId) -> Result<(), MatchError> {
        let result = sqlx::query(DELETE)
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| store_error("failed to delete match", e))?;

        require_row(id, result)
    }

    /// Adds one goal
    pub async fn increment_goals(&self, id: MatchId) -> Result<(), MatchError> {
        self.apply_event(id, MatchEvent::Goal).await
    }

    /// Adds one yellow card
    pub async fn increment_yellow_cards(&self, id: MatchId) -> Result<(), MatchError> {
        self.apply_event(id, MatchEvent::YellowCard).await
    }

    /// Adds one red card
    pub async fn increment_red_cards(&self, id: MatchId) -> Result<(), MatchError> {
        self.apply_event(id, MatchEvent::RedCard).await
    }

    /// Sets `extra_time` to true; running it again changes nothing
    pub async fn set_extra_time(&self, id: MatchId) -> Result<(), MatchError> {
        self.apply_event(id, MatchEvent::ExtraTime).await
    }

    #[instrument(skip(self), fields(match_id = %id))]
    async fn apply_event(&self, id: MatchId, event: MatchEvent) -> Result<(), MatchError> {
        let statement = match event {
            MatchEvent::Goal => INCREMENT_GOALS,
            MatchEvent::YellowCard => INCREMENT_YELLOW_CARDS,
            MatchEvent::RedCard => INCREMENT_RED_CARDS,
            MatchEvent::ExtraTime => SET_EXTRA_TIME,
        };

        let result = sqlx::query(statement)
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| store_error(event.failure_context(), e))?;

        require_row(id, result)
    }
}

/// Classifies a driver error and wraps it as the store failure's source
fn store_error(context: &str, error: sqlx::Error) -> MatchError {
    let classified = DatabaseError::from(&error);
    if classified.is_connection_error() {
        warn!(%classified, context, "Store unreachable");
    } else {
        debug!(%classified, context, "Statement failed");
    }
    MatchError::store(context, classified)
}

/// An id-addressed statement that touched nothing means the id is unknown
fn require_row(id: MatchId, result: PgQueryResult) -> Result<(), MatchError> {
    if result.rows_affected() == 0 {
        return Err(MatchError::NotFound(id));
    }
    Ok(())
}

impl DomainPort for MatchRepository {}

#[async_trait]
impl HealthCheckable for MatchRepository {
    /// Checks database connectivity with the same probe used at startup
    async fn health_check(&self) -> HealthCheckResult {
        let start = Instant::now();
        let result = probe(&self.pool).await;
        let latency_ms = start.elapsed().as_millis() as u64;

        let (status, message) = match result {
            Ok(()) => (AdapterHealth::Healthy, None),
            Err(e) => (AdapterHealth::Unhealthy, Some(format!("Database error: {}", e))),
        };

        HealthCheckResult {
            adapter_id: "postgres-match-repository".to_string(),
            status,
            latency_ms,
            message,
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl MatchPort for MatchRepository {
    async fn list_matches(&self) -> Result<Vec<Match>, MatchError> {
        MatchRepository::list_matches(self).await
    }

    async fn get_match(&self, id: MatchId) -> Result<Match, MatchError> {
        MatchRepository::get_match(self, id).await
    }

    async fn create_match(&self, details: &MatchDetails) -> Result<MatchId, MatchError> {
        MatchRepository::create_match(self, details).await
    }

    async fn update_match(&self, id: MatchId, details: &MatchDetails) -> Result<(), MatchError> {
        MatchRepository::update_match(self, id, details).await
    }

    async fn delete_match(&self, id: MatchId) -> Result<(), MatchError> {
        MatchRepository::delete_match(self, id).await
    }

    async fn record_event(&self, id: MatchId, event: MatchEvent) -> Result<(), MatchError> {
        self.apply_event(id, event).await
    }
}
