//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use chrono::NaiveDate;

use core_kernel::{format_match_date, MatchId};
use domain_match::{Match, MatchDetails, MatchEvent, MatchInput};

use crate::fixtures::DateFixtures;

/// Builder for caller-supplied match input
#[derive(Debug, Clone)]
pub struct TestMatchInputBuilder {
    home_team: String,
    away_team: String,
    match_date: String,
}

impl Default for TestMatchInputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestMatchInputBuilder {
    /// Creates a new builder for Barcelona vs Real Madrid
    pub fn new() -> Self {
        Self {
            home_team: "Barcelona".to_string(),
            away_team: "Real Madrid".to_string(),
            match_date: DateFixtures::CLASICO.to_string(),
        }
    }

    /// Sets the home team
    pub fn with_home_team(mut self, team: impl Into<String>) -> Self {
        self.home_team = team.into();
        self
    }

    /// Sets the away team
    pub fn with_away_team(mut self, team: impl Into<String>) -> Self {
        self.away_team = team.into();
        self
    }

    /// Sets the raw date text, which need not be valid
    pub fn with_raw_date(mut self, date: impl Into<String>) -> Self {
        self.match_date = date.into();
        self
    }

    /// Sets the date from a calendar value
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.match_date = format_match_date(date);
        self
    }

    pub fn build(self) -> MatchInput {
        MatchInput::new(self.home_team, self.away_team, self.match_date)
    }

    /// Builds and validates
    ///
    /// # Panics
    ///
    /// Panics if the configured values do not validate
    pub fn build_details(self) -> MatchDetails {
        self.build()
            .into_details()
            .expect("builder values should validate")
    }
}

/// Builder for a stored match with arbitrary counters
#[derive(Debug, Clone)]
pub struct TestMatchBuilder {
    id: MatchId,
    details: MatchDetails,
    events: Vec<MatchEvent>,
}

impl Default for TestMatchBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestMatchBuilder {
    pub fn new() -> Self {
        Self {
            id: MatchId::new(1),
            details: TestMatchInputBuilder::new().build_details(),
            events: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.id = MatchId::new(id);
        self
    }

    /// Appends `count` copies of `event`
    pub fn with_events(mut self, event: MatchEvent, count: usize) -> Self {
        self.events.extend(std::iter::repeat(event).take(count));
        self
    }

    pub fn build(self) -> Match {
        let mut stored = Match::new(self.id, self.details);
        for event in self.events {
            stored.apply(event);
        }
        stored
    }
}
