//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for matches and match errors that
//! give more meaningful failure messages than bare `assert!` calls.

use core_kernel::MatchId;
use domain_match::{Match, MatchError, MatchEvent};

/// Expected counters after replaying a sequence of events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventTally {
    pub goals: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub extra_time: bool,
}

impl EventTally {
    /// Tallies `events` as they would be applied to a fresh match
    pub fn from_events<'a>(events: impl IntoIterator<Item = &'a MatchEvent>) -> Self {
        events.into_iter().fold(Self::default(), |mut tally, event| {
            match event {
                MatchEvent::Goal => tally.goals += 1,
                MatchEvent::YellowCard => tally.yellow_cards += 1,
                MatchEvent::RedCard => tally.red_cards += 1,
                MatchEvent::ExtraTime => tally.extra_time = true,
            }
            tally
        })
    }
}

/// Asserts that the counters and extra-time flag of `actual` equal `expected`
pub fn assert_tally(actual: &Match, expected: &EventTally) {
    let observed = EventTally {
        goals: actual.goals,
        yellow_cards: actual.yellow_cards,
        red_cards: actual.red_cards,
        extra_time: actual.extra_time,
    };
    assert_eq!(
        observed, *expected,
        "Counters of match {} differ from expected tally",
        actual.id
    );
}

/// Asserts that a match has never recorded an event
pub fn assert_fresh(actual: &Match) {
    assert_tally(actual, &EventTally::default());
}

/// Asserts a validation failure on the named field
///
/// # Panics
///
/// Panics if `result` is `Ok` or a different error
pub fn assert_validation_error<T: std::fmt::Debug>(result: Result<T, MatchError>, field: &str) {
    match result {
        Err(MatchError::Validation { field: actual, .. }) => assert_eq!(
            actual, field,
            "Validation error on unexpected field"
        ),
        other => panic!("Expected validation error on {field}, got {other:?}"),
    }
}

/// Asserts a not-found failure for the given id
pub fn assert_not_found<T: std::fmt::Debug>(result: Result<T, MatchError>, id: MatchId) {
    match result {
        Err(MatchError::NotFound(actual)) => assert_eq!(actual, id),
        other => panic!("Expected match {id} not found, got {other:?}"),
    }
}
