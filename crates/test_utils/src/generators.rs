//! Property-Based Test Generators
//!
//! Provides proptest strategies for match input, valid and otherwise, and
//! for sequences of in-match events.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use core_kernel::format_match_date;
use domain_match::{MatchEvent, MatchInput};

/// Strategy for team names that survive trimming
pub fn team_name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,12}( [A-Z][a-z]{2,10})?"
}

/// Strategy for team names wrapped in spaces and tabs
pub fn padded_team_name_strategy() -> impl Strategy<Value = (String, String)> {
    ("[ \t]{0,3}", team_name_strategy(), "[ \t]{0,3}")
        .prop_map(|(before, name, after)| (format!("{before}{name}{after}"), name))
}

/// Strategy for team names that are empty once trimmed
pub fn blank_team_name_strategy() -> impl Strategy<Value = String> {
    "[ \t\n]{0,5}"
}

/// Strategy for calendar dates between 1950 and roughly 2090
pub fn match_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..51_000i64).prop_map(|days| {
        NaiveDate::from_ymd_opt(1950, 1, 1).unwrap() + Duration::days(days)
    })
}

/// Strategy for well-formed match input
pub fn valid_input_strategy() -> impl Strategy<Value = MatchInput> {
    (team_name_strategy(), team_name_strategy(), match_date_strategy())
        .prop_map(|(home, away, date)| MatchInput::new(home, away, format_match_date(date)))
}

/// Strategy for date text that must be rejected
pub fn malformed_date_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // day/month/year
        match_date_strategy().prop_map(|d| d.format("%d/%m/%Y").to_string()),
        // unpadded month
        (2000i32..2030, 1u32..10, 10u32..29)
            .prop_map(|(y, m, d)| format!("{y}-{m}-{d}")),
        // trailing time of day
        match_date_strategy().prop_map(|d| format!("{}T00:00:00", format_match_date(d))),
        // month out of range
        (2000i32..2030, 13u32..99, 1u32..28)
            .prop_map(|(y, m, d)| format!("{y}-{m:02}-{d:02}")),
        "[a-z]{1,10}",
        Just(String::new()),
    ]
}

/// Strategy for a single in-match event
pub fn match_event_strategy() -> impl Strategy<Value = MatchEvent> {
    prop_oneof![
        Just(MatchEvent::Goal),
        Just(MatchEvent::YellowCard),
        Just(MatchEvent::RedCard),
        Just(MatchEvent::ExtraTime),
    ]
}

/// Strategy for event sequences of up to `max_len` events
pub fn event_sequence_strategy(max_len: usize) -> impl Strategy<Value = Vec<MatchEvent>> {
    proptest::collection::vec(match_event_strategy(), 0..=max_len)
}
