//! Match entity and in-match events

use chrono::NaiveDate;

use core_kernel::MatchId;

/// A tracked football fixture
///
/// `id` is assigned by the store on creation and never changes. The three
/// counters only grow and `extra_time` only ever flips to `true`; the sole
/// way to change them is [`Match::apply`] (or its store-side equivalent).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub id: MatchId,
    pub home_team: String,
    pub away_team: String,
    pub match_date: NaiveDate,
    pub goals: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub extra_time: bool,
}

impl Match {
    /// Creates a freshly stored match with zeroed counters
    pub fn new(id: MatchId, details: MatchDetails) -> Self {
        Self {
            id,
            home_team: details.home_team,
            away_team: details.away_team,
            match_date: details.match_date,
            goals: 0,
            yellow_cards: 0,
            red_cards: 0,
            extra_time: false,
        }
    }

    /// Returns the editable fields of this match
    pub fn details(&self) -> MatchDetails {
        MatchDetails {
            home_team: self.home_team.clone(),
            away_team: self.away_team.clone(),
            match_date: self.match_date,
        }
    }

    /// Overwrites the editable fields, leaving counters and extra time alone
    pub fn replace_details(&mut self, details: MatchDetails) {
        self.home_team = details.home_team;
        self.away_team = details.away_team;
        self.match_date = details.match_date;
    }

    /// Records an in-match event
    pub fn apply(&mut self, event: MatchEvent) {
        match event {
            MatchEvent::Goal => self.goals = self.goals.saturating_add(1),
            MatchEvent::YellowCard => self.yellow_cards = self.yellow_cards.saturating_add(1),
            MatchEvent::RedCard => self.red_cards = self.red_cards.saturating_add(1),
            MatchEvent::ExtraTime => self.extra_time = true,
        }
    }
}

/// Validated, caller-editable fields of a match
///
/// Instances are produced by [`crate::MatchInput::into_details`], so team
/// names are trimmed and non-empty and the date has already been parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchDetails {
    pub home_team: String,
    pub away_team: String,
    pub match_date: NaiveDate,
}

/// An event reported while a match is being played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchEvent {
    Goal,
    YellowCard,
    RedCard,
    ExtraTime,
}

impl MatchEvent {
    /// Message used when recording this event fails
    pub fn failure_context(&self) -> &'static str {
        match self {
            MatchEvent::Goal => "failed to increment goals",
            MatchEvent::YellowCard => "failed to increment yellow cards",
            MatchEvent::RedCard => "failed to increment red cards",
            MatchEvent::ExtraTime => "failed to set extra time",
        }
    }
}
