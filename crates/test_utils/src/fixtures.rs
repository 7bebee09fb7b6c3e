//! Pre-built Test Fixtures
//!
//! Provides ready-to-use match data. Named fixtures are fixed so that
//! assertions can spell out expected values; `random_*` helpers use `fake`
//! when a test only needs something plausible.

use chrono::NaiveDate;
use fake::faker::address::en::CityName;
use fake::Fake;

use domain_match::{MatchDetails, MatchInput};

/// Fixture for match input data
pub struct MatchFixtures;

impl MatchFixtures {
    /// Barcelona vs Real Madrid on 2025-04-01
    pub fn clasico() -> MatchInput {
        MatchInput::new("Barcelona", "Real Madrid", DateFixtures::CLASICO)
    }

    /// Sevilla vs Real Betis on 2025-05-03
    pub fn sevilla_derby() -> MatchInput {
        MatchInput::new("Sevilla", "Real Betis", DateFixtures::SEVILLA_DERBY)
    }

    /// Atletico Madrid vs Athletic Club on 2025-05-18
    pub fn atletico_athletic() -> MatchInput {
        MatchInput::new("Atletico Madrid", "Athletic Club", "2025-05-18")
    }

    /// Validated details for [`MatchFixtures::clasico`]
    pub fn clasico_details() -> MatchDetails {
        MatchDetails {
            home_team: "Barcelona".to_string(),
            away_team: "Real Madrid".to_string(),
            match_date: DateFixtures::clasico(),
        }
    }

    /// A match between two generated city names on a fixed date
    pub fn random() -> MatchInput {
        MatchInput::new(random_team(), random_team(), DateFixtures::CLASICO)
    }

    /// Home team made only of whitespace
    pub fn blank_home_team() -> MatchInput {
        MatchInput::new("   ", "Real Madrid", DateFixtures::CLASICO)
    }

    /// Empty away team
    pub fn empty_away_team() -> MatchInput {
        MatchInput::new("Barcelona", "", DateFixtures::CLASICO)
    }

    /// Date in day/month/year order
    pub fn slash_date() -> MatchInput {
        MatchInput::new("Barcelona", "Real Madrid", "04/01/2025")
    }

    /// Date that has the right shape but does not exist
    pub fn impossible_date() -> MatchInput {
        MatchInput::new("Barcelona", "Real Madrid", "2025-02-30")
    }
}

/// Fixture for match dates
pub struct DateFixtures;

impl DateFixtures {
    pub const CLASICO: &'static str = "2025-04-01";
    pub const SEVILLA_DERBY: &'static str = "2025-05-03";

    pub fn clasico() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()
    }

    pub fn sevilla_derby() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 3).unwrap()
    }
}

/// A plausible team name
pub fn random_team() -> String {
    let city: String = CityName().fake();
    format!("{city} FC")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_fixtures_validate() {
        let details = MatchFixtures::clasico().into_details().unwrap();
        assert_eq!(details, MatchFixtures::clasico_details());

        let derby = MatchFixtures::sevilla_derby().into_details().unwrap();
        assert_eq!(derby.match_date, DateFixtures::sevilla_derby());
    }

    #[test]
    fn test_random_fixture_validates() {
        assert!(MatchFixtures::random().into_details().is_ok());
        assert!(!random_team().trim().is_empty());
    }

    #[test]
    fn test_invalid_fixtures_are_rejected() {
        for input in [
            MatchFixtures::blank_home_team(),
            MatchFixtures::empty_away_team(),
            MatchFixtures::slash_date(),
            MatchFixtures::impossible_date(),
        ] {
            assert!(input.into_details().unwrap_err().is_validation());
        }
    }
}
