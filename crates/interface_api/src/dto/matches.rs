//! Match DTOs

use serde::{Deserialize, Serialize};

use core_kernel::format_match_date;
use domain_match::{Match, MatchInput};

/// Body of `POST /api/matches` and `PUT /api/matches/:id`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    pub home_team: String,
    pub away_team: String,
    pub match_date: String,
}

impl From<MatchRequest> for MatchInput {
    fn from(request: MatchRequest) -> Self {
        MatchInput::new(request.home_team, request.away_team, request.match_date)
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub id: i32,
    pub home_team: String,
    pub away_team: String,
    /// `YYYY-MM-DD`
    pub match_date: String,
    pub goals: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub extra_time: bool,
}

impl From<Match> for MatchResponse {
    fn from(m: Match) -> Self {
        Self {
            id: m.id.value(),
            match_date: format_match_date(m.match_date),
            home_team: m.home_team,
            away_team: m.away_team,
            goals: m.goals,
            yellow_cards: m.yellow_cards,
            red_cards: m.red_cards,
            extra_time: m.extra_time,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_kernel::MatchId;
    use domain_match::{MatchDetails, MatchEvent};

    #[test]
    fn test_response_is_the_camel_case_view_of_a_match() {
        let mut stored = Match::new(
            MatchId::new(7),
            MatchDetails {
                home_team: "Barcelona".to_string(),
                away_team: "Real Madrid".to_string(),
                match_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            },
        );
        stored.apply(MatchEvent::YellowCard);

        let json = serde_json::to_value(MatchResponse::from(stored)).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["homeTeam"], "Barcelona");
        assert_eq!(json["awayTeam"], "Real Madrid");
        assert_eq!(json["matchDate"], "2025-04-01");
        assert_eq!(json["yellowCards"], 1);
        assert_eq!(json["extraTime"], false);
    }

    #[test]
    fn test_request_reads_camel_case_body() {
        let request: MatchRequest = serde_json::from_str(
            r#"{"homeTeam":"Sevilla","awayTeam":"Betis","matchDate":"2025-03-09"}"#,
        )
        .unwrap();
        assert_eq!(
            MatchInput::from(request),
            MatchInput::new("Sevilla", "Betis", "2025-03-09")
        );
    }
}
