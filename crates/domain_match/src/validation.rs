//! Validation of caller-supplied match data
//!
//! Callers hand over team names and the match date as text. [`MatchInput`]
//! checks them and produces [`MatchDetails`]; no store access happens until
//! this conversion has succeeded.

use validator::{Validate, ValidationErrors};

use core_kernel::parse_match_date;

use crate::error::MatchError;
use crate::model::MatchDetails;

/// Raw match fields as supplied by a caller
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct MatchInput {
    #[validate(length(min = 1, message = "team name must not be empty"))]
    pub home_team: String,
    #[validate(length(min = 1, message = "team name must not be empty"))]
    pub away_team: String,
    pub match_date: String,
}

impl MatchInput {
    pub fn new(
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        match_date: impl Into<String>,
    ) -> Self {
        Self {
            home_team: home_team.into(),
            away_team: away_team.into(),
            match_date: match_date.into(),
        }
    }

    /// Validates the input and converts it into [`MatchDetails`]
    ///
    /// Team names are trimmed before validation, so a name made only of
    /// whitespace is rejected like an empty one. The date must be strict
    /// `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::Validation` naming the first offending field
    /// (`homeTeam`, `awayTeam`, or `matchDate`).
    pub fn into_details(self) -> Result<MatchDetails, MatchError> {
        let trimmed = MatchInput {
            home_team: self.home_team.trim().to_string(),
            away_team: self.away_team.trim().to_string(),
            match_date: self.match_date,
        };

        trimmed.validate().map_err(|errors| first_violation(&errors))?;
        let match_date = parse_match_date(&trimmed.match_date)?;

        Ok(MatchDetails {
            home_team: trimmed.home_team,
            away_team: trimmed.away_team,
            match_date,
        })
    }
}

fn first_violation(errors: &ValidationErrors) -> MatchError {
    let mut violations: Vec<(String, String)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, field_errors)| {
            let message = field_errors
                .iter()
                .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| "is invalid".to_string());
            (camel_case(&field.to_string()), message)
        })
        .collect();
    violations.sort();

    match violations.into_iter().next() {
        Some((field, message)) => MatchError::validation(field, message),
        None => MatchError::validation("match", "is invalid"),
    }
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
