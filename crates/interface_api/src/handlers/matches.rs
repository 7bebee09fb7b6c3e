//! Match handlers
//!
//! Every handler makes exactly one call into `MatchService`. Ids arrive as
//! raw path text so that a malformed id is reported with the same error body
//! as every other failure.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use core_kernel::MatchId;

use crate::dto::matches::*;
use crate::{error::ApiError, AppState};

fn parse_id(raw: &str) -> Result<MatchId, ApiError> {
    Ok(raw.parse::<MatchId>()?)
}

/// Lists all matches ordered by id
pub async fn list_matches(
    State(state): State<AppState>,
) -> Result<Json<Vec<MatchResponse>>, ApiError> {
    let matches = state.matches.list_matches().await?;
    Ok(Json(matches.into_iter().map(MatchResponse::from).collect()))
}

/// Gets a match by ID
pub async fn get_match(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MatchResponse>, ApiError> {
    let found = state.matches.get_match(parse_id(&id)?).await?;
    Ok(Json(found.into()))
}

/// Creates a new match
pub async fn create_match(
    State(state): State<AppState>,
    payload: Result<Json<MatchRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let Json(request) = payload?;
    let id = state.matches.create_match(request.into()).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id: id.value() })))
}

/// Replaces team names and date of a match
pub async fn update_match(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<MatchRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&id)?;
    let Json(request) = payload?;
    state.matches.update_match(id, request.into()).await?;
    Ok(Json(MessageResponse::new("match updated")))
}

/// Deletes a match
pub async fn delete_match(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.matches.delete_match(parse_id(&id)?).await?;
    Ok(Json(MessageResponse::new("match deleted")))
}

pub async fn record_goal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.matches.increment_goals(parse_id(&id)?).await?;
    Ok(Json(MessageResponse::new("goal recorded")))
}

pub async fn record_yellow_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.matches.increment_yellow_cards(parse_id(&id)?).await?;
    Ok(Json(MessageResponse::new("yellow card recorded")))
}

pub async fn record_red_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.matches.increment_red_cards(parse_id(&id)?).await?;
    Ok(Json(MessageResponse::new("red card recorded")))
}

/// Marks a match as having gone to extra time
pub async fn set_extra_time(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.matches.set_extra_time(parse_id(&id)?).await?;
    Ok(Json(MessageResponse::new("extra time set")))
}
