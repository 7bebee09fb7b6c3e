//! HTTP API Layer
//!
//! This crate provides the REST API of the La Liga tracker using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: One handler per route, each a single `MatchService` call
//! - **Middleware**: Request tracing and request logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent `{"error", "message"}` bodies
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(service, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use axum::{
    middleware as axum_middleware,
    routing::{get, patch},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;

use domain_match::MatchService;

use crate::config::ApiConfig;
use crate::handlers::{health, matches};
use crate::middleware::request_logging;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub matches: MatchService,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `service` - Match service backed by the configured store
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(service: MatchService, config: ApiConfig) -> Router {
    let index = ServeFile::new(&config.static_index);
    let state = AppState {
        matches: service,
        config,
    };

    let match_routes = Router::new()
        .route(
            "/api/matches",
            get(matches::list_matches).post(matches::create_match),
        )
        .route(
            "/api/matches/:id",
            get(matches::get_match)
                .put(matches::update_match)
                .delete(matches::delete_match),
        )
        .route("/api/matches/:id/goals", patch(matches::record_goal))
        .route("/api/matches/:id/yellowcards", patch(matches::record_yellow_card))
        .route("/api/matches/:id/redcards", patch(matches::record_red_card))
        .route("/api/matches/:id/extratime", patch(matches::set_extra_time));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .merge(match_routes)
        .route_service("/", index)
        .layer(axum_middleware::from_fn(request_logging))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
