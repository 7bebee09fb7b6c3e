//! Match Tracking Domain
//!
//! This crate models football matches and the events recorded while they
//! are played (goals, yellow and red cards, extra time).
//!
//! # Layout
//!
//! - [`model`]: the `Match` entity and validated `MatchDetails`
//! - [`validation`]: caller-supplied `MatchInput` and its validation rules
//! - [`ports`]: the `MatchPort` trait implemented by storage adapters
//! - [`service`]: `MatchService`, the entry point used by the API layer
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_match::{MatchInput, MatchService};
//!
//! let service = MatchService::new(port);
//! let id = service
//!     .create_match(MatchInput::new("Barcelona", "Real Madrid", "2025-04-01"))
//!     .await?;
//! service.increment_goals(id).await?;
//! ```

pub mod error;
pub mod model;
pub mod validation;
pub mod ports;
pub mod service;

pub use error::MatchError;
pub use model::{Match, MatchDetails, MatchEvent};
pub use validation::MatchInput;
pub use ports::MatchPort;
pub use service::MatchService;
