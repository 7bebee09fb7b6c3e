//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! La Liga tracker test suite.
//!
//! # Modules
//!
//! - `fixtures`: Named matches and generated team names
//! - `builders`: Builder patterns for match input and stored matches
//! - `database`: PostgreSQL test containers
//! - `assertions`: Counter and error assertions
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod database;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use database::*;
pub use assertions::*;
pub use generators::*;
