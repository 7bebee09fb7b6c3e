//! Core Kernel - Foundational types shared across the match tracker
//!
//! This crate provides the building blocks used by every other crate:
//! - Strongly-typed match identifiers
//! - Strict `YYYY-MM-DD` match date parsing
//! - Port marker and health-check traits for the ports and adapters layout

pub mod identifiers;
pub mod temporal;
pub mod ports;
pub mod error;

pub use identifiers::MatchId;
pub use temporal::{parse_match_date, format_match_date, TemporalError, MATCH_DATE_FORMAT};
pub use ports::{DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth};
pub use error::CoreError;
