//! Repository implementations for domain entities
//!
//! Repositories encapsulate SQL and map between database rows and domain
//! types. Each statement is self-contained; no repository method opens a
//! transaction.

pub mod matches;

pub use matches::MatchRepository;
