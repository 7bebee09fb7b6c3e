//! Infrastructure Database Layer
//!
//! This crate owns everything that talks to PostgreSQL:
//!
//! - [`pool`]: the connection manager. It opens the single shared pool at
//!   startup, probing it and retrying a bounded number of times.
//! - [`repositories`]: the `MatchRepository`, which implements the domain's
//!   `MatchPort` on top of that pool.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{initialize, DatabaseConfig, MatchRepository};
//!
//! let config = DatabaseConfig::from_env()?;
//! let pool = initialize(&config).await?;
//! let repo = MatchRepository::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod repositories;

pub use pool::{
    DatabasePool, DatabaseConfig, RetryPolicy, ConnectionState,
    initialize, connect_with_retry, probe,
};
pub use error::DatabaseError;
pub use repositories::MatchRepository;
