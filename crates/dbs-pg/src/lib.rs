//! PostgreSQL session acquisition and relation size introspection.
//!
//! Connection handling sits behind two narrow traits so the reporting logic
//! never sees a concrete driver. The default [`Postgres`] connector opens a
//! fresh connection per call; a pooled connector can implement [`Connect`]
//! without touching callers.
//!
//! ## Traits
//!
//! - [`Connect`] — Acquires a [`Session`] from a [`Config`]
//! - [`Session`] — Runs the relation size query, then is closed exactly once
//!
//! ## Types
//!
//! - [`Postgres`] — Unpooled connector built on `tokio-postgres`
//! - [`RelationSize`] — One `schema.relation` and its pretty-printed size
//! - [`DatabaseError`] — Connect, query or shutdown failure
//!
//! ## Queries
//!
//! - [`RELATIONS`] — Largest relations outside the system schemas
mod connect;
mod error;
mod query;
mod relation;
mod session;

pub use connect::*;
pub use error::*;
pub use query::*;
pub use relation::*;
pub use session::*;

use dbs_config::Config;

/// PostgreSQL error type alias.
pub type PgErr = tokio_postgres::Error;
