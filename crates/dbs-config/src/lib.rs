//! Connection configuration for db-stats.
//!
//! A single colon-delimited line `database:user:password:host`, read from
//! the working directory or the system path and parsed positionally.
//!
//! - [`Config`] — the four connection fields
//! - [`ConfigError`] — unreadable file or too few fields
//! - [`load_config()`] — default lookup: `./db-stats.conf`, then `/etc/db-stats.conf`
mod config;
mod error;
mod load;

pub use config::*;
pub use error::*;
pub use load::*;
