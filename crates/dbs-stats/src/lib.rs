//! Relation size reporting.
//!
//! Each call opens a session, fetches the largest relations, releases the
//! session, and renders the result together with the name of the host that
//! answered.
//!
//! - [`Stats`] — The reporting seam consumed by the HTTP and CLI adapters
//! - [`Reporter`] — Default implementation over any [`Connect`]
//! - [`Report`] — Plaintext report, rendered through `Display`
//! - [`Hostname`] — Source of the responding host's name
mod error;
mod hostname;
mod report;
mod reporter;

pub use error::*;
pub use hostname::*;
pub use report::*;
pub use reporter::*;

pub use dbs_pg::RelationSize;

use dbs_config::Config;
use dbs_pg::Connect;
use dbs_pg::Session;
