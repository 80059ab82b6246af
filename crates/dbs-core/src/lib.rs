//! Core constants and runtime utilities for db-stats.
//!
//! This crate provides the fixed parameters shared across the workspace:
//! where configuration lives, how it is delimited, how much of the relation
//! listing is reported, and how the server is bound by default.

// ============================================================================
// CONFIGURATION FILE
// Single line, colon-delimited: database:user:password:host
// ============================================================================
/// Config file looked up relative to the working directory first.
pub const CONFIG_FILE: &str = "db-stats.conf";
/// Fallback config path when no file exists in the working directory.
pub const CONFIG_PATH_SYSTEM: &str = "/etc/db-stats.conf";
/// Field separator. Values cannot contain it; there is no escaping.
pub const CONFIG_DELIMITER: char = ':';
/// Number of positional fields consumed from the config line.
pub const CONFIG_FIELDS: usize = 4;

// ============================================================================
// REPORTING
// ============================================================================
/// Maximum number of relations listed in a report.
pub const RELATION_LIMIT: usize = 20;
/// Upper bound on establishing a database connection.
pub const CONNECT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

// ============================================================================
// HTTP SERVER
// ============================================================================
/// Default bind address for `serve` mode.
pub const BIND_ADDR_DEFAULT: &str = "0.0.0.0:8888";
/// Default number of actix-web workers.
pub const SERVER_WORKERS: usize = 4;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at the given level.
/// Writes to stderr only, so stdout carries nothing but the report.
#[cfg(feature = "server")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    if simplelog::CombinedLogger::init(vec![term]).is_err() {
        log::warn!("logger already initialized");
    }
}
