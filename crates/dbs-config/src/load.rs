use super::*;
use dbs_core::CONFIG_FILE;
use dbs_core::CONFIG_PATH_SYSTEM;
use std::path::Path;

/// Load config from `./db-stats.conf`, or `/etc/db-stats.conf` when the
/// local file does not exist.
pub fn load_config() -> Result<Config, ConfigError> {
    load_from(Path::new(CONFIG_FILE), Path::new(CONFIG_PATH_SYSTEM))
}

/// Existence of `local` decides the choice. A local file that exists but
/// cannot be read is an error; it does not fall through to `system`.
pub fn load_from(local: &Path, system: &Path) -> Result<Config, ConfigError> {
    match local.exists() {
        true => load_path(local),
        false => load_path(system),
    }
}

/// Read and parse one explicit config file.
pub fn load_path(path: &Path) -> Result<Config, ConfigError> {
    log::info!("reading config from {}", path.display());
    std::fs::read_to_string(path)
        .map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })
        .and_then(|content| Config::parse(&content))
}
