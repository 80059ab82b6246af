use super::*;
use dbs_core::CONFIG_DELIMITER;
use dbs_core::CONFIG_FIELDS;
use std::fmt::Debug;
use std::fmt::Formatter;

/// Connection parameters, in file order.
///
/// Loaded once at startup and shared read-only afterwards; a changed file
/// takes effect only after a restart.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub database: String,
    pub user: String,
    pub password: String,
    pub host: String,
}

impl Config {
    /// Split file content on `:` and take the first four fields.
    ///
    /// One trailing line terminator is not part of the host field. Nothing
    /// else is trimmed, quoted or unescaped, so a `:` inside any value shifts
    /// every later field. Fields past the fourth are ignored.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let line = content
            .strip_suffix('\n')
            .map(|s| s.strip_suffix('\r').unwrap_or(s))
            .unwrap_or(content);
        let fields = line.split(CONFIG_DELIMITER).collect::<Vec<&str>>();
        match fields.as_slice() {
            [database, user, password, host, ..] => Ok(Self {
                database: database.to_string(),
                user: user.to_string(),
                password: password.to_string(),
                host: host.to_string(),
            }),
            _ => Err(ConfigError::Fields {
                expected: CONFIG_FIELDS,
                delimiter: CONFIG_DELIMITER,
                found: fields.len(),
            }),
        }
    }
}

impl TryFrom<&str> for Config {
    type Error = ConfigError;
    fn try_from(content: &str) -> Result<Self, Self::Error> {
        Self::parse(content)
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"***")
            .field("host", &self.host)
            .finish()
    }
}
