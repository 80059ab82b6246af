use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config needs {expected} '{delimiter}'-delimited fields, found {found}")]
    Fields {
        expected: usize,
        delimiter: char,
        found: usize,
    },
}
