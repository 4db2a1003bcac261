use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    ReadFail { path: PathBuf, source: io::Error },

    #[error("Invalid config file {}: {source}", path.display())]
    ParseFail {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("No base path configured and no picture directory found. Use -o or WALLDROP_BASE_PATH")]
    NoBasePath,

    #[error("A username was configured without a password")]
    MissingPassword,

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}
