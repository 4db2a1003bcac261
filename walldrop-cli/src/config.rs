//! Process configuration.
//!
//! Values are layered, later sources overriding earlier ones:
//! 1. built-in defaults;
//! 2. the TOML file at `$WALLDROP_CONFIG`, or `config.toml` in the user's config directory;
//! 3. the `WALLDROP_USERNAME`, `WALLDROP_PASSWORD` and `WALLDROP_BASE_PATH` environment variables;
//! 4. command line flags.
//!
//! A sample file:
//! ```toml
//! base_path = "/srv/wallpapers"
//! timeout = 30
//! skip_failed_tags = true
//! username = "alice"
//! password = "hunter2"
//!
//! [server]
//! base_url = "https://wallhaven.cc"
//! ```
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

use directories::{ProjectDirs, UserDirs};
use log::debug;
use walldrop_common::serde::{self, Deserialize};
use walldrop_core::FailurePolicy;
use walldrop_extractors::{auth::Credentials, extractor_config::ServerConfig};

use crate::cli::Cli;
use crate::error::ConfigError;

pub const CONFIG_ENV: &str = "WALLDROP_CONFIG";
pub const USERNAME_ENV: &str = "WALLDROP_USERNAME";
pub const PASSWORD_ENV: &str = "WALLDROP_PASSWORD";
pub const BASE_PATH_ENV: &str = "WALLDROP_BASE_PATH";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Contents of the config file. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(crate = "self::serde", default, deny_unknown_fields)]
pub struct FileConfig {
    pub base_path: Option<PathBuf>,
    /// Request timeout in seconds.
    pub timeout: Option<u64>,
    pub skip_failed_tags: Option<bool>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub server: Option<ServerConfig>,
}

impl FileConfig {
    pub fn parse(path: &Path, text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::ParseFail {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads the file at `path`. A missing file is not an error.
    pub fn read(path: &Path) -> Result<Option<Self>, ConfigError> {
        match fs::read_to_string(path) {
            Ok(text) => {
                debug!("Loading config from {}", path.display());
                Self::parse(path, &text).map(Some)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("No config file at {}", path.display());
                Ok(None)
            }
            Err(source) => Err(ConfigError::ReadFail {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

/// Everything a sync run needs to know. Built once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Parent of the `unchecked`, `checked` and `unwanted` directories.
    pub base_path: PathBuf,
    pub timeout: Duration,
    pub failure_policy: FailurePolicy,
    /// `None` when no credentials are configured or logging in was disabled.
    pub credentials: Option<Credentials>,
    pub server: ServerConfig,
}

impl Config {
    /// Loads the configuration from every source.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let file = match config_file_path() {
            Some(path) => FileConfig::read(&path)?,
            None => None,
        };

        Self::build(file.unwrap_or_default(), |key| env::var(key).ok(), cli)
    }

    /// Merges already loaded sources. `lookup` reads an environment variable.
    pub fn build<E>(file: FileConfig, lookup: E, cli: &Cli) -> Result<Self, ConfigError>
    where
        E: Fn(&str) -> Option<String>,
    {
        let env = |key: &str| lookup(key).filter(|val| !val.is_empty());

        let base_path = cli
            .output
            .clone()
            .or_else(|| env(BASE_PATH_ENV).map(PathBuf::from))
            .or(file.base_path)
            .or_else(default_base_path)
            .ok_or(ConfigError::NoBasePath)?;

        let timeout = match (cli.timeout, file.timeout) {
            (Some(secs), _) => Duration::from_secs(secs),
            (None, Some(0)) => {
                return Err(ConfigError::InvalidValue {
                    key: "timeout",
                    value: String::from("0"),
                })
            }
            (None, Some(secs)) => Duration::from_secs(secs),
            (None, None) => DEFAULT_TIMEOUT,
        };

        let failure_policy = if cli.skip_failed_tags || file.skip_failed_tags.unwrap_or(false) {
            FailurePolicy::SkipTag
        } else {
            FailurePolicy::Abort
        };

        let username = env(USERNAME_ENV).or(file.username);
        let password = env(PASSWORD_ENV).or(file.password);

        let credentials = match (username, password) {
            (Some(user), Some(pass)) => Some(Credentials::new(user, pass)),
            (Some(_), None) => return Err(ConfigError::MissingPassword),
            _ => None,
        };

        Ok(Self {
            base_path,
            timeout,
            failure_policy,
            credentials: credentials.filter(|_| !cli.no_login),
            server: file.server.unwrap_or_default(),
        })
    }
}

/// `<pictures>/walldrop`, if the platform has a picture directory.
pub fn default_base_path() -> Option<PathBuf> {
    UserDirs::new().and_then(|dirs| dirs.picture_dir().map(|pics| pics.join("walldrop")))
}

pub fn config_file_path() -> Option<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }

    ProjectDirs::from("cc", "walldrop", "walldrop")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}
