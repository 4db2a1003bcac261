use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WallpaperError {
    #[error("Unknown purity value: {0}")]
    UnknownPurity(String),

    #[error("Unknown category value: {0}")]
    UnknownCategory(String),

    #[error("Invalid resolution: {0}")]
    InvalidResolution(String),
}
