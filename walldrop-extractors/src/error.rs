use crate::auth::Error;
use std::io;
use thiserror::Error;
use walldrop_common::{reqwest, wallpaper::error::WallpaperError};

/// Enumerates the possible errors that can arise while talking to the gallery.
///
/// Errors fall into three groups: transport failures ([`ConnectionError`](Self::ConnectionError)),
/// markup that no longer matches what the scraper expects ([`ParseError`](Self::ParseError)) and
/// local file failures while writing a download ([`FileIOError`](Self::FileIOError)).
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// An error occurred during a network request, including non-success HTTP statuses.
    #[error("Connection Error: {0}")]
    ConnectionError(#[from] reqwest::Error),

    /// The gallery answered with markup that doesn't match the expected layout.
    /// This usually means the remote site changed.
    #[error("Gallery returned unexpected markup: {message}")]
    ParseError { message: String },

    /// An attempt was made to fetch search results from page zero.
    #[error("Page number cannot be zero.")]
    ZeroPage,

    #[error("Authentication failed. error: {source}")]
    AuthenticationFailure {
        #[from]
        source: Error,
    },

    #[error("Failed to access file: {source}")]
    FileIOError {
        #[from]
        source: io::Error,
    },
}

impl ExtractorError {
    pub(crate) fn parse<S: ToString>(message: S) -> Self {
        Self::ParseError {
            message: message.to_string(),
        }
    }

    /// `true` for failures caused by the network or the remote server.
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::ConnectionError(_))
    }

    /// `true` when the remote markup could not be understood.
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::ParseError { .. })
    }
}

impl From<WallpaperError> for ExtractorError {
    fn from(value: WallpaperError) -> Self {
        Self::parse(value)
    }
}
