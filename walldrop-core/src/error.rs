use std::{io, path::PathBuf};

use thiserror::Error;
use walldrop_extractors::{auth, error::ExtractorError};

/// Failures that stop a sync run, or a single tag when the run skips failed tags.
#[derive(Error, Debug)]
pub enum SyncError {
    /// Network failure or a non-success answer from the gallery.
    #[error("Transport error: {source}")]
    Transport { source: ExtractorError },

    /// The gallery answered with markup the scraper doesn't understand.
    #[error("Failed to parse gallery response: {message}")]
    Parse { message: String },

    /// A value the pipeline cannot turn into a local file.
    #[error("Unsupported data: {message}")]
    UnsupportedData { message: String },

    /// The gallery rejected the session's credentials.
    #[error("Authentication failed: {source}")]
    Authentication { source: auth::Error },

    #[error("Failed to access {}: {source}", path.display())]
    Storage { path: PathBuf, source: io::Error },

    /// A local file error the gallery couldn't attribute to a path.
    #[error("Local file error: {source}")]
    Io { source: io::Error },
}

impl SyncError {
    pub(crate) fn unsupported<S: ToString>(message: S) -> Self {
        Self::UnsupportedData {
            message: message.to_string(),
        }
    }

    pub(crate) fn storage(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Storage {
            path: path.into(),
            source,
        }
    }

    /// Maps a failed download, attributing local file errors to `destination`.
    pub(crate) fn download(err: ExtractorError, destination: impl Into<PathBuf>) -> Self {
        match err {
            ExtractorError::FileIOError { source } => Self::storage(destination, source),
            other => other.into(),
        }
    }
}

impl From<ExtractorError> for SyncError {
    fn from(value: ExtractorError) -> Self {
        match value {
            ExtractorError::ParseError { message } => Self::Parse { message },
            ExtractorError::ZeroPage => Self::unsupported(value),
            ExtractorError::FileIOError { source } => Self::Io { source },
            ExtractorError::AuthenticationFailure { source } => Self::Authentication { source },
            ExtractorError::ConnectionError(_) => Self::Transport { source: value },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn rejected_login_is_not_a_transport_error() {
        let err = SyncError::from(ExtractorError::from(auth::Error::InvalidLogin));

        assert!(matches!(err, SyncError::Authentication { .. }));
        assert_eq!(
            err.to_string(),
            "Authentication failed: Invalid username or password"
        );
    }

    #[test]
    fn unattributed_io_error_names_no_empty_path() {
        let source = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = SyncError::from(ExtractorError::from(source));

        assert!(matches!(err, SyncError::Io { .. }));
        assert_eq!(err.to_string(), "Local file error: denied");
    }

    #[test]
    fn download_io_error_names_the_destination() {
        let source = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = SyncError::download(ExtractorError::from(source), "/tmp/unchecked/a.jpg");

        assert!(matches!(
            err,
            SyncError::Storage { ref path, .. } if path == Path::new("/tmp/unchecked/a.jpg")
        ));
    }
}
