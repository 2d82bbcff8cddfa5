// SPDX-License-Identifier: MPL-2.0
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Content(String),
    Sync(SyncError),
}

/// Failures of the build-time asset sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// The required source document does not exist.
    MissingDocument(PathBuf),

    /// A filesystem operation failed on the given path.
    Io { path: PathBuf, message: String },
}

impl SyncError {
    pub(crate) fn io(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        SyncError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::MissingDocument(path) => {
                write!(f, "Missing source asset at {}", path.display())
            }
            SyncError::Io { path, message } => write!(f, "{}: {}", path.display(), message),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Content(e) => write!(f, "Content Error: {}", e),
            Error::Sync(e) => write!(f, "Sync Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<SyncError> for Error {
    fn from(err: SyncError) -> Self {
        Error::Sync(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
