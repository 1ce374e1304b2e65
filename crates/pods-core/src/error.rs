//! Error types for pods-core

use std::path::PathBuf;

/// Result type for pods-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pods-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required input file does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// A manifest line has no separator
    #[error("Malformed manifest line {line_number}: {line:?} (expected key{separator}value)")]
    MalformedLine {
        line_number: usize,
        line: String,
        separator: String,
    },

    /// The key/value separator is unusable
    #[error("Invalid separator: {separator:?}")]
    InvalidSeparator { separator: String },

    /// A plugin name cannot be used as a path segment
    #[error("Invalid plugin name {name:?}: {reason}")]
    InvalidPluginName { name: String, reason: String },

    /// The dependency metadata file could not be understood
    #[error("Invalid plugin dependency metadata at {path}: {message}")]
    DependencyMetadata { path: PathBuf, message: String },

    /// The registrar refused a declaration
    #[error("Failed to register pod {name}: {message}")]
    Registration { name: String, message: String },

    /// Filesystem error from pods-fs
    #[error(transparent)]
    Fs(pods_fs::Error),
}

impl From<pods_fs::Error> for Error {
    fn from(err: pods_fs::Error) -> Self {
        match err {
            pods_fs::Error::NotFound { path } => Self::FileNotFound { path },
            other => Self::Fs(other),
        }
    }
}

impl Error {
    /// Whether this error means a required input file is absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound { .. })
    }
}
