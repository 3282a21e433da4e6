//! Error types for property source discovery and bootstrap resolution.

use std::io;
use std::path::PathBuf;

use strata_core::ConfigError;

/// Errors that can occur while locating sources and resolving the
/// bootstrap configuration.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// A core property error (conflict, placeholder, decode failure).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The config type tag is outside `{local, remote}`.
    #[error("unknown config type: {0}")]
    UnknownConfigType(String),

    /// An explicitly registered directory exists but is not a directory.
    #[error("{} should be a directory", path.display())]
    NotADirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// An explicitly registered file exists but is not a regular file.
    #[error("{} should be a file", path.display())]
    NotAFile {
        /// The offending path.
        path: PathBuf,
    },

    /// A filesystem check failed for a reason other than not-found.
    #[error("failed to stat {}: {source}", path.display())]
    Stat {
        /// The path being checked.
        path: PathBuf,
        /// The underlying filesystem error.
        #[source]
        source: io::Error,
    },

    /// A background task panicked.
    #[error("task panicked: {0}")]
    TaskPanic(String),

    /// I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl SourceError {
    /// Creates a NotADirectory error.
    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        Self::NotADirectory { path: path.into() }
    }

    /// Creates a NotAFile error.
    pub fn not_a_file(path: impl Into<PathBuf>) -> Self {
        Self::NotAFile { path: path.into() }
    }

    /// Creates a Stat error.
    pub fn stat(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Stat {
            path: path.into(),
            source,
        }
    }

    /// Returns true for operator misconfiguration that must abort startup
    /// rather than degrade silently.
    ///
    /// These errors are never caught and retried internally; the host
    /// application decides how to terminate.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::NotADirectory { .. } | Self::NotAFile { .. } | Self::Stat { .. }
        )
    }

    /// Returns true if this is a merge conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Config(e) if e.is_conflict())
    }
}

/// Type alias for Results with SourceError.
pub type Result<T> = std::result::Result<T, SourceError>;
