//! Error types for Strata Config.
//!
//! All errors implement the standard `std::error::Error` trait via
//! `thiserror`. Configuration resolution is fail-fast: none of these
//! errors are retried, a failing resolution run is expected to prevent
//! application startup.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for property-tree and format operations.
///
/// Placeholder errors form a chain: the outer [`ConfigError::Resolve`]
/// names the original string, the inner error names the offending key,
/// joined by `<<` in the rendered message:
///
/// ```text
/// resolve string "${a}" error << property a not exist
/// ```
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A referenced property path does not exist and no default was given.
    #[error("property {key} not exist")]
    NotExist {
        /// The property path that was looked up.
        key: String,
    },

    /// Placeholder substitution failed for a string value.
    #[error("resolve string {string:?} error << {source}")]
    Resolve {
        /// The original string being resolved.
        string: String,
        /// The underlying failure, usually [`ConfigError::NotExist`].
        #[source]
        source: Box<ConfigError>,
    },

    /// Placeholder substitution recursed past the depth bound.
    #[error("too deeply nested placeholders")]
    ResolveDepth,

    /// A `${...}` token is unterminated or otherwise malformed.
    #[error("invalid placeholder in {string:?}")]
    BadPlaceholder {
        /// The string containing the malformed token.
        string: String,
    },

    /// Two layers asserted structurally incompatible values at one path.
    #[error("property conflict at path {path}")]
    Conflict {
        /// The full incoming path that collided.
        path: String,
    },

    /// A dotted property path could not be parsed.
    #[error("invalid property path {path}: {reason}")]
    InvalidPath {
        /// The offending path.
        path: String,
        /// Why it is invalid.
        reason: String,
    },

    /// File content does not parse per its extension-implied format.
    #[error("parse error in {path}: {reason}")]
    Parse {
        /// The file that failed to decode.
        path: PathBuf,
        /// The underlying parser's message.
        reason: String,
    },

    /// The file extension maps to no known format.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ConfigError {
    /// Creates a NotExist error.
    pub fn not_exist(key: impl Into<String>) -> Self {
        Self::NotExist { key: key.into() }
    }

    /// Wraps an error as a resolve failure for the given original string.
    pub fn resolve(string: impl Into<String>, source: ConfigError) -> Self {
        Self::Resolve {
            string: string.into(),
            source: Box::new(source),
        }
    }

    /// Creates a Conflict error naming the colliding path.
    pub fn conflict(path: impl Into<String>) -> Self {
        Self::Conflict { path: path.into() }
    }

    /// Creates an InvalidPath error.
    pub fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Creates a Parse error.
    pub fn parse(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Returns true if this is a merge conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    /// Returns true if this error (or the one it wraps) is a missing property.
    pub fn is_not_exist(&self) -> bool {
        match self {
            Self::NotExist { .. } => true,
            Self::Resolve { source, .. } => source.is_not_exist(),
            _ => false,
        }
    }

    /// Returns true if this is a decode failure.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

/// Type alias for Results with ConfigError.
pub type Result<T> = std::result::Result<T, ConfigError>;
