//! Error types for artifact inspection
//!
//! Every variant carries the path that was being read so the diagnostic
//! printed at the process boundary names the offending file.

use std::path::{Path, PathBuf};

/// Coarse classification of an [`ArtifactError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Path does not exist
    NotFound,
    /// Content is not a valid notebook document
    Parse,
    /// Content cannot be decoded as UTF-8 text
    Encoding,
    /// Any other filesystem failure
    Io,
}

/// Errors raised while loading a notebook or stating a figure
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    /// Artifact file is missing
    #[error("artifact not found: {path}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Notebook content is not valid JSON or has the wrong shape
    #[error("invalid notebook in {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Notebook bytes are not UTF-8
    #[error("notebook {path} is not valid utf-8")]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::str::Utf8Error,
    },

    /// Other IO failure
    #[error("io error reading {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ArtifactError {
    /// Classify an IO error for path, splitting out missing files
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path, source }
        } else {
            Self::Io { path, source }
        }
    }

    /// Create parse error for path
    pub fn parse_error(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    /// Create encoding error for path
    pub fn encoding_error(path: impl Into<PathBuf>, source: std::str::Utf8Error) -> Self {
        Self::Encoding {
            path: path.into(),
            source,
        }
    }

    /// Error classification
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::Encoding { .. } => ErrorKind::Encoding,
            Self::Io { .. } => ErrorKind::Io,
        }
    }

    /// Path the error refers to
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path, .. }
            | Self::Parse { path, .. }
            | Self::Encoding { path, .. }
            | Self::Io { path, .. } => path,
        }
    }
}

/// Result type alias for artifact operations
pub type ArtifactResult<T> = Result<T, ArtifactError>;
