//! Check configuration

use std::path::{Path, PathBuf};

/// How reports are written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Three-line human-readable report
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Artifact check configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    /// Repository root the demo paths are resolved against
    pub root: PathBuf,
    /// Report format
    pub format: OutputFormat,
}

impl CheckConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With repository root
    #[inline]
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// With output format
    #[inline]
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            format: OutputFormat::Text,
        }
    }
}

/// Workspace root, two levels above this crate's manifest
#[must_use]
pub fn default_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}
