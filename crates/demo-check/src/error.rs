//! Error types for demo checks

use demo_artifact::ArtifactError;

/// Errors from running a demo check
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// A notebook or figure could not be read
    #[error("{demo} artifact check failed")]
    Artifact {
        /// Demo name
        demo: &'static str,
        /// Underlying failure
        #[source]
        source: ArtifactError,
    },

    /// No demo with this name
    #[error("unknown demo: '{0}'")]
    UnknownDemo(String),

    /// Report could not be rendered as JSON
    #[error("failed to render report")]
    Render(#[from] serde_json::Error),
}

impl CheckError {
    /// Wrap an artifact error for the named demo
    pub fn artifact(demo: &'static str, source: ArtifactError) -> Self {
        Self::Artifact { demo, source }
    }

    /// Underlying artifact error, if any
    #[must_use]
    pub fn artifact_error(&self) -> Option<&ArtifactError> {
        match self {
            Self::Artifact { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type alias for demo checks
pub type CheckResult<T> = Result<T, CheckError>;
