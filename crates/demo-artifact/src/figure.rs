//! Figure artifacts
//!
//! Figures are never decoded. Only their size on disk is reported.

use crate::error::{ArtifactError, ArtifactResult};
use std::path::Path;

/// Size of a figure file in bytes
///
/// # Errors
/// - `ArtifactError::NotFound` if the file does not exist
/// - `ArtifactError::Io` if metadata cannot be read
pub fn figure_size(path: impl AsRef<Path>) -> ArtifactResult<u64> {
    let path = path.as_ref();
    let metadata = std::fs::metadata(path).map_err(|e| ArtifactError::io_error(path, e))?;
    tracing::debug!(path = %path.display(), bytes = metadata.len(), "figure stat");
    Ok(metadata.len())
}
