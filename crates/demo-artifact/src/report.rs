//! Artifact check reports

use serde::Serialize;
use std::fmt::{self, Display, Formatter};
use std::path::{Path, PathBuf};

/// Outcome of one artifact check
///
/// Rendered as three lines by [`Display`]:
///
/// ```text
/// Fixed Income - artifact check
/// Notebook: /repo/finance/notebooks/x.ipynb (code cells: 12)
/// Figure:   /repo/hidden_markov_model/assets/img/y.png (bytes: 48213)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactReport {
    pub title: String,
    pub notebook: PathBuf,
    pub count_label: String,
    pub count: usize,
    pub figure: PathBuf,
    pub figure_bytes: u64,
}

impl ArtifactReport {
    /// Assemble report from its parts
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        notebook: impl Into<PathBuf>,
        count_label: impl Into<String>,
        count: usize,
        figure: impl Into<PathBuf>,
        figure_bytes: u64,
    ) -> Self {
        Self {
            title: title.into(),
            notebook: notebook.into(),
            count_label: count_label.into(),
            count,
            figure: figure.into(),
            figure_bytes,
        }
    }

    /// Notebook path
    #[inline]
    #[must_use]
    pub fn notebook(&self) -> &Path {
        &self.notebook
    }

    /// Figure path
    #[inline]
    #[must_use]
    pub fn figure(&self) -> &Path {
        &self.figure
    }

    /// Pretty-printed JSON rendering
    ///
    /// # Errors
    /// Returns error if a path is not valid UTF-8
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Display for ArtifactReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(
            f,
            "Notebook: {} ({}: {})",
            self.notebook.display(),
            self.count_label,
            self.count
        )?;
        write!(
            f,
            "Figure:   {} (bytes: {})",
            self.figure.display(),
            self.figure_bytes
        )
    }
}
