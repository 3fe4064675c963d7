//! Notebook + figure check
//!
//! Ties the loader, selector and figure stat together into one report.

use crate::error::ArtifactResult;
use crate::figure::figure_size;
use crate::notebook::load_notebook;
use crate::report::ArtifactReport;
use crate::select::CellSelector;
use std::path::PathBuf;

/// A notebook/figure pair to verify
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactCheck {
    pub title: String,
    pub notebook: PathBuf,
    pub figure: PathBuf,
    pub selector: CellSelector,
}

impl ArtifactCheck {
    /// Create check
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        notebook: impl Into<PathBuf>,
        figure: impl Into<PathBuf>,
        selector: CellSelector,
    ) -> Self {
        Self {
            title: title.into(),
            notebook: notebook.into(),
            figure: figure.into(),
            selector,
        }
    }

    /// Load the notebook, count selected cells and stat the figure
    ///
    /// The notebook is read before the figure is stat'd, so a missing
    /// notebook is reported even when the figure is missing too.
    ///
    /// # Errors
    /// Propagates any [`ArtifactError`](crate::ArtifactError) from either file
    pub fn run(&self) -> ArtifactResult<ArtifactReport> {
        let document = load_notebook(&self.notebook)?;
        let count = document.count(self.selector);
        let figure_bytes = figure_size(&self.figure)?;

        tracing::info!(
            title = %self.title,
            selector = %self.selector,
            count,
            figure_bytes,
            "artifact check passed"
        );

        Ok(ArtifactReport::new(
            self.title.clone(),
            self.notebook.clone(),
            self.selector.label(),
            count,
            self.figure.clone(),
            figure_bytes,
        ))
    }
}
