//! Notebook document model
//!
//! Only the parts of the notebook format the artifact check consumes are
//! modelled: the top-level `cells` list, each cell's `cell_type` tag, and the
//! optional format version. Everything else in the file is ignored.

use crate::error::{ArtifactError, ArtifactResult};
use crate::select::{CellSelector, CellTally};
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use std::str::FromStr;

/// Type tag of a notebook cell
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// `"code"`
    Code,
    /// `"markdown"`
    Markdown,
    /// `"raw"`
    Raw,
    /// Any other string tag
    Other(String),
    /// `cell_type` missing or not a string
    Untyped,
}

impl CellKind {
    /// Classify an optional `cell_type` value
    #[must_use]
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("code") => Self::Code,
            Some("markdown") => Self::Markdown,
            Some("raw") => Self::Raw,
            Some(other) => Self::Other(other.to_string()),
            None => Self::Untyped,
        }
    }

    /// Tag as it appears in the file, if any
    #[must_use]
    pub fn as_tag(&self) -> Option<&str> {
        match self {
            Self::Code => Some("code"),
            Self::Markdown => Some("markdown"),
            Self::Raw => Some("raw"),
            Self::Other(tag) => Some(tag),
            Self::Untyped => None,
        }
    }
}

/// One element of a notebook's `cells` list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    kind: CellKind,
}

impl Cell {
    /// Create cell with the given kind
    #[inline]
    #[must_use]
    pub fn new(kind: CellKind) -> Self {
        Self { kind }
    }

    /// Cell type
    #[inline]
    #[must_use]
    pub fn kind(&self) -> &CellKind {
        &self.kind
    }
}

// Cells are read leniently: anything that is not an object with a string
// `cell_type` becomes an untyped cell instead of a parse failure.
impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let tag = value.get("cell_type").and_then(Value::as_str);
        Ok(Self::new(CellKind::from_tag(tag)))
    }
}

/// Parsed notebook document
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NotebookDocument {
    #[serde(default, deserialize_with = "nullable_cells")]
    cells: Vec<Cell>,
    #[serde(default, deserialize_with = "lenient_version")]
    nbformat: Option<u32>,
    #[serde(default, deserialize_with = "lenient_version")]
    nbformat_minor: Option<u32>,
}

fn nullable_cells<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Cell>, D::Error> {
    Option::<Vec<Cell>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn lenient_version<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_u64().and_then(|v| u32::try_from(v).ok()))
}

impl NotebookDocument {
    /// Create document from cells
    #[inline]
    #[must_use]
    pub fn new(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            nbformat: None,
            nbformat_minor: None,
        }
    }

    /// Cells in file order
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the document has no cells
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Format version as `(major, minor)` when the file declares one
    #[must_use]
    pub fn format_version(&self) -> Option<(u32, u32)> {
        self.nbformat
            .map(|major| (major, self.nbformat_minor.unwrap_or(0)))
    }

    /// Count cells matched by selector
    #[must_use]
    pub fn count(&self, selector: CellSelector) -> usize {
        self.count_where(|cell| selector.matches(cell))
    }

    /// Count cells satisfying an arbitrary predicate
    #[must_use]
    pub fn count_where<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Cell) -> bool,
    {
        self.cells.iter().filter(|cell| predicate(cell)).count()
    }

    /// Per-kind cell counts
    #[must_use]
    pub fn tally(&self) -> CellTally {
        self.cells.iter().collect()
    }
}

impl FromStr for NotebookDocument {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: Value = serde_json::from_str(s)?;
        if !value.is_object() {
            return Err(de::Error::custom("notebook root must be a JSON object"));
        }
        serde_json::from_value(value)
    }
}

/// Load notebook document from disk
///
/// # Errors
/// - `ArtifactError::NotFound` if the file does not exist
/// - `ArtifactError::Encoding` if the content is not UTF-8
/// - `ArtifactError::Parse` if the content is not a notebook object
/// - `ArtifactError::Io` for any other read failure
pub fn load_notebook(path: impl AsRef<Path>) -> ArtifactResult<NotebookDocument> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading notebook");

    let bytes = std::fs::read(path).map_err(|e| ArtifactError::io_error(path, e))?;
    let text = std::str::from_utf8(&bytes).map_err(|e| ArtifactError::encoding_error(path, e))?;
    let document: NotebookDocument = text
        .parse()
        .map_err(|e| ArtifactError::parse_error(path, e))?;

    let tally = document.tally();
    tracing::debug!(
        path = %path.display(),
        version = ?document.format_version(),
        cells = document.len(),
        code = tally.code,
        markdown = tally.markdown,
        "notebook loaded"
    );
    if tally.untyped > 0 {
        tracing::warn!(
            path = %path.display(),
            untyped = tally.untyped,
            "cells without a usable cell_type"
        );
    }

    Ok(document)
}
