//! Cell selection
//!
//! [`CellSelector`] is the predicate each demo counts with. [`CellTally`]
//! partitions a whole document by kind.

use crate::notebook::{Cell, CellKind};
use std::fmt::{self, Display, Formatter};

/// Predicate over a cell's type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellSelector {
    /// Cells tagged `code`
    Code,
    /// Cells tagged `markdown`
    Markdown,
    /// Every cell, typed or not
    Any,
}

impl CellSelector {
    /// All selectors
    pub const ALL: [Self; 3] = [Self::Code, Self::Markdown, Self::Any];

    /// Check if cell is selected
    #[inline]
    #[must_use]
    pub fn matches(self, cell: &Cell) -> bool {
        match self {
            Self::Code => *cell.kind() == CellKind::Code,
            Self::Markdown => *cell.kind() == CellKind::Markdown,
            Self::Any => true,
        }
    }

    /// Label used in reports
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Code => "code cells",
            Self::Markdown => "markdown cells",
            Self::Any => "total cells",
        }
    }
}

impl Display for CellSelector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Cell counts by kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellTally {
    pub code: usize,
    pub markdown: usize,
    pub raw: usize,
    /// Cells with an unrecognised string tag
    pub other: usize,
    /// Cells with no usable tag
    pub untyped: usize,
}

impl CellTally {
    /// Record one cell
    pub fn add(&mut self, kind: &CellKind) {
        match kind {
            CellKind::Code => self.code += 1,
            CellKind::Markdown => self.markdown += 1,
            CellKind::Raw => self.raw += 1,
            CellKind::Other(_) => self.other += 1,
            CellKind::Untyped => self.untyped += 1,
        }
    }

    /// Sum over all kinds
    #[inline]
    #[must_use]
    pub fn total(&self) -> usize {
        self.code + self.markdown + self.raw + self.other + self.untyped
    }
}

impl<'a> FromIterator<&'a Cell> for CellTally {
    fn from_iter<I: IntoIterator<Item = &'a Cell>>(iter: I) -> Self {
        let mut tally = Self::default();
        for cell in iter {
            tally.add(cell.kind());
        }
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(tag: Option<&str>) -> Cell {
        Cell::new(CellKind::from_tag(tag))
    }

    #[test]
    fn selector_matches() {
        let code = cell(Some("code"));
        let markdown = cell(Some("markdown"));
        let untyped = cell(None);

        assert!(CellSelector::Code.matches(&code));
        assert!(!CellSelector::Code.matches(&markdown));
        assert!(CellSelector::Markdown.matches(&markdown));
        assert!(!CellSelector::Markdown.matches(&untyped));
        assert!(CellSelector::Any.matches(&untyped));
    }

    #[test]
    fn selector_is_case_sensitive() {
        assert!(!CellSelector::Code.matches(&cell(Some("Code"))));
    }

    #[test]
    fn selector_labels() {
        assert_eq!(CellSelector::Code.label(), "code cells");
        assert_eq!(CellSelector::Markdown.to_string(), "markdown cells");
        assert_eq!(CellSelector::Any.label(), "total cells");
    }

    #[test]
    fn tally_counts_each_kind() {
        let cells = [
            cell(Some("code")),
            cell(Some("code")),
            cell(Some("markdown")),
            cell(Some("raw")),
            cell(Some("widget")),
            cell(None),
        ];
        let tally: CellTally = cells.iter().collect();

        assert_eq!(
            tally,
            CellTally {
                code: 2,
                markdown: 1,
                raw: 1,
                other: 1,
                untyped: 1,
            }
        );
        assert_eq!(tally.total(), cells.len());
    }
}
