//! Demo Artifact Inspection
//!
//! Loads committed notebook documents, counts their cells by type, and
//! stats the figure files that accompany them.
//!
//! # Core Concepts
//!
//! - [`NotebookDocument`]: the `cells` list of a notebook, tagged by [`CellKind`]
//! - [`CellSelector`]: which cells a demo counts (code, markdown or all)
//! - [`figure_size`]: byte size of a figure, read from filesystem metadata
//! - [`ArtifactCheck`]: one notebook/figure pair, producing an [`ArtifactReport`]
//!
//! # Example
//!
//! ```rust,ignore
//! use demo_artifact::{ArtifactCheck, CellSelector};
//!
//! let check = ArtifactCheck::new(
//!     "Fixed Income - artifact check",
//!     "finance/notebooks/fixed_income_state_estimation.ipynb",
//!     "hidden_markov_model/assets/img/act1_kf_baseline.png",
//!     CellSelector::Code,
//! );
//! println!("{}", check.run()?);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod check;
mod error;
mod figure;
mod notebook;
mod report;
mod select;

// Re-exports
pub use check::ArtifactCheck;
pub use error::{ArtifactError, ArtifactResult, ErrorKind};
pub use figure::figure_size;
pub use notebook::{load_notebook, Cell, CellKind, NotebookDocument};
pub use report::ArtifactReport;
pub use select::{CellSelector, CellTally};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
