//! Demo catalog
//!
//! Each finance demo pairs one committed notebook with one committed figure
//! and counts the notebook's cells with a fixed selector.

use crate::error::CheckError;
use demo_artifact::{ArtifactCheck, CellSelector};
use std::fmt::{self, Display, Formatter};
use std::path::Path;
use std::str::FromStr;

/// Finance demo with committed artifacts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Demo {
    /// Fixed income state estimation
    FixedIncome,
    /// Market risk filter stability
    MarketRisk,
    /// Sentiment signal filtering
    Sentiment,
}

impl Demo {
    /// All demos in run order
    pub const ALL: [Self; 3] = [Self::FixedIncome, Self::MarketRisk, Self::Sentiment];

    /// Command-line name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FixedIncome => "fixed-income",
            Self::MarketRisk => "market-risk",
            Self::Sentiment => "sentiment",
        }
    }

    /// First line of the report
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::FixedIncome => "Fixed Income - artifact check",
            Self::MarketRisk => "Market Risk - artifact check",
            Self::Sentiment => "Sentiment - artifact check",
        }
    }

    /// Notebook path relative to the repository root
    #[must_use]
    pub const fn notebook(self) -> &'static str {
        match self {
            Self::FixedIncome => "finance/notebooks/fixed_income_state_estimation.ipynb",
            Self::MarketRisk => "finance/notebooks/market_risk_filter_stability.ipynb",
            Self::Sentiment => "finance/notebooks/sentiment_signal_filtering.ipynb",
        }
    }

    /// Figure path relative to the repository root
    #[must_use]
    pub const fn figure(self) -> &'static str {
        match self {
            Self::FixedIncome => "hidden_markov_model/assets/img/act1_kf_baseline.png",
            Self::MarketRisk => "hidden_markov_model/assets/img/act2_nees.png",
            Self::Sentiment => "hidden_markov_model/assets/img/particle_cloud.gif",
        }
    }

    /// Cells this demo counts
    #[must_use]
    pub const fn selector(self) -> CellSelector {
        match self {
            Self::FixedIncome => CellSelector::Code,
            Self::MarketRisk => CellSelector::Markdown,
            Self::Sentiment => CellSelector::Any,
        }
    }

    /// Check with both paths resolved against `root`
    #[must_use]
    pub fn check(self, root: &Path) -> ArtifactCheck {
        ArtifactCheck::new(
            self.title(),
            root.join(self.notebook()),
            root.join(self.figure()),
            self.selector(),
        )
    }
}

impl Display for Demo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Demo {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|demo| demo.name() == s)
            .ok_or_else(|| CheckError::UnknownDemo(s.to_string()))
    }
}
