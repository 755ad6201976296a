use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::math::MIN_PIVOT;

/// Settings for the Gaussian-elimination determinant.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EliminationConfig {
    pub pivot_rule: PivotRule,

    /// Pivots (and column entries) with a magnitude below this value are
    /// treated as zero.
    pub singular_threshold: f64,
}

/// How the pivot row is chosen at each elimination step.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PivotRule {
    /// Textbook partial pivoting: the row with the largest `|T[j][i]|`.
    #[default]
    Partial,
    /// Compares `|T[j][j]|` against the running best `|T[jj][i]|`.
    ///
    /// Kept for parity with older results; it can pick a zero pivot and
    /// report a non-singular matrix as singular.
    Legacy,
}

impl fmt::Display for PivotRule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PivotRule::Partial => write!(f, "partial"),
            PivotRule::Legacy => write!(f, "legacy"),
        }
    }
}

impl FromStr for PivotRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "partial" => Ok(PivotRule::Partial),
            "legacy" => Ok(PivotRule::Legacy),
            _ => Err(format!(
                "Unknown pivot rule: {}. Expected one of: partial, legacy",
                s
            )),
        }
    }
}

impl EliminationConfig {
    pub fn new(pivot_rule: PivotRule, singular_threshold: f64) -> Self {
        Self {
            pivot_rule,
            singular_threshold,
        }
    }

    pub fn with_pivot_rule(mut self, pivot_rule: PivotRule) -> Self {
        self.pivot_rule = pivot_rule;
        self
    }
}

impl Default for EliminationConfig {
    fn default() -> Self {
        Self {
            pivot_rule: PivotRule::Partial,
            singular_threshold: MIN_PIVOT,
        }
    }
}
