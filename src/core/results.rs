/*!
# Analysis Results

Records returned by the analyzer: the formatted Ω/O/Θ triple and the
explanation details collected during the walk.
*/

use crate::analyzer::ComplexityResult;
use serde::{Deserialize, Serialize};

/// Marker used for Θ when the best and worst cases differ
pub const NO_TIGHT_BOUND: &str = "N/A";

/// Explanation of how the bound was obtained
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityDetails {
    /// One entry per loop construct, in traversal order
    #[serde(default)]
    pub loops: Vec<String>,
    /// Detected recurrence, if any subroutine is self-recursive
    #[serde(default)]
    pub recursion: Option<String>,
    /// Rule used to combine statement sequences
    #[serde(default)]
    pub combination: String,
    #[serde(default)]
    pub early_exit_detected: bool,
}

/// Result of analyzing one program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Worst case, `O(...)`
    #[serde(rename = "O")]
    pub big_o: String,
    /// Best case, `Ω(...)`
    #[serde(rename = "Omega")]
    pub omega: String,
    /// Tight bound `Θ(...)`, or `N/A`
    #[serde(rename = "Theta")]
    pub theta: String,
    pub details: ComplexityDetails,
}

impl AnalysisReport {
    /// Formats the folded program result
    pub fn new(result: &ComplexityResult, details: ComplexityDetails) -> Self {
        let theta = if result.is_tight() {
            format!("Θ({})", result.avg())
        } else {
            NO_TIGHT_BOUND.to_string()
        };

        Self {
            big_o: format!("O({})", result.worst()),
            omega: format!("Ω({})", result.best()),
            theta,
            details,
        }
    }

    pub fn has_tight_bound(&self) -> bool {
        self.theta != NO_TIGHT_BOUND
    }

    /// Class inside the `O(...)` notation
    pub fn worst_class(&self) -> &str {
        strip_notation(&self.big_o)
    }

    /// Class inside the `Ω(...)` notation
    pub fn best_class(&self) -> &str {
        strip_notation(&self.omega)
    }
}

fn strip_notation(formatted: &str) -> &str {
    formatted
        .split_once('(')
        .and_then(|(_, rest)| rest.strip_suffix(')'))
        .unwrap_or(formatted)
}
