use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::models::Coordinate;

/// Tuning knobs for a single search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchOptions {
    /// Maximum number of cell reservations before giving up; `None` is unbounded.
    pub step_budget: Option<u64>,
    /// Reject queries whose letters the grid cannot supply before searching.
    pub prune: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            step_budget: None,
            prune: true,
        }
    }
}

impl SearchOptions {
    pub fn with_step_budget(mut self, budget: u64) -> Self {
        self.step_budget = Some(budget);
        self
    }

    pub fn without_pruning(mut self) -> Self {
        self.prune = false;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum SearchOutcome {
    Found,
    Absent,
    /// The step budget ran out first; the query may or may not exist.
    BudgetExhausted,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found)
    }

    /// False only when the search stopped before exhausting the grid.
    pub fn is_definitive(&self) -> bool {
        !matches!(self, SearchOutcome::BudgetExhausted)
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchReport {
    pub query: String,
    pub outcome: SearchOutcome,
    /// Cells spelling the query, present only when found.
    pub path: Option<Vec<Coordinate>>,
    /// Cell reservations spent.
    pub steps: u64,
}
