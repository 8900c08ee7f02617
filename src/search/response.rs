//! Result of one completed depth iteration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::depth::Depth;
use super::stats::SearchStats;
use crate::core::{Move, Value};

/// Answer produced by one iteration of iterative deepening.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Move chosen for the searching role.
    pub best_move: Move,

    /// Value of the root for the searching role.
    pub value: Value,

    /// Depth the iteration searched to.
    pub depth: Depth,

    /// Counters for this iteration.
    pub stats: SearchStats,

    /// Wall time spent in this iteration.
    pub elapsed: Duration,
}

impl SearchResponse {
    /// True when this iteration solved the game from the root.
    #[must_use]
    pub fn is_exhaustive(&self) -> bool {
        self.stats.is_exhaustive()
    }
}

impl std::fmt::Display for SearchResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Move: {}, Value: {}, Depth: {}, Heuristic Evaluations: {}, Terminal States: {}, Total States: {}, Time: {:?}",
            self.best_move,
            self.value,
            self.depth,
            self.stats.heuristic_evaluations,
            self.stats.terminal_evaluations,
            self.stats.states_visited,
            self.elapsed,
        )
    }
}
