//! Search statistics for diagnostics and deepening control.

use serde::{Deserialize, Serialize};

/// Counters collected during one depth iteration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// States evaluated by the heuristic at the depth horizon.
    pub heuristic_evaluations: u64,

    /// Terminal states scored from real rewards.
    pub terminal_evaluations: u64,

    /// States entered by the recursive search, including table hits.
    pub states_visited: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when the iteration reached only terminal states, meaning
    /// the whole game tree below the root was searched and deeper
    /// iterations cannot change the answer.
    #[must_use]
    pub fn is_exhaustive(&self) -> bool {
        self.heuristic_evaluations == 0 && self.terminal_evaluations > 0
    }
}
