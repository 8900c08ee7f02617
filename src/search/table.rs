//! Transposition table.
//!
//! Maps states to the result of an earlier search of that state. Entries
//! are keyed by state alone, so every path reaching the same position
//! shares one entry; the stored depth decides whether an entry is deep
//! enough to reuse, and the bound kind whether it settles the current
//! window.

use serde::{Deserialize, Serialize};

use super::depth::Depth;
use crate::cache::FifoCache;
use crate::core::{Move, State, Value};

/// What a stored value says about the true value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bound {
    /// The stored value is exact.
    Exact,
    /// Every move failed low: the true value is at most the stored alpha.
    FailLow,
    /// A move failed high: the true value is at least the stored beta.
    FailHigh,
}

/// Result stored for one state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TranspositionEntry {
    /// Remaining depth the value was computed with.
    pub depth: Depth,

    /// Kind of bound the value is.
    pub bound: Bound,

    /// Stored value.
    pub value: Value,

    /// Move that produced the value, tried first on revisits.
    pub best_move: Option<Move>,
}

impl TranspositionEntry {
    /// Try to answer a query for `depth` with window (`alpha`, `beta`).
    ///
    /// Returns the value to use if the entry is deep enough and its bound
    /// settles the window.
    #[must_use]
    pub fn probe(&self, depth: Depth, alpha: &Value, beta: &Value) -> Option<Value> {
        if !self.depth.covers(depth) {
            return None;
        }
        match self.bound {
            Bound::Exact => Some(self.value.clone()),
            Bound::FailLow if self.value <= *alpha => Some(alpha.clone()),
            Bound::FailHigh if self.value >= *beta => Some(beta.clone()),
            _ => None,
        }
    }
}

/// Bounded transposition table with FIFO replacement.
#[derive(Clone, Debug)]
pub struct TranspositionTable {
    entries: FifoCache<State, TranspositionEntry>,
}

impl TranspositionTable {
    /// Create an empty table holding at most `capacity` states.
    ///
    /// A capacity of 0 is raised to 1.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: FifoCache::new(capacity.max(1)),
        }
    }

    /// Entry stored for `state`.
    #[must_use]
    pub fn get(&self, state: &State) -> Option<&TranspositionEntry> {
        self.entries.get(state)
    }

    /// Store or overwrite the entry for `state`.
    pub fn store(&mut self, state: State, entry: TranspositionEntry) {
        self.entries.insert(state, entry);
    }

    /// Number of stored states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of stored states.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Iterate over stored entries. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&State, &TranspositionEntry)> {
        self.entries.iter()
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self {
            entries: FifoCache::default(),
        }
    }
}
