//! Canonical game states.
//!
//! A `State` is the set of facts that hold in a position. Facts are small
//! integers assigned by whatever compiled the game rules; the search never
//! interprets them, it only compares and hashes states.
//!
//! ## Hashing
//!
//! The hash is an order-independent combination of every member, computed
//! once at construction:
//!
//! ```text
//! hash = SEED ^ f(x1) ^ f(x2) ^ ...      where f(x) = x * (x + 1)
//! ```
//!
//! Two states with the same members hash identically no matter how they
//! were built, which is what lets transpositions share table entries.

use im::OrdSet;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Identifier of one true proposition in a state.
pub type FactId = u32;

/// Initial value of the state hash.
const STATE_HASH_SEED: u64 = 1_319_817;

#[inline]
fn fact_hash(fact: FactId) -> u64 {
    let x = u64::from(fact);
    x.wrapping_mul(x + 1)
}

/// Immutable set of facts describing one game position.
///
/// Uses an `im` persistent set so clones are O(1); states are cloned into
/// table keys on nearly every node the search visits.
///
/// ## Example
///
/// ```
/// use ggp_search::core::State;
///
/// let a = State::from_facts([3, 1, 2]);
/// let b = State::from_facts([1, 2, 3]);
///
/// assert_eq!(a, b);
/// assert_eq!(a.content_hash(), b.content_hash());
/// assert!(a.contains(2));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "Vec<FactId>", into = "Vec<FactId>")]
pub struct State {
    facts: OrdSet<FactId>,
    hash: u64,
}

impl State {
    /// Create an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            facts: OrdSet::new(),
            hash: STATE_HASH_SEED,
        }
    }

    /// Create a state from any collection of facts. Duplicates collapse.
    pub fn from_facts(facts: impl IntoIterator<Item = FactId>) -> Self {
        let facts: OrdSet<FactId> = facts.into_iter().collect();
        let hash = facts
            .iter()
            .fold(STATE_HASH_SEED, |acc, &fact| acc ^ fact_hash(fact));
        Self { facts, hash }
    }

    /// Return a copy of this state with `fact` added.
    #[must_use]
    pub fn with_fact(&self, fact: FactId) -> Self {
        if self.facts.contains(&fact) {
            return self.clone();
        }
        Self {
            facts: self.facts.update(fact),
            hash: self.hash ^ fact_hash(fact),
        }
    }

    /// Return a copy of this state with `fact` removed.
    #[must_use]
    pub fn without_fact(&self, fact: FactId) -> Self {
        if !self.facts.contains(&fact) {
            return self.clone();
        }
        Self {
            facts: self.facts.without(&fact),
            hash: self.hash ^ fact_hash(fact),
        }
    }

    /// Check whether a fact holds in this state.
    #[must_use]
    pub fn contains(&self, fact: FactId) -> bool {
        self.facts.contains(&fact)
    }

    /// Number of facts in the state.
    #[must_use]
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// Check if no fact holds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Iterate over the facts in ascending order.
    pub fn facts(&self) -> impl Iterator<Item = FactId> + '_ {
        self.facts.iter().copied()
    }

    /// The order-independent content hash.
    #[inline]
    #[must_use]
    pub fn content_hash(&self) -> u64 {
        self.hash
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash && self.facts == other.facts
    }
}

impl Eq for State {}

impl Hash for State {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl FromIterator<FactId> for State {
    fn from_iter<I: IntoIterator<Item = FactId>>(iter: I) -> Self {
        Self::from_facts(iter)
    }
}

impl From<Vec<FactId>> for State {
    fn from(facts: Vec<FactId>) -> Self {
        Self::from_facts(facts)
    }
}

impl From<State> for Vec<FactId> {
    fn from(state: State) -> Self {
        state.facts().collect()
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, fact) in self.facts().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", fact)?;
        }
        write!(f, "}}")
    }
}
