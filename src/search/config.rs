//! Search configuration parameters.

use serde::{Deserialize, Serialize};

use crate::core::RoleId;

/// Whether a node where every role is forced consumes search depth.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForcedMovePolicy {
    /// Forced transitions cost one ply like any other.
    Consume,
    /// Forced transitions are always free.
    Free,
    /// Forced transitions are free when searching for one of these roles.
    FreeForRoles(Vec<RoleId>),
}

impl ForcedMovePolicy {
    /// Whether forced transitions are free when searching for `role`.
    #[must_use]
    pub fn is_free_for(&self, role: RoleId) -> bool {
        match self {
            ForcedMovePolicy::Consume => false,
            ForcedMovePolicy::Free => true,
            ForcedMovePolicy::FreeForRoles(roles) => roles.contains(&role),
        }
    }
}

impl Default for ForcedMovePolicy {
    fn default() -> Self {
        ForcedMovePolicy::FreeForRoles(vec![RoleId::new(0)])
    }
}

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Role the search chooses moves for.
    pub role: RoleId,

    /// Deepest iteration to run (None = until solved or cancelled).
    /// Only used when a heuristic is configured. The first pass always
    /// runs, so 0 behaves as 1.
    pub max_depth: Option<u32>,

    /// Opponent moves examined per minimizing node (None = all).
    /// Later moves in the ordering are skipped, trading accuracy for speed.
    pub max_opponent_moves: Option<usize>,

    /// Depth accounting at forced nodes.
    pub forced_moves: ForcedMovePolicy,

    /// Transposition table capacity (states). 0 is raised to 1.
    pub table_capacity: usize,

    /// Seed for move ordering.
    /// Same seed produces identical searches.
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            role: RoleId::new(0),
            max_depth: None,
            max_opponent_moves: None,
            forced_moves: ForcedMovePolicy::default(),
            table_capacity: 4096,
            seed: 42,
        }
    }
}

impl SearchConfig {
    /// Create a new config with a custom role.
    pub fn with_role(mut self, role: RoleId) -> Self {
        self.role = role;
        self
    }

    /// Create a new config with a custom max depth.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Create a new config with a cap on opponent moves per node.
    pub fn with_max_opponent_moves(mut self, moves: usize) -> Self {
        self.max_opponent_moves = Some(moves);
        self
    }

    /// Create a new config with a custom forced-move policy.
    pub fn with_forced_moves(mut self, policy: ForcedMovePolicy) -> Self {
        self.forced_moves = policy;
        self
    }

    /// Create a new config with a custom table capacity.
    pub fn with_table_capacity(mut self, capacity: usize) -> Self {
        self.table_capacity = capacity;
        self
    }

    /// Create a new config with a custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
