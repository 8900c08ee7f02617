//! # ggp-search
//!
//! Anytime game-tree search for general game playing.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: The search only sees opaque facts and moves.
//!    Everything game-specific lives behind `StateMachine` and `GameRules`.
//!
//! 2. **N-Role First**: Legal moves, rewards and move vectors are stored
//!    per role. Nothing assumes two players.
//!
//! 3. **Anytime**: A legal answer exists after the first depth iteration
//!    and improves with each one until the caller cancels.
//!
//! ## Architecture
//!
//! - **Canonical States**: A state is a set of fact ids with an
//!   order-independent cached hash, so transpositions share table entries.
//!
//! - **Persistent Data Structures**: O(1) cloning of states and feature
//!   maps via `im-rs`.
//!
//! - **Bounded Memory**: Transposition table and state machine cache are
//!   fixed-capacity FIFO caches.
//!
//! ## Modules
//!
//! - `core`: Roles, states, moves, values, RNG
//! - `cache`: Fixed-capacity FIFO cache
//! - `rules`: StateMachine and GameRules traits, memoizing decorator
//! - `heuristic`: Leaf evaluation contract and stock heuristics
//! - `search`: Iterative-deepening alpha-beta
//! - `games`: Reference games (explicit tables, Nim)

pub mod cache;
pub mod core;
pub mod error;
pub mod games;
pub mod heuristic;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    FactId, FeatureId, Features, LegalMoves, Move, MoveSet, MoveVector, Reward, RoleId, RoleMap,
    SearchRng, State, TurnTakers, Value,
};

pub use crate::error::{Error, Result};

pub use crate::cache::FifoCache;

pub use crate::rules::{CachedStateMachine, GameInfo, GameRules, StateMachine};

pub use crate::heuristic::{
    ConstantHeuristic, FactFraction, GoalHeuristic, Heuristic, MaxHeuristic, MinHeuristic,
    ScaledFeature,
};

pub use crate::search::{
    Bound, CancelToken, Cancellation, Deadline, Depth, ForcedMovePolicy, ResponseSink,
    SearchConfig, SearchEngine, SearchResponse, SearchStats, TranspositionTable,
};
