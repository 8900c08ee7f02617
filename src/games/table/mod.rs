//! Explicit game trees for exercising the search.
//!
//! A `TableGame` is defined node by node:
//! - turn nodes, where one role picks a move and the others wait
//! - forced nodes, where every role has a single move
//! - joint nodes, with arbitrary per-role legal sets (simultaneous moves)
//! - terminal nodes with fixed rewards
//!
//! Supports any number of roles.

mod game;

pub use game::{NodeId, TableGame, TableGameBuilder, NOOP};
