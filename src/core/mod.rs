//! Core types: roles, states, moves, values and the move-ordering RNG.
//!
//! These are the canonical encodings shared between the search and the
//! state machine. None of them know anything about a particular game.

pub mod moves;
pub mod rng;
pub mod role;
pub mod state;
pub mod value;

pub use moves::{LegalMoves, Move, MoveSet, MoveVector, TurnTakers};
pub use rng::SearchRng;
pub use role::{RoleId, RoleMap};
pub use state::{FactId, State};
pub use value::{zeroed, FeatureId, Features, Reward, Value};
