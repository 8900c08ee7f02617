//! Reference game implementations.
//!
//! - `table`: explicit game trees for unit and property tests
//! - `nim`: a small real game with transpositions and forced moves

pub mod nim;
pub mod table;
