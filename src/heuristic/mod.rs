//! State evaluation at the search horizon.
//!
//! `Heuristic` is the consumption contract used by the search;
//! `builtin` provides simple ready-made heuristics.

pub mod builtin;
pub mod traits;

pub use builtin::{ConstantHeuristic, FactFraction, GoalHeuristic, MaxHeuristic, MinHeuristic};
pub use traits::{Heuristic, ScaledFeature};
