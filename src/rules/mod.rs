//! Game rule capabilities consumed by the search.
//!
//! - `StateMachine`: terminality, legal moves, transitions and rewards
//! - `GameRules`: role count, reward range, turn-taker classification
//! - `CachedStateMachine`: memoizing decorator over any `StateMachine`
//!
//! The search calls into these traits but never interprets game-specific
//! facts or moves directly.

pub mod cached;
pub mod game;
pub mod machine;

pub use cached::{CachedStateMachine, LookupRecord};
pub use game::{GameInfo, GameRules};
pub use machine::StateMachine;
