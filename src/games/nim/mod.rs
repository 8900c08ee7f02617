//! Nim for testing the search on a real game.
//!
//! - Two roles alternate; the role not on turn plays `NOOP`
//! - On your turn: take one or more stones from a single pile
//! - Taking the last stone wins (100), the other role gets 0
//!
//! Piles are encoded as facts, so move orders that reach the same piles
//! produce equal states and share transposition entries. A turn with a
//! single legal take is a forced node for the search.

mod game;

pub use game::{Nim, LOSS, NOOP, WIN};
