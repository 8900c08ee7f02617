//! Bounded memoization.
//!
//! `FifoCache` backs both the search's transposition table and the
//! memoizing state machine decorator in `rules::cached`.

pub mod fifo;

pub use fifo::FifoCache;
