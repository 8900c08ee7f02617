//! Anytime alpha-beta search for ggp-search.
//!
//! ## Overview
//!
//! - **Iterative deepening**: depth 1, 2, 3, ... with a heuristic at the
//!   horizon, or a single pass to terminal states without one
//! - **Transposition table**: bounded FIFO table keyed by state, with
//!   exact/fail-low/fail-high entries and best-move hints
//! - **N-role games**: the configured role maximizes, any other single
//!   mover minimizes, simultaneous nodes fix other roles' moves
//! - **Anytime**: every completed depth reports a response to a sink;
//!   cancellation is polled and keeps the last response
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//!
//! use ggp_search::games::nim::Nim;
//! use ggp_search::heuristic::ConstantHeuristic;
//! use ggp_search::search::{Depth, SearchConfig, SearchEngine, SearchResponse};
//!
//! let nim = Nim::new(&[2, 3]);
//! let root = nim.initial_state();
//!
//! let reported: Arc<Mutex<Vec<SearchResponse>>> = Arc::default();
//! let sink = Arc::clone(&reported);
//!
//! let mut engine = SearchEngine::new(nim.clone(), nim, SearchConfig::default())
//!     .with_heuristic(ConstantHeuristic::new(50.0))
//!     .with_sink(move |response: SearchResponse| {
//!         if let Ok(mut reported) = sink.lock() {
//!             reported.push(response);
//!         }
//!     });
//!
//! let last = engine.search(&root).unwrap().unwrap();
//! assert!(last.is_exhaustive());
//!
//! let passes = reported.lock().unwrap().len() as u32;
//! assert_eq!(last.depth, Depth::Plies(passes));
//! ```

pub mod config;
pub mod control;
pub mod depth;
pub mod engine;
pub mod response;
pub mod stats;
pub mod table;

// Re-export main types
pub use config::{ForcedMovePolicy, SearchConfig};
pub use control::{CancelToken, Cancellation, Deadline, DiscardResponses, NeverStop, ResponseSink};
pub use depth::Depth;
pub use engine::SearchEngine;
pub use response::SearchResponse;
pub use stats::SearchStats;
pub use table::{Bound, TranspositionEntry, TranspositionTable};
