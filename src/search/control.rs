//! Hooks the caller uses to stop a search and receive its answers.
//!
//! A search never blocks on the caller. It polls a [`Cancellation`] at
//! every node and hands each finished iteration to a [`ResponseSink`], so
//! a game player can keep the latest answer and stop the search when its
//! clock runs out.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::response::SearchResponse;

/// Polled by the search to decide whether to abandon work.
pub trait Cancellation {
    /// True once the search should stop.
    fn should_stop(&mut self) -> bool;

    /// Called when a new search starts.
    fn begin(&mut self) {}
}

impl<F> Cancellation for F
where
    F: FnMut() -> bool,
{
    fn should_stop(&mut self) -> bool {
        self()
    }
}

/// Never cancels.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverStop;

impl Cancellation for NeverStop {
    fn should_stop(&mut self) -> bool {
        false
    }
}

/// Shared flag that cancels every search holding a clone.
///
/// ```
/// use ggp_search::search::{CancelToken, Cancellation};
///
/// let token = CancelToken::new();
/// let mut handle = token.clone();
/// assert!(!handle.should_stop());
///
/// token.cancel();
/// assert!(handle.should_stop());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create an untriggered token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// Whether cancellation was requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    /// Clear a previous request.
    pub fn reset(&self) {
        self.flag.store(false, Ordering::Release);
    }
}

impl Cancellation for CancelToken {
    fn should_stop(&mut self) -> bool {
        self.is_cancelled()
    }
}

/// Cancels once a time budget has elapsed since the search started.
#[derive(Clone, Copy, Debug)]
pub struct Deadline {
    budget: Duration,
    started: Instant,
}

impl Deadline {
    /// Create a deadline with the given budget.
    pub fn new(budget: Duration) -> Self {
        Self {
            budget,
            started: Instant::now(),
        }
    }

    /// The configured budget.
    #[must_use]
    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Time left before the deadline.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.budget.saturating_sub(self.started.elapsed())
    }
}

impl Cancellation for Deadline {
    fn should_stop(&mut self) -> bool {
        self.started.elapsed() >= self.budget
    }

    fn begin(&mut self) {
        self.started = Instant::now();
    }
}

/// Receives the answer of each completed iteration.
pub trait ResponseSink {
    /// Accept one response.
    fn report(&mut self, response: SearchResponse);
}

impl<F> ResponseSink for F
where
    F: FnMut(SearchResponse),
{
    fn report(&mut self, response: SearchResponse) {
        self(response)
    }
}

/// Drops every response.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiscardResponses;

impl ResponseSink for DiscardResponses {
    fn report(&mut self, _response: SearchResponse) {}
}
