//! Heuristic traits.
//!
//! A heuristic stands in for the true game value at the depth horizon.
//! The search only consumes it: the scalar decides comparisons, the
//! features are carried along with the value for diagnostics.

use crate::core::{FeatureId, Features, State};
use crate::error::Result;

/// Approximate evaluation of non-terminal states.
///
/// Values should lie inside the game's reward range so they compare
/// sensibly against real terminal rewards. Any error is fatal for the
/// search that asked.
pub trait Heuristic {
    /// Estimated value of `state` for the searching role.
    fn value(&mut self, state: &State) -> Result<f64>;

    /// Per-feature decomposition of the estimate.
    fn features(&mut self, state: &State) -> Result<Features>;
}

impl<H: Heuristic + ?Sized> Heuristic for Box<H> {
    fn value(&mut self, state: &State) -> Result<f64> {
        (**self).value(state)
    }

    fn features(&mut self, state: &State) -> Result<Features> {
        (**self).features(state)
    }
}

/// A single measurable property of a state, normalized to `[0, 1]`.
pub trait ScaledFeature {
    /// Identifier reported in feature maps.
    fn id(&self) -> FeatureId;

    /// The property's value in `state`, scaled into `[0, 1]`.
    fn scaled_value(&mut self, state: &State) -> Result<f64>;
}
