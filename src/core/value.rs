//! Search values: a scalar utility plus an optional feature breakdown.
//!
//! Only the scalar takes part in comparisons. Features ride along so the
//! caller can see which heuristic terms produced a leaf value; values
//! with and without features compare freely.

use im::OrdMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Identifier of one heuristic feature.
pub type FeatureId = u32;

/// Feature contributions keyed by feature id.
/// Persistent map so values can be copied between table entries in O(1).
pub type Features = OrdMap<FeatureId, f64>;

/// Integer reward reported by the state machine at terminal states.
pub type Reward = i64;

/// Utility of a position for the searching role.
///
/// ## Example
///
/// ```
/// use ggp_search::core::{Features, Value};
///
/// let plain = Value::scalar(40.0);
/// let explained = Value::new(40.0, Some(Features::unit(0, 1.0)));
///
/// assert_eq!(plain, explained);
/// assert!(Value::scalar(10.0) < plain);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Value {
    scalar: f64,
    features: Option<Features>,
}

impl Value {
    /// Create a value from a scalar and optional features.
    #[must_use]
    pub fn new(scalar: f64, features: Option<Features>) -> Self {
        Self { scalar, features }
    }

    /// Create a value without features.
    #[must_use]
    pub fn scalar(scalar: f64) -> Self {
        Self::new(scalar, None)
    }

    /// Create a value from an integer reward.
    #[must_use]
    pub fn from_reward(reward: Reward, features: Option<Features>) -> Self {
        Self::new(reward as f64, features)
    }

    /// The lowest possible value, carrying `features` as its template.
    #[must_use]
    pub fn neg_infinity(features: Option<Features>) -> Self {
        Self::new(f64::NEG_INFINITY, features)
    }

    /// The highest possible value, carrying `features` as its template.
    #[must_use]
    pub fn infinity(features: Option<Features>) -> Self {
        Self::new(f64::INFINITY, features)
    }

    /// The scalar utility.
    #[inline]
    #[must_use]
    pub fn utility(&self) -> f64 {
        self.scalar
    }

    /// The feature breakdown, if a heuristic supplied one.
    #[must_use]
    pub fn features(&self) -> Option<&Features> {
        self.features.as_ref()
    }

    /// Total order on the scalar component.
    #[must_use]
    pub fn cmp_utility(&self, other: &Self) -> Ordering {
        self.scalar.total_cmp(&other.scalar)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.scalar == other.scalar
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.scalar.partial_cmp(&other.scalar)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.scalar)
    }
}

/// Copy of `features` with every contribution set to zero.
#[must_use]
pub fn zeroed(features: &Features) -> Features {
    features.keys().map(|&id| (id, 0.0)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_ignores_features() {
        let a = Value::new(50.0, Some(Features::unit(1, 9.0)));
        let b = Value::new(50.0, None);
        let c = Value::new(60.0, Some(Features::unit(1, -3.0)));

        assert_eq!(a, b);
        assert!(a < c);
        assert!(c > b);
        assert_eq!(a.cmp_utility(&c), Ordering::Less);
    }

    #[test]
    fn test_infinite_bounds() {
        let low = Value::neg_infinity(None);
        let high = Value::infinity(None);
        let mid = Value::from_reward(100, None);

        assert!(low < mid);
        assert!(mid < high);
        assert!(low.utility().is_infinite());
    }

    #[test]
    fn test_accessors() {
        let features: Features = [(0u32, 0.5), (3u32, 1.5)].into_iter().collect();
        let value = Value::new(12.5, Some(features.clone()));

        assert_eq!(value.utility(), 12.5);
        assert_eq!(value.features(), Some(&features));
        assert!(Value::scalar(1.0).features().is_none());
    }

    #[test]
    fn test_zeroed_template() {
        let features: Features = [(0u32, 0.5), (3u32, 1.5)].into_iter().collect();
        let template = zeroed(&features);

        assert_eq!(template.len(), 2);
        assert_eq!(template.get(&0), Some(&0.0));
        assert_eq!(template.get(&3), Some(&0.0));
    }

    #[test]
    fn test_serialization() {
        let value = Value::new(3.0, Some(Features::unit(2, 0.25)));
        let json = serde_json::to_string(&value).unwrap();
        let deserialized: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value, deserialized);
        assert_eq!(deserialized.features(), value.features());
    }
}
