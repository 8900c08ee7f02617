//! Stock heuristics.
//!
//! - `ConstantHeuristic`: the same estimate everywhere
//! - `GoalHeuristic`: the role's current goal value as reported by the rules
//! - `MaxHeuristic` / `MinHeuristic`: a scaled feature mapped into the
//!   open reward interval, rewarding high or low feature values
//! - `FactFraction`: a feature measuring how many of a set of facts hold

use serde::{Deserialize, Serialize};

use super::traits::{Heuristic, ScaledFeature};
use crate::core::{FactId, FeatureId, Features, Reward, RoleId, State};
use crate::error::{Error, Result};
use crate::rules::{GameRules, StateMachine};

/// Heuristic that returns the same value for every state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConstantHeuristic {
    value: f64,
}

impl ConstantHeuristic {
    /// Create a constant heuristic.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl Heuristic for ConstantHeuristic {
    fn value(&mut self, _state: &State) -> Result<f64> {
        Ok(self.value)
    }

    fn features(&mut self, _state: &State) -> Result<Features> {
        Ok(Features::unit(0, 1.0))
    }
}

/// Heuristic that reads the role's goal value in the current state.
///
/// Many games define intermediate goal values (points so far), which makes
/// the goal relation a cheap estimate of the final outcome.
#[derive(Clone, Debug)]
pub struct GoalHeuristic<M> {
    machine: M,
    role: RoleId,
}

impl<M: StateMachine> GoalHeuristic<M> {
    /// Create a goal heuristic querying its own machine.
    pub fn new(machine: M, role: RoleId) -> Self {
        Self { machine, role }
    }
}

impl<M: StateMachine> Heuristic for GoalHeuristic<M> {
    fn value(&mut self, state: &State) -> Result<f64> {
        let goals = self.machine.goals(state)?;
        goals
            .get(self.role)
            .map(|&reward| reward as f64)
            .ok_or(Error::UnknownRole {
                role: self.role,
                role_count: goals.role_count(),
            })
    }

    fn features(&mut self, _state: &State) -> Result<Features> {
        Ok(Features::new())
    }
}

/// Feature: fraction of a fixed set of facts that hold in the state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactFraction {
    id: FeatureId,
    facts: Vec<FactId>,
}

impl FactFraction {
    /// Create the feature over `facts`.
    pub fn new(id: FeatureId, facts: impl IntoIterator<Item = FactId>) -> Self {
        Self {
            id,
            facts: facts.into_iter().collect(),
        }
    }
}

impl ScaledFeature for FactFraction {
    fn id(&self) -> FeatureId {
        self.id
    }

    fn scaled_value(&mut self, state: &State) -> Result<f64> {
        if self.facts.is_empty() {
            return Ok(0.0);
        }
        let present = self.facts.iter().filter(|&&f| state.contains(f)).count();
        Ok(present as f64 / self.facts.len() as f64)
    }
}

/// Strictly-inside-the-reward-range mapping shared by Max and Min.
#[derive(Clone, Copy, Debug, PartialEq)]
struct RewardScale {
    lowest: Reward,
    span: Reward,
}

impl RewardScale {
    fn new(rules: &impl GameRules) -> Self {
        let lowest = rules.lowest_reward();
        Self {
            lowest,
            span: rules.highest_reward() - lowest - 2,
        }
    }

    fn apply(self, v: f64) -> f64 {
        1.0 + self.lowest as f64 + self.span as f64 * v
    }
}

/// Prefers states where the feature is high.
///
/// Maps `v` to `1 + lowest + (highest - lowest - 2) * v`, so estimates
/// never tie with a real win or loss.
#[derive(Clone, Debug)]
pub struct MaxHeuristic<F> {
    feature: F,
    scale: RewardScale,
}

impl<F: ScaledFeature> MaxHeuristic<F> {
    /// Create the heuristic for a game's reward range.
    pub fn new(feature: F, rules: &impl GameRules) -> Self {
        Self {
            feature,
            scale: RewardScale::new(rules),
        }
    }
}

impl<F: ScaledFeature> Heuristic for MaxHeuristic<F> {
    fn value(&mut self, state: &State) -> Result<f64> {
        let v = self.feature.scaled_value(state)?;
        Ok(self.scale.apply(v))
    }

    fn features(&mut self, state: &State) -> Result<Features> {
        let v = self.feature.scaled_value(state)?;
        Ok(Features::unit(self.feature.id(), v))
    }
}

/// Prefers states where the feature is low.
#[derive(Clone, Debug)]
pub struct MinHeuristic<F> {
    feature: F,
    scale: RewardScale,
}

impl<F: ScaledFeature> MinHeuristic<F> {
    /// Create the heuristic for a game's reward range.
    pub fn new(feature: F, rules: &impl GameRules) -> Self {
        Self {
            feature,
            scale: RewardScale::new(rules),
        }
    }
}

impl<F: ScaledFeature> Heuristic for MinHeuristic<F> {
    fn value(&mut self, state: &State) -> Result<f64> {
        let v = self.feature.scaled_value(state)?;
        Ok(self.scale.apply(1.0 - v))
    }

    fn features(&mut self, state: &State) -> Result<Features> {
        let v = self.feature.scaled_value(state)?;
        Ok(Features::unit(self.feature.id(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::nim::Nim;
    use crate::rules::GameInfo;

    #[test]
    fn test_constant() {
        let mut h = ConstantHeuristic::new(50.0);
        let state = State::from_facts([1]);

        assert_eq!(h.value(&state).unwrap(), 50.0);
        assert_eq!(h.features(&state).unwrap().get(&0), Some(&1.0));
    }

    #[test]
    fn test_goal_heuristic() {
        let nim = Nim::new(&[0, 0]);
        let terminal = nim.initial_state();

        // Role 0 is on turn with no stones left, so role 1 took the last one
        let mut h = GoalHeuristic::new(nim, RoleId::new(1));
        assert_eq!(h.value(&terminal).unwrap(), 100.0);
        assert!(h.features(&terminal).unwrap().is_empty());
    }

    #[test]
    fn test_goal_heuristic_unknown_role() {
        let nim = Nim::new(&[0]);
        let terminal = nim.initial_state();

        let mut h = GoalHeuristic::new(nim, RoleId::new(5));
        assert!(matches!(
            h.value(&terminal),
            Err(Error::UnknownRole { role_count: 2, .. })
        ));
    }

    #[test]
    fn test_fact_fraction() {
        let mut feature = FactFraction::new(7, [1, 2, 3, 4]);
        let state = State::from_facts([2, 4, 9]);

        assert_eq!(feature.id(), 7);
        assert_eq!(feature.scaled_value(&state).unwrap(), 0.5);
        assert_eq!(FactFraction::new(0, []).scaled_value(&state).unwrap(), 0.0);
    }

    #[test]
    fn test_max_and_min_stay_inside_reward_range() {
        let info = GameInfo::new(2, 0, 100);
        let all = State::from_facts([1, 2]);
        let none = State::new();

        let mut max = MaxHeuristic::new(FactFraction::new(3, [1, 2]), &info);
        assert_eq!(max.value(&all).unwrap(), 99.0);
        assert_eq!(max.value(&none).unwrap(), 1.0);
        assert_eq!(max.features(&all).unwrap().get(&3), Some(&1.0));

        let mut min = MinHeuristic::new(FactFraction::new(3, [1, 2]), &info);
        assert_eq!(min.value(&all).unwrap(), 1.0);
        assert_eq!(min.value(&none).unwrap(), 99.0);
    }
}
