//! Memoizing state machine decorator.
//!
//! Reasoning over game rules is usually far more expensive than a hash
//! lookup, and iterative deepening asks the same questions about the same
//! states on every pass. `CachedStateMachine` remembers the answers per
//! state in a bounded `FifoCache`; next states are remembered per move
//! vector inside each state's record.
//!
//! Failed queries are not remembered.

use rustc_hash::FxHashMap;

use super::machine::StateMachine;
use crate::cache::FifoCache;
use crate::core::{LegalMoves, MoveVector, Reward, RoleMap, State};
use crate::error::Result;

/// Answers remembered for one state.
#[derive(Clone, Debug, Default)]
pub struct LookupRecord {
    /// Whether the state is terminal.
    pub terminal: Option<bool>,

    /// Rewards per role.
    pub goals: Option<RoleMap<Reward>>,

    /// Legal moves per role.
    pub legal: Option<LegalMoves>,

    /// Successor per joint move.
    pub next: FxHashMap<MoveVector, State>,
}

/// State machine wrapper that memoizes every query by state.
///
/// ## Example
///
/// ```
/// use ggp_search::games::nim::Nim;
/// use ggp_search::rules::{CachedStateMachine, StateMachine};
///
/// let nim = Nim::new(&[1, 2]);
/// let root = nim.initial_state();
/// let mut machine = CachedStateMachine::new(nim);
///
/// let first = machine.legal_moves(&root).unwrap();
/// let second = machine.legal_moves(&root).unwrap();
/// assert_eq!(first, second);
/// assert_eq!(machine.cache().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct CachedStateMachine<M> {
    inner: M,
    lookup: FifoCache<State, LookupRecord>,
}

impl<M: StateMachine> CachedStateMachine<M> {
    /// Wrap a machine with a cache of default capacity.
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            lookup: FifoCache::default(),
        }
    }

    /// Wrap a machine with a cache holding at most `capacity` states.
    pub fn with_capacity(inner: M, capacity: usize) -> Self {
        Self {
            inner,
            lookup: FifoCache::new(capacity),
        }
    }

    /// The wrapped machine.
    pub fn inner(&self) -> &M {
        &self.inner
    }

    /// The wrapped machine, mutably.
    pub fn inner_mut(&mut self) -> &mut M {
        &mut self.inner
    }

    /// Unwrap, discarding the cache.
    pub fn into_inner(self) -> M {
        self.inner
    }

    /// The per-state answer cache.
    pub fn cache(&self) -> &FifoCache<State, LookupRecord> {
        &self.lookup
    }

    /// Forget every remembered answer.
    pub fn clear(&mut self) {
        self.lookup.clear();
    }

    fn record(&mut self, state: &State) -> &mut LookupRecord {
        self.lookup.get_or_insert_with(state.clone(), LookupRecord::default)
    }
}

impl<M: StateMachine> StateMachine for CachedStateMachine<M> {
    fn is_terminal(&mut self, state: &State) -> Result<bool> {
        if let Some(terminal) = self.lookup.get(state).and_then(|r| r.terminal) {
            return Ok(terminal);
        }
        let terminal = self.inner.is_terminal(state)?;
        self.record(state).terminal = Some(terminal);
        Ok(terminal)
    }

    fn legal_moves(&mut self, state: &State) -> Result<LegalMoves> {
        if let Some(legal) = self.lookup.get(state).and_then(|r| r.legal.as_ref()) {
            return Ok(legal.clone());
        }
        let legal = self.inner.legal_moves(state)?;
        self.record(state).legal = Some(legal.clone());
        Ok(legal)
    }

    fn next_state(&mut self, state: &State, moves: &MoveVector) -> Result<State> {
        if let Some(next) = self.lookup.get(state).and_then(|r| r.next.get(moves)) {
            return Ok(next.clone());
        }
        let next = self.inner.next_state(state, moves)?;
        self.record(state).next.insert(moves.clone(), next.clone());
        Ok(next)
    }

    fn goals(&mut self, state: &State) -> Result<RoleMap<Reward>> {
        if let Some(goals) = self.lookup.get(state).and_then(|r| r.goals.as_ref()) {
            return Ok(goals.clone());
        }
        let goals = self.inner.goals(state)?;
        self.record(state).goals = Some(goals.clone());
        Ok(goals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Move, MoveSet};
    use crate::error::Error;
    use smallvec::smallvec;

    /// Counting machine: state {n} steps to {n + 1}, terminal at 3.
    #[derive(Default)]
    struct Counter {
        calls: usize,
        fail_goals: bool,
    }

    impl StateMachine for Counter {
        fn is_terminal(&mut self, state: &State) -> Result<bool> {
            self.calls += 1;
            Ok(state.contains(3))
        }

        fn legal_moves(&mut self, _state: &State) -> Result<LegalMoves> {
            self.calls += 1;
            let moves: MoveSet = smallvec![Move(0)];
            Ok(RoleMap::from_vec(vec![moves]))
        }

        fn next_state(&mut self, state: &State, _moves: &MoveVector) -> Result<State> {
            self.calls += 1;
            let n = state.facts().next().unwrap_or(0);
            Ok(State::from_facts([n + 1]))
        }

        fn goals(&mut self, _state: &State) -> Result<RoleMap<Reward>> {
            self.calls += 1;
            if self.fail_goals {
                return Err(Error::machine("goal query failed"));
            }
            Ok(RoleMap::from_vec(vec![100]))
        }
    }

    #[test]
    fn test_queries_are_memoized() {
        let mut machine = CachedStateMachine::new(Counter::default());
        let state = State::from_facts([1]);
        let joint = MoveVector::from_slice(&[Move(0)]);

        for _ in 0..3 {
            assert!(!machine.is_terminal(&state).unwrap());
            assert_eq!(machine.legal_moves(&state).unwrap().role_count(), 1);
            assert_eq!(machine.next_state(&state, &joint).unwrap(), State::from_facts([2]));
            assert_eq!(machine.goals(&state).unwrap()[crate::core::RoleId::new(0)], 100);
        }

        assert_eq!(machine.inner().calls, 4);
        assert_eq!(machine.cache().len(), 1);
    }

    #[test]
    fn test_next_state_keyed_by_move_vector() {
        let mut machine = CachedStateMachine::new(Counter::default());
        let state = State::from_facts([0]);

        machine.next_state(&state, &MoveVector::from_slice(&[Move(0)])).unwrap();
        machine.next_state(&state, &MoveVector::from_slice(&[Move(1)])).unwrap();
        machine.next_state(&state, &MoveVector::from_slice(&[Move(0)])).unwrap();

        assert_eq!(machine.inner().calls, 2);
        assert_eq!(machine.cache().get(&state).map(|r| r.next.len()), Some(2));
    }

    #[test]
    fn test_eviction_forgets_answers() {
        let mut machine = CachedStateMachine::with_capacity(Counter::default(), 1);
        let a = State::from_facts([0]);
        let b = State::from_facts([1]);

        machine.is_terminal(&a).unwrap();
        machine.is_terminal(&b).unwrap();
        machine.is_terminal(&a).unwrap();

        assert_eq!(machine.inner().calls, 3);
        assert_eq!(machine.cache().len(), 1);
    }

    #[test]
    fn test_errors_are_not_cached() {
        let mut machine = CachedStateMachine::new(Counter {
            calls: 0,
            fail_goals: true,
        });
        let state = State::from_facts([3]);

        assert!(machine.goals(&state).is_err());
        machine.inner_mut().fail_goals = false;
        assert!(machine.goals(&state).is_ok());
        assert_eq!(machine.inner().calls, 2);
    }

    #[test]
    fn test_clear() {
        let mut machine = CachedStateMachine::new(Counter::default());
        let state = State::from_facts([0]);

        machine.is_terminal(&state).unwrap();
        machine.clear();
        machine.is_terminal(&state).unwrap();

        assert_eq!(machine.into_inner().calls, 2);
    }
}
