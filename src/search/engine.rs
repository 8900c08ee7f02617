//! Iterative-deepening alpha-beta search.
//!
//! Each call to [`SearchEngine::search`] is one decision episode: a fresh
//! transposition table, a reseeded move-ordering RNG, and a sequence of
//! depth iterations that each report an answer through the sink.

use std::time::Instant;

use log::{debug, trace, warn};

use crate::core::{zeroed, LegalMoves, Move, MoveSet, MoveVector, RoleId, SearchRng, State, Value};
use crate::error::{Error, Result};
use crate::heuristic::Heuristic;
use crate::rules::{GameRules, StateMachine};

use super::config::SearchConfig;
use super::control::{Cancellation, DiscardResponses, NeverStop, ResponseSink};
use super::depth::Depth;
use super::response::SearchResponse;
use super::stats::SearchStats;
use super::table::{Bound, TranspositionEntry, TranspositionTable};

/// Why the recursion stopped before producing a value.
enum Abort {
    Cancelled,
    Fatal(Error),
}

impl From<Error> for Abort {
    fn from(error: Error) -> Self {
        Abort::Fatal(error)
    }
}

type NodeResult<T = Value> = std::result::Result<T, Abort>;

/// Alpha-beta search context.
///
/// Generic over the state machine and the rules describing it. Owns the
/// transposition table of the current episode.
///
/// ## Example
///
/// ```
/// use ggp_search::games::nim::Nim;
/// use ggp_search::search::{SearchConfig, SearchEngine};
///
/// let nim = Nim::new(&[1, 2]);
/// let root = nim.initial_state();
/// let mut engine = SearchEngine::new(nim.clone(), nim, SearchConfig::default());
///
/// let answer = engine.search(&root).unwrap().unwrap();
/// assert_eq!(answer.best_move, Nim::take(1, 1));
/// assert_eq!(answer.value.utility(), 100.0);
/// ```
pub struct SearchEngine<M: StateMachine, R: GameRules> {
    /// State machine queried while descending.
    machine: M,

    /// Role count, reward range and turn-taker classification.
    rules: R,

    /// Search configuration.
    config: SearchConfig,

    /// Leaf evaluator. Without one every pass searches to terminal states.
    heuristic: Option<Box<dyn Heuristic>>,

    /// Polled at every node.
    cancellation: Box<dyn Cancellation>,

    /// Receives one response per completed pass.
    sink: Box<dyn ResponseSink>,

    /// Move-ordering RNG.
    rng: SearchRng,

    /// Transposition table of the current episode.
    table: TranspositionTable,

    /// Counters of the current pass.
    stats: SearchStats,
}

impl<M: StateMachine, R: GameRules> SearchEngine<M, R> {
    /// Create a new search context.
    pub fn new(machine: M, rules: R, config: SearchConfig) -> Self {
        Self {
            machine,
            rules,
            rng: SearchRng::new(config.seed),
            table: TranspositionTable::new(config.table_capacity),
            config,
            heuristic: None,
            cancellation: Box::new(NeverStop),
            sink: Box::new(DiscardResponses),
            stats: SearchStats::default(),
        }
    }

    /// Evaluate depth-limited leaves with `heuristic` and deepen iteratively.
    pub fn with_heuristic<H: Heuristic + 'static>(mut self, heuristic: H) -> Self {
        self.heuristic = Some(Box::new(heuristic));
        self
    }

    /// Set the cancellation hook.
    pub fn with_cancellation<C: Cancellation + 'static>(mut self, cancellation: C) -> Self {
        self.cancellation = Box::new(cancellation);
        self
    }

    /// Set the sink receiving each pass's answer.
    pub fn with_sink<S: ResponseSink + 'static>(mut self, sink: S) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Get the config.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Get the rules.
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Get the state machine.
    pub fn machine(&self) -> &M {
        &self.machine
    }

    /// Get mutable access to the state machine.
    pub fn machine_mut(&mut self) -> &mut M {
        &mut self.machine
    }

    /// Transposition table left by the last search.
    pub fn transposition_table(&self) -> &TranspositionTable {
        &self.table
    }

    /// Counters of the last pass that ran, completed or not.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Choose a move for the configured role from `root`.
    ///
    /// Runs depth iterations until the game is solved from `root`, the
    /// configured max depth is reached, or cancellation is requested.
    /// Every completed iteration is reported to the sink; the last one is
    /// also returned. `Ok(None)` means the first iteration was cancelled.
    pub fn search(&mut self, root: &State) -> Result<Option<SearchResponse>> {
        let role = self.config.role;
        if !self.rules.has_role(role) {
            return Err(Error::UnknownRole {
                role,
                role_count: self.rules.role_count(),
            });
        }
        if self.machine.is_terminal(root)? {
            return Err(Error::TerminalRoot);
        }

        self.table = TranspositionTable::new(self.config.table_capacity);
        self.rng.reset();
        self.stats.reset();
        self.cancellation.begin();

        if self.heuristic.is_none() {
            return self.search_pass(root, Depth::ToTerminal);
        }

        let mut latest = None;
        let mut plies = 1;
        loop {
            match self.search_pass(root, Depth::Plies(plies))? {
                None => {
                    debug!("search cancelled during depth {}", plies);
                    break;
                }
                Some(response) => {
                    let solved = response.is_exhaustive();
                    latest = Some(response);
                    if solved {
                        debug!("game solved from root at depth {}", plies);
                        break;
                    }
                }
            }

            if self.config.max_depth.is_some_and(|max| plies >= max) {
                break;
            }
            plies += 1;
        }

        Ok(latest)
    }

    /// One complete search from the root at a fixed depth.
    ///
    /// Returns `None` if the pass was cancelled.
    fn search_pass(&mut self, root: &State, depth: Depth) -> Result<Option<SearchResponse>> {
        let start = Instant::now();
        self.stats.reset();

        let template = match self.heuristic.as_mut() {
            Some(heuristic) => Some(zeroed(&heuristic.features(root)?)),
            None => None,
        };
        let alpha = Value::neg_infinity(template.clone());
        let beta = Value::infinity(template);

        let value = match self.alpha_beta(root, depth, alpha, beta) {
            Ok(value) => value,
            Err(Abort::Cancelled) => return Ok(None),
            Err(Abort::Fatal(error)) => return Err(error),
        };
        if self.cancellation.should_stop() {
            return Ok(None);
        }

        let best_move = self.root_move(root)?;
        if self.cancellation.should_stop() {
            return Ok(None);
        }

        let response = SearchResponse {
            best_move,
            value,
            depth,
            stats: self.stats.clone(),
            elapsed: start.elapsed(),
        };
        debug!("{}", response);
        self.sink.report(response.clone());

        Ok(Some(response))
    }

    /// Move to report for the root.
    ///
    /// The table's best move when the root is our decision, otherwise our
    /// first legal move.
    fn root_move(&mut self, root: &State) -> Result<Move> {
        let role = self.config.role;
        let legal = self.machine.legal_moves(root)?;
        self.check_legal(&legal)?;

        let ours = self.rules.turn_takers(&legal).contains(&role);
        if let Some(best) = self.table.get(root).and_then(|entry| entry.best_move) {
            if ours {
                return Ok(best);
            }
        }

        legal[role]
            .first()
            .copied()
            .ok_or(Error::NoLegalMoves { role })
    }

    fn alpha_beta(&mut self, state: &State, depth: Depth, alpha: Value, beta: Value) -> NodeResult {
        self.stats.states_visited += 1;

        let mut hint = None;
        if let Some(entry) = self.table.get(state) {
            if let Some(value) = entry.probe(depth, &alpha, &beta) {
                trace!("table cutoff at {} ({:?}, value {})", state, entry.bound, value);
                return Ok(value);
            }
            hint = entry.best_move;
        }

        self.poll()?;

        if self.machine.is_terminal(state)? {
            self.poll()?;
            return self.evaluate_terminal(state, depth, hint);
        }

        if depth.is_horizon() {
            if let Some(heuristic) = self.heuristic.as_mut() {
                self.stats.heuristic_evaluations += 1;
                let value = Value::new(heuristic.value(state)?, Some(heuristic.features(state)?));
                self.table.store(
                    state.clone(),
                    TranspositionEntry {
                        depth,
                        bound: Bound::Exact,
                        value: value.clone(),
                        best_move: hint,
                    },
                );
                return Ok(value);
            }
        }

        let legal = self.machine.legal_moves(state)?;
        self.poll()?;
        self.check_legal(&legal)?;

        let role = self.config.role;
        let turn_takers = self.rules.turn_takers(&legal);
        match turn_takers.as_slice() {
            [] => self.forced(state, &legal, depth, alpha, beta),
            &[taker] => {
                let candidates = self.order_moves(&legal[taker], hint);
                if taker == role {
                    self.maximize(state, &legal, taker, candidates, hint, depth, alpha, beta)
                } else {
                    self.minimize(state, &legal, taker, candidates, hint, depth, alpha, beta)
                }
            }
            // Simultaneous: only our own moves are enumerated, every other
            // role plays its first legal move.
            _ => {
                let candidates = self.order_moves(&legal[role], hint);
                self.maximize(state, &legal, role, candidates, hint, depth, alpha, beta)
            }
        }
    }

    fn evaluate_terminal(&mut self, state: &State, depth: Depth, hint: Option<Move>) -> NodeResult {
        self.stats.terminal_evaluations += 1;

        let goals = self.machine.goals(state)?;
        let reward = match goals.get(self.config.role) {
            Some(&reward) => reward,
            None => {
                warn!("goals reported for {} roles", goals.role_count());
                return Err(Error::RoleCountMismatch {
                    expected: self.rules.role_count(),
                    actual: goals.role_count(),
                }
                .into());
            }
        };
        let features = match self.heuristic.as_mut() {
            Some(heuristic) => Some(heuristic.features(state)?),
            None => None,
        };

        let value = Value::from_reward(reward, features);
        self.table.store(
            state.clone(),
            TranspositionEntry {
                depth,
                bound: Bound::Exact,
                value: value.clone(),
                best_move: hint,
            },
        );
        Ok(value)
    }

    /// Every role has a single move. No entry is stored for the state.
    fn forced(
        &mut self,
        state: &State,
        legal: &LegalMoves,
        depth: Depth,
        alpha: Value,
        beta: Value,
    ) -> NodeResult {
        let joint = MoveVector::first_legal(legal).ok_or(Error::NoLegalMoves {
            role: self.config.role,
        })?;
        let next = self.machine.next_state(state, &joint)?;
        self.poll()?;

        let child_depth = if self.config.forced_moves.is_free_for(self.config.role) {
            depth
        } else {
            depth.next()
        };
        trace!("forced move at {} to {}", state, next);

        self.alpha_beta(&next, child_depth, alpha, beta)
    }

    #[allow(clippy::too_many_arguments)]
    fn maximize(
        &mut self,
        state: &State,
        legal: &LegalMoves,
        taker: RoleId,
        candidates: MoveSet,
        hint: Option<Move>,
        depth: Depth,
        mut alpha: Value,
        beta: Value,
    ) -> NodeResult {
        let mut bound = Bound::FailLow;
        let mut best = hint;

        for mv in candidates {
            let next = self.child(state, legal, taker, mv)?;
            let value = self.alpha_beta(&next, depth.next(), alpha.clone(), beta.clone())?;
            self.poll()?;

            if value >= beta {
                self.table.store(
                    state.clone(),
                    TranspositionEntry {
                        depth,
                        bound: Bound::FailHigh,
                        value: beta.clone(),
                        best_move: Some(mv),
                    },
                );
                return Ok(beta);
            }
            if value > alpha {
                alpha = value;
                best = Some(mv);
                bound = Bound::Exact;
            }
        }

        self.table.store(
            state.clone(),
            TranspositionEntry {
                depth,
                bound,
                value: alpha.clone(),
                best_move: best,
            },
        );
        Ok(alpha)
    }

    #[allow(clippy::too_many_arguments)]
    fn minimize(
        &mut self,
        state: &State,
        legal: &LegalMoves,
        taker: RoleId,
        candidates: MoveSet,
        hint: Option<Move>,
        depth: Depth,
        alpha: Value,
        mut beta: Value,
    ) -> NodeResult {
        let mut bound = Bound::FailHigh;
        let mut best = hint;
        let breadth = self.config.max_opponent_moves.map_or(usize::MAX, |cap| cap.max(1));

        for mv in candidates.into_iter().take(breadth) {
            let next = self.child(state, legal, taker, mv)?;
            let value = self.alpha_beta(&next, depth.next(), alpha.clone(), beta.clone())?;
            self.poll()?;

            if value <= alpha {
                self.table.store(
                    state.clone(),
                    TranspositionEntry {
                        depth,
                        bound: Bound::FailLow,
                        value: alpha.clone(),
                        best_move: Some(mv),
                    },
                );
                return Ok(alpha);
            }
            if value < beta {
                beta = value;
                best = Some(mv);
                bound = Bound::Exact;
            }
        }

        self.table.store(
            state.clone(),
            TranspositionEntry {
                depth,
                bound,
                value: beta.clone(),
                best_move: best,
            },
        );
        Ok(beta)
    }

    /// State reached when `taker` plays `mv` and everyone else plays
    /// their first legal move.
    fn child(&mut self, state: &State, legal: &LegalMoves, taker: RoleId, mv: Move) -> NodeResult<State> {
        let mut joint = MoveVector::first_legal(legal).ok_or(Error::NoLegalMoves { role: taker })?;
        joint.set(taker, mv);
        let next = self.machine.next_state(state, &joint)?;
        self.poll()?;
        Ok(next)
    }

    /// Shuffle candidates, then move the table's hint to the front.
    fn order_moves(&mut self, moves: &MoveSet, hint: Option<Move>) -> MoveSet {
        let mut ordered = moves.clone();
        self.rng.shuffle(&mut ordered);
        if let Some(hint) = hint {
            if let Some(pos) = ordered.iter().position(|&mv| mv == hint) {
                ordered[..=pos].rotate_right(1);
            }
        }
        ordered
    }

    fn check_legal(&self, legal: &LegalMoves) -> Result<()> {
        let expected = self.rules.role_count();
        if legal.role_count() != expected {
            warn!("legal moves reported for {} of {} roles", legal.role_count(), expected);
            return Err(Error::RoleCountMismatch {
                expected,
                actual: legal.role_count(),
            });
        }
        if let Some((role, _)) = legal.iter().find(|(_, moves)| moves.is_empty()) {
            warn!("{} has no legal move in a non-terminal state", role);
            return Err(Error::NoLegalMoves { role });
        }
        Ok(())
    }

    fn poll(&mut self) -> NodeResult<()> {
        if self.cancellation.should_stop() {
            Err(Abort::Cancelled)
        } else {
            Ok(())
        }
    }
}
