//! State machine trait: the game's transition oracle.
//!
//! Implementations answer four questions about canonical states:
//! - Is the game over?
//! - What may each role do?
//! - What state follows a joint move?
//! - What does each role score?
//!
//! Methods take `&mut self` so implementations may memoize (see
//! `CachedStateMachine`) or drive an external reasoner that keeps its own
//! session state.

use crate::core::{LegalMoves, MoveVector, Reward, RoleMap, State};
use crate::error::Result;

/// Transition oracle over canonical states and moves.
///
/// ## Contract
///
/// - `legal_moves` returns one set per role, and every set is non-empty
///   when the state is not terminal.
/// - `next_state` is a pure, deterministic function of the state and the
///   full move vector.
pub trait StateMachine {
    /// Check if the game is over in `state`.
    fn is_terminal(&mut self, state: &State) -> Result<bool>;

    /// Legal moves of every role in `state`.
    fn legal_moves(&mut self, state: &State) -> Result<LegalMoves>;

    /// The state reached when every role plays its move in `moves`.
    fn next_state(&mut self, state: &State, moves: &MoveVector) -> Result<State>;

    /// Reward of every role in `state`.
    fn goals(&mut self, state: &State) -> Result<RoleMap<Reward>>;
}

impl<M: StateMachine + ?Sized> StateMachine for Box<M> {
    fn is_terminal(&mut self, state: &State) -> Result<bool> {
        (**self).is_terminal(state)
    }

    fn legal_moves(&mut self, state: &State) -> Result<LegalMoves> {
        (**self).legal_moves(state)
    }

    fn next_state(&mut self, state: &State, moves: &MoveVector) -> Result<State> {
        (**self).next_state(state, moves)
    }

    fn goals(&mut self, state: &State) -> Result<RoleMap<Reward>> {
        (**self).goals(state)
    }
}
