//! Nim implementation.

use smallvec::SmallVec;

use crate::core::{FactId, LegalMoves, Move, MoveSet, MoveVector, Reward, RoleId, RoleMap, State};
use crate::error::{Error, Result};
use crate::rules::{GameRules, StateMachine};

/// Move played by the role that is not on turn.
pub const NOOP: Move = Move(0);

/// Reward for taking the last stone.
pub const WIN: Reward = 100;

/// Reward for the other player.
pub const LOSS: Reward = 0;

/// Fact ids 0 and 1 mark whose turn it is.
const FIRST_PILE_FACT: FactId = 2;

/// Two-player Nim: take any number of stones from one pile, and whoever
/// takes the last stone wins.
#[derive(Clone, Debug)]
pub struct Nim {
    initial: Vec<u8>,
    max_pile: u8,
}

impl Nim {
    /// Create a game with the given starting piles. Role 0 moves first.
    pub fn new(piles: &[u8]) -> Self {
        assert!(!piles.is_empty(), "Nim needs at least one pile");
        Self {
            initial: piles.to_vec(),
            max_pile: piles.iter().copied().max().unwrap_or(0),
        }
    }

    /// The starting position.
    #[must_use]
    pub fn initial_state(&self) -> State {
        self.state_of(&self.initial, RoleId::new(0))
    }

    /// Encode a position. Pile sizes must not exceed the largest starting pile.
    #[must_use]
    pub fn state_of(&self, piles: &[u8], mover: RoleId) -> State {
        let control = std::iter::once(mover.0 as FactId);
        let stones = piles
            .iter()
            .enumerate()
            .map(|(pile, &count)| self.pile_fact(pile, count));
        control.chain(stones).collect()
    }

    /// The move taking `count` stones from `pile`.
    #[must_use]
    pub fn take(pile: usize, count: u8) -> Move {
        Move(((pile as u32) << 8) | u32::from(count))
    }

    /// Decode a take move into (pile, count).
    #[must_use]
    pub fn decode(mv: Move) -> (usize, u8) {
        ((mv.0 >> 8) as usize, (mv.0 & 0xFF) as u8)
    }

    /// Current pile sizes.
    pub fn piles(&self, state: &State) -> Result<Vec<u8>> {
        (0..self.initial.len())
            .map(|pile| {
                (0..=self.max_pile)
                    .find(|&count| state.contains(self.pile_fact(pile, count)))
                    .ok_or_else(|| Error::machine(format!("pile {} missing from {}", pile, state)))
            })
            .collect()
    }

    /// Role whose turn it is.
    #[must_use]
    pub fn mover(&self, state: &State) -> RoleId {
        if state.contains(1) {
            RoleId::new(1)
        } else {
            RoleId::new(0)
        }
    }

    fn pile_fact(&self, pile: usize, count: u8) -> FactId {
        FIRST_PILE_FACT + (pile as FactId) * (u32::from(self.max_pile) + 1) + FactId::from(count)
    }

    fn other(role: RoleId) -> RoleId {
        RoleId::new(1 - role.0)
    }
}

impl StateMachine for Nim {
    fn is_terminal(&mut self, state: &State) -> Result<bool> {
        Ok(self.piles(state)?.iter().all(|&count| count == 0))
    }

    fn legal_moves(&mut self, state: &State) -> Result<LegalMoves> {
        let piles = self.piles(state)?;
        let mover = self.mover(state);

        let takes: MoveSet = piles
            .iter()
            .enumerate()
            .flat_map(|(pile, &count)| (1..=count).map(move |n| Nim::take(pile, n)))
            .collect();

        Ok(RoleMap::new(2, |role| {
            if role == mover {
                takes.clone()
            } else {
                SmallVec::from_slice(&[NOOP])
            }
        }))
    }

    fn next_state(&mut self, state: &State, moves: &MoveVector) -> Result<State> {
        let mover = self.mover(state);
        let mv = moves
            .get(mover)
            .ok_or_else(|| Error::machine("move vector does not cover the mover"))?;
        let (pile, count) = Nim::decode(mv);

        let mut piles = self.piles(state)?;
        match piles.get_mut(pile) {
            Some(stones) if count >= 1 && *stones >= count => *stones -= count,
            _ => return Err(Error::machine(format!("illegal move {} in {}", mv, state))),
        }

        Ok(self.state_of(&piles, Nim::other(mover)))
    }

    fn goals(&mut self, state: &State) -> Result<RoleMap<Reward>> {
        if !self.is_terminal(state)? {
            return Ok(RoleMap::with_value(2, (WIN + LOSS) / 2));
        }
        // The player who just moved took the last stone.
        let winner = Nim::other(self.mover(state));
        Ok(RoleMap::new(2, |role| if role == winner { WIN } else { LOSS }))
    }
}

impl GameRules for Nim {
    fn role_count(&self) -> usize {
        2
    }

    fn lowest_reward(&self) -> Reward {
        LOSS
    }

    fn highest_reward(&self) -> Reward {
        WIN
    }
}
