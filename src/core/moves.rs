//! Move representation: canonical move ids and per-role move vectors.
//!
//! A `Move` is an opaque id for one action of one role. The search never
//! interprets it, it only compares moves and passes them back to the
//! state machine inside a `MoveVector`, which holds exactly one move per
//! role in role order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::role::{RoleId, RoleMap};

/// Identifier of one action available to one role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Move(pub u32);

impl Move {
    /// Create a new move id.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw id.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Move({})", self.0)
    }
}

/// Legal moves of a single role.
/// SmallVec avoids heap allocation for the common small move lists.
pub type MoveSet = SmallVec<[Move; 8]>;

/// Legal-move profile: one `MoveSet` per role.
pub type LegalMoves = RoleMap<MoveSet>;

/// Roles that have a real choice in a legal-move profile.
pub type TurnTakers = SmallVec<[RoleId; 4]>;

/// One move per role, indexed by role position.
///
/// ## Example
///
/// ```
/// use ggp_search::core::{Move, MoveVector, RoleId};
///
/// let mut joint = MoveVector::from_slice(&[Move::new(0), Move::new(0)]);
/// joint.set(RoleId::new(1), Move::new(4));
///
/// assert_eq!(joint.get(RoleId::new(1)), Some(Move::new(4)));
/// assert_eq!(joint.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveVector {
    moves: SmallVec<[Move; 4]>,
}

impl MoveVector {
    /// Create a move vector from moves in role order.
    #[must_use]
    pub fn from_slice(moves: &[Move]) -> Self {
        Self {
            moves: SmallVec::from_slice(moves),
        }
    }

    /// Build the move vector where every role plays the first move of its
    /// legal set. Returns `None` if any role has no legal move.
    #[must_use]
    pub fn first_legal(legal: &LegalMoves) -> Option<Self> {
        let moves = legal
            .values()
            .map(|set| set.first().copied())
            .collect::<Option<SmallVec<[Move; 4]>>>()?;
        Some(Self { moves })
    }

    /// Replace the move of one role.
    pub fn set(&mut self, role: RoleId, mv: Move) {
        self.moves[role.index()] = mv;
    }

    /// Get the move of one role.
    #[must_use]
    pub fn get(&self, role: RoleId) -> Option<Move> {
        self.moves.get(role.index()).copied()
    }

    /// Number of roles covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Check if the vector is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Moves in role order.
    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }
}

impl FromIterator<Move> for MoveVector {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self {
            moves: iter.into_iter().collect(),
        }
    }
}
