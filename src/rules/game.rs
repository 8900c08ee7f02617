//! Static facts about a game: roles, reward range and turn structure.

use serde::{Deserialize, Serialize};

use crate::core::{LegalMoves, Reward, RoleId, TurnTakers};

/// Game-level information the search needs besides the state machine.
pub trait GameRules {
    /// Number of roles in the game.
    fn role_count(&self) -> usize;

    /// Lowest reward any role can receive.
    fn lowest_reward(&self) -> Reward;

    /// Highest reward any role can receive.
    fn highest_reward(&self) -> Reward;

    /// Roles with more than one legal move in `legal`, in role order.
    ///
    /// An empty result means every role is forced; a single role means
    /// ordinary turn-taking; several roles means a simultaneous decision.
    fn turn_takers(&self, legal: &LegalMoves) -> TurnTakers {
        legal
            .iter()
            .filter(|(_, moves)| moves.len() > 1)
            .map(|(role, _)| role)
            .collect()
    }

    /// Check whether `role` exists in this game.
    fn has_role(&self, role: RoleId) -> bool {
        role.index() < self.role_count()
    }
}

/// Plain `GameRules` value for games whose metadata is known up front.
///
/// ```
/// use ggp_search::rules::{GameInfo, GameRules};
///
/// let info = GameInfo::new(2, 0, 100);
/// assert_eq!(info.role_count(), 2);
/// assert_eq!(info.highest_reward(), 100);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInfo {
    /// Number of roles.
    pub role_count: usize,

    /// Lowest reward.
    pub lowest_reward: Reward,

    /// Highest reward.
    pub highest_reward: Reward,
}

impl GameInfo {
    /// Create game info.
    #[must_use]
    pub fn new(role_count: usize, lowest_reward: Reward, highest_reward: Reward) -> Self {
        assert!(role_count > 0, "Must have at least 1 role");
        assert!(
            lowest_reward <= highest_reward,
            "Lowest reward must not exceed highest reward"
        );
        Self {
            role_count,
            lowest_reward,
            highest_reward,
        }
    }
}

impl GameRules for GameInfo {
    fn role_count(&self) -> usize {
        self.role_count
    }

    fn lowest_reward(&self) -> Reward {
        self.lowest_reward
    }

    fn highest_reward(&self) -> Reward {
        self.highest_reward
    }
}
