//! Table-driven game implementation.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::{FactId, LegalMoves, Move, MoveSet, MoveVector, Reward, RoleId, RoleMap, State};
use crate::error::{Error, Result};
use crate::rules::{GameRules, StateMachine};

/// Move played by roles that have nothing to decide.
pub const NOOP: Move = Move(0);

/// Node identifier inside a `TableGame`.
pub type NodeId = u32;

#[derive(Clone, Debug)]
enum TableNode {
    Decision {
        legal: LegalMoves,
        edges: FxHashMap<MoveVector, NodeId>,
    },
    Terminal {
        goals: RoleMap<Reward>,
    },
}

/// Game defined by an explicit transition table.
///
/// Every node is the single-fact state `{node}`; node 0 is the root.
#[derive(Clone, Debug)]
pub struct TableGame {
    role_count: usize,
    nodes: FxHashMap<NodeId, TableNode>,
    lowest_reward: Reward,
    highest_reward: Reward,
}

impl TableGame {
    /// The state of a node.
    #[must_use]
    pub fn state(&self, node: NodeId) -> State {
        State::from_facts([node as FactId])
    }

    /// The root state (node 0).
    #[must_use]
    pub fn root(&self) -> State {
        self.state(0)
    }

    /// Number of nodes defined.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn node(&self, state: &State) -> Result<&TableNode> {
        let id = state
            .facts()
            .next()
            .ok_or_else(|| Error::machine("empty state is not a table node"))?;
        self.nodes
            .get(&id)
            .ok_or_else(|| Error::machine(format!("unknown node {}", id)))
    }
}

impl StateMachine for TableGame {
    fn is_terminal(&mut self, state: &State) -> Result<bool> {
        Ok(matches!(self.node(state)?, TableNode::Terminal { .. }))
    }

    fn legal_moves(&mut self, state: &State) -> Result<LegalMoves> {
        match self.node(state)? {
            TableNode::Decision { legal, .. } => Ok(legal.clone()),
            TableNode::Terminal { .. } => Ok(RoleMap::new(self.role_count, |_| {
                SmallVec::from_slice(&[NOOP])
            })),
        }
    }

    fn next_state(&mut self, state: &State, moves: &MoveVector) -> Result<State> {
        match self.node(state)? {
            TableNode::Decision { edges, .. } => edges
                .get(moves)
                .map(|&child| self.state(child))
                .ok_or_else(|| Error::machine(format!("no transition from {} for {:?}", state, moves))),
            TableNode::Terminal { .. } => Err(Error::machine(format!("{} is terminal", state))),
        }
    }

    fn goals(&mut self, state: &State) -> Result<RoleMap<Reward>> {
        match self.node(state)? {
            TableNode::Terminal { goals } => Ok(goals.clone()),
            TableNode::Decision { .. } => Ok(RoleMap::with_value(self.role_count, self.lowest_reward)),
        }
    }
}

impl GameRules for TableGame {
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

/// Builder for creating a TableGame.
///
/// ## Example
///
/// ```
/// use ggp_search::core::{Move, RoleId};
/// use ggp_search::games::table::TableGameBuilder;
///
/// // Role 0 picks between a loss and a win.
/// let game = TableGameBuilder::new(2)
///     .turn(0, RoleId::new(0), &[(Move(1), 1), (Move(2), 2)])
///     .terminal(1, &[0, 100])
///     .terminal(2, &[100, 0])
///     .build();
///
/// assert_eq!(game.node_count(), 3);
/// ```
pub struct TableGameBuilder {
    role_count: usize,
    nodes: FxHashMap<NodeId, TableNode>,
}

impl TableGameBuilder {
    pub fn new(role_count: usize) -> Self {
        assert!((1..=255).contains(&role_count), "Role count must be 1-255");
        Self {
            role_count,
            nodes: FxHashMap::default(),
        }
    }

    /// A node where only `mover` decides; every other role plays `NOOP`.
    pub fn turn(self, node: NodeId, mover: RoleId, choices: &[(Move, NodeId)]) -> Self {
        let legal = RoleMap::new(self.role_count, |role| {
            if role == mover {
                choices.iter().map(|&(mv, _)| mv).collect()
            } else {
                SmallVec::from_slice(&[NOOP])
            }
        });
        let edges = choices
            .iter()
            .map(|&(mv, child)| {
                let mut joint = self.noop_vector();
                joint.set(mover, mv);
                (joint, child)
            })
            .collect();
        self.insert(node, TableNode::Decision { legal, edges })
    }

    /// A node where every role plays `NOOP` and the game moves to `child`.
    pub fn forced(self, node: NodeId, child: NodeId) -> Self {
        let legal = RoleMap::new(self.role_count, |_| SmallVec::from_slice(&[NOOP]));
        let mut edges = FxHashMap::default();
        edges.insert(self.noop_vector(), child);
        self.insert(node, TableNode::Decision { legal, edges })
    }

    /// A node with explicit per-role legal moves and joint transitions.
    pub fn joint(self, node: NodeId, legal: Vec<Vec<Move>>, edges: &[(&[Move], NodeId)]) -> Self {
        assert_eq!(legal.len(), self.role_count, "Need one legal set per role");
        let legal = RoleMap::from_vec(legal.into_iter().map(MoveSet::from_vec).collect());
        let edges = edges
            .iter()
            .map(|&(moves, child)| (MoveVector::from_slice(moves), child))
            .collect();
        self.insert(node, TableNode::Decision { legal, edges })
    }

    /// A terminal node with the given rewards.
    pub fn terminal(self, node: NodeId, goals: &[Reward]) -> Self {
        assert_eq!(goals.len(), self.role_count, "Need one reward per role");
        let goals = RoleMap::from_vec(goals.to_vec());
        self.insert(node, TableNode::Terminal { goals })
    }

    /// Build the game. The reward range spans every terminal reward.
    pub fn build(self) -> TableGame {
        let rewards = || {
            self.nodes.values().filter_map(|n| match n {
                TableNode::Terminal { goals } => Some(goals.values().copied()),
                TableNode::Decision { .. } => None,
            })
            .flatten()
        };
        let lowest_reward = rewards().min().unwrap_or(0);
        let highest_reward = rewards().max().unwrap_or(100);

        TableGame {
            role_count: self.role_count,
            nodes: self.nodes,
            lowest_reward,
            highest_reward,
        }
    }

    fn noop_vector(&self) -> MoveVector {
        (0..self.role_count).map(|_| NOOP).collect()
    }

    fn insert(mut self, node: NodeId, entry: TableNode) -> Self {
        self.nodes.insert(node, entry);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choice_game() -> TableGame {
        TableGameBuilder::new(2)
            .turn(0, RoleId::new(0), &[(Move(1), 1), (Move(2), 2)])
            .terminal(1, &[0, 100])
            .terminal(2, &[100, 0])
            .build()
    }

    #[test]
    fn test_turn_node() {
        let mut game = choice_game();
        let root = game.root();

        assert!(!game.is_terminal(&root).unwrap());
        let legal = game.legal_moves(&root).unwrap();
        assert_eq!(legal[RoleId::new(0)].as_slice(), &[Move(1), Move(2)]);
        assert_eq!(legal[RoleId::new(1)].as_slice(), &[NOOP]);

        let next = game
            .next_state(&root, &MoveVector::from_slice(&[Move(2), NOOP]))
            .unwrap();
        assert_eq!(next, game.state(2));
        assert!(game.is_terminal(&next).unwrap());
        assert_eq!(game.goals(&next).unwrap().as_slice(), &[100, 0]);
    }

    #[test]
    fn test_reward_range() {
        let game = choice_game();
        assert_eq!(game.lowest_reward(), 0);
        assert_eq!(game.highest_reward(), 100);
        assert_eq!(game.role_count(), 2);
    }

    #[test]
    fn test_forced_node() {
        let mut game = TableGameBuilder::new(1)
            .forced(0, 1)
            .terminal(1, &[100])
            .build();

        let root = game.root();
        let next = game.next_state(&root, &MoveVector::from_slice(&[NOOP])).unwrap();
        assert_eq!(next, game.state(1));
    }

    #[test]
    fn test_joint_node() {
        let mut game = TableGameBuilder::new(2)
            .joint(
                0,
                vec![vec![Move(1), Move(2)], vec![Move(3), Move(4)]],
                &[(&[Move(2), Move(4)][..], 1)],
            )
            .terminal(1, &[50, 50])
            .build();
        let root = game.root();

        let legal = game.legal_moves(&root).unwrap();
        assert_eq!(game.turn_takers(&legal).len(), 2);
        let next = game
            .next_state(&root, &MoveVector::from_slice(&[Move(2), Move(4)]))
            .unwrap();
        assert_eq!(next, game.state(1));
        assert!(game.next_state(&root, &MoveVector::from_slice(&[Move(1), Move(3)])).is_err());
    }

    #[test]
    fn test_missing_transition() {
        let mut game = choice_game();
        let root = game.root();

        let result = game.next_state(&root, &MoveVector::from_slice(&[Move(9), NOOP]));
        assert!(matches!(result, Err(Error::Machine { .. })));
    }

    #[test]
    fn test_unknown_node() {
        let mut game = choice_game();
        assert!(game.is_terminal(&State::from_facts([42])).is_err());
    }
}
