//! Property tests for state identity, cache eviction and search results.

use std::collections::BTreeSet;

use proptest::prelude::*;

use ggp_search::cache::FifoCache;
use ggp_search::core::{FactId, Move, Reward, RoleId, State};
use ggp_search::games::table::{NodeId, TableGame, TableGameBuilder};
use ggp_search::search::{SearchConfig, SearchEngine};

// =============================================================================
// Synthetic Game Trees
// =============================================================================

/// Complete two-role tree where the roles alternate, role 0 first.
/// `leaves` holds role 0's rewards left to right.
#[derive(Clone, Debug)]
struct Tree {
    depth: u32,
    branching: usize,
    leaves: Vec<Reward>,
}

impl Tree {
    fn build(&self) -> TableGame {
        let mut builder = TableGameBuilder::new(2);
        let mut next_id: NodeId = 1;
        let mut level: Vec<NodeId> = vec![0];

        for ply in 0..self.depth {
            let mover = RoleId::new((ply % 2) as u8);
            let mut children = Vec::with_capacity(level.len() * self.branching);
            for &node in &level {
                let choices: Vec<(Move, NodeId)> = (0..self.branching)
                    .map(|i| {
                        let child = next_id + i as NodeId;
                        (Move(i as u32 + 1), child)
                    })
                    .collect();
                next_id += self.branching as NodeId;
                children.extend(choices.iter().map(|&(_, child)| child));
                builder = builder.turn(node, mover, &choices);
            }
            level = children;
        }

        for (node, &reward) in level.iter().zip(&self.leaves) {
            builder = builder.terminal(*node, &[reward, 100 - reward]);
        }
        builder.build()
    }

    /// Plain minimax value for role 0, no pruning.
    fn minimax(&self) -> Reward {
        self.minimax_at(0, 0)
    }

    fn minimax_at(&self, ply: u32, index: usize) -> Reward {
        if ply == self.depth {
            return self.leaves[index];
        }
        let values = (0..self.branching).map(|i| self.minimax_at(ply + 1, index * self.branching + i));
        if ply % 2 == 0 {
            values.max().unwrap_or(0)
        } else {
            values.min().unwrap_or(0)
        }
    }
}

fn tree_strategy() -> impl Strategy<Value = Tree> {
    (1u32..=4, 2usize..=3).prop_flat_map(|(depth, branching)| {
        let leaf_count = branching.pow(depth);
        prop::collection::vec(0 as Reward..=100, leaf_count).prop_map(move |leaves| Tree {
            depth,
            branching,
            leaves,
        })
    })
}

proptest! {
    #[test]
    fn prop_alpha_beta_matches_minimax(tree in tree_strategy(), seed in any::<u64>()) {
        let game = tree.build();
        let root = game.root();
        let config = SearchConfig::default().with_seed(seed);
        let mut search = SearchEngine::new(game.clone(), game, config);

        let response = search.search(&root).unwrap().unwrap();

        prop_assert_eq!(response.value.utility(), tree.minimax() as f64);
    }

    #[test]
    fn prop_second_role_sees_complement(tree in tree_strategy()) {
        let game = tree.build();
        let root = game.root();
        let config = SearchConfig::default().with_role(RoleId::new(1));
        let mut search = SearchEngine::new(game.clone(), game, config);

        let response = search.search(&root).unwrap().unwrap();

        prop_assert_eq!(response.value.utility(), (100 - tree.minimax()) as f64);
    }

    #[test]
    fn prop_chosen_move_achieves_value(tree in tree_strategy()) {
        let game = tree.build();
        let root = game.root();
        let mut search = SearchEngine::new(game.clone(), game, SearchConfig::default());

        let response = search.search(&root).unwrap().unwrap();

        // Moves are numbered from 1 in child order.
        let child = response.best_move.0 as usize - 1;
        prop_assert_eq!(tree.minimax_at(1, child), tree.minimax());
    }
}

// =============================================================================
// State Identity
// =============================================================================

proptest! {
    #[test]
    fn prop_state_ignores_insertion_order(facts in prop::collection::vec(0 as FactId..500, 0..40)) {
        let forward = State::from_facts(facts.iter().copied());
        let backward = State::from_facts(facts.iter().rev().copied());

        prop_assert_eq!(&forward, &backward);
        prop_assert_eq!(forward.content_hash(), backward.content_hash());
        prop_assert_eq!(forward.content_hash(), State::from_facts(facts.iter().copied()).content_hash());
    }

    #[test]
    fn prop_state_equality_is_set_equality(
        a in prop::collection::vec(0 as FactId..30, 0..12),
        b in prop::collection::vec(0 as FactId..30, 0..12),
    ) {
        let same_set = a.iter().collect::<BTreeSet<_>>() == b.iter().collect::<BTreeSet<_>>();
        let same_state = State::from_facts(a) == State::from_facts(b);

        prop_assert_eq!(same_set, same_state);
    }
}

// =============================================================================
// FIFO Eviction
// =============================================================================

proptest! {
    #[test]
    fn prop_fifo_evicts_oldest(capacity in 1usize..64) {
        let mut cache = FifoCache::new(capacity);
        for key in 0..=capacity {
            cache.insert(key, key * 10);
        }

        prop_assert!(!cache.contains(&0));
        for key in 1..=capacity {
            prop_assert_eq!(cache.get(&key), Some(&(key * 10)));
        }
    }

    #[test]
    fn prop_fifo_update_never_evicts(capacity in 1usize..64, pick in any::<prop::sample::Index>()) {
        let mut cache = FifoCache::new(capacity);
        for key in 0..capacity {
            cache.insert(key, 0);
        }

        let key = pick.index(capacity);
        prop_assert!(cache.insert(key, 1).is_none());
        prop_assert_eq!(cache.len(), capacity);
        prop_assert_eq!(cache.get(&key), Some(&1));

        // The next new key still evicts the first one inserted.
        let evicted = cache.insert(capacity, 0).map(|(k, _)| k);
        prop_assert_eq!(evicted, Some(0));
    }
}
