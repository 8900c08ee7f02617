//! Remaining search depth.

use serde::{Deserialize, Serialize};

/// How much further a node may be expanded.
///
/// `ToTerminal` is used when no heuristic is available: the search only
/// stops at terminal states. `Plies(n)` stops at `n` and asks the
/// heuristic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Depth {
    /// Expand until the game ends.
    ToTerminal,
    /// Expand this many more plies.
    Plies(u32),
}

impl Depth {
    /// True when the heuristic must replace further expansion.
    #[inline]
    #[must_use]
    pub fn is_horizon(self) -> bool {
        matches!(self, Depth::Plies(0))
    }

    /// Depth available to a child one ply down.
    #[inline]
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Depth::ToTerminal => Depth::ToTerminal,
            Depth::Plies(n) => Depth::Plies(n.saturating_sub(1)),
        }
    }

    /// Whether a result computed at `self` is deep enough to answer a
    /// query that needs `needed`.
    #[must_use]
    pub fn covers(self, needed: Depth) -> bool {
        match (self, needed) {
            (Depth::ToTerminal, _) => true,
            (Depth::Plies(_), Depth::ToTerminal) => false,
            (Depth::Plies(have), Depth::Plies(need)) => have >= need,
        }
    }
}

impl std::fmt::Display for Depth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Depth::ToTerminal => write!(f, "terminal"),
            Depth::Plies(n) => write!(f, "{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next() {
        assert_eq!(Depth::Plies(3).next(), Depth::Plies(2));
        assert_eq!(Depth::Plies(0).next(), Depth::Plies(0));
        assert_eq!(Depth::ToTerminal.next(), Depth::ToTerminal);
    }

    #[test]
    fn test_horizon() {
        assert!(Depth::Plies(0).is_horizon());
        assert!(!Depth::Plies(1).is_horizon());
        assert!(!Depth::ToTerminal.is_horizon());
    }

    #[test]
    fn test_covers() {
        assert!(Depth::Plies(3).covers(Depth::Plies(2)));
        assert!(Depth::Plies(2).covers(Depth::Plies(2)));
        assert!(!Depth::Plies(1).covers(Depth::Plies(2)));
        assert!(Depth::ToTerminal.covers(Depth::Plies(9)));
        assert!(!Depth::Plies(9).covers(Depth::ToTerminal));
    }
}
