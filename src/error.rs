//! Error types for search and state machine operations.
//!
//! Every error here is fatal for the decision episode it occurs in.
//! Cancellation is not an error and never shows up in this enum.

use thiserror::Error;

use crate::core::RoleId;

/// Errors that can abort a search.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A role has no legal move in a non-terminal state.
    #[error("{role} has no legal move in a non-terminal state")]
    NoLegalMoves { role: RoleId },

    /// The state machine returned a profile for the wrong number of roles.
    #[error("Expected a profile for {expected} roles, got {actual}")]
    RoleCountMismatch { expected: usize, actual: usize },

    /// The search was configured for a role the game does not have.
    #[error("{role} does not exist in a game with {role_count} roles")]
    UnknownRole { role: RoleId, role_count: usize },

    /// A decision was requested for a state where the game is already over.
    #[error("Cannot choose a move in a terminal state")]
    TerminalRoot,

    /// The state machine failed to answer a query.
    #[error("State machine error: {message}")]
    Machine { message: String },

    /// The heuristic failed to evaluate a state.
    #[error("Heuristic error: {message}")]
    Heuristic { message: String },
}

impl Error {
    /// Build a state machine error from any message.
    pub fn machine(message: impl Into<String>) -> Self {
        Self::Machine {
            message: message.into(),
        }
    }

    /// Build a heuristic error from any message.
    pub fn heuristic(message: impl Into<String>) -> Self {
        Self::Heuristic {
            message: message.into(),
        }
    }
}

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, Error>;
