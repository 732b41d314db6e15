//! Search module for the Ataxx AI
//!
//! Contains:
//! - The `(state, depth, maximizing) -> (move, score)` strategy contract
//! - Full-width minimax over that contract

pub mod minimax;

pub use minimax::{minimax, Minimax};

use crate::game::GameState;
use crate::rules::Move;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Move>,
    /// Score of the best move from the maximizing side's point of view
    pub score: i32,
    /// Depth searched
    pub depth: u32,
    /// Total nodes visited
    pub nodes: u64,
}

/// A move-selection policy behind the minimax contract.
///
/// Implementations must keep the terminal scoring and side binding of the
/// reference search so they can be swapped without changing game behaviour
/// anywhere but move choice.
pub trait Strategy {
    fn search(&mut self, state: &GameState, depth: u32, maximizing: bool) -> SearchResult;
}
