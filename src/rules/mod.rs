//! Game rules for Ataxx
//!
//! This module implements the rule set:
//! - Move generation (walks and jumps)
//! - Move application and adjacency capture
//! - Terminal detection, including the forced fill when a side is blocked

pub mod capture;
pub mod movegen;
pub mod outcome;

// Re-exports for convenient access
pub use capture::{apply_move, capture_adjacent, execute_move};
pub use movegen::{
    has_legal_move, jump_targets, legal_moves, legal_moves_from, walk_targets, LegalMoves, Move,
    MoveKind,
};
pub use outcome::{evaluate, game_outcome, is_full, piece_counts, winner, Outcome};
