//! Position scoring for the minimax search
//!
//! Scores are always expressed from the point of view of the maximizing side,
//! which is bound to PlayerB: a PlayerB win is `+WIN_SCORE`, a PlayerA win is
//! `-WIN_SCORE`, a tie is zero.

use crate::board::{Board, Player};
use crate::rules::Outcome;

/// Magnitude of a decided game
pub const WIN_SCORE: i32 = 512;

/// Raw piece count of `player`. No positional or mobility terms.
#[must_use]
#[inline]
pub fn score(board: &Board, player: Player) -> i32 {
    board.count(player) as i32
}

/// Score of a decided outcome, independent of which side is to move.
///
/// # Returns
/// `-WIN_SCORE` for a PlayerA win, `WIN_SCORE` for a PlayerB win, `0` for a
/// tie, `None` while the game is in progress
#[must_use]
pub fn terminal_score(outcome: Outcome) -> Option<i32> {
    match outcome {
        Outcome::Winner(Player::A) => Some(-WIN_SCORE),
        Outcome::Winner(Player::B) => Some(WIN_SCORE),
        Outcome::Tie => Some(0),
        Outcome::InProgress => None,
    }
}

/// Leaf evaluation used when the search runs out of depth on an undecided
/// position.
pub trait Evaluator {
    fn evaluate(&self, board: &Board) -> i32;
}

/// Reference leaf evaluation: the absolute PlayerB piece count.
///
/// PlayerA's pieces are ignored entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieceCount;

impl Evaluator for PieceCount {
    #[inline]
    fn evaluate(&self, board: &Board) -> i32 {
        score(board, Player::B).abs()
    }
}

/// Symmetric material balance: PlayerB pieces minus PlayerA pieces.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialBalance;

impl Evaluator for MaterialBalance {
    #[inline]
    fn evaluate(&self, board: &Board) -> i32 {
        -board.balance()
    }
}
