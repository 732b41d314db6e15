//! Terminal-state detection
//!
//! The game ends when the board is full, when a side has no pieces left, or
//! when a side has no legal move. In the last case every empty cell goes to
//! the opponent (forced fill) before the majority is counted.

use crate::board::{Board, Player};

use super::movegen::has_legal_move;

/// Result of a terminal check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Game continues
    InProgress,
    /// Decided in favour of one side
    Winner(Player),
    /// Decided with equal piece counts
    Tie,
}

impl Outcome {
    #[inline]
    pub fn is_decided(self) -> bool {
        self != Outcome::InProgress
    }

    #[inline]
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(player),
            _ => None,
        }
    }
}

/// What the precedence rules conclude before any forced fill is performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    Decided(Outcome),
    /// Empty cells must be filled with this side, then counted
    ForcedFill(Player),
    Ongoing,
}

fn verdict(board: &Board) -> Verdict {
    if board.is_full() {
        return Verdict::Decided(winner(board));
    }

    let (count_a, count_b) = piece_counts(board);
    if count_a == 0 {
        return Verdict::Decided(Outcome::Winner(Player::B));
    }
    if count_b == 0 {
        return Verdict::Decided(Outcome::Winner(Player::A));
    }

    if !has_legal_move(board, Player::A) {
        return Verdict::ForcedFill(Player::B);
    }
    if !has_legal_move(board, Player::B) {
        return Verdict::ForcedFill(Player::A);
    }

    Verdict::Ongoing
}

#[inline]
fn majority(count_a: usize, count_b: usize) -> Outcome {
    match count_a.cmp(&count_b) {
        std::cmp::Ordering::Greater => Outcome::Winner(Player::A),
        std::cmp::Ordering::Less => Outcome::Winner(Player::B),
        std::cmp::Ordering::Equal => Outcome::Tie,
    }
}

/// Piece counts `(PlayerA, PlayerB)` by full scan
pub fn piece_counts(board: &Board) -> (usize, usize) {
    (board.count(Player::A), board.count(Player::B))
}

/// Majority winner of the current board, or `Tie`.
///
/// Never returns `InProgress`; callers decide when the board is settled.
pub fn winner(board: &Board) -> Outcome {
    let (count_a, count_b) = piece_counts(board);
    majority(count_a, count_b)
}

/// True iff no cell is empty
#[inline]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Authoritative terminal check.
///
/// Precedence: full board, A has no pieces, B has no pieces, A cannot move
/// (fill with B), B cannot move (fill with A), otherwise in progress.
///
/// The forced fill mutates `board`. Search code must hand in a disposable
/// clone or use [`evaluate`] instead.
pub fn game_outcome(board: &mut Board) -> Outcome {
    match verdict(board) {
        Verdict::Decided(outcome) => outcome,
        Verdict::ForcedFill(filler) => {
            board.fill_empty(filler);
            winner(board)
        }
        Verdict::Ongoing => Outcome::InProgress,
    }
}

/// Same result as [`game_outcome`] without performing the forced fill.
pub fn evaluate(board: &Board) -> Outcome {
    match verdict(board) {
        Verdict::Decided(outcome) => outcome,
        Verdict::ForcedFill(filler) => {
            let (mut count_a, mut count_b) = piece_counts(board);
            match filler {
                Player::A => count_a += board.empty_count(),
                Player::B => count_b += board.empty_count(),
            }
            majority(count_a, count_b)
        }
        Verdict::Ongoing => Outcome::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[test]
    fn test_fresh_board_in_progress() {
        let mut board = Board::new(7, 7).unwrap();
        assert_eq!(evaluate(&board), Outcome::InProgress);
        assert_eq!(game_outcome(&mut board), Outcome::InProgress);
        assert!(!Outcome::InProgress.is_decided());
    }

    #[test]
    fn test_winner_majority() {
        assert_eq!(winner(&Board::parse(&["AA", "AB"])), Outcome::Winner(Player::A));
        assert_eq!(winner(&Board::parse(&["BB", "AB"])), Outcome::Winner(Player::B));
        assert_eq!(winner(&Board::parse(&["AB", "BA"])), Outcome::Tie);
        assert_eq!(piece_counts(&Board::parse(&["AB", "B."])), (1, 2));
    }

    #[test]
    fn test_full_board_takes_precedence() {
        let mut board = Board::parse(&["AAB", "ABB", "BBB"]);
        assert!(is_full(&board));
        assert_eq!(game_outcome(&mut board), Outcome::Winner(Player::B));
    }

    #[test]
    fn test_full_board_tie() {
        let mut board = Board::parse(&["AB", "BA"]);
        assert_eq!(game_outcome(&mut board), Outcome::Tie);
        assert_eq!(Outcome::Tie.winner(), None);
        assert!(Outcome::Tie.is_decided());
    }

    #[test]
    fn test_wiped_out_side_loses() {
        let mut board = Board::parse(&["B...", "....", "...B"]);
        assert_eq!(game_outcome(&mut board), Outcome::Winner(Player::B));

        let mut board = Board::parse(&["A...", "....", "...."]);
        assert_eq!(game_outcome(&mut board), Outcome::Winner(Player::A));
        // No fill happens on a wipe-out
        assert_eq!(board.count(Player::A), 1);
    }

    #[test]
    fn test_forced_fill_for_blocked_player_a() {
        let mut board = Board::parse(&[
            "ABB....",
            "BBB....",
            "BBB....",
            ".......",
            ".......",
            ".......",
            ".......",
        ]);
        let expected = evaluate(&board);

        let outcome = game_outcome(&mut board);
        assert_eq!(outcome, Outcome::Winner(Player::B));
        assert_eq!(outcome, expected);
        assert!(board.is_full());
        assert_eq!(board.count(Player::A), 1);
        assert_eq!(board.count(Player::B), 48);
        assert_eq!(board.cell(crate::Pos::new(0, 0)), Cell::PlayerA);
    }

    #[test]
    fn test_forced_fill_for_blocked_player_b() {
        let mut board = Board::parse(&[
            "AAAAA.",
            "ABBAA.",
            "AAAAA.",
            "AAAAA.",
        ]);
        assert!(!has_legal_move(&board, Player::B));
        assert!(has_legal_move(&board, Player::A));

        assert_eq!(evaluate(&board), Outcome::Winner(Player::A));
        assert_eq!(game_outcome(&mut board), Outcome::Winner(Player::A));
        assert_eq!(board.count(Player::A), 22);
        assert_eq!(board.count(Player::B), 2);
        assert!(board.is_full());
    }

    #[test]
    fn test_forced_fill_can_tie() {
        // A is walled off by B; the two empties go to B -> 6 vs 6
        let mut board = Board::parse(&["AAABB.", "AAABB."]);
        assert!(!has_legal_move(&board, Player::A));

        assert_eq!(evaluate(&board), Outcome::Tie);
        assert_eq!(game_outcome(&mut board), Outcome::Tie);
        assert!(board.is_full());
    }

    #[test]
    fn test_evaluate_does_not_mutate() {
        let board = Board::parse(&["ABB..", "BBB..", "BBB.."]);
        let copy = board.clone();
        assert_eq!(evaluate(&board), Outcome::Winner(Player::B));
        assert_eq!(board, copy);
    }

    #[test]
    fn test_decided_implies_full_or_wiped_out() {
        let boards = [
            Board::parse(&["ABB....", "BBB....", "BBB....", "......."]),
            Board::parse(&["AB", "BA"]),
            Board::parse(&["AAAAA.", "ABBAA.", "AAAAA.", "AAAAA."]),
        ];
        for mut board in boards {
            if game_outcome(&mut board).is_decided() {
                assert!(board.is_full());
            }
        }
    }
}
