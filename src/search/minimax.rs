//! Fixed-depth minimax search
//!
//! Full-width, depth-first, no pruning. The roles are bound to concrete sides:
//! the maximizing branch enumerates PlayerB moves and the minimizing branch
//! enumerates PlayerA moves.
//!
//! # Example
//!
//! ```
//! use ataxx::GameState;
//! use ataxx::search::minimax;
//!
//! let state = GameState::create(7, 7).unwrap();
//! let (best_move, score) = minimax(&state, 1, true);
//!
//! // Any walk adds a PlayerB piece
//! assert!(best_move.is_some());
//! assert_eq!(score, 3);
//! ```

use crate::board::{Board, Player};
use crate::eval::{terminal_score, Evaluator, PieceCount};
use crate::game::GameState;
use crate::rules::{self, Move};

use super::{SearchResult, Strategy};

/// Side whose moves are enumerated at a node
#[inline]
fn side_to_move(maximizing: bool) -> Player {
    if maximizing {
        Player::B
    } else {
        Player::A
    }
}

/// Minimax searcher parameterized by its leaf evaluation.
#[derive(Debug, Clone, Default)]
pub struct Minimax<E: Evaluator = PieceCount> {
    evaluator: E,
    nodes: u64,
}

impl<E: Evaluator> Minimax<E> {
    pub fn new(evaluator: E) -> Self {
        Self { evaluator, nodes: 0 }
    }

    /// Search `depth` plies from `state`.
    ///
    /// The input state is never modified; every successor is explored on its
    /// own board clone.
    pub fn search(&mut self, state: &GameState, depth: u32, maximizing: bool) -> SearchResult {
        self.nodes = 0;
        let (best_move, score) = self.minimax(&state.board, depth, maximizing);
        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
        }
    }

    fn minimax(&mut self, board: &Board, depth: u32, maximizing: bool) -> (Option<Move>, i32) {
        self.nodes += 1;

        if let Some(score) = terminal_score(rules::evaluate(board)) {
            return (None, score);
        }
        if depth == 0 {
            return (None, self.evaluator.evaluate(board));
        }

        let player = side_to_move(maximizing);
        let moves = rules::legal_moves(board, player);
        let mut best: Option<(Move, i32)> = None;

        for mv in moves.iter().copied() {
            let mut child = board.clone();
            rules::execute_move(&mut child, mv, player);
            let (_, value) = self.minimax(&child, depth - 1, !maximizing);

            // Strict comparison keeps the first move on ties
            let improves = match best {
                None => true,
                Some((_, current)) if maximizing => value > current,
                Some((_, current)) => value < current,
            };
            if improves {
                best = Some((mv, value));
            }
        }

        match best {
            Some((mv, score)) => (Some(mv), score),
            // Undecided positions always have successors; kept for completeness
            None => (None, self.evaluator.evaluate(board)),
        }
    }
}

impl<E: Evaluator> Strategy for Minimax<E> {
    fn search(&mut self, state: &GameState, depth: u32, maximizing: bool) -> SearchResult {
        Minimax::search(self, state, depth, maximizing)
    }
}

/// Reference search: minimax with the [`PieceCount`] leaf evaluation.
///
/// # Returns
/// `(best_move, score)`; `best_move` is `None` only at a terminal root or
/// when `depth` is zero
pub fn minimax(state: &GameState, depth: u32, maximizing: bool) -> (Option<Move>, i32) {
    let result = Minimax::new(PieceCount).search(state, depth, maximizing);
    (result.best_move, result.score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;
    use crate::eval::{MaterialBalance, WIN_SCORE};
    use crate::rules::Outcome;

    fn state(rows: &[&str]) -> GameState {
        GameState::from_board(Board::parse(rows), Player::B)
    }

    #[test]
    fn test_leaf_scores_player_b_count() {
        let s = state(&[
            "B.....A",
            ".......",
            "..B....",
            "...B..A",
            ".......",
            "B......",
            "......B",
        ]);
        assert_eq!(s.board.count(Player::B), 5);
        assert_eq!(s.board.count(Player::A), 2);
        assert_eq!(minimax(&s, 0, true), (None, 5));
        assert_eq!(minimax(&s, 0, false), (None, 5));
    }

    #[test]
    fn test_leaf_ignores_player_a_count() {
        let s = state(&[
            "BB....A",
            ".......",
            "..B....",
            "...B..A",
            ".......",
            "B......",
            "......A",
        ]);
        assert_eq!(s.board.count(Player::B), 5);
        assert_eq!(s.board.count(Player::A), 3);
        assert_eq!(s.outcome(), Outcome::InProgress);
        assert_eq!(minimax(&s, 0, true).1, 5);
    }

    #[test]
    fn test_decided_scores_ignore_depth() {
        // PlayerB wiped out: PlayerA has won
        let a_wins = state(&["A....", ".....", "....A"]);
        for depth in [0, 1, 3] {
            assert_eq!(minimax(&a_wins, depth, true), (None, -WIN_SCORE));
            assert_eq!(minimax(&a_wins, depth, false), (None, -WIN_SCORE));
        }

        let b_wins = state(&["BBB", "BAB", "BBB"]);
        assert_eq!(minimax(&b_wins, 3, true), (None, WIN_SCORE));

        let tie = state(&["AB", "BA"]);
        assert_eq!(minimax(&tie, 2, false), (None, 0));
    }

    #[test]
    fn test_forced_fill_root_is_terminal() {
        let s = state(&["ABB..", "BBB..", "BBB.."]);
        assert_eq!(minimax(&s, 3, true), (None, WIN_SCORE));
        // Probe did not fill the caller's board
        assert_eq!(s.board.empty_count(), 6);
    }

    #[test]
    fn test_depth_one_maximizing_picks_first_walk() {
        let s = GameState::create(7, 7).unwrap();
        let (best, score) = minimax(&s, 1, true);
        assert_eq!(best, Some(Move::walk(Pos::new(0, 0), Pos::new(0, 1))));
        assert_eq!(score, 3);
    }

    #[test]
    fn test_depth_one_minimizing_picks_first_move() {
        let s = GameState::create(7, 7).unwrap();
        let (best, score) = minimax(&s, 1, false);
        assert_eq!(best, Some(Move::walk(Pos::new(0, 6), Pos::new(0, 5))));
        assert_eq!(score, 2);
    }

    #[test]
    fn test_tie_prefers_walk_over_later_jump() {
        let s = state(&[
            "B....",
            ".....",
            "..AA.",
            ".....",
            "....A",
        ]);
        // Walk to B2 and jump to C2 both reach three PlayerB pieces
        let (best, score) = minimax(&s, 1, true);
        assert_eq!(best, Some(Move::walk(Pos::new(0, 0), Pos::new(1, 1))));
        assert_eq!(score, 3);
    }

    #[test]
    fn test_material_balance_prefers_bigger_swing() {
        let s = state(&[
            "B....",
            ".....",
            "..AA.",
            ".....",
            "....A",
        ]);
        let result = Minimax::new(MaterialBalance).search(&s, 1, true);
        assert_eq!(result.best_move, Some(Move::jump(Pos::new(0, 0), Pos::new(1, 2))));
        assert_eq!(result.score, 2);
    }

    #[test]
    fn test_node_count_is_full_width() {
        let s = GameState::create(7, 7).unwrap();
        let mut searcher = Minimax::new(PieceCount);

        // Root plus one child per legal PlayerB move
        assert_eq!(searcher.search(&s, 1, true).nodes, 17);
    }

    #[test]
    fn test_search_leaves_state_untouched() {
        let s = GameState::create(5, 5).unwrap();
        let before = s.clone();
        let result = Minimax::new(PieceCount).search(&s, 3, true);

        assert_eq!(s, before);
        assert_eq!(result.depth, 3);
        let best = result.best_move.unwrap();
        assert!(s.legal_moves(Player::B).find(best.from, best.to).is_some());
    }

    #[test]
    fn test_strategy_trait_object() {
        let s = GameState::create(7, 7).unwrap();
        let mut strategy: Box<dyn Strategy> = Box::new(Minimax::new(PieceCount));
        let result = strategy.search(&s, 1, true);
        assert_eq!((result.best_move, result.score), minimax(&s, 1, true));
    }
}
