//! Main AI engine
//!
//! Wraps a search [`Strategy`] with a fixed depth, maps the side to move onto
//! the fixed maximizing/minimizing binding, and reports timing and node
//! statistics.
//!
//! # Example
//!
//! ```
//! use ataxx::{AIEngine, GameState, Player};
//!
//! let mut engine = AIEngine::new();
//! let mut state = GameState::create(7, 7).unwrap();
//! state.turn = Player::B;
//!
//! let result = engine.get_move_with_stats(&state, Player::B);
//! let mv = result.best_move.unwrap();
//! assert!(state.apply_move(mv.from, mv.to, Player::B));
//! println!("Search: score {} in {}ms ({} nodes)", result.score, result.time_ms, result.nodes);
//! ```

use std::time::Instant;

use tracing::{debug, info};

use crate::board::Player;
use crate::config::{GameConfig, StrategyKind, DEFAULT_DEPTH};
use crate::eval::{MaterialBalance, PieceCount};
use crate::game::GameState;
use crate::rules::Move;
use crate::search::{Minimax, SearchResult, Strategy};

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Move>,
    /// Score from PlayerB's (maximizing) point of view
    pub score: i32,
    /// Depth searched
    pub depth: u32,
    /// Number of nodes searched
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            depth: result.depth,
            nodes: result.nodes,
            time_ms,
        }
    }
}

/// Main AI Engine for Ataxx.
///
/// The engine runs its strategy synchronously to the configured depth. There
/// is no time limit and no cancellation; callers that need a responsive UI
/// run it on a separate thread against a cloned state.
pub struct AIEngine {
    strategy: Box<dyn Strategy + Send>,
    kind: StrategyKind,
    max_depth: u32,
}

impl AIEngine {
    /// Create an engine with the reference strategy and depth (3 plies).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_DEPTH, StrategyKind::Reference)
    }

    /// Create an engine with a custom depth and leaf evaluation.
    #[must_use]
    pub fn with_config(max_depth: u32, kind: StrategyKind) -> Self {
        let strategy: Box<dyn Strategy + Send> = match kind {
            StrategyKind::Reference => Box::new(Minimax::new(PieceCount)),
            StrategyKind::Balanced => Box::new(Minimax::new(MaterialBalance)),
        };
        Self {
            strategy,
            kind,
            max_depth,
        }
    }

    /// Create an engine from the session configuration
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::with_config(config.search_depth, config.strategy)
    }

    #[inline]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    #[inline]
    pub fn strategy(&self) -> StrategyKind {
        self.kind
    }

    /// Get the best move for `player`, or `None` if the game is decided.
    #[must_use]
    pub fn get_move(&mut self, state: &GameState, player: Player) -> Option<Move> {
        self.get_move_with_stats(state, player).best_move
    }

    /// Get the best move for `player` with search statistics.
    ///
    /// PlayerB searches as the maximizing side, PlayerA as the minimizing side.
    #[must_use]
    pub fn get_move_with_stats(&mut self, state: &GameState, player: Player) -> MoveResult {
        let start = Instant::now();
        let maximizing = player == Player::B;
        debug!(?player, depth = self.max_depth, strategy = ?self.kind, "search started");

        let result = self.strategy.search(state, self.max_depth, maximizing);
        let time_ms = start.elapsed().as_millis() as u64;

        info!(
            ?player,
            best_move = %result.best_move.map_or_else(|| "none".to_string(), |m| m.to_string()),
            score = result.score,
            nodes = result.nodes,
            time_ms,
            "search finished"
        );

        MoveResult::from_search(result, time_ms)
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Pos};
    use crate::eval::WIN_SCORE;
    use crate::search::minimax;

    #[test]
    fn test_default_engine() {
        let engine = AIEngine::default();
        assert_eq!(engine.max_depth(), 3);
        assert_eq!(engine.strategy(), StrategyKind::Reference);

        let engine = AIEngine::from_config(&GameConfig {
            search_depth: 2,
            strategy: StrategyKind::Balanced,
            ..GameConfig::default()
        });
        assert_eq!(engine.max_depth(), 2);
        assert_eq!(engine.strategy(), StrategyKind::Balanced);
    }

    #[test]
    fn test_engine_matches_reference_search() {
        let state = GameState::create(5, 5).unwrap();
        let mut engine = AIEngine::with_config(2, StrategyKind::Reference);

        let result = engine.get_move_with_stats(&state, Player::B);
        assert_eq!((result.best_move, result.score), minimax(&state, 2, true));
        assert_eq!(result.depth, 2);
        assert!(result.nodes > 1);
    }

    #[test]
    fn test_player_a_searches_minimizing() {
        let state = GameState::create(7, 7).unwrap();
        let mut engine = AIEngine::with_config(1, StrategyKind::Reference);

        let mv = engine.get_move(&state, Player::A).unwrap();
        assert_eq!(mv, Move::walk(Pos::new(0, 6), Pos::new(0, 5)));
    }

    #[test]
    fn test_decided_position_has_no_move() {
        let board = Board::parse(&["BBB", "BAB", "BBB"]);
        let state = GameState::from_board(board, Player::B);
        let mut engine = AIEngine::new();

        let result = engine.get_move_with_stats(&state, Player::B);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, WIN_SCORE);
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn test_self_play_stays_legal() {
        let mut state = GameState::create(5, 5).unwrap();
        let mut engine = AIEngine::with_config(1, StrategyKind::Balanced);

        for _ in 0..40 {
            if state.game_outcome().is_decided() {
                break;
            }
            let player = state.turn;
            let mv = engine.get_move(&state, player).unwrap();
            assert!(state.apply_move(mv.from, mv.to, player), "engine chose illegal {mv}");
            state.change_turn();
        }
    }
}
