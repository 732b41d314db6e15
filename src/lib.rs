//! Ataxx engine and desktop client
//!
//! Ataxx is a two-player territory game on a square grid:
//! - A **walk** places a new piece next to one of your pieces
//! - A **jump** moves one of your pieces two cells away
//! - After either, every adjacent enemy piece turns to your colour
//! - A side that cannot move forfeits the rest of the board to the opponent
//!
//! # Architecture
//!
//! - [`board`]: Cells, positions and the fixed-size grid
//! - [`game`]: Board plus turn, the facade for the driving loop
//! - [`rules`]: Move generation, capture, terminal detection
//! - [`eval`]: Leaf scoring
//! - [`search`]: Fixed-depth minimax
//! - [`engine`]: AI engine wrapping the search
//! - [`ui`]: egui desktop client
//!
//! # Quick Start
//!
//! ```
//! use ataxx::{AIEngine, GameState, Outcome, Player, Pos};
//!
//! let mut game = GameState::create(7, 7).unwrap();
//!
//! // Human (PlayerA) walks from the bottom-left corner
//! assert!(game.apply_move(Pos::new(6, 0), Pos::new(5, 1), Player::A));
//! game.change_turn();
//!
//! // Computer (PlayerB) answers
//! let mut engine = AIEngine::with_config(2, Default::default());
//! if let Some(mv) = engine.get_move(&game, Player::B) {
//!     assert!(game.apply_move(mv.from, mv.to, Player::B));
//!     game.change_turn();
//! }
//!
//! assert_eq!(game.game_outcome(), Outcome::InProgress);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos};
pub use config::{GameConfig, StrategyKind};
pub use engine::{AIEngine, MoveResult};
pub use error::AtaxxError;
pub use game::GameState;
pub use rules::{LegalMoves, Move, MoveKind, Outcome};
