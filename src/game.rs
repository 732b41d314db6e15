//! Game state: the board plus the side to move
//!
//! `GameState` is the facade the driving loop talks to. It owns its board
//! exclusively; the search explores hypothetical continuations on clones and
//! never touches the authoritative state.

use crate::board::{Board, Cell, Player, Pos};
use crate::error::Result;
use crate::rules::{self, LegalMoves, Outcome};

/// Board and turn
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    pub board: Board,
    pub turn: Player,
}

impl GameState {
    /// Create a game with the starting corner layout. PlayerA moves first.
    pub fn create(rows: usize, cols: usize) -> Result<Self> {
        Ok(Self {
            board: Board::new(rows, cols)?,
            turn: Player::A,
        })
    }

    /// Wrap an existing board
    pub fn from_board(board: Board, turn: Player) -> Self {
        Self { board, turn }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.board.cols()
    }

    /// Cell at `(row, col)`, or `OutOfBounds`
    pub fn cell_at(&self, row: i32, col: i32) -> Result<Cell> {
        self.board.get(row, col)
    }

    /// Total predicate: off-grid is "not empty"
    #[inline]
    pub fn is_empty(&self, row: i32, col: i32) -> bool {
        self.board.is_empty(row, col)
    }

    pub fn legal_moves(&self, player: Player) -> LegalMoves {
        rules::legal_moves(&self.board, player)
    }

    /// Apply `from -> to` for `player`; `false` and no change if illegal.
    ///
    /// The turn is not flipped here; call [`GameState::change_turn`] once the
    /// move is confirmed.
    pub fn apply_move(&mut self, from: Pos, to: Pos, player: Player) -> bool {
        rules::apply_move(&mut self.board, from, to, player)
    }

    /// Authoritative terminal check (may perform the forced fill)
    pub fn game_outcome(&mut self) -> Outcome {
        rules::game_outcome(&mut self.board)
    }

    /// Non-mutating terminal check
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(&self.board)
    }

    #[inline]
    pub fn change_turn(&mut self) {
        self.turn = -self.turn;
    }
}
