//! Error type shared by the board, the rules and the interactive session

use crate::board::Pos;

/// Errors raised by fallible board queries and interactive move requests.
///
/// Total predicates such as [`Board::is_empty`](crate::Board::is_empty) never
/// produce these; they answer `false` for anything off the grid.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtaxxError {
    /// Board dimensions outside the supported range
    #[error("invalid board dimension {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },

    /// Coordinates outside `[0, rows) x [0, cols)`
    #[error("coordinate ({row}, {col}) is out of bounds")]
    OutOfBounds { row: i32, col: i32 },

    /// Requested move is not among the mover's legal moves
    #[error("illegal move {from} -> {to}")]
    IllegalMove { from: Pos, to: Pos },
}

pub type Result<T> = std::result::Result<T, AtaxxError>;
