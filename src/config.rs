//! Game configuration
//!
//! Everything is hard-coded through `Default`; the binary takes no flags.

use crate::board::{Board, Player, DEFAULT_SIZE};
use crate::error::Result;

/// Reference search depth in plies
pub const DEFAULT_DEPTH: u32 = 3;

/// Leaf evaluation used by the computer player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyKind {
    /// PlayerB piece count only (reference behaviour)
    #[default]
    Reference,
    /// PlayerB minus PlayerA piece counts
    Balanced,
}

/// Settings for one game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub search_depth: u32,
    /// Side the human controls in games against the computer
    pub human: Player,
    /// Side that moves first
    pub first_player: Player,
    pub strategy: StrategyKind,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_SIZE,
            cols: DEFAULT_SIZE,
            search_depth: DEFAULT_DEPTH,
            human: Player::A,
            first_player: Player::A,
            strategy: StrategyKind::Reference,
        }
    }
}

impl GameConfig {
    /// Check the dimensions against the board limits
    pub fn validate(&self) -> Result<()> {
        Board::empty(self.rows, self.cols).map(|_| ())
    }

    /// Computer side in games against the computer
    #[inline]
    pub fn computer(&self) -> Player {
        self.human.opponent()
    }
}
