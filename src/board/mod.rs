//! Board representation for Ataxx

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;

/// Smallest supported side length (keeps the four starting corners distinct)
pub const MIN_SIZE: usize = 2;
/// Largest supported side length (columns are labelled A-Z)
pub const MAX_SIZE: usize = 26;
/// Reference board side length
pub const DEFAULT_SIZE: usize = 7;

/// The two sides.
///
/// Each side has a signed identifier (A = +1, B = -1) so that negation flips
/// ownership and toggles the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    A,
    B,
}

impl Player {
    /// Get opponent
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Signed identifier of this side
    #[inline]
    pub fn sign(self) -> i8 {
        match self {
            Player::A => 1,
            Player::B => -1,
        }
    }

    /// Cell value owned by this side
    #[inline]
    pub fn cell(self) -> Cell {
        match self {
            Player::A => Cell::PlayerA,
            Player::B => Cell::PlayerB,
        }
    }
}

impl std::ops::Neg for Player {
    type Output = Player;

    #[inline]
    fn neg(self) -> Player {
        self.opponent()
    }
}

/// Contents of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    PlayerA,
    PlayerB,
}

impl Cell {
    /// Signed value: 0 for empty, otherwise the owner's identifier
    #[inline]
    pub fn value(self) -> i8 {
        self.owner().map_or(0, Player::sign)
    }

    #[inline]
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerA => Some(Player::A),
            Cell::PlayerB => Some(Player::B),
        }
    }

    #[inline]
    pub fn is_owned_by(self, player: Player) -> bool {
        self == player.cell()
    }

    /// Single-character glyph used by the text rendering
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::PlayerA => 'A',
            Cell::PlayerB => 'B',
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        player.cell()
    }
}

/// Position on the board.
///
/// Ordering is row-major, which is also the order pieces and targets are
/// enumerated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < MAX_SIZE && (col as usize) < MAX_SIZE);
        Self { row, col }
    }

    /// Chebyshev distance (king-move distance) to another position
    #[inline]
    pub fn distance(self, other: Pos) -> u8 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Fields are public, so `col` may exceed the labelled range
        let letter = char::from(b'A'.wrapping_add(self.col));
        write!(f, "{}{}", letter, self.row as u32 + 1)
    }
}
