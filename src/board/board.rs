//! Grid of cells with fixed dimensions

use std::fmt;

use super::{Cell, Player, Pos, MAX_SIZE, MIN_SIZE};
use crate::error::{AtaxxError, Result};

/// Rectangular Ataxx board.
///
/// Dimensions are fixed at construction; the cell vector always holds exactly
/// `rows * cols` entries in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board with the starting layout: PlayerB on the top-left and
    /// bottom-right corners, PlayerA on the other two, everything else empty.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let mut board = Self::empty(rows, cols)?;
        let (last_row, last_col) = ((rows - 1) as u8, (cols - 1) as u8);

        board.set(Pos::new(0, 0), Cell::PlayerB);
        board.set(Pos::new(last_row, last_col), Cell::PlayerB);
        board.set(Pos::new(last_row, 0), Cell::PlayerA);
        board.set(Pos::new(0, last_col), Cell::PlayerA);

        Ok(board)
    }

    /// Create a board with every cell empty
    pub fn empty(rows: usize, cols: usize) -> Result<Self> {
        let valid = MIN_SIZE..=MAX_SIZE;
        if !valid.contains(&rows) || !valid.contains(&cols) {
            return Err(AtaxxError::InvalidDimension { rows, cols });
        }

        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        debug_assert!(self.contains(pos.row as i32, pos.col as i32));
        pos.row as usize * self.cols + pos.col as usize
    }

    /// Check whether signed coordinates fall inside the grid
    #[inline]
    pub fn contains(&self, row: i32, col: i32) -> bool {
        row >= 0 && (row as usize) < self.rows && col >= 0 && (col as usize) < self.cols
    }

    /// Convert signed coordinates into a position, if on the grid
    #[inline]
    pub fn pos_at(&self, row: i32, col: i32) -> Option<Pos> {
        self.contains(row, col)
            .then(|| Pos::new(row as u8, col as u8))
    }

    /// Get the cell at the given coordinates
    pub fn get(&self, row: i32, col: i32) -> Result<Cell> {
        self.pos_at(row, col)
            .map(|pos| self.cell(pos))
            .ok_or(AtaxxError::OutOfBounds { row, col })
    }

    /// Get the cell at a position known to be on this board
    #[inline]
    pub fn cell(&self, pos: Pos) -> Cell {
        self.cells[self.index(pos)]
    }

    /// True iff the coordinates are on the grid and the cell is empty.
    ///
    /// Off-grid coordinates are simply "not empty"; move generation probes
    /// just outside the edges all the time.
    #[inline]
    pub fn is_empty(&self, row: i32, col: i32) -> bool {
        self.pos_at(row, col)
            .is_some_and(|pos| self.cell(pos) == Cell::Empty)
    }

    #[inline]
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        let idx = self.index(pos);
        self.cells[idx] = cell;
    }

    /// Number of pieces owned by `player`
    pub fn count(&self, player: Player) -> usize {
        let target = player.cell();
        self.cells.iter().filter(|&&c| c == target).count()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count()
    }

    /// Sum of signed cell values: PlayerA pieces minus PlayerB pieces
    pub fn balance(&self) -> i32 {
        self.cells.iter().map(|c| i32::from(c.value())).sum()
    }

    /// Total occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.len() - self.empty_count()
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.rows).flat_map(move |row| {
            (0..self.cols).map(move |col| Pos::new(row as u8, col as u8))
        })
    }

    /// Positions owned by `player`, row-major
    pub fn pieces(&self, player: Player) -> impl Iterator<Item = Pos> + '_ {
        self.positions()
            .filter(move |&pos| self.cell(pos).is_owned_by(player))
    }

    /// Assign every empty cell to `player`, returning how many were filled
    pub fn fill_empty(&mut self, player: Player) -> usize {
        let mut filled = 0;
        for cell in self.cells.iter_mut().filter(|c| **c == Cell::Empty) {
            *cell = player.cell();
            filled += 1;
        }
        filled
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let line: String = row.iter().map(|c| c.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
impl Board {
    /// Build a board from text rows using the `Display` glyphs
    pub(crate) fn parse(rows: &[&str]) -> Board {
        let cols = rows[0].len();
        let mut board = Board::empty(rows.len(), cols).expect("test board dimensions");
        for (r, line) in rows.iter().enumerate() {
            assert_eq!(line.len(), cols, "ragged test board");
            for (c, ch) in line.chars().enumerate() {
                let cell = match ch {
                    'A' => Cell::PlayerA,
                    'B' => Cell::PlayerB,
                    _ => Cell::Empty,
                };
                board.set(Pos::new(r as u8, c as u8), cell);
            }
        }
        board
    }
}
