//! Legal move generation
//!
//! Two move classes exist:
//! - **Walk**: place a new piece on an empty cell at Chebyshev distance 1 from
//!   an owned piece. The source piece stays.
//! - **Jump**: relocate an owned piece to an empty cell at Chebyshev distance
//!   exactly 2 (outer ring of its 5x5 block). The source becomes empty.
//!
//! Targets are produced in row-major offset order and pieces are scanned
//! row-major, so the generated sequence is deterministic.

use crate::board::{Board, Player, Pos};

/// Move class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Walk,
    Jump,
}

/// A generated move, tagged with its class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Pos,
    pub to: Pos,
    pub kind: MoveKind,
}

impl Move {
    #[inline]
    pub fn walk(from: Pos, to: Pos) -> Self {
        Self { from, to, kind: MoveKind::Walk }
    }

    #[inline]
    pub fn jump(from: Pos, to: Pos) -> Self {
        Self { from, to, kind: MoveKind::Jump }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sep = match self.kind {
            MoveKind::Walk => '-',
            MoveKind::Jump => '>',
        };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}

/// Legal moves for one side, split by class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegalMoves {
    pub walks: Vec<Move>,
    pub jumps: Vec<Move>,
}

impl LegalMoves {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.walks.is_empty() && self.jumps.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.walks.len() + self.jumps.len()
    }

    /// All moves, walks first, in generation order
    pub fn iter(&self) -> impl Iterator<Item = &Move> + '_ {
        self.walks.iter().chain(self.jumps.iter())
    }

    /// Find the legal move from `from` to `to`, if any
    pub fn find(&self, from: Pos, to: Pos) -> Option<Move> {
        self.iter().copied().find(|m| m.from == from && m.to == to)
    }

    /// Destinations reachable from a single source
    pub fn targets_from(&self, from: Pos) -> impl Iterator<Item = Pos> + '_ {
        self.iter().filter(move |m| m.from == from).map(|m| m.to)
    }
}

/// Empty in-bounds cells at exactly the given Chebyshev radius
fn ring_targets(board: &Board, pos: Pos, radius: i32) -> Vec<Pos> {
    let (row, col) = (pos.row as i32, pos.col as i32);
    let mut targets = Vec::new();

    for dr in -radius..=radius {
        for dc in -radius..=radius {
            if dr.abs().max(dc.abs()) != radius {
                continue;
            }
            if board.is_empty(row + dr, col + dc) {
                targets.push(Pos::new((row + dr) as u8, (col + dc) as u8));
            }
        }
    }

    targets
}

/// Empty cells adjacent (8-neighbourhood) to `pos`
pub fn walk_targets(board: &Board, pos: Pos) -> Vec<Pos> {
    ring_targets(board, pos, 1)
}

/// Empty cells on the outer ring of the 5x5 block around `pos`
pub fn jump_targets(board: &Board, pos: Pos) -> Vec<Pos> {
    ring_targets(board, pos, 2)
}

/// Generate every legal move for `player` from a single source.
///
/// Returns nothing if the source is off the board or not owned by `player`.
pub fn legal_moves_from(board: &Board, from: Pos, player: Player) -> LegalMoves {
    let mut moves = LegalMoves::default();
    let owned = board
        .get(from.row as i32, from.col as i32)
        .is_ok_and(|cell| cell.is_owned_by(player));
    if !owned {
        return moves;
    }

    moves.walks = walk_targets(board, from)
        .into_iter()
        .map(|to| Move::walk(from, to))
        .collect();
    moves.jumps = jump_targets(board, from)
        .into_iter()
        .map(|to| Move::jump(from, to))
        .collect();
    moves
}

/// Generate every legal move for `player`.
///
/// Pieces are scanned row-major; each piece contributes its walk targets to
/// `walks` and its jump targets to `jumps`.
pub fn legal_moves(board: &Board, player: Player) -> LegalMoves {
    let mut moves = LegalMoves::default();

    for from in board.pieces(player) {
        moves
            .walks
            .extend(walk_targets(board, from).into_iter().map(|to| Move::walk(from, to)));
        moves
            .jumps
            .extend(jump_targets(board, from).into_iter().map(|to| Move::jump(from, to)));
    }

    moves
}

/// Check whether `player` has at least one legal move
pub fn has_legal_move(board: &Board, player: Player) -> bool {
    board.pieces(player).any(|from| {
        let (row, col) = (from.row as i32, from.col as i32);
        (-2..=2).any(|dr| (-2..=2).any(|dc| board.is_empty(row + dr, col + dc)))
    })
}
