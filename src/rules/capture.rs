//! Move application and the adjacency capture rule
//!
//! After any placement, every piece of the opponent in the 8-neighbourhood of
//! the destination is recoloured to the mover. Captures only recolour; they
//! never change the number of occupied cells.

use crate::board::{Board, Cell, Player, Pos};

use super::movegen::{legal_moves_from, Move, MoveKind};

/// Flip every opposing piece adjacent to `pos` to `player`.
///
/// The cell at `pos` itself is not touched.
///
/// # Returns
/// Number of pieces flipped
pub fn capture_adjacent(board: &mut Board, pos: Pos, player: Player) -> usize {
    let opponent = player.opponent().cell();
    let (row, col) = (pos.row as i32, pos.col as i32);
    let mut flipped = 0;

    for dr in -1..=1 {
        for dc in -1..=1 {
            let Some(adj) = board.pos_at(row + dr, col + dc) else {
                continue;
            };
            if adj != pos && board.cell(adj) == opponent {
                board.set(adj, player.cell());
                flipped += 1;
            }
        }
    }

    flipped
}

/// Execute an already-validated move.
///
/// Walks place a new piece next to the source; jumps relocate the source
/// piece. Either way the destination then captures its neighbours.
///
/// # Returns
/// Number of pieces captured
pub fn execute_move(board: &mut Board, mv: Move, player: Player) -> usize {
    debug_assert_eq!(
        mv.from.distance(mv.to),
        match mv.kind {
            MoveKind::Walk => 1,
            MoveKind::Jump => 2,
        },
        "move {mv} does not match its kind"
    );
    board.set(mv.to, player.cell());
    if mv.kind == MoveKind::Jump {
        board.set(mv.from, Cell::Empty);
    }
    capture_adjacent(board, mv.to, player)
}

/// Apply the move `from -> to` for `player` if it is legal.
///
/// The move class is looked up among the generated moves from `from`, so a
/// request is legal only if `from` is owned by `player` and `to` is one of its
/// empty walk or jump targets.
///
/// # Returns
/// `true` if the move was applied, `false` (board untouched) otherwise
pub fn apply_move(board: &mut Board, from: Pos, to: Pos, player: Player) -> bool {
    if !board.contains(from.row as i32, from.col as i32) {
        return false;
    }

    match legal_moves_from(board, from, player).find(from, to) {
        Some(mv) => {
            execute_move(board, mv, player);
            true
        }
        None => false,
    }
}
