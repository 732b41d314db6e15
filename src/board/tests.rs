use super::*;
use crate::error::AtaxxError;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::A.opponent(), Player::B);
    assert_eq!(Player::B.opponent(), Player::A);
    assert_eq!(-Player::A, Player::B);
    assert_eq!(-(-Player::B), Player::B);
}

#[test]
fn test_signed_identifiers() {
    assert_eq!(Player::A.sign(), 1);
    assert_eq!(Player::B.sign(), -1);
    assert_eq!(Player::A.sign() * -1, Player::B.sign());
    assert_eq!(Cell::Empty.value(), 0);
    assert_eq!(Cell::PlayerA.value(), 1);
    assert_eq!(Cell::PlayerB.value(), -1);
}

#[test]
fn test_cell_owner() {
    assert_eq!(Cell::Empty.owner(), None);
    assert_eq!(Cell::PlayerA.owner(), Some(Player::A));
    assert_eq!(Cell::from(Player::B), Cell::PlayerB);
    assert!(Cell::PlayerB.is_owned_by(Player::B));
    assert!(!Cell::PlayerB.is_owned_by(Player::A));
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_pos_distance_and_label() {
    assert_eq!(Pos::new(3, 3).distance(Pos::new(4, 2)), 1);
    assert_eq!(Pos::new(3, 3).distance(Pos::new(5, 4)), 2);
    assert_eq!(Pos::new(0, 0).to_string(), "A1");
    assert_eq!(Pos::new(6, 2).to_string(), "C7");

    // Public fields bypass `Pos::new`; labelling must not overflow
    let wide = Pos { row: 0, col: 255 };
    assert_eq!(wide.to_string(), format!("{}1", char::from(b'A'.wrapping_add(255))));
}

#[test]
fn test_starting_layout() {
    let board = Board::new(7, 7).unwrap();
    assert_eq!(board.cell(Pos::new(0, 0)), Cell::PlayerB);
    assert_eq!(board.cell(Pos::new(6, 6)), Cell::PlayerB);
    assert_eq!(board.cell(Pos::new(6, 0)), Cell::PlayerA);
    assert_eq!(board.cell(Pos::new(0, 6)), Cell::PlayerA);
    assert_eq!(board.count(Player::A), 2);
    assert_eq!(board.count(Player::B), 2);
    assert_eq!(board.empty_count(), 45);
}

#[test]
fn test_rectangular_layout() {
    let board = Board::new(3, 5).unwrap();
    assert_eq!(board.rows(), 3);
    assert_eq!(board.cols(), 5);
    assert_eq!(board.to_string(), "B...A\n.....\nA...B\n");
}

#[test]
fn test_invalid_dimensions() {
    assert_eq!(
        Board::new(0, 7),
        Err(AtaxxError::InvalidDimension { rows: 0, cols: 7 })
    );
    assert!(Board::new(1, 1).is_err());
    assert!(Board::new(7, 27).is_err());
    assert!(Board::new(2, 2).is_ok());
    assert!(Board::new(26, 26).is_ok());
}

#[test]
fn test_get_bounds() {
    let board = Board::new(7, 7).unwrap();
    assert_eq!(board.get(0, 0), Ok(Cell::PlayerB));
    assert_eq!(board.get(3, 3), Ok(Cell::Empty));
    assert_eq!(board.get(-1, 0), Err(AtaxxError::OutOfBounds { row: -1, col: 0 }));
    assert_eq!(board.get(0, 7), Err(AtaxxError::OutOfBounds { row: 0, col: 7 }));
}

#[test]
fn test_is_empty_is_total() {
    let board = Board::new(7, 7).unwrap();
    assert!(board.is_empty(3, 3));
    assert!(!board.is_empty(0, 0));
    assert!(!board.is_empty(-1, 3));
    assert!(!board.is_empty(3, -2));
    assert!(!board.is_empty(7, 3));
    assert!(!board.is_empty(3, 8));
}

#[test]
fn test_clone_does_not_alias() {
    let original = Board::new(7, 7).unwrap();
    let mut copy = original.clone();
    copy.set(Pos::new(3, 3), Cell::PlayerA);

    assert_eq!(original.cell(Pos::new(3, 3)), Cell::Empty);
    assert_eq!(copy.cell(Pos::new(3, 3)), Cell::PlayerA);
}

#[test]
fn test_pieces_row_major() {
    let board = Board::new(7, 7).unwrap();
    let pieces: Vec<_> = board.pieces(Player::B).collect();
    assert_eq!(pieces, vec![Pos::new(0, 0), Pos::new(6, 6)]);
    assert_eq!(board.positions().count(), 49);
}

#[test]
fn test_fill_empty() {
    let mut board = Board::parse(&["AB.", "...", "..B"]);
    assert_eq!(board.fill_empty(Player::A), 6);
    assert!(board.is_full());
    assert_eq!(board.count(Player::A), 7);
    assert_eq!(board.count(Player::B), 2);
    assert_eq!(board.occupied_count(), 9);
}

#[test]
fn test_balance_sums_cell_values() {
    assert_eq!(Cell::PlayerA.value(), 1);
    assert_eq!(Cell::PlayerB.value(), -1);
    assert_eq!(Cell::Empty.value(), 0);

    let board = Board::parse(&["AB.", "...", "..B"]);
    assert_eq!(board.balance(), -1);
    assert_eq!(Board::new(7, 7).unwrap().balance(), 0);
}
