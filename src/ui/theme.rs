//! Theme constants for the Ataxx GUI

use egui::Color32;

use crate::Player;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(255, 255, 255);
pub const EMPTY_CELL: Color32 = Color32::from_rgb(0, 0, 0);
pub const COORD_LABEL: Color32 = Color32::from_rgb(90, 90, 90);

// Pieces: PlayerA blue, PlayerB green
pub const PLAYER_A: Color32 = Color32::from_rgb(0, 0, 255);
pub const PLAYER_A_SELECTED: Color32 = Color32::from_rgb(0, 0, 150);
pub const PLAYER_B: Color32 = Color32::from_rgb(0, 255, 0);
pub const PLAYER_B_SELECTED: Color32 = Color32::from_rgb(0, 150, 0);

// Markers
pub const TARGET_CELL: Color32 = Color32::from_rgb(150, 150, 150);
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hover_outline() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 200, 0, 180)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_BUSY: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 28.0;
pub const PIECE_RADIUS_RATIO: f32 = 0.4;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;
/// Cell size the window is sized from
pub const CELL_PIXELS: f32 = 100.0;
pub const SIDE_PANEL_WIDTH: f32 = 260.0;

/// Piece color for a side
pub fn piece_color(player: Player) -> Color32 {
    match player {
        Player::A => PLAYER_A,
        Player::B => PLAYER_B,
    }
}

/// Darker shade used for the selected piece
pub fn selected_color(player: Player) -> Color32 {
    match player {
        Player::A => PLAYER_A_SELECTED,
        Player::B => PLAYER_B_SELECTED,
    }
}

/// Display name of a side
pub fn player_name(player: Player) -> &'static str {
    match player {
        Player::A => "blue",
        Player::B => "green",
    }
}
