//! Board rendering for the Ataxx GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{Board, Cell, Player, Pos};

use super::theme::*;

/// What to draw on top of the pieces
pub struct Overlay<'a> {
    /// Side to move, used for the selection shade
    pub turn: Player,
    pub selected: Option<Pos>,
    /// Legal destinations of the selected piece
    pub targets: &'a [Pos],
    pub last_move: Option<Pos>,
    /// Whether clicks should be reported
    pub interactive: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    rows: usize,
    cols: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: CELL_PIXELS,
            board_rect: Rect::NOTHING,
            rows: 0,
            cols: 0,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, overlay: &Overlay<'_>) -> Option<Pos> {
        self.rows = board.rows();
        self.cols = board.cols();

        let available = ui.available_size();
        let usable = Vec2::new(available.x - 2.0 * BOARD_MARGIN, available.y - 2.0 * BOARD_MARGIN);
        self.cell_size = (usable.x / self.cols as f32)
            .min(usable.y / self.rows as f32)
            .max(8.0);

        let size = Vec2::new(
            self.cols as f32 * self.cell_size + 2.0 * BOARD_MARGIN,
            self.rows as f32 * self.cell_size + 2.0 * BOARD_MARGIN,
        );
        let (response, painter) = ui.allocate_painter(size, Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_coordinates(&painter);
        self.draw_cells(&painter, board, overlay);

        if let Some(pos) = overlay.last_move {
            painter.circle_filled(self.cell_center(pos), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
        }

        if !overlay.interactive {
            return None;
        }

        let hovered = response.hover_pos().and_then(|p| self.screen_to_board(p));
        if let Some(pos) = hovered {
            let radius = self.cell_size * PIECE_RADIUS_RATIO + 2.0;
            painter.circle_stroke(self.cell_center(pos), radius, Stroke::new(3.0, hover_outline()));
        }

        if response.clicked() {
            response
                .interact_pointer_pos()
                .and_then(|p| self.screen_to_board(p))
        } else {
            None
        }
    }

    /// Draw every cell: empty slots, pieces, selection and legal targets
    fn draw_cells(&self, painter: &Painter, board: &Board, overlay: &Overlay<'_>) {
        let radius = self.cell_size * PIECE_RADIUS_RATIO;

        for pos in board.positions() {
            let center = self.cell_center(pos);
            let color = if overlay.selected == Some(pos) {
                selected_color(overlay.turn)
            } else if overlay.targets.contains(&pos) {
                TARGET_CELL
            } else {
                match board.cell(pos) {
                    Cell::Empty => EMPTY_CELL,
                    Cell::PlayerA => PLAYER_A,
                    Cell::PlayerB => PLAYER_B,
                }
            };
            painter.circle_filled(center, radius, color);
        }
    }

    /// Draw coordinate labels (A.., 1..)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for col in 0..self.cols {
            let letter = (b'A' + col as u8) as char;
            let x = self.board_rect.min.x + BOARD_MARGIN + (col as f32 + 0.5) * self.cell_size;
            let pos = Pos2::new(x, self.board_rect.min.y + BOARD_MARGIN * 0.5);
            painter.text(pos, egui::Align2::CENTER_CENTER, letter, font.clone(), COORD_LABEL);
        }

        for row in 0..self.rows {
            let y = self.board_rect.min.y + BOARD_MARGIN + (row as f32 + 0.5) * self.cell_size;
            let pos = Pos2::new(self.board_rect.min.x + BOARD_MARGIN * 0.5, y);
            painter.text(pos, egui::Align2::CENTER_CENTER, format!("{}", row + 1), font.clone(), COORD_LABEL);
        }
    }

    /// Convert screen coordinates to a board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min - Vec2::splat(BOARD_MARGIN);
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        if col >= 0 && (col as usize) < self.cols && row >= 0 && (row as usize) < self.rows {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Center of a cell in screen coordinates
    pub fn cell_center(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + (pos.col as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + (pos.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}
