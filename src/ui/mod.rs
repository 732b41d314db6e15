//! Desktop client for Ataxx
//!
//! Native GUI built on egui/eframe. The engine never touches the UI; the
//! computer's search runs on a worker thread against a cloned game state.

mod app;
mod board_view;
mod session;
mod theme;

pub use app::{outcome_text, AtaxxApp};
pub use session::{AiState, GameMode, Session};
pub use theme::CELL_PIXELS;
