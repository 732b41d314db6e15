//! Evaluation module for Ataxx positions
//!
//! Leaf scoring is pure material: the search compares piece counts, and
//! decided games score a fixed `±WIN_SCORE`.

pub mod heuristic;

pub use heuristic::{score, terminal_score, Evaluator, MaterialBalance, PieceCount, WIN_SCORE};
