//! Ataxx desktop client
//!
//! Play against the computer or another person on one screen.

use ataxx::ui::{AtaxxApp, CELL_PIXELS};
use ataxx::GameConfig;
use tracing_subscriber::EnvFilter;

/// Room for the side panel, menu bar and board margins
const CHROME: [f32; 2] = [320.0, 90.0];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = GameConfig::default();
    let app = AtaxxApp::new(config)?;
    tracing::info!(rows = config.rows, cols = config.cols, depth = config.search_depth, "starting");

    let width = config.cols as f32 * CELL_PIXELS + CHROME[0];
    let height = config.rows as f32 * CELL_PIXELS + CHROME[1];
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_min_inner_size([480.0, 360.0])
            .with_title("Ataxx"),
        ..Default::default()
    };

    eframe::run_native("Ataxx", options, Box::new(move |_cc| Ok(Box::new(app))))?;
    Ok(())
}
