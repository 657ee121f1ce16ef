//! 4x4 tic-tac-toe GUI
//!
//! Play `O` against the rule-based computer player.

use std::path::Path;

use env_logger::Env;
use log::{error, info};
use tictactoe::config::{AppConfig, CONFIG_FILE};
use tictactoe::ui::TicTacToeApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = AppConfig::load_or_default(Path::new(CONFIG_FILE)).unwrap_or_else(|e| {
        error!("{}, using defaults", e);
        AppConfig::default()
    });
    info!("starting with {:?}", config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.ui.window_width, config.ui.window_height])
            .with_min_inner_size([320.0, 320.0])
            .with_title("4x4 Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "tictactoe",
        options,
        Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, &config)))),
    )
}
