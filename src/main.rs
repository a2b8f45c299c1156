//! Terminal entry point.
//!
//! Usage: `slime-grid [config.json]`. Without an argument the default board
//! configuration is used. Set `RUST_LOG=debug` to follow the engine.

use log::{error, info};

use slime_grid::config::BoardConfig;
use slime_grid::game::demo::game_loop::run_game_loop;

fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!("[Main] Loading board config from {}", path);
            BoardConfig::from_file(&path)
        }
        None => Ok(BoardConfig::default()),
    };

    let result = config.and_then(run_game_loop);
    if let Err(e) = result {
        error!("[Main] {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
