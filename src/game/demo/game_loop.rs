//! Interactive terminal session.
//!
//! Reads picks as `x y` lines. `r` restarts, `q` quits.

use std::io::{self, BufRead, Write};

use log::{info, warn};

use crate::config::{BoardConfig, ConfigError};
use crate::game::demo::render::{TerminalFrontend, print_grid, print_status};
use crate::game::state::Board;
use crate::game::types::Position;

enum Command {
    Pick(Position),
    Restart,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    match line {
        "q" | "quit" => return Some(Command::Quit),
        "r" | "restart" => return Some(Command::Restart),
        _ => {}
    }
    let mut parts = line.split_whitespace();
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Command::Pick(Position::new(x, y)))
}

fn show(board: &Board<TerminalFrontend>) {
    print_grid(board.grid(), board.frontend().eyes);
    print_status(board.frontend());
}

/// Run a session until the player quits or stdin closes.
pub fn run_game_loop(config: BoardConfig) -> Result<(), ConfigError> {
    let mut board = Board::new(config, TerminalFrontend::default())?;
    board.start_game();
    info!("[Demo] Session {} started", board.session_id());
    show(&board);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("Pick a tile (x y), r to restart, q to quit: ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                warn!("[Demo] Failed to read input: {}", e);
                break;
            }
            None => break,
        };

        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::Restart) => {
                board.start_game();
                show(&board);
            }
            Some(Command::Pick(position)) => {
                if board.is_game_over() {
                    println!("Game over. Press r to play again.");
                    continue;
                }
                board.select(position);
                show(&board);
            }
            None => println!("Could not read '{}'", line.trim()),
        }
    }

    info!("[Demo] Session {} ended with score {}", board.session_id(), board.score());
    Ok(())
}
