//! Terminal frontend.
//!
//! Animations are instantaneous here: each call prints a line (or logs it at
//! debug level) and returns, so the engine never waits.

use log::debug;

use crate::game::grid::Grid;
use crate::game::ports::{AudioPlayer, MessagePanel, Presentation, ScoreBoard};
use crate::game::tile::Tile;
use crate::game::types::{AnimationKind, Cue, Position};

#[derive(Debug, Default)]
pub struct TerminalFrontend {
    pub score: i64,
    pub lives: usize,
    pub message: Option<String>,
    pub eyes: Option<Position>,
}

impl Presentation for TerminalFrontend {
    fn animate_select(&mut self, tile: &Tile) {
        println!("Selected ({}, {})", tile.x(), tile.y());
    }

    fn animate_deselect(&mut self, tile: &Tile) {
        println!("Deselected ({}, {})", tile.x(), tile.y());
    }

    fn animate_wiggle(&mut self, tile: &Tile) {
        println!("({}, {}) is not next to your first pick", tile.x(), tile.y());
    }

    fn animate_swap(&mut self, a: &Tile, b: &Tile, speed: f32) {
        debug!("[Terminal] swap {:?} <-> {:?} x{}", a.position(), b.position(), speed);
    }

    fn animate_batch(&mut self, kind: AnimationKind, tiles: &[Tile]) {
        let positions: Vec<Position> = tiles.iter().map(|t| t.position()).collect();
        debug!("[Terminal] {:?} batch {:?}", kind, positions);
    }

    fn refresh_visual(&mut self, _tile: &Tile) {}

    fn show_eyes(&mut self, tile: &Tile) {
        self.eyes = Some(tile.position());
    }
}

impl ScoreBoard for TerminalFrontend {
    fn add_score(&mut self, delta: i64) {
        self.score += delta;
    }

    fn reset_score(&mut self) {
        self.score = 0;
    }

    fn set_lives(&mut self, lives: usize) {
        self.lives = lives;
    }
}

impl MessagePanel for TerminalFrontend {
    fn show_message(&mut self, text: &str) {
        println!("*** {} ***", text);
        self.message = Some(text.to_string());
    }

    fn hide(&mut self) {
        self.message = None;
    }
}

impl AudioPlayer for TerminalFrontend {
    fn play(&mut self, cue: Cue) {
        debug!("[Terminal] cue {:?}", cue);
    }
}

/// Print the grid with column and row indices. The eye tile shows as `@`.
pub fn print_grid(grid: &Grid, eyes: Option<Position>) {
    print!("   ");
    for x in 0..grid.width() {
        print!("{:<2}", x);
    }
    println!();

    for (y, row) in grid.render_rows().iter().enumerate() {
        print!("{:<3}", y);
        for (x, symbol) in row.chars().enumerate() {
            let symbol = if eyes == Some(Position::new(x, y)) { '@' } else { symbol };
            print!("{:<2}", symbol);
        }
        println!();
    }
}

/// Print score and lives.
pub fn print_status(frontend: &TerminalFrontend) {
    println!("Score: {}  Lives: {}", frontend.score, frontend.lives);
    println!();
}
