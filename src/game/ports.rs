//! External collaborators the engine drives.
//!
//! The engine owns the grid and is its only writer. Collaborators get
//! read-only tile snapshots. Every animation call blocks until the animation
//! has finished, which is what keeps phases from overlapping.

use crate::game::tile::Tile;
use crate::game::types::{AnimationKind, Cue};

/// Animates tiles and renders their state.
pub trait Presentation {
    fn animate_select(&mut self, tile: &Tile);
    fn animate_deselect(&mut self, tile: &Tile);
    fn animate_wiggle(&mut self, tile: &Tile);
    /// Visual exchange of two tiles; the engine swaps data right after it returns.
    fn animate_swap(&mut self, a: &Tile, b: &Tile, speed: f32);
    /// One grouped animation for all given tiles, returning when the whole batch is done.
    fn animate_batch(&mut self, kind: AnimationKind, tiles: &[Tile]);
    fn refresh_visual(&mut self, tile: &Tile);
    /// Mark the tile showing the slime's eyes.
    fn show_eyes(&mut self, tile: &Tile);
}

/// Score and remaining lives display.
pub trait ScoreBoard {
    fn add_score(&mut self, delta: i64);
    fn reset_score(&mut self);
    fn set_lives(&mut self, lives: usize);
}

pub trait MessagePanel {
    fn show_message(&mut self, text: &str);
    fn hide(&mut self);
}

pub trait AudioPlayer {
    fn play(&mut self, cue: Cue);
}

/// Everything the engine talks to, as one bundle.
pub trait Frontend: Presentation + ScoreBoard + MessagePanel + AudioPlayer {}

impl<T: Presentation + ScoreBoard + MessagePanel + AudioPlayer> Frontend for T {}
