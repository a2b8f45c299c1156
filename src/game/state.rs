//! The board engine.
//!
//! `Board` owns the grid and every collaborator it drives. It runs the
//! session bootstrap, the two-pick selection protocol and the phase loop
//! (matches, floating tiles, slime containment, blank refill) to a fixed
//! point after every successful swap.

use log::{debug, info, trace};
use rand::SeedableRng;
use rand::rngs::StdRng;
use uuid::Uuid;

use crate::config::{BoardConfig, ConfigError};
use crate::game::catalog::ItemCatalog;
use crate::game::grid::Grid;
use crate::game::ports::Frontend;
use crate::game::structure::BombRule;
use crate::game::systems::{
    grow_slime, handle_blank_tiles, handle_floating_tiles, handle_grid_visual, handle_matches,
    handle_slime_tiles, wiggle_slime,
};
use crate::game::tile::Tile;
use crate::game::types::{ItemKind, Phase, Position};

pub struct Board<F: Frontend> {
    pub(crate) session_id: Uuid,
    pub(crate) config: BoardConfig,
    pub(crate) grid: Grid,
    pub(crate) catalog: ItemCatalog,
    pub(crate) bombs: Vec<BombRule>,
    pub(crate) frontend: F,
    pub(crate) rng: StdRng,
    pub(crate) score: i64,
    pub(crate) lives: usize,
    pub(crate) game_over: bool,
    pub(crate) eye_tile: Option<Position>,
    selection: Vec<Position>,
    pub(crate) block_selection: bool,
}

impl<F: Frontend> Board<F> {
    /// Build a board for one session. Fails on invalid configuration.
    pub fn new(config: BoardConfig, frontend: F) -> Result<Self, ConfigError> {
        Self::with_rng(config, frontend, StdRng::from_rng(&mut rand::rng()))
    }

    /// Same as `new`, with a fixed seed for reproducible refills.
    pub fn with_seed(config: BoardConfig, frontend: F, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, frontend, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: BoardConfig, mut frontend: F, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let catalog = ItemCatalog::new(config.catalog.clone()).ok_or(ConfigError::EmptyCatalog)?;
        let grid = Grid::new(config.columns, config.rows);
        let bombs = config.bombs.clone();
        frontend.reset_score();

        let session_id = Uuid::new_v4();
        info!(
            "[Board] Created session={} grid={}x{} spawn={:?}",
            session_id, config.columns, config.rows, config.player_spawn
        );

        Ok(Self {
            session_id,
            config,
            grid,
            catalog,
            bombs,
            frontend,
            rng,
            score: 0,
            lives: 0,
            game_over: false,
            eye_tile: None,
            selection: Vec::new(),
            block_selection: false,
        })
    }

    /// Reset the board and start a new game: clear every tile, spawn the
    /// player's slime, fill the rest and reset the score.
    pub fn start_game(&mut self) {
        self.frontend.hide();
        for position in self.grid.positions() {
            self.grid.set_kind(position, ItemKind::None);
        }
        self.grid.take_triggered();
        self.selection.clear();
        self.block_selection = false;
        self.game_over = false;
        self.eye_tile = None;

        self.spawn_player();
        handle_blank_tiles(self);
        handle_grid_visual(self);

        self.score = 0;
        self.frontend.reset_score();
        info!("[Board] Game started session={} lives={}", self.session_id, self.lives);
    }

    fn spawn_player(&mut self) {
        let spawn = self.config.player_spawn.clone();
        self.lives = spawn.len();
        self.frontend.set_lives(self.lives);
        grow_slime(self, &spawn);
    }

    /// Handle one pick from the player. Invalid picks are ignored or answered
    /// with a wiggle; nothing here ever fails.
    pub fn select(&mut self, position: Position) {
        if self.block_selection {
            trace!("[Board] Selection blocked, ignoring {:?}", position);
            return;
        }
        let Some(tile) = self.grid.tile(position).copied() else {
            return;
        };
        if tile.is_slime() {
            return;
        }
        self.block_selection = true;

        if let Some(index) = self.selection.iter().position(|p| *p == position) {
            self.selection.remove(index);
            let tile = self.set_triggered(position, false);
            self.frontend.animate_deselect(&tile);
            self.block_selection = false;
            return;
        }

        if let Some(&first) = self.selection.first() {
            if !self.grid.are_adjacent(first, position) {
                self.frontend.animate_wiggle(&tile);
                self.block_selection = false;
                return;
            }
        }

        self.selection.push(position);
        let tile = self.set_triggered(position, true);
        self.frontend.animate_select(&tile);

        if self.selection.len() < 2 {
            self.block_selection = false;
            return;
        }

        let (a, b) = (self.selection[0], self.selection[1]);
        let speed = self.config.swap_speed;
        self.swap_tiles(a, b, speed);

        if self.grid.has_matches() {
            debug!("[Board] Swap {:?} <-> {:?} made a match", a, b);
            self.handle_grid(Phase::Matches);
        } else {
            debug!("[Board] Swap {:?} <-> {:?} reverted", a, b);
            self.swap_tiles(a, b, speed);
        }

        self.clear_selection();
        self.block_selection = false;
    }

    /// Run the phase loop from `start` until the blank refill has run, then
    /// refresh visuals and derived lives.
    pub fn handle_grid(&mut self, start: Phase) {
        wiggle_slime(self);

        let mut phase = start;
        while phase != Phase::Done {
            let next = match phase {
                Phase::Matches => {
                    if handle_matches(self) {
                        Phase::Floating
                    } else {
                        Phase::Slime
                    }
                }
                Phase::Floating => {
                    if handle_floating_tiles(self) {
                        Phase::Matches
                    } else {
                        Phase::Slime
                    }
                }
                Phase::Slime => {
                    if handle_slime_tiles(self) {
                        Phase::Floating
                    } else {
                        Phase::Blank
                    }
                }
                Phase::Blank => {
                    handle_blank_tiles(self);
                    Phase::Done
                }
                Phase::Done => Phase::Done,
            };
            trace!("[Board] Phase {:?} -> {:?}", phase, next);
            phase = next;
        }

        handle_grid_visual(self);
    }

    /// Animate two tiles trading places, then swap their data.
    pub(crate) fn swap_tiles(&mut self, a: Position, b: Position, speed: f32) {
        let (Some(tile_a), Some(tile_b)) = (self.grid.tile(a).copied(), self.grid.tile(b).copied()) else {
            return;
        };
        self.frontend.animate_swap(&tile_a, &tile_b, speed);
        self.grid.swap_data(a, b);
    }

    pub(crate) fn add_score(&mut self, delta: i64) {
        self.score += delta;
        self.frontend.add_score(delta);
    }

    /// Read-only copies of the given tiles, for the presentation layer.
    pub(crate) fn snapshot(&self, positions: &[Position]) -> Vec<Tile> {
        positions.iter().filter_map(|p| self.grid.tile(*p).copied()).collect()
    }

    fn set_triggered(&mut self, position: Position, triggered: bool) -> Tile {
        match self.grid.tile_mut(position) {
            Some(tile) => {
                tile.triggered = triggered;
                *tile
            }
            None => Tile::new(position),
        }
    }

    fn clear_selection(&mut self) {
        self.selection.clear();
        for position in self.grid.take_triggered() {
            if let Some(tile) = self.grid.tile(position) {
                self.frontend.refresh_visual(tile);
            }
        }
    }

    pub fn has_matches(&self) -> bool {
        self.grid.has_matches()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    /// Size of the surviving slime chain as of the last visual refresh.
    pub fn lives(&self) -> usize {
        self.lives
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_selection_blocked(&self) -> bool {
        self.block_selection
    }

    pub fn selection(&self) -> &[Position] {
        &self.selection
    }

    pub fn eye_tile(&self) -> Option<Position> {
        self.eye_tile
    }
}
