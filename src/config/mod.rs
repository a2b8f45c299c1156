/// Main configuration module.
///
/// `game` holds the default gameplay constants. `BoardConfig` is the
/// per-session configuration (grid size, player spawn, item catalog, bomb
/// table), loadable from JSON and validated before a board is built.
pub mod game;

use std::collections::HashSet;
use std::path::Path;

use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::game::catalog::{CatalogEntry, default_entries};
use crate::game::structure::{BombRule, BombShape, default_bomb_rules};
use crate::game::types::{ItemKind, Position};
use self::game::{
    GAME_OVER_MESSAGE, GRAVITY_SWAP_SPEED, GRID_COLUMNS, GRID_ROWS, MAX_GRID_TILES, MIN_DRAWABLE_KINDS,
    PLAYER_SPAWN, SWAP_SPEED,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Grid must have at least one row and one column (got {columns}x{rows})")]
    EmptyGrid { columns: usize, rows: usize },

    #[error("Grid of {columns}x{rows} exceeds {max} tiles")]
    GridTooLarge { columns: usize, rows: usize, max: usize },

    #[error("Layout row {row} has {found} columns, expected {expected}")]
    RaggedLayout { row: usize, expected: usize, found: usize },

    #[error("At least one player spawn position is required")]
    NoSpawn,

    #[error("Player spawn ({}, {}) is outside the grid", .0.x, .0.y)]
    SpawnOutOfBounds(Position),

    #[error("Player spawn ({}, {}) is listed twice", .0.x, .0.y)]
    DuplicateSpawn(Position),

    #[error("Item catalog is empty or has no positive draw weight")]
    EmptyCatalog,

    #[error("Item catalog lists {0:?} twice")]
    DuplicateCatalogEntry(ItemKind),

    #[error("{kind:?} cannot be drawn at random (weight {weight})")]
    UndrawableKind { kind: ItemKind, weight: f64 },

    #[error("Catalog draws cannot always avoid a pre-matched refill: need at least {0} drawable kinds")]
    DegenerateCatalog(usize),

    #[error("Bomb rule {0:?} must spawn a bomb kind from a line of 4+ or a cross of 5+ tiles")]
    InvalidBombRule(BombRule),

    #[error("Swap speed must be finite and positive (got {0})")]
    InvalidSwapSpeed(f32),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub columns: usize,
    pub rows: usize,
    pub player_spawn: Vec<Position>,
    pub catalog: Vec<CatalogEntry>,
    pub bombs: Vec<BombRule>,
    pub swap_speed: f32,
    pub gravity_swap_speed: f32,
    pub game_over_message: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            columns: GRID_COLUMNS,
            rows: GRID_ROWS,
            player_spawn: PLAYER_SPAWN.iter().map(|&p| Position::from(p)).collect(),
            catalog: default_entries(),
            bombs: default_bomb_rules(),
            swap_speed: SWAP_SPEED,
            gravity_swap_speed: GRAVITY_SWAP_SPEED,
            game_over_message: GAME_OVER_MESSAGE.to_string(),
        }
    }
}

impl BoardConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: BoardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Default configuration with dimensions taken from row layout data.
    /// Spawn positions are kept as-is and checked by `validate`.
    pub fn from_layout(rows: &[&str]) -> Result<Self, ConfigError> {
        let columns = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != columns {
                return Err(ConfigError::RaggedLayout { row, expected: columns, found });
            }
        }
        let config = BoardConfig { columns, rows: rows.len(), ..BoardConfig::default() };
        config.validate()?;
        Ok(config)
    }

    /// Check everything a session relies on. Any error here is fatal at startup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(ConfigError::EmptyGrid { columns: self.columns, rows: self.rows });
        }
        if self.columns.checked_mul(self.rows).is_none_or(|tiles| tiles > MAX_GRID_TILES) {
            return Err(ConfigError::GridTooLarge { columns: self.columns, rows: self.rows, max: MAX_GRID_TILES });
        }

        if self.player_spawn.is_empty() {
            return Err(ConfigError::NoSpawn);
        }
        let mut spawns = HashSet::new();
        for spawn in &self.player_spawn {
            if spawn.x >= self.columns || spawn.y >= self.rows {
                return Err(ConfigError::SpawnOutOfBounds(*spawn));
            }
            if !spawns.insert(*spawn) {
                return Err(ConfigError::DuplicateSpawn(*spawn));
            }
        }

        let mut kinds = HashSet::new();
        for entry in &self.catalog {
            if !kinds.insert(entry.kind) {
                return Err(ConfigError::DuplicateCatalogEntry(entry.kind));
            }
            let never_drawn = matches!(entry.kind, ItemKind::None | ItemKind::Slime) || entry.kind.is_bomb();
            if !entry.weight.is_finite() || entry.weight < 0.0 || (never_drawn && entry.weight > 0.0) {
                return Err(ConfigError::UndrawableKind { kind: entry.kind, weight: entry.weight });
            }
        }

        // Only matchable kinds are drawable at this point.
        let drawable = self.catalog.iter().filter(|e| e.weight > 0.0).count();
        if drawable == 0 {
            return Err(ConfigError::EmptyCatalog);
        }
        // A refill cell can be blocked by up to three kinds per axis.
        if drawable < MIN_DRAWABLE_KINDS {
            return Err(ConfigError::DegenerateCatalog(MIN_DRAWABLE_KINDS));
        }

        for rule in &self.bombs {
            let shape_ok = match rule.shape {
                BombShape::Line { min_length } => min_length >= 4,
                BombShape::Cross { min_tiles } => min_tiles >= 5,
            };
            if !rule.kind.is_bomb() || !shape_ok {
                return Err(ConfigError::InvalidBombRule(*rule));
            }
        }

        for speed in [self.swap_speed, self.gravity_swap_speed] {
            if !speed.is_finite() || speed <= 0.0 {
                return Err(ConfigError::InvalidSwapSpeed(speed));
            }
        }

        Ok(())
    }
}
