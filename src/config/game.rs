/// Game configuration constants.
///
/// This module defines the default gameplay parameters used when no board
/// configuration file is supplied: grid dimensions, player spawn, animation
/// speeds and the end-of-game message.

/// Number of columns in the default grid.
pub const GRID_COLUMNS: usize = 8;

/// Number of rows in the default grid.
pub const GRID_ROWS: usize = 8;

/// Speed multiplier for a player-driven swap.
pub const SWAP_SPEED: f32 = 1.0;

/// Speed multiplier for gravity swaps (settling tiles fall faster than a player swap).
pub const GRAVITY_SWAP_SPEED: f32 = 6.0;

/// Starting slime tiles, as (x, y) pairs. y = 0 is the top row.
pub const PLAYER_SPAWN: [(usize, usize); 3] = [(3, 6), (4, 6), (3, 7)];

/// Message shown once the last slime tile is gone.
pub const GAME_OVER_MESSAGE: &str = "Game Over!";

/// Fewest drawable kinds that always leave a refill draw which does not complete a match.
pub const MIN_DRAWABLE_KINDS: usize = 7;

/// Largest number of tiles a configured grid may hold.
pub const MAX_GRID_TILES: usize = 4096;
