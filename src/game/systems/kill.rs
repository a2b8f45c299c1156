//! Kill protocol.
//!
//! Destroys a structure as one batch, scores it, spawns a bomb at its center
//! when the shape qualifies, grows slime from Growth tiles and lets Death
//! tiles take neighbouring slime down with them.

use log::debug;

use crate::game::grid::Grid;
use crate::game::ports::Frontend;
use crate::game::state::Board;
use crate::game::structure::Structure;
use crate::game::types::{AnimationKind, Cue, ItemKind, Position};

/// Destroy every tile of `structure`, playing `cue` once.
pub fn kill_tiles<F: Frontend>(board: &mut Board<F>, structure: &Structure, cue: Cue) {
    if structure.is_empty() {
        return;
    }

    let mut growth_tiles = Vec::new();
    let mut death_tiles = Vec::new();
    for &position in structure.tiles() {
        let kind = board.grid.kind(position);
        if kind == ItemKind::Growth && board.grid.is_neighbouring_slime(position) {
            growth_tiles.push(position);
        }
        if kind == ItemKind::Death && board.grid.is_neighbouring_slime(position) {
            death_tiles.push(position);
        }
        let value = board.catalog.value(kind);
        board.add_score(value);
    }

    debug!(
        "[Kill] {:?} tiles={} growth={} death={} score={}",
        cue, structure.len(), growth_tiles.len(), death_tiles.len(), board.score
    );
    board.frontend.play(cue);
    let batch = board.snapshot(structure.tiles());
    board.frontend.animate_batch(AnimationKind::Kill, &batch);

    let bomb_tile = match structure.bomb_kind(&board.bombs) {
        Some(bomb) => grow_bomb(board, structure.tiles(), bomb),
        None => None,
    };

    if !growth_tiles.is_empty() {
        grow_slime(board, &growth_tiles);
    }
    if !death_tiles.is_empty() {
        kill_neighbouring_slime(board, &death_tiles);
    }

    for &position in structure.tiles() {
        if growth_tiles.contains(&position) || bomb_tile == Some(position) {
            continue;
        }
        board.grid.set_kind(position, ItemKind::None);
    }
    board.grid.refresh_links();
}

/// Put a bomb on the center tile of a destroyed structure.
fn grow_bomb<F: Frontend>(board: &mut Board<F>, tiles: &[Position], bomb: ItemKind) -> Option<Position> {
    let center = Grid::center_tile(tiles)?;
    board.grid.set_kind(center, bomb);
    board.grid.on_grid_changed(center);
    debug!("[Kill] Spawned {:?} at {:?}", bomb, center);

    let batch = board.snapshot(&[center]);
    board.frontend.animate_batch(AnimationKind::Spawn, &batch);
    Some(center)
}

/// Turn tiles into slime. Tiles already holding a bomb are left alone.
pub fn grow_slime<F: Frontend>(board: &mut Board<F>, tiles: &[Position]) {
    let mut grown = Vec::new();
    for &position in tiles {
        match board.grid.tile(position) {
            Some(tile) if !tile.is_bomb() => {}
            _ => continue,
        }
        board.grid.set_kind(position, ItemKind::Slime);
        grown.push(position);
    }
    board.grid.refresh_links();

    board.frontend.play(Cue::SlimeSpawn);
    let batch = board.snapshot(&grown);
    board.frontend.animate_batch(AnimationKind::Spawn, &batch);
}

/// Kill the slime touching any of the given Death tiles.
fn kill_neighbouring_slime<F: Frontend>(board: &mut Board<F>, death_tiles: &[Position]) {
    let mut slimes = Structure::new();
    for &position in death_tiles {
        let neighbours: Vec<Position> = board.grid.neighbours(position)
            .filter(|n| board.grid.kind(*n) == ItemKind::Slime)
            .collect();
        slimes.extend(neighbours);
    }

    if !slimes.is_empty() {
        kill_tiles(board, &slimes, Cue::SlimeKill);
    }
}
