//! Visual refresh and slime wiggle.

use log::info;

use crate::game::grid::Grid;
use crate::game::ports::Frontend;
use crate::game::state::Board;
use crate::game::systems::slime::largest_chain;
use crate::game::tile::Tile;
use crate::game::types::AnimationKind;

/// Refresh cached links and wiggle every slime tile as one batch.
pub fn wiggle_slime<F: Frontend>(board: &mut Board<F>) {
    board.grid.refresh_links();
    let slimes: Vec<Tile> = board.grid.tiles().filter(|t| t.is_slime()).copied().collect();
    if !slimes.is_empty() {
        board.frontend.animate_batch(AnimationKind::Wiggle, &slimes);
    }
}

/// Redraw every tile, report the surviving slime's size as lives and put the
/// eyes on its center. With no slime left, the game is over.
pub fn handle_grid_visual<F: Frontend>(board: &mut Board<F>) {
    board.grid.refresh_links();
    let mut slimes = Vec::new();
    for tile in board.grid.tiles() {
        board.frontend.refresh_visual(tile);
        if tile.is_slime() {
            slimes.push(*tile);
        }
    }

    let chains = board.grid.slime_chains();
    let Some(survivor) = largest_chain(&chains) else {
        board.lives = 0;
        board.eye_tile = None;
        board.game_over = true;
        board.frontend.set_lives(0);
        board.frontend.show_message(&board.config.game_over_message);
        info!("[Board] Game over session={} score={}", board.session_id, board.score);
        return;
    };

    let chain = &chains[survivor];
    board.lives = chain.len();
    board.frontend.set_lives(board.lives);
    board.frontend.animate_batch(AnimationKind::Wiggle, &slimes);

    board.eye_tile = Grid::center_tile(chain);
    if let Some(eye) = board.eye_tile.and_then(|p| board.grid.tile(p)) {
        board.frontend.show_eyes(eye);
    }
}
