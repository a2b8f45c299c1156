//! Blank refill phase.

use log::{debug, trace};

use crate::game::ports::Frontend;
use crate::game::state::Board;
use crate::game::types::{AnimationKind, ItemKind};

/// Give every empty tile a random kind, redrawing until the new kind does not
/// complete a match. Returns true if any tile was filled.
///
/// The redraw loop has no retry cap. `BoardConfig::validate` rejects catalogs
/// that could make it spin forever.
pub fn handle_blank_tiles<F: Frontend>(board: &mut Board<F>) -> bool {
    let mut filled = Vec::new();
    for position in board.grid.positions() {
        if board.grid.kind(position) != ItemKind::None {
            continue;
        }
        let mut redraws = 0usize;
        board.grid.set_kind(position, board.catalog.draw(&mut board.rng));
        while board.grid.should_destroy(position) {
            redraws += 1;
            board.grid.set_kind(position, board.catalog.draw(&mut board.rng));
        }
        if redraws > 0 {
            trace!("[Blank] {:?} redrawn {} times", position, redraws);
        }
        filled.push(position);
    }

    if filled.is_empty() {
        return false;
    }
    debug!("[Blank] Filled {} tiles", filled.len());
    board.grid.refresh_links();
    let batch = board.snapshot(&filled);
    board.frontend.animate_batch(AnimationKind::Spawn, &batch);
    true
}
