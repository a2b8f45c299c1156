//! Match phase.

use log::debug;

use crate::game::ports::Frontend;
use crate::game::state::Board;
use crate::game::systems::kill::kill_tiles;
use crate::game::types::Cue;

/// Destroy every match on the board, one structure at a time.
/// Returns true if anything was destroyed.
pub fn handle_matches<F: Frontend>(board: &mut Board<F>) -> bool {
    let mut changed = false;
    for position in board.grid.positions() {
        if !board.grid.should_destroy(position) {
            continue;
        }
        let structure = board.grid.match_group(position);
        debug!("[Matches] {:?} at {:?} size={}", board.grid.kind(position), position, structure.len());
        kill_tiles(board, &structure, Cue::Collect);
        changed = true;
    }
    changed
}
