//! Gravity phase: empty tiles bubble up, filled tiles settle down.

use log::trace;

use crate::game::ports::Frontend;
use crate::game::state::Board;
use crate::game::types::{ItemKind, Position};

/// Settle every column. Each move is an animated swap between a filled tile
/// and the lowest known empty slot below it. Returns true if anything moved.
pub fn handle_floating_tiles<F: Frontend>(board: &mut Board<F>) -> bool {
    let mut changed = false;
    let speed = board.config.gravity_swap_speed;
    let (width, height) = (board.grid.width(), board.grid.height());

    for x in 0..width {
        let mut blank: Option<Position> = None;
        let mut y = height;
        while y > 0 {
            y -= 1;
            let position = Position { x, y };
            let empty = board.grid.kind(position) == ItemKind::None;
            match blank {
                Some(target) if !empty => {
                    trace!("[Gravity] {:?} falls to {:?}", position, target);
                    board.swap_tiles(position, target, speed);
                    // Resume right above the slot that was just filled.
                    y = target.y;
                    blank = None;
                    changed = true;
                }
                None if empty => blank = Some(position),
                _ => {}
            }
        }
    }
    changed
}
