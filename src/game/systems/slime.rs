//! Slime containment: only the largest slime chain survives.

use log::debug;

use crate::game::ports::Frontend;
use crate::game::state::Board;
use crate::game::structure::Structure;
use crate::game::systems::kill::kill_tiles;
use crate::game::types::{Cue, Position};

/// Index of the largest chain. Ties go to the chain found first.
pub fn largest_chain(chains: &[Vec<Position>]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (index, chain) in chains.iter().enumerate() {
        if best.is_none_or(|b| chain.len() > chains[b].len()) {
            best = Some(index);
        }
    }
    best
}

/// Kill every slime chain except the largest, as one batch.
/// Returns true if any chain was destroyed.
pub fn handle_slime_tiles<F: Frontend>(board: &mut Board<F>) -> bool {
    let chains = board.grid.slime_chains();
    if chains.len() <= 1 {
        return false;
    }
    let Some(survivor) = largest_chain(&chains) else {
        return false;
    };

    let doomed: Structure = chains.iter()
        .enumerate()
        .filter(|(index, _)| *index != survivor)
        .flat_map(|(_, chain)| chain.iter().copied())
        .collect();
    debug!(
        "[Slime] chains={} survivor_size={} killing={}",
        chains.len(), chains[survivor].len(), doomed.len()
    );

    kill_tiles(board, &doomed, Cue::SlimeKill);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::tests::board_with;
    use crate::game::types::ItemKind;

    #[test]
    fn test_single_chain_untouched() {
        let mut board = board_with(&["SSr", "tSe"]);
        assert!(!handle_slime_tiles(&mut board));
        assert_eq!(board.grid.count_kind(ItemKind::Slime), 3);
        assert!(board.frontend().events.is_empty());
    }

    #[test]
    fn test_smaller_chains_killed_together() {
        let mut board = board_with(&[
            "SrSe",
            "tSSS",
            "aSer",
            "Stte",
        ]);
        assert!(handle_slime_tiles(&mut board));
        assert_eq!(board.grid.render_rows(), vec![".rSe", "tSSS", "aSer", ".tte"]);
        assert_eq!(board.frontend().cues, vec![Cue::SlimeKill]);
    }

    #[test]
    fn test_tie_keeps_first_found() {
        let mut board = board_with(&["SrS", "StS"]);
        assert!(handle_slime_tiles(&mut board));
        assert_eq!(board.grid.render_rows(), vec!["Sr.", "St."]);
    }

    #[test]
    fn test_largest_chain_index() {
        let a = vec![Position::new(0, 0)];
        let b = vec![Position::new(1, 1), Position::new(1, 2)];
        let c = vec![Position::new(3, 3), Position::new(3, 4)];
        assert_eq!(largest_chain(&[a.clone(), b, c]), Some(1));
        assert_eq!(largest_chain(&[a]), Some(0));
        assert_eq!(largest_chain(&[]), None);
    }
}
