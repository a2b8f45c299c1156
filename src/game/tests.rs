//! Engine scenario tests and the recording frontend shared by system tests.

use crate::config::BoardConfig;
use crate::game::grid::Grid;
use crate::game::ports::{AudioPlayer, MessagePanel, Presentation, ScoreBoard};
use crate::game::state::Board;
use crate::game::tile::Tile;
use crate::game::types::{AnimationKind, Cue, Position};

/// Presentation calls, in the order the engine made them.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Select(Position),
    Deselect(Position),
    Wiggle(Position),
    Swap(Position, Position, f32),
    Batch(AnimationKind, Vec<Position>),
    Eyes(Position),
}

/// Frontend double that records every call.
#[derive(Debug, Default)]
pub struct RecordingFrontend {
    pub events: Vec<Event>,
    pub refreshes: usize,
    pub score: i64,
    pub lives: Option<usize>,
    pub messages: Vec<String>,
    pub message_visible: bool,
    pub cues: Vec<Cue>,
}

impl Presentation for RecordingFrontend {
    fn animate_select(&mut self, tile: &Tile) {
        self.events.push(Event::Select(tile.position()));
    }

    fn animate_deselect(&mut self, tile: &Tile) {
        self.events.push(Event::Deselect(tile.position()));
    }

    fn animate_wiggle(&mut self, tile: &Tile) {
        self.events.push(Event::Wiggle(tile.position()));
    }

    fn animate_swap(&mut self, a: &Tile, b: &Tile, speed: f32) {
        self.events.push(Event::Swap(a.position(), b.position(), speed));
    }

    fn animate_batch(&mut self, kind: AnimationKind, tiles: &[Tile]) {
        self.events.push(Event::Batch(kind, tiles.iter().map(|t| t.position()).collect()));
    }

    fn refresh_visual(&mut self, _tile: &Tile) {
        self.refreshes += 1;
    }

    fn show_eyes(&mut self, tile: &Tile) {
        self.events.push(Event::Eyes(tile.position()));
    }
}

impl ScoreBoard for RecordingFrontend {
    fn add_score(&mut self, delta: i64) {
        self.score += delta;
    }

    fn reset_score(&mut self) {
        self.score = 0;
    }

    fn set_lives(&mut self, lives: usize) {
        self.lives = Some(lives);
    }
}

impl MessagePanel for RecordingFrontend {
    fn show_message(&mut self, text: &str) {
        self.messages.push(text.to_string());
        self.message_visible = true;
    }

    fn hide(&mut self) {
        self.message_visible = false;
    }
}

impl AudioPlayer for RecordingFrontend {
    fn play(&mut self, cue: Cue) {
        self.cues.push(cue);
    }
}

/// Board holding exactly the given layout, with a clean recorder.
pub fn board_with(rows: &[&str]) -> Board<RecordingFrontend> {
    let grid = Grid::from_rows(rows).expect("valid layout");
    let config = BoardConfig {
        columns: grid.width(),
        rows: grid.height(),
        player_spawn: vec![Position::new(0, 0)],
        ..BoardConfig::default()
    };
    let mut board = Board::with_seed(config, RecordingFrontend::default(), 42).expect("valid config");
    board.grid = grid;
    board.frontend = RecordingFrontend::default();
    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand::rngs::StdRng;
    use crate::game::systems::{
        handle_blank_tiles, handle_floating_tiles, handle_grid_visual, handle_matches, handle_slime_tiles,
    };
    use crate::config::ConfigError;
    use crate::game::types::{ItemKind, Phase};

    const SWAP_BOARD: [&str; 4] = [
        "rrtr",
        "esea",
        "taes",
        "aSat",
    ];

    fn no_triggered(board: &Board<RecordingFrontend>) -> bool {
        board.grid().tiles().all(|t| !t.triggered)
    }

    #[test]
    fn test_start_game_spawns_player_and_fills() {
        let config = BoardConfig::default();
        let spawn = config.player_spawn.clone();
        let mut board = Board::with_seed(config, RecordingFrontend::default(), 3).unwrap();

        board.start_game();

        for position in &spawn {
            assert_eq!(board.grid().kind(*position), ItemKind::Slime);
        }
        assert_eq!(board.grid().count_kind(ItemKind::Slime), spawn.len());
        assert_eq!(board.grid().count_kind(ItemKind::None), 0);
        assert!(!board.has_matches());
        assert_eq!(board.score(), 0);
        assert_eq!(board.frontend().score, 0);
        assert_eq!(board.lives(), spawn.len());
        assert!(board.eye_tile().is_some());
        assert!(!board.is_game_over());
        assert!(!board.frontend().message_visible);
        assert_eq!(board.frontend().cues.first(), Some(&Cue::SlimeSpawn));
        assert_eq!(board.frontend().events.first(), Some(&Event::Batch(AnimationKind::Spawn, spawn)));
    }

    #[test]
    fn test_start_game_clears_game_over() {
        let mut board = board_with(&["rt", "te"]);
        board.handle_grid(Phase::Matches);
        assert!(board.is_game_over());

        board.start_game();

        assert!(!board.is_game_over());
        assert_eq!(board.grid().kind(Position::new(0, 0)), ItemKind::Slime);
        assert!(!board.frontend().message_visible);
    }

    #[test]
    fn test_select_slime_is_ignored() {
        let mut board = board_with(&SWAP_BOARD);
        let before = board.grid().clone();

        board.select(Position::new(1, 3));

        assert!(board.frontend().events.is_empty());
        assert!(board.selection().is_empty());
        assert_eq!(board.grid(), &before);
    }

    #[test]
    fn test_select_out_of_bounds_is_ignored() {
        let mut board = board_with(&SWAP_BOARD);
        board.select(Position::new(9, 9));
        assert!(board.frontend().events.is_empty());
        assert!(board.selection().is_empty());
    }

    #[test]
    fn test_select_while_blocked_is_ignored() {
        let mut board = board_with(&SWAP_BOARD);
        board.block_selection = true;
        board.select(Position::new(0, 0));
        assert!(board.frontend().events.is_empty());
        assert!(board.selection().is_empty());
    }

    #[test]
    fn test_reselect_deselects() {
        let mut board = board_with(&SWAP_BOARD);
        let p = Position::new(0, 0);

        board.select(p);
        assert_eq!(board.selection(), &[p]);
        assert!(board.grid().tile(p).unwrap().triggered);

        board.select(p);
        assert!(board.selection().is_empty());
        assert!(no_triggered(&board));
        assert_eq!(board.frontend().events, vec![Event::Select(p), Event::Deselect(p)]);
        assert!(!board.is_selection_blocked());
    }

    #[test]
    fn test_non_adjacent_pick_wiggles() {
        let mut board = board_with(&SWAP_BOARD);
        let (first, far) = (Position::new(0, 0), Position::new(2, 2));

        board.select(first);
        board.select(far);

        assert_eq!(board.frontend().events, vec![Event::Select(first), Event::Wiggle(far)]);
        assert_eq!(board.selection(), &[first]);
        assert!(!board.is_selection_blocked());
    }

    #[test]
    fn test_swap_without_match_reverts() {
        let mut board = board_with(&SWAP_BOARD);
        let before = board.grid().clone();
        let (a, b) = (Position::new(0, 1), Position::new(1, 1));

        board.select(a);
        board.select(b);

        assert_eq!(board.frontend().events, vec![
            Event::Select(a),
            Event::Select(b),
            Event::Swap(a, b, 1.0),
            Event::Swap(a, b, 1.0),
        ]);
        assert_eq!(board.grid().render_rows(), before.render_rows());
        assert!(no_triggered(&board));
        assert!(board.selection().is_empty());
        assert_eq!(board.score(), 0);
        assert!(!board.is_selection_blocked());
    }

    #[test]
    fn test_swap_with_match_resolves() {
        let mut board = board_with(&SWAP_BOARD);
        let (a, b) = (Position::new(2, 0), Position::new(3, 0));

        board.select(a);
        board.select(b);

        let killed = vec![Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)];
        assert!(board.frontend().events.contains(&Event::Batch(AnimationKind::Kill, killed)));
        assert!(board.score() >= 30);
        assert_eq!(board.frontend().score, board.score());
        assert_eq!(board.grid().kind(Position::new(3, 0)), ItemKind::Topaz);
        assert_eq!(board.grid().count_kind(ItemKind::None), 0);
        assert!(!board.has_matches());
        assert_eq!(board.lives(), 1);
        assert!(board.selection().is_empty());
        assert!(no_triggered(&board));
        assert!(!board.is_selection_blocked());
    }

    #[test]
    fn test_swap_is_its_own_inverse() {
        let mut board = board_with(&SWAP_BOARD);
        let before = board.grid().clone();
        let (a, b) = (Position::new(1, 1), Position::new(1, 2));

        board.swap_tiles(a, b, 1.0);
        assert_ne!(board.grid(), &before);
        board.swap_tiles(a, b, 1.0);

        assert_eq!(board.grid(), &before);
    }

    #[test]
    fn test_one_by_three_row() {
        let mut board = board_with(&["rrr"]);

        assert!(handle_matches(&mut board));
        assert_eq!(board.grid().render_rows(), vec!["..."]);
        assert_eq!(board.score(), 30);

        assert!(!handle_floating_tiles(&mut board));
        assert!(!handle_slime_tiles(&mut board));

        assert!(handle_blank_tiles(&mut board));
        assert_eq!(board.grid().count_kind(ItemKind::None), 0);
        assert!(!board.has_matches());
    }

    #[test]
    fn test_two_chains_keep_the_larger() {
        let mut board = board_with(&[
            "SSert",
            "teSSS",
            "reSSa",
            "attrs",
        ]);

        assert!(handle_slime_tiles(&mut board));
        handle_grid_visual(&mut board);

        assert_eq!(
            board.frontend().events[0],
            Event::Batch(AnimationKind::Kill, vec![Position::new(0, 0), Position::new(1, 0)])
        );
        assert_eq!(board.grid().count_kind(ItemKind::Slime), 5);
        assert_eq!(board.lives(), 5);
        assert_eq!(board.frontend().lives, Some(5));
    }

    #[test]
    fn test_phase_loop_from_slime_refills() {
        let mut board = board_with(&[
            "SSert",
            "teSSS",
            "reSSa",
            "attrs",
        ]);

        board.handle_grid(Phase::Slime);

        assert_eq!(board.grid().count_kind(ItemKind::None), 0);
        assert_eq!(board.grid().slime_chains().len(), 1);
        assert_eq!(board.lives(), 5);
        assert!(!board.has_matches());
    }

    #[test]
    fn test_gravity_settles_and_keeps_order() {
        let kinds = [ItemKind::Ruby, ItemKind::Emerald, ItemKind::Sapphire, ItemKind::Topaz, ItemKind::Slime];
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut board = board_with(&["......"; 7]);
            for position in board.grid().positions() {
                let kind = if rng.random_bool(0.35) {
                    ItemKind::None
                } else {
                    kinds[rng.random_range(0..kinds.len())]
                };
                board.grid.set_kind(position, kind);
            }
            let column = |grid: &Grid, x: usize| -> Vec<ItemKind> {
                (0..grid.height()).map(|y| grid.kind(Position::new(x, y))).collect()
            };
            let before: Vec<Vec<ItemKind>> = (0..6).map(|x| column(board.grid(), x)).collect();

            handle_floating_tiles(&mut board);
            assert!(!handle_floating_tiles(&mut board), "seed {} did not converge", seed);

            for x in 0..6 {
                let after = column(board.grid(), x);
                let filled_before: Vec<ItemKind> = before[x].iter().copied().filter(|k| *k != ItemKind::None).collect();
                let empties = after.len() - filled_before.len();
                assert!(after[..empties].iter().all(|k| *k == ItemKind::None), "seed {} column {}", seed, x);
                assert_eq!(&after[empties..], filled_before.as_slice(), "seed {} column {}", seed, x);
            }
        }
    }

    #[test]
    fn test_game_over_iff_no_slime() {
        let mut board = board_with(&["rt", "te"]);
        board.handle_grid(Phase::Matches);
        assert!(board.is_game_over());
        assert_eq!(board.frontend().messages, vec!["Game Over!".to_string()]);

        let mut board = board_with(&["St", "te"]);
        board.handle_grid(Phase::Matches);
        assert!(!board.is_game_over());
        assert!(board.frontend().messages.is_empty());
        assert_eq!(board.lives(), 1);
    }

    #[test]
    fn test_invalid_config_is_fatal() {
        let config = BoardConfig { columns: 0, ..BoardConfig::default() };
        assert!(Board::new(config, RecordingFrontend::default()).is_err());
    }

    #[test]
    fn test_oversized_grid_is_an_error_not_a_panic() {
        let config = BoardConfig { columns: usize::MAX / 2, rows: 3, ..BoardConfig::default() };
        let result = Board::with_seed(config, RecordingFrontend::default(), 1);
        assert!(matches!(result, Err(ConfigError::GridTooLarge { .. })));
    }

    #[test]
    fn test_gravity_cascade_resolves() {
        let mut board = board_with(&[
            "rae",
            "rte",
            "sss",
            "raS",
        ]);

        board.handle_grid(Phase::Matches);

        let p = |x, y| Position::new(x, y);
        let fall = |x, y| Event::Swap(p(x, y), p(x, y + 1), 6.0);
        assert_eq!(board.frontend().events[..9], [
            Event::Batch(AnimationKind::Wiggle, vec![p(2, 3)]),
            Event::Batch(AnimationKind::Kill, vec![p(0, 2), p(1, 2), p(2, 2)]),
            fall(0, 1),
            fall(0, 0),
            fall(1, 1),
            fall(1, 0),
            fall(2, 1),
            fall(2, 0),
            Event::Batch(AnimationKind::Kill, vec![p(0, 1), p(0, 2), p(0, 3)]),
        ]);
        assert_eq!(
            board.frontend().events[9],
            Event::Batch(AnimationKind::Spawn, vec![p(0, 0), p(0, 1), p(0, 2), p(0, 3), p(1, 0), p(2, 0)])
        );
        assert_eq!(board.frontend().cues, vec![Cue::Collect, Cue::Collect]);
        assert_eq!(board.score(), 60);
        assert_eq!(board.grid().count_kind(ItemKind::None), 0);
        assert!(!board.has_matches());
        assert_eq!(board.lives(), 1);
    }

    #[test]
    fn test_slime_kill_lets_tiles_fall() {
        let mut board = board_with(&[
            "rtea",
            "Seat",
            "taSS",
            "etSa",
        ]);

        board.handle_grid(Phase::Slime);

        let p = |x, y| Position::new(x, y);
        assert_eq!(board.frontend().events[..5], [
            Event::Batch(AnimationKind::Wiggle, vec![p(0, 1), p(2, 2), p(2, 3), p(3, 2)]),
            Event::Batch(AnimationKind::Kill, vec![p(0, 1)]),
            Event::Swap(p(0, 0), p(0, 1), 6.0),
            Event::Batch(AnimationKind::Spawn, vec![p(0, 0)]),
            Event::Batch(AnimationKind::Wiggle, vec![p(2, 2), p(2, 3), p(3, 2)]),
        ]);
        assert_eq!(board.frontend().events.last(), Some(&Event::Eyes(p(2, 2))));
        assert_eq!(board.frontend().cues, vec![Cue::SlimeKill]);
        assert_eq!(board.grid().kind(p(0, 1)), ItemKind::Ruby);
        assert_eq!(board.grid().count_kind(ItemKind::Slime), 3);
        assert_eq!(board.lives(), 3);
    }
}
