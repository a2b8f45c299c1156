//! Structures: groups of tiles destroyed together in one animation batch.
//!
//! Also holds the bomb table, which maps structure shapes to the bomb kind
//! spawned at the structure's center.

use std::collections::HashSet;
use serde::{Serialize, Deserialize};

use crate::game::types::{Direction, ItemKind, Position};

/// Shape a structure must have for a bomb rule to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BombShape {
    /// A straight contiguous run of at least `min_length` members.
    Line { min_length: usize },
    /// A horizontal and a vertical run of three or more crossing at a member
    /// (L, T or plus), with at least `min_tiles` members overall.
    Cross { min_tiles: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BombRule {
    pub shape: BombShape,
    pub kind: ItemKind,
}

impl BombRule {
    pub fn new(shape: BombShape, kind: ItemKind) -> Self {
        Self { shape, kind }
    }
}

/// Default bomb table. Checked in order, first satisfied rule wins.
pub fn default_bomb_rules() -> Vec<BombRule> {
    vec![
        BombRule::new(BombShape::Cross { min_tiles: 5 }, ItemKind::AreaBomb),
        BombRule::new(BombShape::Line { min_length: 5 }, ItemKind::AreaBomb),
        BombRule::new(BombShape::Line { min_length: 4 }, ItemKind::LineBomb),
    ]
}

/// Unordered, duplicate-free set of tile positions. Insertion order is kept
/// so that every scan over the members is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Structure {
    tiles: Vec<Position>,
}

impl Structure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tile. No-op if it is already a member.
    pub fn add(&mut self, position: Position) {
        if !self.tiles.contains(&position) {
            self.tiles.push(position);
        }
    }

    pub fn contains(&self, position: Position) -> bool {
        self.tiles.contains(&position)
    }

    pub fn tiles(&self) -> &[Position] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Bomb kind produced by this structure's shape, if any rule matches.
    pub fn bomb_kind(&self, rules: &[BombRule]) -> Option<ItemKind> {
        if self.tiles.is_empty() {
            return None;
        }
        let members: HashSet<Position> = self.tiles.iter().copied().collect();
        let longest = self.tiles.iter()
            .map(|p| run_length(&members, *p, Direction::Left, Direction::Right)
                .max(run_length(&members, *p, Direction::Up, Direction::Down)))
            .max()
            .unwrap_or(0);
        let crossing = self.tiles.iter().any(|p| {
            run_length(&members, *p, Direction::Left, Direction::Right) >= 3
                && run_length(&members, *p, Direction::Up, Direction::Down) >= 3
        });

        rules.iter()
            .find(|rule| match rule.shape {
                BombShape::Line { min_length } => longest >= min_length,
                BombShape::Cross { min_tiles } => crossing && self.tiles.len() >= min_tiles,
            })
            .map(|rule| rule.kind)
    }
}

impl FromIterator<Position> for Structure {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut structure = Structure::new();
        for position in iter {
            structure.add(position);
        }
        structure
    }
}

impl Extend<Position> for Structure {
    fn extend<I: IntoIterator<Item = Position>>(&mut self, iter: I) {
        for position in iter {
            self.add(position);
        }
    }
}

/// Length of the contiguous member run through `start` along one axis.
fn run_length(members: &HashSet<Position>, start: Position, back: Direction, forth: Direction) -> usize {
    1 + walk(members, start, back) + walk(members, start, forth)
}

fn walk(members: &HashSet<Position>, start: Position, direction: Direction) -> usize {
    let (dx, dy) = direction.offset();
    let mut count = 0;
    let mut current = start;
    loop {
        let (Some(x), Some(y)) = (current.x.checked_add_signed(dx), current.y.checked_add_signed(dy)) else {
            return count;
        };
        current = Position { x, y };
        if !members.contains(&current) {
            return count;
        }
        count += 1;
    }
}
