//! Single grid cell.
//!
//! A tile owns its kind and transient selection state. Anything that depends on
//! neighbouring tiles lives on `Grid`, which resolves neighbours from
//! coordinates on demand.

use crate::game::types::{Direction, ItemKind, Position};

/// Which orthogonal neighbours belong to the same slime body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Links {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Links {
    pub fn set(&mut self, direction: Direction, linked: bool) {
        match direction {
            Direction::Up => self.up = linked,
            Direction::Down => self.down = linked,
            Direction::Left => self.left = linked,
            Direction::Right => self.right = linked,
        }
    }

    pub fn count(&self) -> usize {
        [self.up, self.down, self.left, self.right].iter().filter(|l| **l).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    position: Position,
    pub kind: ItemKind,
    /// Highlighted as part of the current selection.
    pub triggered: bool,
    /// Cached slime connectivity, refreshed by `Grid::on_grid_changed`.
    pub links: Links,
}

impl Tile {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            kind: ItemKind::None,
            triggered: false,
            links: Links::default(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn x(&self) -> usize {
        self.position.x
    }

    pub fn y(&self) -> usize {
        self.position.y
    }

    pub fn set_kind(&mut self, kind: ItemKind) {
        self.kind = kind;
    }

    pub fn is(&self, kind: ItemKind) -> bool {
        self.kind == kind
    }

    pub fn is_none(&self) -> bool {
        self.kind == ItemKind::None
    }

    pub fn is_slime(&self) -> bool {
        self.kind == ItemKind::Slime
    }

    pub fn is_bomb(&self) -> bool {
        self.kind.is_bomb()
    }

    /// Exchange everything except the position with another tile.
    pub fn swap_contents(&mut self, other: &mut Tile) {
        std::mem::swap(&mut self.kind, &mut other.kind);
        std::mem::swap(&mut self.triggered, &mut other.triggered);
        std::mem::swap(&mut self.links, &mut other.links);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tile_is_empty() {
        let tile = Tile::new(Position::new(2, 3));
        assert!(tile.is_none());
        assert!(!tile.triggered);
        assert_eq!(tile.position(), Position { x: 2, y: 3 });
    }

    #[test]
    fn test_kind_predicates() {
        let mut tile = Tile::new(Position::new(0, 0));
        tile.set_kind(ItemKind::Slime);
        assert!(tile.is_slime());
        assert!(tile.is(ItemKind::Slime));
        assert!(!tile.is_bomb());

        tile.set_kind(ItemKind::AreaBomb);
        assert!(tile.is_bomb());
        assert!(!tile.is_none());
    }

    #[test]
    fn test_swap_contents_keeps_positions() {
        let mut a = Tile::new(Position::new(0, 0));
        let mut b = Tile::new(Position::new(1, 0));
        a.set_kind(ItemKind::Ruby);
        a.triggered = true;
        b.set_kind(ItemKind::Topaz);

        a.swap_contents(&mut b);

        assert_eq!(a.kind, ItemKind::Topaz);
        assert!(!a.triggered);
        assert_eq!(b.kind, ItemKind::Ruby);
        assert!(b.triggered);
        assert_eq!(a.position(), Position::new(0, 0));
        assert_eq!(b.position(), Position::new(1, 0));
    }
}
