use std::collections::{HashSet, VecDeque};

use crate::game::structure::Structure;
use crate::game::tile::{Links, Tile};
use crate::game::types::{Direction, ItemKind, Position};

/// Fixed-size board of tiles, stored flat (`y * width + x`).
///
/// Tiles are created once and never reallocated; phases only change their contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        let mut tiles = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                tiles.push(Tile::new(Position { x, y }));
            }
        }
        Self { width, height, tiles }
    }

    /// Build a grid from row strings of item symbols (see `ItemKind::symbol`).
    /// Returns `None` on ragged rows or unknown symbols.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let width = rows.first().map(|r| r.chars().count())?;
        let mut grid = Grid::new(width, rows.len());
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return None;
            }
            for (x, symbol) in row.chars().enumerate() {
                grid.set_kind(Position { x, y }, ItemKind::from_symbol(symbol)?);
            }
        }
        grid.refresh_links();
        Some(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.height
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.in_bounds(position).then(|| position.y * self.width + position.x)
    }

    pub fn tile(&self, position: Position) -> Option<&Tile> {
        self.index(position).map(|i| &self.tiles[i])
    }

    pub fn tile_mut(&mut self, position: Position) -> Option<&mut Tile> {
        self.index(position).map(|i| &mut self.tiles[i])
    }

    /// Kind at a position, `ItemKind::None` off the board.
    pub fn kind(&self, position: Position) -> ItemKind {
        self.tile(position).map(|t| t.kind).unwrap_or_default()
    }

    pub fn set_kind(&mut self, position: Position, kind: ItemKind) {
        if let Some(tile) = self.tile_mut(position) {
            tile.set_kind(kind);
        }
    }

    /// Every position in scan order: column by column, top to bottom.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let height = self.height;
        (0..self.width).flat_map(move |x| (0..height).map(move |y| Position { x, y }))
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.positions().filter_map(move |p| self.tile(p))
    }

    pub fn count_kind(&self, kind: ItemKind) -> usize {
        self.tiles.iter().filter(|t| t.kind == kind).count()
    }

    pub fn neighbour(&self, position: Position, direction: Direction) -> Option<Position> {
        let (dx, dy) = direction.offset();
        let x = position.x.checked_add_signed(dx)?;
        let y = position.y.checked_add_signed(dy)?;
        let next = Position { x, y };
        self.in_bounds(next).then_some(next)
    }

    pub fn neighbours(&self, position: Position) -> impl Iterator<Item = Position> + '_ {
        Direction::ALL.into_iter().filter_map(move |d| self.neighbour(position, d))
    }

    pub fn are_adjacent(&self, a: Position, b: Position) -> bool {
        self.neighbours(a).any(|n| n == b)
    }

    /// Contiguous tiles of `kind` starting next to `position` in one direction.
    fn same_kind_run(&self, position: Position, direction: Direction, kind: ItemKind) -> Vec<Position> {
        let mut run = Vec::new();
        let mut current = position;
        while let Some(next) = self.neighbour(current, direction) {
            if self.kind(next) != kind {
                break;
            }
            run.push(next);
            current = next;
        }
        run
    }

    /// The full run through `position` along one axis, including `position`.
    fn axis_run(&self, position: Position, back: Direction, forth: Direction) -> Vec<Position> {
        let kind = self.kind(position);
        let mut run = self.same_kind_run(position, back, kind);
        run.reverse();
        run.push(position);
        run.extend(self.same_kind_run(position, forth, kind));
        run
    }

    /// True if this tile sits in a horizontal or vertical run of three or more
    /// identical matchable kinds.
    pub fn should_destroy(&self, position: Position) -> bool {
        let kind = self.kind(position);
        if !kind.is_matchable() {
            return false;
        }
        let horizontal = self.same_kind_run(position, Direction::Left, kind).len()
            + self.same_kind_run(position, Direction::Right, kind).len();
        let vertical = self.same_kind_run(position, Direction::Up, kind).len()
            + self.same_kind_run(position, Direction::Down, kind).len();
        horizontal >= 2 || vertical >= 2
    }

    /// Every tile in the qualifying runs through `position`. Runs crossing
    /// through members are followed as well, so L, T and plus shapes come
    /// back whole. Empty if the tile is not part of a match.
    pub fn match_group(&self, position: Position) -> Structure {
        let mut group = Structure::new();
        if !self.should_destroy(position) {
            return group;
        }
        group.add(position);
        let mut pending = vec![position];
        while let Some(current) = pending.pop() {
            for (back, forth) in [(Direction::Left, Direction::Right), (Direction::Up, Direction::Down)] {
                let run = self.axis_run(current, back, forth);
                if run.len() < 3 {
                    continue;
                }
                for member in run {
                    if !group.contains(member) {
                        group.add(member);
                        pending.push(member);
                    }
                }
            }
        }
        group
    }

    pub fn has_matches(&self) -> bool {
        self.positions().any(|p| self.should_destroy(p))
    }

    pub fn is_neighbouring_slime(&self, position: Position) -> bool {
        self.neighbours(position).any(|n| self.kind(n) == ItemKind::Slime)
    }

    /// Breadth-first flood fill over orthogonally connected slime.
    /// Empty if the start tile is not slime.
    pub fn connected_slime(&self, position: Position) -> Vec<Position> {
        if self.kind(position) != ItemKind::Slime {
            return Vec::new();
        }
        let mut visited = HashSet::from([position]);
        let mut queue = VecDeque::from([position]);
        let mut chain = vec![position];
        while let Some(current) = queue.pop_front() {
            for next in self.neighbours(current) {
                if self.kind(next) == ItemKind::Slime && visited.insert(next) {
                    queue.push_back(next);
                    chain.push(next);
                }
            }
        }
        chain
    }

    /// All disjoint slime chains, in scan order of their first tile.
    pub fn slime_chains(&self) -> Vec<Vec<Position>> {
        let mut seen: HashSet<Position> = HashSet::new();
        let mut chains = Vec::new();
        for position in self.positions() {
            if self.kind(position) != ItemKind::Slime || seen.contains(&position) {
                continue;
            }
            let chain = self.connected_slime(position);
            seen.extend(chain.iter().copied());
            chains.push(chain);
        }
        chains
    }

    /// Member nearest to the floored average position of `positions`.
    /// Ties go to the earliest member.
    pub fn center_tile(positions: &[Position]) -> Option<Position> {
        if positions.is_empty() {
            return None;
        }
        let count = positions.len() as f32;
        let (mut cx, mut cy) = (0.0f32, 0.0f32);
        for p in positions {
            cx += p.x as f32 / count;
            cy += p.y as f32 / count;
        }
        let (cx, cy) = (cx.floor(), cy.floor());

        let mut center = None;
        let mut best = f32::MAX;
        for p in positions {
            let dist = p.distance_sq(cx, cy);
            if dist <= f32::EPSILON {
                return Some(*p);
            }
            if dist < best {
                best = dist;
                center = Some(*p);
            }
        }
        center
    }

    /// Exchange kind and transient state between two tiles. Positions stay put.
    pub fn swap_data(&mut self, a: Position, b: Position) {
        let (Some(ia), Some(ib)) = (self.index(a), self.index(b)) else {
            return;
        };
        if ia == ib {
            return;
        }
        let (low, high) = (ia.min(ib), ia.max(ib));
        let (head, tail) = self.tiles.split_at_mut(high);
        head[low].swap_contents(&mut tail[0]);
    }

    /// Clear every selection highlight, returning the tiles that had one.
    pub fn take_triggered(&mut self) -> Vec<Position> {
        let mut cleared = Vec::new();
        for tile in self.tiles.iter_mut().filter(|t| t.triggered) {
            tile.triggered = false;
            cleared.push(tile.position());
        }
        cleared
    }

    /// Recompute the cached slime links of one tile.
    pub fn on_grid_changed(&mut self, position: Position) {
        let is_slime = self.kind(position) == ItemKind::Slime;
        let mut links = Links::default();
        if is_slime {
            for direction in Direction::ALL {
                let linked = self.neighbour(position, direction)
                    .is_some_and(|n| self.kind(n) == ItemKind::Slime);
                links.set(direction, linked);
            }
        }
        if let Some(tile) = self.tile_mut(position) {
            tile.links = links;
        }
    }

    pub fn refresh_links(&mut self) {
        for position in self.positions().collect::<Vec<_>>() {
            self.on_grid_changed(position);
        }
    }

    /// One line per row, using item symbols.
    pub fn render_rows(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| (0..self.width).map(|x| self.kind(Position { x, y }).symbol()).collect())
            .collect()
    }
}
