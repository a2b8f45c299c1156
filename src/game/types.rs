use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Squared distance to a floating point location.
    pub fn distance_sq(&self, cx: f32, cy: f32) -> f32 {
        let dx = self.x as f32 - cx;
        let dy = self.y as f32 - cy;
        dx * dx + dy * dy
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

/// Orthogonal direction on the grid. `Up` points towards row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// What a tile currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Empty cell, eligible for refill.
    #[default]
    None,
    /// Player-controlled body.
    Slime,
    /// Turns into slime when cleared next to slime.
    Growth,
    /// Kills neighbouring slime when cleared next to slime.
    Death,
    LineBomb,
    AreaBomb,
    Ruby,
    Emerald,
    Sapphire,
    Topaz,
    Amethyst,
}

impl ItemKind {
    pub const ALL: [ItemKind; 11] = [
        ItemKind::None,
        ItemKind::Slime,
        ItemKind::Growth,
        ItemKind::Death,
        ItemKind::LineBomb,
        ItemKind::AreaBomb,
        ItemKind::Ruby,
        ItemKind::Emerald,
        ItemKind::Sapphire,
        ItemKind::Topaz,
        ItemKind::Amethyst,
    ];

    /// Whether three of this kind in a row form a match.
    pub fn is_matchable(self) -> bool {
        !matches!(self, ItemKind::None | ItemKind::Slime)
    }

    pub fn is_bomb(self) -> bool {
        matches!(self, ItemKind::LineBomb | ItemKind::AreaBomb)
    }

    /// Single character used by the terminal demo and by layout strings.
    pub fn symbol(self) -> char {
        match self {
            ItemKind::None => '.',
            ItemKind::Slime => 'S',
            ItemKind::Growth => 'g',
            ItemKind::Death => 'd',
            ItemKind::LineBomb => '=',
            ItemKind::AreaBomb => '*',
            ItemKind::Ruby => 'r',
            ItemKind::Emerald => 'e',
            ItemKind::Sapphire => 's',
            ItemKind::Topaz => 't',
            ItemKind::Amethyst => 'a',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<ItemKind> {
        ItemKind::ALL.iter().copied().find(|kind| kind.symbol() == symbol)
    }
}

/// Grouped animation played by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    Spawn,
    Kill,
    Wiggle,
}

/// Audio cues the engine asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Collect,
    SlimeSpawn,
    SlimeKill,
}

/// Phases of the resolution loop, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Matches,
    Floating,
    Slime,
    Blank,
    Done,
}
