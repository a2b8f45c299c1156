pub mod types;
pub mod catalog;
pub mod tile;
pub mod structure;
pub mod grid;
pub mod ports;
pub mod state;
pub mod systems;
pub mod demo;

#[cfg(test)]
pub(crate) mod tests;

pub use catalog::{CatalogEntry, ItemCatalog};
pub use grid::Grid;
pub use ports::{AudioPlayer, Frontend, MessagePanel, Presentation, ScoreBoard};
pub use state::Board;
pub use structure::{BombRule, BombShape, Structure};
pub use tile::Tile;
pub use types::{AnimationKind, Cue, Direction, ItemKind, Phase, Position};
