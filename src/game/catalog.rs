//! Item catalog.
//!
//! Static table mapping each item kind to its score value and its weight in
//! random refill draws.

use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use serde::{Serialize, Deserialize};

use crate::game::types::ItemKind;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub kind: ItemKind,
    pub value: i64,
    #[serde(default)]
    pub weight: f64,
}

impl CatalogEntry {
    pub fn new(kind: ItemKind, value: i64, weight: f64) -> Self {
        Self { kind, value, weight }
    }
}

/// Default entries: five collectibles, the two slime modifiers, bombs and slime itself.
pub fn default_entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(ItemKind::Ruby, 10, 1.0),
        CatalogEntry::new(ItemKind::Emerald, 10, 1.0),
        CatalogEntry::new(ItemKind::Sapphire, 10, 1.0),
        CatalogEntry::new(ItemKind::Topaz, 10, 1.0),
        CatalogEntry::new(ItemKind::Amethyst, 10, 1.0),
        CatalogEntry::new(ItemKind::Growth, 5, 0.35),
        CatalogEntry::new(ItemKind::Death, 5, 0.25),
        CatalogEntry::new(ItemKind::LineBomb, 25, 0.0),
        CatalogEntry::new(ItemKind::AreaBomb, 25, 0.0),
        CatalogEntry::new(ItemKind::Slime, 0, 0.0),
    ]
}

#[derive(Debug, Clone)]
pub struct ItemCatalog {
    entries: Vec<CatalogEntry>,
    drawable: Vec<ItemKind>,
    distribution: WeightedIndex<f64>,
}

impl ItemCatalog {
    /// Build a catalog. Returns `None` if no entry has a positive weight.
    ///
    /// Entries are expected to be validated beforehand (see `BoardConfig::validate`).
    pub fn new(entries: Vec<CatalogEntry>) -> Option<Self> {
        let drawable_entries: Vec<&CatalogEntry> = entries.iter()
            .filter(|e| e.weight > 0.0)
            .collect();
        let drawable: Vec<ItemKind> = drawable_entries.iter().map(|e| e.kind).collect();
        let distribution = WeightedIndex::new(drawable_entries.iter().map(|e| e.weight)).ok()?;

        Some(Self { entries, drawable, distribution })
    }

    /// Score awarded when an item of this kind is destroyed. Unlisted kinds are worth nothing.
    pub fn value(&self, kind: ItemKind) -> i64 {
        self.entry(kind).map(|e| e.value).unwrap_or(0)
    }

    pub fn weight(&self, kind: ItemKind) -> f64 {
        self.entry(kind).map(|e| e.weight).unwrap_or(0.0)
    }

    /// Kinds that can come out of a random draw.
    pub fn drawable_kinds(&self) -> &[ItemKind] {
        &self.drawable
    }

    /// Draw a random kind according to catalog weights.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> ItemKind {
        self.drawable[self.distribution.sample(rng)]
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    fn entry(&self, kind: ItemKind) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.kind == kind)
    }
}
