//! Tiles, slot kinds and the placement compatibility table.

use serde::{Deserialize, Serialize};

use crate::core::{ContainerId, TileId};

/// Semantic category of a placeable fact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TileKind {
    Symbol,
    Name,
    Nature,
    SolarTerm,
    HexName,
    /// Browsed, never placed.
    Idiom,
}

/// Kind of a slot. Idioms have no slot kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SlotKind {
    Symbol,
    Name,
    Nature,
    SolarTerm,
    HexName,
}

impl SlotKind {
    /// Slots every trigram exposes, in grading order.
    pub const TRIGRAM: [SlotKind; 4] = [
        SlotKind::Name,
        SlotKind::Nature,
        SlotKind::SolarTerm,
        SlotKind::Symbol,
    ];

    /// Compatibility table: which tile kinds may occupy this slot.
    ///
    /// Hexagram name tiles fit any hexagram name slot regardless of which
    /// view produced them, since both views share the `HexName` tag.
    #[must_use]
    pub const fn accepts(self, tile: TileKind) -> bool {
        match (self, tile) {
            (SlotKind::Symbol, TileKind::Symbol) => true,
            (SlotKind::Name, TileKind::Name) => true,
            (SlotKind::Nature, TileKind::Nature) => true,
            (SlotKind::SolarTerm, TileKind::SolarTerm) => true,
            (SlotKind::HexName, TileKind::HexName) => true,
            (_, TileKind::Idiom) => false,
            (
                SlotKind::Symbol
                | SlotKind::Name
                | SlotKind::Nature
                | SlotKind::SolarTerm
                | SlotKind::HexName,
                _,
            ) => false,
        }
    }

    /// Tile kind dealt for this slot.
    #[must_use]
    pub const fn tile_kind(self) -> TileKind {
        match self {
            SlotKind::Symbol => TileKind::Symbol,
            SlotKind::Name => TileKind::Name,
            SlotKind::Nature => TileKind::Nature,
            SlotKind::SolarTerm => TileKind::SolarTerm,
            SlotKind::HexName => TileKind::HexName,
        }
    }
}

/// Addressable placement location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotKey {
    pub container: ContainerId,
    pub kind: SlotKind,
}

impl SlotKey {
    #[must_use]
    pub fn new(container: impl Into<ContainerId>, kind: SlotKind) -> Self {
        Self {
            container: container.into(),
            kind,
        }
    }
}

impl std::fmt::Display for SlotKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{:?}", self.container, self.kind)
    }
}

/// One fact to be placed.
///
/// `content` is already localized. `target` is the entity the fact belongs
/// to, independent of where the player puts the tile.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub kind: TileKind,
    pub content: String,
    pub target: ContainerId,
}

/// A tile's face before it gets an id: what the answer key says belongs in
/// a slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileFace {
    pub kind: TileKind,
    pub content: String,
    pub target: ContainerId,
}

impl TileFace {
    /// Stamp an id on this face.
    #[must_use]
    pub fn into_tile(self, id: TileId) -> Tile {
        Tile {
            id,
            kind: self.kind,
            content: self.content,
            target: self.target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TILE_KINDS: [TileKind; 6] = [
        TileKind::Symbol,
        TileKind::Name,
        TileKind::Nature,
        TileKind::SolarTerm,
        TileKind::HexName,
        TileKind::Idiom,
    ];

    #[test]
    fn test_each_slot_accepts_exactly_its_kind() {
        for slot in [
            SlotKind::Symbol,
            SlotKind::Name,
            SlotKind::Nature,
            SlotKind::SolarTerm,
            SlotKind::HexName,
        ] {
            let accepted: Vec<_> = TILE_KINDS.into_iter().filter(|k| slot.accepts(*k)).collect();
            assert_eq!(accepted, vec![slot.tile_kind()]);
        }
    }

    #[test]
    fn test_idiom_fits_nowhere() {
        assert!(!SlotKind::HexName.accepts(TileKind::Idiom));
        assert!(!SlotKind::Name.accepts(TileKind::Idiom));
    }

    #[test]
    fn test_tile_kind_serde_names() {
        let json = serde_json::to_string(&TileKind::SolarTerm).unwrap();
        assert_eq!(json, "\"solarTerm\"");
        let json = serde_json::to_string(&SlotKind::HexName).unwrap();
        assert_eq!(json, "\"hexName\"");
    }
}
