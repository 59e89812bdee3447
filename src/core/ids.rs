//! Identifiers for puzzle entities.
//!
//! ## ID Spaces
//!
//! - `TrigramId`: closed set of the eight trigrams, keyed by their romanized
//!   names (`qian`, `kun`, ...).
//! - `HexagramId`: `0..64` in the natural (Shao Yong square) order,
//!   `1000..1064` in the King-Wen sequence. Both views describe the same 64
//!   figures but never share an id.
//! - `ContainerId`: a trigram or a hexagram, i.e. anything that owns slots.
//! - `TileId`: allocated sequentially by the engine, unique per engine.
//!
//! ```
//! use iching_puzzle::core::{HexagramId, TrigramId};
//!
//! let qian: TrigramId = "qian".parse().unwrap();
//! assert_eq!(qian, TrigramId::Qian);
//! assert_eq!(qian.key(), "qian");
//!
//! let first = HexagramId::king_wen(0);
//! assert!(first.is_king_wen());
//! assert_eq!(first.index(), 0);
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseIdError;

/// One of the eight trigrams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrigramId {
    Qian,
    Kun,
    Zhen,
    Xun,
    Kan,
    Li,
    Gen,
    Dui,
}

impl TrigramId {
    /// All trigrams, in dataset order.
    pub const ALL: [TrigramId; 8] = [
        TrigramId::Qian,
        TrigramId::Kun,
        TrigramId::Zhen,
        TrigramId::Xun,
        TrigramId::Kan,
        TrigramId::Li,
        TrigramId::Gen,
        TrigramId::Dui,
    ];

    /// Stable string key, also used as the content of symbol tiles.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            TrigramId::Qian => "qian",
            TrigramId::Kun => "kun",
            TrigramId::Zhen => "zhen",
            TrigramId::Xun => "xun",
            TrigramId::Kan => "kan",
            TrigramId::Li => "li",
            TrigramId::Gen => "gen",
            TrigramId::Dui => "dui",
        }
    }
}

impl FromStr for TrigramId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TrigramId::ALL
            .into_iter()
            .find(|id| id.key() == s)
            .ok_or_else(|| ParseIdError::Trigram(s.to_string()))
    }
}

impl std::fmt::Display for TrigramId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Hexagram identifier.
///
/// The natural-order view uses the raw index, the King-Wen view offsets it
/// by [`HexagramId::KING_WEN_BASE`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HexagramId(pub u16);

impl HexagramId {
    /// First id of the King-Wen view.
    pub const KING_WEN_BASE: u16 = 1000;

    /// Id of the hexagram at `index` in the natural order.
    #[must_use]
    pub const fn natural(index: u16) -> Self {
        Self(index)
    }

    /// Id of the hexagram at `index` (0-based) in the King-Wen sequence.
    #[must_use]
    pub const fn king_wen(index: u16) -> Self {
        Self(Self::KING_WEN_BASE + index)
    }

    /// Check if this id belongs to the King-Wen view.
    #[must_use]
    pub const fn is_king_wen(self) -> bool {
        self.0 >= Self::KING_WEN_BASE
    }

    /// Position within its own view (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        if self.is_king_wen() {
            (self.0 - Self::KING_WEN_BASE) as usize
        } else {
            self.0 as usize
        }
    }
}

impl std::fmt::Display for HexagramId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Hexagram({})", self.0)
    }
}

/// Anything that owns slots: a trigram in trigram mode, a hexagram in
/// hexagram mode. Also used as the factual target of a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ContainerId {
    Trigram(TrigramId),
    Hexagram(HexagramId),
}

impl std::fmt::Display for ContainerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContainerId::Trigram(id) => write!(f, "{id}"),
            ContainerId::Hexagram(id) => write!(f, "{id}"),
        }
    }
}

impl From<TrigramId> for ContainerId {
    fn from(id: TrigramId) -> Self {
        ContainerId::Trigram(id)
    }
}

impl From<HexagramId> for ContainerId {
    fn from(id: HexagramId) -> Self {
        ContainerId::Hexagram(id)
    }
}

/// Unique identifier for a tile, stable for the lifetime of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}
