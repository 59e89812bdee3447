//! Read-only reference dataset: trigrams, hexagrams, solar terms, idioms.
//!
//! ## Key Types
//!
//! - `Trigram`: eight entries, fixed at compile time
//! - `Hexagram`: 64 entries per view (natural, King-Wen), built once
//! - `Idiom`: idioms for the browsing mode, keyed to King-Wen hexagrams
//! - `Dataset`: lookup facade shared by the rules and the engine
//! - `TrigramInfo` / `HexagramInfo` / `IdiomInfo`: localized views for the UI
//!
//! ```
//! use iching_puzzle::core::{HexSequence, TrigramId};
//! use iching_puzzle::data::Dataset;
//!
//! let data = Dataset::standard();
//! assert_eq!(data.trigram(TrigramId::Li).name, "离");
//! assert_eq!(data.hexagrams(HexSequence::KingWen)[0].name, "乾");
//! ```

pub mod hexagrams;
pub mod idioms;
pub mod info;
pub mod trigrams;

pub use hexagrams::Hexagram;
pub use info::{HexagramInfo, IdiomInfo, TrigramInfo};
pub use idioms::{Idiom, IDIOMS};
pub use trigrams::{solar_term, Trigram, TRIGRAMS};

use std::sync::Arc;

use crate::core::{HexSequence, HexagramId, TrigramId};

/// Lookup facade over the static tables.
#[derive(Clone, Debug)]
pub struct Dataset {
    natural: Vec<Hexagram>,
    king_wen: Vec<Hexagram>,
}

impl Default for Dataset {
    fn default() -> Self {
        let natural = hexagrams::natural_order();
        let king_wen = hexagrams::king_wen_order(&natural);
        Self { natural, king_wen }
    }
}

impl Dataset {
    /// Build the standard dataset, ready to share between engine and app.
    #[must_use]
    pub fn standard() -> Arc<Self> {
        Arc::new(Self::default())
    }

    // === Trigrams ===

    #[must_use]
    pub fn trigrams(&self) -> &'static [Trigram] {
        &TRIGRAMS
    }

    #[must_use]
    pub fn trigram(&self, id: TrigramId) -> &'static Trigram {
        // Table order matches `TrigramId::ALL`, i.e. declaration order.
        &TRIGRAMS[id as usize]
    }

    /// Upper and lower trigram of a hexagram, in that order.
    #[must_use]
    pub fn composition(&self, hex: &Hexagram) -> (&'static Trigram, &'static Trigram) {
        (self.trigram(hex.upper), self.trigram(hex.lower))
    }

    // === Hexagrams ===

    /// All 64 hexagrams of one view, in that view's order.
    #[must_use]
    pub fn hexagrams(&self, sequence: HexSequence) -> &[Hexagram] {
        match sequence {
            HexSequence::Natural => &self.natural,
            HexSequence::KingWen => &self.king_wen,
        }
    }

    /// Find a hexagram by id in whichever view owns it.
    #[must_use]
    pub fn hexagram(&self, id: HexagramId) -> Option<&Hexagram> {
        let view = if id.is_king_wen() {
            HexSequence::KingWen
        } else {
            HexSequence::Natural
        };
        self.hexagrams(view).get(id.index()).filter(|h| h.id == id)
    }

    #[must_use]
    pub fn hexagram_by_name(&self, sequence: HexSequence, name: &str) -> Option<&Hexagram> {
        self.hexagrams(sequence).iter().find(|h| h.name == name)
    }

    /// Find a hexagram by its bottom-to-top line pattern.
    #[must_use]
    pub fn hexagram_by_lines(&self, sequence: HexSequence, lines: [u8; 6]) -> Option<&Hexagram> {
        self.hexagrams(sequence).iter().find(|h| h.lines == lines)
    }

    // === Idioms ===

    #[must_use]
    pub fn idioms(&self) -> &'static [Idiom] {
        &IDIOMS
    }

    /// Idioms that come from a hexagram, whichever view `id` belongs to.
    pub fn idioms_for(&self, id: HexagramId) -> impl Iterator<Item = &'static Idiom> + '_ {
        let king_wen = self
            .hexagram(id)
            .and_then(|h| self.hexagram_by_name(HexSequence::KingWen, h.name))
            .map(|h| h.id);
        IDIOMS
            .iter()
            .filter(move |idiom| Some(idiom.hexagram) == king_wen)
    }

    /// Hexagram an idiom comes from.
    #[must_use]
    pub fn idiom_source(&self, idiom: &Idiom) -> Option<&Hexagram> {
        self.hexagram(idiom.hexagram)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigram_lookup_matches_id() {
        let data = Dataset::default();
        for id in TrigramId::ALL {
            assert_eq!(data.trigram(id).id, id);
        }
    }

    #[test]
    fn test_hexagram_lookup_by_id() {
        let data = Dataset::default();
        let natural = data.hexagram(HexagramId::natural(63)).unwrap();
        assert_eq!(natural.name, "乾");

        let king_wen = data.hexagram(HexagramId::king_wen(1)).unwrap();
        assert_eq!(king_wen.name, "坤");

        assert!(data.hexagram(HexagramId::natural(64)).is_none());
        assert!(data.hexagram(HexagramId::king_wen(64)).is_none());
    }

    #[test]
    fn test_composition() {
        let data = Dataset::default();
        let tai = data.hexagram_by_name(HexSequence::KingWen, "泰").unwrap();
        let (upper, lower) = data.composition(tai);
        assert_eq!(upper.id, TrigramId::Kun);
        assert_eq!(lower.id, TrigramId::Qian);
    }

    #[test]
    fn test_lookup_by_lines() {
        let data = Dataset::default();
        let found = data
            .hexagram_by_lines(HexSequence::Natural, [1, 0, 1, 0, 1, 0])
            .unwrap();
        assert_eq!(found.name, "既济");
    }

    #[test]
    fn test_idioms_for_either_view() {
        let data = Dataset::default();
        let qian_kw = HexagramId::king_wen(0);
        let qian_natural = data.hexagram_by_name(HexSequence::Natural, "乾").unwrap().id;

        let from_kw: Vec<_> = data.idioms_for(qian_kw).map(|i| i.text).collect();
        let from_natural: Vec<_> = data.idioms_for(qian_natural).map(|i| i.text).collect();

        assert!(from_kw.contains(&"自强不息"));
        assert_eq!(from_kw, from_natural);
    }

    #[test]
    fn test_idiom_source() {
        let data = Dataset::default();
        let idiom = data.idioms().iter().find(|i| i.text == "否极泰来").unwrap();
        assert_eq!(data.idiom_source(idiom).unwrap().name, "泰");
    }
}
