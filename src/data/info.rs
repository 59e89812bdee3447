//! Localized, serializable views of the reference tables for the reference
//! panels and the idiom browser.

use serde::Serialize;

use super::{Dataset, Hexagram, Idiom, Trigram};
use crate::core::{HeavenOrder, HexSequence, HexagramId, Locale, TrigramId};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TrigramInfo {
    pub id: TrigramId,
    pub name: &'static str,
    pub pinyin: &'static str,
    pub symbol: &'static str,
    pub lines: [u8; 3],
    pub nature: &'static str,
    pub direction: &'static str,
    pub meaning: &'static str,
    /// Compass position under the active arrangement.
    pub position: usize,
    pub solar_term: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HexagramInfo {
    pub id: HexagramId,
    pub name: &'static str,
    pub pinyin: &'static str,
    pub judgment: &'static str,
    pub explanation: &'static str,
    pub upper: &'static str,
    pub lower: &'static str,
    pub lines: [u8; 6],
    /// Idioms drawn from this hexagram.
    pub idioms: Vec<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IdiomInfo {
    pub text: &'static str,
    pub origin: &'static str,
    pub hexagram: HexagramId,
    /// Name of the source hexagram.
    pub source: &'static str,
}

impl Dataset {
    #[must_use]
    pub fn trigram_info(&self, trigram: &Trigram, heaven: HeavenOrder, locale: Locale) -> TrigramInfo {
        TrigramInfo {
            id: trigram.id,
            name: trigram.name(locale),
            pinyin: trigram.pinyin,
            symbol: trigram.symbol,
            lines: trigram.lines,
            nature: trigram.nature(locale),
            direction: trigram.direction(locale),
            meaning: trigram.meaning(locale),
            position: trigram.position(heaven),
            solar_term: trigram.solar_term(heaven, locale),
        }
    }

    #[must_use]
    pub fn hexagram_info(&self, hex: &Hexagram, locale: Locale) -> HexagramInfo {
        let (upper, lower) = self.composition(hex);
        HexagramInfo {
            id: hex.id,
            name: hex.name(locale),
            pinyin: hex.pinyin,
            judgment: hex.judgment,
            explanation: hex.explanation,
            upper: upper.name(locale),
            lower: lower.name(locale),
            lines: hex.lines,
            idioms: self.idioms_for(hex.id).map(|idiom| idiom.text(locale)).collect(),
        }
    }

    #[must_use]
    pub fn idiom_info(&self, idiom: &Idiom, locale: Locale) -> IdiomInfo {
        IdiomInfo {
            text: idiom.text(locale),
            origin: idiom.origin(locale),
            hexagram: idiom.hexagram,
            source: self
                .idiom_source(idiom)
                .map_or("", |hex| hex.name(locale)),
        }
    }

    /// All trigrams in table order.
    #[must_use]
    pub fn trigram_infos(&self, heaven: HeavenOrder, locale: Locale) -> Vec<TrigramInfo> {
        self.trigrams()
            .iter()
            .map(|t| self.trigram_info(t, heaven, locale))
            .collect()
    }

    /// All hexagrams of one view, in that view's order.
    #[must_use]
    pub fn hexagram_infos(&self, sequence: HexSequence, locale: Locale) -> Vec<HexagramInfo> {
        self.hexagrams(sequence)
            .iter()
            .map(|h| self.hexagram_info(h, locale))
            .collect()
    }

    #[must_use]
    pub fn idiom_infos(&self, locale: Locale) -> Vec<IdiomInfo> {
        self.idioms()
            .iter()
            .map(|i| self.idiom_info(i, locale))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigram_info_follows_arrangement() {
        let data = Dataset::default();
        let li = data.trigram(TrigramId::Li);

        let early = data.trigram_info(li, HeavenOrder::Early, Locale::En);
        assert_eq!(early.direction, "South");
        assert_eq!(early.meaning, "Clinging");
        assert_eq!(early.solar_term, "Spring Equinox");

        let later = data.trigram_info(li, HeavenOrder::Later, Locale::Zh);
        assert_eq!(later.name, "离");
        assert_eq!(later.position, 0);
        assert_eq!(later.solar_term, "夏至");
    }

    #[test]
    fn test_hexagram_info_lists_idioms() {
        let data = Dataset::default();
        let infos = data.hexagram_infos(HexSequence::KingWen, Locale::Zh);
        assert_eq!(infos.len(), 64);

        let tai = &infos[10];
        assert_eq!(tai.name, "泰");
        assert_eq!((tai.upper, tai.lower), ("坤", "乾"));
        assert!(tai.idioms.contains(&"否极泰来"));
    }

    #[test]
    fn test_idiom_info_names_source() {
        let data = Dataset::default();
        let infos = data.idiom_infos(Locale::En);
        assert_eq!(infos.len(), data.idioms().len());

        let first = &infos[0];
        assert_eq!(first.text, "Self-Improvement");
        assert_eq!(first.source, "The Creative. Perseverance furthers.");
    }
}
