//! The eight trigrams, their compass arrangements and the positional solar
//! terms.

use crate::core::{HeavenOrder, Locale, TrigramId};

/// Static attributes of a trigram.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trigram {
    pub id: TrigramId,
    pub name: &'static str,
    pub name_en: &'static str,
    pub pinyin: &'static str,
    pub symbol: &'static str,
    /// Line states, bottom to top (1 = yang, 0 = yin).
    pub lines: [u8; 3],
    pub nature: &'static str,
    pub nature_en: &'static str,
    pub direction: &'static str,
    pub direction_en: &'static str,
    pub meaning: &'static str,
    pub meaning_en: &'static str,
}

impl Trigram {
    #[must_use]
    pub fn name(&self, locale: Locale) -> &'static str {
        locale.pick(self.name, self.name_en)
    }

    #[must_use]
    pub fn nature(&self, locale: Locale) -> &'static str {
        locale.pick(self.nature, self.nature_en)
    }

    #[must_use]
    pub fn direction(&self, locale: Locale) -> &'static str {
        locale.pick(self.direction, self.direction_en)
    }

    #[must_use]
    pub fn meaning(&self, locale: Locale) -> &'static str {
        locale.pick(self.meaning, self.meaning_en)
    }

    /// Compass position (0..8) under the given arrangement.
    #[must_use]
    pub fn position(&self, order: HeavenOrder) -> usize {
        position(self.id, order)
    }

    /// Solar term paired with this trigram's position.
    #[must_use]
    pub fn solar_term(&self, order: HeavenOrder, locale: Locale) -> &'static str {
        solar_term(self.position(order), locale)
    }
}

/// Trigrams in dataset order.
pub static TRIGRAMS: [Trigram; 8] = [
    Trigram {
        id: TrigramId::Qian,
        name: "乾",
        name_en: "Qian",
        pinyin: "Qián",
        symbol: "☰",
        lines: [1, 1, 1],
        nature: "天",
        nature_en: "Heaven",
        direction: "西北",
        direction_en: "NW",
        meaning: "健",
        meaning_en: "Creative",
    },
    Trigram {
        id: TrigramId::Kun,
        name: "坤",
        name_en: "Kun",
        pinyin: "Kūn",
        symbol: "☷",
        lines: [0, 0, 0],
        nature: "地",
        nature_en: "Earth",
        direction: "西南",
        direction_en: "SW",
        meaning: "顺",
        meaning_en: "Receptive",
    },
    Trigram {
        id: TrigramId::Zhen,
        name: "震",
        name_en: "Zhen",
        pinyin: "Zhèn",
        symbol: "☳",
        lines: [1, 0, 0],
        nature: "雷",
        nature_en: "Thunder",
        direction: "东",
        direction_en: "East",
        meaning: "动",
        meaning_en: "Arousing",
    },
    Trigram {
        id: TrigramId::Xun,
        name: "巽",
        name_en: "Xun",
        pinyin: "Xùn",
        symbol: "☴",
        lines: [0, 1, 1],
        nature: "风",
        nature_en: "Wind",
        direction: "东南",
        direction_en: "SE",
        meaning: "入",
        meaning_en: "Gentle",
    },
    Trigram {
        id: TrigramId::Kan,
        name: "坎",
        name_en: "Kan",
        pinyin: "Kǎn",
        symbol: "☵",
        lines: [0, 1, 0],
        nature: "水",
        nature_en: "Water",
        direction: "北",
        direction_en: "North",
        meaning: "陷",
        meaning_en: "Abysmal",
    },
    Trigram {
        id: TrigramId::Li,
        name: "离",
        name_en: "Li",
        pinyin: "Lí",
        symbol: "☲",
        lines: [1, 0, 1],
        nature: "火",
        nature_en: "Fire",
        direction: "南",
        direction_en: "South",
        meaning: "丽",
        meaning_en: "Clinging",
    },
    Trigram {
        id: TrigramId::Gen,
        name: "艮",
        name_en: "Gen",
        pinyin: "Gèn",
        symbol: "☶",
        lines: [0, 0, 1],
        nature: "山",
        nature_en: "Mountain",
        direction: "东北",
        direction_en: "NE",
        meaning: "止",
        meaning_en: "Keeping Still",
    },
    Trigram {
        id: TrigramId::Dui,
        name: "兑",
        name_en: "Dui",
        pinyin: "Duì",
        symbol: "☱",
        lines: [1, 1, 0],
        nature: "泽",
        nature_en: "Lake",
        direction: "西",
        direction_en: "West",
        meaning: "悦",
        meaning_en: "Joyous",
    },
];

/// Solar terms by compass position, `(zh, en)`.
pub const SOLAR_TERMS: [(&str, &str); 8] = [
    ("夏至", "Summer Solstice"),
    ("立秋", "Autumn Begins"),
    ("秋分", "Autumn Equinox"),
    ("立冬", "Winter Begins"),
    ("冬至", "Winter Solstice"),
    ("立春", "Spring Begins"),
    ("春分", "Spring Equinox"),
    ("立夏", "Summer Begins"),
];

/// Compass position of a trigram under an arrangement.
#[must_use]
pub const fn position(id: TrigramId, order: HeavenOrder) -> usize {
    match order {
        HeavenOrder::Early => match id {
            TrigramId::Qian => 0,
            TrigramId::Xun => 1,
            TrigramId::Kan => 2,
            TrigramId::Gen => 3,
            TrigramId::Kun => 4,
            TrigramId::Zhen => 5,
            TrigramId::Li => 6,
            TrigramId::Dui => 7,
        },
        HeavenOrder::Later => match id {
            TrigramId::Li => 0,
            TrigramId::Kun => 1,
            TrigramId::Dui => 2,
            TrigramId::Qian => 3,
            TrigramId::Kan => 4,
            TrigramId::Gen => 5,
            TrigramId::Zhen => 6,
            TrigramId::Xun => 7,
        },
    }
}

/// Solar term at a compass position. Positions wrap modulo 8.
#[must_use]
pub fn solar_term(position: usize, locale: Locale) -> &'static str {
    let (zh, en) = SOLAR_TERMS[position % SOLAR_TERMS.len()];
    locale.pick(zh, en)
}

/// Trigram ids in binary order (000 .. 111), the axis order of the natural
/// hexagram square.
pub const BINARY_ORDER: [TrigramId; 8] = [
    TrigramId::Kun,
    TrigramId::Gen,
    TrigramId::Kan,
    TrigramId::Xun,
    TrigramId::Zhen,
    TrigramId::Li,
    TrigramId::Dui,
    TrigramId::Qian,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_ids() {
        for (trigram, id) in TRIGRAMS.iter().zip(TrigramId::ALL) {
            assert_eq!(trigram.id, id);
        }
    }

    #[test]
    fn test_positions_are_permutations() {
        for order in [HeavenOrder::Early, HeavenOrder::Later] {
            let mut positions: Vec<_> = TrigramId::ALL.iter().map(|id| position(*id, order)).collect();
            positions.sort_unstable();
            assert_eq!(positions, (0..8).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_known_solar_terms() {
        let qian = &TRIGRAMS[0];
        assert_eq!(qian.solar_term(HeavenOrder::Early, Locale::Zh), "夏至");
        assert_eq!(qian.solar_term(HeavenOrder::Later, Locale::En), "Winter Begins");
    }

    #[test]
    fn test_binary_order_matches_lines() {
        for (value, id) in BINARY_ORDER.iter().enumerate() {
            let trigram = TRIGRAMS.iter().find(|t| t.id == *id).unwrap();
            let [bottom, middle, top] = trigram.lines;
            let encoded = (bottom as usize) << 2 | (middle as usize) << 1 | top as usize;
            assert_eq!(encoded, value, "{id} lines out of binary order");
        }
    }
}
