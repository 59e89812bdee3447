//! Hexagram puzzle: 64 hexagrams, one name slot each.

use super::engine::RulesEngine;
use crate::board::{SlotKey, SlotKind, TileFace};
use crate::core::{i18n, ContainerId, HexSequence, Locale, PuzzleMode};
use crate::data::{Dataset, Hexagram};

/// Rules for hexagram mode in one view and locale.
#[derive(Clone, Copy, Debug)]
pub struct HexagramRules<'a> {
    data: &'a Dataset,
    sequence: HexSequence,
    locale: Locale,
}

impl<'a> HexagramRules<'a> {
    #[must_use]
    pub fn new(data: &'a Dataset, sequence: HexSequence, locale: Locale) -> Self {
        Self {
            data,
            sequence,
            locale,
        }
    }

    fn hexagram_of(&self, slot: SlotKey) -> Option<&'a Hexagram> {
        match (slot.container, slot.kind) {
            (ContainerId::Hexagram(id), SlotKind::HexName) => {
                let owned = id.is_king_wen() == (self.sequence == HexSequence::KingWen);
                if owned {
                    self.data.hexagram(id)
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

impl RulesEngine for HexagramRules<'_> {
    fn mode_label(&self) -> &'static str {
        i18n::mode_label(PuzzleMode::Hexagram, self.locale)
    }

    fn slots(&self) -> Vec<SlotKey> {
        self.data
            .hexagrams(self.sequence)
            .iter()
            .map(|h| SlotKey::new(h.id, SlotKind::HexName))
            .collect()
    }

    fn answer(&self, slot: SlotKey) -> Option<TileFace> {
        let hex = self.hexagram_of(slot)?;
        Some(TileFace {
            kind: SlotKind::HexName.tile_kind(),
            content: hex.name(self.locale).to_string(),
            target: slot.container,
        })
    }

    fn mismatch_label(&self, slot: SlotKey) -> String {
        self.hexagram_of(slot)
            .map_or_else(|| slot.to_string(), |h| h.name(self.locale).to_string())
    }
}
