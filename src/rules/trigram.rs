//! Trigram puzzle: eight trigrams, four slots each.

use super::engine::RulesEngine;
use crate::board::{SlotKey, SlotKind, TileFace};
use crate::core::{i18n, ContainerId, HeavenOrder, Locale, PuzzleMode, TrigramId};
use crate::data::{Dataset, Trigram};

/// Rules for trigram mode under one arrangement and locale.
///
/// The arrangement decides which solar term belongs to each trigram; the
/// other three kinds do not depend on it.
#[derive(Clone, Copy, Debug)]
pub struct TrigramRules<'a> {
    data: &'a Dataset,
    heaven: HeavenOrder,
    locale: Locale,
}

impl<'a> TrigramRules<'a> {
    #[must_use]
    pub fn new(data: &'a Dataset, heaven: HeavenOrder, locale: Locale) -> Self {
        Self {
            data,
            heaven,
            locale,
        }
    }

    fn trigram_of(&self, slot: SlotKey) -> Option<&'static Trigram> {
        match slot.container {
            ContainerId::Trigram(id) => Some(self.data.trigram(id)),
            ContainerId::Hexagram(_) => None,
        }
    }

    fn content(&self, trigram: &Trigram, kind: SlotKind) -> Option<String> {
        let text = match kind {
            SlotKind::Name => trigram.name(self.locale),
            SlotKind::Nature => trigram.nature(self.locale),
            SlotKind::SolarTerm => trigram.solar_term(self.heaven, self.locale),
            // Symbol tiles carry the trigram key; the UI draws the glyph.
            SlotKind::Symbol => trigram.id.key(),
            SlotKind::HexName => return None,
        };
        Some(text.to_string())
    }
}

impl RulesEngine for TrigramRules<'_> {
    fn mode_label(&self) -> &'static str {
        i18n::mode_label(PuzzleMode::Trigram, self.locale)
    }

    fn slots(&self) -> Vec<SlotKey> {
        TrigramId::ALL
            .iter()
            .flat_map(|id| SlotKind::TRIGRAM.iter().map(move |kind| SlotKey::new(*id, *kind)))
            .collect()
    }

    fn answer(&self, slot: SlotKey) -> Option<TileFace> {
        let trigram = self.trigram_of(slot)?;
        Some(TileFace {
            kind: slot.kind.tile_kind(),
            content: self.content(trigram, slot.kind)?,
            target: slot.container,
        })
    }

    fn mismatch_label(&self, slot: SlotKey) -> String {
        let name = self
            .trigram_of(slot)
            .map_or("?", |t| t.name(self.locale));
        format!("{} {}", name, i18n::kind_label(slot.kind.tile_kind(), self.locale))
    }
}
