//! Puzzle rules: answer keys, dealing and grading.
//!
//! Modes implement `RulesEngine`; the engine picks the implementation for
//! the active `RoundParams` and never interprets mode-specific content
//! itself.

pub mod engine;
pub mod hexagram;
pub mod trigram;

pub use engine::{percent, RulesEngine, Score};
pub use hexagram::HexagramRules;
pub use trigram::TrigramRules;

use crate::core::{PuzzleMode, RoundParams};
use crate::data::Dataset;

/// Rules for the active mode. Idiom mode has none: it is browse-only.
#[must_use]
pub fn rules_for<'a>(data: &'a Dataset, params: &RoundParams) -> Option<Box<dyn RulesEngine + 'a>> {
    match params.mode {
        PuzzleMode::Trigram => Some(Box::new(TrigramRules::new(data, params.heaven, params.locale))),
        PuzzleMode::Hexagram => Some(Box::new(HexagramRules::new(
            data,
            params.sequence,
            params.locale,
        ))),
        PuzzleMode::Idiom => None,
    }
}
