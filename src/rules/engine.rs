//! Rules engine trait for puzzle modes.
//!
//! Modes implement `RulesEngine` to define:
//! - Which slots exist, in layout order
//! - What belongs in each slot (the answer key)
//! - How a wrong placement is described to the feedback generator
//!
//! Dealing and grading are provided methods built on the answer key, so a
//! freshly dealt pool always contains exactly one correct tile per slot.

use smallvec::SmallVec;
use serde::{Deserialize, Serialize};

use crate::board::{Board, SlotKey, TileFace};

/// Result of grading a board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Slots holding the correct content.
    pub correct: usize,
    /// Slots graded (empty slots included).
    pub total: usize,
    /// `round(100 * correct / max(1, total))`, always within `0..=100`.
    pub percent: u8,
    /// Labels of wrong, non-empty placements, in slot order, truncated.
    pub mismatches: SmallVec<[String; 10]>,
}

/// Integer percentage, rounding halves up. `total == 0` counts as 1.
#[must_use]
pub fn percent(correct: usize, total: usize) -> u8 {
    let total = total.max(1);
    let correct = correct.min(total);
    // floor(100c/t + 1/2) without floating point
    ((200 * correct + total) / (2 * total)) as u8
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `slots`: stable order; grading and mismatch lists follow it
/// - `answer`: `None` for slots this mode does not own
/// - `mismatch_label`: already localized
pub trait RulesEngine {
    /// Localized label of the mode, stored in history records.
    fn mode_label(&self) -> &'static str;

    /// Every slot of the board, in layout order.
    fn slots(&self) -> Vec<SlotKey>;

    /// The factually correct tile face for a slot.
    fn answer(&self, slot: SlotKey) -> Option<TileFace>;

    /// Description of a wrong placement in `slot`.
    fn mismatch_label(&self, slot: SlotKey) -> String;

    // === Provided Methods ===

    /// One tile face per slot, in slot order.
    fn deal(&self) -> Vec<TileFace> {
        self.slots()
            .into_iter()
            .filter_map(|slot| self.answer(slot))
            .collect()
    }

    /// Grade a board against the answer key.
    ///
    /// Empty slots count against the score but are not reported as
    /// mismatches.
    fn grade(&self, board: &Board, mismatch_limit: usize) -> Score {
        let slots = self.slots();
        let mut correct = 0;
        let mut mismatches = SmallVec::new();

        for slot in &slots {
            let Some(placed) = board.tile_at(*slot) else {
                continue;
            };
            let expected = self.answer(*slot);
            if expected.is_some_and(|face| face.content == placed.content) {
                correct += 1;
            } else if mismatches.len() < mismatch_limit {
                mismatches.push(self.mismatch_label(*slot));
            }
        }

        Score {
            correct,
            total: slots.len(),
            percent: percent(correct, slots.len()),
            mismatches,
        }
    }
}
