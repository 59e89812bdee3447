//! Puzzle engine: the only way a round's pool, slots and carry change.
//!
//! ## Key Types
//!
//! - `PuzzleEngine`: owns the active `Round`, the held tile and the RNG
//! - `Round`: board, finished flag, score, feedback text
//! - `Carry`: the held tile and where it came from
//!
//! ## Lifecycle
//!
//! Every (re)initialization bumps a generation counter and replaces the
//! round. `submit` locks the round and returns a `FeedbackRequest` stamped
//! with that generation; `apply_feedback` only accepts text for the current
//! generation.
//!
//! ## Usage
//!
//! ```
//! use iching_puzzle::board::{SlotKey, SlotKind, TileKind};
//! use iching_puzzle::core::{AppConfig, ContainerId, HeavenOrder, Locale, RoundParams, Target, TrigramId};
//! use iching_puzzle::data::Dataset;
//! use iching_puzzle::engine::PuzzleEngine;
//!
//! let params = RoundParams::trigram(HeavenOrder::Early, Locale::Zh);
//! let mut engine = PuzzleEngine::new(Dataset::standard(), &AppConfig::default(), params);
//! assert_eq!(engine.board().pool_len(), 32);
//!
//! let qian = ContainerId::Trigram(TrigramId::Qian);
//! let tile = engine.board().find_in_pool(TileKind::Symbol, qian).unwrap().id;
//! engine.interact(Target::Pool(tile));
//! engine.interact(Target::Slot(SlotKey::new(TrigramId::Qian, SlotKind::Symbol)));
//!
//! let request = engine.submit().unwrap();
//! assert_eq!(request.score, 3);
//! assert!(engine.is_finished());
//! ```

pub mod round;

pub use round::{Carry, Round};

use std::sync::Arc;

use tracing::{debug, info, trace};

use crate::board::{Board, SlotKey, Tile};
use crate::core::{
    AppConfig, CarryOrigin, GameRng, GameRngState, IgnoreReason, Interaction, PuzzleMode,
    RoundParams, Target, TileId,
};
use crate::data::Dataset;
use crate::feedback::FeedbackRequest;
use crate::rules::{rules_for, Score};

/// State machine for one player's puzzle.
#[derive(Clone, Debug)]
pub struct PuzzleEngine {
    data: Arc<Dataset>,
    params: RoundParams,
    mismatch_limit: usize,
    rng: GameRng,
    round: Round,
    carry: Option<Carry>,
    generation: u64,
    next_tile_id: u32,
}

impl PuzzleEngine {
    /// Create an engine and deal the first round.
    #[must_use]
    pub fn new(data: Arc<Dataset>, config: &AppConfig, params: RoundParams) -> Self {
        let mut engine = Self {
            data,
            params,
            mismatch_limit: config.mismatch_limit,
            rng: GameRng::new(config.seed),
            round: Round::default(),
            carry: None,
            generation: 0,
            next_tile_id: 0,
        };
        engine.initialize(params);
        engine
    }

    // === Lifecycle ===

    /// Replace the round with a freshly dealt, shuffled one.
    ///
    /// Always succeeds. Clears the carry and any score or feedback.
    pub fn initialize(&mut self, params: RoundParams) {
        self.params = params;
        self.generation += 1;
        self.carry = None;

        let data = Arc::clone(&self.data);
        let board = match rules_for(&data, &params) {
            Some(rules) => {
                let mut tiles: Vec<Tile> = rules
                    .deal()
                    .into_iter()
                    .map(|face| face.into_tile(self.alloc_tile_id()))
                    .collect();
                self.rng.shuffle(&mut tiles);
                Board::new(rules.slots(), tiles)
            }
            None => Board::default(),
        };

        debug!(
            target: "iching_puzzle::engine",
            generation = self.generation,
            mode = ?params.mode,
            heaven = ?params.heaven,
            sequence = ?params.sequence,
            locale = params.locale.code(),
            tiles = board.tile_count(),
            "round initialized"
        );
        self.round = Round::new(board);
    }

    /// Re-deal with the active parameters.
    pub fn reset(&mut self) {
        self.initialize(self.params);
    }

    fn alloc_tile_id(&mut self) -> TileId {
        let id = TileId(self.next_tile_id);
        self.next_tile_id = self.next_tile_id.wrapping_add(1);
        id
    }

    // === Queries ===

    #[must_use]
    pub fn params(&self) -> RoundParams {
        self.params
    }

    #[must_use]
    pub fn data(&self) -> &Dataset {
        &self.data
    }

    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.round.board
    }

    #[must_use]
    pub fn carry(&self) -> Option<&Carry> {
        self.carry.as_ref()
    }

    #[must_use]
    pub fn is_holding(&self) -> bool {
        self.carry.is_some()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.round.finished
    }

    #[must_use]
    pub fn score(&self) -> Option<&Score> {
        self.round.score.as_ref()
    }

    /// Generation of the active round.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Tiles accounted for: pool, occupied slots and the carry.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.round.board.tile_count() + usize::from(self.carry.is_some())
    }

    /// Tiles the active mode deals: one per slot.
    #[must_use]
    pub fn expected_tile_count(&self) -> usize {
        self.round.board.slot_count()
    }

    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Continue shuffling from a saved RNG state.
    pub fn restore_rng(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
    }

    // === Interactions ===

    /// Single entry point for a press/tap/drop on `target`.
    ///
    /// A slot target while holding a tile is a placement; everything else is
    /// a pick-up.
    pub fn interact(&mut self, target: Target) -> Interaction {
        let outcome = match target {
            Target::Slot(slot) if self.carry.is_some() => self.apply_place(slot),
            _ => self.apply_pick_up(target),
        };
        traced("interact", outcome)
    }

    /// Pick up a tile from the pool or from a slot.
    ///
    /// A tile already held is returned to the pool first.
    pub fn pick_up(&mut self, source: Target) -> Interaction {
        let outcome = self.apply_pick_up(source);
        traced("pick_up", outcome)
    }

    /// Put the held tile into `slot`.
    ///
    /// A kind mismatch cancels the carry: the tile goes back where it was
    /// picked up from. An occupied slot evicts its tile to the end of the
    /// pool.
    pub fn place(&mut self, slot: SlotKey) -> Interaction {
        let outcome = self.apply_place(slot);
        traced("place", outcome)
    }

    /// Drop the held tile into the pool.
    ///
    /// A tile lifted from a slot is appended; one lifted from the pool goes
    /// back to its former index.
    pub fn return_to_pool(&mut self) -> Interaction {
        let outcome = match self.guard() {
            Some(reason) => Interaction::Ignored(reason),
            None => match self.carry.take() {
                Some(carry) => Interaction::Returned {
                    tile: self.return_tile(carry),
                },
                None => Interaction::Ignored(IgnoreReason::NothingHeld),
            },
        };
        traced("return_to_pool", outcome)
    }

    /// Put the held tile back exactly where it came from.
    pub fn cancel(&mut self) -> Interaction {
        let outcome = match self.carry.take() {
            Some(carry) => Interaction::Cancelled {
                tile: self.restore(carry),
            },
            None => Interaction::Ignored(IgnoreReason::NothingHeld),
        };
        traced("cancel", outcome)
    }

    fn guard(&self) -> Option<IgnoreReason> {
        if self.params.mode == PuzzleMode::Idiom {
            Some(IgnoreReason::NoPlacementState)
        } else if self.round.finished {
            Some(IgnoreReason::Finished)
        } else {
            None
        }
    }

    fn apply_pick_up(&mut self, source: Target) -> Interaction {
        if let Some(reason) = self.guard() {
            return Interaction::Ignored(reason);
        }

        match source {
            Target::Pool(id) => {
                if self.round.board.pool_position(id).is_none() {
                    return Interaction::Ignored(IgnoreReason::UnknownTile);
                }
                self.stow_carry();
                match self.round.board.take_from_pool(id) {
                    Some((index, tile)) => self.hold(tile, CarryOrigin::Pool { index }),
                    None => Interaction::Ignored(IgnoreReason::UnknownTile),
                }
            }
            Target::Slot(slot) => {
                if !self.round.board.has_slot(slot) {
                    return Interaction::Ignored(IgnoreReason::UnknownSlot);
                }
                if self.round.board.tile_at(slot).is_none() {
                    return Interaction::Ignored(IgnoreReason::EmptySlot);
                }
                self.stow_carry();
                match self.round.board.take_from_slot(slot) {
                    Some(tile) => self.hold(tile, CarryOrigin::Slot(slot)),
                    None => Interaction::Ignored(IgnoreReason::EmptySlot),
                }
            }
        }
    }

    fn apply_place(&mut self, slot: SlotKey) -> Interaction {
        if let Some(reason) = self.guard() {
            return Interaction::Ignored(reason);
        }
        let Some(carry) = self.carry.take() else {
            return Interaction::Ignored(IgnoreReason::NothingHeld);
        };
        if !self.round.board.has_slot(slot) {
            self.carry = Some(carry);
            return Interaction::Ignored(IgnoreReason::UnknownSlot);
        }
        if !slot.kind.accepts(carry.tile.kind) {
            return Interaction::Cancelled {
                tile: self.restore(carry),
            };
        }

        let tile = carry.tile.id;
        match self.round.board.put(slot, carry.tile) {
            Ok(evicted) => {
                if let Some(previous) = &evicted {
                    self.round.board.push_to_pool(previous.clone());
                }
                Interaction::Placed {
                    tile,
                    slot,
                    evicted,
                }
            }
            Err(rejected) => Interaction::Cancelled {
                tile: self.restore(Carry {
                    tile: rejected,
                    origin: carry.origin,
                }),
            },
        }
    }

    fn hold(&mut self, tile: Tile, origin: CarryOrigin) -> Interaction {
        let id = tile.id;
        self.carry = Some(Carry { tile, origin });
        Interaction::PickedUp { tile: id, origin }
    }

    /// Return the held tile, if any, before picking up another.
    fn stow_carry(&mut self) {
        if let Some(carry) = self.carry.take() {
            self.return_tile(carry);
        }
    }

    fn return_tile(&mut self, carry: Carry) -> TileId {
        let id = carry.tile.id;
        match carry.origin {
            CarryOrigin::Pool { index } => self.round.board.insert_into_pool(index, carry.tile),
            CarryOrigin::Slot(_) => self.round.board.push_to_pool(carry.tile),
        }
        id
    }

    fn restore(&mut self, carry: Carry) -> TileId {
        let id = carry.tile.id;
        match carry.origin {
            CarryOrigin::Pool { index } => self.round.board.insert_into_pool(index, carry.tile),
            CarryOrigin::Slot(slot) => match self.round.board.put(slot, carry.tile) {
                Ok(None) => {}
                Ok(Some(other)) | Err(other) => self.round.board.push_to_pool(other),
            },
        }
        id
    }

    // === Round actions ===

    /// Reveal the answer: fill every slot with a fresh correct tile and
    /// empty the pool.
    ///
    /// Returns `false` when the round is finished or the mode has no board.
    pub fn auto_complete(&mut self) -> bool {
        if self.guard().is_some() {
            return false;
        }
        let params = self.params;
        let data = Arc::clone(&self.data);
        let Some(rules) = rules_for(&data, &params) else {
            return false;
        };

        self.carry = None;
        self.round.board.clear_pool();
        let mut filled = 0;
        for slot in rules.slots() {
            if let Some(face) = rules.answer(slot) {
                let tile = face.into_tile(self.alloc_tile_id());
                if self.round.board.put(slot, tile).is_ok() {
                    filled += 1;
                }
            }
        }

        debug!(
            target: "iching_puzzle::engine",
            generation = self.generation,
            filled,
            "auto-complete revealed the answer"
        );
        true
    }

    /// Grade the board and lock the round.
    ///
    /// A held tile is put back first. Returns the feedback ticket, or `None`
    /// when the round is already finished or the mode has no board.
    pub fn submit(&mut self) -> Option<FeedbackRequest> {
        if self.guard().is_some() {
            return None;
        }
        let params = self.params;
        let data = Arc::clone(&self.data);
        let rules = rules_for(&data, &params)?;

        if let Some(carry) = self.carry.take() {
            self.restore(carry);
        }

        let score = rules.grade(&self.round.board, self.mismatch_limit);
        info!(
            target: "iching_puzzle::engine",
            generation = self.generation,
            score = score.percent,
            correct = score.correct,
            total = score.total,
            mismatches = score.mismatches.len(),
            "round graded"
        );

        let request = FeedbackRequest {
            generation: self.generation,
            score: score.percent,
            mismatches: score.mismatches.to_vec(),
            locale: params.locale,
            mode_label: rules.mode_label().to_string(),
        };
        self.round.finished = true;
        self.round.score = Some(score);
        Some(request)
    }

    /// Merge feedback text into the round it was requested for.
    ///
    /// Returns `false` and changes nothing if the round has been replaced
    /// since `request` was issued.
    pub fn apply_feedback(&mut self, request: &FeedbackRequest, text: impl Into<String>) -> bool {
        if request.generation != self.generation || !self.round.finished {
            debug!(
                target: "iching_puzzle::engine",
                requested = request.generation,
                current = self.generation,
                "discarding stale feedback"
            );
            return false;
        }
        self.round.feedback = Some(text.into());
        true
    }
}

fn traced(op: &'static str, outcome: Interaction) -> Interaction {
    trace!(target: "iching_puzzle::engine", op, outcome = ?outcome, "interaction");
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{SlotKind, TileKind};
    use crate::core::{ContainerId, HeavenOrder, HexSequence, Locale, TrigramId};

    fn trigram_engine() -> PuzzleEngine {
        PuzzleEngine::new(
            Dataset::standard(),
            &AppConfig::default(),
            RoundParams::trigram(HeavenOrder::Early, Locale::En),
        )
    }

    fn pool_tile(engine: &PuzzleEngine, kind: TileKind, target: TrigramId) -> TileId {
        engine
            .board()
            .find_in_pool(kind, ContainerId::Trigram(target))
            .unwrap()
            .id
    }

    #[test]
    fn test_initialize_deals_full_pool() {
        let engine = trigram_engine();
        assert_eq!(engine.board().pool_len(), 32);
        assert_eq!(engine.board().occupied_count(), 0);
        assert_eq!(engine.expected_tile_count(), 32);
        assert!(!engine.is_holding());
        assert!(!engine.is_finished());
    }

    #[test]
    fn test_same_seed_same_pool_order() {
        let a = trigram_engine();
        let b = trigram_engine();
        let contents = |e: &PuzzleEngine| -> Vec<String> {
            e.board().pool().iter().map(|t| t.content.clone()).collect()
        };
        assert_eq!(contents(&a), contents(&b));
    }

    #[test]
    fn test_pick_up_from_pool_then_return_restores_index() {
        let mut engine = trigram_engine();
        let before = engine.board().pool().clone();
        let id = before[5].id;

        let outcome = engine.interact(Target::Pool(id));
        assert_eq!(
            outcome,
            Interaction::PickedUp {
                tile: id,
                origin: CarryOrigin::Pool { index: 5 },
            }
        );
        assert_eq!(engine.tile_count(), 32);

        assert_eq!(engine.return_to_pool(), Interaction::Returned { tile: id });
        assert_eq!(engine.board().pool(), &before);
    }

    #[test]
    fn test_slot_origin_return_appends() {
        let mut engine = trigram_engine();
        let slot = SlotKey::new(TrigramId::Kun, SlotKind::Name);
        let id = pool_tile(&engine, TileKind::Name, TrigramId::Kun);

        engine.interact(Target::Pool(id));
        engine.interact(Target::Slot(slot));
        engine.interact(Target::Slot(slot));
        assert_eq!(engine.board().tile_at(slot), None);

        engine.return_to_pool();
        assert_eq!(engine.board().pool().last().map(|t| t.id), Some(id));
    }

    #[test]
    fn test_kind_mismatch_cancels_to_origin() {
        let mut engine = trigram_engine();
        let before = engine.board().clone();
        let id = pool_tile(&engine, TileKind::Name, TrigramId::Li);

        engine.interact(Target::Pool(id));
        let outcome = engine.interact(Target::Slot(SlotKey::new(TrigramId::Li, SlotKind::SolarTerm)));

        assert_eq!(outcome, Interaction::Cancelled { tile: id });
        assert!(!engine.is_holding());
        assert_eq!(engine.board().pool(), before.pool());
        assert_eq!(engine.board().occupied_count(), 0);
    }

    #[test]
    fn test_nothing_held() {
        let mut engine = trigram_engine();
        let slot = SlotKey::new(TrigramId::Qian, SlotKind::Name);
        assert_eq!(engine.place(slot), Interaction::Ignored(IgnoreReason::NothingHeld));
        assert_eq!(engine.cancel(), Interaction::Ignored(IgnoreReason::NothingHeld));
        assert_eq!(
            engine.interact(Target::Slot(slot)),
            Interaction::Ignored(IgnoreReason::EmptySlot)
        );
    }

    #[test]
    fn test_unknown_slot_keeps_carry() {
        let mut engine = trigram_engine();
        let id = pool_tile(&engine, TileKind::Name, TrigramId::Qian);
        engine.interact(Target::Pool(id));

        let foreign = SlotKey::new(crate::core::HexagramId::natural(0), SlotKind::HexName);
        assert_eq!(engine.place(foreign), Interaction::Ignored(IgnoreReason::UnknownSlot));
        assert!(engine.is_holding());
    }

    #[test]
    fn test_submit_locks_round() {
        let mut engine = trigram_engine();
        let request = engine.submit().unwrap();
        assert_eq!(request.score, 0);
        assert_eq!(request.generation, engine.generation());
        assert_eq!(request.mode_label, "Bagua");

        assert!(engine.submit().is_none());
        let id = engine.board().pool()[0].id;
        assert_eq!(
            engine.interact(Target::Pool(id)),
            Interaction::Ignored(IgnoreReason::Finished)
        );
        assert!(!engine.auto_complete());
    }

    #[test]
    fn test_submit_while_holding_puts_tile_back() {
        let mut engine = trigram_engine();
        let id = pool_tile(&engine, TileKind::Nature, TrigramId::Gen);
        engine.interact(Target::Pool(id));

        engine.submit().unwrap();
        assert!(!engine.is_holding());
        assert_eq!(engine.tile_count(), 32);
        assert!(engine.board().pool_position(id).is_some());
    }

    #[test]
    fn test_stale_feedback_is_discarded() {
        let mut engine = trigram_engine();
        let request = engine.submit().unwrap();
        engine.reset();

        assert!(!engine.apply_feedback(&request, "late"));
        assert_eq!(engine.round().feedback(), None);
    }

    #[test]
    fn test_fresh_feedback_is_applied() {
        let mut engine = trigram_engine();
        let request = engine.submit().unwrap();
        assert!(engine.apply_feedback(&request, "Keep going."));
        assert_eq!(engine.round().feedback(), Some("Keep going."));
    }

    #[test]
    fn test_idiom_mode_has_no_board() {
        let mut engine = trigram_engine();
        engine.initialize(RoundParams::idiom(Locale::Zh));

        assert_eq!(engine.tile_count(), 0);
        assert!(!engine.auto_complete());
        assert!(engine.submit().is_none());
        assert_eq!(
            engine.interact(Target::Pool(TileId(0))),
            Interaction::Ignored(IgnoreReason::NoPlacementState)
        );
    }

    #[test]
    fn test_generation_bumps_on_every_initialize() {
        let mut engine = trigram_engine();
        let first = engine.generation();
        engine.reset();
        engine.initialize(RoundParams::hexagram(HexSequence::KingWen, Locale::Zh));
        assert_eq!(engine.generation(), first + 2);
        assert_eq!(engine.board().pool_len(), 64);
    }

    #[test]
    fn test_rng_state_reproduces_next_deal() {
        let mut engine = trigram_engine();
        let saved = engine.rng_state();
        engine.reset();
        let order: Vec<_> = engine.board().pool().iter().map(|t| t.content.clone()).collect();

        engine.restore_rng(&saved);
        engine.reset();
        let replay: Vec<_> = engine.board().pool().iter().map(|t| t.content.clone()).collect();
        assert_eq!(order, replay);
    }
}
