//! Puzzle engine integration tests.
//!
//! These tests drive `PuzzleEngine` through whole rounds: dealing, moving
//! tiles, swapping, cancelling, revealing and grading.

use iching_puzzle::board::{SlotKey, SlotKind, TileKind};
use iching_puzzle::core::{
    AppConfig, CarryOrigin, ContainerId, HeavenOrder, HexSequence, IgnoreReason, Interaction,
    Locale, PuzzleMode, RoundParams, Target, TileId, TrigramId,
};
use iching_puzzle::data::Dataset;
use iching_puzzle::engine::PuzzleEngine;

fn engine(params: RoundParams) -> PuzzleEngine {
    PuzzleEngine::new(Dataset::standard(), &AppConfig::default(), params)
}

fn trigram_tile(engine: &PuzzleEngine, kind: TileKind, trigram: TrigramId) -> TileId {
    engine
        .board()
        .find_in_pool(kind, ContainerId::Trigram(trigram))
        .expect("tile dealt")
        .id
}

fn all_params() -> Vec<RoundParams> {
    let mut params = Vec::new();
    for locale in [Locale::Zh, Locale::En] {
        for heaven in [HeavenOrder::Early, HeavenOrder::Later] {
            params.push(RoundParams::trigram(heaven, locale));
        }
        for sequence in [HexSequence::Natural, HexSequence::KingWen] {
            params.push(RoundParams::hexagram(sequence, locale));
        }
    }
    params
}

// =============================================================================
// Dealing
// =============================================================================

/// Test that each mode deals one tile per slot, all in the pool.
#[test]
fn test_tile_counts_per_mode() {
    for params in all_params() {
        let engine = engine(params);
        let expected = match params.mode {
            PuzzleMode::Trigram => 32,
            _ => 64,
        };
        assert_eq!(engine.expected_tile_count(), expected, "{params:?}");
        assert_eq!(engine.board().pool_len(), expected);
        assert_eq!(engine.board().occupied_count(), 0);
    }
}

/// Test that tile content is localized at deal time.
#[test]
fn test_deal_is_localized() {
    let zh = engine(RoundParams::trigram(HeavenOrder::Early, Locale::Zh));
    let en = engine(RoundParams::trigram(HeavenOrder::Early, Locale::En));
    let qian = ContainerId::Trigram(TrigramId::Qian);

    assert_eq!(zh.board().find_in_pool(TileKind::Nature, qian).unwrap().content, "天");
    assert_eq!(en.board().find_in_pool(TileKind::Nature, qian).unwrap().content, "Heaven");
}

/// Test that tile ids are unique across rounds of one engine.
#[test]
fn test_tile_ids_unique_across_rounds() {
    let mut engine = engine(RoundParams::trigram(HeavenOrder::Early, Locale::Zh));
    let first: Vec<_> = engine.board().pool().iter().map(|t| t.id).collect();
    engine.reset();
    assert!(engine.board().pool().iter().all(|t| !first.contains(&t.id)));
}

// =============================================================================
// End-to-end scenarios
// =============================================================================

/// One correct symbol, nothing else: 1 of 32.
#[test]
fn test_single_symbol_scores_three() {
    let mut engine = engine(RoundParams::trigram(HeavenOrder::Early, Locale::Zh));
    assert_eq!(engine.board().pool_len(), 32);
    assert_eq!(engine.board().occupied_count(), 0);

    let tile = trigram_tile(&engine, TileKind::Symbol, TrigramId::Qian);
    let slot = SlotKey::new(TrigramId::Qian, SlotKind::Symbol);
    engine.interact(Target::Pool(tile));
    let placed = engine.interact(Target::Slot(slot));
    assert!(matches!(placed, Interaction::Placed { evicted: None, .. }));

    let request = engine.submit().unwrap();
    let score = engine.score().unwrap();
    assert!(score.correct >= 1);
    assert_eq!(score.total, 32);
    assert_eq!(request.score, 3);
    assert!(request.mismatches.is_empty());
}

/// Placing into an occupied slot swaps the occupant back into the pool.
#[test]
fn test_place_into_occupied_slot_evicts() {
    let mut engine = engine(RoundParams::trigram(HeavenOrder::Later, Locale::En));
    let slot = SlotKey::new(TrigramId::Qian, SlotKind::Name);
    let a = trigram_tile(&engine, TileKind::Name, TrigramId::Qian);
    let b = trigram_tile(&engine, TileKind::Name, TrigramId::Kun);

    engine.interact(Target::Pool(a));
    engine.interact(Target::Slot(slot));
    engine.interact(Target::Pool(b));
    let outcome = engine.interact(Target::Slot(slot));

    match outcome {
        Interaction::Placed { tile, evicted, .. } => {
            assert_eq!(tile, b);
            assert_eq!(evicted.map(|t| t.id), Some(a));
        }
        other => panic!("expected placement, got {other:?}"),
    }
    assert_eq!(engine.board().tile_at(slot).map(|t| t.id), Some(b));
    assert!(engine.board().pool_position(a).is_some());
    assert_eq!(engine.tile_count(), 32);
}

/// A name tile does not fit a solar-term slot.
#[test]
fn test_kind_mismatch_changes_nothing() {
    let mut engine = engine(RoundParams::trigram(HeavenOrder::Early, Locale::Zh));
    let pool_before = engine.board().pool().clone();
    let tile = trigram_tile(&engine, TileKind::Name, TrigramId::Zhen);

    engine.interact(Target::Pool(tile));
    assert!(engine.is_holding());
    let outcome = engine.interact(Target::Slot(SlotKey::new(TrigramId::Zhen, SlotKind::SolarTerm)));

    assert_eq!(outcome, Interaction::Cancelled { tile });
    assert!(!engine.is_holding());
    assert_eq!(engine.board().pool(), &pool_before);
    assert_eq!(engine.board().occupied_count(), 0);
}

/// A mismatch while holding a tile lifted from a slot puts it back in
/// that slot.
#[test]
fn test_kind_mismatch_restores_origin_slot() {
    let mut engine = engine(RoundParams::trigram(HeavenOrder::Early, Locale::Zh));
    let origin = SlotKey::new(TrigramId::Gen, SlotKind::Nature);
    let tile = trigram_tile(&engine, TileKind::Nature, TrigramId::Gen);
    engine.interact(Target::Pool(tile));
    engine.interact(Target::Slot(origin));

    let lifted = engine.interact(Target::Slot(origin));
    assert_eq!(
        lifted,
        Interaction::PickedUp {
            tile,
            origin: CarryOrigin::Slot(origin),
        }
    );
    engine.interact(Target::Slot(SlotKey::new(TrigramId::Gen, SlotKind::Symbol)));

    assert_eq!(engine.board().tile_at(origin).map(|t| t.id), Some(tile));
    assert_eq!(engine.board().pool_len(), 31);
}

/// Moving a placed tile to another slot of the same kind leaves the
/// first slot empty.
#[test]
fn test_slot_to_slot_move() {
    let mut engine = engine(RoundParams::trigram(HeavenOrder::Early, Locale::En));
    let from = SlotKey::new(TrigramId::Li, SlotKind::Symbol);
    let to = SlotKey::new(TrigramId::Kan, SlotKind::Symbol);
    let tile = trigram_tile(&engine, TileKind::Symbol, TrigramId::Li);

    engine.interact(Target::Pool(tile));
    engine.interact(Target::Slot(from));
    engine.interact(Target::Slot(from));
    engine.interact(Target::Slot(to));

    assert!(engine.board().tile_at(from).is_none());
    assert_eq!(engine.board().tile_at(to).map(|t| t.id), Some(tile));
    assert_eq!(engine.tile_count(), 32);
}

/// Pointing at another pool tile while holding swaps what is held.
#[test]
fn test_pool_target_while_holding_switches_carry() {
    let mut engine = engine(RoundParams::hexagram(HexSequence::Natural, Locale::Zh));
    let pool_before = engine.board().pool().clone();
    let first = pool_before[0].id;
    let second = pool_before[10].id;

    engine.interact(Target::Pool(first));
    engine.interact(Target::Pool(second));

    assert_eq!(engine.carry().map(|c| c.tile.id), Some(second));
    assert_eq!(engine.board().pool()[0].id, first);
    assert_eq!(engine.tile_count(), 64);

    engine.cancel();
    assert_eq!(engine.board().pool(), &pool_before);
}

/// Pointing at a tile that is not in the pool changes nothing.
#[test]
fn test_unknown_pool_tile_is_ignored() {
    let mut engine = engine(RoundParams::trigram(HeavenOrder::Early, Locale::En));
    let held = engine.board().pool()[0].id;
    engine.interact(Target::Pool(held));

    let outcome = engine.interact(Target::Pool(TileId(9_999)));
    assert_eq!(outcome, Interaction::Ignored(IgnoreReason::UnknownTile));
    assert_eq!(engine.carry().map(|c| c.tile.id), Some(held));
}

// =============================================================================
// Auto-complete and grading
// =============================================================================

/// Auto-complete then submit scores 100 in every mode and layout.
#[test]
fn test_auto_complete_scores_full_marks() {
    for params in all_params() {
        let mut engine = engine(params);
        assert!(engine.auto_complete());
        assert_eq!(engine.board().pool_len(), 0);
        assert_eq!(engine.board().occupied_count(), engine.expected_tile_count());

        let request = engine.submit().unwrap();
        assert_eq!(request.score, 100, "{params:?}");
        assert!(request.mismatches.is_empty(), "{params:?}");
    }
}

/// Auto-complete discards a held tile along with the pool.
#[test]
fn test_auto_complete_while_holding() {
    let mut engine = engine(RoundParams::trigram(HeavenOrder::Later, Locale::Zh));
    let tile = engine.board().pool()[3].id;
    engine.interact(Target::Pool(tile));

    assert!(engine.auto_complete());
    assert!(!engine.is_holding());
    assert_eq!(engine.tile_count(), 32);
}

/// A second submit changes neither score nor slots.
#[test]
fn test_submit_twice_is_idempotent() {
    let mut engine = engine(RoundParams::trigram(HeavenOrder::Early, Locale::En));
    let tile = trigram_tile(&engine, TileKind::Name, TrigramId::Dui);
    engine.interact(Target::Pool(tile));
    engine.interact(Target::Slot(SlotKey::new(TrigramId::Qian, SlotKind::Name)));

    engine.submit().unwrap();
    let score = engine.score().cloned();
    let slots: Vec<_> = engine.board().slots().cloned().collect();

    assert!(engine.submit().is_none());
    assert_eq!(engine.score().cloned(), score);
    assert_eq!(engine.board().slots().cloned().collect::<Vec<_>>(), slots);
}

/// Wrong placements are listed by trigram and kind, empty slots are not.
#[test]
fn test_mismatches_name_wrong_slots_only() {
    let mut engine = engine(RoundParams::trigram(HeavenOrder::Early, Locale::En));
    let tile = trigram_tile(&engine, TileKind::SolarTerm, TrigramId::Kun);
    engine.interact(Target::Pool(tile));
    engine.interact(Target::Slot(SlotKey::new(TrigramId::Xun, SlotKind::SolarTerm)));

    let request = engine.submit().unwrap();
    assert_eq!(request.mismatches, vec!["Xun solar term".to_string()]);
    assert_eq!(request.score, 0);
}

/// The mismatch list is cut at the configured limit.
#[test]
fn test_mismatch_limit() {
    let config = AppConfig::default().with_mismatch_limit(2);
    let mut engine = PuzzleEngine::new(
        Dataset::standard(),
        &config,
        RoundParams::hexagram(HexSequence::KingWen, Locale::Zh),
    );

    // Every name placed one slot to the right of where it belongs.
    let slots: Vec<_> = engine.board().slots().map(|s| s.key).collect();
    for (n, slot) in slots.iter().enumerate() {
        let wrong = slots[(n + 1) % slots.len()].container;
        let tile = engine.board().find_in_pool(TileKind::HexName, wrong).unwrap().id;
        engine.interact(Target::Pool(tile));
        engine.interact(Target::Slot(*slot));
    }

    let request = engine.submit().unwrap();
    assert_eq!(request.score, 0);
    assert_eq!(request.mismatches, vec!["乾".to_string(), "坤".to_string()]);
}

/// Hexagram tiles from one view do not grade in the other view's slots;
/// switching view deals a new round.
#[test]
fn test_switching_sequence_redeals() {
    let mut engine = engine(RoundParams::hexagram(HexSequence::Natural, Locale::Zh));
    let generation = engine.generation();
    engine.initialize(RoundParams::hexagram(HexSequence::KingWen, Locale::Zh));

    assert_eq!(engine.generation(), generation + 1);
    assert!(engine
        .board()
        .slots()
        .all(|s| matches!(s.key.container, ContainerId::Hexagram(id) if id.is_king_wen())));
}
