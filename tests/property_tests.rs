//! Property-based invariant tests for the puzzle engine.
//!
//! 1. Conservation: pool + occupied slots + carry always equals the deal
//! 2. No tile is ever duplicated
//! 3. Kind safety: a mismatched placement leaves pool and slots as they were
//! 4. Score bounds: 0..=100 for any reachable board, 0 for an empty one

use std::collections::HashSet;

use iching_puzzle::board::{Slot, Tile};
use iching_puzzle::core::{
    AppConfig, HeavenOrder, HexSequence, Locale, RoundParams, Target, TileId,
};
use iching_puzzle::data::Dataset;
use iching_puzzle::engine::PuzzleEngine;
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Op {
    /// Point at the pool tile at this index (modulo pool size).
    Pool(usize),
    /// Point at the slot at this index (modulo slot count).
    Slot(usize),
    Return,
    Cancel,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0usize..64).prop_map(Op::Pool),
        4 => (0usize..64).prop_map(Op::Slot),
        1 => Just(Op::Return),
        1 => Just(Op::Cancel),
    ]
}

fn params_strategy() -> impl Strategy<Value = RoundParams> {
    let locale = prop_oneof![Just(Locale::Zh), Just(Locale::En)];
    let heaven = prop_oneof![Just(HeavenOrder::Early), Just(HeavenOrder::Later)];
    let sequence = prop_oneof![Just(HexSequence::Natural), Just(HexSequence::KingWen)];
    (any::<bool>(), heaven, sequence, locale).prop_map(|(trigram, heaven, sequence, locale)| {
        if trigram {
            RoundParams::trigram(heaven, locale)
        } else {
            RoundParams::hexagram(sequence, locale)
        }
    })
}

fn engine(params: RoundParams, seed: u64) -> PuzzleEngine {
    PuzzleEngine::new(Dataset::standard(), &AppConfig::default().with_seed(seed), params)
}

fn apply(engine: &mut PuzzleEngine, op: &Op) {
    match op {
        Op::Pool(n) => {
            let pool = engine.board().pool();
            let id = if pool.is_empty() {
                TileId(u32::MAX)
            } else {
                pool[n % pool.len()].id
            };
            engine.interact(Target::Pool(id));
        }
        Op::Slot(n) => {
            let slots: Vec<_> = engine.board().slots().map(|s| s.key).collect();
            engine.interact(Target::Slot(slots[n % slots.len()]));
        }
        Op::Return => {
            engine.return_to_pool();
        }
        Op::Cancel => {
            engine.cancel();
        }
    }
}

/// Every tile id the engine accounts for, with repeats.
fn all_tile_ids(engine: &PuzzleEngine) -> Vec<TileId> {
    let board = engine.board();
    board
        .pool()
        .iter()
        .chain(board.slots().filter_map(|s| s.tile.as_ref()))
        .chain(engine.carry().map(|c| &c.tile))
        .map(|t| t.id)
        .collect()
}

fn board_state(engine: &PuzzleEngine) -> (Vec<Tile>, Vec<Slot>) {
    (
        engine.board().pool().iter().cloned().collect(),
        engine.board().slots().cloned().collect(),
    )
}

// ═══════════════════════════════════════════════════════════════════════
// 1-2. Conservation
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn tile_count_is_conserved(
        params in params_strategy(),
        seed in any::<u64>(),
        ops in prop::collection::vec(op_strategy(), 0..120),
    ) {
        let mut engine = engine(params, seed);
        let expected = engine.expected_tile_count();

        for op in &ops {
            apply(&mut engine, op);
            prop_assert_eq!(engine.tile_count(), expected, "after {:?}", op);
        }
    }

    #[test]
    fn no_tile_is_duplicated(
        params in params_strategy(),
        seed in any::<u64>(),
        ops in prop::collection::vec(op_strategy(), 0..120),
    ) {
        let mut engine = engine(params, seed);
        let dealt: HashSet<_> = all_tile_ids(&engine).into_iter().collect();

        for op in &ops {
            apply(&mut engine, op);
        }
        let ids = all_tile_ids(&engine);
        let unique: HashSet<_> = ids.iter().copied().collect();
        prop_assert_eq!(unique.len(), ids.len());
        prop_assert_eq!(unique, dealt);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 3. Kind safety
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn mismatched_placement_restores_board(
        seed in any::<u64>(),
        ops in prop::collection::vec(op_strategy(), 0..40),
        pick in 0usize..64,
        aim in 0usize..32,
    ) {
        let mut engine = engine(RoundParams::trigram(HeavenOrder::Early, Locale::En), seed);
        for op in &ops {
            apply(&mut engine, op);
        }
        engine.cancel();
        prop_assume!(engine.board().pool_len() > 0);

        let before = board_state(&engine);
        let pool = engine.board().pool();
        let tile = pool[pick % pool.len()].clone();
        let slots: Vec<_> = engine.board().slots().map(|s| s.key).collect();
        let Some(slot) = (0..slots.len())
            .map(|n| slots[(aim + n) % slots.len()])
            .find(|s| !s.kind.accepts(tile.kind))
        else {
            return Err(TestCaseError::reject("no mismatched slot"));
        };

        engine.interact(Target::Pool(tile.id));
        engine.interact(Target::Slot(slot));

        prop_assert!(!engine.is_holding());
        prop_assert_eq!(board_state(&engine), before);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 4. Score bounds
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn score_stays_within_bounds(
        params in params_strategy(),
        seed in any::<u64>(),
        ops in prop::collection::vec(op_strategy(), 0..200),
    ) {
        let mut engine = engine(params, seed);
        for op in &ops {
            apply(&mut engine, op);
        }
        let request = engine.submit().expect("unfinished round grades");
        let score = engine.score().expect("score stored");

        prop_assert!(request.score <= 100);
        prop_assert!(score.correct <= score.total);
        prop_assert!(request.mismatches.len() <= AppConfig::default().mismatch_limit);
    }

    #[test]
    fn empty_board_scores_zero(params in params_strategy(), seed in any::<u64>()) {
        let mut engine = engine(params, seed);
        let request = engine.submit().expect("unfinished round grades");
        prop_assert_eq!(request.score, 0);
        prop_assert!(request.mismatches.is_empty());
    }
}
