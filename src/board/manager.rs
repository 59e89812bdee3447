//! Board: the pool of unplaced tiles and the slots tiles are placed into.
//!
//! The `Board` only moves tiles around. It supports:
//! - An ordered pool with index-preserving removal and reinsertion
//! - A fixed, ordered set of slots keyed by `SlotKey`
//! - Lookup of pool tiles by id or by (kind, target)
//!
//! Kind checks and the finished-round lock live in the engine.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::Serialize;

use super::tile::{SlotKey, Tile, TileKind};
use crate::core::{ContainerId, TileId};

/// A slot and its occupant, if any.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Slot {
    pub key: SlotKey,
    pub tile: Option<Tile>,
}

/// Pool and slots of one round.
///
/// Uses `im::Vector` so that round snapshots handed to the UI clone in O(1).
///
/// ## Usage
///
/// ```
/// use iching_puzzle::board::{Board, SlotKey, SlotKind, Tile, TileKind};
/// use iching_puzzle::core::{ContainerId, TileId, TrigramId};
///
/// let slot = SlotKey::new(TrigramId::Qian, SlotKind::Symbol);
/// let tile = Tile {
///     id: TileId(0),
///     kind: TileKind::Symbol,
///     content: "qian".to_string(),
///     target: ContainerId::Trigram(TrigramId::Qian),
/// };
///
/// let mut board = Board::new([slot], [tile]);
/// let (_, tile) = board.take_from_pool(TileId(0)).unwrap();
/// assert_eq!(board.put(slot, tile), Ok(None));
/// assert_eq!(board.occupied_count(), 1);
/// ```
#[derive(Clone, Debug, Default, Serialize)]
pub struct Board {
    pool: Vector<Tile>,
    slots: Vector<Slot>,
    #[serde(skip)]
    index: FxHashMap<SlotKey, usize>,
}

impl Board {
    /// Create a board with empty slots and the given pool, in order.
    ///
    /// Duplicate slot keys are collapsed onto the first occurrence.
    pub fn new(
        slots: impl IntoIterator<Item = SlotKey>,
        pool: impl IntoIterator<Item = Tile>,
    ) -> Self {
        let mut board = Self {
            pool: pool.into_iter().collect(),
            ..Self::default()
        };
        for key in slots {
            if board.index.contains_key(&key) {
                continue;
            }
            board.index.insert(key, board.slots.len());
            board.slots.push_back(Slot { key, tile: None });
        }
        board
    }

    // === Pool ===

    /// Tiles not placed in any slot, in display order.
    #[must_use]
    pub fn pool(&self) -> &Vector<Tile> {
        &self.pool
    }

    #[must_use]
    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    /// Pool tiles of one kind, in pool order (display grouping).
    pub fn pool_by_kind(&self, kind: TileKind) -> impl Iterator<Item = &Tile> + '_ {
        self.pool.iter().filter(move |t| t.kind == kind)
    }

    /// Find the pool tile of `kind` that belongs to `target`.
    #[must_use]
    pub fn find_in_pool(&self, kind: TileKind, target: ContainerId) -> Option<&Tile> {
        self.pool.iter().find(|t| t.kind == kind && t.target == target)
    }

    /// Position of a tile in the pool.
    #[must_use]
    pub fn pool_position(&self, id: TileId) -> Option<usize> {
        self.pool.iter().position(|t| t.id == id)
    }

    /// Remove a tile from the pool.
    ///
    /// Returns the index it occupied and the tile, or `None` if the tile is
    /// not in the pool.
    pub fn take_from_pool(&mut self, id: TileId) -> Option<(usize, Tile)> {
        let idx = self.pool_position(id)?;
        Some((idx, self.pool.remove(idx)))
    }

    /// Insert a tile at `index` (clamped to the pool length).
    pub fn insert_into_pool(&mut self, index: usize, tile: Tile) {
        let idx = index.min(self.pool.len());
        self.pool.insert(idx, tile);
    }

    /// Append a tile to the end of the pool.
    pub fn push_to_pool(&mut self, tile: Tile) {
        self.pool.push_back(tile);
    }

    /// Drop every pool tile.
    pub fn clear_pool(&mut self) {
        self.pool.clear();
    }

    // === Slots ===

    /// All slots, in layout order.
    pub fn slots(&self) -> impl Iterator<Item = &Slot> + '_ {
        self.slots.iter()
    }

    #[must_use]
    pub fn has_slot(&self, key: SlotKey) -> bool {
        self.index.contains_key(&key)
    }

    /// Occupant of a slot. `None` for empty or unknown slots.
    #[must_use]
    pub fn tile_at(&self, key: SlotKey) -> Option<&Tile> {
        let idx = *self.index.get(&key)?;
        self.slots.get(idx)?.tile.as_ref()
    }

    /// Empty a slot, returning its occupant.
    pub fn take_from_slot(&mut self, key: SlotKey) -> Option<Tile> {
        let idx = *self.index.get(&key)?;
        self.slots.get_mut(idx)?.tile.take()
    }

    /// Write a tile into a slot.
    ///
    /// Returns the evicted occupant, or `Err(tile)` if the slot does not
    /// exist on this board.
    pub fn put(&mut self, key: SlotKey, tile: Tile) -> Result<Option<Tile>, Tile> {
        let Some(&idx) = self.index.get(&key) else {
            return Err(tile);
        };
        match self.slots.get_mut(idx) {
            Some(slot) => Ok(slot.tile.replace(tile)),
            None => Err(tile),
        }
    }

    // === Counts ===

    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.tile.is_some()).count()
    }

    /// Tiles on the board: pool plus occupied slots.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.pool_len() + self.occupied_count()
    }
}
