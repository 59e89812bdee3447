//! Interaction representation: what the player pointed at, and what the
//! engine did about it.
//!
//! The UI forwards every press/tap/drop as a `Target`. The engine decides
//! whether it is a pick-up or a placement based on whether a tile is
//! already held, and reports the outcome as an `Interaction`. Rejected
//! interactions are outcomes too, never errors.
//!
//! ## Example
//!
//! ```
//! use iching_puzzle::board::{SlotKey, SlotKind};
//! use iching_puzzle::core::{Target, TileId, TrigramId};
//!
//! let from_pool = Target::Pool(TileId(3));
//! let into_slot = Target::Slot(SlotKey::new(TrigramId::Qian, SlotKind::Name));
//! assert_ne!(from_pool, into_slot);
//! ```

use serde::{Deserialize, Serialize};

use super::ids::TileId;
use crate::board::{SlotKey, Tile};

/// Something the player can point at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    /// A tile lying in the pool.
    Pool(TileId),
    /// A slot, empty or occupied.
    Slot(SlotKey),
}

/// Where the held tile was picked up from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CarryOrigin {
    /// The pool, at this index.
    Pool { index: usize },
    /// A slot, which stays empty while the tile is held.
    Slot(SlotKey),
}

/// Outcome of one interaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Interaction {
    /// A tile is now held.
    PickedUp { tile: TileId, origin: CarryOrigin },

    /// The held tile went into `slot`; `evicted` was appended to the pool.
    Placed {
        tile: TileId,
        slot: SlotKey,
        evicted: Option<Tile>,
    },

    /// The held tile went back to the pool.
    Returned { tile: TileId },

    /// The held tile went back to where it was picked up from.
    Cancelled { tile: TileId },

    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl Interaction {
    /// Check if Pool or Slots changed (a pick-up counts: it moves a tile
    /// into the carry).
    #[must_use]
    pub fn moved_tile(&self) -> bool {
        matches!(
            self,
            Interaction::PickedUp { .. } | Interaction::Placed { .. } | Interaction::Returned { .. }
        )
    }
}

/// Why an interaction changed nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// The round is finished; only reset or reinitialization unlocks it.
    Finished,
    /// The active mode has no placement state (idiom browsing).
    NoPlacementState,
    /// Pick-up from a slot that holds nothing.
    EmptySlot,
    /// The tile is not in the pool.
    UnknownTile,
    /// The slot does not exist in this round.
    UnknownSlot,
    /// Return or cancel with nothing held.
    NothingHeld,
}
