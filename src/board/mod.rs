//! Board system: tiles, slots and the pool.
//!
//! ## Key Types
//!
//! - `TileKind` / `SlotKind`: closed tag sets with an explicit compatibility
//!   table (`SlotKind::accepts`)
//! - `Tile`: immutable fact to be placed
//! - `SlotKey`: `(container, kind)` address of a slot
//! - `Board`: pool + slots, the only place tiles live between moves

pub mod manager;
pub mod tile;

pub use manager::{Board, Slot};
pub use tile::{SlotKey, SlotKind, Tile, TileFace, TileKind};
