//! # iching-puzzle
//!
//! Puzzle engine for an I Ching learning game: place trigram and hexagram
//! facts into their slots, get graded, receive mentor feedback, keep a
//! history.
//!
//! ## Design Principles
//!
//! 1. **Conservation**: every dealt tile is in the pool, in one slot, or
//!    held. No operation duplicates or loses a tile.
//!
//! 2. **Closed kinds**: tile and slot kinds are enums with an explicit
//!    compatibility table, so adding a kind is a compile error until every
//!    match handles it.
//!
//! 3. **Injected collaborators**: the text generator and the key-value store
//!    are traits. Nothing in the engine touches a network or a browser.
//!
//! ## Architecture
//!
//! - **Rules as data**: modes implement `RulesEngine` (slots + answer key);
//!   dealing, grading and auto-complete are built on the answer key.
//!
//! - **Persistent board**: the pool is an `im::Vector`, so round snapshots
//!   for the UI clone in O(1).
//!
//! - **Generation-stamped feedback**: `submit` returns a ticket; text that
//!   arrives after a reset is recorded in history but never merged into the
//!   new round.
//!
//! ## Modules
//!
//! - `core`: ids, selectors, configuration, interactions, RNG, labels
//! - `data`: trigram, hexagram, solar term and idiom tables
//! - `board`: tiles, slots, pool
//! - `rules`: `RulesEngine` and the trigram / hexagram implementations
//! - `engine`: `PuzzleEngine`, the round state machine
//! - `feedback`: text generator boundary, prompts and fallbacks
//! - `history`: storage adapter, records, report export
//! - `profile`: signed-in user and locale preference
//! - `app`: application-state container tying it together

pub mod app;
pub mod board;
pub mod core;
pub mod data;
pub mod engine;
pub mod error;
pub mod feedback;
pub mod history;
pub mod profile;
pub mod rules;

#[cfg(feature = "web")]
pub mod web;

// Re-export commonly used types
pub use crate::core::{
    AppConfig, CarryOrigin, ContainerId, GameRng, GameRngState, HeavenOrder, HexSequence,
    HexagramId, IgnoreReason, Interaction, Locale, PuzzleMode, RoundParams, Target, TileId,
    TrigramId,
};

pub use crate::board::{Board, Slot, SlotKey, SlotKind, Tile, TileFace, TileKind};

pub use crate::data::{Dataset, Hexagram, HexagramInfo, Idiom, IdiomInfo, Trigram, TrigramInfo};

pub use crate::rules::{HexagramRules, RulesEngine, Score, TrigramRules};

pub use crate::engine::{Carry, PuzzleEngine, Round};

pub use crate::feedback::{FeedbackRequest, TextGenerator, WisdomKind, WisdomRequest};

pub use crate::history::{GameRecord, HistoryExport, MemoryStorage, Storage};

pub use crate::profile::UserProfile;

pub use crate::app::{AppState, PendingSubmission};

pub use crate::error::{
    ConfigError, FeedbackError, HistoryError, ParseIdError, ProfileError, StorageError,
};
