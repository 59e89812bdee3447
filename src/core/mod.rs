//! Core types: ids, selectors, configuration, interactions, RNG, labels.
//!
//! This module holds the vocabulary shared by every other module. It knows
//! nothing about the dataset or the board layout.

pub mod action;
pub mod config;
pub mod i18n;
pub mod ids;
pub mod rng;

pub use action::{CarryOrigin, IgnoreReason, Interaction, Target};
pub use config::{AppConfig, HeavenOrder, HexSequence, Locale, PuzzleMode, RoundParams};
pub use ids::{ContainerId, HexagramId, TileId, TrigramId};
pub use rng::{GameRng, GameRngState};
