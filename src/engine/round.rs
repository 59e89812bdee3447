//! Round state: the board plus the finished flag, score and feedback.

use serde::Serialize;

use crate::board::{Board, Tile};
use crate::core::CarryOrigin;
use crate::rules::Score;

/// One round of one mode.
///
/// Replaced wholesale on every (re)initialization. Cloning is cheap since
/// the board is backed by persistent vectors.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Round {
    pub(crate) board: Board,
    pub(crate) finished: bool,
    pub(crate) score: Option<Score>,
    pub(crate) feedback: Option<String>,
}

impl Round {
    pub(crate) fn new(board: Board) -> Self {
        Self {
            board,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Check if the round is locked after submission.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Score of the submission. `None` until finished.
    #[must_use]
    pub fn score(&self) -> Option<&Score> {
        self.score.as_ref()
    }

    /// Feedback text, once it arrived.
    #[must_use]
    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }
}

/// The tile currently held by the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Carry {
    pub tile: Tile,
    pub origin: CarryOrigin,
}
