//! Persisted record of one graded round.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// Display format of record timestamps and report generation times.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One entry of a player's history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: String,
    pub timestamp: String,
    #[serde(rename = "mode")]
    pub mode_label: String,
    pub score: u8,
    #[serde(rename = "feedback")]
    pub feedback_text: String,
}

impl GameRecord {
    /// Build a record stamped with `now`.
    ///
    /// The id combines the wall-clock milliseconds with the round
    /// generation, so two rounds graded in the same millisecond still get
    /// distinct ids.
    #[must_use]
    pub fn stamped<Tz>(
        now: &DateTime<Tz>,
        generation: u64,
        mode_label: impl Into<String>,
        score: u8,
        feedback_text: impl Into<String>,
    ) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self {
            id: format!("{}-{generation}", now.timestamp_millis()),
            timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
            mode_label: mode_label.into(),
            score,
            feedback_text: feedback_text.into(),
        }
    }
}
