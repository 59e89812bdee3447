//! Play history: per-user record lists in key-value storage, and the
//! plain-text report export.
//!
//! ## Storage Layout
//!
//! - key `iching_records_<username>` (or `iching_records_guest`)
//! - value: JSON array of `GameRecord`, newest first, capped
//!
//! Corrupt values are logged and read as an empty history; the next write
//! replaces them.
//!
//! ```
//! use iching_puzzle::history::{self, GameRecord, MemoryStorage};
//!
//! let mut store = MemoryStorage::new();
//! let key = history::history_key(None);
//! assert_eq!(key, "iching_records_guest");
//!
//! let record = GameRecord {
//!     id: "1".into(),
//!     timestamp: "2026-01-01 10:00:00".into(),
//!     mode_label: "Bagua".into(),
//!     score: 100,
//!     feedback_text: "Well done.".into(),
//! };
//! let records = history::append(&mut store, &key, record, 30).unwrap();
//! assert_eq!(records.len(), 1);
//! assert_eq!(history::load_or_empty(&store, &key), records);
//! ```

pub mod record;
pub mod storage;

pub use record::{GameRecord, TIMESTAMP_FORMAT};
#[cfg(feature = "web")]
pub use storage::WebStorage;
pub use storage::{MemoryStorage, Storage};

use chrono::{DateTime, TimeZone};
use tracing::warn;

use crate::core::{i18n, Locale};
use crate::error::HistoryError;

const KEY_PREFIX: &str = "iching_records_";
const GUEST_SCOPE: &str = "guest";
const SEPARATOR: &str = "--------------------------------------------------";

/// Storage key of a user's history. No user (or an empty name) means guest.
#[must_use]
pub fn history_key(username: Option<&str>) -> String {
    let scope = username.filter(|name| !name.is_empty()).unwrap_or(GUEST_SCOPE);
    format!("{KEY_PREFIX}{scope}")
}

/// Read a history list.
pub fn load(storage: &impl Storage, key: &str) -> Result<Vec<GameRecord>, HistoryError> {
    match storage.get(key)? {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(Vec::new()),
    }
}

/// Read a history list, treating any failure as an empty history.
pub fn load_or_empty(storage: &impl Storage, key: &str) -> Vec<GameRecord> {
    load(storage, key).unwrap_or_else(|err| {
        warn!(target: "iching_puzzle::history", key, error = %err, "discarding unreadable history");
        Vec::new()
    })
}

/// Prepend a record, keep the newest `cap`, and write the list back.
///
/// A corrupt list is replaced. A failed read is returned as an error and
/// nothing is written, so an unreachable list is never overwritten.
///
/// Returns the list as stored.
pub fn append(
    storage: &mut impl Storage,
    key: &str,
    record: GameRecord,
    cap: usize,
) -> Result<Vec<GameRecord>, HistoryError> {
    let mut records = match load(storage, key) {
        Ok(records) => records,
        Err(HistoryError::Corrupt(err)) => {
            warn!(target: "iching_puzzle::history", key, error = %err, "replacing corrupt history");
            Vec::new()
        }
        Err(err) => return Err(err),
    };
    records.insert(0, record);
    records.truncate(cap);
    storage.set(key, &serde_json::to_string(&records)?)?;
    Ok(records)
}

/// Remove a history list entirely.
pub fn clear(storage: &mut impl Storage, key: &str) -> Result<(), HistoryError> {
    storage.remove(key)?;
    Ok(())
}

// === Export ===

/// A rendered report and the file name to save it under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryExport {
    pub file_name: String,
    pub content: String,
}

/// Render the plain-text report of `records`.
///
/// Returns `None` for an empty history: there is nothing to export.
#[must_use]
pub fn export_report<Tz>(
    records: &[GameRecord],
    username: Option<&str>,
    locale: Locale,
    now: &DateTime<Tz>,
) -> Option<HistoryExport>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if records.is_empty() {
        return None;
    }
    let labels = i18n::report_labels(locale);
    let user = username.filter(|name| !name.is_empty()).unwrap_or(labels.guest);

    let mut content = format!(
        "{}\n{}: {}\n{}: {}\n\n",
        labels.title,
        labels.generated_at,
        now.format(TIMESTAMP_FORMAT),
        labels.user,
        user
    );
    for (n, record) in records.iter().enumerate() {
        content.push_str(&format!(
            "{SEPARATOR}\n{} #{}\n{}: {}\n{}: {}\n{}: {}\n{}:\n{}\n\n",
            labels.record,
            n + 1,
            labels.mode,
            record.mode_label,
            labels.timestamp,
            record.timestamp,
            labels.score,
            record.score,
            labels.feedback,
            record.feedback_text,
        ));
    }

    Some(HistoryExport {
        file_name: format!("{}_{}.txt", labels.file_stem, now.format("%Y-%m-%d")),
        content,
    })
}
