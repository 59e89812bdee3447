//! Configuration types.
//!
//! - `Locale`, `PuzzleMode`, `HeavenOrder`, `HexSequence`: the selectors a
//!   round is built from.
//! - `RoundParams`: one value of every selector; changing any of them
//!   replaces the active round.
//! - `AppConfig`: application-wide settings (seed, history cap, mismatch
//!   limit, default locale).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ParseIdError};

/// Display language. `Zh` is the primary locale, `En` the secondary one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Zh,
    En,
}

impl Locale {
    /// The other locale.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Locale::Zh => Locale::En,
            Locale::En => Locale::Zh,
        }
    }

    /// Pick the string for this locale from a `(zh, en)` pair.
    #[must_use]
    pub const fn pick(self, zh: &'static str, en: &'static str) -> &'static str {
        match self {
            Locale::Zh => zh,
            Locale::En => en,
        }
    }

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Locale::Zh => "zh",
            Locale::En => "en",
        }
    }
}

impl FromStr for Locale {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zh" => Ok(Locale::Zh),
            "en" => Ok(Locale::En),
            other => Err(ParseIdError::Locale(other.to_string())),
        }
    }
}

/// Which puzzle is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PuzzleMode {
    /// Eight trigrams, four slots each (symbol, name, nature, solar term).
    #[default]
    Trigram,
    /// 64 hexagrams, one name slot each.
    Hexagram,
    /// Read-only idiom browsing. No placement state.
    Idiom,
}

/// Arrangement of the trigrams around the compass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeavenOrder {
    /// Early Heaven (Fu Xi) arrangement.
    #[default]
    Early,
    /// Later Heaven (King Wen) arrangement.
    Later,
}

/// Which view of the 64 hexagrams is used.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HexSequence {
    /// Binary / Shao Yong square order.
    #[default]
    Natural,
    /// Traditional King-Wen numbering.
    KingWen,
}

/// Selectors a round is built from.
///
/// `heaven` only matters in trigram mode and `sequence` only in hexagram
/// mode, but both are kept so switching modes back and forth preserves them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundParams {
    pub mode: PuzzleMode,
    pub heaven: HeavenOrder,
    pub sequence: HexSequence,
    pub locale: Locale,
}

impl RoundParams {
    /// Trigram mode with the given arrangement.
    #[must_use]
    pub fn trigram(heaven: HeavenOrder, locale: Locale) -> Self {
        Self {
            mode: PuzzleMode::Trigram,
            heaven,
            locale,
            ..Self::default()
        }
    }

    /// Hexagram mode with the given sequence.
    #[must_use]
    pub fn hexagram(sequence: HexSequence, locale: Locale) -> Self {
        Self {
            mode: PuzzleMode::Hexagram,
            sequence,
            locale,
            ..Self::default()
        }
    }

    /// Idiom browsing mode.
    #[must_use]
    pub fn idiom(locale: Locale) -> Self {
        Self {
            mode: PuzzleMode::Idiom,
            locale,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: PuzzleMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

/// Application-wide settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Seed for pool shuffles. Same seed produces identical rounds.
    pub seed: u64,

    /// Maximum number of history records kept per user (newest first).
    pub history_cap: usize,

    /// Maximum number of mismatch labels handed to the feedback generator.
    pub mismatch_limit: usize,

    /// Locale used when nobody is signed in.
    pub default_locale: Locale,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            history_cap: 30,
            mismatch_limit: 10,
            default_locale: Locale::Zh,
        }
    }
}

impl AppConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make history or feedback useless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_cap == 0 {
            return Err(ConfigError::Invalid {
                message: "history_cap must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_history_cap(mut self, cap: usize) -> Self {
        self.history_cap = cap;
        self
    }

    #[must_use]
    pub fn with_mismatch_limit(mut self, limit: usize) -> Self {
        self.mismatch_limit = limit;
        self
    }

    #[must_use]
    pub fn with_default_locale(mut self, locale: Locale) -> Self {
        self.default_locale = locale;
        self
    }
}
