//! Feedback from an external text generator.
//!
//! The generator (a generative-language API in production) sits behind the
//! `TextGenerator` trait. Every public entry point here resolves to a
//! string: failures are logged and replaced by a localized fallback
//! sentence, never surfaced to the player.
//!
//! ## Submission Flow
//!
//! `PuzzleEngine::submit` grades the board and hands back a
//! `FeedbackRequest` ticket. The host runs the request whenever it likes
//! (possibly after the round was reset) and passes the text back to
//! `PuzzleEngine::apply_feedback`, which checks the ticket's generation.
//!
//! ```
//! use iching_puzzle::core::Locale;
//! use iching_puzzle::error::FeedbackError;
//! use iching_puzzle::feedback::request_feedback;
//!
//! let offline = |_: &str| -> Result<String, FeedbackError> { Err(FeedbackError::Unavailable) };
//! let text = request_feedback(&offline, 50, &[], Locale::En);
//! assert!(text.starts_with("The Heaven moves with vigor"));
//! ```

pub mod prompt;

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::Locale;
use crate::error::{FeedbackError, ParseIdError};

/// Boundary to the external text generator.
pub trait TextGenerator {
    /// Generate text for a prompt.
    fn generate(&self, prompt: &str) -> Result<String, FeedbackError>;
}

impl<F> TextGenerator for F
where
    F: Fn(&str) -> Result<String, FeedbackError>,
{
    fn generate(&self, prompt: &str) -> Result<String, FeedbackError> {
        self(prompt)
    }
}

/// Map a generator result to display text.
///
/// Blank text counts as an empty response.
fn settle(result: Result<String, FeedbackError>, empty: &'static str, failed: &'static str) -> String {
    match result {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) | Err(FeedbackError::EmptyResponse) => empty.to_string(),
        Err(err) => {
            warn!(target: "iching_puzzle::feedback", error = %err, "text generator failed, using fallback");
            failed.to_string()
        }
    }
}

/// Mentor feedback on a graded attempt. Never fails.
pub fn request_feedback(
    generator: &impl TextGenerator,
    score: u8,
    mismatches: &[String],
    locale: Locale,
) -> String {
    let result = generator.generate(&prompt::submission_prompt(score, mismatches, locale));
    settle(
        result,
        prompt::empty_response_fallback(locale),
        prompt::error_fallback(locale),
    )
}

/// Short explanation of a trigram, by its localized name. Never fails.
pub fn trigram_wisdom(generator: &impl TextGenerator, trigram_name: &str, locale: Locale) -> String {
    WisdomRequest::new(WisdomKind::Trigram, trigram_name, locale).run(generator)
}

/// Origin and lesson of an idiom. Never fails.
pub fn idiom_wisdom(generator: &impl TextGenerator, idiom: &str, locale: Locale) -> String {
    WisdomRequest::new(WisdomKind::Idiom, idiom, locale).run(generator)
}

/// What a wisdom request asks about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WisdomKind {
    Trigram,
    Idiom,
}

impl FromStr for WisdomKind {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trigram" => Ok(WisdomKind::Trigram),
            "idiom" => Ok(WisdomKind::Idiom),
            other => Err(ParseIdError::WisdomKind(other.to_string())),
        }
    }
}

/// Request for a short explanation of a trigram or an idiom.
///
/// Split into `prompt` and `resolve` like [`FeedbackRequest`], so an async
/// host can make the call itself. Empty answers and failures share one
/// fallback per kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WisdomRequest {
    pub kind: WisdomKind,
    /// Localized trigram name or idiom text.
    pub subject: String,
    pub locale: Locale,
}

impl WisdomRequest {
    #[must_use]
    pub fn new(kind: WisdomKind, subject: impl Into<String>, locale: Locale) -> Self {
        Self {
            kind,
            subject: subject.into(),
            locale,
        }
    }

    #[must_use]
    pub fn prompt(&self) -> String {
        match self.kind {
            WisdomKind::Trigram => prompt::trigram_prompt(&self.subject, self.locale),
            WisdomKind::Idiom => prompt::idiom_prompt(&self.subject, self.locale),
        }
    }

    #[must_use]
    pub fn fallback(&self) -> &'static str {
        match self.kind {
            WisdomKind::Trigram => prompt::trigram_fallback(self.locale),
            WisdomKind::Idiom => prompt::idiom_fallback(self.locale),
        }
    }

    /// Turn a generator result into display text.
    #[must_use]
    pub fn resolve(&self, result: Result<String, FeedbackError>) -> String {
        let fallback = self.fallback();
        settle(result, fallback, fallback)
    }

    pub fn run(&self, generator: &impl TextGenerator) -> String {
        self.resolve(generator.generate(&self.prompt()))
    }
}

/// Ticket for the feedback of one graded round.
///
/// Carries everything the generator needs plus the generation of the round
/// that produced it, so a late answer cannot land in a newer round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRequest {
    pub generation: u64,
    pub score: u8,
    pub mismatches: Vec<String>,
    pub locale: Locale,
    /// Localized mode label, recorded in history.
    pub mode_label: String,
}

impl FeedbackRequest {
    #[must_use]
    pub fn prompt(&self) -> String {
        prompt::submission_prompt(self.score, &self.mismatches, self.locale)
    }

    /// Turn a generator result into display text.
    #[must_use]
    pub fn resolve(&self, result: Result<String, FeedbackError>) -> String {
        settle(
            result,
            prompt::empty_response_fallback(self.locale),
            prompt::error_fallback(self.locale),
        )
    }

    /// Run the request against a generator.
    pub fn run(&self, generator: &impl TextGenerator) -> String {
        self.resolve(generator.generate(&self.prompt()))
    }
}
