//! Application state: who is signed in, which locale and mode are active,
//! the engine, and the cached history of the active scope.
//!
//! Everything that used to be ambient (current user, language, storage
//! access) is owned here and reached through `&mut AppState`. Storage is
//! injected, so tests run against `MemoryStorage`.
//!
//! ## Usage
//!
//! ```
//! use iching_puzzle::app::AppState;
//! use iching_puzzle::core::{AppConfig, HexSequence, PuzzleMode};
//! use iching_puzzle::error::FeedbackError;
//! use iching_puzzle::history::MemoryStorage;
//!
//! let mut app = AppState::new(AppConfig::default(), MemoryStorage::new());
//! app.set_mode(PuzzleMode::Hexagram);
//! app.set_sequence(HexSequence::Natural);
//! app.auto_complete();
//!
//! let pending = app.submit().unwrap();
//! assert_eq!(pending.request.score, 100);
//!
//! let text = app.complete_submission(pending, Err(FeedbackError::Unavailable));
//! assert_eq!(app.records().len(), 1);
//! assert_eq!(app.records()[0].feedback_text, text);
//! ```

use std::sync::Arc;

use chrono::Local;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{
    AppConfig, HeavenOrder, HexSequence, Interaction, Locale, PuzzleMode, RoundParams, Target,
};
use crate::data::{Dataset, HexagramInfo, IdiomInfo, TrigramInfo};
use crate::engine::PuzzleEngine;
use crate::error::FeedbackError;
use crate::feedback::{FeedbackRequest, TextGenerator, WisdomKind, WisdomRequest};
use crate::history::{self, GameRecord, HistoryExport, Storage};
use crate::profile::{self, UserProfile};

/// A graded round waiting for its feedback text.
///
/// Remembers the history scope active at submit time, so signing in or
/// out before the text arrives does not file the record under another
/// user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingSubmission {
    pub request: FeedbackRequest,
    pub history_key: String,
}

/// Explicit application-state container.
#[derive(Debug)]
pub struct AppState<S> {
    config: AppConfig,
    storage: S,
    engine: PuzzleEngine,
    profile: Option<UserProfile>,
    records: Vec<GameRecord>,
    /// Generations whose submission was already recorded.
    settled: FxHashSet<u64>,
}

impl<S: Storage> AppState<S> {
    /// Restore the signed-in user (if any) from storage and deal a trigram
    /// round in their preferred locale.
    pub fn new(config: AppConfig, storage: S) -> Self {
        Self::with_dataset(config, storage, Dataset::standard())
    }

    pub fn with_dataset(config: AppConfig, storage: S, data: Arc<Dataset>) -> Self {
        let profile = profile::load_or_none(&storage);
        let locale = profile
            .as_ref()
            .map_or(config.default_locale, |p| p.preferred_locale);
        let params = RoundParams::default().with_locale(locale);
        let engine = PuzzleEngine::new(data, &config, params);
        let records = history::load_or_empty(&storage, &history_key_of(profile.as_ref()));

        Self {
            config,
            storage,
            engine,
            profile,
            records,
            settled: FxHashSet::default(),
        }
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub fn engine(&self) -> &PuzzleEngine {
        &self.engine
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    #[must_use]
    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.engine.params().locale
    }

    #[must_use]
    pub fn params(&self) -> RoundParams {
        self.engine.params()
    }

    /// History of the active scope, newest first.
    #[must_use]
    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    /// Storage key of the active history scope.
    #[must_use]
    pub fn history_key(&self) -> String {
        history_key_of(self.profile.as_ref())
    }

    // === User and locale ===

    /// Make `profile` the active user: persist it, switch to their locale
    /// and load their history.
    pub fn sign_in(&mut self, user: UserProfile) {
        if let Err(err) = profile::save(&mut self.storage, &user) {
            warn!(target: "iching_puzzle::app", error = %err, "failed to persist profile");
        }
        let locale = user.preferred_locale;
        self.profile = Some(user);
        self.apply_params(self.params().with_locale(locale));
        self.reload_records();
    }

    /// Forget the active user and fall back to the guest scope and the
    /// default locale.
    pub fn sign_out(&mut self) {
        if let Err(err) = profile::clear(&mut self.storage) {
            warn!(target: "iching_puzzle::app", error = %err, "failed to clear profile");
        }
        self.profile = None;
        self.apply_params(self.params().with_locale(self.config.default_locale));
        self.reload_records();
    }

    /// Switch to the other locale. Deals a new round, since tile content is
    /// localized when dealt. The choice is remembered for signed-in users.
    pub fn toggle_locale(&mut self) -> Locale {
        let locale = self.locale().toggle();
        self.apply_params(self.params().with_locale(locale));

        if let Some(user) = self.profile.as_mut() {
            user.preferred_locale = locale;
            let saved = profile::save(&mut self.storage, user).and_then(|()| {
                profile::sync_directory_locale(&mut self.storage, &user.username, locale)
            });
            if let Err(err) = saved {
                warn!(target: "iching_puzzle::app", error = %err, "failed to persist locale preference");
            }
        }
        locale
    }

    // === Round selectors ===

    pub fn set_mode(&mut self, mode: PuzzleMode) {
        self.apply_params(self.params().with_mode(mode));
    }

    pub fn set_heaven_order(&mut self, heaven: HeavenOrder) {
        let params = RoundParams {
            heaven,
            ..self.params()
        };
        self.apply_params(params);
    }

    pub fn set_sequence(&mut self, sequence: HexSequence) {
        let params = RoundParams {
            sequence,
            ..self.params()
        };
        self.apply_params(params);
    }

    /// Reinitialize the round only when a selector actually changed.
    fn apply_params(&mut self, params: RoundParams) {
        if params != self.engine.params() {
            self.engine.initialize(params);
        }
    }

    // === Round actions ===

    pub fn reset_round(&mut self) {
        self.engine.reset();
    }

    pub fn interact(&mut self, target: Target) -> Interaction {
        self.engine.interact(target)
    }

    pub fn return_to_pool(&mut self) -> Interaction {
        self.engine.return_to_pool()
    }

    pub fn cancel(&mut self) -> Interaction {
        self.engine.cancel()
    }

    pub fn auto_complete(&mut self) -> bool {
        self.engine.auto_complete()
    }

    /// Grade the round. The caller runs `pending.request` against the text
    /// generator and hands the result to `complete_submission`.
    pub fn submit(&mut self) -> Option<PendingSubmission> {
        let request = self.engine.submit()?;
        Some(PendingSubmission {
            request,
            history_key: self.history_key(),
        })
    }

    /// Settle a submission: pick the display text (generator output or
    /// fallback), record it in history, and merge it into the round if the
    /// round is still the one that was graded.
    ///
    /// Each graded round is recorded once. Settling the same submission
    /// again only resolves the text; history and round are left alone.
    pub fn complete_submission(
        &mut self,
        pending: PendingSubmission,
        result: Result<String, FeedbackError>,
    ) -> String {
        let PendingSubmission {
            request,
            history_key,
        } = pending;
        let text = request.resolve(result);
        if !self.settled.insert(request.generation) {
            debug!(target: "iching_puzzle::app", generation = request.generation, "submission already settled");
            return text;
        }

        let record = GameRecord::stamped(
            &Local::now(),
            request.generation,
            request.mode_label.clone(),
            request.score,
            text.clone(),
        );
        let active = history_key == self.history_key();
        match history::append(&mut self.storage, &history_key, record.clone(), self.config.history_cap) {
            Ok(records) if active => self.records = records,
            Ok(_) => {}
            Err(err) => {
                warn!(target: "iching_puzzle::app", key = history_key.as_str(), error = %err, "failed to persist record");
                if active {
                    self.records.insert(0, record);
                    self.records.truncate(self.config.history_cap);
                }
            }
        }

        if !self.engine.apply_feedback(&request, text.clone()) {
            debug!(target: "iching_puzzle::app", generation = request.generation, "feedback arrived after the round was replaced");
        }
        text
    }

    /// Submit and run the generator in one step.
    pub fn submit_with(&mut self, generator: &impl TextGenerator) -> Option<String> {
        let pending = self.submit()?;
        let result = generator.generate(&pending.request.prompt());
        Some(self.complete_submission(pending, result))
    }

    // === Reference and wisdom ===

    /// Trigrams under the active arrangement, in the active locale.
    #[must_use]
    pub fn trigram_details(&self) -> Vec<TrigramInfo> {
        let params = self.params();
        self.engine.data().trigram_infos(params.heaven, params.locale)
    }

    /// Hexagrams of the active sequence, in the active locale.
    #[must_use]
    pub fn hexagram_details(&self) -> Vec<HexagramInfo> {
        let params = self.params();
        self.engine.data().hexagram_infos(params.sequence, params.locale)
    }

    /// Idioms for the browsing mode, in the active locale.
    #[must_use]
    pub fn idiom_details(&self) -> Vec<IdiomInfo> {
        self.engine.data().idiom_infos(self.locale())
    }

    /// Wisdom request about `subject` in the active locale.
    #[must_use]
    pub fn wisdom_request(&self, kind: WisdomKind, subject: &str) -> WisdomRequest {
        WisdomRequest::new(kind, subject, self.locale())
    }

    // === History ===

    /// Delete the active scope's history.
    pub fn clear_history(&mut self) {
        let key = self.history_key();
        if let Err(err) = history::clear(&mut self.storage, &key) {
            warn!(target: "iching_puzzle::app", error = %err, "failed to clear history");
        }
        self.records.clear();
    }

    /// Plain-text report of the active scope's history, in the active
    /// locale. `None` when there is nothing to export.
    #[must_use]
    pub fn export_history(&self) -> Option<HistoryExport> {
        history::export_report(
            &self.records,
            self.profile.as_ref().map(|p| p.username.as_str()),
            self.locale(),
            &Local::now(),
        )
    }

    fn reload_records(&mut self) {
        let key = self.history_key();
        self.records = history::load_or_empty(&self.storage, &key);
    }
}

fn history_key_of(profile: Option<&UserProfile>) -> String {
    history::history_key(profile.map(|p| p.username.as_str()))
}
