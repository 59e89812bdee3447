//! Browser bindings.
//!
//! Exposes the application state to JavaScript with localStorage as the
//! backing store. Structured values cross the boundary as JSON strings; the
//! host owns rendering and the HTTP call to the text generator.
//!
//! ```javascript
//! import init, { WebPuzzle } from "./iching_puzzle.js";
//!
//! await init();
//! const puzzle = new WebPuzzle(42n);
//! puzzle.interactPool(3);
//! const pending = puzzle.submit();
//! const text = await callGenerator(puzzle.prompt(pending));
//! puzzle.completeSubmission(pending, text);
//!
//! const ask = puzzle.wisdomPrompt("idiom", "否极泰来");
//! const wisdom = puzzle.resolveWisdom("idiom", "否极泰来", await callGenerator(ask));
//! ```

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::app::{AppState, PendingSubmission};
use crate::board::SlotKey;
use crate::core::{AppConfig, HeavenOrder, HexSequence, PuzzleMode, RoundParams, Target, TileId};
use crate::engine::{Carry, Round};
use crate::error::FeedbackError;
use crate::feedback::{WisdomKind, WisdomRequest};
use crate::history::{GameRecord, WebStorage};
use crate::profile::UserProfile;

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Everything the UI draws, in one JSON document.
#[derive(Serialize)]
struct Snapshot<'a> {
    params: RoundParams,
    generation: u64,
    round: &'a Round,
    carry: Option<&'a Carry>,
    username: Option<&'a str>,
    records: &'a [GameRecord],
}

#[wasm_bindgen]
pub struct WebPuzzle {
    app: AppState<WebStorage>,
}

#[wasm_bindgen]
impl WebPuzzle {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> Result<WebPuzzle, JsValue> {
        let storage = WebStorage::local().map_err(js_error)?;
        let config = AppConfig::default().with_seed(seed);
        Ok(Self {
            app: AppState::new(config, storage),
        })
    }

    /// Current state as JSON.
    pub fn snapshot(&self) -> Result<String, JsValue> {
        let engine = self.app.engine();
        let snapshot = Snapshot {
            params: engine.params(),
            generation: engine.generation(),
            round: engine.round(),
            carry: engine.carry(),
            username: self.app.profile().map(|p| p.username.as_str()),
            records: self.app.records(),
        };
        serde_json::to_string(&snapshot).map_err(js_error)
    }

    #[wasm_bindgen(js_name = interactPool)]
    pub fn interact_pool(&mut self, tile: u32) -> bool {
        self.app.interact(Target::Pool(TileId(tile))).moved_tile()
    }

    /// `slot` is a JSON `SlotKey`, as found in the snapshot.
    #[wasm_bindgen(js_name = interactSlot)]
    pub fn interact_slot(&mut self, slot: &str) -> Result<bool, JsValue> {
        let key: SlotKey = serde_json::from_str(slot).map_err(js_error)?;
        Ok(self.app.interact(Target::Slot(key)).moved_tile())
    }

    #[wasm_bindgen(js_name = returnToPool)]
    pub fn return_to_pool(&mut self) -> bool {
        self.app.return_to_pool().moved_tile()
    }

    pub fn cancel(&mut self) {
        self.app.cancel();
    }

    #[wasm_bindgen(js_name = autoComplete)]
    pub fn auto_complete(&mut self) -> bool {
        self.app.auto_complete()
    }

    #[wasm_bindgen(js_name = resetRound)]
    pub fn reset_round(&mut self) {
        self.app.reset_round();
    }

    /// `"trigram"`, `"hexagram"` or `"idiom"`.
    #[wasm_bindgen(js_name = setMode)]
    pub fn set_mode(&mut self, mode: &str) -> Result<(), JsValue> {
        let mode = match mode {
            "trigram" => PuzzleMode::Trigram,
            "hexagram" => PuzzleMode::Hexagram,
            "idiom" => PuzzleMode::Idiom,
            other => return Err(JsValue::from_str(&format!("unknown mode: {other}"))),
        };
        self.app.set_mode(mode);
        Ok(())
    }

    #[wasm_bindgen(js_name = setLaterHeaven)]
    pub fn set_later_heaven(&mut self, later: bool) {
        let order = if later {
            HeavenOrder::Later
        } else {
            HeavenOrder::Early
        };
        self.app.set_heaven_order(order);
    }

    #[wasm_bindgen(js_name = setKingWen)]
    pub fn set_king_wen(&mut self, king_wen: bool) {
        let sequence = if king_wen {
            HexSequence::KingWen
        } else {
            HexSequence::Natural
        };
        self.app.set_sequence(sequence);
    }

    /// Returns the new locale code.
    #[wasm_bindgen(js_name = toggleLocale)]
    pub fn toggle_locale(&mut self) -> String {
        self.app.toggle_locale().code().to_string()
    }

    #[wasm_bindgen(js_name = signIn)]
    pub fn sign_in(&mut self, username: &str, locale: &str) -> Result<(), JsValue> {
        let locale = locale.parse().map_err(js_error)?;
        self.app.sign_in(UserProfile::new(username, locale));
        Ok(())
    }

    #[wasm_bindgen(js_name = signOut)]
    pub fn sign_out(&mut self) {
        self.app.sign_out();
    }

    /// Grade the round. Returns the pending submission as JSON, or
    /// `undefined` when there is nothing to grade.
    pub fn submit(&mut self) -> Result<Option<String>, JsValue> {
        self.app
            .submit()
            .map(|pending| serde_json::to_string(&pending).map_err(js_error))
            .transpose()
    }

    /// Prompt to send to the text generator for a pending submission.
    pub fn prompt(&self, pending: &str) -> Result<String, JsValue> {
        let pending: PendingSubmission = serde_json::from_str(pending).map_err(js_error)?;
        Ok(pending.request.prompt())
    }

    /// Settle a pending submission. Pass `undefined` as `text` when the
    /// generator call failed. Returns the text to display.
    #[wasm_bindgen(js_name = completeSubmission)]
    pub fn complete_submission(&mut self, pending: &str, text: Option<String>) -> Result<String, JsValue> {
        let pending: PendingSubmission = serde_json::from_str(pending).map_err(js_error)?;
        let result = text.ok_or(FeedbackError::Unavailable);
        Ok(self.app.complete_submission(pending, result))
    }

    /// Trigram reference table as JSON, for the active arrangement.
    pub fn trigrams(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.app.trigram_details()).map_err(js_error)
    }

    /// Hexagram reference table as JSON, for the active sequence.
    pub fn hexagrams(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.app.hexagram_details()).map_err(js_error)
    }

    /// Idiom list as JSON.
    pub fn idioms(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.app.idiom_details()).map_err(js_error)
    }

    /// Prompt asking about a trigram or an idiom. `kind` is `"trigram"` or
    /// `"idiom"`.
    #[wasm_bindgen(js_name = wisdomPrompt)]
    pub fn wisdom_prompt(&self, kind: &str, subject: &str) -> Result<String, JsValue> {
        Ok(self.wisdom(kind, subject)?.prompt())
    }

    /// Text to display for a wisdom answer. Pass `undefined` as `text` when
    /// the generator call failed.
    #[wasm_bindgen(js_name = resolveWisdom)]
    pub fn resolve_wisdom(&self, kind: &str, subject: &str, text: Option<String>) -> Result<String, JsValue> {
        let request = self.wisdom(kind, subject)?;
        Ok(request.resolve(text.ok_or(FeedbackError::Unavailable)))
    }

    #[wasm_bindgen(js_name = clearHistory)]
    pub fn clear_history(&mut self) {
        self.app.clear_history();
    }

    /// `{"fileName", "content"}` as JSON, or `undefined` for an empty
    /// history.
    #[wasm_bindgen(js_name = exportHistory)]
    pub fn export_history(&self) -> Option<String> {
        self.app.export_history().map(|export| {
            serde_json::json!({ "fileName": export.file_name, "content": export.content }).to_string()
        })
    }
}

impl WebPuzzle {
    fn wisdom(&self, kind: &str, subject: &str) -> Result<WisdomRequest, JsValue> {
        let kind: WisdomKind = kind.parse().map_err(js_error)?;
        Ok(self.app.wisdom_request(kind, subject))
    }
}
