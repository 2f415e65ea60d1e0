//! WASM bindings for the browser UI
//!
//! The thin adapter between button presses and the turn engine: one `play`
//! call per click, plus accessors for the texts the page renders. All game
//! decisions stay in the core crate.

#![cfg(feature = "wasm")]

use std::str::FromStr;
use wasm_bindgen::prelude::*;

use crate::{MatchState, Throw};

/// One interactive match session, driven one button press at a time
#[wasm_bindgen]
pub struct Session {
    state: MatchState,
}

#[wasm_bindgen]
impl Session {
    /// Start a standard 60-turn match
    ///
    /// Without an explicit seed the clock seeds the RNG; pass a seed to
    /// replay a match deterministically.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<u64>) -> Session {
        let seed = seed.unwrap_or_else(|| js_sys::Date::now().to_bits());
        Session {
            state: MatchState::new(seed),
        }
    }

    /// Play one turn from a button id ("rock", "paper", "scissors")
    ///
    /// # Returns
    /// Serialized TurnResult
    pub fn play(&mut self, throw_id: &str) -> Result<JsValue, JsError> {
        let player = Throw::from_str(throw_id).map_err(|e| JsError::new(&e.to_string()))?;
        let result = self
            .state
            .play_turn(player)
            .map_err(|e| JsError::new(&e.to_string()))?;

        serde_wasm_bindgen::to_value(&result)
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    /// Text for the most recent turn, e.g. "Computer threw paper. You WIN"
    pub fn last_outcome_text(&self) -> Option<String> {
        self.state.history().last().map(|r| r.describe())
    }

    /// Turn counter text, e.g. "17 out of 60"
    pub fn turn_counter_text(&self) -> String {
        self.state.counter_text()
    }

    /// Whether the match has reached its final turn
    pub fn is_over(&self) -> bool {
        self.state.ended()
    }

    /// Plain-text results for the participant to copy out of the page
    pub fn results_text(&self) -> String {
        self.state.report()
    }

    /// Structured results as a JSON string
    pub fn results_json(&self) -> Result<String, JsError> {
        self.state
            .match_report()
            .to_json()
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }
}

/// Button ids the UI should offer, in display order
#[wasm_bindgen]
pub fn throw_ids() -> Vec<String> {
    Throw::OPTIONS.iter().map(|t| t.label().to_string()).collect()
}
