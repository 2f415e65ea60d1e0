//! Game logic for the rock-paper-scissors strategy study
//!
//! One human player plays a 60-turn match against an automated opponent
//! that rotates through four fixed throw-selection strategies, one per
//! 15-turn phase. This crate is compiled to:
//! - Native (for tests and host embedding)
//! - WASM (for the browser UI)

mod random;
mod strategy;
mod game;

#[cfg(feature = "wasm")]
mod wasm;

pub use random::SeededRng;
pub use strategy::{select_computer_throw, ParseThrowError, StrategyPhase, Throw};
pub use game::{
    MatchConfig, MatchError, MatchReport, MatchState, PhaseSummary, TurnRecord, TurnResult,
    PHASE_COUNT,
};

use serde::{Deserialize, Serialize};

/// Result of one turn, seen from the player's side
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    PlayerWin,
    Tie,
    PlayerLose,
}

impl core::fmt::Display for Outcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Outcome::PlayerWin => write!(f, "WIN"),
            Outcome::Tie => write!(f, "TIE"),
            Outcome::PlayerLose => write!(f, "LOSE"),
        }
    }
}

/// Standard rock-paper-scissors precedence, from the player's perspective
pub fn evaluate(player: Throw, computer: Throw) -> Outcome {
    if player == computer {
        Outcome::Tie
    } else if player.beats() == computer {
        Outcome::PlayerWin
    } else {
        Outcome::PlayerLose
    }
}
