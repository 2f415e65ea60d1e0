//! Throw definitions and per-phase throw selection

use serde::{Deserialize, Serialize};

use crate::game::{MatchError, TurnRecord};
use crate::random::SeededRng;
use crate::Outcome;

/// A throw in rock-paper-scissors
///
/// Wire names are lowercase to match the browser button ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Throw {
    Rock,
    Paper,
    Scissors,
}

impl Throw {
    /// Throw order used by the Cycle strategy and uniform picks
    pub const OPTIONS: [Throw; 3] = [Throw::Rock, Throw::Paper, Throw::Scissors];

    /// The throw this one defeats
    pub fn beats(self) -> Throw {
        match self {
            Throw::Rock => Throw::Scissors,
            Throw::Paper => Throw::Rock,
            Throw::Scissors => Throw::Paper,
        }
    }

    /// The throw that defeats this one
    pub fn beaten_by(self) -> Throw {
        match self {
            Throw::Rock => Throw::Paper,
            Throw::Paper => Throw::Scissors,
            Throw::Scissors => Throw::Rock,
        }
    }

    /// Lowercase label, identical to the wire name
    pub fn label(self) -> &'static str {
        match self {
            Throw::Rock => "rock",
            Throw::Paper => "paper",
            Throw::Scissors => "scissors",
        }
    }
}

impl core::fmt::Display for Throw {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl core::str::FromStr for Throw {
    type Err = ParseThrowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rock" => Ok(Throw::Rock),
            "paper" => Ok(Throw::Paper),
            "scissors" => Ok(Throw::Scissors),
            _ => Err(ParseThrowError {
                input: s.to_string(),
            }),
        }
    }
}

/// Error for an unrecognized throw id at the input boundary
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseThrowError {
    input: String,
}

impl core::fmt::Display for ParseThrowError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unknown throw id: {:?}", self.input)
    }
}

impl std::error::Error for ParseThrowError {}

/// Which fixed rule governs the computer's throws for one phase of the match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrategyPhase {
    /// Uniform random throw each turn.
    Random,
    /// If the player won the previous turn, beat their previous throw;
    /// otherwise repeat their previous throw.
    CounterPrevious,
    /// Walk rock, paper, scissors in order, indexed by turn count.
    Cycle,
    /// Sample one throw from the player's whole history and beat it.
    CounterFrequent,
}

impl StrategyPhase {
    /// Phase order over a full match
    pub const ALL: [StrategyPhase; 4] = [
        StrategyPhase::Random,
        StrategyPhase::CounterPrevious,
        StrategyPhase::Cycle,
        StrategyPhase::CounterFrequent,
    ];

    /// Phase in force for a given phase index (clamped to the last phase)
    pub fn from_index(index: u32) -> StrategyPhase {
        let i = (index as usize).min(Self::ALL.len() - 1);
        Self::ALL[i]
    }
}

/// Pick the computer's throw for one turn
///
/// Pure over its inputs; the RNG is the caller's injected seeded source.
/// `history` holds the turns completed so far and `turn_count` their number
/// (the turn being played is in neither yet).
///
/// # Errors
/// `MatchError::NoPriorTurn` if a history-dependent phase runs with an empty
/// history. Phase-boundary arithmetic keeps those phases unreachable before
/// turn 15, so the turn engine never hits this; the guard exists so the
/// invariant fails loudly instead of inventing a throw.
pub fn select_computer_throw(
    phase: StrategyPhase,
    history: &[TurnRecord],
    turn_count: u32,
    rng: &mut SeededRng,
) -> Result<Throw, MatchError> {
    match phase {
        StrategyPhase::Random => {
            let i = rng.next_range(Throw::OPTIONS.len() as u32);
            Ok(Throw::OPTIONS[i as usize])
        }
        StrategyPhase::CounterPrevious => {
            let last = history.last().ok_or(MatchError::NoPriorTurn)?;
            match last.outcome {
                Outcome::PlayerWin => Ok(last.player.beaten_by()),
                _ => Ok(last.player),
            }
        }
        StrategyPhase::Cycle => {
            let i = turn_count % Throw::OPTIONS.len() as u32;
            Ok(Throw::OPTIONS[i as usize])
        }
        StrategyPhase::CounterFrequent => {
            if history.is_empty() {
                return Err(MatchError::NoPriorTurn);
            }
            let i = rng.next_range(history.len() as u32) as usize;
            Ok(history[i].player.beaten_by())
        }
    }
}
