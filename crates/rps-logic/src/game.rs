//! Turn engine: match state, outcome bookkeeping, and the results report

use serde::{Deserialize, Serialize};

use crate::random::SeededRng;
use crate::strategy::{select_computer_throw, StrategyPhase, Throw};
use crate::{evaluate, Outcome};

/// Number of strategy phases in a match
pub const PHASE_COUNT: u32 = 4;

/// Errors from the turn engine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchError {
    /// A turn was attempted after the final turn was played.
    AlreadyEnded,
    /// A history-dependent strategy ran with no prior turn recorded.
    NoPriorTurn,
}

impl core::fmt::Display for MatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatchError::AlreadyEnded => write!(f, "match is already over"),
            MatchError::NoPriorTurn => {
                write!(f, "history-dependent strategy invoked with no prior turn")
            }
        }
    }
}

impl std::error::Error for MatchError {}

/// Result of a single turn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub player: Throw,
    pub computer: Throw,
    pub outcome: Outcome,
}

impl TurnRecord {
    /// Player-facing line for the turn, e.g. "Computer threw paper. You WIN"
    pub fn describe(&self) -> String {
        format!("Computer threw {}. You {}", self.computer, self.outcome)
    }
}

/// Win/tie/loss rates over one completed phase
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseSummary {
    pub player_win_rate: f64,
    pub computer_win_rate: f64,
    pub tie_rate: f64,
}

/// Match length configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchConfig {
    pub turns_per_phase: u32,
    pub max_turns: u32,
}

impl MatchConfig {
    /// Standard study configuration: four 15-turn phases, 60 turns total
    pub fn standard() -> Self {
        Self::with_phase_length(15)
    }

    /// Shortened matches keep the four-phase structure (used by tests)
    ///
    /// Phase length is clamped to at least one turn.
    pub fn with_phase_length(turns_per_phase: u32) -> Self {
        let turns_per_phase = turns_per_phase.max(1);
        Self {
            turns_per_phase,
            max_turns: turns_per_phase * PHASE_COUNT,
        }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Output of one `play_turn` call
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnResult {
    pub record: TurnRecord,
    pub turn_count: u32,
    pub ended: bool,
}

/// Serializable end-of-match aggregate for structured export
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub phase_summaries: Vec<PhaseSummary>,
    pub history: Vec<TurnRecord>,
}

impl MatchReport {
    /// JSON form of the report, for frontend tooling
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Full state of one match
///
/// Owned by a single caller and mutated only through `play_turn`; once the
/// match ends every further `play_turn` is rejected without touching state.
#[derive(Clone, Debug)]
pub struct MatchState {
    config: MatchConfig,
    rng: SeededRng,
    turn_count: u32,
    phase: StrategyPhase,
    player_wins: u32,
    computer_wins: u32,
    history: Vec<TurnRecord>,
    phase_summaries: Vec<PhaseSummary>,
    ended: bool,
}

impl MatchState {
    /// Start a standard 60-turn match
    pub fn new(seed: u64) -> Self {
        Self::with_config(MatchConfig::standard(), seed)
    }

    /// Start a match with a custom length configuration
    pub fn with_config(config: MatchConfig, seed: u64) -> Self {
        Self {
            config,
            rng: SeededRng::new(seed),
            turn_count: 0,
            phase: StrategyPhase::Random,
            player_wins: 0,
            computer_wins: 0,
            history: Vec::with_capacity(config.max_turns as usize),
            phase_summaries: Vec::with_capacity(PHASE_COUNT as usize),
            ended: false,
        }
    }

    pub fn config(&self) -> MatchConfig {
        self.config
    }

    /// Turns completed so far
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// Strategy phase in force for the next turn
    pub fn phase(&self) -> StrategyPhase {
        self.phase
    }

    pub fn ended(&self) -> bool {
        self.ended
    }

    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    pub fn phase_summaries(&self) -> &[PhaseSummary] {
        &self.phase_summaries
    }

    /// Turn counter text for display, e.g. "17 out of 60"
    pub fn counter_text(&self) -> String {
        format!("{} out of {}", self.turn_count, self.config.max_turns)
    }

    /// Play one full turn against the current-phase strategy
    ///
    /// # Errors
    /// `MatchError::AlreadyEnded` once the match is over; the call leaves
    /// state untouched so the caller can keep ignoring late button presses.
    pub fn play_turn(&mut self, player: Throw) -> Result<TurnResult, MatchError> {
        if self.ended {
            return Err(MatchError::AlreadyEnded);
        }

        let computer =
            select_computer_throw(self.phase, &self.history, self.turn_count, &mut self.rng)?;
        let outcome = evaluate(player, computer);
        match outcome {
            Outcome::PlayerWin => self.player_wins += 1,
            Outcome::PlayerLose => self.computer_wins += 1,
            Outcome::Tie => {}
        }

        let record = TurnRecord {
            player,
            computer,
            outcome,
        };
        self.history.push(record);
        self.turn_count += 1;

        // A multiple of turns_per_phase closes out a phase: summarize it,
        // then either advance the strategy or end the match.
        if self.turn_count % self.config.turns_per_phase == 0 {
            self.finish_phase();
            if self.turn_count == self.config.max_turns {
                self.ended = true;
            } else {
                self.phase = StrategyPhase::from_index(self.turn_count / self.config.turns_per_phase);
            }
        }

        Ok(TurnResult {
            record,
            turn_count: self.turn_count,
            ended: self.ended,
        })
    }

    fn finish_phase(&mut self) {
        let len = self.config.turns_per_phase as f64;
        let wins = self.player_wins as f64;
        let losses = self.computer_wins as f64;
        self.phase_summaries.push(PhaseSummary {
            player_win_rate: wins / len,
            computer_win_rate: losses / len,
            tie_rate: (len - wins - losses) / len,
        });
        self.player_wins = 0;
        self.computer_wins = 0;
    }

    /// Plain-text results artifact: one line per phase summary, then one
    /// line per turn, chronological
    ///
    /// This is the string participants copy out of the page, so its shape is
    /// load-bearing: rates are comma-joined shortest-form floats with no
    /// brackets or spaces, turn lines are "player: computer" in lowercase,
    /// and every line ends with a newline.
    pub fn report(&self) -> String {
        let mut out = String::new();
        for (i, summary) in self.phase_summaries.iter().enumerate() {
            out.push_str(&summary_line(i, summary));
            out.push('\n');
        }
        for record in &self.history {
            out.push_str(&record.player.to_string());
            out.push_str(": ");
            out.push_str(&record.computer.to_string());
            out.push('\n');
        }
        out
    }

    /// Structured form of the final results
    pub fn match_report(&self) -> MatchReport {
        MatchReport {
            phase_summaries: self.phase_summaries.clone(),
            history: self.history.clone(),
        }
    }
}

fn summary_line(index: usize, summary: &PhaseSummary) -> String {
    format!(
        "Strategy {}: {},{},{}",
        index, summary.player_win_rate, summary.computer_win_rate, summary.tie_rate
    )
}
