//! Game State Definitions
//!
//! One owned [`GameState`] holds everything a session mutates. It is created
//! at startup with the loaded high score and then changed only by
//! [`tick`](crate::game::tick::tick).

use std::time::Duration;

use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::config::RulesConfig;
use crate::core::rng::SessionRng;
use crate::game::events::GameEvent;

// =============================================================================
// MODE
// =============================================================================

/// Position in the game flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum Mode {
    /// Title screen, waiting for the first press
    #[default]
    Menu,
    /// Attacker and opponent walk toward their marks
    Approach,
    /// Random wait before the cue; pressing now is a false start
    Ready,
    /// Cue shown, reaction clock running
    Start,
    /// Round result (win pause or game over screen)
    Resolve,
    /// Early-press penalty pause
    FalseStart,
}

impl Mode {
    /// Short name for logs.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Menu => "menu",
            Mode::Approach => "approach",
            Mode::Ready => "ready",
            Mode::Start => "start",
            Mode::Resolve => "resolve",
            Mode::FalseStart => "false-start",
        }
    }
}

/// Outcome of a round, meaningful while in [`Mode::Resolve`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum Judgement {
    /// Reacted within the cap
    Win,
    /// Too slow, or too many false starts
    #[default]
    Loss,
}

/// How a session ended. The host acts on it and ends the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEnd {
    /// New record: persist `score`, then exit
    SaveAndExit {
        /// Final score
        score: u32,
    },
    /// No record: exit without touching the score file
    Exit,
}

impl SessionEnd {
    /// Process exit code for this outcome.
    pub fn exit_code(self) -> u8 {
        match self {
            SessionEnd::SaveAndExit { .. } | SessionEnd::Exit => 0,
        }
    }
}

// =============================================================================
// GAME STATE
// =============================================================================

/// Complete state of one game session.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Current mode
    pub mode: Mode,

    /// Points accumulated this run
    pub score: u32,

    /// High score loaded at startup
    pub high_score: u32,

    /// False starts so far (never reset within a run)
    pub false_starts: u8,

    /// Result of the last round
    pub judgement: Judgement,

    /// Attacker offset, advanced during the approach
    pub attacker_x: f64,

    /// Opponent offset, retreated during the approach
    pub opponent_x: f64,

    /// Ready window for the current round (seconds)
    pub ready_threshold: f64,

    /// Win-latency cap (seconds); halves after every win
    pub win_cap: f64,

    /// Clock reading when Ready or Start was entered
    pub mode_entered_at: Duration,

    /// Last measured reaction (seconds), 0 until measured
    pub reaction_latency: f64,

    /// End of the running win or false-start pause
    pub pause_until: Option<Duration>,

    /// Set once the player leaves the game over screen
    pub ended: Option<SessionEnd>,

    /// Ticks processed
    pub frame: u64,

    /// Source of ready windows
    pub rng: SessionRng,

    /// Events pending collection by the tick result
    events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh session on the title screen.
    pub fn new(high_score: u32, seed: u64, rules: &RulesConfig) -> Self {
        Self {
            mode: Mode::Menu,
            score: 0,
            high_score,
            false_starts: 0,
            judgement: Judgement::Loss,
            attacker_x: rules.attacker_start,
            opponent_x: rules.opponent_start,
            ready_threshold: rules.ready_window_min,
            win_cap: rules.initial_win_cap,
            mode_entered_at: Duration::ZERO,
            reaction_latency: 0.0,
            pause_until: None,
            ended: None,
            frame: 0,
            rng: SessionRng::new(seed),
            events: Vec::new(),
        }
    }

    /// Switch mode, recording the change.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode == mode {
            return;
        }
        debug!("frame {}: {} -> {}", self.frame, self.mode.name(), mode.name());
        self.push_event(GameEvent::mode_changed(self.frame, self.mode, mode));
        self.mode = mode;
    }

    /// Put both fighters back on their starting marks.
    pub fn reset_positions(&mut self, rules: &RulesConfig) {
        self.attacker_x = rules.attacker_start;
        self.opponent_x = rules.opponent_start;
    }

    /// Is the round over with a win?
    pub fn is_winning(&self) -> bool {
        self.mode == Mode::Resolve && self.judgement == Judgement::Win
    }

    /// Is the game over screen showing?
    pub fn is_game_over(&self) -> bool {
        self.mode == Mode::Resolve && self.judgement == Judgement::Loss
    }

    /// The standing attacker is replaced by its victory pose after a win.
    pub fn attacker_visible(&self) -> bool {
        !self.is_winning()
    }

    /// Would leaving the game over screen now set a new record?
    pub fn beats_high_score(&self) -> bool {
        self.score > self.high_score
    }

    /// Has the session reached its terminal outcome?
    pub fn is_ended(&self) -> bool {
        self.ended.is_some()
    }

    /// Queue an event for this tick.
    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain queued events.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::events::GameEventData;

    #[test]
    fn test_new_state() {
        let rules = RulesConfig::default();
        let state = GameState::new(500, 1, &rules);

        assert_eq!(state.mode, Mode::Menu);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 500);
        assert_eq!(state.false_starts, 0);
        assert_eq!(state.attacker_x, 0.0);
        assert_eq!(state.opponent_x, 280.0);
        assert_eq!(state.win_cap, 3.0);
        assert_eq!(state.reaction_latency, 0.0);
        assert!(!state.is_ended());
    }

    #[test]
    fn test_set_mode_records_change_once() {
        let mut state = GameState::new(0, 1, &RulesConfig::default());

        state.set_mode(Mode::Approach);
        state.set_mode(Mode::Approach);

        let events = state.take_events();
        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0].data,
            GameEventData::ModeChanged { from: Mode::Menu, to: Mode::Approach }
        );
        assert!(state.take_events().is_empty());
    }

    #[test]
    fn test_attacker_hidden_only_while_winning() {
        let mut state = GameState::new(0, 1, &RulesConfig::default());
        state.mode = Mode::Resolve;

        state.judgement = Judgement::Win;
        assert!(!state.attacker_visible());

        state.judgement = Judgement::Loss;
        assert!(state.attacker_visible());
        assert!(state.is_game_over());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(SessionEnd::Exit.exit_code(), 0);
        assert_eq!(SessionEnd::SaveAndExit { score: 10 }.exit_code(), 0);
    }
}
