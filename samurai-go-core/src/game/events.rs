//! Game Events
//!
//! Events generated during a session, used for logging and replay checks.

use serde::{Serialize, Deserialize};
use crate::game::state::{Judgement, Mode, SessionEnd};

/// Game event data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEventData {
    /// Mode changed
    ModeChanged {
        from: Mode,
        to: Mode,
    },

    /// A new ready window was rolled for the round
    ReadyRolled {
        threshold: f64,
    },

    /// Player reacted to the Start cue
    ReactionMeasured {
        latency: f64,
        cap: f64,
        judgement: Judgement,
    },

    /// Round won and points awarded
    RoundWon {
        score: u32,
        next_cap: f64,
    },

    /// False start penalty applied
    FalseStart {
        count: u8,
    },

    /// Loss screen reached
    GameOver {
        score: u32,
        high_score: u32,
    },

    /// Player left the loss screen
    SessionEnded {
        outcome: SessionEnd,
    },
}

/// A game event stamped with the tick it happened on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Tick when event occurred
    pub frame: u64,

    /// Event data
    pub data: GameEventData,
}

impl GameEvent {
    /// Create a new event.
    pub fn new(frame: u64, data: GameEventData) -> Self {
        Self { frame, data }
    }

    /// Create mode changed event.
    pub fn mode_changed(frame: u64, from: Mode, to: Mode) -> Self {
        Self::new(frame, GameEventData::ModeChanged { from, to })
    }

    /// Create ready rolled event.
    pub fn ready_rolled(frame: u64, threshold: f64) -> Self {
        Self::new(frame, GameEventData::ReadyRolled { threshold })
    }

    /// Create reaction measured event.
    pub fn reaction_measured(frame: u64, latency: f64, cap: f64, judgement: Judgement) -> Self {
        Self::new(
            frame,
            GameEventData::ReactionMeasured {
                latency,
                cap,
                judgement,
            },
        )
    }

    /// Create round won event.
    pub fn round_won(frame: u64, score: u32, next_cap: f64) -> Self {
        Self::new(frame, GameEventData::RoundWon { score, next_cap })
    }

    /// Create false start event.
    pub fn false_start(frame: u64, count: u8) -> Self {
        Self::new(frame, GameEventData::FalseStart { count })
    }

    /// Create game over event.
    pub fn game_over(frame: u64, score: u32, high_score: u32) -> Self {
        Self::new(frame, GameEventData::GameOver { score, high_score })
    }

    /// Create session ended event.
    pub fn session_ended(frame: u64, outcome: SessionEnd) -> Self {
        Self::new(frame, GameEventData::SessionEnded { outcome })
    }

    /// Is this a mode change into `mode`?
    pub fn entered(&self, mode: Mode) -> bool {
        matches!(self.data, GameEventData::ModeChanged { to, .. } if to == mode)
    }
}
