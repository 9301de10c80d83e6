//! Game Logic Module
//!
//! The game-mode state machine and the rules it applies.
//!
//! ## Module Structure
//!
//! - `input`: Per-tick action signal
//! - `state`: Session state, modes, outcomes
//! - `timing`: Ready-window rolls and reaction judgement
//! - `tick`: State machine transitions
//! - `events`: Events for logging and replay checks

pub mod input;
pub mod state;
pub mod timing;
pub mod tick;
pub mod events;

// Re-export key types
pub use input::InputFrame;
pub use state::{GameState, Mode, Judgement, SessionEnd};
pub use tick::{tick, TickResult};
pub use events::{GameEvent, GameEventData};
