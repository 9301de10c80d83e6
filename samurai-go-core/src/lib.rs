//! # SamuraiGo
//!
//! Quick-draw reaction game logic: wait for the cue, press as fast as you
//! can, beat a cap that halves after every win.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        SAMURAI GO                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Primitives                                │
//! │  └── rng.rs      - Seeded Xorshift128+ PRNG                  │
//! │                                                              │
//! │  game/           - Game logic (pure)                         │
//! │  ├── input.rs    - Per-tick action signal                    │
//! │  ├── state.rs    - Session state and modes                   │
//! │  ├── timing.rs   - Ready window and reaction judgement       │
//! │  ├── tick.rs     - Mode state machine                        │
//! │  └── events.rs   - Session events                            │
//! │                                                              │
//! │  render.rs       - State to draw list projection             │
//! │  score.rs        - High score file                           │
//! │  config.rs       - Paths and gameplay constants              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Host Contract
//!
//! The host calls [`game::tick`] once per frame with the "action key just
//! pressed" signal and a monotonic clock reading, then draws
//! [`render::render`]. When a tick returns a [`SessionEnd`] the host applies
//! it with [`ScoreStore::commit`] and ends the process with
//! [`SessionEnd::exit_code`]. Nothing in `game/` sleeps, exits or touches
//! the filesystem.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod core;
pub mod game;
pub mod render;
pub mod score;

// Re-export commonly used types
pub use config::{GameConfig, RulesConfig};
pub use crate::core::rng::SessionRng;
pub use game::input::InputFrame;
pub use game::state::{GameState, Mode, Judgement, SessionEnd};
pub use render::{render, DrawCommand, Rgba, SpriteId};
pub use score::{ScoreError, ScoreStore};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Nominal tick rate (Hz)
pub const TICK_RATE: u32 = 60;
