//! Core primitives shared by the game logic.

pub mod rng;

// Re-export core types
pub use rng::SessionRng;
