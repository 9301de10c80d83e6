//! Resources, components and events shared by the game systems

use bevy::prelude::*;

use samurai_go::{GameConfig, GameState, RulesConfig, ScoreStore, SessionEnd};

// ============================================================================
// RESOURCES
// ============================================================================

/// Paths and flags read from the environment at launch
#[derive(Resource, Debug, Clone)]
pub struct ClientConfig(pub GameConfig);

/// Gameplay constants
#[derive(Resource, Debug, Clone, Default)]
pub struct Rules(pub RulesConfig);

/// The running session. Inserted once the high score has loaded.
#[derive(Resource, Debug)]
pub struct Session(pub GameState);

/// Where the high score is read from and written back to
#[derive(Resource, Debug)]
pub struct ScoreFile(pub ScoreStore);

/// Set when SPACE goes down, cleared by the next fixed tick
#[derive(Resource, Debug, Default)]
pub struct ActionLatch(pub bool);

// ============================================================================
// COMPONENTS
// ============================================================================

/// Marks entities spawned from the current draw list
#[derive(Component)]
pub struct Drawn;

// ============================================================================
// EVENTS
// ============================================================================

/// The player left the game over screen
#[derive(Event, Debug, Clone, Copy)]
pub struct SessionFinished(pub SessionEnd);
