//! Game module - drives the SamuraiGo session
//!
//! - Startup: load the high score and request assets
//! - PreUpdate: latch SPACE presses
//! - FixedUpdate (60 Hz): one core tick per step
//! - Update: draw the current state, apply the session outcome

use bevy::input::InputSystem;
use bevy::prelude::*;

use samurai_go::game::tick;
use samurai_go::{GameState, InputFrame, ScoreStore};

use crate::AppState;

pub mod assets;
pub mod components;
pub mod visuals;

pub use assets::*;
pub use components::*;
pub use visuals::*;

// ============================================================================
// GAME PLUGIN
// ============================================================================

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app
            // Resources
            .init_resource::<Rules>()
            .init_resource::<ActionLatch>()

            // Events
            .add_event::<SessionFinished>()

            // Session setup
            .add_systems(Startup, (open_session, load_assets))
            .add_systems(Update, check_loading.run_if(in_state(AppState::Loading)))

            // Input is latched right after bevy reads the keyboard so a press
            // reaches exactly one fixed tick
            .add_systems(PreUpdate, latch_action.after(InputSystem))

            // Core gameplay (fixed timestep)
            .add_systems(FixedUpdate, tick_session.run_if(in_state(AppState::Playing)))

            // Presentation and exit
            .add_systems(Update, (
                project_draw_list,
                finish_session,
            ).chain().run_if(in_state(AppState::Playing)));
    }
}

// ============================================================================
// SESSION SETUP
// ============================================================================

/// Load the high score and start a session; a bad score file is fatal
fn open_session(
    mut commands: Commands,
    config: Res<ClientConfig>,
    rules: Res<Rules>,
    mut exit: EventWriter<AppExit>,
) {
    let store = ScoreStore::from_config(&config.0);

    match store.load() {
        Ok(high_score) => {
            let seed = rand::random::<u64>();
            commands.insert_resource(Session(GameState::new(high_score, seed, &rules.0)));
            commands.insert_resource(ScoreFile(store));
        }
        Err(err) => {
            error!("{}", err);
            exit.send(AppExit::from_code(1));
        }
    }
}

// ============================================================================
// INPUT
// ============================================================================

fn latch_action(keyboard: Res<ButtonInput<KeyCode>>, mut latch: ResMut<ActionLatch>) {
    if keyboard.just_pressed(KeyCode::Space) {
        latch.0 = true;
    }
}

// ============================================================================
// TICK
// ============================================================================

fn tick_session(
    time: Res<Time<Real>>,
    rules: Res<Rules>,
    mut latch: ResMut<ActionLatch>,
    mut session: ResMut<Session>,
    mut finished: EventWriter<SessionFinished>,
) {
    let input = InputFrame::from_pressed(std::mem::take(&mut latch.0));
    let result = tick(&mut session.0, input, time.elapsed(), &rules.0);

    if let Some(outcome) = result.session_end {
        finished.send(SessionFinished(outcome));
    }
}

// ============================================================================
// SESSION END
// ============================================================================

/// Persist a new record if there is one, then quit
fn finish_session(
    mut finished: EventReader<SessionFinished>,
    store: Res<ScoreFile>,
    mut exit: EventWriter<AppExit>,
) {
    for SessionFinished(outcome) in finished.read() {
        let code = match store.0.commit(*outcome) {
            Ok(_) => outcome.exit_code(),
            Err(err) => {
                error!("{}", err);
                1
            }
        };
        exit.send(AppExit::from_code(code));
    }
}
