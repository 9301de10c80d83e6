//! SamuraiGo - quick-draw reaction duel
//!
//! Wait for the cue, hit SPACE, beat a cap that halves every round.
//! The rules live in `samurai-go-core`; this binary opens the window, loads
//! the sprites and font, drives the tick at 60 Hz and draws the result.

mod game;

use bevy::prelude::*;
use bevy::window::WindowResolution;

use samurai_go::{GameConfig, TICK_RATE};
use samurai_go::render::{SCREEN_WIDTH, SCREEN_HEIGHT};

use game::{ClientConfig, GamePlugin};

/// App states
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    /// Waiting for the high score and every asset
    #[default]
    Loading,
    /// Session running
    Playing,
}

fn main() -> AppExit {
    let config = GameConfig::from_env();

    App::new()
        // Bevy defaults with custom window
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "SamuraiGo".into(),
                        resolution: WindowResolution::new(SCREEN_WIDTH, SCREEN_HEIGHT),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                .set(AssetPlugin {
                    file_path: config.asset_dir.to_string_lossy().into_owned(),
                    ..default()
                })
                // Pixel art sprites
                .set(ImagePlugin::default_nearest()),
        )
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(Time::<Fixed>::from_hz(TICK_RATE as f64))
        .insert_resource(ClientConfig(config))
        .init_state::<AppState>()
        .add_plugins(GamePlugin)
        .add_systems(Startup, setup_2d_camera)
        .run()
}

/// 2D camera, one world unit per logical pixel, origin at screen centre
fn setup_2d_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Camera {
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
    ));

    info!("SamuraiGo initialized!");
}
