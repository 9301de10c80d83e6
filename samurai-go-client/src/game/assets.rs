//! Sprite and font loading
//!
//! Every asset is required. A failed load ends the process with exit code 1.

use bevy::asset::{LoadState, UntypedAssetId};
use bevy::prelude::*;

use samurai_go::render::FONT_PATH;
use samurai_go::SpriteId;

use super::Session;
use crate::AppState;

/// Handles for everything the draw list can reference
#[derive(Resource)]
pub struct GameAssets {
    pub attacker: Handle<Image>,
    pub attacker_victory: Handle<Image>,
    pub opponent: Handle<Image>,
    pub effect: Handle<Image>,
    pub font: Handle<Font>,
}

impl GameAssets {
    pub fn image(&self, id: SpriteId) -> &Handle<Image> {
        match id {
            SpriteId::Attacker => &self.attacker,
            SpriteId::AttackerVictory => &self.attacker_victory,
            SpriteId::Opponent => &self.opponent,
            SpriteId::Effect => &self.effect,
        }
    }

    /// Asset ids with the path they were requested from
    fn tracked(&self) -> Vec<(UntypedAssetId, &'static str)> {
        let mut ids: Vec<_> = SpriteId::ALL
            .iter()
            .map(|id| (self.image(*id).id().untyped(), id.asset_path()))
            .collect();
        ids.push((self.font.id().untyped(), FONT_PATH));
        ids
    }
}

/// Request every asset
pub fn load_assets(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(GameAssets {
        attacker: asset_server.load(SpriteId::Attacker.asset_path()),
        attacker_victory: asset_server.load(SpriteId::AttackerVictory.asset_path()),
        opponent: asset_server.load(SpriteId::Opponent.asset_path()),
        effect: asset_server.load(SpriteId::Effect.asset_path()),
        font: asset_server.load(FONT_PATH),
    });
}

/// Leave the loading state once everything is in, or exit on the first failure
pub fn check_loading(
    asset_server: Res<AssetServer>,
    assets: Option<Res<GameAssets>>,
    session: Option<Res<Session>>,
    mut next_state: ResMut<NextState<AppState>>,
    mut exit: EventWriter<AppExit>,
) {
    let Some(assets) = assets else {
        return;
    };

    let mut all_loaded = true;
    for (id, path) in assets.tracked() {
        match asset_server.get_load_state(id) {
            Some(LoadState::Failed(err)) => {
                error!("Failed to load {}: {}", path, err);
                exit.send(AppExit::from_code(1));
                return;
            }
            Some(LoadState::Loaded) => {}
            _ => all_loaded = false,
        }
    }

    if all_loaded && session.is_some() {
        info!("Assets loaded");
        next_state.set(AppState::Playing);
    }
}
