//! Render Projection
//!
//! Pure mapping from [`GameState`] to an ordered draw list. Coordinates are
//! screen pixels on the 640x480 canvas, origin top-left, y down. Later
//! commands draw over earlier ones.

use serde::{Serialize, Deserialize};

use crate::game::state::{GameState, Mode};

/// Screen width in pixels.
pub const SCREEN_WIDTH: f32 = 640.0;

/// Screen height in pixels.
pub const SCREEN_HEIGHT: f32 = 480.0;

/// Height of the row both fighters stand on (before scaling).
const GROUND_Y: f32 = 150.0;

/// Sprite scale used for every image.
const SPRITE_SCALE: f32 = 2.0;

/// Images the host must provide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteId {
    /// Standing attacker
    Attacker,
    /// Attacker in its victory pose
    AttackerVictory,
    /// Opponent
    Opponent,
    /// Slash effect shown on a win
    Effect,
}

impl SpriteId {
    /// Every image, in load order.
    pub const ALL: [SpriteId; 4] = [
        SpriteId::Attacker,
        SpriteId::AttackerVictory,
        SpriteId::Opponent,
        SpriteId::Effect,
    ];

    /// Path relative to the asset root.
    pub fn asset_path(self) -> &'static str {
        match self {
            SpriteId::Attacker => "image/Knight1.png",
            SpriteId::AttackerVictory => "image/Knight2.png",
            SpriteId::Opponent => "image/ghost1.png",
            SpriteId::Effect => "image/Bullet1.png",
        }
    }
}

/// Font used for every text command, relative to the asset root.
pub const FONT_PATH: &str = "fonts/PressStart2P-Regular.ttf";

/// Text size in pixels.
pub const FONT_SIZE: f32 = 20.0;

/// 8-bit RGBA colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl Rgba {
    /// Opaque white
    pub const WHITE: Rgba = Rgba(255, 255, 255, 255);
    /// Opaque red
    pub const RED: Rgba = Rgba(255, 0, 0, 255);
    /// Opaque black
    pub const BLACK: Rgba = Rgba(0, 0, 0, 255);
}

/// One draw instruction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Image translated by `(x, y)` and then scaled, so its top-left corner
    /// lands at `(x * scale_x, y * scale_y)`.
    Sprite {
        image: SpriteId,
        x: f32,
        y: f32,
        scale_x: f32,
        scale_y: f32,
    },
    /// Text with its baseline starting at `(x, y)`.
    Text {
        text: String,
        x: f32,
        y: f32,
        color: Rgba,
    },
    /// Fill the whole screen.
    Fill {
        color: Rgba,
    },
}

impl DrawCommand {
    fn sprite(image: SpriteId, x: f32, y: f32) -> Self {
        DrawCommand::Sprite {
            image,
            x,
            y,
            scale_x: SPRITE_SCALE,
            scale_y: SPRITE_SCALE,
        }
    }

    fn text(text: impl Into<String>, x: f32, y: f32, color: Rgba) -> Self {
        DrawCommand::Text {
            text: text.into(),
            x,
            y,
            color,
        }
    }
}

/// Draw list for the current state.
pub fn render(state: &GameState) -> Vec<DrawCommand> {
    let mut out = Vec::with_capacity(8);

    // Last reaction, shortest decimal form ("0", "0.25", ...)
    out.push(DrawCommand::text(
        state.reaction_latency.to_string(),
        100.0,
        200.0,
        Rgba::WHITE,
    ));

    if state.attacker_visible() {
        out.push(DrawCommand::sprite(SpriteId::Attacker, state.attacker_x as f32, GROUND_Y));
    }
    out.push(DrawCommand::sprite(SpriteId::Opponent, state.opponent_x as f32, GROUND_Y));

    match state.mode {
        Mode::Menu => {
            out.push(DrawCommand::text("SamuraiGo", 230.0, 200.0, Rgba::WHITE));
            out.push(DrawCommand::text("SPACE : START", 200.0, 350.0, Rgba::RED));
        }
        Mode::Approach => {}
        Mode::Ready => {
            out.push(DrawCommand::text("Ready", 250.0, 100.0, Rgba::WHITE));
        }
        Mode::Start => {
            out.push(DrawCommand::text("START!!!!", 250.0, 100.0, Rgba::RED));
        }
        Mode::Resolve if state.is_winning() => {
            out.push(DrawCommand::text("Win", 250.0, 100.0, Rgba::RED));
            out.push(DrawCommand::sprite(SpriteId::Effect, 180.0, 140.0));
            out.push(DrawCommand::sprite(SpriteId::AttackerVictory, 260.0, GROUND_Y));
        }
        Mode::Resolve => {
            out.push(DrawCommand::Fill { color: Rgba::BLACK });
            out.push(DrawCommand::text("GAME OVER", 230.0, 200.0, Rgba::RED));
            out.push(DrawCommand::text(format!("score: {}", state.score), 230.0, 250.0, Rgba::WHITE));
            out.push(DrawCommand::text("SPACE : SAVE & EXIT", 150.0, 350.0, Rgba::WHITE));
        }
        Mode::FalseStart => {
            out.push(DrawCommand::text("Too Early", 230.0, 200.0, Rgba::RED));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RulesConfig;
    use crate::game::state::Judgement;

    fn state_in(mode: Mode) -> GameState {
        let mut state = GameState::new(0, 1, &RulesConfig::default());
        state.mode = mode;
        state
    }

    fn texts(commands: &[DrawCommand]) -> Vec<(&str, Rgba)> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, color, .. } => Some((text.as_str(), *color)),
                _ => None,
            })
            .collect()
    }

    fn sprites(commands: &[DrawCommand]) -> Vec<SpriteId> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Sprite { image, .. } => Some(*image),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut state = state_in(Mode::Resolve);
        state.judgement = Judgement::Loss;
        state.score = 300;

        assert_eq!(render(&state), render(&state));
    }

    #[test]
    fn test_latency_always_first() {
        for mode in [
            Mode::Menu,
            Mode::Approach,
            Mode::Ready,
            Mode::Start,
            Mode::Resolve,
            Mode::FalseStart,
        ] {
            let mut state = state_in(mode);
            state.reaction_latency = 0.25;
            let commands = render(&state);
            assert_eq!(commands[0], DrawCommand::text("0.25", 100.0, 200.0, Rgba::WHITE));
        }
    }

    #[test]
    fn test_zero_latency_text() {
        let commands = render(&state_in(Mode::Menu));
        assert_eq!(texts(&commands)[0].0, "0");
    }

    #[test]
    fn test_menu_screen() {
        let commands = render(&state_in(Mode::Menu));

        assert_eq!(
            texts(&commands)[1..],
            [("SamuraiGo", Rgba::WHITE), ("SPACE : START", Rgba::RED)]
        );
        assert_eq!(sprites(&commands), [SpriteId::Attacker, SpriteId::Opponent]);
    }

    #[test]
    fn test_approach_sprites_follow_positions() {
        let mut state = state_in(Mode::Approach);
        state.attacker_x = 35.0;
        state.opponent_x = 245.0;

        let commands = render(&state);

        assert_eq!(commands.len(), 3);
        assert_eq!(
            commands[1],
            DrawCommand::Sprite { image: SpriteId::Attacker, x: 35.0, y: 150.0, scale_x: 2.0, scale_y: 2.0 }
        );
        assert_eq!(
            commands[2],
            DrawCommand::Sprite { image: SpriteId::Opponent, x: 245.0, y: 150.0, scale_x: 2.0, scale_y: 2.0 }
        );
    }

    #[test]
    fn test_ready_and_start_cues() {
        let ready = render(&state_in(Mode::Ready));
        assert_eq!(texts(&ready)[1..], [("Ready", Rgba::WHITE)]);

        let start = render(&state_in(Mode::Start));
        assert_eq!(texts(&start)[1..], [("START!!!!", Rgba::RED)]);
    }

    #[test]
    fn test_win_screen() {
        let mut state = state_in(Mode::Resolve);
        state.judgement = Judgement::Win;

        let commands = render(&state);

        assert_eq!(texts(&commands)[1..], [("Win", Rgba::RED)]);
        assert_eq!(
            sprites(&commands),
            [SpriteId::Opponent, SpriteId::Effect, SpriteId::AttackerVictory]
        );
    }

    #[test]
    fn test_game_over_screen() {
        let mut state = state_in(Mode::Resolve);
        state.judgement = Judgement::Loss;
        state.score = 400;

        let commands = render(&state);
        let fill = commands
            .iter()
            .position(|c| *c == DrawCommand::Fill { color: Rgba::BLACK })
            .expect("game over fills the screen");

        // Everything drawn before the fill is hidden by it
        assert_eq!(
            texts(&commands[fill..]),
            [
                ("GAME OVER", Rgba::RED),
                ("score: 400", Rgba::WHITE),
                ("SPACE : SAVE & EXIT", Rgba::WHITE),
            ]
        );
    }

    #[test]
    fn test_false_start_screen() {
        let commands = render(&state_in(Mode::FalseStart));
        assert_eq!(texts(&commands)[1..], [("Too Early", Rgba::RED)]);
    }

    #[test]
    fn test_asset_paths_unique() {
        let mut paths: Vec<_> = SpriteId::ALL.iter().map(|s| s.asset_path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), SpriteId::ALL.len());
    }
}
