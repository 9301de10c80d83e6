//! Draw list projection
//!
//! The core hands back an ordered list of draw commands in screen pixels
//! (origin top-left, y down). Each frame the previous list's entities are
//! despawned and the new list is spawned, one z layer per command.

use bevy::prelude::*;
use bevy::sprite::Anchor;

use samurai_go::render::{render, DrawCommand, Rgba, FONT_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH};

use super::{Drawn, GameAssets, Session};

/// Screen pixel to world position (camera centred, y up)
fn screen_to_world(x: f32, y: f32) -> Vec2 {
    Vec2::new(x - SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0 - y)
}

fn to_color(Rgba(r, g, b, a): Rgba) -> Color {
    Color::srgba_u8(r, g, b, a)
}

/// Replace the drawn entities whenever the session changed
pub fn project_draw_list(
    mut commands: Commands,
    session: Res<Session>,
    assets: Res<GameAssets>,
    drawn: Query<Entity, With<Drawn>>,
) {
    if !session.is_changed() && !drawn.is_empty() {
        return;
    }

    for entity in drawn.iter() {
        commands.entity(entity).despawn();
    }

    for (layer, command) in render(&session.0).into_iter().enumerate() {
        let z = layer as f32;

        match command {
            DrawCommand::Sprite { image, x, y, scale_x, scale_y } => {
                let position = screen_to_world(x * scale_x, y * scale_y);
                commands.spawn((
                    Drawn,
                    Sprite {
                        image: assets.image(image).clone(),
                        anchor: Anchor::TopLeft,
                        ..default()
                    },
                    Transform::from_translation(position.extend(z))
                        .with_scale(Vec3::new(scale_x, scale_y, 1.0)),
                ));
            }
            DrawCommand::Text { text, x, y, color } => {
                commands.spawn((
                    Drawn,
                    Text2d::new(text),
                    TextFont {
                        font: assets.font.clone(),
                        font_size: FONT_SIZE,
                        ..default()
                    },
                    TextColor(to_color(color)),
                    // Baseline sits on y
                    Anchor::BottomLeft,
                    Transform::from_translation(screen_to_world(x, y).extend(z)),
                ));
            }
            DrawCommand::Fill { color } => {
                commands.spawn((
                    Drawn,
                    Sprite {
                        color: to_color(color),
                        custom_size: Some(Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT)),
                        anchor: Anchor::TopLeft,
                        ..default()
                    },
                    Transform::from_translation(screen_to_world(0.0, 0.0).extend(z)),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_corners() {
        assert_eq!(screen_to_world(0.0, 0.0), Vec2::new(-320.0, 240.0));
        assert_eq!(screen_to_world(640.0, 480.0), Vec2::new(320.0, -240.0));
        assert_eq!(screen_to_world(320.0, 240.0), Vec2::ZERO);
    }

    #[test]
    fn test_to_color() {
        assert_eq!(to_color(Rgba::RED), Color::srgba_u8(255, 0, 0, 255));
    }
}
