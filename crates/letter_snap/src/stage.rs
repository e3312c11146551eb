use bevy::prelude::*;
use game_helpers::{FONT, WINDOW_HEIGHT};

use crate::GameState;
use crate::session::DragSession;

#[derive(Component)]
pub struct CompleteScreen;

/// Every anchor holds a letter; show the word the path spelled out.
pub fn spawn_complete_screen(
    mut commands: Commands,
    session: Res<DragSession>,
    asset_server: Res<AssetServer>,
) {
    info!("puzzle complete, word: {}", session.word());

    let screen = commands
        .spawn((CompleteScreen, Transform::default(), Visibility::default()))
        .id();

    commands
        .spawn((
            Text2d::new(format!("Your word:\n{}", session.word())),
            TextFont {
                font: asset_server.load(FONT),
                font_size: 48.0,
                ..default()
            },
            TextColor(Color::WHITE),
            TextLayout::new_with_justify(JustifyText::Center),
            Transform::from_xyz(0.0, WINDOW_HEIGHT / 8.0, 10.0),
        ))
        .set_parent(screen);

    commands
        .spawn((
            Text2d::new("Tap to play again"),
            TextFont {
                font: asset_server.load(FONT),
                font_size: 24.0,
                ..default()
            },
            TextColor(Color::WHITE),
            TextLayout::new_with_justify(JustifyText::Center),
            Transform::from_xyz(0.0, -WINDOW_HEIGHT / 4.0, 10.0),
        ))
        .set_parent(screen);
}

pub fn handle_complete_input(
    mouse_button_input: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if mouse_button_input.just_pressed(MouseButton::Left) || touch_input.any_just_pressed() {
        next_state.set(GameState::Playing);
    }
}

pub fn cleanup_complete_screen(
    mut commands: Commands,
    screens: Query<Entity, With<CompleteScreen>>,
) {
    for entity in &screens {
        commands.entity(entity).despawn_recursive();
    }
}
