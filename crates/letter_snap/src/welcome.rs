use bevy::prelude::*;
use game_helpers::welcome_screen::spawn_welcome_screen;

use crate::GameState;

pub fn spawn_welcome(mut commands: Commands, asset_server: Res<AssetServer>) {
    spawn_welcome_screen(
        &mut commands,
        &asset_server,
        "Letter Snap",
        "Drag the tile to change its letter.\nDrop it on a dot to lock it in.",
    );
}

pub fn handle_welcome_input(
    mouse_button_input: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if mouse_button_input.just_pressed(MouseButton::Left) || touch_input.any_just_pressed() {
        next_state.set(GameState::Playing);
    }
}
