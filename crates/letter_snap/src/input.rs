use bevy::prelude::*;
use game_helpers::input::{
    current_world_position, just_pressed_world_position, just_released_world_position,
};

use crate::session::{DragOutcome, DragSession};
use crate::tile::{LetterTile, Returning};
use crate::variables::SnapConfig;
use crate::{ReturnEvent, SnapEvent};

/// Which anchor the tile is currently hovering, for highlight feedback only.
#[derive(Resource, Default)]
pub struct HighlightState {
    pub near_anchor: Option<usize>,
}

/// Starts a drag when the press lands on the tile. A press anywhere else is
/// ignored, as is a second press while a drag is live.
pub fn handle_drag_start(
    mut commands: Commands,
    mouse_button_input: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    windows: Query<&Window>,
    camera: Query<(&Camera, &GlobalTransform)>,
    mut session: ResMut<DragSession>,
    config: Res<SnapConfig>,
    tile: Query<(Entity, &Transform), With<LetterTile>>,
) {
    let Some(world_position) =
        just_pressed_world_position(&mouse_button_input, &touch_input, &windows, &camera)
    else {
        return;
    };

    let Ok((tile_entity, tile_transform)) = tile.get_single() else {
        return;
    };

    let tile_center = tile_transform.translation.truncate();
    let tile_rect = Rect::from_center_size(tile_center, Vec2::splat(config.tile_size));
    if !tile_rect.contains(world_position) {
        return;
    }

    if session.begin_drag(world_position, tile_center) {
        // A new grab cancels the cosmetic return animation mid-flight.
        commands.entity(tile_entity).remove::<Returning>();
    }
}

/// Tracks the pointer every frame of a live drag: moves the tile, updates the
/// displayed letter, and records which anchor (if any) is being hovered.
pub fn handle_drag_move(
    mouse_button_input: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    windows: Query<&Window>,
    camera: Query<(&Camera, &GlobalTransform)>,
    mut session: ResMut<DragSession>,
    mut highlight: ResMut<HighlightState>,
    mut tile: Query<&mut Transform, With<LetterTile>>,
) {
    if !session.is_dragging() {
        return;
    }

    let Some(world_position) =
        current_world_position(&mouse_button_input, &touch_input, &windows, &camera)
    else {
        return;
    };

    let Some(update) = session.drag_to(world_position) else {
        return;
    };

    highlight.near_anchor = update.near_anchor;

    if let Ok(mut transform) = tile.get_single_mut() {
        transform.translation.x = update.tile_center.x;
        transform.translation.y = update.tile_center.y;
    }
}

/// Resolves a release: snap to the first qualifying anchor, or return the
/// tile to the anchor it came from.
pub fn handle_drag_end(
    mouse_button_input: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    windows: Query<&Window>,
    camera: Query<(&Camera, &GlobalTransform)>,
    mut session: ResMut<DragSession>,
    mut highlight: ResMut<HighlightState>,
    tile: Query<&Transform, With<LetterTile>>,
    mut snap_events: EventWriter<SnapEvent>,
    mut return_events: EventWriter<ReturnEvent>,
) {
    if !session.is_dragging() {
        return;
    }

    if !mouse_button_input.just_released(MouseButton::Left) && !touch_input.any_just_released() {
        return;
    }

    let outcome = if let Some(world_position) =
        just_released_world_position(&mouse_button_input, &touch_input, &windows, &camera)
    {
        session.end_drag(world_position)
    } else {
        // The release carried no position (cursor left the window); resolve
        // against wherever the tile last was.
        let tile_center = tile
            .get_single()
            .map(|transform| transform.translation.truncate())
            .unwrap_or_else(|_| session.anchor_position());
        session.end_drag_at_center(tile_center)
    };

    highlight.near_anchor = None;

    match outcome {
        Some(DragOutcome::Snapped {
            anchor_index,
            letter,
            committed,
        }) => {
            info!("snapped letter {letter} to anchor {anchor_index} (committed: {committed})");
            snap_events.send(SnapEvent {
                anchor_index,
                letter,
                committed,
            });
        }
        Some(DragOutcome::Returned) => {
            info!("no anchor in range, returning to {}", session.anchor_position());
            return_events.send(ReturnEvent);
        }
        None => {}
    }
}
