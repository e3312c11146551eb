use bevy::prelude::*;
use game_helpers::FONT;

use crate::input::HighlightState;
use crate::session::{Anchor, DragSession};
use crate::variables::{
    ANCHOR_COMMITTED_COLOR, ANCHOR_HIGHLIGHT_COLOR, ANCHOR_IDLE_COLOR, ANCHOR_RADIUS, ANCHOR_Z,
    LABEL_Z, LINE_COLOR, RETURN_DURATION_SECS, SnapConfig, TILE_COLOR, TILE_DRAG_COLOR,
    TILE_NEAR_COLOR, TILE_RETURN_COLOR, TILE_Z, anchor_layout, spawn_point,
};
use crate::{GameState, ReturnEvent, SnapEvent};

#[derive(Component)]
pub struct LetterTile;

#[derive(Component)]
pub struct TileLabel;

#[derive(Component)]
pub struct AnchorDot {
    pub index: usize,
}

/// Readout of the letter currently on the tile, independent of its label.
#[derive(Component)]
pub struct LetterReadout;

/// Readout of the committed letters, in commit order.
#[derive(Component)]
pub struct WordReadout;

/// Cosmetic lerp back to the anchor after a failed drop. Touches only the
/// tile transform and tint, never the session.
#[derive(Component)]
pub struct Returning {
    pub from: Vec2,
    pub timer: Timer,
}

/// Creates a fresh session from the tuned layout. Re-entering the playing
/// state starts the puzzle over.
pub fn setup_session(mut commands: Commands, config: Res<SnapConfig>) {
    commands.insert_resource(DragSession::new(
        spawn_point(),
        anchor_layout(),
        config.distance_per_letter,
        config.snap_threshold(),
    ));
}

pub fn spawn_board(
    mut commands: Commands,
    session: Res<DragSession>,
    config: Res<SnapConfig>,
    asset_server: Res<AssetServer>,
) {
    // Anchor dots, in creation order.
    for (index, anchor) in session.anchors().iter().enumerate() {
        commands.spawn((
            Sprite::from_color(ANCHOR_IDLE_COLOR, Vec2::splat(ANCHOR_RADIUS * 2.0)),
            Transform::from_translation(anchor.position().extend(ANCHOR_Z)),
            AnchorDot { index },
        ));
    }

    // The letter tile with its label.
    commands
        .spawn((
            Sprite::from_color(TILE_COLOR, Vec2::splat(config.tile_size)),
            Transform::from_translation(session.anchor_position().extend(TILE_Z)),
            LetterTile,
        ))
        .with_child((
            Text2d::new(session.current_letter().to_string()),
            TextFont {
                font: asset_server.load(FONT),
                font_size: 28.0,
                ..default()
            },
            TextColor(Color::BLACK),
            Transform::from_xyz(0.0, 0.0, LABEL_Z),
            TileLabel,
        ));

    // Current letter readout, top left.
    commands.spawn((
        Text2d::new(format!("Letter: {}", session.current_letter())),
        TextFont {
            font: asset_server.load(FONT),
            font_size: 24.0,
            ..default()
        },
        TextLayout::new_with_justify(JustifyText::Left),
        Transform::from_xyz(
            -game_helpers::WINDOW_WIDTH / 2.2 + 70.0,
            game_helpers::WINDOW_HEIGHT / 2.2 - 20.0,
            0.0,
        ),
        LetterReadout,
    ));

    // Committed word readout, top right.
    commands.spawn((
        Text2d::new("Word:"),
        TextFont {
            font: asset_server.load(FONT),
            font_size: 24.0,
            ..default()
        },
        TextLayout::new_with_justify(JustifyText::Right),
        Transform::from_xyz(
            game_helpers::WINDOW_WIDTH / 2.2 - 70.0,
            game_helpers::WINDOW_HEIGHT / 2.2 - 20.0,
            0.0,
        ),
        WordReadout,
    ));
}

/// Snap: the tile lands exactly on the anchor.
pub fn handle_snap_events(
    mut snap_events: EventReader<SnapEvent>,
    session: Res<DragSession>,
    mut tile: Query<&mut Transform, With<LetterTile>>,
) {
    for event in snap_events.read() {
        let Some(anchor) = session.anchors().get(event.anchor_index) else {
            continue;
        };
        if let Ok(mut transform) = tile.get_single_mut() {
            transform.translation = anchor.position().extend(TILE_Z);
        }
    }
}

/// Failed drop: start the lerp back to the anchor point.
pub fn handle_return_events(
    mut commands: Commands,
    mut return_events: EventReader<ReturnEvent>,
    tile: Query<(Entity, &Transform), With<LetterTile>>,
) {
    for _ in return_events.read() {
        let Ok((entity, transform)) = tile.get_single() else {
            continue;
        };
        commands.entity(entity).insert(Returning {
            from: transform.translation.truncate(),
            timer: Timer::from_seconds(RETURN_DURATION_SECS, TimerMode::Once),
        });
    }
}

pub fn animate_return(
    mut commands: Commands,
    time: Res<Time>,
    session: Res<DragSession>,
    mut tile: Query<(Entity, &mut Transform, &mut Returning), With<LetterTile>>,
) {
    let Ok((entity, mut transform, mut returning)) = tile.get_single_mut() else {
        return;
    };

    returning.timer.tick(time.delta());
    let target = session.anchor_position();
    let eased = returning.from.lerp(target, returning.timer.fraction());
    transform.translation = eased.extend(TILE_Z);

    if returning.timer.finished() {
        transform.translation = target.extend(TILE_Z);
        commands.entity(entity).remove::<Returning>();
    }
}

/// Tint per visual state: dragging, hovering an anchor, returning, or idle.
pub fn update_tile_visuals(
    session: Res<DragSession>,
    highlight: Res<HighlightState>,
    mut tile: Query<(&mut Sprite, Option<&Returning>), With<LetterTile>>,
) {
    let Ok((mut sprite, returning)) = tile.get_single_mut() else {
        return;
    };
    sprite.color = if session.is_dragging() {
        if highlight.near_anchor.is_some() {
            TILE_NEAR_COLOR
        } else {
            TILE_DRAG_COLOR
        }
    } else if returning.is_some() {
        TILE_RETURN_COLOR
    } else {
        TILE_COLOR
    };
}

/// Highlights the hovered anchor and keeps committed anchors marked. Every
/// non-hovered anchor is restored each frame, so a highlight can never stick.
pub fn update_anchor_visuals(
    session: Res<DragSession>,
    highlight: Res<HighlightState>,
    mut anchors: Query<(&AnchorDot, &mut Sprite)>,
) {
    for (dot, mut sprite) in &mut anchors {
        let hovered = session.is_dragging() && highlight.near_anchor == Some(dot.index);
        let used = session
            .anchors()
            .get(dot.index)
            .is_some_and(Anchor::is_used);
        sprite.color = if hovered {
            ANCHOR_HIGHLIGHT_COLOR
        } else if used {
            ANCHOR_COMMITTED_COLOR
        } else {
            ANCHOR_IDLE_COLOR
        };
    }
}

pub fn update_readouts(
    session: Res<DragSession>,
    mut label: Query<&mut Text2d, With<TileLabel>>,
    mut readouts: Query<
        (&mut Text2d, Option<&LetterReadout>, Option<&WordReadout>),
        Without<TileLabel>,
    >,
) {
    if let Ok(mut text) = label.get_single_mut() {
        *text = Text2d::new(session.current_letter().to_string());
    }
    for (mut text, letter_readout, word_readout) in &mut readouts {
        if letter_readout.is_some() {
            *text = Text2d::new(format!("Letter: {}", session.current_letter()));
        } else if word_readout.is_some() {
            *text = Text2d::new(format!("Word: {}", session.word()));
        }
    }
}

/// The line from the current anchor to the tile, only while dragging.
pub fn draw_connecting_line(
    mut gizmos: Gizmos,
    session: Res<DragSession>,
    tile: Query<&Transform, With<LetterTile>>,
) {
    if !session.is_dragging() {
        return;
    }
    let Ok(transform) = tile.get_single() else {
        return;
    };
    gizmos.line_2d(
        session.anchor_position(),
        transform.translation.truncate(),
        LINE_COLOR,
    );
}

/// Once every anchor holds a letter the puzzle is solved.
pub fn check_complete(session: Res<DragSession>, mut next_state: ResMut<NextState<GameState>>) {
    if !session.is_dragging() && session.is_complete() {
        next_state.set(GameState::Complete);
    }
}

pub fn cleanup_board(
    mut commands: Commands,
    board: Query<Entity, Or<(With<LetterTile>, With<AnchorDot>, With<Text2d>)>>,
) {
    for entity in &board {
        commands.entity(entity).despawn_recursive();
    }
}
