use bevy::prelude::*;
use game_helpers::welcome_screen::despawn_welcome_screen;

mod input;
mod letter;
mod session;
mod stage;
mod tile;
mod variables;
mod welcome;

pub use letter::{Letter, LetterError};
pub use session::{Anchor, AnchoredLetter, DragOutcome, DragSession, DragUpdate};
pub use variables::SnapConfig;

use crate::input::HighlightState;

#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash)]
enum GameState {
    #[default]
    Welcome,
    Playing,
    Complete,
}

/// A drag resolved onto an anchor. `committed` is true only on the first
/// snap to that anchor.
#[derive(Event)]
pub struct SnapEvent {
    pub anchor_index: usize,
    pub letter: Letter,
    pub committed: bool,
}

/// A drag ended with no anchor in range; the tile animates back.
#[derive(Event)]
pub struct ReturnEvent;

/// Entry point for the game
pub fn run() {
    let mut app = game_helpers::get_default_app(env!("CARGO_PKG_NAME"));

    app.init_state::<GameState>()
        .init_resource::<SnapConfig>()
        .init_resource::<HighlightState>()
        .add_event::<SnapEvent>()
        .add_event::<ReturnEvent>()
        .add_systems(Startup, setup_camera)
        // Welcome state
        .add_systems(OnEnter(GameState::Welcome), welcome::spawn_welcome)
        .add_systems(
            Update,
            welcome::handle_welcome_input.run_if(in_state(GameState::Welcome)),
        )
        .add_systems(OnExit(GameState::Welcome), despawn_welcome_screen)
        // Playing state
        .add_systems(
            OnEnter(GameState::Playing),
            (tile::setup_session, tile::spawn_board).chain(),
        )
        .add_systems(
            Update,
            (
                (
                    input::handle_drag_start,
                    input::handle_drag_move,
                    input::handle_drag_end,
                )
                    .chain(),
                tile::handle_snap_events,
                tile::handle_return_events,
                tile::animate_return,
                tile::update_tile_visuals,
                tile::update_anchor_visuals,
                tile::update_readouts,
                tile::draw_connecting_line,
                tile::check_complete,
            )
                .run_if(in_state(GameState::Playing)),
        )
        .add_systems(OnExit(GameState::Playing), tile::cleanup_board)
        // Complete state
        .add_systems(OnEnter(GameState::Complete), stage::spawn_complete_screen)
        .add_systems(
            Update,
            stage::handle_complete_input.run_if(in_state(GameState::Complete)),
        )
        .add_systems(OnExit(GameState::Complete), stage::cleanup_complete_screen);

    app.run();
}

/// Sets up the main 2D camera
fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
