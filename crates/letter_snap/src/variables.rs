use bevy::prelude::*;
use game_helpers::{WINDOW_HEIGHT, WINDOW_WIDTH};

/// Drag distance corresponding to one alphabet step. Higher means the player
/// needs a longer drag to change the letter.
pub const DISTANCE_PER_LETTER: f32 = 50.0;
pub const TILE_SIZE: f32 = 42.0;
pub const ANCHOR_RADIUS: f32 = 10.5;

/// A drop qualifies when the tile center is strictly closer than this.
pub const SNAP_THRESHOLD: f32 = ANCHOR_RADIUS + TILE_SIZE / 2.0;

pub const RETURN_DURATION_SECS: f32 = 0.3;

pub const ANCHOR_Z: f32 = 0.0;
pub const TILE_Z: f32 = 10.0;
pub const LABEL_Z: f32 = 1.0;

pub const TILE_COLOR: Color = Color::srgb(0.95, 0.9, 0.75);
pub const TILE_DRAG_COLOR: Color = Color::srgb(1.0, 0.95, 0.8);
pub const TILE_NEAR_COLOR: Color = Color::srgb(0.8, 1.0, 0.8);
pub const TILE_RETURN_COLOR: Color = Color::srgb(0.85, 0.8, 0.7);
pub const ANCHOR_IDLE_COLOR: Color = Color::srgb(0.4, 0.4, 0.45);
pub const ANCHOR_HIGHLIGHT_COLOR: Color = Color::srgb(0.4, 0.9, 0.4);
pub const ANCHOR_COMMITTED_COLOR: Color = Color::srgb(0.9, 0.7, 0.2);
pub const LINE_COLOR: Color = Color::srgba(0.6, 0.6, 0.6, 0.4);

/// The fixed tunables, also available as a resource so systems do not reach
/// for the constants directly.
#[derive(Resource, Clone, Copy, Debug)]
pub struct SnapConfig {
    pub distance_per_letter: f32,
    pub tile_size: f32,
    pub anchor_radius: f32,
}

impl SnapConfig {
    pub const fn snap_threshold(&self) -> f32 {
        self.anchor_radius + self.tile_size / 2.0
    }
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            distance_per_letter: DISTANCE_PER_LETTER,
            tile_size: TILE_SIZE,
            anchor_radius: ANCHOR_RADIUS,
        }
    }
}

/// Where the tile first appears: centered horizontally, near the top.
pub fn spawn_point() -> Vec2 {
    Vec2::new(0.0, WINDOW_HEIGHT / 2.0 - 150.0)
}

/// The five fixed drop points, in creation order. Anchor resolution scans
/// them in this order, so the order is part of the game's behavior.
pub fn anchor_layout() -> [Vec2; 5] {
    let w = WINDOW_WIDTH;
    let h = WINDOW_HEIGHT;
    // Portrait layout, expressed top-down and converted to world coordinates
    // with the origin at the screen center.
    let from_top = |x: f32, y: f32| Vec2::new(x - w / 2.0, h / 2.0 - y);
    [
        from_top(w / 2.0, h / 3.0),
        from_top(w / 2.0, h / 2.0),
        from_top(w / 3.0, h * 2.0 / 3.0),
        from_top(w * 2.0 / 3.0, h * 2.0 / 3.0),
        from_top(w / 2.0, h - 120.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_matches_anchor_radius_plus_half_tile() {
        assert!(
            (SNAP_THRESHOLD - 31.5).abs() < f32::EPSILON,
            "threshold drifted from the tuned value"
        );
        let config = SnapConfig::default();
        assert!(
            (config.snap_threshold() - SNAP_THRESHOLD).abs() < f32::EPSILON,
            "resource and constant must agree"
        );
    }

    #[test]
    fn layout_has_five_anchors_inside_the_window() {
        let anchors = anchor_layout();
        assert_eq!(anchors.len(), 5, "the board has five fixed anchors");
        for anchor in anchors {
            assert!(
                anchor.x.abs() <= WINDOW_WIDTH / 2.0 && anchor.y.abs() <= WINDOW_HEIGHT / 2.0,
                "anchor {anchor} fell outside the window"
            );
        }
    }
}
