use bevy::prelude::*;

use crate::letter::Letter;

/// A fixed drop point. `used` flips at most once, on the first snap.
#[derive(Debug, Clone)]
pub struct Anchor {
    position: Vec2,
    used: bool,
}

impl Anchor {
    const fn new(position: Vec2) -> Self {
        Self {
            position,
            used: false,
        }
    }

    pub const fn position(&self) -> Vec2 {
        self.position
    }

    pub const fn is_used(&self) -> bool {
        self.used
    }
}

/// One committed letter, in the order the player locked it in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchoredLetter {
    pub letter: Letter,
    pub position: Vec2,
}

/// Per-move feedback while a drag is live. The near anchor is purely visual
/// and may change from anchor to anchor as the pointer moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragUpdate {
    pub tile_center: Vec2,
    pub letter: Letter,
    pub near_anchor: Option<usize>,
}

/// How a drag resolved when the pointer was released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// The tile landed within an anchor's capture radius. `committed` is true
    /// only the first time that anchor is snapped to.
    Snapped {
        anchor_index: usize,
        letter: Letter,
        committed: bool,
    },
    /// No anchor qualified; the tile goes back to the current anchor point.
    Returned,
}

/// The single live interaction session: the drag-to-letter mapping, the
/// anchor snap decision, and the accumulated path of committed letters.
///
/// The session is pure state plus geometry. Pointer events are fed in through
/// `begin_drag`/`drag_to`/`end_drag`; rendering reads the result and never
/// writes back.
#[derive(Resource, Debug)]
pub struct DragSession {
    anchors: Vec<Anchor>,
    start_letter: Letter,
    current_letter: Letter,
    anchor_position: Vec2,
    grab_offset: Option<Vec2>,
    anchored_letters: Vec<AnchoredLetter>,
    distance_per_letter: f32,
    snap_threshold: f32,
}

impl DragSession {
    pub fn new(
        spawn_point: Vec2,
        anchor_positions: impl IntoIterator<Item = Vec2>,
        distance_per_letter: f32,
        snap_threshold: f32,
    ) -> Self {
        Self {
            anchors: anchor_positions.into_iter().map(Anchor::new).collect(),
            start_letter: Letter::A,
            current_letter: Letter::A,
            anchor_position: spawn_point,
            grab_offset: None,
            anchored_letters: Vec::new(),
            distance_per_letter,
            snap_threshold,
        }
    }

    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    pub const fn start_letter(&self) -> Letter {
        self.start_letter
    }

    pub const fn current_letter(&self) -> Letter {
        self.current_letter
    }

    /// The most recently committed anchor point, or the spawn point before
    /// any commit. This is the baseline the drag distance is measured from.
    pub const fn anchor_position(&self) -> Vec2 {
        self.anchor_position
    }

    pub const fn is_dragging(&self) -> bool {
        self.grab_offset.is_some()
    }

    pub fn anchored_letters(&self) -> &[AnchoredLetter] {
        &self.anchored_letters
    }

    pub fn is_complete(&self) -> bool {
        self.anchored_letters.len() == self.anchors.len()
    }

    /// The committed letters read off in commit order.
    pub fn word(&self) -> String {
        self.anchored_letters
            .iter()
            .map(|anchored| anchored.letter.as_char())
            .collect()
    }

    /// First anchor (in creation order) strictly within the snap threshold.
    /// Deliberately first-match rather than nearest-match, and deliberately
    /// not excluding already-used anchors.
    pub fn find_near_anchor(&self, point: Vec2) -> Option<usize> {
        self.anchors
            .iter()
            .position(|anchor| anchor.position.distance(point) < self.snap_threshold)
    }

    /// Starts a drag, capturing the pointer-to-tile-center offset so the tile
    /// keeps tracking the grab point rather than jumping to center on the
    /// first move. Ignored if a drag is already live.
    pub fn begin_drag(&mut self, pointer: Vec2, tile_center: Vec2) -> bool {
        if self.is_dragging() {
            return false;
        }
        self.grab_offset = Some(pointer - tile_center);
        true
    }

    /// Feeds a pointer move into the live drag: recomputes the tile center,
    /// the displayed letter, and the near-anchor highlight. A no-op when no
    /// drag is in progress.
    pub fn drag_to(&mut self, pointer: Vec2) -> Option<DragUpdate> {
        let offset = self.grab_offset?;
        let tile_center = pointer - offset;
        let distance = self.anchor_position.distance(tile_center);
        self.current_letter = self
            .start_letter
            .advanced_by_distance(distance, self.distance_per_letter);
        Some(DragUpdate {
            tile_center,
            letter: self.current_letter,
            near_anchor: self.find_near_anchor(tile_center),
        })
    }

    /// Resolves the drag against the released pointer position.
    pub fn end_drag(&mut self, pointer: Vec2) -> Option<DragOutcome> {
        let offset = self.grab_offset?;
        self.end_drag_at_center(pointer - offset)
    }

    /// Resolves the drag against a known final tile center. Used directly
    /// when the release event carries no pointer position.
    pub fn end_drag_at_center(&mut self, tile_center: Vec2) -> Option<DragOutcome> {
        self.grab_offset.take()?;

        let Some(anchor_index) = self.find_near_anchor(tile_center) else {
            // Failed drop: discard the in-flight letter, keep everything else.
            self.current_letter = self.start_letter;
            return Some(DragOutcome::Returned);
        };

        let anchor = self.anchors.get_mut(anchor_index)?;
        let committed = !anchor.used;
        if committed {
            anchor.used = true;
            self.anchored_letters.push(AnchoredLetter {
                letter: self.current_letter,
                position: anchor.position,
            });
        }
        // Every snap, first or repeat, moves the baseline to this anchor.
        self.anchor_position = anchor.position;
        self.start_letter = self.current_letter;

        Some(DragOutcome::Snapped {
            anchor_index,
            letter: self.current_letter,
            committed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DISTANCE_PER_LETTER: f32 = 50.0;
    const THRESHOLD: f32 = 31.5;

    fn letter(c: char) -> Letter {
        Letter::try_from(c).expect("test letters are valid")
    }

    fn session(anchors: &[Vec2]) -> DragSession {
        DragSession::new(
            Vec2::ZERO,
            anchors.iter().copied(),
            DISTANCE_PER_LETTER,
            THRESHOLD,
        )
    }

    #[test]
    fn first_match_beats_nearest() {
        let session = session(&[Vec2::new(0.0, 0.0), Vec2::new(5.0, 0.0)]);
        // (4, 0) is nearer to the second anchor, but both are within the
        // threshold and resolution goes by creation order.
        assert_eq!(
            session.find_near_anchor(Vec2::new(4.0, 0.0)),
            Some(0),
            "resolution must be first-match in creation order, not nearest"
        );
    }

    #[test]
    fn threshold_is_strict() {
        let session = session(&[Vec2::new(100.0, 0.0)]);
        assert_eq!(
            session.find_near_anchor(Vec2::new(100.0 - THRESHOLD, 0.0)),
            None,
            "a tile exactly at the threshold must not qualify"
        );
        assert_eq!(
            session.find_near_anchor(Vec2::new(100.0 - THRESHOLD + 0.1, 0.0)),
            Some(0),
            "a tile strictly inside the threshold must qualify"
        );
    }

    #[test]
    fn move_and_release_without_a_drag_are_no_ops() {
        let mut session = session(&[Vec2::new(100.0, 0.0)]);
        assert_eq!(session.drag_to(Vec2::new(100.0, 0.0)), None);
        assert_eq!(session.end_drag(Vec2::new(100.0, 0.0)), None);
        assert!(session.anchored_letters().is_empty());
    }

    #[test]
    fn grab_offset_keeps_the_tile_under_the_grab_point() {
        let mut session = session(&[]);
        // Grab the tile 10 to the right and 5 above its center.
        assert!(session.begin_drag(Vec2::new(10.0, 5.0), Vec2::ZERO));
        let update = session.drag_to(Vec2::new(10.0, 5.0)).expect("dragging");
        assert_eq!(update.tile_center, Vec2::ZERO, "no jump on first move");
        assert_eq!(update.letter, letter('A'));
    }

    #[test]
    fn second_pointer_down_is_ignored_while_dragging() {
        let mut session = session(&[]);
        assert!(session.begin_drag(Vec2::ZERO, Vec2::ZERO));
        assert!(!session.begin_drag(Vec2::new(50.0, 0.0), Vec2::ZERO));
    }

    #[test]
    fn letter_follows_distance_while_dragging() {
        let mut session = session(&[]);
        session.begin_drag(Vec2::ZERO, Vec2::ZERO);
        let update = session.drag_to(Vec2::new(0.0, 75.0)).expect("dragging");
        assert_eq!(update.letter, letter('B'), "75 of distance is one step");
        assert_eq!(session.current_letter(), letter('B'));
        // Dragging back reduces the distance and the letter follows.
        let update = session.drag_to(Vec2::new(0.0, 20.0)).expect("dragging");
        assert_eq!(update.letter, letter('A'));
    }

    #[test]
    fn first_snap_commits_exactly_once() {
        let anchor = Vec2::new(125.0, 0.0);
        let mut session = session(&[anchor]);

        session.begin_drag(Vec2::ZERO, Vec2::ZERO);
        session.drag_to(anchor);
        let outcome = session.end_drag(anchor).expect("dragging");

        assert_eq!(
            outcome,
            DragOutcome::Snapped {
                anchor_index: 0,
                letter: letter('C'),
                committed: true,
            }
        );
        assert_eq!(
            session.anchored_letters(),
            &[AnchoredLetter {
                letter: letter('C'),
                position: anchor,
            }]
        );
        assert!(session.anchors()[0].is_used());
        assert_eq!(session.start_letter(), letter('C'));
        assert_eq!(session.anchor_position(), anchor);
        assert!(!session.is_dragging());
    }

    #[test]
    fn failed_drop_returns_and_resets_the_letter() {
        let anchor = Vec2::new(125.0, 0.0);
        let mut session = session(&[anchor]);

        session.begin_drag(Vec2::ZERO, Vec2::ZERO);
        session.drag_to(Vec2::new(0.0, 200.0));
        assert_eq!(session.current_letter(), letter('E'));
        let outcome = session.end_drag(Vec2::new(0.0, 200.0)).expect("dragging");

        assert_eq!(outcome, DragOutcome::Returned);
        assert_eq!(session.current_letter(), letter('A'), "in-flight letter discarded");
        assert_eq!(session.start_letter(), letter('A'));
        assert_eq!(session.anchor_position(), Vec2::ZERO);
        assert!(session.anchored_letters().is_empty());
        assert!(!session.anchors()[0].is_used());
    }

    #[test]
    fn resnap_does_not_recommit() {
        let anchor = Vec2::new(125.0, 0.0);
        let mut session = session(&[anchor]);

        session.begin_drag(Vec2::ZERO, Vec2::ZERO);
        session.drag_to(anchor);
        session.end_drag(anchor);
        assert_eq!(session.word(), "C");

        // Drag away and drop back onto the same, now-used anchor. The drag
        // covered no distance, so the displayed letter stays at the baseline.
        session.begin_drag(anchor, anchor);
        session.drag_to(anchor + Vec2::new(10.0, 0.0));
        let outcome = session
            .end_drag(anchor + Vec2::new(10.0, 0.0))
            .expect("dragging");

        assert_eq!(
            outcome,
            DragOutcome::Snapped {
                anchor_index: 0,
                letter: letter('C'),
                committed: false,
            }
        );
        assert_eq!(session.anchored_letters().len(), 1, "commit log must not grow");
        assert_eq!(session.start_letter(), letter('C'));
    }

    #[test]
    fn resnap_overrides_the_baseline_with_the_dragged_letter() {
        // Two anchors: commit at the first, then swing out far enough to
        // advance the letter and drop back onto the first anchor again. The
        // baseline follows the displayed letter; the commit log does not.
        let a0 = Vec2::new(125.0, 0.0);
        let a1 = Vec2::new(125.0, 300.0);
        let mut session = session(&[a0, a1]);

        session.begin_drag(Vec2::ZERO, Vec2::ZERO);
        session.drag_to(a0);
        session.end_drag(a0);
        assert_eq!(session.start_letter(), letter('C'));

        session.begin_drag(a0, a0);
        session.drag_to(a0 + Vec2::new(0.0, 60.0));
        let outcome = session.end_drag(a0 + Vec2::new(0.0, 10.0)).expect("dragging");
        assert_eq!(
            outcome,
            DragOutcome::Snapped {
                anchor_index: 0,
                letter: letter('D'),
                committed: false,
            }
        );
        assert_eq!(session.start_letter(), letter('D'));
        assert_eq!(session.word(), "C", "the recorded commit keeps its letter");
    }

    #[test]
    fn chain_of_commits_builds_the_word_in_order() {
        let a0 = Vec2::new(0.0, 125.0);
        let a1 = Vec2::new(0.0, 225.0);
        let mut session = session(&[a0, a1]);

        session.begin_drag(Vec2::ZERO, Vec2::ZERO);
        session.drag_to(a0);
        session.end_drag(a0); // distance 125 -> C

        session.begin_drag(a0, a0);
        session.drag_to(a1);
        session.end_drag(a1); // distance 100 -> 2 more steps -> E

        assert_eq!(session.word(), "CE");
        assert!(session.is_complete());
    }

    #[test]
    fn release_without_a_position_resolves_at_the_tile_center() {
        let anchor = Vec2::new(125.0, 0.0);
        let mut session = session(&[anchor]);

        session.begin_drag(Vec2::ZERO, Vec2::ZERO);
        session.drag_to(anchor);
        let outcome = session.end_drag_at_center(anchor).expect("dragging");
        assert!(matches!(outcome, DragOutcome::Snapped { committed: true, .. }));
    }
}
