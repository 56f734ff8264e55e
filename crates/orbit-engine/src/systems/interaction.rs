//! Pointer-driven drag state machine.
//!
//! `Idle --down on circle--> Dragging --up--> Idle`. While dragging, every
//! move places the target at `pointer - offset`, where `offset` was captured
//! on the down event, so the grab point stays under the cursor with no drift.

use glam::Vec2;
use crate::api::types::EntityId;
use crate::core::scene::Scene;

/// The current drag session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    /// No circle is held.
    Idle,
    /// `target` follows the pointer, kept `offset` away from it.
    Dragging { target: EntityId, offset: Vec2 },
}

/// What a pointer event did to the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// Nothing changed.
    None,
    /// A circle was grabbed at `pointer`.
    Started { target: EntityId, pointer: Vec2 },
    /// The held circle moved to `pos`.
    Moved { target: EntityId, pos: Vec2 },
    /// The held circle was released at `pos`.
    Ended { target: EntityId, pos: Vec2 },
}

pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// The circle being dragged, if any.
    pub fn target(&self) -> Option<EntityId> {
        match self.state {
            DragState::Dragging { target, .. } => Some(target),
            DragState::Idle => None,
        }
    }

    /// Grab the topmost circle under `pointer`.
    /// A down event while already dragging means the host lost the matching
    /// up event; the old session is replaced by whatever this one hits.
    pub fn pointer_down(&mut self, scene: &Scene, pointer: Vec2) -> DragOutcome {
        match scene.hit_test(pointer) {
            Some(circle) => {
                let target = circle.id;
                self.state = DragState::Dragging {
                    target,
                    offset: pointer - circle.pos,
                };
                log::debug!("drag start: {:?} at ({}, {})", target, pointer.x, pointer.y);
                DragOutcome::Started { target, pointer }
            }
            None => {
                // A miss also ends any stale session left by a lost up event.
                self.state = DragState::Idle;
                DragOutcome::None
            }
        }
    }

    /// Move the held circle so the grab point tracks `pointer`.
    pub fn pointer_move(&mut self, scene: &mut Scene, pointer: Vec2) -> DragOutcome {
        let DragState::Dragging { target, offset } = self.state else {
            return DragOutcome::None;
        };
        match scene.get_mut(target) {
            Some(circle) => {
                circle.pos = pointer - offset;
                DragOutcome::Moved { target, pos: circle.pos }
            }
            None => DragOutcome::None,
        }
    }

    /// End the drag session, if one is active.
    pub fn pointer_up(&mut self, scene: &Scene) -> DragOutcome {
        let previous = std::mem::replace(&mut self.state, DragState::Idle);
        let DragState::Dragging { target, .. } = previous else {
            return DragOutcome::None;
        };
        log::debug!("drag end: {:?}", target);
        match scene.get(target) {
            Some(circle) => DragOutcome::Ended { target, pos: circle.pos },
            None => DragOutcome::None,
        }
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::circle::Circle;
    use crate::components::color::Color;

    fn scene_with(circles: &[(u32, f32, f32, f32)]) -> Scene {
        let mut scene = Scene::new();
        for &(id, x, y, r) in circles {
            scene.add(Circle::new(EntityId(id), Vec2::new(x, y), r, Color::WHITE));
        }
        scene
    }

    #[test]
    fn down_on_empty_space_stays_idle() {
        let scene = scene_with(&[(1, 100.0, 100.0, 20.0)]);
        let mut drag = DragController::new();
        assert_eq!(drag.pointer_down(&scene, Vec2::new(400.0, 400.0)), DragOutcome::None);
        assert_eq!(drag.state(), DragState::Idle);
    }

    #[test]
    fn missed_down_ends_stale_session() {
        let mut scene = scene_with(&[(1, 100.0, 100.0, 20.0)]);
        let mut drag = DragController::new();
        drag.pointer_down(&scene, Vec2::new(100.0, 100.0));
        assert_eq!(drag.pointer_down(&scene, Vec2::new(400.0, 400.0)), DragOutcome::None);
        assert_eq!(drag.state(), DragState::Idle);
        drag.pointer_move(&mut scene, Vec2::new(10.0, 10.0));
        assert_eq!(scene.get(EntityId(1)).unwrap().pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn down_captures_offset() {
        let scene = scene_with(&[(1, 100.0, 100.0, 20.0)]);
        let mut drag = DragController::new();
        drag.pointer_down(&scene, Vec2::new(105.0, 93.0));
        assert_eq!(
            drag.state(),
            DragState::Dragging { target: EntityId(1), offset: Vec2::new(5.0, -7.0) }
        );
    }

    #[test]
    fn moves_track_pointer_without_drift() {
        let mut scene = scene_with(&[(1, 100.0, 100.0, 20.0)]);
        let mut drag = DragController::new();
        drag.pointer_down(&scene, Vec2::new(110.0, 90.0));

        let path = [(111.3, 92.7), (150.0, 140.0), (37.5, 12.25), (300.1, 299.9)];
        for (px, py) in path {
            drag.pointer_move(&mut scene, Vec2::new(px, py));
            let pos = scene.get(EntityId(1)).unwrap().pos;
            assert_eq!(pos, Vec2::new(px, py) - Vec2::new(10.0, -10.0));
        }
    }

    #[test]
    fn up_clears_session_and_later_moves_do_nothing() {
        let mut scene = scene_with(&[(1, 100.0, 100.0, 20.0)]);
        let mut drag = DragController::new();
        drag.pointer_down(&scene, Vec2::new(100.0, 100.0));
        drag.pointer_move(&mut scene, Vec2::new(120.0, 130.0));
        assert_eq!(
            drag.pointer_up(&scene),
            DragOutcome::Ended { target: EntityId(1), pos: Vec2::new(120.0, 130.0) }
        );
        assert!(!drag.is_dragging());

        assert_eq!(drag.pointer_move(&mut scene, Vec2::new(500.0, 500.0)), DragOutcome::None);
        assert_eq!(scene.get(EntityId(1)).unwrap().pos, Vec2::new(120.0, 130.0));
    }

    #[test]
    fn idle_move_and_up_are_noops() {
        let mut scene = scene_with(&[(1, 100.0, 100.0, 20.0)]);
        let mut drag = DragController::new();
        assert_eq!(drag.pointer_move(&mut scene, Vec2::new(100.0, 100.0)), DragOutcome::None);
        assert_eq!(drag.pointer_up(&scene), DragOutcome::None);
        assert_eq!(scene.get(EntityId(1)).unwrap().pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn grabs_topmost_of_overlapping() {
        let scene = scene_with(&[(1, 100.0, 100.0, 30.0), (2, 120.0, 100.0, 30.0)]);
        let mut drag = DragController::new();
        drag.pointer_down(&scene, Vec2::new(110.0, 100.0));
        assert_eq!(drag.target(), Some(EntityId(2)));
    }

    #[test]
    fn second_down_retargets() {
        let scene = scene_with(&[(1, 100.0, 100.0, 20.0), (2, 300.0, 300.0, 20.0)]);
        let mut drag = DragController::new();
        drag.pointer_down(&scene, Vec2::new(100.0, 100.0));
        drag.pointer_down(&scene, Vec2::new(300.0, 300.0));
        assert_eq!(drag.target(), Some(EntityId(2)));
        drag.pointer_down(&scene, Vec2::new(0.0, 0.0));
        assert_eq!(drag.target(), None);
    }
}
