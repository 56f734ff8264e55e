//! Orbit Playground: user-spawned shaded circles, each with an orbiting moon,
//! draggable over an optional aspect-fit background image.

use glam::Vec2;
use crate::api::game::{EngineContext, Game, GameConfig};
use crate::api::types::{EntityId, GameEvent};
use crate::core::background::BackgroundImage;
use crate::input::queue::InputEvent;
use crate::systems::interaction::{DragController, DragOutcome};
use crate::systems::spawn::random_circle;

pub struct OrbitPlayground {
    config: GameConfig,
    drag: DragController,
}

impl OrbitPlayground {
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self {
            config,
            drag: DragController::new(),
        }
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    /// Add a random circle somewhere on the surface.
    pub fn spawn_circle(&mut self, ctx: &mut EngineContext) -> EntityId {
        let id = ctx.next_id();
        let world = ctx.world_size();
        let circle = random_circle(&mut ctx.rng, id, world, &self.config.spawn);
        log::debug!(
            "spawn {:?} at ({:.1}, {:.1}) r={:.1}",
            id,
            circle.pos.x,
            circle.pos.y,
            circle.radius
        );
        ctx.emit_event(GameEvent::new(
            GameEvent::CIRCLE_SPAWNED,
            id.0 as f32,
            circle.pos.x,
            circle.pos.y,
        ));
        ctx.scene.add(circle);
        id
    }

    fn report(ctx: &mut EngineContext, outcome: DragOutcome) {
        match outcome {
            DragOutcome::Started { target, pointer } => ctx.emit_event(GameEvent::new(
                GameEvent::DRAG_STARTED,
                target.0 as f32,
                pointer.x,
                pointer.y,
            )),
            DragOutcome::Ended { target, pos } => ctx.emit_event(GameEvent::new(
                GameEvent::DRAG_ENDED,
                target.0 as f32,
                pos.x,
                pos.y,
            )),
            DragOutcome::Moved { .. } | DragOutcome::None => {}
        }
    }
}

impl Default for OrbitPlayground {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for OrbitPlayground {
    fn config(&self) -> GameConfig {
        self.config.clone()
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        let world = ctx.world_size();
        log::info!("orbit playground: {}x{} surface", world.x, world.y);
    }

    fn handle_input(&mut self, ctx: &mut EngineContext, event: &InputEvent) {
        match *event {
            InputEvent::PointerDown { x, y } => {
                let outcome = self.drag.pointer_down(&ctx.scene, Vec2::new(x, y));
                Self::report(ctx, outcome);
            }
            InputEvent::PointerMove { x, y } => {
                self.drag.pointer_move(&mut ctx.scene, Vec2::new(x, y));
            }
            InputEvent::PointerUp { .. } => {
                let outcome = self.drag.pointer_up(&ctx.scene);
                Self::report(ctx, outcome);
            }
            InputEvent::SpawnCircle => {
                self.spawn_circle(ctx);
            }
            InputEvent::BackgroundLoaded { image, width, height } => {
                match BackgroundImage::new(image, width, height) {
                    Some(background) => {
                        ctx.set_background(background);
                        ctx.emit_event(GameEvent::new(
                            GameEvent::BACKGROUND_CHANGED,
                            image.0 as f32,
                            width,
                            height,
                        ));
                    }
                    None => log::warn!("ignoring background {:?} with size {}x{}", image, width, height),
                }
            }
            InputEvent::Resize { width, height } => {
                ctx.set_world_size(width, height);
            }
        }
    }

    fn update(&mut self, ctx: &mut EngineContext) {
        ctx.scene.update_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::ImageId;
    use crate::systems::interaction::DragState;

    fn setup() -> (OrbitPlayground, EngineContext) {
        let mut game = OrbitPlayground::new();
        let mut ctx = EngineContext::new(Vec2::new(800.0, 600.0), 99);
        game.init(&mut ctx);
        (game, ctx)
    }

    #[test]
    fn spawn_event_adds_circle_and_reports_it() {
        let (mut game, mut ctx) = setup();
        game.handle_input(&mut ctx, &InputEvent::SpawnCircle);
        assert_eq!(ctx.scene.len(), 1);
        let circle = ctx.scene.iter().next().unwrap();
        assert_eq!(ctx.events.len(), 1);
        assert_eq!(
            ctx.events[0],
            GameEvent::new(GameEvent::CIRCLE_SPAWNED, 1.0, circle.pos.x, circle.pos.y)
        );
    }

    #[test]
    fn drag_events_reported() {
        let (mut game, mut ctx) = setup();
        let id = game.spawn_circle(&mut ctx);
        ctx.clear_frame_data();
        let start = ctx.scene.get(id).unwrap().pos;

        game.handle_input(&mut ctx, &InputEvent::PointerDown { x: start.x, y: start.y });
        game.handle_input(&mut ctx, &InputEvent::PointerMove { x: start.x + 5.0, y: start.y });
        game.handle_input(&mut ctx, &InputEvent::PointerUp { x: start.x + 5.0, y: start.y });

        let kinds: Vec<f32> = ctx.events.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![GameEvent::DRAG_STARTED, GameEvent::DRAG_ENDED]);
        assert_eq!(game.drag().state(), DragState::Idle);
    }

    #[test]
    fn broken_background_ignored() {
        let (mut game, mut ctx) = setup();
        game.handle_input(
            &mut ctx,
            &InputEvent::BackgroundLoaded { image: ImageId(1), width: 0.0, height: 0.0 },
        );
        assert!(ctx.background.is_none());
        assert!(ctx.events.is_empty());

        game.handle_input(
            &mut ctx,
            &InputEvent::BackgroundLoaded { image: ImageId(2), width: 64.0, height: 32.0 },
        );
        assert_eq!(ctx.background.unwrap().image, ImageId(2));
    }

    #[test]
    fn resize_changes_spawn_area() {
        let (mut game, mut ctx) = setup();
        game.handle_input(&mut ctx, &InputEvent::Resize { width: 50.0, height: 40.0 });
        for _ in 0..50 {
            game.handle_input(&mut ctx, &InputEvent::SpawnCircle);
        }
        assert!(ctx.scene.iter().all(|c| c.pos.x < 50.0 && c.pos.y < 40.0));
    }

    #[test]
    fn update_advances_every_moon() {
        let (mut game, mut ctx) = setup();
        game.spawn_circle(&mut ctx);
        game.spawn_circle(&mut ctx);
        let before: Vec<f32> = ctx.scene.iter().map(|c| c.angle).collect();
        game.update(&mut ctx);
        for (c, b) in ctx.scene.iter().zip(before) {
            assert_eq!(c.angle, b + c.orbit_speed);
        }
    }
}
