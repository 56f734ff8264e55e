use glam::Vec2;
use crate::api::types::EntityId;
use crate::components::color::Color;
use crate::renderer::surface::{Fill, RadialGradient, Surface};

/// Radius of the orbiting moon.
pub const MOON_RADIUS: f32 = 5.0;
/// Gap between a circle's edge and its moon's orbit.
pub const ORBIT_GAP: f32 = 10.0;
/// Moon angular speed in radians per fixed step.
pub const ORBIT_SPEED: f32 = 0.02;
/// Gradient offset where the base color sits between highlight and edge.
const BASE_COLOR_STOP: f32 = 0.3;

/// A draggable circle with a moon on a circular orbit.
#[derive(Debug, Clone)]
pub struct Circle {
    /// Unique identifier.
    pub id: EntityId,
    /// Center in surface coordinates.
    pub pos: Vec2,
    pub radius: f32,
    /// Base color of the shaded disc.
    pub color: Color,
    pub moon_radius: f32,
    /// Current moon phase in radians. Grows without wrapping.
    pub angle: f32,
    /// Radians added to `angle` per update.
    pub orbit_speed: f32,
    /// Fixed at construction to `radius + ORBIT_GAP`.
    orbit_radius: f32,
}

impl Circle {
    pub fn new(id: EntityId, pos: Vec2, radius: f32, color: Color) -> Self {
        Self {
            id,
            pos,
            radius,
            color,
            moon_radius: MOON_RADIUS,
            angle: 0.0,
            orbit_speed: ORBIT_SPEED,
            orbit_radius: radius + ORBIT_GAP,
        }
    }

    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    pub fn orbit_radius(&self) -> f32 {
        self.orbit_radius
    }

    /// Inclusive containment: the rim itself counts as inside.
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.pos.distance(point) <= self.radius
    }

    /// Advance the moon by one step.
    pub fn update(&mut self) {
        self.angle += self.orbit_speed;
    }

    /// Moon center at the current phase.
    pub fn moon_pos(&self) -> Vec2 {
        self.pos + Vec2::from_angle(self.angle) * self.orbit_radius
    }

    /// Highlight sits up-left of center, fading through the base color to a black rim.
    pub fn gradient(&self) -> RadialGradient {
        let highlight = self.pos - Vec2::splat(self.radius / 3.0);
        RadialGradient::new(highlight, 0.0, self.pos, self.radius)
            .with_stop(0.0, Color::WHITE)
            .with_stop(BASE_COLOR_STOP, self.color)
            .with_stop(1.0, Color::BLACK)
    }

    /// Draw the shaded disc, then the moon. Reads state only.
    pub fn render(&self, surface: &mut dyn Surface) {
        surface.fill_circle(self.pos, self.radius, &Fill::Radial(self.gradient()));
        surface.fill_circle(self.moon_pos(), self.moon_radius, &Fill::Solid(Color::WHITE));
    }
}
