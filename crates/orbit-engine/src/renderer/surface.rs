//! Drawing-surface contract between the headless scene and a host renderer.
//!
//! The scene never touches browser types. The web crate implements
//! [`Surface`] on a `CanvasRenderingContext2d`; tests use the recording
//! [`CommandBuffer`](super::commands::CommandBuffer).
//!
//! All coordinates are surface-local and real-valued.

use glam::Vec2;
use crate::api::types::ImageId;
use crate::components::color::Color;

/// Axis-aligned rectangle in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle anchored at the origin covering `size`.
    pub fn from_size(size: Vec2) -> Self {
        Self::new(0.0, 0.0, size.x, size.y)
    }
}

/// A color stop at `offset` (0.0 - 1.0) along a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

/// Two-circle radial gradient, the same model as Canvas2D `createRadialGradient`.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub inner_center: Vec2,
    pub inner_radius: f32,
    pub outer_center: Vec2,
    pub outer_radius: f32,
    pub stops: Vec<GradientStop>,
}

impl RadialGradient {
    pub fn new(inner_center: Vec2, inner_radius: f32, outer_center: Vec2, outer_radius: f32) -> Self {
        Self {
            inner_center,
            inner_radius,
            outer_center,
            outer_radius,
            stops: Vec::with_capacity(3),
        }
    }

    pub fn with_stop(mut self, offset: f32, color: Color) -> Self {
        self.stops.push(GradientStop { offset, color });
        self
    }
}

/// How a filled shape is painted.
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    Solid(Color),
    Radial(RadialGradient),
}

/// Primitive drawing operations a host must provide.
pub trait Surface {
    /// Clear `rect` to transparent.
    fn clear_rect(&mut self, rect: Rect);

    /// Fill a full circle (arc 0..2π) centered at `center`.
    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: &Fill);

    /// Draw a previously decoded image scaled into `dest`.
    /// Hosts that do not know `image` skip the call.
    fn draw_image(&mut self, image: ImageId, dest: Rect);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_from_size_anchors_at_origin() {
        assert_eq!(Rect::from_size(Vec2::new(800.0, 600.0)), Rect::new(0.0, 0.0, 800.0, 600.0));
    }

    #[test]
    fn gradient_stops_keep_order() {
        let g = RadialGradient::new(Vec2::ZERO, 0.0, Vec2::ONE, 10.0)
            .with_stop(0.0, Color::WHITE)
            .with_stop(1.0, Color::BLACK);
        assert_eq!(g.stops.len(), 2);
        assert_eq!(g.stops[0].color, Color::WHITE);
        assert_eq!(g.stops[1].offset, 1.0);
    }
}
