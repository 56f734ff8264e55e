use glam::Vec2;
use crate::api::types::ImageId;
use super::surface::{Fill, Rect, Surface};

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rect),
    Circle { center: Vec2, radius: f32, fill: Fill },
    Image { image: ImageId, dest: Rect },
}

/// Headless surface that records every call in order.
/// Lets frame composition be asserted without a canvas.
#[derive(Debug, Default)]
pub struct CommandBuffer {
    commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(64),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Recorded circle fills as (center, radius, fill), in draw order.
    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, &Fill)> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Circle { center, radius, fill } => Some((*center, *radius, fill)),
            _ => None,
        })
    }
}

impl Surface for CommandBuffer {
    fn clear_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Clear(rect));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: &Fill) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            fill: fill.clone(),
        });
    }

    fn draw_image(&mut self, image: ImageId, dest: Rect) {
        self.commands.push(DrawCommand::Image { image, dest });
    }
}
