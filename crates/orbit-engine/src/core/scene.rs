use glam::Vec2;
use crate::api::types::EntityId;
use crate::components::circle::Circle;
use crate::renderer::surface::Surface;

/// Insertion-ordered circle storage using a flat Vec.
/// Draw order is insertion order, so the newest circle is on top;
/// hit-testing walks the other way so the topmost circle wins.
pub struct Scene {
    circles: Vec<Circle>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            circles: Vec::with_capacity(64),
        }
    }

    /// Add a circle on top of everything already in the scene.
    pub fn add(&mut self, circle: Circle) {
        self.circles.push(circle);
    }

    /// Get a reference to a circle by ID.
    pub fn get(&self, id: EntityId) -> Option<&Circle> {
        self.circles.iter().find(|c| c.id == id)
    }

    /// Get a mutable reference to a circle by ID.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Circle> {
        self.circles.iter_mut().find(|c| c.id == id)
    }

    /// The topmost (most recently added) circle containing `point`.
    pub fn hit_test(&self, point: Vec2) -> Option<&Circle> {
        self.circles.iter().rev().find(|c| c.contains_point(point))
    }

    /// Advance every moon by one step.
    pub fn update_all(&mut self) {
        for circle in &mut self.circles {
            circle.update();
        }
    }

    /// Draw every circle, oldest first.
    pub fn render_all(&self, surface: &mut dyn Surface) {
        for circle in &self.circles {
            circle.render(surface);
        }
    }

    /// Iterate over circles in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Circle> {
        self.circles.iter()
    }

    /// Number of circles in the scene.
    pub fn len(&self) -> usize {
        self.circles.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
