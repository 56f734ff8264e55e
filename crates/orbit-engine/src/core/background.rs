use glam::Vec2;
use crate::api::types::ImageId;
use crate::renderer::surface::Rect;

/// A decoded background image: host handle plus intrinsic pixel size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundImage {
    pub image: ImageId,
    pub width: f32,
    pub height: f32,
}

impl BackgroundImage {
    /// Returns `None` for a zero, negative or non-finite size,
    /// which is what a half-decoded or broken image reports.
    pub fn new(image: ImageId, width: f32, height: f32) -> Option<Self> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if valid(width) && valid(height) {
            Some(Self { image, width, height })
        } else {
            None
        }
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }

    /// Aspect-fit ("contain") destination rect inside `surface`.
    ///
    /// Fits to the surface width first; if that overflows the height,
    /// fits to the height instead. The result is centered on both axes.
    pub fn fit_contain(&self, surface: Vec2) -> Rect {
        let aspect = self.aspect_ratio();
        let mut w = surface.x;
        let mut h = surface.x / aspect;
        if h > surface.y {
            h = surface.y;
            w = surface.y * aspect;
        }
        Rect::new((surface.x - w) / 2.0, (surface.y - h) / 2.0, w, h)
    }
}
