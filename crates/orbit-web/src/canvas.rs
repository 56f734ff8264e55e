//! `Surface` implementation on a Canvas2D context.

use std::collections::HashMap;
use std::f64::consts::TAU;
use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};
use orbit_engine::{Fill, ImageId, Rect, Surface};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    /// Decoded images the scene may refer to by handle.
    images: HashMap<ImageId, HtmlImageElement>,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("not a 2d context"))?;

        Ok(Self {
            canvas,
            ctx,
            images: HashMap::new(),
        })
    }

    /// Backing-store size in canvas pixels.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    /// Make `image` the only drawable image. A background swap
    /// never needs the previous one again.
    pub fn replace_images(&mut self, id: ImageId, image: HtmlImageElement) {
        self.images.clear();
        self.images.insert(id, image);
    }

    fn apply_fill(&self, fill: &Fill) -> Result<(), JsValue> {
        match fill {
            Fill::Solid(color) => self.ctx.set_fill_style_str(&color.to_css()),
            Fill::Radial(g) => {
                let gradient = self.ctx.create_radial_gradient(
                    g.inner_center.x as f64,
                    g.inner_center.y as f64,
                    g.inner_radius as f64,
                    g.outer_center.x as f64,
                    g.outer_center.y as f64,
                    g.outer_radius as f64,
                )?;
                for stop in &g.stops {
                    gradient.add_color_stop(stop.offset, &stop.color.to_css())?;
                }
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
        }
        Ok(())
    }
}

impl Surface for CanvasSurface {
    fn clear_rect(&mut self, rect: Rect) {
        self.ctx
            .clear_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: &Fill) {
        if let Err(err) = self.apply_fill(fill) {
            log::warn!("fill skipped: {err:?}");
            return;
        }
        self.ctx.begin_path();
        if let Err(err) = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
        {
            log::warn!("arc skipped: {err:?}");
            return;
        }
        self.ctx.fill();
        self.ctx.close_path();
    }

    fn draw_image(&mut self, image: ImageId, dest: Rect) {
        let Some(img) = self.images.get(&image) else {
            return;
        };
        // A half-decoded image draws nothing useful.
        if !img.complete() || img.natural_width() == 0 {
            return;
        }
        if let Err(err) = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            img,
            dest.x as f64,
            dest.y as f64,
            dest.w as f64,
            dest.h as f64,
        ) {
            log::warn!("background skipped: {err:?}");
        }
    }
}
