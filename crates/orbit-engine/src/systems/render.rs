use crate::api::game::EngineContext;
use crate::renderer::surface::{Rect, Surface};

/// Compose one frame: clear, aspect-fit background (if any), then every circle.
pub fn render_frame(ctx: &EngineContext, surface: &mut dyn Surface) {
    let world = ctx.world_size();
    surface.clear_rect(Rect::from_size(world));

    if let Some(background) = &ctx.background {
        surface.draw_image(background.image, background.fit_contain(world));
    }

    ctx.scene.render_all(surface);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use crate::api::types::{EntityId, ImageId};
    use crate::components::circle::Circle;
    use crate::components::color::Color;
    use crate::core::background::BackgroundImage;
    use crate::renderer::commands::{CommandBuffer, DrawCommand};

    #[test]
    fn empty_scene_only_clears() {
        let ctx = EngineContext::default();
        let mut buf = CommandBuffer::new();
        render_frame(&ctx, &mut buf);
        assert_eq!(buf.commands(), &[DrawCommand::Clear(Rect::new(0.0, 0.0, 800.0, 600.0))]);
    }

    #[test]
    fn background_drawn_between_clear_and_circles() {
        let mut ctx = EngineContext::default();
        ctx.set_background(BackgroundImage::new(ImageId(5), 400.0, 100.0).unwrap());
        ctx.scene.add(Circle::new(EntityId(1), Vec2::new(50.0, 50.0), 10.0, Color::WHITE));

        let mut buf = CommandBuffer::new();
        render_frame(&ctx, &mut buf);

        let cmds = buf.commands();
        assert_eq!(cmds.len(), 4);
        assert!(matches!(cmds[0], DrawCommand::Clear(_)));
        assert_eq!(
            cmds[1],
            DrawCommand::Image { image: ImageId(5), dest: Rect::new(0.0, 200.0, 800.0, 200.0) }
        );
        assert!(matches!(cmds[2], DrawCommand::Circle { radius, .. } if radius == 10.0));
        assert!(matches!(cmds[3], DrawCommand::Circle { .. }));
    }

    #[test]
    fn clear_follows_world_size() {
        let mut ctx = EngineContext::default();
        ctx.set_world_size(320.0, 240.0);
        let mut buf = CommandBuffer::new();
        render_frame(&ctx, &mut buf);
        assert_eq!(buf.commands()[0], DrawCommand::Clear(Rect::new(0.0, 0.0, 320.0, 240.0)));
    }
}
