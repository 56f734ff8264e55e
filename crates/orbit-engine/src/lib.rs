pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;
pub mod playground;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::types::{EntityId, ImageId, GameEvent};
pub use components::circle::Circle;
pub use components::color::Color;
pub use core::background::BackgroundImage;
pub use core::scene::Scene;
pub use core::time::FixedTimestep;
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::surface::{Surface, Fill, RadialGradient, GradientStop, Rect};
pub use renderer::commands::{CommandBuffer, DrawCommand};
pub use systems::interaction::{DragController, DragState};
pub use systems::render::render_frame;
pub use systems::rng::Rng;
pub use systems::spawn::{SpawnConfig, random_circle};
pub use playground::OrbitPlayground;
