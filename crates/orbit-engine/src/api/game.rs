use glam::Vec2;
use serde::Deserialize;
use crate::api::types::{EntityId, GameEvent};
use crate::core::background::BackgroundImage;
use crate::core::time::DEFAULT_DT;
use crate::core::scene::Scene;
use crate::input::queue::InputEvent;
use crate::renderer::surface::Surface;
use crate::systems::render::render_frame;
use crate::systems::rng::Rng;
use crate::systems::spawn::SpawnConfig;

/// Engine configuration, provided by the game.
/// Every field has a default, so partial JSON is accepted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Surface width used until the host reports a real size.
    pub world_width: f32,
    /// Surface height used until the host reports a real size.
    pub world_height: f32,
    /// Cap on fixed steps run for one frame (default: 10).
    pub max_steps_per_tick: u32,
    /// RNG seed. `None` lets the host pick one.
    pub seed: Option<u64>,
    /// Random-circle ranges.
    pub spawn: SpawnConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: DEFAULT_DT,
            world_width: 800.0,
            world_height: 600.0,
            max_steps_per_tick: 10,
            seed: None,
            spawn: SpawnConfig::default(),
        }
    }
}

impl GameConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json).map(Self::sanitized)
    }

    /// Replace a zero, negative or non-finite `fixed_dt` with the default.
    pub fn sanitized(mut self) -> Self {
        if !(self.fixed_dt.is_finite() && self.fixed_dt > 0.0) {
            self.fixed_dt = DEFAULT_DT;
        }
        self
    }

    pub fn world_size(&self) -> Vec2 {
        Vec2::new(self.world_width, self.world_height)
    }
}

/// The contract between the frame runner and a scene.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state.
    fn init(&mut self, ctx: &mut EngineContext);

    /// React to one input event. Called once per event, before the frame's updates.
    fn handle_input(&mut self, ctx: &mut EngineContext, event: &InputEvent);

    /// One fixed simulation step.
    fn update(&mut self, ctx: &mut EngineContext);

    /// Compose the frame. Must not mutate state.
    fn render(&self, ctx: &EngineContext, surface: &mut dyn Surface) {
        render_frame(ctx, surface);
    }
}

/// Scene state shared by input handling, updates and rendering.
pub struct EngineContext {
    pub scene: Scene,
    /// Latest decoded background; replaced wholesale by each new load.
    pub background: Option<BackgroundImage>,
    /// Events for the host, cleared every frame.
    pub events: Vec<GameEvent>,
    pub rng: Rng,
    world: Vec2,
    next_id: u32,
}

impl EngineContext {
    pub fn new(world: Vec2, seed: u64) -> Self {
        Self {
            scene: Scene::new(),
            background: None,
            events: Vec::new(),
            rng: Rng::new(seed),
            world,
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Current drawing-surface size.
    pub fn world_size(&self) -> Vec2 {
        self.world
    }

    /// Ignored unless both dimensions are positive.
    pub fn set_world_size(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.world = Vec2::new(width, height);
        }
    }

    /// Swap in a new background image.
    pub fn set_background(&mut self, background: BackgroundImage) {
        log::info!(
            "background: {:?} {}x{}",
            background.image,
            background.width,
            background.height
        );
        self.background = Some(background);
    }

    /// Emit an event to be forwarded to the host.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events as a flat float slice, 4 floats per event.
    pub fn events_as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.events)
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(GameConfig::default().world_size(), 42)
    }
}
