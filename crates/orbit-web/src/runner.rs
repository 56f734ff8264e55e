use orbit_engine::{
    EngineContext, FixedTimestep, Game, GameEvent, InputEvent, InputQueue, Surface,
};

/// Generic frame runner that wires a `Game` to the browser loop.
///
/// DOM handlers push input; each animation frame calls `tick` then `render`.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    timestep: FixedTimestep,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    /// `seed` is used when the game's config does not pin one.
    pub fn new(game: G, seed: u64) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::with_max_steps(config.fixed_dt, config.max_steps_per_tick);
        let ctx = EngineContext::new(config.world_size(), config.seed.unwrap_or(seed));

        Self {
            game,
            ctx,
            input: InputQueue::new(),
            timestep,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: apply queued input once, then as many fixed updates
    /// as `dt` seconds of wall time call for.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        for event in self.input.drain() {
            self.game.handle_input(&mut self.ctx, &event);
        }

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.game.update(&mut self.ctx);
        }
    }

    /// Compose the current state onto `surface`.
    pub fn render(&self, surface: &mut dyn Surface) {
        if self.initialized {
            self.game.render(&self.ctx, surface);
        }
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    /// Events produced by the most recent tick.
    pub fn events(&self) -> &[GameEvent] {
        &self.ctx.events
    }

    pub fn fixed_dt(&self) -> f32 {
        self.timestep.dt()
    }
}
