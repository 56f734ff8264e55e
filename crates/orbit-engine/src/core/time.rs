/// Step length used when the configured one is unusable.
pub const DEFAULT_DT: f32 = 1.0 / 60.0;

/// Fixed timestep accumulator.
/// Converts variable animation-frame deltas into whole simulation steps,
/// so moons orbit at the same speed on 60 Hz and 144 Hz displays.
pub struct FixedTimestep {
    /// Seconds per step.
    dt: f32,
    /// Most steps a single frame may produce.
    max_steps: u32,
    /// Leftover time not yet consumed by a step.
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self::with_max_steps(dt, 10)
    }

    /// A `dt` that is not a positive finite number falls back to 1/60.
    pub fn with_max_steps(dt: f32, max_steps: u32) -> Self {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { DEFAULT_DT };
        Self {
            dt,
            max_steps: max_steps.max(1),
            accumulator: 0.0,
        }
    }

    /// Add frame time and return how many steps to run now.
    /// Long stalls (hidden tab, debugger) are capped at `max_steps`.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        if !frame_dt.is_finite() || frame_dt <= 0.0 {
            return 0;
        }
        self.accumulator = (self.accumulator + frame_dt).min(self.dt * self.max_steps as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}
