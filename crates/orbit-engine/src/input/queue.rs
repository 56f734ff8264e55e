use crate::api::types::ImageId;

/// Input events the scene understands.
/// Pointer coordinates are surface-local.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A mouse button went down at (x, y).
    PointerDown { x: f32, y: f32 },
    /// The mouse button was released at (x, y).
    PointerUp { x: f32, y: f32 },
    /// The cursor moved to (x, y).
    PointerMove { x: f32, y: f32 },
    /// The "create circle" button was pressed.
    SpawnCircle,
    /// An uploaded image finished decoding.
    BackgroundLoaded { image: ImageId, width: f32, height: f32 },
    /// The drawing surface changed size.
    Resize { width: f32, height: f32 },
}

/// Input gathered between two animation frames.
/// Back-to-back pointer moves collapse into the latest one, since a drag only
/// cares where the pointer ended up.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        if let (InputEvent::PointerMove { .. }, Some(InputEvent::PointerMove { .. })) =
            (&event, self.events.last())
        {
            self.events.pop();
        }
        self.events.push(event);
    }

    /// Take everything queued since the last frame.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
