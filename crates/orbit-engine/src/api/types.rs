use bytemuck::{Pod, Zeroable};

/// Unique identifier for a circle in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u32);

/// Handle to a decoded raster image owned by the host surface.
/// The engine only ever sees the handle and the intrinsic size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(pub u32);

/// An event reported from the scene to the host page.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    /// Payload: (entity id, x, y).
    pub const CIRCLE_SPAWNED: f32 = 1.0;
    /// Payload: (entity id, pointer x, pointer y).
    pub const DRAG_STARTED: f32 = 2.0;
    /// Payload: (entity id, final x, final y).
    pub const DRAG_ENDED: f32 = 3.0;
    /// Payload: (image id, width, height).
    pub const BACKGROUND_CHANGED: f32 = 4.0;

    pub fn new(kind: f32, a: f32, b: f32, c: f32) -> Self {
        Self { kind, a, b, c }
    }
}
