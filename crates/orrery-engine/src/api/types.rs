use glam::Vec2;

/// Stable handle to a body: the index of its slot in the registry and proxy
/// arenas, assigned in depth-first catalogue order at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub u32);

impl BodyId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One entry of the per-frame visible set: a body whose marker should be
/// drawn this frame, with its projected screen position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleBody {
    pub body: BodyId,
    /// Projected position in screen pixels.
    pub screen: Vec2,
    /// Projection depth in front of the camera. Always positive — points at
    /// or behind the camera plane are rejected before they get here.
    pub depth: f32,
}

/// Transient notifications for the host UI, valid for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneEvent {
    /// The view is now pinned to this body.
    FocusChanged(BodyId),
    /// The view returned to the whole-system overview.
    FocusCleared,
}
