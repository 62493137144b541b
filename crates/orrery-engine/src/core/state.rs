use glam::Vec3;

use crate::core::clock::SimClock;
use crate::core::focus::FocusState;
use crate::core::scale::ScaleModel;

/// All mutable per-session state in one owned value.
///
/// The session mutates it only between frames (queued commands drain before
/// the traversal starts), so a frame always sees one consistent state — no
/// aliasing, no partial-state traversal.
#[derive(Debug, Clone, Copy)]
pub struct SceneState {
    pub focus: FocusState,
    /// Where the focus body (or the whole system, when unfocused) is pinned.
    pub offset: Vec3,
    pub scales: ScaleModel,
    pub clock: SimClock,
}

impl SceneState {
    pub fn new(offset: Vec3, scales: ScaleModel) -> Self {
        Self {
            focus: FocusState::Unfocused,
            offset,
            scales,
            clock: SimClock::new(),
        }
    }
}
