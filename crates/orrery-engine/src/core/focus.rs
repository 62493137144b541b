//! Focus state machine.
//!
//! The scene is either `Unfocused` — centered on the root at a fixed world
//! anchor — or `Focused` on one body, pinned where that body sat when it
//! was selected.

use glam::Vec3;

use crate::api::types::BodyId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusState {
    Unfocused,
    Focused(BodyId),
}

impl FocusState {
    pub fn body(self) -> Option<BodyId> {
        match self {
            FocusState::Focused(id) => Some(id),
            FocusState::Unfocused => None,
        }
    }

    pub fn is_focused(self) -> bool {
        matches!(self, FocusState::Focused(_))
    }

    /// Zoom multiplier for this frame's layout. Recomputed from the state
    /// every frame, never cached across frames.
    pub fn zoom(self, focus_zoom: f32) -> f32 {
        match self {
            FocusState::Focused(_) => focus_zoom,
            FocusState::Unfocused => 1.0,
        }
    }
}

/// Result of a focus request: the next state and where it pins the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusShift {
    pub state: FocusState,
    pub offset: Vec3,
}

/// Resolve a focus request on an already-looked-up body.
///
/// Re-selecting the focused body or selecting the root toggles back to the
/// overview at `world_anchor`. Anything else focuses the body, pinning it
/// at `world_position` — a snapshot taken now, not a live binding.
pub fn center_system(
    current: FocusState,
    requested: BodyId,
    root: BodyId,
    world_position: Vec3,
    world_anchor: Vec3,
) -> FocusShift {
    if requested == root || current.body() == Some(requested) {
        FocusShift {
            state: FocusState::Unfocused,
            offset: world_anchor,
        }
    } else {
        FocusShift {
            state: FocusState::Focused(requested),
            offset: world_position,
        }
    }
}

/// Interaction eligibility for this frame: the focus body itself, or any
/// body directly orbiting the body the view is centered on (the root when
/// unfocused). Evaluated fresh every frame — focus can change between
/// frames.
pub fn is_tappable(state: FocusState, id: BodyId, parent: Option<BodyId>, root: BodyId) -> bool {
    let center = state.body().unwrap_or(root);
    state.body() == Some(id) || parent == Some(center)
}
