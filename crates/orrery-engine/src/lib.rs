pub mod api;
pub mod catalog;
pub mod core;
pub mod error;
pub mod input;
pub mod render;
pub mod scene;

// Re-export key types at crate root for convenience
pub use api::session::{Orrery, OrreryConfig};
pub use api::types::{BodyId, SceneEvent, VisibleBody};
pub use catalog::body::{BodyKind, CelestialBody};
pub use catalog::manifest::{BodyDescriptor, CatalogManifest};
pub use catalog::registry::{BodyNode, BodyRegistry};
pub use catalog::solar;
pub use core::clock::SimClock;
pub use core::focus::FocusState;
pub use core::scale::{
    ScaleModel, DEFAULT_FOCUS_ZOOM, REFERENCE_MOON_ORBIT_M, REFERENCE_ORBIT_M,
    REFERENCE_PERIOD_S, REFERENCE_RADIUS_M, REFERENCE_ROTATION_S,
};
pub use core::state::SceneState;
pub use error::BuildError;
pub use input::queue::{CommandQueue, SceneCommand};
pub use render::camera::{CameraView, PerspectiveCamera};
pub use scene::proxy::{ProxyArena, SceneProxy};
