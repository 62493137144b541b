use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::api::types::{BodyId, SceneEvent, VisibleBody};
use crate::catalog::body::CelestialBody;
use crate::catalog::registry::BodyRegistry;
use crate::core::focus::{self, FocusState};
use crate::core::scale::{ScaleModel, DEFAULT_FOCUS_ZOOM};
use crate::core::state::SceneState;
use crate::error::BuildError;
use crate::input::queue::{CommandQueue, SceneCommand};
use crate::render::camera::CameraView;
use crate::scene::composer;
use crate::scene::proxy::{ProxyArena, SceneProxy};

/// Scale knobs are clamped here so a zero from the UI can never divide the
/// time rate by zero.
const MIN_SCALE: f32 = 1e-6;

/// Session configuration, provided by the host once at start.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrreryConfig {
    /// Render-space radius of the reference orbit, meters.
    pub system_scale: f32,
    /// Render radius of the largest body, meters.
    pub body_scale: f32,
    /// Wall-clock seconds for one reference orbit.
    pub time_scale: f32,
    /// Where the scene is pinned when nothing has focus.
    pub world_anchor: Vec3,
    /// Layout scale multiplier while a body has focus.
    pub focus_zoom: f32,
    /// How far a focused body hangs from its pin point along the camera
    /// axis, in multiples of its render radius.
    pub focus_view_distance: f32,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            system_scale: 24.0,
            body_scale: 0.01,
            time_scale: 120.0,
            world_anchor: Vec3::ZERO,
            focus_zoom: DEFAULT_FOCUS_ZOOM,
            focus_view_distance: 6.0,
        }
    }
}

/// A running orrery session: one immutable body catalogue, one proxy
/// arena, one state value, stepped once per display frame.
///
/// Everything runs synchronously inside `update`. Mutators called from
/// input callbacks only enqueue; the queue drains at the top of the next
/// frame, so a traversal never observes a half-applied change.
pub struct Orrery {
    registry: BodyRegistry,
    proxies: ProxyArena,
    state: SceneState,
    commands: CommandQueue,
    events: Vec<SceneEvent>,
    visible: Vec<VisibleBody>,
    config: OrreryConfig,
}

impl Orrery {
    /// One-time scene construction from a body catalogue.
    pub fn new(root: CelestialBody, config: OrreryConfig) -> Result<Self, BuildError> {
        let registry = BodyRegistry::build(root)?;
        let proxies = ProxyArena::new(registry.len());
        let scales = ScaleModel::new(
            config.system_scale.max(MIN_SCALE),
            config.body_scale.max(MIN_SCALE),
            config.time_scale.max(MIN_SCALE),
        );
        log::info!("orrery scene built: {} bodies", registry.len());
        Ok(Self {
            state: SceneState::new(config.world_anchor, scales),
            proxies,
            registry,
            commands: CommandQueue::new(),
            events: Vec::new(),
            visible: Vec::new(),
            config,
        })
    }

    /// Build a session from a JSON catalogue manifest.
    pub fn from_manifest(json: &str, config: OrreryConfig) -> Result<Self, BuildError> {
        let manifest = crate::catalog::manifest::CatalogManifest::from_json(json)?;
        Self::new(manifest.into_body(), config)
    }

    // -- Mutators, effective from the next update --

    /// Request focus on the named body. Focusing the current focus (or the
    /// root) toggles back to the overview; unknown names are ignored.
    pub fn set_focus(&mut self, name: &str) {
        self.commands.push(SceneCommand::SetFocus(name.to_owned()));
    }

    pub fn set_system_scale(&mut self, scale: f32) {
        self.commands.push(SceneCommand::SetSystemScale(scale));
    }

    pub fn set_body_scale(&mut self, scale: f32) {
        self.commands.push(SceneCommand::SetBodyScale(scale));
    }

    pub fn set_time_scale(&mut self, scale: f32) {
        self.commands.push(SceneCommand::SetTimeScale(scale));
    }

    /// Forget the previous frame timestamp, e.g. when the AR session
    /// resumes from a pause.
    pub fn reset_clock(&mut self) {
        self.commands.push(SceneCommand::ResetClock);
    }

    // -- Read access --

    pub fn current_focus(&self) -> Option<&CelestialBody> {
        self.state.focus.body().map(|id| &self.registry.get(id).body)
    }

    pub fn registry(&self) -> &BodyRegistry {
        &self.registry
    }

    pub fn lookup(&self, name: &str) -> Option<BodyId> {
        self.registry.lookup(name)
    }

    pub fn body(&self, id: BodyId) -> &CelestialBody {
        &self.registry.get(id).body
    }

    pub fn proxy(&self, id: BodyId) -> &SceneProxy {
        self.proxies.get(id)
    }

    /// Notifications produced by the most recent `update`.
    pub fn events(&self) -> &[SceneEvent] {
        &self.events
    }

    /// The visible set from the most recent `update`, in traversal order.
    pub fn visible(&self) -> &[VisibleBody] {
        &self.visible
    }

    /// Accumulated simulation seconds.
    pub fn elapsed_sim_time(&self) -> f64 {
        self.state.clock.elapsed()
    }

    /// The per-frame entry point.
    ///
    /// Drains queued commands, advances the clock (zero on the first frame
    /// after construction or a reset), lays the hierarchy out for the
    /// current simulation time, re-centers it rigidly on the focus body,
    /// and returns the visible set in traversal order. The slice is a
    /// snapshot, valid until the next call.
    pub fn update(&mut self, frame_timestamp: f64, camera: &dyn CameraView) -> &[VisibleBody] {
        self.events.clear();
        for command in self.commands.drain() {
            self.apply(command);
        }

        self.state
            .clock
            .advance(frame_timestamp, self.state.scales.time_rate());

        let zoom = self.state.focus.zoom(self.config.focus_zoom);
        let frame_scales = self.state.scales.zoomed(zoom);
        composer::layout(
            &self.registry,
            &mut self.proxies,
            &frame_scales,
            self.state.clock.elapsed(),
        );

        // Rigid re-centering: the focus body (or the root) lands on the
        // pinned offset. A focused body is additionally pushed along the
        // camera axis so it hangs a set number of radii from the viewer.
        let center = self.state.focus.body().unwrap_or(self.registry.root());
        let origin = self.proxies.get(center).position;
        let target = match self.state.focus {
            FocusState::Focused(id) => {
                let reach = self.proxies.get(id).radius * self.config.focus_view_distance;
                self.state.offset + camera.forward() * reach
            }
            FocusState::Unfocused => self.state.offset,
        };
        self.proxies.recenter(origin, target);

        composer::refresh_tappable(&self.registry, &mut self.proxies, self.state.focus);

        let mut visible = std::mem::take(&mut self.visible);
        composer::collect_visible(&self.registry, &self.proxies, self.state.focus, camera, &mut visible);
        self.visible = visible;
        &self.visible
    }

    fn apply(&mut self, command: SceneCommand) {
        match command {
            SceneCommand::SetFocus(name) => self.center_system(&name),
            SceneCommand::SetSystemScale(v) => self.state.scales.system_scale = v.max(MIN_SCALE),
            SceneCommand::SetBodyScale(v) => self.state.scales.body_scale = v.max(MIN_SCALE),
            SceneCommand::SetTimeScale(v) => self.state.scales.time_scale = v.max(MIN_SCALE),
            SceneCommand::ResetClock => self.state.clock.reset(),
        }
    }

    /// Apply a focus request. An unknown name is a tolerated race with the
    /// UI layer and changes nothing.
    fn center_system(&mut self, name: &str) {
        let Some(id) = self.registry.lookup(name) else {
            log::debug!("ignoring focus request for unknown body {name:?}");
            return;
        };
        // Snapshot of where the body sits right now, not a live binding.
        let snapshot = self.proxies.get(id).position;
        let shift = focus::center_system(
            self.state.focus,
            id,
            self.registry.root(),
            snapshot,
            self.config.world_anchor,
        );
        if shift.state != self.state.focus {
            self.events.push(match shift.state {
                FocusState::Focused(id) => SceneEvent::FocusChanged(id),
                FocusState::Unfocused => SceneEvent::FocusCleared,
            });
        }
        self.state.focus = shift.state;
        self.state.offset = shift.offset;
    }
}
