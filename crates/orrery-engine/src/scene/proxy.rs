use glam::{Quat, Vec3};

use crate::api::types::BodyId;

/// Render-space stand-in for one body.
///
/// Created once at scene build, mutated every frame by the composer, never
/// destroyed until the session is torn down. The host reads positions for
/// hit-testing and feeds `radius` to whatever geometry it draws.
#[derive(Debug, Clone, Copy)]
pub struct SceneProxy {
    pub body: BodyId,
    /// World position after the frame's rigid re-centering.
    pub position: Vec3,
    /// Spin about the vertical axis.
    pub rotation: Quat,
    /// Render radius in meters — a symmetric scale of the unit body.
    pub radius: f32,
    /// Whether taps resolve to this body this frame.
    pub tappable: bool,
}

impl SceneProxy {
    fn new(body: BodyId) -> Self {
        Self {
            body,
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            radius: 0.0,
            tappable: false,
        }
    }
}

/// Arena of proxies, index-aligned with the body registry.
pub struct ProxyArena {
    proxies: Vec<SceneProxy>,
}

impl ProxyArena {
    /// One proxy per registry slot, same order.
    pub fn new(len: usize) -> Self {
        Self {
            proxies: (0..len).map(|i| SceneProxy::new(BodyId(i as u32))).collect(),
        }
    }

    pub fn get(&self, id: BodyId) -> &SceneProxy {
        &self.proxies[id.index()]
    }

    pub fn get_mut(&mut self, id: BodyId) -> &mut SceneProxy {
        &mut self.proxies[id.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &SceneProxy> {
        self.proxies.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut SceneProxy> {
        self.proxies.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.proxies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proxies.is_empty()
    }

    /// Rigidly translate the whole hierarchy so the point `origin` lands on
    /// `target`. One uniform translation — relative distances between
    /// proxies are untouched, and a proxy sitting exactly at `origin` ends
    /// up exactly at `target`.
    pub fn recenter(&mut self, origin: Vec3, target: Vec3) {
        for proxy in &mut self.proxies {
            proxy.position = (proxy.position - origin) + target;
        }
    }
}
