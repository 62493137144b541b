//! Per-frame scene composition.
//!
//! One depth-first walk positions every proxy from the current simulation
//! time, a rigid re-centering pins the focus body, and a projection pass
//! produces the visible set. Each pass is a pure function of the registry,
//! the frame's state snapshot, and the camera the host handed in.

use glam::Vec3;

use crate::api::types::{BodyId, VisibleBody};
use crate::catalog::registry::BodyRegistry;
use crate::core::focus::{self, FocusState};
use crate::core::kinematics;
use crate::core::scale::ScaleModel;
use crate::render::camera::CameraView;
use crate::scene::proxy::ProxyArena;

/// Position, rotate, and scale every proxy, root first, carrying the
/// parent's position down the tree. Positions are absolute from the system
/// origin — the re-centering offset is applied afterwards.
pub fn layout(registry: &BodyRegistry, proxies: &mut ProxyArena, scales: &ScaleModel, sim_time: f64) {
    place(registry, proxies, scales, sim_time, registry.root(), Vec3::ZERO);
}

fn place(
    registry: &BodyRegistry,
    proxies: &mut ProxyArena,
    scales: &ScaleModel,
    sim_time: f64,
    id: BodyId,
    parent_position: Vec3,
) {
    let node = registry.get(id);
    let angle = kinematics::orbit_angle(&node.body, sim_time);
    let position = parent_position + kinematics::orbit_position(angle, scales.scaled_orbit(&node.body));

    let proxy = proxies.get_mut(id);
    proxy.position = position;
    proxy.rotation = kinematics::spin(kinematics::rotation_angle(&node.body, sim_time));
    proxy.radius = scales.scaled_radius(&node.body);

    for &child in &node.children {
        place(registry, proxies, scales, sim_time, child, position);
    }
}

/// Refresh every proxy's tappable flag from this frame's focus state.
pub fn refresh_tappable(registry: &BodyRegistry, proxies: &mut ProxyArena, state: FocusState) {
    let root = registry.root();
    for node in registry.iter() {
        proxies.get_mut(node.id).tappable = focus::is_tappable(state, node.id, node.parent, root);
    }
}

/// Marker policy: the focus body and the root's direct children get screen
/// markers; moons are reached by focusing their parent first.
fn marker_eligible(state: FocusState, id: BodyId, parent: Option<BodyId>, root: BodyId) -> bool {
    state.body() == Some(id) || parent == Some(root)
}

/// Project marker-eligible proxies that sit inside the frustum and in front
/// of the camera. Output order is registry (traversal) order.
pub fn collect_visible(
    registry: &BodyRegistry,
    proxies: &ProxyArena,
    state: FocusState,
    camera: &dyn CameraView,
    out: &mut Vec<VisibleBody>,
) {
    out.clear();
    let root = registry.root();
    for node in registry.iter() {
        if !marker_eligible(state, node.id, node.parent, root) {
            continue;
        }
        let proxy = proxies.get(node.id);
        if !camera.sees_sphere(proxy.position, proxy.radius) {
            continue;
        }
        let projected = camera.project(proxy.position);
        if projected.z <= 0.0 {
            continue;
        }
        out.push(VisibleBody {
            body: node.id,
            screen: projected.truncate(),
            depth: projected.z,
        });
    }
}
