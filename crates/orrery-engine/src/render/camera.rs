use glam::{Mat4, Vec2, Vec3};

/// Per-frame view of the host camera.
///
/// The AR host owns the real camera; each frame it hands the engine a pose,
/// a frustum test, and a world-to-screen projection through this trait. The
/// engine never holds a camera across frames.
pub trait CameraView {
    /// Whether a world-space sphere intersects the view frustum.
    fn sees_sphere(&self, center: Vec3, radius: f32) -> bool;

    /// Project a world point to (screen x, screen y, depth). Depth is the
    /// distance in front of the camera; zero or negative means at or behind
    /// the camera plane.
    fn project(&self, world: Vec3) -> Vec3;

    /// Unit vector the camera looks along, world space.
    fn forward(&self) -> Vec3;
}

/// Perspective camera backed by glam matrices.
///
/// Stands in for the host camera in tests and the headless demo; a real AR
/// host would adapt its own tracking data to `CameraView` instead.
pub struct PerspectiveCamera {
    /// World-to-view transform.
    pub view: Mat4,
    /// View-to-clip projection (reversed nothing, depth 0..1).
    pub projection: Mat4,
    /// Viewport size in pixels.
    pub viewport: Vec2,
}

impl PerspectiveCamera {
    pub fn new(viewport: Vec2, fov_y_radians: f32, z_near: f32, z_far: f32) -> Self {
        Self {
            view: Mat4::IDENTITY,
            projection: Mat4::perspective_rh(fov_y_radians, viewport.x / viewport.y, z_near, z_far),
            viewport,
        }
    }

    /// Place the camera at `eye` looking at `target`.
    pub fn look_at(&mut self, eye: Vec3, target: Vec3, up: Vec3) {
        self.view = Mat4::look_at_rh(eye, target, up);
    }

    fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }
}

impl CameraView for PerspectiveCamera {
    fn sees_sphere(&self, center: Vec3, radius: f32) -> bool {
        // Clip-space plane extraction (Gribb-Hartmann). glam's perspective
        // matrices map depth to [0, 1], so the near plane is row 2 alone.
        let m = self.view_projection();
        let (r0, r1, r2, r3) = (m.row(0), m.row(1), m.row(2), m.row(3));
        let planes = [r3 + r0, r3 - r0, r3 + r1, r3 - r1, r2, r3 - r2];

        for plane in planes {
            let normal = plane.truncate();
            let length = normal.length();
            if length <= f32::EPSILON {
                continue;
            }
            if (normal.dot(center) + plane.w) / length < -radius {
                return false;
            }
        }
        true
    }

    fn project(&self, world: Vec3) -> Vec3 {
        // Depth is the view-space distance in front of the camera; the
        // right-handed view looks down -Z.
        let view_point = self.view * world.extend(1.0);
        let depth = -view_point.z;

        let clip = self.projection * view_point;
        if clip.w.abs() <= f32::EPSILON {
            return Vec3::new(0.0, 0.0, depth);
        }
        let ndc = clip.truncate() / clip.w;
        Vec3::new(
            (ndc.x + 1.0) * 0.5 * self.viewport.x,
            (1.0 - ndc.y) * 0.5 * self.viewport.y,
            depth,
        )
    }

    fn forward(&self) -> Vec3 {
        // Third row of the rigid view transform is the negated forward axis.
        -self.view.row(2).truncate().normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera_at_origin() -> PerspectiveCamera {
        let mut cam = PerspectiveCamera::new(
            Vec2::new(800.0, 600.0),
            std::f32::consts::FRAC_PI_3,
            0.01,
            1000.0,
        );
        cam.look_at(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y);
        cam
    }

    #[test]
    fn point_ahead_projects_to_screen_center() {
        let cam = camera_at_origin();
        let p = cam.project(Vec3::new(0.0, 0.0, -5.0));
        assert!((p.x - 400.0).abs() < 1e-2);
        assert!((p.y - 300.0).abs() < 1e-2);
        assert!((p.z - 5.0).abs() < 1e-4);
    }

    #[test]
    fn point_behind_camera_has_negative_depth() {
        let cam = camera_at_origin();
        let p = cam.project(Vec3::new(0.0, 0.0, 5.0));
        assert!(p.z < 0.0);
    }

    #[test]
    fn sphere_ahead_is_seen() {
        let cam = camera_at_origin();
        assert!(cam.sees_sphere(Vec3::new(0.0, 0.0, -10.0), 1.0));
    }

    #[test]
    fn sphere_behind_is_culled() {
        let cam = camera_at_origin();
        assert!(!cam.sees_sphere(Vec3::new(0.0, 0.0, 10.0), 1.0));
    }

    #[test]
    fn sphere_far_off_axis_is_culled() {
        let cam = camera_at_origin();
        assert!(!cam.sees_sphere(Vec3::new(500.0, 0.0, -10.0), 1.0));
    }

    #[test]
    fn sphere_straddling_a_plane_is_seen() {
        let cam = camera_at_origin();
        // Center outside the left plane, radius reaches back in.
        assert!(cam.sees_sphere(Vec3::new(-12.0, 0.0, -10.0), 6.0));
    }

    #[test]
    fn forward_matches_look_direction() {
        let mut cam = camera_at_origin();
        cam.look_at(Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 2.0, -7.0), Vec3::Y);
        let f = cam.forward();
        assert!((f - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn right_of_center_lands_right_of_center() {
        let cam = camera_at_origin();
        let p = cam.project(Vec3::new(1.0, 0.0, -5.0));
        assert!(p.x > 400.0);
        // Screen y grows downward.
        let q = cam.project(Vec3::new(0.0, 1.0, -5.0));
        assert!(q.y < 300.0);
    }
}
