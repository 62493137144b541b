//! Scale model — physical magnitudes to render-space magnitudes.
//!
//! The reference constants below are the fixed calibration points of the
//! output contract: a `system_scale` of 24.0 puts the reference orbit
//! (Earth's) 24 m from the star, a `body_scale` of 0.01 renders the
//! largest body (Jupiter) with a 1 cm radius, and a `time_scale` of 120
//! plays one reference orbit (an Earth year) in 120 wall-clock seconds.

use crate::catalog::body::CelestialBody;

/// Earth's average orbit radius, meters.
pub const REFERENCE_ORBIT_M: f64 = 1.496e11;
/// Jupiter's mean radius, meters — the largest body in the catalogue.
pub const REFERENCE_RADIUS_M: f64 = 6.9911e7;
/// One Earth year, seconds.
pub const REFERENCE_PERIOD_S: f64 = 31_558_118.4;
/// One sidereal Earth day, seconds.
pub const REFERENCE_ROTATION_S: f64 = 86_164.0905;
/// Luna's average orbit radius, meters — the reference inner-moon orbit.
pub const REFERENCE_MOON_ORBIT_M: f64 = 385_000_000.0;

/// Zoom multiplier applied while a body has focus: blows the reference
/// moon orbit up to the size the reference orbit had in the overview.
pub const DEFAULT_FOCUS_ZOOM: f32 = (REFERENCE_ORBIT_M / REFERENCE_MOON_ORBIT_M) as f32;

/// The three user-adjustable scale knobs. Copied per frame (with the focus
/// zoom folded in when a body has focus) so a mid-frame mutation can never
/// tear a traversal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleModel {
    /// Render-space radius of the reference orbit, meters.
    pub system_scale: f32,
    /// Render-space radius of the reference body, meters.
    pub body_scale: f32,
    /// Wall-clock seconds per reference period.
    pub time_scale: f32,
}

impl ScaleModel {
    pub fn new(system_scale: f32, body_scale: f32, time_scale: f32) -> Self {
        Self {
            system_scale,
            body_scale,
            time_scale,
        }
    }

    /// Render-space orbit radius. Zero for the root by the `orbit_radius_m
    /// = 0` convention, never negative.
    pub fn scaled_orbit(&self, body: &CelestialBody) -> f32 {
        ((body.orbit_radius_m / REFERENCE_ORBIT_M) * self.system_scale as f64) as f32
    }

    /// Render-space body radius.
    pub fn scaled_radius(&self, body: &CelestialBody) -> f32 {
        ((body.body_radius_m / REFERENCE_RADIUS_M) * self.body_scale as f64) as f32
    }

    /// Wall-clock seconds for one orbit of `body`.
    pub fn scaled_orbit_period(&self, body: &CelestialBody) -> f64 {
        (body.orbit_period_s / REFERENCE_PERIOD_S) * self.time_scale as f64
    }

    /// Wall-clock seconds for one rotation of `body`.
    pub fn scaled_rotation_period(&self, body: &CelestialBody) -> f64 {
        (body.rotation_period_s / REFERENCE_ROTATION_S) * self.time_scale as f64
    }

    /// Simulation seconds that pass per wall-clock second.
    pub fn time_rate(&self) -> f64 {
        REFERENCE_PERIOD_S / self.time_scale as f64
    }

    /// This frame's layout scales with a zoom multiplier folded in. Time is
    /// unaffected by zoom.
    pub fn zoomed(&self, zoom: f32) -> Self {
        Self {
            system_scale: self.system_scale * zoom,
            body_scale: self.body_scale * zoom,
            time_scale: self.time_scale,
        }
    }
}
