use serde::{Deserialize, Serialize};

/// Role of a body in the orbital hierarchy, fixed from its tree depth when
/// the registry is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyKind {
    Star,
    Planet,
    Moon,
}

impl BodyKind {
    pub fn from_depth(depth: u32) -> Self {
        match depth {
            0 => BodyKind::Star,
            1 => BodyKind::Planet,
            _ => BodyKind::Moon,
        }
    }
}

/// Immutable physical description of a celestial body.
///
/// All constants are SI (meters, seconds). A zero orbit or rotation period
/// means the body does not move — reserved for the central star, not an
/// error. `children` order is the draw/traversal order and never changes
/// after construction.
#[derive(Debug, Clone)]
pub struct CelestialBody {
    pub name: String,
    /// Average distance from the parent body, meters.
    pub orbit_radius_m: f64,
    /// Time for one full orbit around the parent, seconds.
    pub orbit_period_s: f64,
    /// Mean body radius, meters.
    pub body_radius_m: f64,
    /// Sidereal rotation period, seconds.
    pub rotation_period_s: f64,
    /// Bodies orbiting this one, in draw order.
    pub children: Vec<CelestialBody>,
}

impl CelestialBody {
    pub fn new(
        name: impl Into<String>,
        orbit_radius_m: f64,
        orbit_period_s: f64,
        body_radius_m: f64,
        rotation_period_s: f64,
    ) -> Self {
        Self {
            name: name.into(),
            orbit_radius_m,
            orbit_period_s,
            body_radius_m,
            rotation_period_s,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<CelestialBody>) -> Self {
        self.children = children;
        self
    }

    /// Total number of bodies in this subtree, self included.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(CelestialBody::subtree_len).sum::<usize>()
    }
}
