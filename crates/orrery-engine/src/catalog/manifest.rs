use serde::{Deserialize, Serialize};

use crate::catalog::body::CelestialBody;

/// Body catalogue loaded from a JSON file at startup.
///
/// The manifest mirrors the catalogue tree: one root descriptor with nested
/// children. Child order in the JSON array is preserved and becomes the
/// traversal/draw order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogManifest {
    pub root: BodyDescriptor,
}

/// One body entry in the manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyDescriptor {
    pub name: String,
    /// Average distance from the parent body, meters.
    pub orbit_radius_m: f64,
    /// Orbit period, seconds. Zero means the body holds still.
    pub orbit_period_s: f64,
    /// Mean body radius, meters.
    pub body_radius_m: f64,
    /// Rotation period, seconds.
    pub rotation_period_s: f64,
    #[serde(default)]
    pub children: Vec<BodyDescriptor>,
}

impl CatalogManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Convert into the catalogue tree consumed by the registry.
    pub fn into_body(self) -> CelestialBody {
        self.root.into_body()
    }
}

impl BodyDescriptor {
    fn into_body(self) -> CelestialBody {
        CelestialBody::new(
            self.name,
            self.orbit_radius_m,
            self.orbit_period_s,
            self.body_radius_m,
            self.rotation_period_s,
        )
        .with_children(self.children.into_iter().map(BodyDescriptor::into_body).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::registry::BodyRegistry;

    #[test]
    fn parse_minimal_catalog() {
        let json = r#"{
            "root": {
                "name": "star",
                "orbit_radius_m": 0.0,
                "orbit_period_s": 0.0,
                "body_radius_m": 7.0e8,
                "rotation_period_s": 0.0
            }
        }"#;
        let manifest = CatalogManifest::from_json(json).unwrap();
        assert_eq!(manifest.root.name, "star");
        assert!(manifest.root.children.is_empty());
    }

    #[test]
    fn nested_children_keep_order() {
        let json = r#"{
            "root": {
                "name": "star",
                "orbit_radius_m": 0.0,
                "orbit_period_s": 0.0,
                "body_radius_m": 7.0e8,
                "rotation_period_s": 0.0,
                "children": [
                    { "name": "b", "orbit_radius_m": 1.0e10, "orbit_period_s": 1.0e6,
                      "body_radius_m": 1.0e6, "rotation_period_s": 1.0e5 },
                    { "name": "a", "orbit_radius_m": 2.0e10, "orbit_period_s": 2.0e6,
                      "body_radius_m": 1.0e6, "rotation_period_s": 1.0e5 }
                ]
            }
        }"#;
        let manifest = CatalogManifest::from_json(json).unwrap();
        let registry = BodyRegistry::build(manifest.into_body()).unwrap();
        let names: Vec<&str> = registry.iter().map(|n| n.body.name.as_str()).collect();
        // JSON order, not alphabetical
        assert_eq!(names, ["star", "b", "a"]);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(CatalogManifest::from_json("{ not json").is_err());
    }
}
