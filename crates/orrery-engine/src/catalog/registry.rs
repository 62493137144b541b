use std::collections::HashMap;

use crate::api::types::BodyId;
use crate::catalog::body::{BodyKind, CelestialBody};
use crate::error::BuildError;

/// One slot of the flattened body tree.
#[derive(Debug, Clone)]
pub struct BodyNode {
    pub id: BodyId,
    pub parent: Option<BodyId>,
    pub children: Vec<BodyId>,
    pub depth: u32,
    pub kind: BodyKind,
    /// The immutable body data. Its `children` list is drained during
    /// flattening — child links live in `children` above.
    pub body: CelestialBody,
}

/// Flattened, immutable body catalogue.
///
/// Consumes the catalogue tree once at startup and stores the nodes in a
/// `Vec` in depth-first insertion order, so `BodyId` doubles as the
/// traversal/draw order. A read-only name map serves lookups. The structure
/// never changes after construction.
pub struct BodyRegistry {
    nodes: Vec<BodyNode>,
    by_name: HashMap<String, BodyId>,
}

impl BodyRegistry {
    /// Flatten the catalogue rooted at `root`. Fails fast on duplicate
    /// names or negative physical constants.
    pub fn build(root: CelestialBody) -> Result<Self, BuildError> {
        let mut registry = Self {
            nodes: Vec::with_capacity(root.subtree_len()),
            by_name: HashMap::with_capacity(root.subtree_len()),
        };
        registry.insert(root, None, 0)?;
        Ok(registry)
    }

    fn insert(
        &mut self,
        mut body: CelestialBody,
        parent: Option<BodyId>,
        depth: u32,
    ) -> Result<BodyId, BuildError> {
        if body.orbit_radius_m < 0.0
            || body.orbit_period_s < 0.0
            || body.body_radius_m < 0.0
            || body.rotation_period_s < 0.0
        {
            return Err(BuildError::NegativeConstant(body.name));
        }

        let id = BodyId(self.nodes.len() as u32);
        if self.by_name.insert(body.name.clone(), id).is_some() {
            return Err(BuildError::DuplicateName(body.name));
        }

        let children = std::mem::take(&mut body.children);
        self.nodes.push(BodyNode {
            id,
            parent,
            children: Vec::with_capacity(children.len()),
            depth,
            kind: BodyKind::from_depth(depth),
            body,
        });

        for child in children {
            let child_id = self.insert(child, Some(id), depth + 1)?;
            self.nodes[id.index()].children.push(child_id);
        }
        Ok(id)
    }

    /// The central body. Always the first slot.
    pub fn root(&self) -> BodyId {
        BodyId(0)
    }

    pub fn get(&self, id: BodyId) -> &BodyNode {
        &self.nodes[id.index()]
    }

    pub fn lookup(&self, name: &str) -> Option<BodyId> {
        self.by_name.get(name).copied()
    }

    /// Whether `id` orbits `parent` directly.
    pub fn is_child_of(&self, id: BodyId, parent: BodyId) -> bool {
        self.get(id).parent == Some(parent)
    }

    /// Nodes in depth-first insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &BodyNode> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_planet_tree() -> CelestialBody {
        CelestialBody::new("star", 0.0, 0.0, 7.0e8, 0.0).with_children(vec![
            CelestialBody::new("inner", 1.0e10, 1.0e6, 2.4e6, 1.0e5),
            CelestialBody::new("outer", 2.0e11, 3.2e7, 6.4e6, 8.6e4)
                .with_children(vec![CelestialBody::new("moon", 3.8e8, 2.3e6, 1.7e6, 2.3e6)]),
        ])
    }

    #[test]
    fn ids_follow_depth_first_order() {
        let registry = BodyRegistry::build(two_planet_tree()).unwrap();
        let names: Vec<&str> = registry.iter().map(|n| n.body.name.as_str()).collect();
        assert_eq!(names, ["star", "inner", "outer", "moon"]);
        assert_eq!(registry.root(), BodyId(0));
    }

    #[test]
    fn parent_and_child_links() {
        let registry = BodyRegistry::build(two_planet_tree()).unwrap();
        let outer = registry.lookup("outer").unwrap();
        let moon = registry.lookup("moon").unwrap();
        assert_eq!(registry.get(moon).parent, Some(outer));
        assert_eq!(registry.get(outer).children, vec![moon]);
        assert!(registry.is_child_of(moon, outer));
        assert!(!registry.is_child_of(moon, registry.root()));
    }

    #[test]
    fn kinds_assigned_from_depth() {
        let registry = BodyRegistry::build(two_planet_tree()).unwrap();
        assert_eq!(registry.get(registry.root()).kind, BodyKind::Star);
        assert_eq!(registry.get(registry.lookup("outer").unwrap()).kind, BodyKind::Planet);
        assert_eq!(registry.get(registry.lookup("moon").unwrap()).kind, BodyKind::Moon);
    }

    #[test]
    fn duplicate_name_fails_fast() {
        let tree = CelestialBody::new("star", 0.0, 0.0, 1.0, 0.0).with_children(vec![
            CelestialBody::new("twin", 1.0, 1.0, 1.0, 1.0),
            CelestialBody::new("twin", 2.0, 2.0, 1.0, 1.0),
        ]);
        match BodyRegistry::build(tree) {
            Err(BuildError::DuplicateName(name)) => assert_eq!(name, "twin"),
            other => panic!("expected DuplicateName, got {other:?}", other = other.err()),
        }
    }

    #[test]
    fn negative_constant_fails_fast() {
        let tree = CelestialBody::new("star", 0.0, 0.0, 1.0, 0.0)
            .with_children(vec![CelestialBody::new("bad", -1.0, 1.0, 1.0, 1.0)]);
        assert!(matches!(
            BodyRegistry::build(tree),
            Err(BuildError::NegativeConstant(_))
        ));
    }

    #[test]
    fn unknown_lookup_is_none() {
        let registry = BodyRegistry::build(two_planet_tree()).unwrap();
        assert!(registry.lookup("nonesuch").is_none());
    }
}
