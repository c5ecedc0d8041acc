//! Entity resolution
//!
//! Derives the single entity under edit from the targeted node descriptor
//! and the content collections. Pure function of its inputs; the caller
//! re-derives whenever any input changes.

use maptoc_core::{Entity, NodeKind, Resolved, TargetDescriptor};

/// Resolve the targeted node against the layer and group collections.
///
/// Lookup is "first entity whose id matches" within the collection named
/// by the descriptor. A miss (no descriptor, or the id is absent from its
/// collection, e.g. the node was deleted while targeted) resolves to
/// [`Resolved::None`], never an error.
pub fn resolve<'a>(
    target: Option<&TargetDescriptor>,
    layers: &'a [Entity],
    groups: &'a [Entity],
) -> Resolved<'a> {
    let Some(target) = target else {
        return Resolved::None;
    };
    match target.node_kind {
        NodeKind::Layers => layers
            .iter()
            .find(|layer| layer.id == target.node)
            .map(Resolved::Layer)
            .unwrap_or(Resolved::None),
        NodeKind::Groups => groups
            .iter()
            .find(|group| group.id == target.node)
            .map(Resolved::Group)
            .unwrap_or(Resolved::None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layers() -> Vec<Entity> {
        vec![
            Entity::new("L1").with("title", "A"),
            Entity::new("L2").with("title", "B"),
        ]
    }

    fn groups() -> Vec<Entity> {
        vec![Entity::new("G1").with("title", "Group one")]
    }

    #[test]
    fn test_resolve_layer_by_id() {
        let layers = layers();
        let groups = groups();
        let target = TargetDescriptor::layer("L1");
        let resolved = resolve(Some(&target), &layers, &groups);
        assert_eq!(resolved, Resolved::Layer(&layers[0]));
    }

    #[test]
    fn test_resolve_group_by_id() {
        let layers = layers();
        let groups = groups();
        let target = TargetDescriptor::group("G1");
        let resolved = resolve(Some(&target), &layers, &groups);
        assert_eq!(resolved, Resolved::Group(&groups[0]));
    }

    #[test]
    fn test_resolve_miss_is_none() {
        let target = TargetDescriptor::layer("L9");
        assert!(resolve(Some(&target), &layers(), &groups()).is_none());
    }

    #[test]
    fn test_resolve_no_target_is_none() {
        assert!(resolve(None, &layers(), &groups()).is_none());
    }

    #[test]
    fn test_resolve_only_searches_named_collection() {
        // "G1" exists, but only among groups; a layer descriptor must miss
        let target = TargetDescriptor::layer("G1");
        assert!(resolve(Some(&target), &layers(), &groups()).is_none());
    }

    #[test]
    fn test_resolve_first_match_wins() {
        let layers = vec![
            Entity::new("L1").with("title", "first"),
            Entity::new("L1").with("title", "second"),
        ];
        let target = TargetDescriptor::layer("L1");
        let resolved = resolve(Some(&target), &layers, &[]);
        assert_eq!(
            resolved.entity().unwrap().config.get("title").unwrap(),
            "first"
        );
    }

    #[test]
    fn test_resolve_empty_collections() {
        let target = TargetDescriptor::layer("L1");
        assert!(resolve(Some(&target), &[], &[]).is_none());
    }
}
