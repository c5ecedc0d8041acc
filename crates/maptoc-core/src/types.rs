//! Domain types for the settings panel core

use serde::{Deserialize, Serialize};

/// Identifier of a layer or group node within the map content tree.
///
/// Ids are opaque strings assigned by the map content store and unique
/// within their collection.
pub type NodeId = String;

/// Opaque mapping of configuration keys to values.
///
/// The panel core never interprets individual keys; values pass through
/// between the content store, the editing session, and collaborators.
pub type SettingsValue = serde_json::Map<String, serde_json::Value>;

/// Partial settings update, merged key-by-key into a [`SettingsValue`].
pub type SettingsPatch = serde_json::Map<String, serde_json::Value>;

/// Which collection a targeted node belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A map layer
    Layers,
    /// A group of layers
    Groups,
}

impl NodeKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Layers => "layer",
            Self::Groups => "group",
        }
    }
}

/// Identifies which node the settings panel currently targets.
///
/// Produced by the external control-state collaborator; read-only input
/// to the panel core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetDescriptor {
    pub node_kind: NodeKind,
    pub node: NodeId,
}

impl TargetDescriptor {
    pub fn layer(node: impl Into<NodeId>) -> Self {
        Self {
            node_kind: NodeKind::Layers,
            node: node.into(),
        }
    }

    pub fn group(node: impl Into<NodeId>) -> Self {
        Self {
            node_kind: NodeKind::Groups,
            node: node.into(),
        }
    }
}

/// A layer or group in the map content tree, the unit a settings session edits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Unique id within the entity's collection
    pub id: NodeId,
    /// The entity's persisted configuration (title, opacity, style
    /// reference, dimension parameters, ...)
    #[serde(default)]
    pub config: SettingsValue,
}

impl Entity {
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            config: SettingsValue::new(),
        }
    }

    /// Builder-style config key, mainly for tests and fixtures
    pub fn with(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.config.insert(key.into(), value.into());
        self
    }

    /// The service endpoint advertised in the entity's configuration, if any
    pub fn endpoint(&self) -> Option<&str> {
        self.config.get("url").and_then(|v| v.as_str())
    }
}

/// Result of resolving the targeted node against the content collections.
///
/// A tagged variant instead of an empty-object sentinel: callers must
/// match on `None` rather than silently reading fields off an empty
/// entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved<'a> {
    /// Nothing selected; the panel has nothing to edit
    None,
    Layer(&'a Entity),
    Group(&'a Entity),
}

impl<'a> Resolved<'a> {
    pub fn entity(&self) -> Option<&'a Entity> {
        match *self {
            Self::None => None,
            Self::Layer(e) | Self::Group(e) => Some(e),
        }
    }

    pub fn kind(&self) -> Option<NodeKind> {
        match self {
            Self::None => None,
            Self::Layer(_) => Some(NodeKind::Layers),
            Self::Group(_) => Some(NodeKind::Groups),
        }
    }

    pub fn id(&self) -> Option<&'a NodeId> {
        self.entity().map(|e| &e.id)
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Read-only dock layout measurement supplied by the layout collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DockLayoutMetrics {
    /// Panel height in pixels
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_builder() {
        let entity = Entity::new("L1").with("title", "Rivers").with("opacity", 0.5);
        assert_eq!(entity.id, "L1");
        assert_eq!(entity.config.get("title").unwrap(), "Rivers");
        assert_eq!(entity.config.get("opacity").unwrap(), 0.5);
    }

    #[test]
    fn test_entity_endpoint() {
        let entity = Entity::new("L1").with("url", "https://maps.example.com/wms");
        assert_eq!(entity.endpoint(), Some("https://maps.example.com/wms"));

        let bare = Entity::new("L2");
        assert_eq!(bare.endpoint(), None);
    }

    #[test]
    fn test_resolved_accessors() {
        let entity = Entity::new("G1");
        let resolved = Resolved::Group(&entity);
        assert_eq!(resolved.kind(), Some(NodeKind::Groups));
        assert_eq!(resolved.id().map(String::as_str), Some("G1"));
        assert!(!resolved.is_none());

        let none = Resolved::None;
        assert!(none.is_none());
        assert!(none.entity().is_none());
        assert!(none.kind().is_none());
    }

    #[test]
    fn test_target_descriptor_serde_shape() {
        let target = TargetDescriptor::layer("L1");
        let json = serde_json::to_value(&target).unwrap();
        assert_eq!(json["nodeKind"], "layers");
        assert_eq!(json["node"], "L1");
    }

    #[test]
    fn test_entity_missing_config_defaults_empty() {
        let entity: Entity = serde_json::from_str(r#"{"id": "L9"}"#).unwrap();
        assert!(entity.config.is_empty());
    }
}
