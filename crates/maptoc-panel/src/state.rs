//! Panel state (Model in TEA pattern)

use maptoc_core::{DockLayoutMetrics, Entity, NodeId, Resolved, TargetDescriptor};

use crate::config::PanelConfig;
use crate::resolver::resolve;
use crate::session::SettingsSession;

/// Complete state of one settings panel instance.
///
/// The session is exclusively owned by this panel for as long as it is
/// open; no two panels share one session.
#[derive(Debug, Clone, Default)]
pub struct PanelState {
    /// Construction-time configuration
    pub config: PanelConfig,

    /// Ordered layer collection from the map content store
    pub layers: Vec<Entity>,
    /// Ordered group collection from the map content store
    pub groups: Vec<Entity>,

    /// Targeted node descriptor from control state (read-only input)
    pub target: Option<TargetDescriptor>,
    /// Identity of the node the current session was initialized for.
    /// `None` means the panel is closed. This is the lifecycle
    /// synchronizer's single state variable.
    pub current_target: Option<NodeId>,
    /// Whether the session snapshots were taken from the targeted
    /// entity's configuration. False while the target does not resolve
    /// (e.g. the content store has not delivered the collections yet);
    /// edits are rejected until initialization happens.
    pub session_initialized: bool,

    /// The editing session
    pub session: SettingsSession,

    /// Visibility of the external style-editing surface
    pub style_editor_open: bool,

    /// Current UI language code (read-only context)
    pub locale: String,
    /// Dock layout measurement (read-only context)
    pub dock_layout: DockLayoutMetrics,
    /// Gates admin-only fields in the rendering collaborator; passed
    /// through, never interpreted here
    pub is_admin: bool,
}

impl PanelState {
    pub fn new(config: PanelConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Re-derive the entity under edit from the current inputs
    pub fn resolved(&self) -> Resolved<'_> {
        resolve(self.target.as_ref(), &self.layers, &self.groups)
    }

    /// Whether an editing session is open
    pub fn is_open(&self) -> bool {
        self.current_target.is_some()
    }
}
