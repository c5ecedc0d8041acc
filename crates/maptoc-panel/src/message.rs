//! Message types for the settings panel (TEA pattern)

use maptoc_core::{
    DockLayoutMetrics, Entity, NodeId, NodeKind, SettingsPatch, SettingsValue, TargetDescriptor,
};

use crate::tabs::SettingsTab;

/// All possible messages/actions of the settings panel
#[derive(Debug, Clone)]
pub enum Message {
    // ─────────────────────────────────────────────────────────
    // Panel Actions
    // ─────────────────────────────────────────────────────────
    /// Request the panel be closed (external control-state transition);
    /// the session clears once the target becomes empty
    HideSettings,

    /// Merge a patch into the working settings; `affects_original` commits
    /// it to the per-tab baseline as well
    UpdateSettings {
        patch: SettingsPatch,
        affects_original: bool,
    },

    /// Forward a durable change to the owning collection (external store)
    UpdateNode {
        node: NodeId,
        kind: NodeKind,
        changes: SettingsPatch,
    },

    /// Merge a params patch into the working settings and, when
    /// `update_node` is set, also commit it to the owning collection as a
    /// durable change to the resolved entity
    UpdateSettingsParams {
        patch: SettingsPatch,
        update_node: bool,
    },

    /// Issue an asynchronous capability fetch for the targeted layer
    RetrieveLayerData { node: NodeId },

    /// Capability fetch finished; stale results (node no longer targeted)
    /// are discarded
    CapabilitiesReceived {
        node: NodeId,
        result: Result<SettingsPatch, String>,
    },

    /// Switch the displayed settings tab
    SetTab(SettingsTab),

    /// Overwrite the per-tab revert baseline
    UpdateOriginalSettings(SettingsValue),

    /// Overwrite the whole-session revert baseline
    UpdateInitialSettings(SettingsValue),

    /// Toggle visibility of the external style-editing surface
    ToggleStyleEditor,

    // ─────────────────────────────────────────────────────────
    // Collaborator Inputs
    // ─────────────────────────────────────────────────────────
    /// The targeted node changed (or the panel closed when `None`)
    TargetChanged(Option<TargetDescriptor>),

    /// The layer/group collections changed in the content store
    ContentChanged {
        layers: Vec<Entity>,
        groups: Vec<Entity>,
    },

    /// UI language changed
    LocaleChanged(String),

    /// Admin status of the current user changed; carried for the
    /// rendering collaborator, never interpreted here
    IsAdminChanged(bool),

    /// Dock layout was re-measured
    LayoutChanged(DockLayoutMetrics),
}
