//! Settings panel message handlers
//!
//! Every session- or tab-mutating handler is a no-op while the resolved
//! entity is `Resolved::None` - the panel has nothing to edit, and a
//! target referencing a deleted node must not corrupt leftover state.

use tracing::{debug, warn};

use maptoc_core::{NodeId, NodeKind, Resolved, SettingsPatch, SettingsValue};

use crate::message::Message;
use crate::state::PanelState;
use crate::tabs::SettingsTab;

use super::{UpdateAction, UpdateResult};

/// Handle hide settings: emit the close intent only. The session clears
/// once the control-state collaborator answers with an empty target.
pub fn handle_hide_settings(state: &mut PanelState) -> UpdateResult {
    if !state.is_open() {
        return UpdateResult::none();
    }
    UpdateResult::action(UpdateAction::ClosePanel)
}

/// Handle a working-settings update
pub fn handle_update_settings(
    state: &mut PanelState,
    patch: SettingsPatch,
    affects_original: bool,
) -> UpdateResult {
    if state.resolved().is_none() {
        debug!("UpdateSettings ignored: no entity resolved");
        return UpdateResult::none();
    }
    state.session.apply_update(&patch, affects_original);
    UpdateResult::none()
}

/// Handle a durable node change: forwarded to the owning collection
pub fn handle_update_node(
    state: &mut PanelState,
    node: NodeId,
    kind: NodeKind,
    changes: SettingsPatch,
) -> UpdateResult {
    if !state.is_open() {
        debug!(%node, "UpdateNode ignored: panel closed");
        return UpdateResult::none();
    }
    UpdateResult::action(UpdateAction::CommitNodeChange {
        node,
        kind,
        changes,
    })
}

/// Handle a params update: merged into the working settings like any
/// transient edit, and optionally committed to the owning collection as a
/// durable change to the resolved entity
pub fn handle_update_settings_params(
    state: &mut PanelState,
    patch: SettingsPatch,
    update_node: bool,
) -> UpdateResult {
    let Some(kind) = state.resolved().kind() else {
        debug!("UpdateSettingsParams ignored: no entity resolved");
        return UpdateResult::none();
    };
    let node = state
        .resolved()
        .id()
        .cloned()
        .unwrap_or_default();
    state.session.apply_update(&patch, false);
    if update_node {
        return UpdateResult::action(UpdateAction::CommitNodeChange {
            node,
            kind,
            changes: patch,
        });
    }
    UpdateResult::none()
}

/// Handle a capability fetch request for the targeted layer
pub fn handle_retrieve_layer_data(state: &mut PanelState, node: NodeId) -> UpdateResult {
    let endpoint = match state.resolved() {
        Resolved::Layer(layer) if layer.id == node => layer.endpoint().map(str::to_string),
        Resolved::Layer(_) | Resolved::Group(_) => {
            warn!(%node, "RetrieveLayerData ignored: node is not the resolved layer");
            return UpdateResult::none();
        }
        Resolved::None => {
            debug!(%node, "RetrieveLayerData ignored: no entity resolved");
            return UpdateResult::none();
        }
    };
    UpdateResult::action(UpdateAction::FetchCapabilities { node, endpoint })
}

/// Handle a finished capability fetch.
///
/// The result is tagged with the node it was issued for; anything other
/// than the current target is stale (the user switched entities while the
/// request was in flight) and silently dropped.
pub fn handle_capabilities_received(
    state: &mut PanelState,
    node: NodeId,
    result: Result<SettingsPatch, String>,
) -> UpdateResult {
    if state.current_target.as_ref() != Some(&node) {
        debug!(%node, "Stale capability result dropped");
        return UpdateResult::none();
    }
    match result {
        Ok(patch) => UpdateResult::message(Message::UpdateSettings {
            patch,
            affects_original: true,
        }),
        Err(error) => {
            warn!(%node, %error, "Capability fetch failed");
            UpdateResult::none()
        }
    }
}

/// Handle a tab switch, rejecting tabs that are invalid for the resolved
/// entity's kind under the current configuration
pub fn handle_set_tab(state: &mut PanelState, tab: SettingsTab) -> UpdateResult {
    let Some(kind) = state.resolved().kind() else {
        debug!("SetTab ignored: no entity resolved");
        return UpdateResult::none();
    };
    if !tab.is_available(kind, &state.config) {
        warn!(tab = tab.label(), "SetTab ignored: tab not available");
        return UpdateResult::none();
    }
    state.session.set_active_tab(tab);
    UpdateResult::none()
}

/// Overwrite the per-tab revert baseline (e.g. the style editor committed
/// a value that becomes the new revert point)
pub fn handle_update_original_settings(
    state: &mut PanelState,
    value: SettingsValue,
) -> UpdateResult {
    if state.resolved().is_none() {
        debug!("UpdateOriginalSettings ignored: no entity resolved");
        return UpdateResult::none();
    }
    state.session.original_settings = value;
    UpdateResult::none()
}

/// Overwrite the whole-session revert baseline
pub fn handle_update_initial_settings(
    state: &mut PanelState,
    value: SettingsValue,
) -> UpdateResult {
    if state.resolved().is_none() {
        debug!("UpdateInitialSettings ignored: no entity resolved");
        return UpdateResult::none();
    }
    state.session.initial_settings = value;
    UpdateResult::none()
}

/// Toggle the style editor surface; never while nothing is resolved
pub fn handle_toggle_style_editor(state: &mut PanelState) -> UpdateResult {
    if state.resolved().is_none() {
        debug!("ToggleStyleEditor ignored: no entity resolved");
        return UpdateResult::none();
    }
    state.style_editor_open = !state.style_editor_open;
    UpdateResult::action(UpdateAction::StyleEditorToggled {
        open: state.style_editor_open,
    })
}
