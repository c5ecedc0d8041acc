//! Lifecycle synchronization
//!
//! State machine over one variable, `PanelState::current_target`:
//!
//! - `None -> Some(id)`: a concrete target appeared, initialize the session
//! - `Some(id) -> Some(id')` with `id' != id`: the user switched entities
//!   while the panel stayed open, re-initialize and discard unsaved edits
//! - `Some(id) -> None`: the panel closed, clear the session
//!
//! Only target identity fires a transition; settings content changes never
//! do. Stale sessions must never leak across entities.

use tracing::{debug, info};

use maptoc_core::{Entity, TargetDescriptor};

use crate::session::SettingsSession;
use crate::state::PanelState;
use crate::tabs::SettingsTab;

use super::UpdateResult;

/// Handle a change of the targeted node descriptor
pub fn handle_target_changed(
    state: &mut PanelState,
    target: Option<TargetDescriptor>,
) -> UpdateResult {
    state.target = target;
    sync(state)
}

/// Handle a content-store update. The collections are replaced wholesale;
/// the session survives as long as the target identity is unchanged, but
/// the active tab is re-validated (the targeted node may have changed kind
/// or been deleted).
///
/// A target can arrive before the content store delivers the collections.
/// In that case `sync` hit a resolution miss and left the session
/// uninitialized; the snapshots are taken here as soon as the target
/// resolves, so no edit is ever merged into empty snapshots.
pub fn handle_content_changed(
    state: &mut PanelState,
    layers: Vec<Entity>,
    groups: Vec<Entity>,
) -> UpdateResult {
    state.layers = layers;
    state.groups = groups;
    if state.current_target.is_some() && !state.session_initialized {
        let session = state
            .resolved()
            .entity()
            .map(|entity| SettingsSession::for_entity(entity, SettingsTab::default()));
        if let Some(session) = session {
            info!(node = ?state.current_target, "Initializing settings session from late content");
            state.session = session;
            state.session_initialized = true;
        }
    }
    ensure_valid_tab(state);
    UpdateResult::none()
}

/// Re-align the session with the targeted node's identity
fn sync(state: &mut PanelState) -> UpdateResult {
    let new_id = state.target.as_ref().map(|t| t.node.clone());
    if new_id == state.current_target {
        // Same episode; only the tab may need a fallback
        ensure_valid_tab(state);
        return UpdateResult::none();
    }

    match &new_id {
        None => {
            info!("Settings panel closed, clearing session");
            state.session.clear();
            state.session_initialized = false;
            state.style_editor_open = false;
        }
        Some(id) => {
            let session = state
                .resolved()
                .entity()
                .map(|entity| SettingsSession::for_entity(entity, SettingsTab::default()));
            match session {
                Some(session) => {
                    info!(node = %id, "Initializing settings session");
                    state.session = session;
                    state.session_initialized = true;
                }
                None => {
                    // Resolution miss: target references a node absent from
                    // the collections (already deleted, or not delivered
                    // yet). Keep the episode open but with nothing to edit.
                    debug!(node = %id, "Target resolves to no entity");
                    state.session.clear();
                    state.session_initialized = false;
                }
            }
        }
    }
    state.current_target = new_id;
    UpdateResult::none()
}

/// Fall back to the default tab when the active one is no longer valid
/// for the resolved entity
pub fn ensure_valid_tab(state: &mut PanelState) {
    let Some(kind) = state.resolved().kind() else {
        return;
    };
    if !state.session.active_tab.is_available(kind, &state.config) {
        debug!(
            tab = state.session.active_tab.label(),
            "Active tab no longer valid, falling back to default"
        );
        state.session.set_active_tab(SettingsTab::default());
    }
}
