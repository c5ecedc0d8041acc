//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::PanelState;

use super::{lifecycle, settings_handlers, UpdateResult};

/// Process a message and update state.
///
/// All transitions are synchronous reducers over the single panel state;
/// messages dispatched concurrently by the embedder are serialized in
/// dispatch order.
pub fn update(state: &mut PanelState, message: Message) -> UpdateResult {
    match message {
        // ─────────────────────────────────────────────────────────
        // Panel Actions
        // ─────────────────────────────────────────────────────────
        Message::HideSettings => settings_handlers::handle_hide_settings(state),

        Message::UpdateSettings {
            patch,
            affects_original,
        } => settings_handlers::handle_update_settings(state, patch, affects_original),

        Message::UpdateNode {
            node,
            kind,
            changes,
        } => settings_handlers::handle_update_node(state, node, kind, changes),

        Message::UpdateSettingsParams { patch, update_node } => {
            settings_handlers::handle_update_settings_params(state, patch, update_node)
        }

        Message::RetrieveLayerData { node } => {
            settings_handlers::handle_retrieve_layer_data(state, node)
        }

        Message::CapabilitiesReceived { node, result } => {
            settings_handlers::handle_capabilities_received(state, node, result)
        }

        Message::SetTab(tab) => settings_handlers::handle_set_tab(state, tab),

        Message::UpdateOriginalSettings(value) => {
            settings_handlers::handle_update_original_settings(state, value)
        }

        Message::UpdateInitialSettings(value) => {
            settings_handlers::handle_update_initial_settings(state, value)
        }

        Message::ToggleStyleEditor => settings_handlers::handle_toggle_style_editor(state),

        // ─────────────────────────────────────────────────────────
        // Collaborator Inputs
        // ─────────────────────────────────────────────────────────
        Message::TargetChanged(target) => lifecycle::handle_target_changed(state, target),

        Message::ContentChanged { layers, groups } => {
            lifecycle::handle_content_changed(state, layers, groups)
        }

        Message::LocaleChanged(locale) => {
            state.locale = locale;
            UpdateResult::none()
        }

        Message::IsAdminChanged(is_admin) => {
            state.is_admin = is_admin;
            UpdateResult::none()
        }

        Message::LayoutChanged(metrics) => {
            state.dock_layout = metrics;
            UpdateResult::none()
        }
    }
}
