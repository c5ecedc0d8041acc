//! Settings editing session
//!
//! One open editing episode over a single entity, holding three snapshots
//! of its configuration:
//!
//! - `settings` - the live working value the form edits
//! - `original_settings` - baseline before the current tab's edits
//! - `initial_settings` - value when the panel opened, for a full revert
//!
//! `initial_settings` is never touched by [`SettingsSession::apply_update`];
//! it only changes through re-initialization or an explicit overwrite.

use maptoc_core::{Entity, SettingsPatch, SettingsValue};

use crate::tabs::SettingsTab;

/// The three-snapshot settings state plus active tab for one editing episode
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SettingsSession {
    /// Live, mutable working value
    pub settings: SettingsValue,
    /// Per-tab revert baseline
    pub original_settings: SettingsValue,
    /// Whole-session revert baseline
    pub initial_settings: SettingsValue,
    /// Currently displayed tab
    pub active_tab: SettingsTab,
}

impl SettingsSession {
    /// Start a session for an entity: all three snapshots become
    /// independent copies of the entity's persisted configuration.
    pub fn for_entity(entity: &Entity, default_tab: SettingsTab) -> Self {
        Self {
            settings: entity.config.clone(),
            original_settings: entity.config.clone(),
            initial_settings: entity.config.clone(),
            active_tab: default_tab,
        }
    }

    /// Merge a patch into the working value, and into `original_settings`
    /// when the update commits a new baseline (e.g. the result of a
    /// capability fetch rather than a transient keystroke).
    pub fn apply_update(&mut self, patch: &SettingsPatch, affects_original: bool) {
        merge(&mut self.settings, patch);
        if affects_original {
            merge(&mut self.original_settings, patch);
        }
    }

    /// Switch the displayed tab; snapshots are untouched
    pub fn set_active_tab(&mut self, tab: SettingsTab) {
        self.active_tab = tab;
    }

    /// Discard the working value back to the per-tab baseline
    pub fn revert_to_original(&mut self) {
        self.settings = self.original_settings.clone();
    }

    /// Discard everything back to the state when the panel opened
    pub fn revert_to_initial(&mut self) {
        self.settings = self.initial_settings.clone();
        self.original_settings = self.initial_settings.clone();
    }

    /// Reset to the empty/default session
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether the working value diverges from the session-open baseline
    pub fn is_dirty(&self) -> bool {
        self.settings != self.initial_settings
    }
}

/// Key-by-key merge of a patch into a settings mapping
fn merge(target: &mut SettingsValue, patch: &SettingsPatch) {
    for (key, value) in patch {
        target.insert(key.clone(), value.clone());
    }
}
