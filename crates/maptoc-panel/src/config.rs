//! Panel construction-time configuration
//!
//! These options only gate which tabs and fields the rendering
//! collaborator exposes. The panel core resolves, initializes, and clears
//! sessions regardless of their values.

use std::path::Path;

use serde::{Deserialize, Serialize};

use maptoc_core::prelude::*;

/// Configuration accepted when the panel is constructed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// true shows a dock panel, false a modal
    pub dock: bool,
    /// Width of the panel in pixels
    pub width: u32,
    /// Enable/disable the feature info settings tab
    pub show_feature_info_tab: bool,
    /// Enable iframe support in the feature info template editor
    pub enable_iframe_module: bool,
    /// Hide the title translations tool
    pub hide_title_translations: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            dock: true,
            width: 500,
            show_feature_info_tab: true,
            enable_iframe_module: true,
            hide_title_translations: false,
        }
    }
}

impl PanelConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| Error::config(e.to_string()))
    }

    /// Load a configuration file, falling back to defaults if it is absent
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No panel config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PanelConfig::default();
        assert!(config.dock);
        assert_eq!(config.width, 500);
        assert!(config.show_feature_info_tab);
        assert!(config.enable_iframe_module);
        assert!(!config.hide_title_translations);
    }

    #[test]
    fn test_from_toml_partial_keeps_defaults() {
        let config = PanelConfig::from_toml_str("width = 300\ndock = false\n").unwrap();
        assert_eq!(config.width, 300);
        assert!(!config.dock);
        // Unspecified fields keep their defaults
        assert!(config.enable_iframe_module);
    }

    #[test]
    fn test_from_toml_rejects_garbage() {
        let err = PanelConfig::from_toml_str("width = [not valid").unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = PanelConfig::load(&dir.path().join("panel.toml")).unwrap();
        assert_eq!(config, PanelConfig::default());
    }

    #[test]
    fn test_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("panel.toml");
        std::fs::write(&path, "show_feature_info_tab = false\n").unwrap();
        let config = PanelConfig::load(&path).unwrap();
        assert!(!config.show_feature_info_tab);
    }
}
