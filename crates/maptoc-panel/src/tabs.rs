//! Settings panel tabs

use serde::{Deserialize, Serialize};

use maptoc_core::NodeKind;

use crate::config::PanelConfig;

/// Tabs of the settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingsTab {
    /// Title, description, translations
    #[default]
    General,
    /// Opacity, transparency, legend options
    Display,
    /// Style selection and the style editor entry point
    Style,
    /// Feature info format and templates
    FeatureInfo,
}

impl SettingsTab {
    pub fn label(&self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Display => "Display",
            Self::Style => "Style",
            Self::FeatureInfo => "Feature Info",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::General => 0,
            Self::Display => 1,
            Self::Style => 2,
            Self::FeatureInfo => 3,
        }
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        match idx {
            0 => Some(Self::General),
            1 => Some(Self::Display),
            2 => Some(Self::Style),
            3 => Some(Self::FeatureInfo),
            _ => None,
        }
    }

    /// Whether this tab is valid for an entity of the given kind under the
    /// given configuration.
    ///
    /// Groups only carry general settings; the feature info tab is
    /// additionally gated by configuration.
    pub fn is_available(&self, kind: NodeKind, config: &PanelConfig) -> bool {
        match self {
            Self::General => true,
            Self::Display | Self::Style => kind == NodeKind::Layers,
            Self::FeatureInfo => kind == NodeKind::Layers && config.show_feature_info_tab,
        }
    }

    /// All tabs valid for an entity of the given kind, in display order
    pub fn available(kind: NodeKind, config: &PanelConfig) -> Vec<Self> {
        [Self::General, Self::Display, Self::Style, Self::FeatureInfo]
            .into_iter()
            .filter(|tab| tab.is_available(kind, config))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        for idx in 0..4 {
            let tab = SettingsTab::from_index(idx).unwrap();
            assert_eq!(tab.index(), idx);
        }
        assert!(SettingsTab::from_index(4).is_none());
    }

    #[test]
    fn test_group_only_has_general() {
        let config = PanelConfig::default();
        assert_eq!(
            SettingsTab::available(NodeKind::Groups, &config),
            vec![SettingsTab::General]
        );
    }

    #[test]
    fn test_layer_tabs_respect_feature_info_gate() {
        let mut config = PanelConfig::default();
        assert!(SettingsTab::FeatureInfo.is_available(NodeKind::Layers, &config));

        config.show_feature_info_tab = false;
        assert!(!SettingsTab::FeatureInfo.is_available(NodeKind::Layers, &config));
        assert_eq!(
            SettingsTab::available(NodeKind::Layers, &config),
            vec![
                SettingsTab::General,
                SettingsTab::Display,
                SettingsTab::Style
            ]
        );
    }

    #[test]
    fn test_default_tab_is_general() {
        assert_eq!(SettingsTab::default(), SettingsTab::General);
    }
}
