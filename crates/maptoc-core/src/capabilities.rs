//! Layer capability metadata
//!
//! The capability service collaborator answers a fetch with a JSON
//! document describing what the remote layer supports (styles, image
//! formats, extra dimensions). The panel core only ever consumes it as a
//! settings patch applied with `affects_original = true`, so the parsed
//! document converts into the flat keys the settings session carries.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::SettingsPatch;

/// A named style advertised by the remote service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityStyle {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
}

/// An extra dimension (time, elevation, ...) advertised by the remote service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityDimension {
    pub name: String,
    #[serde(default)]
    pub units: Option<String>,
    #[serde(default)]
    pub values: Vec<String>,
}

/// Capability metadata fetched for a single layer
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerCapabilities {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub styles: Vec<CapabilityStyle>,
    #[serde(default)]
    pub formats: Vec<String>,
    #[serde(default)]
    pub dimensions: Vec<CapabilityDimension>,
}

impl LayerCapabilities {
    /// Parse a capability document from its JSON representation
    pub fn parse(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Convert into the settings patch the session consumes.
    ///
    /// Keys follow the persisted configuration vocabulary, so the patch
    /// merges over a session without translation.
    pub fn into_settings_patch(self) -> SettingsPatch {
        let mut patch = SettingsPatch::new();
        if let Some(description) = self.description {
            patch.insert("description".to_string(), description.into());
        }
        // Defaults may legitimately be empty lists: a service that
        // advertises no styles must overwrite a previously fetched list.
        patch.insert(
            "availableStyles".to_string(),
            serde_json::to_value(self.styles).unwrap_or_default(),
        );
        patch.insert(
            "availableFormats".to_string(),
            serde_json::to_value(self.formats).unwrap_or_default(),
        );
        patch.insert(
            "dimensions".to_string(),
            serde_json::to_value(self.dimensions).unwrap_or_default(),
        );
        patch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "description": "Hydrography",
        "styles": [
            {"name": "default", "title": "Default"},
            {"name": "blueprint"}
        ],
        "formats": ["image/png", "image/jpeg"],
        "dimensions": [
            {"name": "time", "units": "ISO8601", "values": ["2020-01-01", "2021-01-01"]}
        ]
    }"#;

    #[test]
    fn test_parse_full_document() {
        let caps = LayerCapabilities::parse(SAMPLE).unwrap();
        assert_eq!(caps.description.as_deref(), Some("Hydrography"));
        assert_eq!(caps.styles.len(), 2);
        assert_eq!(caps.styles[0].name, "default");
        assert_eq!(caps.styles[1].title, None);
        assert_eq!(caps.formats, vec!["image/png", "image/jpeg"]);
        assert_eq!(caps.dimensions[0].values.len(), 2);
    }

    #[test]
    fn test_parse_empty_document_uses_defaults() {
        let caps = LayerCapabilities::parse("{}").unwrap();
        assert_eq!(caps, LayerCapabilities::default());
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(LayerCapabilities::parse("{not json").is_err());
    }

    #[test]
    fn test_into_settings_patch_keys() {
        let caps = LayerCapabilities::parse(SAMPLE).unwrap();
        let patch = caps.into_settings_patch();
        assert_eq!(patch.get("description").unwrap(), "Hydrography");
        assert_eq!(
            patch.get("availableFormats").unwrap(),
            &serde_json::json!(["image/png", "image/jpeg"])
        );
        assert_eq!(
            patch["availableStyles"][0]["name"],
            serde_json::json!("default")
        );
        assert_eq!(patch["dimensions"][0]["name"], serde_json::json!("time"));
    }

    #[test]
    fn test_into_settings_patch_empty_lists_still_present() {
        let patch = LayerCapabilities::default().into_settings_patch();
        assert!(patch.get("description").is_none());
        assert_eq!(patch.get("availableStyles").unwrap(), &serde_json::json!([]));
        assert_eq!(patch.get("availableFormats").unwrap(), &serde_json::json!([]));
        assert_eq!(patch.get("dimensions").unwrap(), &serde_json::json!([]));
    }
}
