//! JSON icon manifests.
//!
//! A manifest describes an [`IconLibrary`] without recompiling the tool:
//!
//! ```json
//! {
//!   "icons": [
//!     {
//!       "title": "Orbit",
//!       "colorPrimary": "#1F6FEB",
//!       "markup": "<svg viewBox=\"0 0 24 24\">...</svg>",
//!       "color": { "path": "orbit-color.svg" },
//!       "textCn": { "markup": "<svg>...</svg>" }
//!     }
//!   ]
//! }
//! ```
//!
//! Each component carries exactly one of `markup` or `path`. Relative paths
//! are resolved against the manifest's directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, WorkflowError};
use crate::icon::{Icon, IconComponent, IconLibrary, VariantKind};

// ============================================================================
// Serializable Component
// ============================================================================

/// Serializable form of an [`IconComponent`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SerializableComponent {
    /// Inline markup (mutually exclusive with `path`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markup: Option<String>,

    /// Markup file (mutually exclusive with `markup`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl SerializableComponent {
    pub fn from_markup(markup: impl Into<String>) -> Self {
        Self {
            markup: Some(markup.into()),
            path: None,
        }
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            markup: None,
            path: Some(path.into()),
        }
    }

    /// Converts to a component, resolving relative paths against `base_dir`.
    fn into_component(self, base_dir: &Path, context: &str) -> Result<IconComponent> {
        match (self.markup, self.path) {
            (Some(markup), None) => Ok(IconComponent::Markup(markup)),
            (None, Some(path)) if path.is_absolute() => Ok(IconComponent::File(path)),
            (None, Some(path)) => Ok(IconComponent::File(base_dir.join(path))),
            (Some(_), Some(_)) => Err(WorkflowError::Manifest(format!(
                "{context}: set either `markup` or `path`, not both"
            ))),
            (None, None) => Err(WorkflowError::Manifest(format!(
                "{context}: missing `markup` or `path`"
            ))),
        }
    }
}

impl From<&IconComponent> for SerializableComponent {
    fn from(component: &IconComponent) -> Self {
        match component {
            IconComponent::Markup(markup) => Self::from_markup(markup),
            IconComponent::File(path) => Self::from_path(path),
        }
    }
}

// ============================================================================
// Manifest
// ============================================================================

/// Serializable form of an [`Icon`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IconEntry {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_primary: Option<String>,

    #[serde(flatten)]
    pub component: SerializableComponent,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<SerializableComponent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<SerializableComponent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_cn: Option<SerializableComponent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<SerializableComponent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_color: Option<SerializableComponent>,
}

impl IconEntry {
    fn into_icon(self, base_dir: &Path) -> Result<Icon> {
        let title = self.title;
        let mut icon = Icon::new(
            title.clone(),
            self.component.into_component(base_dir, &title)?,
        );
        icon.color_primary = self.color_primary;

        let variants = [
            (VariantKind::Color, self.color),
            (VariantKind::Text, self.text),
            (VariantKind::TextCn, self.text_cn),
            (VariantKind::Brand, self.brand),
            (VariantKind::BrandColor, self.brand_color),
        ];
        for (kind, entry) in variants {
            if let Some(entry) = entry {
                let component = entry.into_component(base_dir, &icon.variant_name(kind))?;
                icon = icon.with_variant(kind, component);
            }
        }
        Ok(icon)
    }
}

impl From<&Icon> for IconEntry {
    fn from(icon: &Icon) -> Self {
        Self {
            title: icon.title.clone(),
            color_primary: icon.color_primary.clone(),
            component: (&icon.component).into(),
            color: icon.color.as_ref().map(Into::into),
            text: icon.text.as_ref().map(Into::into),
            text_cn: icon.text_cn.as_ref().map(Into::into),
            brand: icon.brand.as_ref().map(Into::into),
            brand_color: icon.brand_color.as_ref().map(Into::into),
        }
    }
}

/// A serializable icon collection.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IconManifest {
    pub icons: Vec<IconEntry>,
}

impl IconManifest {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads a manifest file and builds its library.
    pub fn load(path: &Path) -> Result<IconLibrary> {
        let json = std::fs::read_to_string(path).map_err(|e| WorkflowError::io(path, e))?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_json(&json)?.into_library(base_dir)
    }

    /// Builds the library, resolving relative component paths against
    /// `base_dir`.
    pub fn into_library(self, base_dir: &Path) -> Result<IconLibrary> {
        let icons = self
            .icons
            .into_iter()
            .map(|entry| entry.into_icon(base_dir))
            .collect::<Result<Vec<_>>>()?;
        Ok(IconLibrary::from_icons(icons))
    }
}

impl From<&IconLibrary> for IconManifest {
    fn from(library: &IconLibrary) -> Self {
        Self {
            icons: library.iter().map(IconEntry::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r##"{
        "icons": [
            {
                "title": "Orbit",
                "colorPrimary": "#1F6FEB",
                "markup": "<svg></svg>",
                "color": { "path": "orbit-color.svg" },
                "textCn": { "markup": "<svg id=\"cn\"></svg>" }
            },
            { "title": "Plain", "path": "/abs/plain.svg" }
        ]
    }"##;

    #[test]
    fn parses_components_and_resolves_paths() {
        let library = IconManifest::from_json(MANIFEST)
            .unwrap()
            .into_library(Path::new("/repo/icons"))
            .unwrap();

        assert_eq!(library.len(), 2);
        let orbit = &library.icons[0];
        assert_eq!(orbit.color_primary.as_deref(), Some("#1F6FEB"));
        assert_eq!(orbit.component, IconComponent::from_markup("<svg></svg>"));
        assert_eq!(
            orbit.color,
            Some(IconComponent::from_file("/repo/icons/orbit-color.svg"))
        );
        assert!(orbit.text.is_none());
        assert!(orbit.text_cn.is_some());

        let plain = &library.icons[1];
        assert!(!plain.is_exportable());
        assert_eq!(plain.component, IconComponent::from_file("/abs/plain.svg"));
    }

    #[test]
    fn rejects_component_without_source() {
        let json = r#"{ "icons": [ { "title": "Empty" } ] }"#;
        let err = IconManifest::from_json(json)
            .unwrap()
            .into_library(Path::new("."))
            .unwrap_err();
        assert!(matches!(err, WorkflowError::Manifest(ref msg) if msg.contains("Empty")));
    }

    #[test]
    fn rejects_component_with_both_sources() {
        let json = r#"{ "icons": [ {
            "title": "Both", "markup": "<svg/>",
            "brand": { "markup": "<svg/>", "path": "b.svg" }
        } ] }"#;
        let err = IconManifest::from_json(json)
            .unwrap()
            .into_library(Path::new("."))
            .unwrap_err();
        assert!(matches!(err, WorkflowError::Manifest(ref msg) if msg.contains("Both-brand")));
    }

    #[test]
    fn library_serializes_back_to_manifest() {
        let library = IconLibrary::from_icons(vec![
            Icon::new("Relay", "<svg/>")
                .with_color_primary("#FF6A00")
                .with_variant(VariantKind::BrandColor, "<svg id=\"bc\"/>"),
        ]);
        let json = IconManifest::from(&library).to_json().unwrap();
        assert!(json.contains("\"brandColor\""));
        assert!(!json.contains("\"textCn\""));

        let restored = IconManifest::from_json(&json)
            .unwrap()
            .into_library(Path::new("."))
            .unwrap();
        assert_eq!(restored, library);
    }
}
