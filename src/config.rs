//! Serializable workflow configuration.
//!
//! Every field has a default that reproduces the stock layout, so an empty
//! JSON object (`{}`) is a valid configuration:
//!
//! ```json
//! {
//!   "svgDir": "packages/static-svg/icons",
//!   "pngDir": "packages/static-png",
//!   "webpDir": "packages/static-webp",
//!   "height": 1024,
//!   "concurrency": 5,
//!   "placeholder": "currentColor",
//!   "themes": [
//!     { "name": "light", "color": "#000000" },
//!     { "name": "dark", "color": "#FFFFFF" }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, WorkflowError};
use crate::raster::RasterFormat;
use crate::theme::{DEFAULT_PLACEHOLDER, ThemeMode};

/// Settings for all three phases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkflowConfig {
    /// Directory the export phase writes SVG files into.
    pub svg_dir: PathBuf,

    /// Root of the PNG output; one subdirectory per theme.
    pub png_dir: PathBuf,

    /// Root of the WebP output; one subdirectory per theme.
    pub webp_dir: PathBuf,

    /// Target pixel height of every raster output.
    pub height: u32,

    /// Maximum number of tasks in flight per phase.
    pub concurrency: usize,

    /// Token replaced by the theme color before rasterizing.
    pub placeholder: String,

    pub themes: Vec<ThemeMode>,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            svg_dir: PathBuf::from("packages/static-svg/icons"),
            png_dir: PathBuf::from("packages/static-png"),
            webp_dir: PathBuf::from("packages/static-webp"),
            height: 1024,
            concurrency: 5,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            themes: ThemeMode::defaults(),
        }
    }
}

impl WorkflowConfig {
    /// Deserializes a configuration from JSON and validates it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| WorkflowError::io(path, e))?;
        Self::from_json(&json)
    }

    /// Serializes the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rejects settings that would make a phase meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.height == 0 {
            return Err(WorkflowError::Config("height must be greater than zero".into()));
        }
        if self.concurrency == 0 {
            return Err(WorkflowError::Config(
                "concurrency must be greater than zero".into(),
            ));
        }
        if self.themes.is_empty() {
            return Err(WorkflowError::Config("at least one theme is required".into()));
        }

        let mut seen = HashSet::new();
        for theme in &self.themes {
            let reserved = matches!(theme.name.as_str(), "" | "." | "..");
            if reserved || theme.name.contains(['/', '\\']) {
                return Err(WorkflowError::Config(format!(
                    "theme name `{}` is not a valid directory name",
                    theme.name
                )));
            }
            if !seen.insert(theme.name.as_str()) {
                return Err(WorkflowError::Config(format!(
                    "duplicate theme `{}`",
                    theme.name
                )));
            }
            theme.rgb()?;
        }
        Ok(())
    }

    /// Returns a copy with every relative directory joined onto `root`.
    pub fn resolved(&self, root: &Path) -> Self {
        let join = |dir: &PathBuf| {
            if dir.is_absolute() {
                dir.clone()
            } else {
                root.join(dir)
            }
        };
        Self {
            svg_dir: join(&self.svg_dir),
            png_dir: join(&self.png_dir),
            webp_dir: join(&self.webp_dir),
            ..self.clone()
        }
    }

    /// Output root for a raster format.
    pub fn raster_dir(&self, format: RasterFormat) -> &Path {
        match format {
            RasterFormat::Png => &self.png_dir,
            RasterFormat::WebP => &self.webp_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = WorkflowConfig::from_json("{}").unwrap();
        assert_eq!(config, WorkflowConfig::default());
        assert_eq!(config.height, 1024);
        assert_eq!(config.concurrency, 5);
        assert_eq!(config.themes.len(), 2);
    }

    #[test]
    fn json_roundtrip_preserves_themes() {
        let mut config = WorkflowConfig::default();
        config.themes.push(ThemeMode::new("brand", "#1F6FEB"));
        let json = config.to_json().unwrap();
        assert!(json.contains("\"svgDir\""));
        assert_eq!(WorkflowConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn rejects_zero_concurrency_and_height() {
        let err = WorkflowConfig::from_json(r#"{ "concurrency": 0 }"#).unwrap_err();
        assert!(matches!(err, WorkflowError::Config(_)));

        let err = WorkflowConfig::from_json(r#"{ "height": 0 }"#).unwrap_err();
        assert!(matches!(err, WorkflowError::Config(_)));
    }

    #[test]
    fn rejects_bad_theme_tables() {
        let empty = r#"{ "themes": [] }"#;
        assert!(WorkflowConfig::from_json(empty).is_err());

        let duplicate = r##"{ "themes": [
            { "name": "light", "color": "#000" },
            { "name": "light", "color": "#fff" }
        ] }"##;
        assert!(WorkflowConfig::from_json(duplicate).is_err());

        let bad_color = r#"{ "themes": [ { "name": "light", "color": "black" } ] }"#;
        assert!(WorkflowConfig::from_json(bad_color).is_err());

        let bare_hex = r#"{ "themes": [ { "name": "dark", "color": "FFFFFF" } ] }"#;
        assert!(WorkflowConfig::from_json(bare_hex).is_err());

        let bad_name = r##"{ "themes": [ { "name": "../up", "color": "#000" } ] }"##;
        assert!(WorkflowConfig::from_json(bad_name).is_err());

        for name in [".", ".."] {
            let json = format!(r##"{{ "themes": [ {{ "name": "{name}", "color": "#000" }} ] }}"##);
            assert!(WorkflowConfig::from_json(&json).is_err(), "`{name}` accepted");
        }
    }

    #[test]
    fn resolved_joins_relative_dirs_only() {
        let config = WorkflowConfig {
            webp_dir: PathBuf::from("/abs/webp"),
            ..WorkflowConfig::default()
        };
        let resolved = config.resolved(Path::new("/repo"));
        assert_eq!(resolved.svg_dir, Path::new("/repo/packages/static-svg/icons"));
        assert_eq!(resolved.png_dir, Path::new("/repo/packages/static-png"));
        assert_eq!(resolved.webp_dir, Path::new("/abs/webp"));
        assert_eq!(resolved.raster_dir(RasterFormat::Png), Path::new("/repo/packages/static-png"));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let err = WorkflowConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, WorkflowError::Json(_)));
    }
}
