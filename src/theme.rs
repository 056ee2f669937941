//! Theme modes and placeholder color substitution.

use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WorkflowError};

/// Token in exported markup that receives the theme color.
pub const DEFAULT_PLACEHOLDER: &str = "currentColor";

/// A named theme and the literal color it substitutes for the placeholder.
///
/// The theme name doubles as the output subdirectory (`light/`, `dark/`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeMode {
    pub name: String,
    pub color: String,
}

impl ThemeMode {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }

    /// Black glyphs for light backgrounds.
    pub fn light() -> Self {
        Self::new("light", "#000000")
    }

    /// White glyphs for dark backgrounds.
    pub fn dark() -> Self {
        Self::new("dark", "#FFFFFF")
    }

    /// The default two-entry table.
    pub fn defaults() -> Vec<ThemeMode> {
        vec![Self::light(), Self::dark()]
    }

    /// Parses the theme color as an sRGB hex triplet (`#rgb` or `#rrggbb`).
    pub fn rgb(&self) -> Result<Srgb<u8>> {
        if !self.color.starts_with('#') {
            return Err(WorkflowError::Config(format!(
                "theme `{}` color `{}` must start with `#`",
                self.name, self.color
            )));
        }
        Srgb::<u8>::from_str(&self.color).map_err(|e| {
            WorkflowError::Config(format!(
                "theme `{}` has invalid color `{}`: {e}",
                self.name, self.color
            ))
        })
    }

    /// Replaces every occurrence of `placeholder` in `svg` with this theme's
    /// color.
    pub fn apply(&self, svg: &str, placeholder: &str) -> String {
        if placeholder.is_empty() {
            return svg.to_string();
        }
        svg.replace(placeholder, &self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table() {
        let themes = ThemeMode::defaults();
        assert_eq!(themes[0], ThemeMode::new("light", "#000000"));
        assert_eq!(themes[1], ThemeMode::new("dark", "#FFFFFF"));
    }

    #[test]
    fn apply_replaces_every_placeholder() {
        let svg = r#"<path fill="currentColor"/><path stroke="currentColor"/>"#;
        let out = ThemeMode::dark().apply(svg, DEFAULT_PLACEHOLDER);
        assert_eq!(out, r##"<path fill="#FFFFFF"/><path stroke="#FFFFFF"/>"##);
    }

    #[test]
    fn apply_with_empty_placeholder_is_identity() {
        let svg = "<svg/>";
        assert_eq!(ThemeMode::light().apply(svg, ""), svg);
    }

    #[test]
    fn rgb_parses_hex() {
        let rgb = ThemeMode::dark().rgb().unwrap();
        assert_eq!((rgb.red, rgb.green, rgb.blue), (255, 255, 255));

        let short = ThemeMode::new("accent", "#f00").rgb().unwrap();
        assert_eq!((short.red, short.green, short.blue), (255, 0, 0));
    }

    #[test]
    fn rgb_rejects_garbage() {
        let err = ThemeMode::new("broken", "not-a-color").rgb().unwrap_err();
        assert!(matches!(err, WorkflowError::Config(_)));

        let bare = ThemeMode::new("dark", "FFFFFF").rgb().unwrap_err();
        assert!(matches!(bare, WorkflowError::Config(ref msg) if msg.contains("`#`")));
    }
}
