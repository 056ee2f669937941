//! SVG export: render a component, extract the `<svg>` root, write it out.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use heck::ToKebabCase;
use regex::Regex;
use tracing::{debug, info};

use crate::error::{Result, WorkflowError};
use crate::icon::{Icon, IconComponent};

/// First `<svg` through last `</svg>`, any case, across lines.
static SVG_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<svg[^>]*>.*</svg>").expect("SVG element pattern is valid")
});

static LETTER_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z])([0-9])").expect("letter-digit pattern is valid"));

static DIGIT_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9])([A-Za-z])").expect("digit-letter pattern is valid"));

/// Lowercase, hyphen-separated filename stem for a title.
///
/// Digit runs form their own words: `Qwen2` becomes `qwen-2` and `GPT4o`
/// becomes `gpt-4-o`.
pub fn slugify(title: &str) -> String {
    let spaced = LETTER_DIGIT.replace_all(title, "${1} ${2}");
    let spaced = DIGIT_LETTER.replace_all(&spaced, "${1} ${2}");
    spaced.to_kebab_case()
}

/// Returns the root `<svg>` element of rendered markup, if any.
pub fn extract_svg(markup: &str) -> Option<&str> {
    SVG_ELEMENT.find(markup).map(|m| m.as_str())
}

/// Writes SVG files into a single output directory.
#[derive(Debug, Clone)]
pub struct SvgExporter {
    output_dir: PathBuf,
}

impl SvgExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path a component named `name` is written to.
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(format!("{}.svg", slugify(name)))
    }

    /// Renders `component`, extracts its SVG and writes it under `name`.
    pub fn export_svg(&self, component: &IconComponent, name: &str) -> Result<PathBuf> {
        let markup = component.render()?;
        let svg = extract_svg(&markup).ok_or_else(|| WorkflowError::MissingSvgContent {
            name: name.to_string(),
        })?;

        let path = self.output_path(name);
        std::fs::write(&path, svg).map_err(|e| WorkflowError::io(&path, e))?;
        info!(path = %path.display(), "Exported SVG");
        Ok(path)
    }

    /// Exports every variant of `icon`, base first.
    ///
    /// Stops at the first failing variant; files written before the failure
    /// are kept.
    pub fn export_icon(&self, icon: &Icon) -> Result<Vec<PathBuf>> {
        if icon.title.trim().is_empty() {
            return Err(WorkflowError::EmptyTitle);
        }

        let mut written = Vec::new();
        for (kind, component) in icon.variants() {
            debug!(icon = %icon.title, variant = ?kind, "Exporting variant");
            written.push(self.export_svg(component, &icon.variant_name(kind))?);
        }
        Ok(written)
    }
}
