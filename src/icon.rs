//! Icon types for the export workflow.
//!
//! An [`Icon`] is one glyph with a required title, an optional primary color
//! and up to five sub-variants. Every variant is an [`IconComponent`] that can
//! render itself to static markup. Icons are grouped in an [`IconLibrary`].

use std::path::PathBuf;

use crate::error::{Result, WorkflowError};

// ============================================================================
// IconComponent
// ============================================================================

/// A renderable unit that produces static markup.
///
/// Rendered markup may contain wrapper elements around the `<svg>` root; the
/// exporter extracts the SVG fragment afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconComponent {
    /// Markup held in memory.
    Markup(String),

    /// Markup read from a file at render time.
    File(PathBuf),
}

impl IconComponent {
    /// Creates a component from in-memory markup.
    pub fn from_markup(markup: impl Into<String>) -> Self {
        Self::Markup(markup.into())
    }

    /// Creates a component backed by a file on disk.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    /// Renders this component to static markup.
    ///
    /// Rendering is deterministic: the same component always yields the same
    /// string.
    pub fn render(&self) -> Result<String> {
        match self {
            Self::Markup(markup) => Ok(markup.clone()),
            Self::File(path) => {
                std::fs::read_to_string(path).map_err(|e| WorkflowError::io(path, e))
            }
        }
    }
}

impl<S: Into<String>> From<S> for IconComponent {
    fn from(s: S) -> Self {
        Self::Markup(s.into())
    }
}

// ============================================================================
// VariantKind
// ============================================================================

/// The named variants an icon may expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VariantKind {
    Base,
    Color,
    Text,
    TextCn,
    Brand,
    BrandColor,
}

impl VariantKind {
    /// All kinds, in export order.
    pub const ALL: [VariantKind; 6] = [
        Self::Base,
        Self::Color,
        Self::Text,
        Self::TextCn,
        Self::Brand,
        Self::BrandColor,
    ];

    /// Suffix appended to the icon title to name this variant's file.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Base => "",
            Self::Color => "-color",
            Self::Text => "-text",
            Self::TextCn => "-text-cn",
            Self::Brand => "-brand",
            Self::BrandColor => "-brand-color",
        }
    }
}

// ============================================================================
// Icon
// ============================================================================

/// A single glyph with its optional sub-variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    /// Display title; its slug names the exported files.
    pub title: String,

    /// Primary brand color. Icons without one are skipped by the exporter.
    pub color_primary: Option<String>,

    /// The default (monochrome) rendering.
    pub component: IconComponent,

    pub color: Option<IconComponent>,
    pub text: Option<IconComponent>,
    pub text_cn: Option<IconComponent>,
    pub brand: Option<IconComponent>,
    pub brand_color: Option<IconComponent>,
}

impl Icon {
    /// Creates an icon with only a base component.
    pub fn new(title: impl Into<String>, component: impl Into<IconComponent>) -> Self {
        Self {
            title: title.into(),
            color_primary: None,
            component: component.into(),
            color: None,
            text: None,
            text_cn: None,
            brand: None,
            brand_color: None,
        }
    }

    /// Sets the primary color.
    pub fn with_color_primary(mut self, color: impl Into<String>) -> Self {
        self.color_primary = Some(color.into());
        self
    }

    /// Attaches a sub-variant. Setting [`VariantKind::Base`] replaces the
    /// base component.
    pub fn with_variant(mut self, kind: VariantKind, component: impl Into<IconComponent>) -> Self {
        let component = component.into();
        match kind {
            VariantKind::Base => self.component = component,
            VariantKind::Color => self.color = Some(component),
            VariantKind::Text => self.text = Some(component),
            VariantKind::TextCn => self.text_cn = Some(component),
            VariantKind::Brand => self.brand = Some(component),
            VariantKind::BrandColor => self.brand_color = Some(component),
        }
        self
    }

    /// Returns the component for `kind`, if present.
    pub fn variant(&self, kind: VariantKind) -> Option<&IconComponent> {
        match kind {
            VariantKind::Base => Some(&self.component),
            VariantKind::Color => self.color.as_ref(),
            VariantKind::Text => self.text.as_ref(),
            VariantKind::TextCn => self.text_cn.as_ref(),
            VariantKind::Brand => self.brand.as_ref(),
            VariantKind::BrandColor => self.brand_color.as_ref(),
        }
    }

    /// Iterates over the present variants, base first.
    pub fn variants(&self) -> impl Iterator<Item = (VariantKind, &IconComponent)> {
        VariantKind::ALL
            .into_iter()
            .filter_map(|kind| self.variant(kind).map(|c| (kind, c)))
    }

    /// The unslugified output name of a variant, e.g. `Orbit-text-cn`.
    pub fn variant_name(&self, kind: VariantKind) -> String {
        format!("{}{}", self.title, kind.suffix())
    }

    /// Returns true if the exporter should include this icon.
    pub fn is_exportable(&self) -> bool {
        self.color_primary.as_deref().is_some_and(|c| !c.is_empty())
    }
}

// ============================================================================
// IconLibrary
// ============================================================================

/// An ordered collection of icons.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IconLibrary {
    pub icons: Vec<Icon>,
}

impl IconLibrary {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self { icons: Vec::new() }
    }

    pub fn from_icons(icons: Vec<Icon>) -> Self {
        Self { icons }
    }

    pub fn add_icon(&mut self, icon: Icon) {
        self.icons.push(icon);
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Icons that carry a primary color.
    pub fn exportable(&self) -> impl Iterator<Item = &Icon> {
        self.icons.iter().filter(|icon| icon.is_exportable())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Icon> {
        self.icons.iter()
    }
}

impl IntoIterator for IconLibrary {
    type Item = Icon;
    type IntoIter = std::vec::IntoIter<Icon>;

    fn into_iter(self) -> Self::IntoIter {
        self.icons.into_iter()
    }
}

impl<'a> IntoIterator for &'a IconLibrary {
    type Item = &'a Icon;
    type IntoIter = std::slice::Iter<'a, Icon>;

    fn into_iter(self) -> Self::IntoIter {
        self.icons.iter()
    }
}
