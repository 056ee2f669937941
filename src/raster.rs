//! SVG rasterization using resvg/usvg, encoded with `image`.
//!
//! The converter substitutes a theme color for the placeholder token, renders
//! the SVG at a fixed pixel height and encodes the result as PNG or WebP.

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};
use tracing::info;

use crate::error::{Result, WorkflowError};
use crate::theme::ThemeMode;

// ============================================================================
// RasterFormat
// ============================================================================

/// Output encodings produced by the raster phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RasterFormat {
    Png,
    WebP,
}

impl RasterFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::WebP => "webp",
        }
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::WebP => ImageFormat::WebP,
        }
    }
}

impl std::fmt::Display for RasterFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Png => "PNG",
            Self::WebP => "WebP",
        })
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Renders SVG markup to an RGBA image exactly `height` pixels tall.
///
/// Width follows the SVG's aspect ratio, rounded to the nearest pixel and
/// never less than one. `source` is only used for error messages.
pub fn render_svg_at_height(svg_data: &str, height: u32, source: &Path) -> Result<RgbaImage> {
    let opts = Options::default();
    let tree = Tree::from_str(svg_data, &opts).map_err(|e| WorkflowError::SvgParse {
        path: source.to_path_buf(),
        source: e,
    })?;

    let svg_size = tree.size();
    let scale = height as f32 / svg_size.height();
    let width = ((svg_size.width() * scale).round() as u32).max(1);

    let mut pixmap = Pixmap::new(width, height).ok_or(WorkflowError::Canvas { width, height })?;
    resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());

    Ok(pixmap_to_rgba_image(&pixmap))
}

/// Converts a tiny_skia Pixmap to an image::RgbaImage.
fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let mut img = RgbaImage::new(pixmap.width(), pixmap.height());

    for (pixel, out) in pixmap.pixels().iter().zip(img.pixels_mut()) {
        // tiny_skia stores premultiplied alpha
        let (r, g, b, a) = unpremultiply(pixel.red(), pixel.green(), pixel.blue(), pixel.alpha());
        *out = Rgba([r, g, b, a]);
    }

    img
}

/// Undoes tiny_skia's alpha premultiplication for one pixel. Fully
/// transparent pixels map to transparent black.
fn unpremultiply(r: u8, g: u8, b: u8, a: u8) -> (u8, u8, u8, u8) {
    if a == 0 {
        (0, 0, 0, 0)
    } else {
        let a_f = a as f32 / 255.0;
        (
            (r as f32 / a_f).round().min(255.0) as u8,
            (g as f32 / a_f).round().min(255.0) as u8,
            (b as f32 / a_f).round().min(255.0) as u8,
            a,
        )
    }
}

/// Encodes an image in the given format.
pub fn encode(img: RgbaImage, format: RasterFormat) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(img).write_to(&mut Cursor::new(&mut bytes), format.image_format())?;
    Ok(bytes)
}

// ============================================================================
// Converter
// ============================================================================

/// Settings shared by every conversion in a raster phase.
#[derive(Debug, Clone)]
pub struct RasterConverter {
    pub height: u32,
    pub placeholder: String,
}

impl RasterConverter {
    pub fn new(height: u32, placeholder: impl Into<String>) -> Self {
        Self {
            height,
            placeholder: placeholder.into(),
        }
    }

    /// Reads `svg_path`, themes it, rasterizes it and writes `output_path`.
    ///
    /// Missing parent directories of `output_path` are created.
    pub fn convert(
        &self,
        svg_path: &Path,
        output_path: &Path,
        theme: &ThemeMode,
        format: RasterFormat,
    ) -> Result<()> {
        let svg = std::fs::read_to_string(svg_path).map_err(|e| WorkflowError::io(svg_path, e))?;
        let themed = theme.apply(&svg, &self.placeholder);

        let img = render_svg_at_height(&themed, self.height, svg_path)?;
        let bytes = encode(img, format)?;

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| WorkflowError::io(parent, e))?;
        }
        std::fs::write(output_path, bytes).map_err(|e| WorkflowError::io(output_path, e))?;

        info!(path = %output_path.display(), theme = %theme.name, "{format} file has been saved");
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const STROKE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"><path d="M2 12H22" stroke="currentColor" stroke-width="6"/></svg>"#;

    const WIDE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 48 24"><rect width="48" height="24" fill="currentColor"/></svg>"#;

    #[test]
    fn render_hits_requested_height() {
        let img = render_svg_at_height(STROKE_SVG, 100, Path::new("stroke.svg")).unwrap();
        assert_eq!(img.height(), 100);
        assert_eq!(img.width(), 100);
    }

    #[test]
    fn render_preserves_aspect_ratio() {
        let img = render_svg_at_height(WIDE_SVG, 50, Path::new("wide.svg")).unwrap();
        assert_eq!(img.height(), 50);
        assert_eq!(img.width(), 100);
    }

    #[test]
    fn render_rejects_invalid_svg() {
        let err = render_svg_at_height("<svg", 10, Path::new("bad.svg")).unwrap_err();
        assert!(matches!(err, WorkflowError::SvgParse { .. }));
    }

    #[test]
    fn themed_stroke_takes_theme_color() {
        let light = ThemeMode::light().apply(STROKE_SVG, "currentColor");
        let dark = ThemeMode::dark().apply(STROKE_SVG, "currentColor");

        let light_img = render_svg_at_height(&light, 48, Path::new("light.svg")).unwrap();
        let dark_img = render_svg_at_height(&dark, 48, Path::new("dark.svg")).unwrap();

        assert_eq!(light_img.get_pixel(24, 24).0, [0, 0, 0, 255]);
        assert_eq!(dark_img.get_pixel(24, 24).0, [255, 255, 255, 255]);
        // Off the stroke stays transparent.
        assert_eq!(dark_img.get_pixel(24, 2).0[3], 0);
    }

    #[test]
    fn encode_produces_expected_container() {
        let img = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 255]));

        let png = encode(img.clone(), RasterFormat::Png).unwrap();
        assert_eq!(image::guess_format(&png).unwrap(), ImageFormat::Png);

        let webp = encode(img, RasterFormat::WebP).unwrap();
        assert_eq!(image::guess_format(&webp).unwrap(), ImageFormat::WebP);
    }

    #[test]
    fn convert_writes_into_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let svg_path = dir.path().join("stroke.svg");
        std::fs::write(&svg_path, STROKE_SVG).unwrap();
        let out = dir.path().join("out").join("dark").join("stroke.webp");

        let converter = RasterConverter::new(32, "currentColor");
        converter
            .convert(&svg_path, &out, &ThemeMode::dark(), RasterFormat::WebP)
            .unwrap();

        let decoded = image::open(&out).unwrap();
        assert_eq!(decoded.height(), 32);
    }

    #[test]
    fn unpremultiply_handles_transparency() {
        assert_eq!(unpremultiply(0, 0, 0, 0), (0, 0, 0, 0));
        assert_eq!(unpremultiply(128, 0, 0, 128), (255, 0, 0, 128));
    }

    #[test]
    fn format_extensions() {
        assert_eq!(RasterFormat::Png.extension(), "png");
        assert_eq!(RasterFormat::WebP.extension(), "webp");
        assert_eq!(RasterFormat::WebP.to_string(), "WebP");
    }
}
