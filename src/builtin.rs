//! The icon collection bundled with the tool.
//!
//! Markup mirrors what a component renderer emits: the `<svg>` root may sit
//! inside wrapper elements and monochrome glyphs paint with `currentColor`.

use crate::icon::{Icon, IconLibrary, VariantKind};

const ORBIT: &str = r#"<span class="icon" role="img"><svg xmlns="http://www.w3.org/2000/svg" width="1em" height="1em" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><title>Orbit</title><circle cx="12" cy="12" r="3" fill="currentColor"/><ellipse cx="12" cy="12" rx="10" ry="4.5" transform="rotate(-30 12 12)"/></svg></span>"#;

const ORBIT_COLOR: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="1em" height="1em" viewBox="0 0 24 24" fill="none" stroke-width="2"><title>Orbit</title><circle cx="12" cy="12" r="3" fill="#1F6FEB"/><ellipse cx="12" cy="12" rx="10" ry="4.5" stroke="#58A6FF" transform="rotate(-30 12 12)"/></svg>"##;

const ORBIT_TEXT: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="3.5em" height="1em" viewBox="0 0 84 24" fill="currentColor"><title>Orbit</title><path d="M10 4a8 8 0 1 1 0 16a8 8 0 0 1 0-16zm0 3a5 5 0 1 0 0 10a5 5 0 0 0 0-10zM22 4h3v16h-3zM30 4h3v16h-3zM38 4h3v16h-3zM46 4h10v3H49v3.5h6v3h-6V20h-3z"/></svg>"#;

const RELAY: &str = r#"<div style="display:flex"><svg xmlns="http://www.w3.org/2000/svg" width="1em" height="1em" viewBox="0 0 24 24" fill="currentColor"><title>Relay</title><path d="M4 6h10l-3-3h3l4 4-4 4h-3l3-3H4z"/><path d="M20 18H10l3 3h-3l-4-4 4-4h3l-3 3h10z"/></svg></div>"#;

const RELAY_BRAND: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="4em" height="1em" viewBox="0 0 96 24" fill="currentColor"><title>Relay</title><path d="M4 6h10l-3-3h3l4 4-4 4h-3l3-3H4z"/><path d="M20 18H10l3 3h-3l-4-4 4-4h3l-3 3h10z"/><rect x="30" y="6" width="60" height="12" rx="6"/></svg>"#;

const RELAY_BRAND_COLOR: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="4em" height="1em" viewBox="0 0 96 24"><title>Relay</title><path fill="#FF6A00" d="M4 6h10l-3-3h3l4 4-4 4h-3l3-3H4z"/><path fill="#FFB000" d="M20 18H10l3 3h-3l-4-4 4-4h3l-3 3h10z"/><rect x="30" y="6" width="60" height="12" rx="6" fill="currentColor"/></svg>"##;

const CUBE_STACK: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="1em" height="1em" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linejoin="round"><title>CubeStack</title><path d="M12 2l9 5-9 5-9-5z"/><path d="M3 12l9 5 9-5"/><path d="M3 17l9 5 9-5"/></svg>"#;

const CUBE_STACK_TEXT: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="4em" height="1em" viewBox="0 0 96 24" fill="currentColor"><title>CubeStack</title><path d="M4 6h12v3H7v6h9v3H4zM20 6h3v9h6V6h3v12H20zM36 6h10l2 2v2l-2 2 2 2v2l-2 2H36zm3 3v2h6V9zm0 5v2h6v-2zM52 6h12v3h-9v1.5h8v3h-8V15h9v3H52z"/></svg>"#;

const CUBE_STACK_TEXT_CN: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="2em" height="1em" viewBox="0 0 48 24" fill="currentColor"><title>CubeStack</title><path d="M3 4h18v3H3zM10 7h4v13h-4zM3 17h18v3H3zM27 4h18v16H27zm3 3v10h12V7z"/></svg>"#;

/// Draft glyph without a primary color; the exporter skips it.
const SKETCH: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor"><path d="M4 20l4-1 11-11-3-3L5 16z"/></svg>"#;

/// Builds the bundled icon library.
pub fn library() -> IconLibrary {
    IconLibrary::from_icons(vec![
        Icon::new("Orbit", ORBIT)
            .with_color_primary("#1F6FEB")
            .with_variant(VariantKind::Color, ORBIT_COLOR)
            .with_variant(VariantKind::Text, ORBIT_TEXT),
        Icon::new("Relay", RELAY)
            .with_color_primary("#FF6A00")
            .with_variant(VariantKind::Brand, RELAY_BRAND)
            .with_variant(VariantKind::BrandColor, RELAY_BRAND_COLOR),
        Icon::new("CubeStack", CUBE_STACK)
            .with_color_primary("#7C3AED")
            .with_variant(VariantKind::Text, CUBE_STACK_TEXT)
            .with_variant(VariantKind::TextCn, CUBE_STACK_TEXT_CN),
        Icon::new("Sketch", SKETCH),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::extract_svg;

    #[test]
    fn bundled_library_shape() {
        let library = library();
        assert_eq!(library.len(), 4);

        let exportable: Vec<_> = library.exportable().map(|i| i.title.as_str()).collect();
        assert_eq!(exportable, vec!["Orbit", "Relay", "CubeStack"]);

        let variant_count: usize = library.exportable().map(|i| i.variants().count()).sum();
        assert_eq!(variant_count, 9);
    }

    #[test]
    fn every_bundled_variant_contains_svg() {
        for icon in &library() {
            for (kind, component) in icon.variants() {
                let markup = component.render().unwrap();
                assert!(
                    extract_svg(&markup).is_some(),
                    "{} has no svg",
                    icon.variant_name(kind)
                );
            }
        }
    }
}
