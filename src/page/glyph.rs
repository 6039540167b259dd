//! Inline SVG glyphs.
//!
//! `Om` is the decorative brand symbol; the rest are the stroke icons the page
//! uses for bullets, links and category tiles. Size and colour come from the
//! caller's class string.

use askama::Template;

pub use crate::content::types::Glyph;

const OM_ATTRIBUTES: &str = r#"viewBox="0 0 100 100" fill="currentColor""#;
const ICON_ATTRIBUTES: &str = r#"viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round""#;

impl Glyph {
    pub fn svg_path(&self) -> &'static str {
        match self {
            Glyph::Om => r#"<path d="M50,10 C70,10 85,25 85,45 C85,65 70,80 50,80 C30,80 15,65 15,45 C15,25 30,10 50,10 Z M50,20 C35,20 25,30 25,45 C25,60 35,70 50,70 C65,70 75,60 75,45 C75,30 65,20 50,20 Z M60,45 C60,50 55,55 50,55 C45,55 40,50 40,45 C40,40 45,35 50,35 C55,35 60,40 60,45 Z M50,0 L50,100 M0,50 L100,50" stroke-width="5" stroke="currentColor" fill="none"/>"#,
            Glyph::ArrowRight => r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#,
            Glyph::ChevronRight => r#"<path d="m9 18 6-6-6-6"/>"#,
            Glyph::Moon => r#"<path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"/>"#,
            Glyph::Heart => r#"<path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z"/>"#,
            Glyph::Star => r#"<polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>"#,
        }
    }

    fn svg_attributes(&self) -> &'static str {
        match self {
            Glyph::Om => OM_ATTRIBUTES,
            _ => ICON_ATTRIBUTES,
        }
    }

    /// Render as a standalone `<svg>` element carrying `class_name`.
    pub fn render(&self, class_name: &str) -> Result<String, askama::Error> {
        GlyphTemplate {
            class_name,
            attributes: self.svg_attributes(),
            paths: self.svg_path(),
        }
        .render()
    }
}

#[derive(Template)]
#[template(path = "partials/glyph.html")]
struct GlyphTemplate<'a> {
    class_name: &'a str,
    attributes: &'a str,
    paths: &'a str,
}
