//! Landing Page Rendering
//!
//! Turns `SiteContent` into documents.
//!
//! ## Pipeline
//! 1. `view_builder` - content records to `PageView`
//! 2. `html` - askama templates, composed through the `layout` wrapper and `glyph` icons
//! 3. `markdown` - frontmatter + sections
//! 4. `reader` - Markdown to plain HTML via pulldown-cmark
//! 5. JSON - `serde_json` over `PageView`

pub mod glyph;
pub mod layout;
pub mod view_models;
pub mod view_builder;
pub mod html;
pub mod markdown;
pub mod reader;

use crate::config::RenderOptions;
use crate::content::SiteContent;
use crate::error::Result;

pub use view_builder::build_page;
pub use view_models::{ActiveTab, PageView};

/// Every rendition of the page, produced once.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub view: PageView,
    pub html: String,
    pub markdown: String,
    pub reader_html: String,
    pub json: String,
}

impl RenderedPage {
    pub fn render(site: &SiteContent, options: &RenderOptions) -> Result<Self> {
        let view = build_page(site);
        let html = html::render_page(&view, options)?;
        let markdown = markdown::generate(&view)?;
        let reader_html = reader::render_reader(&options.page_title, &markdown)?;
        let json = serde_json::to_string_pretty(&view)?;

        tracing::debug!(
            html_bytes = html.len(),
            markdown_bytes = markdown.len(),
            "Rendered page"
        );

        Ok(Self {
            view,
            html,
            markdown,
            reader_html,
            json,
        })
    }
}
