//! Static site bundle writer.
//!
//! Lints the content, renders every format and writes them to one directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::RenderOptions;
use crate::content::{lint, SiteContent};
use crate::error::{PageError, Result};
use crate::page::RenderedPage;

pub const HTML_FILE: &str = "index.html";
pub const MARKDOWN_FILE: &str = "page.md";
pub const READER_FILE: &str = "reader.html";
pub const JSON_FILE: &str = "page.json";

/// Write the bundle into `output_dir`, creating it if needed.
///
/// Returns the written paths in a fixed order: HTML, Markdown, reader, JSON.
pub fn write_bundle(
    site: &SiteContent,
    options: &RenderOptions,
    output_dir: &Path,
) -> Result<Vec<PathBuf>> {
    lint::check(site)?;

    let page = RenderedPage::render(site, options)?;

    fs::create_dir_all(output_dir).map_err(|source| PageError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let files = [
        (HTML_FILE, &page.html),
        (MARKDOWN_FILE, &page.markdown),
        (READER_FILE, &page.reader_html),
        (JSON_FILE, &page.json),
    ];

    let mut written = Vec::with_capacity(files.len());
    for (name, contents) in files {
        let path = output_dir.join(name);
        fs::write(&path, contents).map_err(|source| PageError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::info!("Wrote {} ({} bytes)", path.display(), contents.len());
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::types::{Category, Glyph};
    use crate::content::SITE;
    use crate::error::ContentError;

    #[test]
    fn test_writes_all_files() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("site");

        let written = write_bundle(&SITE, &RenderOptions::default(), &out).unwrap();

        let names: Vec<_> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["index.html", "page.md", "reader.html", "page.json"]);

        let html = fs::read_to_string(out.join(HTML_FILE)).unwrap();
        assert!(html.contains("Shiva Sadhanas"));

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out.join(JSON_FILE)).unwrap()).unwrap();
        assert_eq!(json["active_tab"], "home");
    }

    #[test]
    fn test_lint_failure_writes_nothing() {
        const CATEGORY: Category = Category {
            id: "rituals",
            title: "Rituals",
            description: "Ceremonies",
            icon: Glyph::Star,
            color: "from-amber-500 to-orange-600",
            bg_color: "bg-amber-50",
        };
        let mut site = SITE;
        site.categories = &[CATEGORY, CATEGORY];

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("site");
        let err = write_bundle(&site, &RenderOptions::default(), &out).unwrap_err();

        assert!(matches!(err, PageError::Content(ContentError::Authoring(_))));
        assert!(!out.exists());
    }
}
