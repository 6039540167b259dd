//! Section wrapper shared by every page block.
//!
//! Constrains content to the page width, applies the horizontal padding and
//! renders an `<h2>` only when a title is given.

use askama::Template;

#[derive(Debug, Clone, Copy, Default)]
pub struct Section<'a> {
    pub title: Option<&'a str>,
    pub class_name: &'a str,
}

impl<'a> Section<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn class(mut self, class_name: &'a str) -> Self {
        self.class_name = class_name;
        self
    }

    /// Wrap already-rendered markup. `body` is inserted unescaped.
    pub fn wrap(&self, body: &str) -> Result<String, askama::Error> {
        SectionTemplate {
            title: self.title,
            class_name: self.class_name,
            body,
        }
        .render()
    }
}

#[derive(Template)]
#[template(path = "partials/section.html")]
struct SectionTemplate<'a> {
    title: Option<&'a str>,
    class_name: &'a str,
    body: &'a str,
}
