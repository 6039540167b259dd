//! Sadhaka landing page.
//!
//! Static content for the Sadhaka spiritual-practice guide, rendered as an
//! HTML page, a Markdown article, a plain reader view and JSON.
//!
//! - `content/`: compile-time records and the authoring lint
//! - `page/`: view model, templates and renderers
//! - `bundle`: static site output
//! - `api_server` (feature `api`): axum server for the same renditions

pub mod config;
pub mod content;
pub mod error;
pub mod page;
pub mod bundle;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use config::{GeneratorConfig, RenderOptions, ServerConfig};
pub use content::{SiteContent, SITE};
pub use error::{ContentError, PageError};
pub use page::{build_page, PageView, RenderedPage};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
