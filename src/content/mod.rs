//! Static Page Content
//!
//! Compile-time records the landing page is rendered from.
//!
//! ## Sections
//! 1. Site chrome - brand, navigation, hero, call to action
//! 2. Introduction - what a sadhana is, benefits, first steps
//! 3. History - overview and timeline of eras
//! 4. Practice types - Shiva, Devi and specialized sadhanas with examples
//! 5. Categories - meditation, mantras, rituals

pub mod types;
pub mod intro;
pub mod history;
pub mod practices;
pub mod categories;
pub mod site;
pub mod lint;

pub use types::*;
pub use site::SITE;
pub use practices::SADHANA_TYPES;
pub use categories::CATEGORIES;
pub use lint::{check, ContentIssue};
