//! View models for the landing page.
//!
//! Render-ready structures consumed by the HTML templates, the Markdown
//! generator and the JSON API. Built from `SiteContent` by `view_builder`.

use serde::Serialize;

use crate::content::types::{Brand, CallToAction, Glyph, Hero, TimelineEntry};

/// Navigation tab selector.
///
/// Initialised to `Home` and never changed or read by the rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActiveTab {
    #[default]
    Home,
    Practices,
    Learn,
    Community,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub active_tab: ActiveTab,
    pub brand: Brand,
    pub nav_items: Vec<&'static str>,
    pub hero: Hero,
    pub intro: IntroView,
    pub history: HistoryView,
    pub practice_types: Vec<PracticeCard>,
    pub categories: CategoriesView,
    pub call_to_action: CallToAction,
}

// ============================================================================
// Introduction
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct IntroView {
    pub title: &'static str,
    pub content: &'static str,
    pub benefits_heading: &'static str,
    pub benefits: Vec<&'static str>,
    pub steps_title: &'static str,
    pub steps: Vec<StepView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepView {
    /// 1-based position in the step list.
    pub rank: usize,
    pub title: &'static str,
    pub description: &'static str,
}

// ============================================================================
// History and practice types
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct HistoryView {
    pub heading: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub timeline: Vec<TimelineEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PracticeCard {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub origin: Option<&'static str>,
    pub examples: Vec<ExampleView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExampleView {
    pub name: &'static str,
    pub background: &'static str,
    /// Present only when the record declares a non-empty list.
    pub key_features: Option<Vec<&'static str>>,
    pub significance: Option<&'static str>,
}

// ============================================================================
// Categories
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CategoriesView {
    pub heading: &'static str,
    pub link_label: &'static str,
    pub cards: Vec<CategoryCard>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryCard {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Glyph,
    pub color: &'static str,
    pub bg_color: &'static str,
}

impl CategoryCard {
    /// Classes for the tinted tile behind the icon.
    pub fn tile_class(&self) -> String {
        format!(
            "w-12 h-12 rounded-lg {} flex items-center justify-center mb-4",
            self.bg_color
        )
    }

    /// Classes for the gradient icon itself.
    pub fn icon_class(&self) -> String {
        format!("w-6 h-6 bg-gradient-to-r {} bg-clip-text text-transparent", self.color)
    }
}
