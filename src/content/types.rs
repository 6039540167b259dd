//! Record types for the page content.
//!
//! Everything here is built from `&'static` data so the whole site can live
//! in `const` items. Sequences are slices; declaration order is display order.

use serde::Serialize;

/// "What is Sadhana?" block of the introduction.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PracticeIntro {
    pub title: &'static str,
    pub content: &'static str,
    pub benefits: &'static [&'static str],
}

/// One onboarding step. Rank is its position in the parent slice.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OnboardingStep {
    pub title: &'static str,
    pub description: &'static str,
}

/// "How to Begin Your Journey" block of the introduction.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HowToStart {
    pub title: &'static str,
    pub steps: &'static [OnboardingStep],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct IntroContent {
    pub what_is_sadhana: PracticeIntro,
    pub how_to_start: HowToStart,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TimelineEntry {
    pub era: &'static str,
    pub development: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct HistoryOverview {
    pub title: &'static str,
    pub description: &'static str,
    pub timeline: &'static [TimelineEntry],
}

/// A named sadhana inside a practice-type card.
///
/// `key_features` and `significance` are independent: an example may carry
/// either, both or neither.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PracticeExample {
    pub name: &'static str,
    pub background: &'static str,
    pub key_features: Option<&'static [&'static str]>,
    pub significance: Option<&'static str>,
}

impl PracticeExample {
    /// Key features worth displaying: `None` when absent or empty.
    pub fn displayed_key_features(&self) -> Option<&'static [&'static str]> {
        self.key_features.filter(|features| !features.is_empty())
    }

    /// Significance worth displaying: `None` when absent or blank.
    pub fn displayed_significance(&self) -> Option<&'static str> {
        self.significance.filter(|s| !s.trim().is_empty())
    }
}

/// A grouping of related sadhanas (e.g. Shiva-oriented practices).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PracticeType {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub origin: Option<&'static str>,
    pub examples: &'static [PracticeExample],
}

/// Symbol a record refers to. Drawing lives in `page::glyph`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Glyph {
    Om,
    ArrowRight,
    ChevronRight,
    Moon,
    Heart,
    Star,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Glyph,
    /// Tailwind gradient stops, e.g. `from-purple-500 to-indigo-600`.
    pub color: &'static str,
    /// Tailwind background tint for the icon tile.
    pub bg_color: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Brand {
    pub name: &'static str,
    pub tagline: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Hero {
    pub heading_lead: &'static str,
    pub heading_highlight: &'static str,
    pub body: &'static str,
    pub button_label: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CallToAction {
    pub heading: &'static str,
    pub body: &'static str,
    pub button_label: &'static str,
}

/// Fixed headings and labels that are not attached to a content record.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Headings {
    pub benefits: &'static str,
    pub history: &'static str,
    pub categories: &'static str,
    pub learn_more: &'static str,
}

/// Everything the page is rendered from.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SiteContent {
    pub brand: Brand,
    pub nav_items: &'static [&'static str],
    pub hero: Hero,
    pub intro: IntroContent,
    pub history: HistoryOverview,
    pub practice_types: &'static [PracticeType],
    pub categories: &'static [Category],
    pub call_to_action: CallToAction,
    pub headings: Headings,
}
