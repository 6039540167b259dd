//! View Builder - converts site content to the page view model.
//!
//! Pure and infallible: every input is a compile-time constant. Order of every
//! collection is preserved.

use crate::content::types::{PracticeExample, PracticeType, SiteContent};
use crate::page::view_models::*;

/// Build the complete page view from site content.
pub fn build_page(site: &SiteContent) -> PageView {
    PageView {
        active_tab: ActiveTab::default(),
        brand: site.brand,
        nav_items: site.nav_items.to_vec(),
        hero: site.hero,
        intro: build_intro(site),
        history: build_history(site),
        practice_types: site.practice_types.iter().map(build_practice_card).collect(),
        categories: build_categories(site),
        call_to_action: site.call_to_action,
    }
}

fn build_intro(site: &SiteContent) -> IntroView {
    let what = &site.intro.what_is_sadhana;
    let how = &site.intro.how_to_start;

    IntroView {
        title: what.title,
        content: what.content,
        benefits_heading: site.headings.benefits,
        benefits: what.benefits.to_vec(),
        steps_title: how.title,
        steps: how
            .steps
            .iter()
            .enumerate()
            .map(|(idx, step)| StepView {
                rank: idx + 1,
                title: step.title,
                description: step.description,
            })
            .collect(),
    }
}

fn build_history(site: &SiteContent) -> HistoryView {
    HistoryView {
        heading: site.headings.history,
        title: site.history.title,
        description: site.history.description,
        timeline: site.history.timeline.to_vec(),
    }
}

fn build_practice_card(practice: &PracticeType) -> PracticeCard {
    PracticeCard {
        id: practice.id,
        title: practice.title,
        description: practice.description,
        origin: practice.origin.filter(|o| !o.trim().is_empty()),
        examples: practice.examples.iter().map(build_example).collect(),
    }
}

fn build_example(example: &PracticeExample) -> ExampleView {
    ExampleView {
        name: example.name,
        background: example.background,
        key_features: example.displayed_key_features().map(|f| f.to_vec()),
        significance: example.displayed_significance(),
    }
}

fn build_categories(site: &SiteContent) -> CategoriesView {
    CategoriesView {
        heading: site.headings.categories,
        link_label: site.headings.learn_more,
        cards: site
            .categories
            .iter()
            .map(|c| CategoryCard {
                id: c.id,
                title: c.title,
                description: c.description,
                icon: c.icon,
                color: c.color,
                bg_color: c.bg_color,
            })
            .collect(),
    }
}
