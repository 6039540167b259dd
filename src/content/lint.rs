//! Authoring checks for the static content.
//!
//! Rendering never validates anything; these checks run before a bundle is
//! written and in the test suite, so an authoring mistake (duplicate list key,
//! blank text) is caught at build time.

use std::collections::HashSet;
use std::fmt;

use crate::content::types::SiteContent;
use crate::error::ContentError;

/// A single authoring defect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentIssue {
    /// Two entries of a keyed collection share an id.
    DuplicateId { collection: &'static str, id: &'static str },
    /// A text field that is rendered verbatim is empty or whitespace.
    BlankField {
        collection: &'static str,
        key: String,
        field: &'static str,
    },
}

impl fmt::Display for ContentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentIssue::DuplicateId { collection, id } => {
                write!(f, "duplicate id '{}' in {}", id, collection)
            }
            ContentIssue::BlankField { collection, key, field } => {
                write!(f, "blank {} on {} entry '{}'", field, collection, key)
            }
        }
    }
}

/// Run every check, returning all issues found.
pub fn collect_issues(site: &SiteContent) -> Vec<ContentIssue> {
    let mut issues = Vec::new();

    duplicate_ids(
        "practice_types",
        site.practice_types.iter().map(|p| p.id),
        &mut issues,
    );
    duplicate_ids("categories", site.categories.iter().map(|c| c.id), &mut issues);

    for practice in site.practice_types {
        blank("practice_types", practice.id, "id", practice.id, &mut issues);
        blank("practice_types", practice.id, "title", practice.title, &mut issues);
        blank("practice_types", practice.id, "description", practice.description, &mut issues);
        if let Some(origin) = practice.origin {
            blank("practice_types", practice.id, "origin", origin, &mut issues);
        }
        for example in practice.examples {
            blank("examples", example.name, "name", example.name, &mut issues);
            blank("examples", example.name, "background", example.background, &mut issues);
            for (idx, feature) in example.key_features.unwrap_or_default().iter().enumerate() {
                let key = format!("{} feature {}", example.name, idx + 1);
                blank("examples", &key, "key_feature", feature, &mut issues);
            }
            if let Some(significance) = example.significance {
                blank("examples", example.name, "significance", significance, &mut issues);
            }
        }
    }

    for category in site.categories {
        blank("categories", category.id, "id", category.id, &mut issues);
        blank("categories", category.id, "title", category.title, &mut issues);
        blank("categories", category.id, "description", category.description, &mut issues);
    }

    blank("brand", "brand", "name", site.brand.name, &mut issues);
    blank("brand", "brand", "tagline", site.brand.tagline, &mut issues);
    for (idx, item) in site.nav_items.iter().enumerate() {
        blank("nav_items", &format!("item {}", idx + 1), "label", item, &mut issues);
    }

    blank("hero", "hero", "heading_lead", site.hero.heading_lead, &mut issues);
    blank("hero", "hero", "heading_highlight", site.hero.heading_highlight, &mut issues);
    blank("hero", "hero", "body", site.hero.body, &mut issues);
    blank("hero", "hero", "button_label", site.hero.button_label, &mut issues);

    let what = &site.intro.what_is_sadhana;
    blank("intro", "what_is_sadhana", "title", what.title, &mut issues);
    blank("intro", "what_is_sadhana", "content", what.content, &mut issues);
    for (idx, benefit) in what.benefits.iter().enumerate() {
        blank("benefits", &format!("benefit {}", idx + 1), "text", benefit, &mut issues);
    }
    blank("intro", "how_to_start", "title", site.intro.how_to_start.title, &mut issues);

    for (idx, step) in site.intro.how_to_start.steps.iter().enumerate() {
        let key = format!("step {}", idx + 1);
        blank("steps", &key, "title", step.title, &mut issues);
        blank("steps", &key, "description", step.description, &mut issues);
    }

    for entry in site.history.timeline {
        blank("timeline", entry.era, "era", entry.era, &mut issues);
        blank("timeline", entry.era, "development", entry.development, &mut issues);
    }

    let cta = &site.call_to_action;
    blank("call_to_action", "call_to_action", "heading", cta.heading, &mut issues);
    blank("call_to_action", "call_to_action", "body", cta.body, &mut issues);
    blank("call_to_action", "call_to_action", "button_label", cta.button_label, &mut issues);

    issues
}

/// Fail with every issue if the content has any authoring defect.
pub fn check(site: &SiteContent) -> Result<(), ContentError> {
    let issues = collect_issues(site);
    if issues.is_empty() {
        Ok(())
    } else {
        Err(ContentError::Authoring(issues))
    }
}

fn duplicate_ids(
    collection: &'static str,
    ids: impl Iterator<Item = &'static str>,
    issues: &mut Vec<ContentIssue>,
) {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for id in ids {
        if !seen.insert(id) && reported.insert(id) {
            issues.push(ContentIssue::DuplicateId { collection, id });
        }
    }
}

fn blank(
    collection: &'static str,
    key: &str,
    field: &'static str,
    value: &str,
    issues: &mut Vec<ContentIssue>,
) {
    if value.trim().is_empty() {
        issues.push(ContentIssue::BlankField {
            collection,
            key: key.to_string(),
            field,
        });
    }
}
