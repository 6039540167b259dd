//! Markdown rendition of the landing page.
//!
//! YAML frontmatter followed by one block per page section, separated by
//! horizontal rules. Collection order matches the HTML page. Content text is
//! backslash-escaped so it cannot turn into markup or raw HTML in the reader view.

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::page::view_models::*;

/// Generate the Markdown article, stamped with the current time.
pub fn generate(page: &PageView) -> Result<String> {
    generate_at(page, Utc::now())
}

/// Generate the Markdown article with an explicit `generated` timestamp.
pub fn generate_at(page: &PageView, generated: DateTime<Utc>) -> Result<String> {
    let sections = [
        generate_header(page),
        generate_hero(page),
        generate_intro(&page.intro),
        generate_history(&page.history, &page.practice_types),
        generate_categories(&page.categories),
        generate_call_to_action(page),
    ];

    let mut result = generate_frontmatter(page, generated)?;
    result.push_str("\n\n");
    result.push_str(&sections.join("\n\n---\n\n"));
    result.push('\n');
    Ok(result)
}

fn generate_frontmatter(page: &PageView, generated: DateTime<Utc>) -> Result<String> {
    let practice_ids = yaml_list(page.practice_types.iter().map(|p| p.id))?;
    let category_ids = yaml_list(page.categories.cards.iter().map(|c| c.id))?;

    // JSON strings and arrays are valid YAML flow scalars/sequences
    Ok(format!(
        "---\ntitle: {}\ntagline: {}\ngenerated: {}\npractice_types: {}\ncategories: {}\n---",
        serde_json::to_string(page.brand.name)?,
        serde_json::to_string(page.brand.tagline)?,
        serde_json::to_string(&generated.to_rfc3339())?,
        practice_ids,
        category_ids,
    ))
}

/// `["a", "b"]` flow sequence with each item quoted as a JSON string.
fn yaml_list<'a>(items: impl Iterator<Item = &'a str>) -> Result<String> {
    let quoted = items
        .map(serde_json::to_string)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(format!("[{}]", quoted.join(", ")))
}

/// Backslash-escape characters that Markdown would treat as markup or raw HTML.
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(
            ch,
            '\\' | '`' | '*' | '_' | '[' | ']' | '<' | '>' | '#' | '&' | '|' | '~'
        ) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn generate_header(page: &PageView) -> String {
    format!(
        "# {}\n\n*{}*\n\n{}",
        escape_markdown(page.brand.name),
        escape_markdown(page.brand.tagline),
        page.nav_items
            .iter()
            .map(|item| escape_markdown(item))
            .collect::<Vec<_>>()
            .join(" · ")
    )
}

fn generate_hero(page: &PageView) -> String {
    let hero = &page.hero;
    format!(
        "## {} {}\n\n{}\n\n**{}**",
        escape_markdown(hero.heading_lead),
        escape_markdown(hero.heading_highlight),
        escape_markdown(hero.body),
        escape_markdown(hero.button_label)
    )
}

fn generate_intro(intro: &IntroView) -> String {
    let mut lines = Vec::new();

    lines.push(format!("## {}", escape_markdown(intro.title)));
    lines.push(String::new());
    lines.push(escape_markdown(intro.content));
    lines.push(String::new());
    lines.push(format!("### {}", escape_markdown(intro.benefits_heading)));
    lines.push(String::new());
    for benefit in &intro.benefits {
        lines.push(format!("- {}", escape_markdown(benefit)));
    }

    lines.push(String::new());
    lines.push(format!("## {}", escape_markdown(intro.steps_title)));
    lines.push(String::new());
    for step in &intro.steps {
        lines.push(format!(
            "{}. **{}**: {}",
            step.rank,
            escape_markdown(step.title),
            escape_markdown(step.description)
        ));
    }

    lines.join("\n")
}

fn generate_history(history: &HistoryView, practice_types: &[PracticeCard]) -> String {
    let mut lines = Vec::new();

    lines.push(format!("## {}", escape_markdown(history.heading)));
    lines.push(String::new());
    lines.push(escape_markdown(history.description));
    lines.push(String::new());
    for period in &history.timeline {
        lines.push(format!(
            "- **{}**: {}",
            escape_markdown(period.era),
            escape_markdown(period.development)
        ));
    }

    for card in practice_types {
        lines.push(String::new());
        lines.push(format!("### {}", escape_markdown(card.title)));
        lines.push(String::new());
        lines.push(format!("*{}*", escape_markdown(card.description)));
        if let Some(origin) = card.origin {
            lines.push(String::new());
            lines.push(escape_markdown(origin));
        }

        for example in &card.examples {
            lines.push(String::new());
            lines.push(format!("#### {}", escape_markdown(example.name)));
            lines.push(String::new());
            lines.push(escape_markdown(example.background));
            if let Some(features) = &example.key_features {
                lines.push(String::new());
                for feature in features {
                    lines.push(format!("- {}", escape_markdown(feature)));
                }
            }
            if let Some(significance) = example.significance {
                lines.push(String::new());
                lines.push(format!("> {}", escape_markdown(significance)));
            }
        }
    }

    lines.join("\n")
}

fn generate_categories(categories: &CategoriesView) -> String {
    let mut lines = vec![format!("## {}", escape_markdown(categories.heading))];

    for card in &categories.cards {
        lines.push(String::new());
        lines.push(format!("### {}", escape_markdown(card.title)));
        lines.push(String::new());
        lines.push(escape_markdown(card.description));
    }

    lines.join("\n")
}

fn generate_call_to_action(page: &PageView) -> String {
    let cta = &page.call_to_action;
    format!(
        "## {}\n\n{}\n\n**{}**",
        escape_markdown(cta.heading),
        escape_markdown(cta.body),
        escape_markdown(cta.button_label)
    )
}
