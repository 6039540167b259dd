//! Page Rendering Integration Tests
//!
//! Renders the built-in Sadhaka page and checks card counts, optional fields
//! and display order across the HTML, Markdown and JSON renditions.

use sadhaka_page::content::{PracticeExample, PracticeType, CATEGORIES, SADHANA_TYPES};
use sadhaka_page::page::html::render_page;
use sadhaka_page::{build_page, RenderOptions, RenderedPage, SITE};

fn render_html() -> String {
    render_page(&build_page(&SITE), &RenderOptions::default()).expect("page renders")
}

/// Slice of the HTML belonging to one practice card.
fn practice_card<'a>(html: &'a str, id: &str) -> &'a str {
    let marker = format!("data-practice-id=\"{}\"", id);
    let start = html.find(&marker).expect("card present");
    let rest = &html[start..];
    let end = rest[marker.len()..]
        .find("data-practice-id=")
        .map(|i| i + marker.len())
        .or_else(|| rest.find("Explore Different Paths"))
        .unwrap_or(rest.len());
    &rest[..end]
}

/// Assert that `needles` appear in `haystack` in the given order.
fn assert_in_order(haystack: &str, needles: &[&str]) {
    let mut last = 0;
    for needle in needles {
        let pos = haystack[last..]
            .find(needle)
            .unwrap_or_else(|| panic!("'{}' missing or out of order", needle));
        last += pos + needle.len();
    }
}

#[test]
fn test_one_card_per_practice_type_with_matching_examples() {
    let html = render_html();

    assert_eq!(html.matches("data-practice-id=").count(), SADHANA_TYPES.len());

    for practice in SADHANA_TYPES {
        let card = practice_card(&html, practice.id);
        assert_eq!(
            card.matches(&format!("data-role=\"practice-title\">{}</h3>", practice.title)).count(),
            1,
            "title of {}",
            practice.id
        );
        assert_eq!(
            card.matches("data-role=\"example\"").count(),
            practice.examples.len(),
            "examples of {}",
            practice.id
        );
    }
}

#[test]
fn test_key_features_and_significance_only_when_declared() {
    let html = render_html();

    for practice in SADHANA_TYPES {
        let card = practice_card(&html, practice.id);
        let with_features = practice
            .examples
            .iter()
            .filter(|e| e.key_features.is_some_and(|f| !f.is_empty()))
            .count();
        let with_significance = practice
            .examples
            .iter()
            .filter(|e| e.significance.is_some_and(|s| !s.is_empty()))
            .count();

        assert_eq!(card.matches("data-role=\"key-features\"").count(), with_features);
        assert_eq!(card.matches("data-role=\"significance\"").count(), with_significance);
    }

    // Shivanga lists its three features; Rudra has none
    let shiva = practice_card(&html, "shiva-sadhanas");
    assert_in_order(
        shiva,
        &[
            "Shivanga Sadhana",
            "<li>21-day intensive practice</li>",
            "<li>Focus on inner transformation</li>",
            "<li>Combines physical and spiritual disciplines</li>",
            "Rudra Sadhana",
            "data-role=\"significance\">Represents the most potent form of Shiva worship",
        ],
    );
}

#[test]
fn test_collections_render_in_declaration_order() {
    let html = render_html();

    let benefits: Vec<&str> = SITE.intro.what_is_sadhana.benefits.to_vec();
    assert_in_order(&html, &benefits);
    assert_eq!(html.matches("data-role=\"benefit\"").count(), 5);

    let steps: Vec<&str> = SITE.intro.how_to_start.steps.iter().map(|s| s.title).collect();
    assert_in_order(&html, &steps);

    let eras: Vec<&str> = SITE.history.timeline.iter().map(|t| t.era).collect();
    assert_in_order(&html, &eras);

    let practices: Vec<String> = SADHANA_TYPES
        .iter()
        .map(|p| format!("data-practice-id=\"{}\"", p.id))
        .collect();
    let practices: Vec<&str> = practices.iter().map(String::as_str).collect();
    assert_in_order(&html, &practices);

    let categories: Vec<String> = CATEGORIES
        .iter()
        .map(|c| format!("data-category-id=\"{}\"", c.id))
        .collect();
    let categories: Vec<&str> = categories.iter().map(String::as_str).collect();
    assert_in_order(&html, &categories);
}

#[test]
fn test_step_badges_numbered_from_one() {
    let html = render_html();
    assert_in_order(
        &html,
        &[
            "justify-center mr-3\">1</span>Start Simple",
            "justify-center mr-3\">2</span>Be Consistent",
            "justify-center mr-3\">3</span>Create Sacred Space",
            "justify-center mr-3\">4</span>Seek Guidance",
        ],
    );
}

#[test]
fn test_end_to_end_counts_and_headings() {
    let html = render_html();

    let history_start = html.find("The Journey Through Time").expect("history heading");
    let categories_start = html.find("Explore Different Paths").expect("categories heading");
    let history = &html[history_start..categories_start];

    assert_eq!(history.matches("data-role=\"timeline-entry\"").count(), 4);
    assert_eq!(history.matches("data-practice-id=").count(), 3);
    assert_eq!(html[categories_start..].matches("data-category-id=").count(), 3);

    assert_in_order(
        history,
        &[
            "data-role=\"practice-title\">Shiva Sadhanas</h3>",
            "data-role=\"practice-title\">Devi Sadhanas</h3>",
            "data-role=\"practice-title\">Specialized Sadhanas</h3>",
        ],
    );
}

#[test]
fn test_origin_only_for_cards_that_declare_it() {
    let html = render_html();

    for id in ["shiva-sadhanas", "devi-sadhanas"] {
        let card = practice_card(&html, id);
        let start = card.find("data-role=\"origin\">").expect("origin present")
            + "data-role=\"origin\">".len();
        let text = &card[start..start + card[start..].find("</p>").unwrap()];
        assert!(!text.trim().is_empty(), "origin of {} is empty", id);
    }

    let specialized = practice_card(&html, "specialized-sadhanas");
    assert!(!specialized.contains("data-role=\"origin\""));
}

#[test]
fn test_all_renditions_agree() {
    let page = RenderedPage::render(&SITE, &RenderOptions::default()).unwrap();

    let json: serde_json::Value = serde_json::from_str(&page.json).unwrap();
    let ids: Vec<&str> = json["practice_types"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["shiva-sadhanas", "devi-sadhanas", "specialized-sadhanas"]);
    assert!(json["practice_types"][2]["origin"].is_null());
    assert_eq!(json["categories"]["cards"][0]["icon"], "moon");

    assert_in_order(
        &page.markdown,
        &["### Shiva Sadhanas", "### Devi Sadhanas", "### Specialized Sadhanas"],
    );

    assert!(page.reader_html.contains("<h2>The Journey Through Time</h2>"));
    assert!(page.reader_html.contains("<h3>Specialized Sadhanas</h3>"));
}

const BOTH_FIELDS: PracticeType = PracticeType {
    id: "both-fields",
    title: "Both Fields",
    description: "Example carrying features and significance",
    origin: None,
    examples: &[PracticeExample {
        name: "Combined Sadhana",
        background: "Has every optional field",
        key_features: Some(&["One feature", "Two feature"]),
        significance: Some("Both fields shown"),
    }],
};

#[test]
fn test_example_with_features_and_significance() {
    let mut site = SITE;
    site.practice_types = &[BOTH_FIELDS];
    let html = render_page(&build_page(&site), &RenderOptions::default()).unwrap();

    let card = practice_card(&html, "both-fields");
    assert_eq!(card.matches("data-role=\"key-features\"").count(), 1);
    assert_eq!(card.matches("data-role=\"significance\"").count(), 1);
    assert_in_order(
        card,
        &[
            "Combined Sadhana",
            "data-role=\"key-features\"",
            "<li>One feature</li>",
            "<li>Two feature</li>",
            "</ul>",
            "data-role=\"significance\">Both fields shown</p>",
        ],
    );
}
