//! HTML page composition.
//!
//! Renders the page view as a standalone document in a fixed order: header,
//! hero, introduction, history with practice cards, categories, call to action.

use askama::Template;

use crate::config::RenderOptions;
use crate::content::types::{Brand, CallToAction, Hero};
use crate::error::Result;
use crate::page::glyph::Glyph;
use crate::page::layout::Section;
use crate::page::view_models::*;

const HERO_WRAPPER_OPEN: &str = "<section class=\"relative bg-gradient-to-b from-indigo-50 to-white py-20\">";
const HERO_WRAPPER_CLOSE: &str = "</section>";

/// Render the whole page as an HTML document.
pub fn render_page(page: &PageView, options: &RenderOptions) -> Result<String> {
    let header = render_header(page)?;

    let sections = vec![
        render_hero(&page.hero)?,
        render_intro(&page.intro)?,
        render_history(&page.history, &page.practice_types)?,
        render_categories(&page.categories)?,
        render_call_to_action(&page.call_to_action)?,
    ];

    let html = DocumentTemplate {
        title: &options.page_title,
        stylesheet: &options.stylesheet_href,
        header: &header,
        sections: &sections,
    }
    .render()?;

    Ok(html)
}

fn render_header(page: &PageView) -> Result<String> {
    let om_svg = Glyph::Om.render("w-10 h-10 mr-3 text-indigo-600")?;
    Ok(HeaderTemplate {
        brand: &page.brand,
        nav_items: &page.nav_items,
        om_svg: &om_svg,
    }
    .render()?)
}

fn render_hero(hero: &Hero) -> Result<String> {
    let inner = HeroTemplate { hero }.render()?;
    let wrapped = Section::new().wrap(&inner)?;
    Ok(format!("{}\n{}\n{}", HERO_WRAPPER_OPEN, wrapped, HERO_WRAPPER_CLOSE))
}

fn render_intro(intro: &IntroView) -> Result<String> {
    let arrow_svg = Glyph::ArrowRight.render("w-5 h-5 mr-2 text-indigo-600")?;
    let inner = IntroTemplate {
        intro,
        arrow_svg: &arrow_svg,
    }
    .render()?;
    Ok(Section::new().class("py-16 bg-white").wrap(&inner)?)
}

fn render_history(history: &HistoryView, practice_types: &[PracticeCard]) -> Result<String> {
    let inner = HistoryTemplate {
        history,
        practice_types,
    }
    .render()?;
    Ok(Section::new()
        .class("py-16 bg-gradient-to-b from-white to-indigo-50")
        .wrap(&inner)?)
}

fn render_categories(categories: &CategoriesView) -> Result<String> {
    let chevron_svg = Glyph::ChevronRight.render("ml-1 w-4 h-4")?;

    let mut tiles = Vec::with_capacity(categories.cards.len());
    for card in &categories.cards {
        tiles.push(CategoryTile {
            icon_svg: card.icon.render(&card.icon_class())?,
            card,
        });
    }

    let inner = CategoriesTemplate {
        categories,
        tiles: &tiles,
        chevron_svg: &chevron_svg,
    }
    .render()?;
    Ok(Section::new().class("py-16 bg-gray-50").wrap(&inner)?)
}

fn render_call_to_action(cta: &CallToAction) -> Result<String> {
    let inner = CallToActionTemplate { cta }.render()?;
    Ok(Section::new()
        .class("py-16 bg-gradient-to-b from-white to-indigo-50")
        .wrap(&inner)?)
}

// ============================================================================
// Templates
// ============================================================================

#[derive(Template)]
#[template(path = "pages/document.html")]
struct DocumentTemplate<'a> {
    title: &'a str,
    stylesheet: &'a str,
    header: &'a str,
    sections: &'a [String],
}

#[derive(Template)]
#[template(path = "partials/header.html")]
struct HeaderTemplate<'a> {
    brand: &'a Brand,
    nav_items: &'a [&'static str],
    om_svg: &'a str,
}

#[derive(Template)]
#[template(path = "partials/hero.html")]
struct HeroTemplate<'a> {
    hero: &'a Hero,
}

#[derive(Template)]
#[template(path = "partials/intro.html")]
struct IntroTemplate<'a> {
    intro: &'a IntroView,
    arrow_svg: &'a str,
}

#[derive(Template)]
#[template(path = "partials/history.html")]
struct HistoryTemplate<'a> {
    history: &'a HistoryView,
    practice_types: &'a [PracticeCard],
}

struct CategoryTile<'a> {
    card: &'a CategoryCard,
    icon_svg: String,
}

#[derive(Template)]
#[template(path = "partials/categories.html")]
struct CategoriesTemplate<'a> {
    categories: &'a CategoriesView,
    tiles: &'a [CategoryTile<'a>],
    chevron_svg: &'a str,
}

#[derive(Template)]
#[template(path = "partials/call_to_action.html")]
struct CallToActionTemplate<'a> {
    cta: &'a CallToAction,
}
