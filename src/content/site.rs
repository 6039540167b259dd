//! Page chrome (brand, navigation, hero, call to action) and the assembled site.

use crate::content::categories::CATEGORIES;
use crate::content::history::HISTORY;
use crate::content::intro::INTRO;
use crate::content::practices::SADHANA_TYPES;
use crate::content::types::{Brand, CallToAction, Headings, Hero, SiteContent};

pub const BRAND: Brand = Brand {
    name: "Sadhaka",
    tagline: "Your Guide to Spiritual Practice",
};

pub const NAV_ITEMS: &[&str] = &["Home", "Practices", "Learn", "Community"];

pub const HERO: Hero = Hero {
    heading_lead: "Begin Your Journey of",
    heading_highlight: "Spiritual Growth",
    body: "Discover ancient practices of Sanatana Dharma adapted for the modern world. \
           Start your transformation with guided support and a welcoming community.",
    button_label: "Start Your Journey",
};

pub const CALL_TO_ACTION: CallToAction = CallToAction {
    heading: "Ready to Begin?",
    body: "Start your spiritual journey with guidance and support from our community of practitioners.",
    button_label: "Begin Your Practice",
};

pub const HEADINGS: Headings = Headings {
    benefits: "Benefits of Regular Practice",
    history: "The Journey Through Time",
    categories: "Explore Different Paths",
    learn_more: "Learn more",
};

/// The built-in Sadhaka landing page.
pub const SITE: SiteContent = SiteContent {
    brand: BRAND,
    nav_items: NAV_ITEMS,
    hero: HERO,
    intro: INTRO,
    history: HISTORY,
    practice_types: SADHANA_TYPES,
    categories: CATEGORIES,
    call_to_action: CALL_TO_ACTION,
    headings: HEADINGS,
};
