//! Practice categories for the "Explore Different Paths" grid.

use crate::content::types::{Category, Glyph};

pub const CATEGORIES: &[Category] = &[
    Category {
        id: "meditation",
        title: "Meditation Practices",
        description: "Learn various meditation techniques from different traditions",
        icon: Glyph::Moon,
        color: "from-purple-500 to-indigo-600",
        bg_color: "bg-purple-50",
    },
    Category {
        id: "mantras",
        title: "Sacred Chants",
        description: "Discover the power of ancient Sanskrit mantras",
        icon: Glyph::Heart,
        color: "from-rose-500 to-pink-600",
        bg_color: "bg-rose-50",
    },
    Category {
        id: "rituals",
        title: "Traditional Rituals",
        description: "Explore meaningful ceremonies and practices",
        icon: Glyph::Star,
        color: "from-amber-500 to-orange-600",
        bg_color: "bg-amber-50",
    },
];
