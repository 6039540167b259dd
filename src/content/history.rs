//! Historical overview and timeline of sadhana traditions.

use crate::content::types::{HistoryOverview, TimelineEntry};

pub const HISTORY: HistoryOverview = HistoryOverview {
    title: "Origins of Sadhana",
    description: "Sadhanas have evolved over thousands of years through the wisdom of ancient rishis (seers) \
                  and spiritual masters. These practices were carefully developed and preserved through \
                  guru-shishya (teacher-student) traditions.",
    timeline: &[
        TimelineEntry {
            era: "Vedic Period (1500-500 BCE)",
            development: "Early forms of sadhana emerged through yajna (fire rituals) and mantra recitation. \
                          The Gayatri Sadhana originates from this period.",
        },
        TimelineEntry {
            era: "Classical Period (500 BCE - 500 CE)",
            development: "Development of systematic meditation practices and deity-specific worship. \
                          Many Shiva and Vishnu sadhanas were formalized.",
        },
        TimelineEntry {
            era: "Tantric Period (500-1500 CE)",
            development: "Evolution of sophisticated ritual practices and energy-based sadhanas. \
                          Emergence of Shakti-focused practices.",
        },
        TimelineEntry {
            era: "Bhakti Movement (800-1700 CE)",
            development: "Rise of devotional sadhanas accessible to all, regardless of social status or education.",
        },
    ],
};
