//! Practice types shown as cards under the historical timeline.
//!
//! Ids are list keys and must stay unique (see `content::lint`).

use crate::content::types::{PracticeExample, PracticeType};

pub const SADHANA_TYPES: &[PracticeType] = &[
    PracticeType {
        id: "shiva-sadhanas",
        title: "Shiva Sadhanas",
        description: "Practices dedicated to Lord Shiva, representing transformation and inner awakening",
        origin: Some(
            "Originating from the ancient Shaivite traditions, these practices were first codified \
             in the Shaiva Agamas and later evolved through various lineages.",
        ),
        examples: &[
            PracticeExample {
                name: "Shivanga Sadhana",
                background: "Developed as a means to experience the fundamental nature of existence, \
                             this practice emerged from the yogic traditions of Tamil Nadu.",
                key_features: Some(&[
                    "21-day intensive practice",
                    "Focus on inner transformation",
                    "Combines physical and spiritual disciplines",
                ]),
                significance: None,
            },
            PracticeExample {
                name: "Rudra Sadhana",
                background: "Based on the Vedic Rudra Suktas, this practice was traditionally performed \
                             by rishis for intense spiritual purification.",
                key_features: None,
                significance: Some("Represents the most potent form of Shiva worship for spiritual evolution"),
            },
        ],
    },
    PracticeType {
        id: "devi-sadhanas",
        title: "Devi Sadhanas",
        description: "Practices honoring the Divine Mother in her various forms",
        origin: Some(
            "These practices emerged from the Shakta traditions and were systematized in texts \
             like Devi Mahatmya and various Tantras.",
        ),
        examples: &[PracticeExample {
            name: "Navaratri Sadhana",
            background: "Evolved from ancient harvest festivals and the worship of the Divine Mother \
                         as the source of creation.",
            key_features: None,
            significance: Some("Represents the victory of divine consciousness over ego and ignorance"),
        }],
    },
    PracticeType {
        id: "specialized-sadhanas",
        title: "Specialized Sadhanas",
        description: "Unique practices developed for specific spiritual goals",
        origin: None,
        examples: &[
            PracticeExample {
                name: "Sabarimala Sadhana",
                background: "Emerged from the traditions of Kerala, combining elements of Shaivism, \
                             Vaishnavism, and local customs.",
                key_features: None,
                significance: Some(
                    "Represents the unity of different spiritual paths and the importance of discipline",
                ),
            },
            PracticeExample {
                name: "Gayatri Sadhana",
                background: "One of the oldest continuing spiritual practices, dating back to the Rig Veda.",
                key_features: None,
                significance: Some("Considered the mother of all mantras and spiritual practices"),
            },
        ],
    },
];
