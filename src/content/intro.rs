//! Introduction content: what a sadhana is and how to begin one.

use crate::content::types::{HowToStart, IntroContent, OnboardingStep, PracticeIntro};

pub const INTRO: IntroContent = IntroContent {
    what_is_sadhana: PracticeIntro {
        title: "What is Sadhana?",
        content: "Sadhana is a Sanskrit word that means 'spiritual practice' or 'spiritual discipline.' \
                  It is any practice that helps you connect with your inner self and the divine. \
                  Think of it as a personal journey of transformation, much like how an artist practices \
                  daily to master their craft or how an athlete trains consistently to excel in their sport.",
        benefits: &[
            "Inner peace and mental clarity",
            "Deeper self-awareness",
            "Spiritual growth and understanding",
            "Better stress management",
            "Connection with ancient wisdom traditions",
        ],
    },
    how_to_start: HowToStart {
        title: "How to Begin Your Journey",
        steps: &[
            OnboardingStep {
                title: "Start Simple",
                description: "Begin with basic meditation or breathing practices for just 5-10 minutes daily.",
            },
            OnboardingStep {
                title: "Be Consistent",
                description: "Choose a specific time each day for your practice, preferably early morning.",
            },
            OnboardingStep {
                title: "Create Sacred Space",
                description: "Designate a quiet, clean space for your practice where you won't be disturbed.",
            },
            OnboardingStep {
                title: "Seek Guidance",
                description: "Connect with experienced practitioners or teachers who can guide your journey.",
            },
        ],
    },
};
