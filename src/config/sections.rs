//! Section skeleton and uniqueness constraint sets.
//!
//! Six sections, ordered 0–5, define the only legal shape of a deck. The
//! tables here are the single source of truth — the validator and repair
//! stages take them by reference and never mutate them.

use crate::models::intent::SlideIntent;

/// One section of the deck skeleton.
#[derive(Debug, Clone)]
pub struct SectionDefinition {
    pub name: &'static str,
    pub required: bool,
    /// Intent whitelist. The FIRST entry is the intent a repair-synthesized
    /// slide is tagged with, so order matters for `opening` and `closing`.
    pub allowed_intents: &'static [SlideIntent],
    pub min_slides: usize,
    pub max_slides: usize,
    pub order_index: usize,
}

/// The mandatory deck structure, enforced for every presentation.
pub static DECK_SECTIONS: [SectionDefinition; 6] = [
    SectionDefinition {
        name: "opening",
        required: true,
        allowed_intents: &[SlideIntent::Cover],
        min_slides: 1,
        max_slides: 1,
        order_index: 0,
    },
    SectionDefinition {
        name: "framing",
        required: true,
        allowed_intents: &[SlideIntent::Agenda, SlideIntent::Vision, SlideIntent::Context],
        min_slides: 1,
        max_slides: 2,
        order_index: 1,
    },
    SectionDefinition {
        name: "core_content",
        required: true,
        allowed_intents: &[
            SlideIntent::Concept,
            SlideIntent::Framework,
            SlideIntent::Comparison,
            SlideIntent::CaseStudy,
            SlideIntent::DataInsight,
            SlideIntent::KeyPoints,
        ],
        min_slides: 2,
        max_slides: 8,
        order_index: 2,
    },
    SectionDefinition {
        name: "analysis",
        required: false,
        allowed_intents: &[
            SlideIntent::Implications,
            SlideIntent::Benefits,
            SlideIntent::Risks,
        ],
        min_slides: 0,
        max_slides: 3,
        order_index: 3,
    },
    SectionDefinition {
        name: "forward_looking",
        required: false,
        allowed_intents: &[SlideIntent::Future, SlideIntent::Recommendations],
        min_slides: 0,
        max_slides: 2,
        order_index: 4,
    },
    SectionDefinition {
        name: "closing",
        required: true,
        // `closing` first so a repair-synthesized slide is a thank-you slide.
        allowed_intents: &[
            SlideIntent::Closing,
            SlideIntent::Summary,
            SlideIntent::CallToAction,
        ],
        min_slides: 1,
        max_slides: 2,
        order_index: 5,
    },
];

/// Intents permitted at most once per deck.
pub static SINGLETON_INTENTS: [SlideIntent; 5] = [
    SlideIntent::Cover,
    SlideIntent::Agenda,
    SlideIntent::Summary,
    SlideIntent::CallToAction,
    SlideIntent::Closing,
];

/// Intents that must not appear on two adjacent slides. Data slides need
/// variety between them; case studies and comparisons need setup.
pub static NO_CONSECUTIVE_INTENTS: [SlideIntent; 3] = [
    SlideIntent::DataInsight,
    SlideIntent::CaseStudy,
    SlideIntent::Comparison,
];

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
