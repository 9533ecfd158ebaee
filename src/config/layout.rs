//! Static layout configuration per intent: density limits, font-size ranges,
//! and the renderer layout template name. Pure data.

use crate::models::intent::SlideIntent;

/// Density limits and font ranges for one slide intent.
///
/// Font ranges are `(min, max)` in points. `max_bullets = 0` marks a slide
/// that renders title/subtitle only (cover, closing) — body sizing then pins
/// to the range minimum and any stray bullets are dropped during assembly.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    pub layout_type: &'static str,
    pub title_font_range: (u32, u32),
    pub body_font_range: (u32, u32),
    pub max_bullets: usize,
    pub max_words_per_bullet: usize,
}

/// The full intent → layout table.
///
/// Branching on intent is deliberately a lookup, not a conditional chain:
/// the intent set is closed, so adding one is a pure data change here.
pub fn layout_table() -> &'static [(SlideIntent, LayoutConfig)] {
    static TABLE: &[(SlideIntent, LayoutConfig)] = &[
        (
            SlideIntent::Cover,
            LayoutConfig {
                layout_type: "hero",
                title_font_range: (40, 56),
                body_font_range: (18, 24),
                max_bullets: 0,
                max_words_per_bullet: 0,
            },
        ),
        (
            SlideIntent::Agenda,
            LayoutConfig {
                layout_type: "agenda",
                title_font_range: (24, 32),
                body_font_range: (16, 20),
                max_bullets: 6,
                max_words_per_bullet: 6,
            },
        ),
        (
            SlideIntent::Vision,
            LayoutConfig {
                layout_type: "hero",
                title_font_range: (36, 48),
                body_font_range: (18, 24),
                max_bullets: 2,
                max_words_per_bullet: 12,
            },
        ),
        (
            SlideIntent::Context,
            LayoutConfig {
                layout_type: "standard",
                title_font_range: (24, 30),
                body_font_range: (16, 20),
                max_bullets: 4,
                max_words_per_bullet: 12,
            },
        ),
        (
            SlideIntent::Concept,
            LayoutConfig {
                layout_type: "standard",
                title_font_range: (24, 32),
                body_font_range: (16, 20),
                max_bullets: 4,
                max_words_per_bullet: 12,
            },
        ),
        (
            SlideIntent::Framework,
            LayoutConfig {
                layout_type: "process",
                title_font_range: (22, 28),
                body_font_range: (14, 18),
                max_bullets: 5,
                max_words_per_bullet: 10,
            },
        ),
        (
            SlideIntent::Comparison,
            LayoutConfig {
                layout_type: "comparison",
                title_font_range: (22, 28),
                body_font_range: (14, 18),
                max_bullets: 4,
                max_words_per_bullet: 8,
            },
        ),
        (
            SlideIntent::CaseStudy,
            LayoutConfig {
                layout_type: "case_study",
                title_font_range: (24, 30),
                body_font_range: (16, 20),
                max_bullets: 4,
                max_words_per_bullet: 12,
            },
        ),
        (
            SlideIntent::DataInsight,
            LayoutConfig {
                layout_type: "metrics",
                title_font_range: (22, 28),
                body_font_range: (14, 18),
                max_bullets: 3,
                max_words_per_bullet: 8,
            },
        ),
        (
            SlideIntent::KeyPoints,
            LayoutConfig {
                layout_type: "cards",
                title_font_range: (24, 30),
                body_font_range: (14, 18),
                max_bullets: 4,
                max_words_per_bullet: 10,
            },
        ),
        (
            SlideIntent::Implications,
            LayoutConfig {
                layout_type: "standard",
                title_font_range: (24, 30),
                body_font_range: (16, 20),
                max_bullets: 4,
                max_words_per_bullet: 10,
            },
        ),
        (
            SlideIntent::Benefits,
            LayoutConfig {
                layout_type: "cards",
                title_font_range: (24, 30),
                body_font_range: (14, 18),
                max_bullets: 4,
                max_words_per_bullet: 10,
            },
        ),
        (
            SlideIntent::Risks,
            LayoutConfig {
                layout_type: "standard",
                title_font_range: (24, 30),
                body_font_range: (16, 20),
                max_bullets: 4,
                max_words_per_bullet: 10,
            },
        ),
        (
            SlideIntent::Future,
            LayoutConfig {
                layout_type: "hero",
                title_font_range: (32, 44),
                body_font_range: (18, 22),
                max_bullets: 3,
                max_words_per_bullet: 10,
            },
        ),
        (
            SlideIntent::Recommendations,
            LayoutConfig {
                layout_type: "standard",
                title_font_range: (24, 30),
                body_font_range: (16, 20),
                max_bullets: 4,
                max_words_per_bullet: 10,
            },
        ),
        (
            SlideIntent::Summary,
            LayoutConfig {
                layout_type: "standard",
                title_font_range: (24, 30),
                body_font_range: (16, 20),
                max_bullets: 5,
                max_words_per_bullet: 8,
            },
        ),
        (
            SlideIntent::CallToAction,
            LayoutConfig {
                layout_type: "hero",
                title_font_range: (32, 44),
                body_font_range: (18, 24),
                max_bullets: 3,
                max_words_per_bullet: 8,
            },
        ),
        (
            SlideIntent::Closing,
            LayoutConfig {
                layout_type: "closing",
                title_font_range: (36, 48),
                body_font_range: (18, 24),
                max_bullets: 0,
                max_words_per_bullet: 0,
            },
        ),
    ];
    TABLE
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
