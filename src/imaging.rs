//! Image Role Assigner — intent-driven image role, search keywords, and
//! placement region.
//!
//! Pure computation: this module decides what kind of image a slide wants and
//! where it goes, never fetching anything. Keyword extraction from titles is
//! a deterministic heuristic (stop-word filter plus longest-word preference),
//! good enough to steer a stock-image search.

use crate::models::intent::{ImagePosition, ImageRole, SlideIntent};

/// Image intent for one slide, consumed by the external image service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAssignment {
    pub role: ImageRole,
    pub keywords: Vec<String>,
    pub position: ImagePosition,
}

/// Computes the image role, search keywords, and placement for a slide.
/// `slide_index` is the slide's position in the final deck; it drives the
/// left/right alternation for illustrative images.
pub fn assign_image(intent: SlideIntent, title: &str, slide_index: usize) -> ImageAssignment {
    let role = role_for(intent);
    ImageAssignment {
        role,
        keywords: build_keywords(intent, title),
        position: position_for(role, slide_index),
    }
}

/// Static intent → role table.
pub fn role_for(intent: SlideIntent) -> ImageRole {
    use SlideIntent::*;
    match intent {
        Cover | Vision | Future | CallToAction => ImageRole::Hero,
        Context | Concept | CaseStudy => ImageRole::Illustrative,
        Agenda | Implications | Summary | Closing => ImageRole::Decorative,
        Framework | Comparison | KeyPoints | Benefits | Risks | Recommendations => ImageRole::Icon,
        DataInsight => ImageRole::DataVisualization,
    }
}

fn position_for(role: ImageRole, slide_index: usize) -> ImagePosition {
    match role {
        ImageRole::Hero => ImagePosition::Background,
        ImageRole::DataVisualization => ImagePosition::Right,
        ImageRole::Illustrative => {
            if slide_index % 2 == 0 {
                ImagePosition::Right
            } else {
                ImagePosition::Left
            }
        }
        ImageRole::Icon | ImageRole::Decorative => ImagePosition::Corner,
    }
}

/// Up to three intent-associated base keywords followed by up to two topic
/// keywords pulled from the title, deduplicated, capped at five.
fn build_keywords(intent: SlideIntent, title: &str) -> Vec<String> {
    let mut keywords: Vec<String> = base_keywords(intent)
        .iter()
        .take(3)
        .map(|k| k.to_string())
        .collect();
    keywords.extend(title_keywords(title).into_iter().take(2));
    let mut seen = Vec::new();
    keywords.retain(|k| {
        if seen.contains(k) {
            false
        } else {
            seen.push(k.clone());
            true
        }
    });
    keywords.truncate(5);
    keywords
}

fn base_keywords(intent: SlideIntent) -> &'static [&'static str] {
    use SlideIntent::*;
    match intent {
        Cover => &["abstract", "professional", "modern", "technology", "innovation"],
        Agenda => &["outline", "roadmap", "list"],
        Vision => &["vision", "future", "horizon", "opportunity", "growth"],
        Context => &["background", "foundation", "history", "landscape"],
        Concept => &["concept", "idea", "diagram", "illustration"],
        Framework => &["process", "methodology", "workflow", "system"],
        Comparison => &["comparison", "contrast", "balance"],
        CaseStudy => &["case study", "example", "real world", "application"],
        DataInsight => &["data", "analytics", "statistics", "metrics"],
        KeyPoints => &["highlights", "essentials", "focus"],
        Implications => &["impact", "consequence", "direction"],
        Benefits => &["benefit", "advantage", "value"],
        Risks => &["challenge", "risk", "warning", "caution"],
        Future => &["future", "tomorrow", "innovation", "aspirational"],
        Recommendations => &["strategy", "action", "guidance"],
        Summary => &["summary", "overview", "recap"],
        CallToAction => &["action", "momentum", "start"],
        Closing => &["thank you", "questions", "discussion", "team"],
    }
}

/// Filler words that carry no image-search signal.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "was", "are", "were", "been", "be", "have", "has", "had", "do", "does",
    "did", "will", "would", "could", "should", "may", "might", "must", "shall", "can", "this",
    "that", "these", "those", "it", "its", "their", "your", "our", "how", "what", "when", "where",
    "why", "which", "who", "whom", "whose", "across", "through", "into", "over", "under", "about",
    "between", "unlocking", "transformative", "key", "main", "important", "critical", "exploring",
    "understanding", "leveraging", "driving", "enabling", "up", "down", "out", "off", "away",
    "back",
];

/// Topic keywords from a title: lowercase alphanumeric words longer than two
/// characters that are not stop words, preferring longer (more specific)
/// words. Stable sort keeps reading order among equal lengths, so identical
/// titles always yield identical keywords.
fn title_keywords(title: &str) -> Vec<String> {
    let mut words: Vec<String> = title
        .to_lowercase()
        .split_whitespace()
        .map(|w| w.chars().filter(|c| c.is_alphanumeric()).collect::<String>())
        .filter(|w| w.chars().count() > 2 && !STOP_WORDS.contains(&w.as_str()))
        .collect();
    words.sort_by_key(|w| std::cmp::Reverse(w.chars().count()));
    words
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
