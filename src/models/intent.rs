//! Slide intent classification and image role tags.
//!
//! `SlideIntent` is the communicative purpose of a slide. The set is closed
//! and enumerable on purpose: every downstream decision (section eligibility,
//! density limits, font ranges, image role) is a lookup keyed by the variant,
//! so adding an intent is a pure data change in the config tables.

use std::fmt;

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Slide intent
// ────────────────────────────────────────────────────────────────────────────

/// The communicative purpose of a slide, as classified upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideIntent {
    // Opening
    Cover,
    // Framing
    Agenda,
    Vision,
    Context,
    // Core content
    Concept,
    Framework,
    Comparison,
    CaseStudy,
    DataInsight,
    KeyPoints,
    // Analysis
    Implications,
    Benefits,
    Risks,
    // Forward-looking
    Future,
    Recommendations,
    // Closing
    Summary,
    CallToAction,
    Closing,
}

impl SlideIntent {
    /// Wire-format name, identical to the serde `snake_case` representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SlideIntent::Cover => "cover",
            SlideIntent::Agenda => "agenda",
            SlideIntent::Vision => "vision",
            SlideIntent::Context => "context",
            SlideIntent::Concept => "concept",
            SlideIntent::Framework => "framework",
            SlideIntent::Comparison => "comparison",
            SlideIntent::CaseStudy => "case_study",
            SlideIntent::DataInsight => "data_insight",
            SlideIntent::KeyPoints => "key_points",
            SlideIntent::Implications => "implications",
            SlideIntent::Benefits => "benefits",
            SlideIntent::Risks => "risks",
            SlideIntent::Future => "future",
            SlideIntent::Recommendations => "recommendations",
            SlideIntent::Summary => "summary",
            SlideIntent::CallToAction => "call_to_action",
            SlideIntent::Closing => "closing",
        }
    }

    /// All declared intents, in narrative order. Used by config sanity checks.
    pub fn all() -> &'static [SlideIntent] {
        &[
            SlideIntent::Cover,
            SlideIntent::Agenda,
            SlideIntent::Vision,
            SlideIntent::Context,
            SlideIntent::Concept,
            SlideIntent::Framework,
            SlideIntent::Comparison,
            SlideIntent::CaseStudy,
            SlideIntent::DataInsight,
            SlideIntent::KeyPoints,
            SlideIntent::Implications,
            SlideIntent::Benefits,
            SlideIntent::Risks,
            SlideIntent::Future,
            SlideIntent::Recommendations,
            SlideIntent::Summary,
            SlideIntent::CallToAction,
            SlideIntent::Closing,
        ]
    }
}

impl fmt::Display for SlideIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Image role & placement
// ────────────────────────────────────────────────────────────────────────────

/// Semantic role of the slide's image. The actual image fetch is an external
/// collaborator; this crate only decides what kind of image belongs where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageRole {
    /// Large, impactful, fills significant space.
    Hero,
    /// Explains a concept visually.
    Illustrative,
    /// Adds visual interest, smaller.
    Decorative,
    /// Small symbolic representation.
    Icon,
    /// Charts and graphs, rendered rather than fetched.
    DataVisualization,
}

/// Named placement region for the slide's image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImagePosition {
    Background,
    Right,
    Left,
    Corner,
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_serde_round_trip_snake_case() {
        let json = serde_json::to_string(&SlideIntent::CaseStudy).unwrap();
        assert_eq!(json, "\"case_study\"");
        let back: SlideIntent = serde_json::from_str("\"call_to_action\"").unwrap();
        assert_eq!(back, SlideIntent::CallToAction);
    }

    #[test]
    fn test_as_str_matches_serde_name_for_all_intents() {
        for intent in SlideIntent::all() {
            let json = serde_json::to_string(intent).unwrap();
            assert_eq!(json, format!("\"{}\"", intent.as_str()));
        }
    }

    #[test]
    fn test_all_lists_18_intents() {
        assert_eq!(SlideIntent::all().len(), 18);
    }

    #[test]
    fn test_image_role_wire_name() {
        let json = serde_json::to_string(&ImageRole::DataVisualization).unwrap();
        assert_eq!(json, "\"data_visualization\"");
    }

    #[test]
    fn test_unknown_intent_fails_deserialization() {
        let result: Result<SlideIntent, _> = serde_json::from_str("\"interpretive_dance\"");
        assert!(result.is_err());
    }
}
