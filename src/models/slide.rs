//! Per-slide content model: body points, draft input, derived specification.

use serde::{Deserialize, Serialize};

use crate::models::intent::{ImagePosition, ImageRole, SlideIntent};

// ────────────────────────────────────────────────────────────────────────────
// Body points
// ────────────────────────────────────────────────────────────────────────────

/// Retention priority of a body point. Declaration order gives
/// `Normal < High < Critical`, so truncation can drop `min()` first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    #[default]
    Normal,
    High,
    Critical,
}

/// Rhetorical role of a body point within its slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PointRole {
    #[default]
    Main,
    Support,
    Evidence,
}

/// One bullet of slide body content. Owned exclusively by its slide.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyPoint {
    pub text: String,
    /// Indent depth. Clamped to at most 1 level of nesting during assembly.
    #[serde(default)]
    pub level: u8,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub role: PointRole,
}

impl BodyPoint {
    /// Word count of the point's text (whitespace-separated).
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Density classification
// ────────────────────────────────────────────────────────────────────────────

/// Bullet-count profile of a slide relative to its intent's configured limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Density {
    Sparse,
    Balanced,
    Dense,
}

// ────────────────────────────────────────────────────────────────────────────
// Draft input (upstream shape)
// ────────────────────────────────────────────────────────────────────────────

/// A slide as delivered by the upstream content generator: content fields
/// populated, derived fields absent. Section and intent are the generator's
/// tentative classification — the validator is the authority on whether they
/// hold together as a deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftSlide {
    pub section: String,
    pub intent: SlideIntent,
    /// The slide's one-sentence message. Falls back to `title` when empty.
    #[serde(default)]
    pub claim: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub body_points: Vec<BodyPoint>,
    #[serde(default)]
    pub speaker_notes: Option<String>,
    #[serde(default)]
    pub transition_hint: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Derived specification
// ────────────────────────────────────────────────────────────────────────────

/// Complete specification for a single slide — the intermediate representation
/// handed to the renderer. Derived fields are populated by the typography,
/// overflow, and image-assignment stages; once the slide is part of a
/// validated `DeckSpec` it is treated as immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideSpec {
    pub slide_id: String,
    pub section: String,
    pub intent: SlideIntent,
    pub claim: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub body_points: Vec<BodyPoint>,
    pub speaker_notes: Option<String>,

    // Derived layout
    pub layout_type: String,
    pub title_font_size: u32,
    pub body_font_size: u32,
    pub density: Density,

    // Derived visual elements
    pub image_role: ImageRole,
    pub image_keywords: Vec<String>,
    pub image_position: ImagePosition,

    pub transition_hint: Option<String>,
    /// Rough presenter pacing estimate, in seconds.
    pub speaking_time_secs: u32,

    /// Id of the originating slide when this one is a product of an overflow
    /// split. Every product of one authored slide, through any number of
    /// re-splits, carries the same origin id; the uniqueness checks treat
    /// slides sharing an origin as one logical occurrence of the intent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_of: Option<String>,
}

impl SlideSpec {
    /// Builds an undecorated spec from a draft: content carried over, derived
    /// fields at placeholder values awaiting the derivation stages.
    pub fn from_draft(draft: DraftSlide, slide_id: String) -> Self {
        let claim = if draft.claim.trim().is_empty() {
            draft.title.clone()
        } else {
            draft.claim
        };
        SlideSpec {
            slide_id,
            section: draft.section,
            intent: draft.intent,
            claim,
            title: clip_chars(&draft.title, 100),
            subtitle: draft.subtitle.map(|s| clip_chars(&s, 150)),
            body_points: draft
                .body_points
                .into_iter()
                .map(|mut p| {
                    p.level = p.level.min(1);
                    p
                })
                .collect(),
            speaker_notes: draft.speaker_notes,
            layout_type: String::new(),
            title_font_size: 0,
            body_font_size: 0,
            density: Density::Sparse,
            image_role: ImageRole::Decorative,
            image_keywords: Vec::new(),
            image_position: ImagePosition::Corner,
            transition_hint: draft.transition_hint,
            speaking_time_secs: 0,
            split_of: None,
        }
    }

    /// Total word count across all body points.
    pub fn body_word_count(&self) -> usize {
        self.body_points.iter().map(BodyPoint::word_count).sum()
    }
}

/// Clips a string to at most `max` characters on a char boundary.
fn clip_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max).collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
