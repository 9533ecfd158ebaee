//! Deck-level envelopes: generation request, finished specification, and the
//! structured violation taxonomy.
//!
//! A `DeckSpec` is either finalized (`is_valid = true`, every derived field
//! populated) or returned with `validation_errors` and never rendered — the
//! renderer must refuse any deck with `is_valid = false`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::slide::{DraftSlide, SlideSpec};

// ────────────────────────────────────────────────────────────────────────────
// Request
// ────────────────────────────────────────────────────────────────────────────

/// Narrative template selected by the upstream generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NarrativeTemplate {
    #[default]
    Explanatory,
    Persuasive,
    Analytical,
}

/// One deck generation request: deck metadata plus the ordered draft slides
/// produced by the upstream content generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckRequest {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Theme preset name. Unknown names fall back to the default palette.
    pub theme: String,
    #[serde(default)]
    pub narrative: NarrativeTemplate,
    pub slides: Vec<DraftSlide>,
}

// ────────────────────────────────────────────────────────────────────────────
// Violations & warnings
// ────────────────────────────────────────────────────────────────────────────

/// Machine-readable classification of a structural violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// A required section has zero slides after repair.
    MissingRequiredSection,
    /// A section's slide count violates its min/max bounds.
    SectionCountOutOfBounds,
    /// Sections appear out of their defined order.
    SectionOutOfOrder,
    /// A slide's intent is outside its section's whitelist.
    IntentNotAllowedInSection,
    /// A singleton intent appears more than once in the deck.
    SingletonViolation,
    /// Two adjacent slides share a forbidden-to-repeat intent.
    ConsecutiveIntentViolation,
    /// A slide still exceeds density limits after split/truncate passes.
    /// Indicates a resolver logic defect — should never occur.
    UnresolvedOverflow,
    /// Deck repair's output failed re-validation. Reported here only for
    /// completeness; the assembler escalates it to a fatal error.
    RepairIntroducedViolation,
}

/// One structural violation, naming the offending slide where applicable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub kind: ViolationKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slide_index: Option<usize>,
    pub detail: String,
}

impl ValidationError {
    pub fn new(kind: ViolationKind, slide_index: Option<usize>, detail: impl Into<String>) -> Self {
        ValidationError {
            kind,
            slide_index,
            detail: detail.into(),
        }
    }
}

/// Informational, non-fatal note from assembly — lossy truncation, or a slide
/// whose single bullet exceeds the word budget and needs upstream
/// compression. Never affects `is_valid`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssemblyWarning {
    pub slide_id: String,
    pub detail: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Finished deck
// ────────────────────────────────────────────────────────────────────────────

/// The finished artifact handed to the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckSpec {
    pub deck_id: Uuid,
    pub title: String,
    pub subtitle: Option<String>,
    /// Resolved theme preset name (after unknown-name fallback).
    pub theme: String,
    pub narrative: NarrativeTemplate,
    pub created_at: DateTime<Utc>,
    pub slides: Vec<SlideSpec>,
    pub is_valid: bool,
    pub validation_errors: Vec<ValidationError>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<AssemblyWarning>,
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::intent::SlideIntent;

    #[test]
    fn test_violation_kind_wire_names() {
        let json = serde_json::to_string(&ViolationKind::SingletonViolation).unwrap();
        assert_eq!(json, "\"singleton_violation\"");
        let json = serde_json::to_string(&ViolationKind::ConsecutiveIntentViolation).unwrap();
        assert_eq!(json, "\"consecutive_intent_violation\"");
    }

    #[test]
    fn test_validation_error_omits_absent_slide_index() {
        let err = ValidationError::new(
            ViolationKind::MissingRequiredSection,
            None,
            "required section 'closing' has no slides",
        );
        let json = serde_json::to_string(&err).unwrap();
        assert!(!json.contains("slide_index"));
    }

    #[test]
    fn test_deck_request_minimal_json() {
        let json = serde_json::json!({
            "title": "Edge Computing in 2026",
            "theme": "corporate_blue",
            "slides": [{
                "section": "opening",
                "intent": "cover",
                "title": "Edge Computing in 2026"
            }]
        });
        let request: DeckRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.narrative, NarrativeTemplate::Explanatory);
        assert_eq!(request.slides[0].intent, SlideIntent::Cover);
        assert!(request.slides[0].body_points.is_empty());
    }

    #[test]
    fn test_narrative_template_wire_names() {
        let t: NarrativeTemplate = serde_json::from_str("\"persuasive\"").unwrap();
        assert_eq!(t, NarrativeTemplate::Persuasive);
    }
}
