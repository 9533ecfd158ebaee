//! Deck Repair — deterministic completion of structurally absent sections.
//!
//! Repair handles exactly one class of problem: a missing required opening or
//! closing section. It inserts a synthetic slide built from the deck's own
//! metadata, without any new content-generation call. Ordering, singleton,
//! and consecutive violations are content authoring problems — they are
//! reported by the validator, never silently patched here.
//!
//! Repair is idempotent: on an already-repaired deck both presence checks
//! pass and the input is returned untouched.

use tracing::info;

use crate::config::{ArchitectConfig, SectionDefinition};
use crate::errors::ArchitectError;
use crate::models::intent::{ImagePosition, ImageRole, SlideIntent};
use crate::models::slide::{DraftSlide, SlideSpec};

/// Inserts synthetic opening/closing slides where those required sections are
/// absent. Returns the (possibly extended) sequence.
pub fn repair_deck(
    mut slides: Vec<SlideSpec>,
    deck_title: &str,
    deck_subtitle: Option<&str>,
    config: &ArchitectConfig,
) -> Result<Vec<SlideSpec>, ArchitectError> {
    let opening = config
        .section("opening")
        .ok_or_else(|| anyhow::anyhow!("section table has no 'opening' entry"))?;
    let closing = config
        .section("closing")
        .ok_or_else(|| anyhow::anyhow!("section table has no 'closing' entry"))?;

    if !has_section(&slides, opening.name) {
        let cover = synthesize(opening, deck_title, deck_subtitle, config)?;
        info!(slide_id = %cover.slide_id, "repair: inserting synthetic opening slide");
        slides.insert(0, cover);
    }

    if !has_section(&slides, closing.name) {
        let thanks = synthesize(closing, deck_title, deck_subtitle, config)?;
        info!(slide_id = %thanks.slide_id, "repair: appending synthetic closing slide");
        slides.push(thanks);
    }

    Ok(slides)
}

fn has_section(slides: &[SlideSpec], name: &str) -> bool {
    slides.iter().any(|s| s.section == name)
}

/// Builds a synthetic slide for a section: the section's first allowed
/// intent, minimal fixed layout, no body points, deterministic id.
fn synthesize(
    section: &SectionDefinition,
    deck_title: &str,
    deck_subtitle: Option<&str>,
    config: &ArchitectConfig,
) -> Result<SlideSpec, ArchitectError> {
    let intent = section.allowed_intents[0];
    let layout = config.layout_for(intent)?;

    let (title, subtitle, notes, image_role, image_position, keywords): (
        String,
        Option<String>,
        &str,
        ImageRole,
        ImagePosition,
        &[&str],
    ) = if intent == SlideIntent::Cover {
        (
            deck_title.to_string(),
            deck_subtitle.map(str::to_string),
            "Welcome and introduce the topic.",
            ImageRole::Hero,
            ImagePosition::Background,
            &["professional", "modern", "abstract"],
        )
    } else {
        (
            "Thank You".to_string(),
            Some("Questions & Discussion".to_string()),
            "Thank the audience and invite questions.",
            ImageRole::Decorative,
            ImagePosition::Corner,
            &["thank you", "questions", "discussion"],
        )
    };

    // going through the draft path applies the same normalization (title and
    // subtitle clipping, claim fallback) that authored slides get
    let mut slide = SlideSpec::from_draft(
        DraftSlide {
            section: section.name.to_string(),
            intent,
            claim: String::new(),
            title,
            subtitle,
            body_points: vec![],
            speaker_notes: Some(notes.to_string()),
            transition_hint: None,
        },
        format!("slide_{}_repair", intent.as_str()),
    );
    slide.layout_type = layout.layout_type.to_string();
    slide.title_font_size = layout.title_font_range.1;
    slide.body_font_size = layout.body_font_range.0;
    slide.image_role = image_role;
    slide.image_keywords = keywords.iter().map(|k| k.to_string()).collect();
    slide.image_position = image_position;
    slide.speaking_time_secs = 30;
    Ok(slide)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
