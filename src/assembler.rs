//! Deck Assembler — orchestrates validation, repair, and per-slide
//! derivation into a finished [`DeckSpec`].
//!
//! The pipeline is a single deterministic pass over one deck:
//! validate → repair → re-validate → per-slide (typography, overflow
//! resolution with recursive re-sizing of split products, image assignment)
//! → final validation. Data problems accumulate as validation errors on the
//! output; only configuration defects and a repair pass that makes things
//! worse surface as [`ArchitectError`].

use std::collections::HashMap;

use tracing::{info, warn};
use uuid::Uuid;

use crate::config::ArchitectConfig;
use crate::errors::ArchitectError;
use crate::imaging::assign_image;
use crate::layout::{
    apply_typography, decide_overflow, estimate_speaking_time, split_points, truncate_by_priority,
    OverflowAction,
};
use crate::models::deck::{
    AssemblyWarning, DeckRequest, DeckSpec, ValidationError, ViolationKind,
};
use crate::models::slide::SlideSpec;
use crate::structure::{repair_deck, validate_structure};

/// Assembles one deck from a generation request.
///
/// Always returns `Ok` for content-level problems — the resulting deck then
/// carries `is_valid = false` and the violation list. `Err` is reserved for
/// internal-consistency failures the caller cannot act on per-slide.
pub fn assemble_deck(
    request: DeckRequest,
    config: &ArchitectConfig,
) -> Result<DeckSpec, ArchitectError> {
    info!(title = %request.title, slides = request.slides.len(), "assembling deck");

    let slides = drafts_to_specs(&request);

    let before = validate_structure(&slides, config);
    let slides = repair_deck(slides, &request.title, request.subtitle.as_deref(), config)?;
    let after = validate_structure(&slides, config);
    ensure_repair_did_not_regress(&before, &after)?;

    let mut warnings = Vec::new();
    let mut resolved = Vec::with_capacity(slides.len());
    for slide in slides {
        resolved.extend(derive_slide(slide, config, &mut warnings)?);
    }

    // Image assignment needs final deck positions, so it runs after any
    // splits have settled the slide order.
    for (i, slide) in resolved.iter_mut().enumerate() {
        let assignment = assign_image(slide.intent, &slide.title, i);
        slide.image_role = assignment.role;
        slide.image_keywords = assignment.keywords;
        slide.image_position = assignment.position;
    }

    let mut validation_errors = validate_structure(&resolved, config);
    check_density_invariant(&resolved, config, &mut validation_errors)?;

    let is_valid = validation_errors.is_empty();
    if !is_valid {
        warn!(
            violations = validation_errors.len(),
            "deck failed final validation"
        );
    }

    Ok(DeckSpec {
        deck_id: Uuid::new_v4(),
        title: request.title,
        subtitle: request.subtitle,
        theme: config.theme(&request.theme).name.to_string(),
        narrative: request.narrative,
        created_at: chrono::Utc::now(),
        slides: resolved,
        is_valid,
        validation_errors,
        warnings,
    })
}

/// Converts drafts into undecorated specs with stable ids of the form
/// `slide_{intent}_{n}`, numbering each intent independently.
fn drafts_to_specs(request: &DeckRequest) -> Vec<SlideSpec> {
    let mut intent_counters: HashMap<&str, usize> = HashMap::new();
    request
        .slides
        .iter()
        .map(|draft| {
            let n = intent_counters.entry(draft.intent.as_str()).or_insert(0);
            *n += 1;
            SlideSpec::from_draft(
                draft.clone(),
                format!("slide_{}_{}", draft.intent.as_str(), n),
            )
        })
        .collect()
}

/// Repair may leave pre-existing violations standing but must never add a
/// violation kind or grow the count of an existing one.
fn ensure_repair_did_not_regress(
    before: &[ValidationError],
    after: &[ValidationError],
) -> Result<(), ArchitectError> {
    let count_by_kind = |errors: &[ValidationError]| -> HashMap<ViolationKind, usize> {
        let mut counts = HashMap::new();
        for e in errors {
            *counts.entry(e.kind).or_insert(0) += 1;
        }
        counts
    };

    let before_counts = count_by_kind(before);
    for (kind, after_count) in count_by_kind(after) {
        // missing_required_section is exactly what repair fixes; it can only
        // shrink, and any other kind growing means repair broke the deck
        let before_count = before_counts.get(&kind).copied().unwrap_or(0);
        if after_count > before_count {
            return Err(ArchitectError::RepairIntroducedViolation {
                detail: format!(
                    "violation kind {kind:?} went from {before_count} to {after_count} across repair"
                ),
            });
        }
    }
    Ok(())
}

/// Applies typography and overflow resolution to one slide, returning the
/// slide itself or, on a split, its fully re-derived products in order.
fn derive_slide(
    mut slide: SlideSpec,
    config: &ArchitectConfig,
    warnings: &mut Vec<AssemblyWarning>,
) -> Result<Vec<SlideSpec>, ArchitectError> {
    let layout = config.layout_for(slide.intent)?;

    apply_typography(&mut slide, layout);
    slide.speaking_time_secs = estimate_speaking_time(&slide.title, &slide.body_points);

    match decide_overflow(&slide.body_points, layout) {
        OverflowAction::NoAction => Ok(vec![slide]),

        OverflowAction::Split => {
            let parent_id = slide.slide_id.clone();
            let (first_points, second_points) =
                split_points(std::mem::take(&mut slide.body_points), layout);
            if first_points.is_empty() || second_points.is_empty() {
                return Err(ArchitectError::Internal(anyhow::anyhow!(
                    "split of slide {parent_id} produced an empty half"
                )));
            }
            info!(slide_id = %parent_id, "splitting overfull slide");

            // re-splits keep pointing at the original slide, so every product
            // of one authored slide shares one origin id
            let origin = slide.split_of.clone().unwrap_or_else(|| parent_id.clone());

            let mut first = slide.clone();
            first.slide_id = format!("{parent_id}a");
            first.split_of = Some(origin.clone());
            first.body_points = first_points;

            let mut second = slide;
            second.slide_id = format!("{parent_id}b");
            second.split_of = Some(origin);
            second.title = format!("{} (cont.)", second.title);
            second.body_points = second_points;
            // continuation keeps the claim but not the speaker notes
            second.speaker_notes = None;

            let mut products = derive_slide(first, config, warnings)?;
            products.extend(derive_slide(second, config, warnings)?);
            Ok(products)
        }

        OverflowAction::TruncateByPriority => {
            let (kept, dropped) =
                truncate_by_priority(std::mem::take(&mut slide.body_points), layout.max_bullets);
            warn!(
                slide_id = %slide.slide_id,
                dropped = dropped.len(),
                "truncated overfull slide"
            );
            warnings.push(AssemblyWarning {
                slide_id: slide.slide_id.clone(),
                detail: format!(
                    "dropped {} lower-priority bullet(s) to fit the {} layout",
                    dropped.len(),
                    layout.layout_type
                ),
            });
            slide.body_points = kept;
            apply_typography(&mut slide, layout);
            slide.speaking_time_secs = estimate_speaking_time(&slide.title, &slide.body_points);
            Ok(vec![slide])
        }

        OverflowAction::RequestCompression => {
            warnings.push(AssemblyWarning {
                slide_id: slide.slide_id.clone(),
                detail: format!(
                    "content exceeds the word budget ({} words max) but cannot be split; \
                     needs upstream shortening",
                    layout.max_bullets * layout.max_words_per_bullet
                ),
            });
            Ok(vec![slide])
        }
    }
}

/// Confirms overflow handling actually brought every slide under its bullet
/// budget. A hit here is a resolver defect, reported as a violation so the
/// deck is withheld from rendering.
fn check_density_invariant(
    slides: &[SlideSpec],
    config: &ArchitectConfig,
    errors: &mut Vec<ValidationError>,
) -> Result<(), ArchitectError> {
    for (i, slide) in slides.iter().enumerate() {
        let layout = config.layout_for(slide.intent)?;
        if layout.max_bullets > 0 && slide.body_points.len() > layout.max_bullets {
            errors.push(ValidationError::new(
                ViolationKind::UnresolvedOverflow,
                Some(i),
                format!(
                    "slide '{}' holds {} bullets against a budget of {}",
                    slide.slide_id,
                    slide.body_points.len(),
                    layout.max_bullets
                ),
            ));
        }
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
