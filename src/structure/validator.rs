//! Structural Validator — checks an ordered slide sequence against the deck
//! skeleton and uniqueness rules.
//!
//! Two linear passes. Pass 1 groups slides by declared section and verifies
//! monotonic section order, per-section count bounds, and per-slide intent
//! membership. Pass 2 tracks singleton counts and the previous intent to
//! catch forbidden consecutive repeats. O(n) time, O(distinct intents) space.
//!
//! The validator is a pure predicate-producing function: it never mutates a
//! slide and never errors — every data problem becomes a structured
//! [`ValidationError`].

use std::collections::{HashMap, HashSet};

use crate::config::ArchitectConfig;
use crate::models::deck::{ValidationError, ViolationKind};
use crate::models::intent::SlideIntent;
use crate::models::slide::SlideSpec;

/// Validates `slides` against the section and uniqueness rules in `config`.
/// Returns all violations found; an empty vec means structurally sound.
pub fn validate_structure(slides: &[SlideSpec], config: &ArchitectConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_sections(slides, config, &mut errors);
    check_uniqueness(slides, config, &mut errors);

    errors
}

// ────────────────────────────────────────────────────────────────────────────
// Pass 1: sections
// ────────────────────────────────────────────────────────────────────────────

fn check_sections(
    slides: &[SlideSpec],
    config: &ArchitectConfig,
    errors: &mut Vec<ValidationError>,
) {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut highest_order: Option<usize> = None;

    for (i, slide) in slides.iter().enumerate() {
        let Some(section) = config.section(&slide.section) else {
            errors.push(ValidationError::new(
                ViolationKind::IntentNotAllowedInSection,
                Some(i),
                format!(
                    "slide declares unknown section '{}' (intent '{}')",
                    slide.section, slide.intent
                ),
            ));
            continue;
        };

        *counts.entry(section.name).or_insert(0) += 1;

        // Sections must appear in non-decreasing order_index order.
        if let Some(prev) = highest_order {
            if section.order_index < prev {
                errors.push(ValidationError::new(
                    ViolationKind::SectionOutOfOrder,
                    Some(i),
                    format!(
                        "section '{}' (order {}) appears after a section with order {}",
                        section.name, section.order_index, prev
                    ),
                ));
            }
        }
        highest_order = Some(highest_order.unwrap_or(0).max(section.order_index));

        if !section.allowed_intents.contains(&slide.intent) {
            errors.push(ValidationError::new(
                ViolationKind::IntentNotAllowedInSection,
                Some(i),
                format!(
                    "intent '{}' is not allowed in section '{}'",
                    slide.intent, section.name
                ),
            ));
        }
    }

    for section in config.sections() {
        let count = counts.get(section.name).copied().unwrap_or(0);
        if count == 0 {
            if section.required {
                errors.push(ValidationError::new(
                    ViolationKind::MissingRequiredSection,
                    None,
                    format!("required section '{}' has no slides", section.name),
                ));
            }
        } else if count < section.min_slides || count > section.max_slides {
            errors.push(ValidationError::new(
                ViolationKind::SectionCountOutOfBounds,
                None,
                format!(
                    "section '{}' has {} slides, allowed range is {}..={}",
                    section.name, count, section.min_slides, section.max_slides
                ),
            ));
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pass 2: uniqueness
// ────────────────────────────────────────────────────────────────────────────

fn check_uniqueness(
    slides: &[SlideSpec],
    config: &ArchitectConfig,
    errors: &mut Vec<ValidationError>,
) {
    let mut singleton_origins: HashMap<SlideIntent, HashSet<&str>> = HashMap::new();
    let mut prev: Option<&SlideSpec> = None;

    for (i, slide) in slides.iter().enumerate() {
        // All products of one overflow split share their origin's id and
        // count as a single logical occurrence of the intent.
        let origin = slide.split_of.as_deref().unwrap_or(&slide.slide_id);

        if config.is_singleton(slide.intent) {
            let origins = singleton_origins.entry(slide.intent).or_default();
            if origins.insert(origin) && origins.len() > 1 {
                errors.push(ValidationError::new(
                    ViolationKind::SingletonViolation,
                    Some(i),
                    format!(
                        "singleton intent '{}' appears {} times",
                        slide.intent,
                        origins.len()
                    ),
                ));
            }
        }

        if let Some(previous) = prev {
            let same_origin = slide.split_of.is_some() && slide.split_of == previous.split_of;
            if previous.intent == slide.intent
                && config.is_no_consecutive(slide.intent)
                && !same_origin
            {
                errors.push(ValidationError::new(
                    ViolationKind::ConsecutiveIntentViolation,
                    Some(i),
                    format!(
                        "intent '{}' appears on adjacent slides {} and {}",
                        slide.intent,
                        i - 1,
                        i
                    ),
                ));
            }
        }

        prev = Some(slide);
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::slide::DraftSlide;

    fn make_slide(section: &str, intent: SlideIntent, title: &str) -> SlideSpec {
        SlideSpec::from_draft(
            DraftSlide {
                section: section.to_string(),
                intent,
                claim: String::new(),
                title: title.to_string(),
                subtitle: None,
                body_points: vec![],
                speaker_notes: None,
                transition_hint: None,
            },
            format!("slide_{}_{}", intent.as_str(), title.len()),
        )
    }

    /// A minimal structurally sound deck: cover, vision, two core slides, closing.
    fn make_valid_deck() -> Vec<SlideSpec> {
        vec![
            make_slide("opening", SlideIntent::Cover, "The Deck"),
            make_slide("framing", SlideIntent::Vision, "Why it matters"),
            make_slide("core_content", SlideIntent::Concept, "What it is"),
            make_slide("core_content", SlideIntent::Framework, "How it works"),
            make_slide("closing", SlideIntent::Closing, "Thank You"),
        ]
    }

    fn kinds(errors: &[ValidationError]) -> Vec<ViolationKind> {
        errors.iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_valid_deck_produces_no_violations() {
        let config = ArchitectConfig::standard();
        let errors = validate_structure(&make_valid_deck(), &config);
        assert!(errors.is_empty(), "unexpected violations: {errors:?}");
    }

    #[test]
    fn test_empty_deck_reports_every_required_section() {
        let config = ArchitectConfig::standard();
        let errors = validate_structure(&[], &config);
        let missing = errors
            .iter()
            .filter(|e| e.kind == ViolationKind::MissingRequiredSection)
            .count();
        // opening, framing, core_content, closing
        assert_eq!(missing, 4);
    }

    #[test]
    fn test_missing_closing_section_reported() {
        let config = ArchitectConfig::standard();
        let mut deck = make_valid_deck();
        deck.pop();
        let errors = validate_structure(&deck, &config);
        assert!(kinds(&errors).contains(&ViolationKind::MissingRequiredSection));
        assert!(errors.iter().any(|e| e.detail.contains("closing")));
    }

    #[test]
    fn test_section_over_max_reported_as_count_out_of_bounds() {
        let config = ArchitectConfig::standard();
        let mut deck = make_valid_deck();
        // opening allows exactly one slide
        deck.insert(1, make_slide("opening", SlideIntent::Cover, "Second cover"));
        let errors = validate_structure(&deck, &config);
        assert!(kinds(&errors).contains(&ViolationKind::SectionCountOutOfBounds));
        // and the duplicated cover is also a singleton violation
        assert!(kinds(&errors).contains(&ViolationKind::SingletonViolation));
    }

    #[test]
    fn test_intent_outside_section_whitelist() {
        let config = ArchitectConfig::standard();
        let mut deck = make_valid_deck();
        deck[2] = make_slide("core_content", SlideIntent::Risks, "Danger");
        let errors = validate_structure(&deck, &config);
        let err = errors
            .iter()
            .find(|e| e.kind == ViolationKind::IntentNotAllowedInSection)
            .expect("should flag risks in core_content");
        assert_eq!(err.slide_index, Some(2));
    }

    #[test]
    fn test_unknown_section_flagged_with_detail() {
        let config = ArchitectConfig::standard();
        let mut deck = make_valid_deck();
        deck[3] = make_slide("appendix", SlideIntent::Framework, "Extra");
        let errors = validate_structure(&deck, &config);
        let err = errors
            .iter()
            .find(|e| e.kind == ViolationKind::IntentNotAllowedInSection)
            .unwrap();
        assert!(err.detail.contains("appendix"));
    }

    #[test]
    fn test_out_of_order_sections_flagged() {
        let config = ArchitectConfig::standard();
        let deck = vec![
            make_slide("opening", SlideIntent::Cover, "The Deck"),
            make_slide("core_content", SlideIntent::Concept, "Early core"),
            make_slide("core_content", SlideIntent::KeyPoints, "More core"),
            make_slide("framing", SlideIntent::Vision, "Late framing"),
            make_slide("closing", SlideIntent::Closing, "Thank You"),
        ];
        let errors = validate_structure(&deck, &config);
        let err = errors
            .iter()
            .find(|e| e.kind == ViolationKind::SectionOutOfOrder)
            .expect("framing after core_content should be flagged");
        assert_eq!(err.slide_index, Some(3));
    }

    #[test]
    fn test_consecutive_data_insight_flagged() {
        let config = ArchitectConfig::standard();
        let deck = vec![
            make_slide("opening", SlideIntent::Cover, "The Deck"),
            make_slide("framing", SlideIntent::Vision, "Why"),
            make_slide("core_content", SlideIntent::DataInsight, "Numbers"),
            make_slide("core_content", SlideIntent::DataInsight, "More numbers"),
            make_slide("closing", SlideIntent::Closing, "Thank You"),
        ];
        let errors = validate_structure(&deck, &config);
        let err = errors
            .iter()
            .find(|e| e.kind == ViolationKind::ConsecutiveIntentViolation)
            .expect("adjacent data_insight slides should be flagged");
        assert_eq!(err.slide_index, Some(3));
    }

    #[test]
    fn test_consecutive_repeat_allowed_for_unrestricted_intent() {
        let config = ArchitectConfig::standard();
        let deck = vec![
            make_slide("opening", SlideIntent::Cover, "The Deck"),
            make_slide("framing", SlideIntent::Vision, "Why"),
            make_slide("core_content", SlideIntent::Concept, "First idea"),
            make_slide("core_content", SlideIntent::Concept, "Second idea"),
            make_slide("closing", SlideIntent::Closing, "Thank You"),
        ];
        let errors = validate_structure(&deck, &config);
        assert!(
            !kinds(&errors).contains(&ViolationKind::ConsecutiveIntentViolation),
            "concept is not in the no-consecutive set"
        );
    }

    #[test]
    fn test_split_halves_exempt_from_consecutive_check() {
        let config = ArchitectConfig::standard();
        let mut deck = vec![
            make_slide("opening", SlideIntent::Cover, "The Deck"),
            make_slide("framing", SlideIntent::Vision, "Why"),
            make_slide("core_content", SlideIntent::Comparison, "Old vs new"),
            make_slide("core_content", SlideIntent::Comparison, "Old vs new (cont.)"),
            make_slide("closing", SlideIntent::Closing, "Thank You"),
        ];
        deck[2].split_of = Some("slide_comparison_1".to_string());
        deck[3].split_of = Some("slide_comparison_1".to_string());
        let errors = validate_structure(&deck, &config);
        assert!(
            !kinds(&errors).contains(&ViolationKind::ConsecutiveIntentViolation),
            "halves of one split slide are one logical occurrence: {errors:?}"
        );
    }

    #[test]
    fn test_split_halves_of_singleton_count_once() {
        let config = ArchitectConfig::standard();
        let mut deck = make_valid_deck();
        let mut agenda_a = make_slide("framing", SlideIntent::Agenda, "Agenda");
        let mut agenda_b = make_slide("framing", SlideIntent::Agenda, "Agenda (cont.)");
        agenda_a.split_of = Some("slide_agenda_1".to_string());
        agenda_b.split_of = Some("slide_agenda_1".to_string());
        deck.splice(1..2, [agenda_a, agenda_b]);
        let errors = validate_structure(&deck, &config);
        assert!(
            !kinds(&errors).contains(&ViolationKind::SingletonViolation),
            "split agenda halves should not trip the singleton rule: {errors:?}"
        );
    }

    #[test]
    fn test_distinct_origin_splits_still_flagged_consecutive() {
        let config = ArchitectConfig::standard();
        let mut deck = vec![
            make_slide("opening", SlideIntent::Cover, "The Deck"),
            make_slide("framing", SlideIntent::Vision, "Why"),
            make_slide("core_content", SlideIntent::DataInsight, "Numbers"),
            make_slide("core_content", SlideIntent::DataInsight, "Other numbers"),
            make_slide("closing", SlideIntent::Closing, "Thank You"),
        ];
        deck[2].split_of = Some("slide_data_insight_1".to_string());
        deck[3].split_of = Some("slide_data_insight_2".to_string());
        let errors = validate_structure(&deck, &config);
        assert!(kinds(&errors).contains(&ViolationKind::ConsecutiveIntentViolation));
    }

    #[test]
    fn test_validator_does_not_mutate_slides() {
        let config = ArchitectConfig::standard();
        let deck = make_valid_deck();
        let snapshot = deck.clone();
        let _ = validate_structure(&deck, &config);
        assert_eq!(deck, snapshot);
    }
}
