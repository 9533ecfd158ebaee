//! Typography Engine — deterministic font sizing, density classification, and
//! speaking-time estimation.
//!
//! Sizes are pure functions of slide text and the intent's layout config.
//! The same slide always yields the same sizes; there is no renderer feedback
//! loop here. All character counts are Unicode scalar counts, not bytes, so
//! non-ASCII titles size the same as ASCII ones of equal length.

use crate::config::LayoutConfig;
use crate::models::slide::{BodyPoint, Density, SlideSpec};

/// Title size from length within the intent's `(min, max)` range.
///
/// Short titles (< 30 chars) render at the maximum, long ones (>= 50) at the
/// minimum, and the span in between interpolates linearly.
pub fn title_font_size(title: &str, layout: &LayoutConfig) -> u32 {
    let (min, max) = layout.title_font_range;
    let len = title.chars().count();
    if len < 30 {
        max
    } else if len < 50 {
        let t = (len - 30) as f32 / 20.0;
        (max as f32 - t * (max - min) as f32) as u32
    } else {
        min
    }
}

/// Body size from bullet count and average bullet length.
///
/// Two independent crowding factors (item count, words per item) are averaged
/// and scale the configured range from its minimum upward. Zero-bullet
/// layouts pin to the minimum.
pub fn body_font_size(points: &[BodyPoint], layout: &LayoutConfig) -> u32 {
    let (min, max) = layout.body_font_range;
    if layout.max_bullets == 0 || points.is_empty() {
        return min;
    }

    let item_factor: f32 = match points.len() {
        0..=2 => 1.0,
        3..=4 => 0.7,
        _ => 0.4,
    };

    let total_words: usize = points.iter().map(BodyPoint::word_count).sum();
    let avg_words = total_words as f32 / points.len() as f32;
    let word_factor: f32 = if avg_words <= 6.0 {
        1.0
    } else if avg_words <= 10.0 {
        0.8
    } else {
        0.6
    };

    let scale = (item_factor + word_factor) / 2.0;
    min + (scale * (max - min) as f32) as u32
}

/// Classifies how full a slide is relative to its bullet capacity.
pub fn classify_density(points: &[BodyPoint], layout: &LayoutConfig) -> Density {
    if layout.max_bullets == 0 || points.is_empty() {
        return Density::Sparse;
    }
    let fill = points.len() as f32 / layout.max_bullets as f32;
    if fill <= 0.5 {
        Density::Sparse
    } else if fill <= 0.8 {
        Density::Balanced
    } else {
        Density::Dense
    }
}

/// Rough delivery time at a 2.5 words-per-second pace with a 2x factor for
/// elaboration, floored at 30 seconds per slide.
pub fn estimate_speaking_time(title: &str, points: &[BodyPoint]) -> u32 {
    let words = title.split_whitespace().count()
        + points.iter().map(BodyPoint::word_count).sum::<usize>();
    let secs = (words as f32 / 2.5 * 2.0) as u32;
    secs.max(30)
}

/// Writes the derived presentation fields onto a slide in place.
pub fn apply_typography(slide: &mut SlideSpec, layout: &LayoutConfig) {
    slide.layout_type = layout.layout_type.to_string();
    slide.title_font_size = title_font_size(&slide.title, layout);
    slide.body_font_size = body_font_size(&slide.body_points, layout);
    slide.density = classify_density(&slide.body_points, layout);
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
