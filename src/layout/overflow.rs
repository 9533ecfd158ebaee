//! Overflow Resolver — decides what to do when slide content exceeds the
//! intent's bullet and word budgets.
//!
//! The decision is three-tiered: a heavy overrun splits the slide in two, a
//! mild one drops the lowest-priority bullets, and a single over-long bullet
//! (which a split cannot help) is flagged for upstream rewording. The
//! resolver only decides and partitions; the assembler owns re-derivation
//! and recursion on the produced halves.

use crate::config::LayoutConfig;
use crate::models::slide::{BodyPoint, Priority};

/// Resolution chosen for an over-budget slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowAction {
    /// Content fits; leave the slide alone.
    NoAction,
    /// Partition the bullets across two slides.
    Split,
    /// Drop lowest-priority bullets until the count fits.
    TruncateByPriority,
    /// A split would not help; the content itself needs shortening.
    RequestCompression,
}

/// Decides how to resolve the given bullet list against a layout's budget.
pub fn decide_overflow(points: &[BodyPoint], layout: &LayoutConfig) -> OverflowAction {
    let n = points.len();

    // Title-only layouts have no bullet capacity at all.
    if layout.max_bullets == 0 {
        return if n > 0 {
            OverflowAction::TruncateByPriority
        } else {
            OverflowAction::NoAction
        };
    }

    if n > layout.max_bullets + 2 {
        return OverflowAction::Split;
    }

    let total_words: usize = points.iter().map(BodyPoint::word_count).sum();
    let word_budget = layout.max_bullets * layout.max_words_per_bullet;
    if total_words as f32 > 1.5 * word_budget as f32 {
        return if n >= 2 {
            OverflowAction::Split
        } else {
            OverflowAction::RequestCompression
        };
    }

    if n > layout.max_bullets {
        return OverflowAction::TruncateByPriority;
    }

    OverflowAction::NoAction
}

/// Partitions bullets for a split, preserving order. The first half takes
/// the ceiling of n/2, capped at the layout's bullet budget so the first
/// slide never overflows on count again.
pub fn split_points(points: Vec<BodyPoint>, layout: &LayoutConfig) -> (Vec<BodyPoint>, Vec<BodyPoint>) {
    let n = points.len();
    let first_len = ((n + 1) / 2).min(layout.max_bullets.max(1));
    let mut first = points;
    let second = first.split_off(first_len.min(n));
    (first, second)
}

/// Drops bullets until at most `max` remain. Victims are chosen lowest
/// priority first, and among equals the latest in reading order, so the
/// surviving list keeps its original relative order.
pub fn truncate_by_priority(
    points: Vec<BodyPoint>,
    max: usize,
) -> (Vec<BodyPoint>, Vec<BodyPoint>) {
    let mut kept = points;
    let mut dropped = Vec::new();

    while kept.len() > max {
        let victim = kept
            .iter()
            .enumerate()
            .rev()
            .min_by_key(|(i, p)| (p.priority, std::cmp::Reverse(*i)))
            .map(|(i, _)| i)
            .unwrap_or(kept.len() - 1);
        dropped.push(kept.remove(victim));
    }

    (kept, dropped)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ArchitectConfig;
    use crate::models::intent::SlideIntent;

    fn make_point(words: usize, priority: Priority) -> BodyPoint {
        BodyPoint {
            text: vec!["word"; words].join(" "),
            priority,
            ..BodyPoint::default()
        }
    }

    fn points(n: usize, words: usize) -> Vec<BodyPoint> {
        (0..n).map(|_| make_point(words, Priority::Normal)).collect()
    }

    fn layout(intent: SlideIntent) -> LayoutConfig {
        ArchitectConfig::standard()
            .layout_for(intent)
            .unwrap()
            .clone()
    }

    #[test]
    fn test_within_budget_is_no_action() {
        let layout = layout(SlideIntent::Concept); // 4 bullets, 12 words each
        assert_eq!(decide_overflow(&points(4, 8), &layout), OverflowAction::NoAction);
    }

    #[test]
    fn test_far_over_count_splits() {
        let layout = layout(SlideIntent::Comparison); // max_bullets = 4
        assert_eq!(decide_overflow(&points(7, 3), &layout), OverflowAction::Split);
    }

    #[test]
    fn test_slightly_over_count_truncates() {
        let layout = layout(SlideIntent::Concept); // max_bullets = 4
        assert_eq!(
            decide_overflow(&points(5, 3), &layout),
            OverflowAction::TruncateByPriority
        );
    }

    #[test]
    fn test_word_overrun_splits_even_at_legal_count() {
        let layout = layout(SlideIntent::DataInsight); // 3 bullets, 8 words, budget 24
        // 3 bullets x 14 words = 42 > 1.5 * 24
        assert_eq!(decide_overflow(&points(3, 14), &layout), OverflowAction::Split);
    }

    #[test]
    fn test_single_over_long_bullet_requests_compression() {
        let layout = layout(SlideIntent::DataInsight);
        assert_eq!(
            decide_overflow(&points(1, 40), &layout),
            OverflowAction::RequestCompression
        );
    }

    #[test]
    fn test_zero_bullet_layout_truncates_stray_bullets() {
        let layout = layout(SlideIntent::Cover);
        assert_eq!(
            decide_overflow(&points(2, 3), &layout),
            OverflowAction::TruncateByPriority
        );
        assert_eq!(decide_overflow(&[], &layout), OverflowAction::NoAction);
    }

    #[test]
    fn test_split_partitions_ceiling_first() {
        let layout = layout(SlideIntent::Comparison); // max_bullets = 4
        let input: Vec<BodyPoint> = (0..7)
            .map(|i| BodyPoint {
                text: format!("point {i}"),
                ..BodyPoint::default()
            })
            .collect();
        let (first, second) = split_points(input, &layout);
        assert_eq!(first.len(), 4);
        assert_eq!(second.len(), 3);
        assert_eq!(first[0].text, "point 0");
        assert_eq!(second[0].text, "point 4");
    }

    #[test]
    fn test_split_caps_first_half_at_bullet_budget() {
        let layout = layout(SlideIntent::DataInsight); // max_bullets = 3
        let (first, second) = split_points(points(9, 2), &layout);
        assert_eq!(first.len(), 3);
        assert_eq!(second.len(), 6);
    }

    #[test]
    fn test_truncation_drops_lowest_priority_latest_first() {
        let input = vec![
            make_point(3, Priority::Normal),
            make_point(3, Priority::Critical),
            make_point(3, Priority::Normal),
            make_point(3, Priority::High),
            make_point(3, Priority::Normal),
        ];
        let (kept, dropped) = truncate_by_priority(input, 3);
        assert_eq!(kept.len(), 3);
        assert_eq!(dropped.len(), 2);
        // both victims are Normal, taken from the back forward
        assert!(dropped.iter().all(|p| p.priority == Priority::Normal));
        assert_eq!(kept[0].priority, Priority::Normal);
        assert_eq!(kept[1].priority, Priority::Critical);
        assert_eq!(kept[2].priority, Priority::High);
    }

    #[test]
    fn test_truncation_preserves_reading_order_of_survivors() {
        let input: Vec<BodyPoint> = (0..6)
            .map(|i| BodyPoint {
                text: format!("point {i}"),
                priority: if i == 1 { Priority::High } else { Priority::Normal },
                ..BodyPoint::default()
            })
            .collect();
        let (kept, _) = truncate_by_priority(input, 3);
        let texts: Vec<&str> = kept.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["point 0", "point 1", "point 2"]);
    }

    #[test]
    fn test_truncate_to_zero_drops_everything() {
        let (kept, dropped) = truncate_by_priority(points(3, 2), 0);
        assert!(kept.is_empty());
        assert_eq!(dropped.len(), 3);
    }
}
