// Content-fit decisions for a single slide.
// typography: deterministic font sizing and density classification.
// overflow:   split / truncate / compression decisions when content exceeds limits.

pub mod overflow;
pub mod typography;

pub use overflow::{decide_overflow, split_points, truncate_by_priority, OverflowAction};
pub use typography::{
    apply_typography, body_font_size, classify_density, estimate_speaking_time, title_font_size,
};
