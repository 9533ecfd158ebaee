// Structural enforcement over the slide sequence.
// validator: pure violation-producing pass — never mutates a slide.
// repair:    deterministic, idempotent completion of missing opening/closing.

pub mod repair;
pub mod validator;

pub use repair::repair_deck;
pub use validator::validate_structure;
