// Data model for the deck assembly pipeline.
// intent: closed enum tags driving every downstream decision.
// slide:  body points and the per-slide specification (draft + derived).
// deck:   request/response envelopes, violation taxonomy.

pub mod deck;
pub mod intent;
pub mod slide;
