//! Deck Architect — constraint-based presentation assembly.
//!
//! Turns an unordered batch of AI-authored slide drafts into a single,
//! structurally valid, visually coherent deck specification. The crate owns
//! the hard part of deck generation: narrative-structure enforcement,
//! uniqueness and density rules, and deterministic derivation of visual
//! parameters (font sizes, layout, overflow handling, image role).
//!
//! It deliberately does NOT talk to the outside world. The LLM that drafts
//! slide text, the image search service, and the binary renderer are all
//! collaborators of the host service; this crate is a pure library invoked
//! with a [`DeckRequest`] and returning a [`DeckSpec`].
//!
//! # Pipeline
//! validate → repair → re-validate → per-slide (typography → overflow →
//! image assignment) → final validate → [`DeckSpec`] with `is_valid` set.
//!
//! Data problems never panic or error — they accumulate in
//! `DeckSpec::validation_errors`. Only configuration defects (a missing
//! layout table entry, repair output failing re-validation) surface as
//! [`ArchitectError`].

pub mod assembler;
pub mod config;
pub mod errors;
pub mod imaging;
pub mod layout;
pub mod models;
pub mod structure;

pub use assembler::assemble_deck;
pub use config::ArchitectConfig;
pub use errors::ArchitectError;
pub use models::deck::{
    AssemblyWarning, DeckRequest, DeckSpec, NarrativeTemplate, ValidationError, ViolationKind,
};
pub use models::intent::{ImagePosition, ImageRole, SlideIntent};
pub use models::slide::{BodyPoint, Density, DraftSlide, PointRole, Priority, SlideSpec};
