use thiserror::Error;

use crate::models::intent::SlideIntent;

/// Library-level error type.
///
/// Bad input data is NOT an error — the assembler reports it through
/// `DeckSpec::validation_errors` and sets `is_valid = false`. An
/// `ArchitectError` always indicates a configuration or logic defect:
/// a static table missing an entry for a declared intent, or deck repair
/// producing output that fails re-validation.
#[derive(Debug, Error)]
pub enum ArchitectError {
    #[error("no layout configuration for intent '{0}'")]
    MissingLayoutConfig(SlideIntent),

    #[error("deck repair introduced new violations: {detail}")]
    RepairIntroducedViolation { detail: String },

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
