//! Static configuration for the assembly pipeline.
//!
//! All tables are immutable after construction and passed explicitly into
//! every component call — no ambient global state. `ArchitectConfig::standard()`
//! is built once at process start by the host and shared read-only across
//! concurrent deck jobs; nothing here requires locking.

pub mod layout;
pub mod sections;
pub mod theme;

use std::collections::{HashMap, HashSet};

pub use layout::LayoutConfig;
pub use sections::SectionDefinition;
pub use theme::ThemePalette;

use crate::errors::ArchitectError;
use crate::models::intent::SlideIntent;

/// The complete, immutable configuration consumed by the pipeline.
#[derive(Debug, Clone)]
pub struct ArchitectConfig {
    sections: &'static [SectionDefinition],
    layouts: HashMap<SlideIntent, LayoutConfig>,
    singleton_intents: HashSet<SlideIntent>,
    no_consecutive_intents: HashSet<SlideIntent>,
}

impl ArchitectConfig {
    /// The standard product configuration: six sections, the full intent
    /// layout table, and the default uniqueness constraint sets.
    pub fn standard() -> Self {
        ArchitectConfig {
            sections: &sections::DECK_SECTIONS,
            layouts: layout::layout_table()
                .iter()
                .map(|(intent, config)| (*intent, config.clone()))
                .collect(),
            singleton_intents: sections::SINGLETON_INTENTS.iter().copied().collect(),
            no_consecutive_intents: sections::NO_CONSECUTIVE_INTENTS.iter().copied().collect(),
        }
    }

    /// All section definitions, in `order_index` order.
    pub fn sections(&self) -> &[SectionDefinition] {
        self.sections
    }

    /// Section definition by name.
    pub fn section(&self, name: &str) -> Option<&SectionDefinition> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Layout configuration for an intent.
    ///
    /// A missing entry is a deployment defect, not a data problem, and is the
    /// one place a slide-level lookup turns fatal.
    pub fn layout_for(&self, intent: SlideIntent) -> Result<&LayoutConfig, ArchitectError> {
        self.layouts
            .get(&intent)
            .ok_or(ArchitectError::MissingLayoutConfig(intent))
    }

    pub fn is_singleton(&self, intent: SlideIntent) -> bool {
        self.singleton_intents.contains(&intent)
    }

    pub fn is_no_consecutive(&self, intent: SlideIntent) -> bool {
        self.no_consecutive_intents.contains(&intent)
    }

    /// Resolves a theme preset name, falling back to the default palette.
    pub fn theme(&self, name: &str) -> &'static ThemePalette {
        theme::palette(name)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_config_covers_all_intents() {
        let config = ArchitectConfig::standard();
        for intent in SlideIntent::all() {
            assert!(config.layout_for(*intent).is_ok(), "{intent}");
        }
    }

    #[test]
    fn test_section_lookup_by_name() {
        let config = ArchitectConfig::standard();
        assert_eq!(config.section("closing").unwrap().order_index, 5);
        assert!(config.section("epilogue").is_none());
    }

    #[test]
    fn test_singleton_and_no_consecutive_membership() {
        let config = ArchitectConfig::standard();
        assert!(config.is_singleton(SlideIntent::Cover));
        assert!(!config.is_singleton(SlideIntent::Concept));
        assert!(config.is_no_consecutive(SlideIntent::DataInsight));
        assert!(!config.is_no_consecutive(SlideIntent::Vision));
    }

    #[test]
    fn test_missing_layout_is_fatal_error() {
        let mut config = ArchitectConfig::standard();
        config.layouts.remove(&SlideIntent::Risks);
        let err = config.layout_for(SlideIntent::Risks).unwrap_err();
        assert!(matches!(
            err,
            ArchitectError::MissingLayoutConfig(SlideIntent::Risks)
        ));
    }
}
