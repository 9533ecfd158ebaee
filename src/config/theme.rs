//! Theme palettes — six named presets covering the product's visual range.
//! Colors are hex strings consumed verbatim by the renderer; this crate never
//! interprets them.

use serde::Serialize;

/// Complete color palette for a theme preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemePalette {
    pub name: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
}

pub const DEFAULT_THEME: &str = "corporate_blue";

/// All available theme presets.
pub static THEME_PALETTES: [ThemePalette; 6] = [
    ThemePalette {
        name: "corporate_blue",
        primary: "#1e3a5f",
        secondary: "#2d5a87",
        accent: "#e07b39",
        background: "#ffffff",
        surface: "#f8fafc",
        text_primary: "#1e293b",
        text_secondary: "#64748b",
    },
    ThemePalette {
        name: "modern_dark",
        primary: "#0f172a",
        secondary: "#1e293b",
        accent: "#38bdf8",
        background: "#0f172a",
        surface: "#1e293b",
        text_primary: "#f8fafc",
        text_secondary: "#94a3b8",
    },
    ThemePalette {
        name: "elegant_light",
        primary: "#18181b",
        secondary: "#3f3f46",
        accent: "#a855f7",
        background: "#fafafa",
        surface: "#ffffff",
        text_primary: "#18181b",
        text_secondary: "#71717a",
    },
    ThemePalette {
        name: "tech_gradient",
        primary: "#4f46e5",
        secondary: "#7c3aed",
        accent: "#22d3ee",
        background: "#ffffff",
        surface: "#f5f3ff",
        text_primary: "#1e1b4b",
        text_secondary: "#6366f1",
    },
    ThemePalette {
        name: "warm_professional",
        primary: "#7c2d12",
        secondary: "#9a3412",
        accent: "#f59e0b",
        background: "#fffbeb",
        surface: "#fef3c7",
        text_primary: "#451a03",
        text_secondary: "#92400e",
    },
    ThemePalette {
        name: "minimal_mono",
        primary: "#171717",
        secondary: "#404040",
        accent: "#171717",
        background: "#ffffff",
        surface: "#fafafa",
        text_primary: "#171717",
        text_secondary: "#737373",
    },
];

/// Looks up a palette by preset name, falling back to the default palette for
/// unknown names (the host surfaces theme typos as a soft degradation, not an
/// error).
pub fn palette(name: &str) -> &'static ThemePalette {
    THEME_PALETTES
        .iter()
        .find(|p| p.name == name)
        .unwrap_or(&THEME_PALETTES[0])
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
