//! Palette and font-pair tables.

use serde::{Deserialize, Serialize};

/// Five hex colors, darkest or most saturated first.
pub type Palette = [&'static str; 5];

/// A heading font and a body font.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontPair {
    pub primary: String,
    pub secondary: String,
}

const BLUE: [Palette; 6] = [
    ["#1E40AF", "#3B82F6", "#60A5FA", "#93C5FD", "#DBEAFE"],
    ["#1E3A8A", "#1D4ED8", "#2563EB", "#3B82F6", "#60A5FA"],
    ["#0C2B5F", "#1E40AF", "#2563EB", "#3B82F6", "#93C5FD"],
    ["#0F172A", "#1E293B", "#334155", "#64748B", "#94A3B8"],
    ["#0EA5E9", "#0284C7", "#0369A1", "#075985", "#0C4A6E"],
    ["#164E63", "#155E75", "#0891B2", "#0E7490", "#083344"],
];

const PURPLE: [Palette; 6] = [
    ["#7C3AED", "#8B5CF6", "#A78BFA", "#C4B5FD", "#E9D5FF"],
    ["#6B21A8", "#7C2D92", "#8B5CF6", "#A78BFA", "#C4B5FD"],
    ["#581C87", "#6B21A8", "#7C2D92", "#8B5CF6", "#A78BFA"],
    ["#4C1D95", "#5B21B6", "#6D28D9", "#7C3AED", "#8B5CF6"],
    ["#9333EA", "#A855F7", "#B565A7", "#C084FC", "#D8B4FE"],
    ["#312E81", "#3730A3", "#4338CA", "#4F46E5", "#6366F1"],
];

const GREEN: [Palette; 6] = [
    ["#059669", "#10B981", "#34D399", "#6EE7B7", "#A7F3D0"],
    ["#047857", "#059669", "#10B981", "#34D399", "#6EE7B7"],
    ["#064E3B", "#047857", "#059669", "#10B981", "#34D399"],
    ["#14532D", "#166534", "#15803D", "#16A34A", "#22C55E"],
    ["#365314", "#3F6212", "#4D7C0F", "#65A30D", "#84CC16"],
    ["#1F2937", "#374151", "#4B5563", "#6B7280", "#9CA3AF"],
];

const ORANGE: [Palette; 6] = [
    ["#EA580C", "#F97316", "#FB923C", "#FDBA74", "#FED7AA"],
    ["#C2410C", "#EA580C", "#F97316", "#FB923C", "#FDBA74"],
    ["#9A3412", "#C2410C", "#EA580C", "#F97316", "#FB923C"],
    ["#DC2626", "#EF4444", "#F87171", "#FCA5A5", "#FECACA"],
    ["#DC2625", "#EF4444", "#F87171", "#FCA5A5", "#FECACA"],
    ["#7C2D12", "#92400E", "#B45309", "#D97706", "#F59E0B"],
];

const RED: [Palette; 6] = [
    ["#DC2626", "#EF4444", "#F87171", "#FCA5A5", "#FECACA"],
    ["#B91C1C", "#DC2626", "#EF4444", "#F87171", "#FCA5A5"],
    ["#991B1B", "#B91C1C", "#DC2626", "#EF4444", "#F87171"],
    ["#7F1D1D", "#991B1B", "#B91C1C", "#DC2626", "#EF4444"],
    ["#BE185D", "#DB2777", "#EC4899", "#F472B6", "#F9A8D4"],
    ["#831843", "#9D174D", "#BE185D", "#DB2777", "#EC4899"],
];

const NEUTRAL: [Palette; 6] = [
    ["#1F2937", "#374151", "#4B5563", "#6B7280", "#9CA3AF"],
    ["#111827", "#1F2937", "#374151", "#4B5563", "#6B7280"],
    ["#0F172A", "#1E293B", "#334155", "#475569", "#64748B"],
    ["#18181B", "#27272A", "#3F3F46", "#52525B", "#71717A"],
    ["#171717", "#262626", "#404040", "#525252", "#737373"],
    ["#0C0A09", "#1C1917", "#292524", "#44403C", "#57534E"],
];

const DEFAULT_FONTS: [(&str, &str); 6] = [
    ("Inter", "Inter"),
    ("Poppins", "Open Sans"),
    ("Playfair Display", "Source Sans Pro"),
    ("Montserrat", "Roboto"),
    ("Lora", "Nunito Sans"),
    ("Crimson Text", "Work Sans"),
];

const CLASSIC_FONTS: [(&str, &str); 6] = [
    ("Playfair Display", "Source Sans Pro"),
    ("Crimson Text", "Work Sans"),
    ("Cormorant Garamond", "Nunito Sans"),
    ("Lora", "Open Sans"),
    ("EB Garamond", "Inter"),
    ("Merriweather", "Roboto"),
];

const MODERN_FONTS: [(&str, &str); 6] = [
    ("Inter", "Inter"),
    ("Poppins", "Open Sans"),
    ("Montserrat", "Roboto"),
    ("Space Grotesk", "Work Sans"),
    ("Plus Jakarta Sans", "Inter"),
    ("Satoshi", "System UI"),
];

/// Palettes for a color preference.
///
/// Matches on the leading color word, case-insensitively, so both
/// `"Blue (Professional & Trust)"` and `"blue"` select the blue set.
/// Anything unrecognized gets the neutral set.
#[must_use]
pub fn color_palettes(preference: &str) -> &'static [Palette; 6] {
    let color = preference
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    match color.as_str() {
        "blue" => &BLUE,
        "purple" => &PURPLE,
        "green" => &GREEN,
        "orange" => &ORANGE,
        "red" => &RED,
        _ => &NEUTRAL,
    }
}

/// Font pairs for a theme: classic serif pairings, modern sans pairings,
/// or a mixed default set.
#[must_use]
pub fn font_pairs(theme: &str) -> Vec<FontPair> {
    let theme = theme.to_lowercase();
    let table = if theme.contains("classic") {
        &CLASSIC_FONTS
    } else if theme.contains("modern") {
        &MODERN_FONTS
    } else {
        &DEFAULT_FONTS
    };
    table
        .iter()
        .map(|(primary, secondary)| FontPair {
            primary: (*primary).to_owned(),
            secondary: (*secondary).to_owned(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_palette_by_option_text() {
        assert_eq!(color_palettes("Blue (Professional & Trust)")[0][0], "#1E40AF");
        assert_eq!(color_palettes("Red (Bold & Urgent)")[4][2], "#EC4899");
    }

    #[test]
    fn test_palette_by_bare_word() {
        assert_eq!(color_palettes("GREEN"), &GREEN);
        assert_eq!(color_palettes("purple"), &PURPLE);
    }

    #[test]
    fn test_unknown_palette_is_neutral() {
        assert_eq!(color_palettes("Teal"), &NEUTRAL);
        assert_eq!(color_palettes(""), &NEUTRAL);
    }

    #[test]
    fn test_font_pairs_by_theme() {
        assert_eq!(font_pairs("Classic")[2].primary, "Cormorant Garamond");
        assert_eq!(font_pairs("Ultra Modern")[5].secondary, "System UI");
        assert_eq!(font_pairs("Playful")[0].primary, "Inter");
        assert_eq!(font_pairs("Playful")[5].primary, "Crimson Text");
    }
}
