//! Map themes.
//!
//! The mountain renderer is one function; everything that used to vary
//! between map implementations (glyphs, accent colors) is data here.

use colored::Color;

/// Glyphs and colors for one rendering style.
#[derive(Debug, Clone)]
pub struct MapTheme {
    /// Theme name as referenced from configuration
    pub name: &'static str,
    /// Marker for completed stages
    pub completed_glyph: &'static str,
    /// Marker for the current stage
    pub current_glyph: &'static str,
    /// Marker for locked stages
    pub locked_glyph: &'static str,
    /// Connector drawn between stages
    pub path_glyph: &'static str,
    /// Color for completed markers
    pub completed_color: Color,
    /// Color for the current marker and highlights
    pub current_color: Color,
    /// Filled segment of progress bars
    pub bar_filled: &'static str,
    /// Empty segment of progress bars
    pub bar_empty: &'static str,
}

/// The default look.
pub const SUMMIT: MapTheme = MapTheme {
    name: "summit",
    completed_glyph: "✔",
    current_glyph: "➤",
    locked_glyph: "🔒",
    path_glyph: "│",
    completed_color: Color::Green,
    current_color: Color::Cyan,
    bar_filled: "█",
    bar_empty: "░",
};

/// Plain-ASCII look for terminals without wide glyph support.
pub const TRAIL: MapTheme = MapTheme {
    name: "trail",
    completed_glyph: "[x]",
    current_glyph: "[>]",
    locked_glyph: "[ ]",
    path_glyph: "|",
    completed_color: Color::Green,
    current_color: Color::Yellow,
    bar_filled: "#",
    bar_empty: "-",
};

impl MapTheme {
    /// Look up a theme by name.
    #[must_use]
    pub fn by_name(name: &str) -> Option<&'static MapTheme> {
        match name {
            "summit" => Some(&SUMMIT),
            "trail" => Some(&TRAIL),
            _ => None,
        }
    }

    /// All built-in theme names.
    #[must_use]
    pub fn names() -> &'static [&'static str] {
        &["summit", "trail"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name_finds_builtins() {
        for name in MapTheme::names() {
            assert_eq!(MapTheme::by_name(name).unwrap().name, *name);
        }
    }

    #[test]
    fn test_by_name_unknown() {
        assert!(MapTheme::by_name("neon").is_none());
    }
}
