//! Terminal color palette
//!
//! Derives concrete terminal colors from the preference record. Screens
//! never read the preference store directly; the app controller rebuilds
//! the palette whenever the store notifies a change.

use ratatui::style::Color;

use crate::prefs::{AccentColor, Preferences, Theme};

/// Resolved colors for the active theme and accent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Highlight color for titles, borders, and selections
    pub accent: Color,
    /// Primary text color
    pub fg: Color,
    /// Screen background
    pub bg: Color,
    /// Secondary text color
    pub muted: Color,
    /// Text rendered on top of accent-colored fills
    pub on_accent: Color,
}

impl Palette {
    /// Resolve the palette for a preference record
    pub fn from_prefs(prefs: Preferences) -> Self {
        let accent = match prefs.accent {
            AccentColor::Cyan => Color::Cyan,
            AccentColor::Purple => Color::Magenta,
            AccentColor::Blue => Color::Blue,
        };

        match prefs.theme {
            Theme::Dark => Self {
                accent,
                fg: Color::White,
                bg: Color::Black,
                muted: Color::DarkGray,
                on_accent: Color::Black,
            },
            Theme::Light => Self {
                accent,
                fg: Color::Black,
                bg: Color::White,
                muted: Color::Gray,
                on_accent: Color::White,
            },
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_prefs(Preferences::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_is_dark_cyan() {
        let palette = Palette::default();
        assert_eq!(palette.accent, Color::Cyan);
        assert_eq!(palette.bg, Color::Black);
        assert_eq!(palette.fg, Color::White);
    }

    #[test]
    fn test_accent_follows_preference() {
        for (accent, color) in [
            (AccentColor::Cyan, Color::Cyan),
            (AccentColor::Purple, Color::Magenta),
            (AccentColor::Blue, Color::Blue),
        ] {
            let palette = Palette::from_prefs(Preferences {
                theme: Theme::Dark,
                accent,
            });
            assert_eq!(palette.accent, color);
        }
    }

    #[test]
    fn test_light_theme_inverts_text() {
        let dark = Palette::from_prefs(Preferences {
            theme: Theme::Dark,
            accent: AccentColor::Cyan,
        });
        let light = Palette::from_prefs(Preferences {
            theme: Theme::Light,
            accent: AccentColor::Cyan,
        });
        assert_eq!(dark.fg, light.bg);
        assert_eq!(dark.bg, light.fg);
        assert_eq!(dark.accent, light.accent);
    }
}
