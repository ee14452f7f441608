//! Terminal color theme
//!
//! Adaptive palettes for dark and light terminal backgrounds.
//! Auto-detects via the COLORFGBG env var, or manual override with the
//! --light flag or HANAB_LIGHT_BG=1.

use hb_core::CardColor;
use ratatui::style::Color;

/// Color theme for the table view.
/// UI code uses theme colors instead of hardcoded Color:: values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Primary foreground text
    pub text: Color,
    /// Secondary/hint text (footers, player names)
    pub text_dim: Color,
    /// Default card border
    pub border: Color,
    /// Turn popup border
    pub border_accent: Color,
    /// Keyboard cursor border
    pub cursor: Color,
    /// Border of cards involved in the hovered turn
    pub selected: Color,
    /// Fill of a card that shows nothing yet
    pub blank_card: Color,
    /// A lit token dot
    pub indicator_on: Color,
    /// An unlit token dot
    pub indicator_off: Color,
}

impl Theme {
    /// Dark terminal background theme (default)
    pub fn dark() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::DarkGray,
            border: Color::Gray,
            border_accent: Color::Cyan,
            cursor: Color::Yellow,
            selected: Color::Green,
            blank_card: Color::DarkGray,
            indicator_on: Color::Cyan,
            indicator_off: Color::DarkGray,
        }
    }

    /// Light terminal background theme
    pub fn light() -> Self {
        Self {
            text: Color::Black,
            text_dim: Color::DarkGray,
            border: Color::DarkGray,
            border_accent: Color::Blue,
            cursor: Color::Yellow,
            selected: Color::Green,
            blank_card: Color::Gray,
            indicator_on: Color::Blue,
            indicator_off: Color::Gray,
        }
    }

    /// Auto-detect terminal background and return the matching theme.
    pub fn detect() -> Self {
        if Self::is_light_background() {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Map a card color to a terminal color. White cards need adjusting
    /// on light backgrounds, where white-on-white would vanish.
    pub fn card_color(&self, color: CardColor) -> Color {
        let is_light = self.text == Color::Black;
        match color {
            CardColor::Green => Color::Green,
            CardColor::Blue => Color::Blue,
            CardColor::White => {
                if is_light {
                    Color::DarkGray
                } else {
                    Color::White
                }
            }
            CardColor::Red => Color::Red,
            CardColor::Yellow => Color::Yellow,
        }
    }

    fn is_light_background() -> bool {
        // Explicit override first.
        if let Ok(val) = std::env::var("HANAB_LIGHT_BG") {
            return val == "1" || val.eq_ignore_ascii_case("true");
        }

        // COLORFGBG is "fg;bg" with 0-15 color indices; backgrounds of
        // 7 or 9-15 are light (8 is bright black).
        if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
            if let Some(bg) = colorfgbg.rsplit(';').next() {
                if let Ok(bg_idx) = bg.parse::<u8>() {
                    return matches!(bg_idx, 7 | 9..=15);
                }
            }
        }

        false
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_theme_text_is_white() {
        let theme = Theme::dark();
        assert_eq!(theme.text, Color::White);
    }

    #[test]
    fn test_light_theme_text_is_black() {
        let theme = Theme::light();
        assert_eq!(theme.text, Color::Black);
    }

    #[test]
    fn test_card_colors_dark_theme() {
        let theme = Theme::dark();
        assert_eq!(theme.card_color(CardColor::White), Color::White);
        assert_eq!(theme.card_color(CardColor::Red), Color::Red);
    }

    #[test]
    fn test_white_cards_stay_visible_on_light_theme() {
        let theme = Theme::light();
        assert_eq!(theme.card_color(CardColor::White), Color::DarkGray);
        // Saturated colors are identical on both themes.
        for color in [CardColor::Green, CardColor::Blue, CardColor::Red, CardColor::Yellow] {
            assert_eq!(theme.card_color(color), Theme::dark().card_color(color));
        }
    }
}
