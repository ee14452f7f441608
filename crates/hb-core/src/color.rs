//! The five card colors and their integer wire codes

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::error::WidgetError;

/// One of the five Hanab card colors.
///
/// The markup carries colors as small integer codes (0-4); everything
/// user-visible (class suffixes, label text) goes through [`CardColor::name`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum CardColor {
    Green,
    Blue,
    White,
    Red,
    Yellow,
}

impl CardColor {
    /// Decode an integer color code from the markup.
    ///
    /// Codes outside 0-4 are invalid; the `-1` "no color" sentinel is
    /// handled by the caller before decoding.
    pub fn from_code(code: i8) -> Result<Self, WidgetError> {
        match code {
            0 => Ok(CardColor::Green),
            1 => Ok(CardColor::Blue),
            2 => Ok(CardColor::White),
            3 => Ok(CardColor::Red),
            4 => Ok(CardColor::Yellow),
            _ => Err(WidgetError::InvalidColor { code }),
        }
    }

    /// The integer code this color is written as in the markup.
    pub const fn code(&self) -> i8 {
        match self {
            CardColor::Green => 0,
            CardColor::Blue => 1,
            CardColor::White => 2,
            CardColor::Red => 3,
            CardColor::Yellow => 4,
        }
    }

    /// Lowercase color name, used both as a class suffix
    /// (`card-color-<name>`) and as the label text on a card back.
    pub const fn name(&self) -> &'static str {
        match self {
            CardColor::Green => "green",
            CardColor::Blue => "blue",
            CardColor::White => "white",
            CardColor::Red => "red",
            CardColor::Yellow => "yellow",
        }
    }

    /// Reverse of [`CardColor::name`], for reading a color back out of
    /// a `card-color-<name>` class.
    pub fn from_name(name: &str) -> Option<Self> {
        use strum::IntoEnumIterator;
        Self::iter().find(|color| color.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_from_code_known_colors() {
        assert_eq!(CardColor::from_code(0), Ok(CardColor::Green));
        assert_eq!(CardColor::from_code(1), Ok(CardColor::Blue));
        assert_eq!(CardColor::from_code(2), Ok(CardColor::White));
        assert_eq!(CardColor::from_code(3), Ok(CardColor::Red));
        assert_eq!(CardColor::from_code(4), Ok(CardColor::Yellow));
    }

    #[test]
    fn test_from_code_rejects_everything_else() {
        for code in [-128, -2, -1, 5, 6, 42, 127] {
            assert_eq!(
                CardColor::from_code(code),
                Err(WidgetError::InvalidColor { code })
            );
        }
    }

    #[test]
    fn test_code_round_trips() {
        for color in CardColor::iter() {
            assert_eq!(CardColor::from_code(color.code()), Ok(color));
        }
    }

    #[test]
    fn test_name_matches_display() {
        for color in CardColor::iter() {
            assert_eq!(color.to_string(), color.name());
        }
        assert_eq!(CardColor::White.name(), "white");
    }

    #[test]
    fn test_from_name() {
        assert_eq!(CardColor::from_name("yellow"), Some(CardColor::Yellow));
        assert_eq!(CardColor::from_name("mauve"), None);
    }

    #[test]
    fn test_invalid_color_message() {
        let err = CardColor::from_code(9).unwrap_err();
        assert_eq!(err.to_string(), "Invalid color: 9");
    }

    proptest! {
        /// Every `i8` either decodes to the color that encodes back to
        /// it, or is rejected as exactly that invalid code.
        #[test]
        fn test_from_code_partitions_the_i8_domain(code in any::<i8>()) {
            match CardColor::from_code(code) {
                Ok(color) => prop_assert_eq!(color.code(), code),
                Err(err) => {
                    prop_assert!(!(0..=4).contains(&code));
                    prop_assert_eq!(err, WidgetError::InvalidColor { code });
                }
            }
        }
    }
}
