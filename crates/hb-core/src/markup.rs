//! Names shared with the markup and the stylesheet
//!
//! The page contract is carried entirely by these class and `data-`
//! attribute names; nothing else links the widgets to their styling.

/// Container for a row of on/off indicator dots.
pub const CLASS_CIRCLE_GROUP: &str = "circle-group";
/// Every indicator dot.
pub const CLASS_INDICATOR: &str = "indicator-inner";
/// A lit indicator dot.
pub const CLASS_INDICATOR_ON: &str = "indicator-on";
/// An unlit indicator dot.
pub const CLASS_INDICATOR_OFF: &str = "indicator-off";

/// A card widget.
pub const CLASS_CARD: &str = "card";
/// Added to cards that show a back face (a real value and/or color).
pub const CLASS_CARD_BACK: &str = "card-back";
/// Label children on a card back.
pub const CLASS_CARD_TEXT: &str = "card-text";
/// The value label on a card back.
pub const CLASS_CARD_VALUE: &str = "card-value";
/// The color label on a card back; also the prefix of the
/// `card-color-<name>` class added to the card itself.
pub const CLASS_CARD_COLOR: &str = "card-color";
/// A card marked as involved in the hovered turn.
pub const CLASS_SELECTED: &str = "selected";

/// A turn overlay, hidden until its card is hovered or clicked.
pub const CLASS_TURN: &str = "card-turn";
/// Prefix of the `card-turn-<id>` class linking overlays to a turn.
pub const TURN_LINK_PREFIX: &str = "card-turn-";

/// Lit count on a circle group.
pub const ATTR_ON: &str = "data-on";
/// Total dot count on a circle group.
pub const ATTR_TOTAL: &str = "data-total";
/// Card value, or `-1` when the value is not shown.
pub const ATTR_CARD_VALUE: &str = "data-card-value";
/// Card color code, or `-1` when the color is not shown.
pub const ATTR_CARD_COLOR: &str = "data-card-color";

/// Sentinel meaning "this piece of card info is not shown".
pub const NO_INFO: i32 = -1;
