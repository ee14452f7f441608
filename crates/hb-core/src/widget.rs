//! Typed widget descriptors read from element attributes
//!
//! Descriptors are transient: they are parsed once per element during
//! hydration, drive the decoration of that element, and are then
//! dropped. The page tree itself stays the only state.

use serde::{Deserialize, Serialize};

use crate::color::CardColor;
use crate::error::WidgetError;
use crate::markup;
use crate::page::Node;

/// A row of indicator dots, `lit` of `total` switched on.
///
/// Used for the hint and failure token rows on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircleGroup {
    pub lit: u32,
    pub total: u32,
}

impl CircleGroup {
    pub fn new(lit: u32, total: u32) -> Self {
        Self { lit, total }
    }

    /// Read the counts off a `circle-group` element. A missing or
    /// non-numeric count reads as 0; `lit > total` is not rejected.
    pub fn from_node(node: &Node) -> Self {
        Self {
            lit: parse_count(node.get_attr(markup::ATTR_ON)),
            total: parse_count(node.get_attr(markup::ATTR_TOTAL)),
        }
    }

    /// On/off state of each dot, in order: the first `lit` dots are on.
    pub fn indicators(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.total).map(|dot| dot < self.lit)
    }
}

fn parse_count(attr: Option<&str>) -> u32 {
    attr.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}

/// What a card reveals about itself: an optional value and an optional
/// color. Either field being present gives the card a back face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFace {
    pub value: Option<i32>,
    pub color: Option<CardColor>,
}

impl CardFace {
    /// Read the face off a `card` element. The `-1` sentinel (and any
    /// missing or non-numeric attribute) maps to `None`; a real color
    /// code outside the five colors is the one hard error.
    pub fn from_node(node: &Node) -> Result<Self, WidgetError> {
        let value = parse_info(node.get_attr(markup::ATTR_CARD_VALUE));
        let color = match parse_info(node.get_attr(markup::ATTR_CARD_COLOR)) {
            Some(code) => Some(CardColor::from_code(clamp_code(code))?),
            None => None,
        };
        Ok(Self { value, color })
    }

    /// True when the card shows anything, i.e. gets the `card-back`
    /// class and label children during hydration.
    pub fn has_back(&self) -> bool {
        self.value.is_some() || self.color.is_some()
    }
}

fn parse_info(attr: Option<&str>) -> Option<i32> {
    let parsed: i32 = attr?.trim().parse().ok()?;
    if parsed == markup::NO_INFO {
        None
    } else {
        Some(parsed)
    }
}

/// Narrow an attribute integer to the `i8` code domain without losing
/// its invalidity: anything outside `i8` stays out of 0-4.
fn clamp_code(code: i32) -> i8 {
    i8::try_from(code).unwrap_or(i8::MAX)
}
