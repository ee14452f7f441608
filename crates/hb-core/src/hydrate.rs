//! The one-shot decoration pass over a freshly built page
//!
//! Mirrors what the page does on document-ready: populate every circle
//! group with its indicator dots, give every card with real info a back
//! face, and hide all turn overlays until interaction reveals them.

use crate::color::CardColor;
use crate::error::WidgetError;
use crate::markup;
use crate::page::{Node, NodeId, Page};
use crate::widget::{CardFace, CircleGroup};

/// Decorate the page in place.
///
/// Runs once per page; running it again appends a second set of
/// indicator dots and labels, so callers hydrate a page exactly once.
/// An invalid color code on any card aborts the pass with the error.
pub fn hydrate(page: &mut Page) -> Result<(), WidgetError> {
    for group in page.ids_with_class(markup::CLASS_CIRCLE_GROUP) {
        let counts = CircleGroup::from_node(page.node(group));
        for lit in counts.indicators() {
            let state = if lit {
                markup::CLASS_INDICATOR_ON
            } else {
                markup::CLASS_INDICATOR_OFF
            };
            page.append(
                Some(group),
                Node::new("span").class(markup::CLASS_INDICATOR).class(state),
            );
        }
    }

    for card in page.ids_with_class(markup::CLASS_CARD) {
        let face = CardFace::from_node(page.node(card))?;
        if !face.has_back() {
            continue;
        }

        page.add_class(card, markup::CLASS_CARD_BACK);

        if let Some(value) = face.value {
            page.append(
                Some(card),
                Node::new("span")
                    .class(markup::CLASS_CARD_VALUE)
                    .class(markup::CLASS_CARD_TEXT)
                    .text(value.to_string()),
            );
        }

        if let Some(color) = face.color {
            let color_class = format!("{}-{}", markup::CLASS_CARD_COLOR, color.name());
            page.add_class(card, &color_class);
            page.append(
                Some(card),
                Node::new("span")
                    .class(markup::CLASS_CARD_COLOR)
                    .class(markup::CLASS_CARD_TEXT)
                    .text(color.name()),
            );
        }
    }

    for overlay in page.ids_with_class(markup::CLASS_TURN) {
        page.hide(overlay);
    }

    Ok(())
}

/// Text of a hydrated card's value label, if it has one.
pub fn back_value_text(page: &Page, card: NodeId) -> Option<&str> {
    page.children(card)
        .iter()
        .find(|&&child| page.has_class(child, markup::CLASS_CARD_VALUE))
        .and_then(|&child| page.node(child).get_text())
}

/// Color a hydrated card shows, read back from its `card-color-<name>`
/// class.
pub fn back_color(page: &Page, card: NodeId) -> Option<CardColor> {
    let prefix = format!("{}-", markup::CLASS_CARD_COLOR);
    let class = page.node(card).class_with_prefix(&prefix)?;
    CardColor::from_name(&class[prefix.len()..])
}

/// On/off state of a hydrated circle group's dots, in document order.
pub fn indicator_states(page: &Page, group: NodeId) -> Vec<bool> {
    page.children(group)
        .iter()
        .filter(|&&dot| page.has_class(dot, markup::CLASS_INDICATOR))
        .map(|&dot| page.has_class(dot, markup::CLASS_INDICATOR_ON))
        .collect()
}
