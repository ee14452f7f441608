//! Hover and click behavior over the hydrated page
//!
//! All operations mutate only the page tree; there is no interaction
//! state held anywhere else. At most one card's turn overlay is
//! visible at any time.

use crate::markup;
use crate::page::{NodeId, Page};

/// A card was clicked or the pointer entered it: hide every turn
/// overlay on the page, then show the ones belonging to this card.
pub fn reveal_card(page: &mut Page, card: NodeId) {
    for overlay in page.ids_with_class(markup::CLASS_TURN) {
        page.hide(overlay);
    }
    for child in page.children(card).to_vec() {
        if page.has_class(child, markup::CLASS_TURN) {
            page.show(child);
        }
    }
}

/// The pointer left a card: hide its turn overlays again.
pub fn conceal_card(page: &mut Page, card: NodeId) {
    for child in page.children(card).to_vec() {
        if page.has_class(child, markup::CLASS_TURN) {
            page.hide(child);
        }
    }
}

/// The pointer entered a turn overlay: every overlay sharing its
/// `card-turn-<id>` link has its parent card marked selected. A hint
/// turn is linked from each card it touched, so all of them light up.
pub fn enter_overlay(page: &mut Page, overlay: NodeId) {
    let Some(link) = page
        .node(overlay)
        .class_with_prefix(markup::TURN_LINK_PREFIX)
        .map(str::to_string)
    else {
        return;
    };

    for linked in page.ids_with_class(&link) {
        if let Some(card) = page.parent(linked) {
            page.add_class(card, markup::CLASS_SELECTED);
        }
    }
}

/// The pointer left a turn overlay: clear selection from every card.
pub fn leave_overlay(page: &mut Page) {
    for card in page.ids_with_class(markup::CLASS_CARD) {
        page.remove_class(card, markup::CLASS_SELECTED);
    }
}

/// The turn overlay currently revealed, if any.
pub fn visible_overlay(page: &Page) -> Option<NodeId> {
    page.ids_with_class(markup::CLASS_TURN)
        .into_iter()
        .find(|&overlay| page.is_visible(overlay))
}
