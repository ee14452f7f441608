//! Hanab table description and its markup
//!
//! A [`TableSpec`] is the server-side view of the table: token counts
//! and per-player hands, where each card carries only the info its
//! owner has been told (value and/or color, `-1` otherwise). It emits
//! the markup [`Page`] that hydration and interaction operate on.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strum::IntoEnumIterator;

use crate::color::CardColor;
use crate::markup;
use crate::page::{Node, Page};
use crate::widget::CircleGroup;

/// Hint tokens a game starts with.
pub const START_HINTS: u32 = 10;
/// Failures that end the game.
pub const MAX_FAILURES: u32 = 3;

/// Extra class on the hint-token circle group.
pub const CLASS_HINTS: &str = "hints";
/// Extra class on the failure-token circle group.
pub const CLASS_FAILURES: &str = "failures";
/// Container element for one player's cards.
pub const CLASS_HAND: &str = "hand";
/// Player name attribute on a hand container.
pub const ATTR_PLAYER: &str = "data-player";

/// The turn a card was last touched by, shown in its overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnNote {
    pub id: u32,
    pub note: String,
}

/// One card as the table shows it: known value, known color code
/// (`-1` sentinels for unknown), and the turn overlay if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCard {
    pub value: i32,
    pub color: i32,
    pub turn: Option<TurnNote>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    pub player: String,
    pub cards: Vec<TableCard>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    pub hints: CircleGroup,
    pub failures: CircleGroup,
    pub hands: Vec<Hand>,
}

impl TableSpec {
    /// Emit the un-hydrated markup for this table.
    pub fn to_page(&self) -> Page {
        let mut page = Page::new();

        for (group, class) in [(self.hints, CLASS_HINTS), (self.failures, CLASS_FAILURES)] {
            page.append(
                None,
                Node::new("div")
                    .class(markup::CLASS_CIRCLE_GROUP)
                    .class(class)
                    .attr(markup::ATTR_ON, group.lit.to_string())
                    .attr(markup::ATTR_TOTAL, group.total.to_string()),
            );
        }

        for hand in &self.hands {
            let hand_id = page.append(
                None,
                Node::new("div")
                    .class(CLASS_HAND)
                    .attr(ATTR_PLAYER, hand.player.as_str()),
            );
            for card in &hand.cards {
                let card_id = page.append(
                    Some(hand_id),
                    Node::new("div")
                        .class(markup::CLASS_CARD)
                        .attr(markup::ATTR_CARD_VALUE, card.value.to_string())
                        .attr(markup::ATTR_CARD_COLOR, card.color.to_string()),
                );
                if let Some(turn) = &card.turn {
                    page.append(
                        Some(card_id),
                        Node::new("div")
                            .class(markup::CLASS_TURN)
                            .class(format!("{}{}", markup::TURN_LINK_PREFIX, turn.id))
                            .text(turn.note.as_str()),
                    );
                }
            }
        }

        page
    }

    /// Deal a demo table: 2-5 players, one color hint and one value
    /// hint per hand. Cards touched by the same hint share a turn
    /// overlay, so hovering it lights up all of them.
    pub fn demo(seed: Option<u64>, players: u32, hints_lit: u32, failures_lit: u32) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        const NAMES: [&str; 5] = ["Ada", "Ben", "Cleo", "Dov", "Eve"];
        let players = (players as usize).clamp(2, NAMES.len());
        let cards_per_hand = if players <= 3 { 5 } else { 4 };
        let colors: Vec<CardColor> = CardColor::iter().collect();

        let mut turn = 1u32;
        let mut hands = Vec::new();
        for name in &NAMES[..players] {
            let hint_color = colors[rng.gen_range(0..colors.len())];
            let hint_value: i32 = rng.gen_range(1..=5);

            let color_turn = TurnNote {
                id: turn,
                note: format!("Turn {turn}: {name} was told: {}", hint_color.name()),
            };
            turn += 1;
            let value_turn = TurnNote {
                id: turn,
                note: format!("Turn {turn}: {name} was told: {hint_value}"),
            };
            turn += 1;

            let mut cards = Vec::new();
            for _ in 0..cards_per_hand {
                let known: u8 = rng.gen_range(0..5);
                cards.push(match known {
                    0 => TableCard {
                        value: hint_value,
                        color: hint_color.code() as i32,
                        turn: Some(color_turn.clone()),
                    },
                    1 => TableCard {
                        value: hint_value,
                        color: markup::NO_INFO,
                        turn: Some(value_turn.clone()),
                    },
                    2 => TableCard {
                        value: markup::NO_INFO,
                        color: hint_color.code() as i32,
                        turn: Some(color_turn.clone()),
                    },
                    _ => TableCard {
                        value: markup::NO_INFO,
                        color: markup::NO_INFO,
                        turn: None,
                    },
                });
            }
            hands.push(Hand {
                player: name.to_string(),
                cards,
            });
        }

        Self {
            hints: CircleGroup::new(hints_lit.min(START_HINTS), START_HINTS),
            failures: CircleGroup::new(failures_lit.min(MAX_FAILURES), MAX_FAILURES),
            hands,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hydrate::hydrate;

    #[test]
    fn test_demo_is_deterministic_with_seed() {
        let a = TableSpec::demo(Some(11), 4, 5, 1);
        let b = TableSpec::demo(Some(11), 4, 5, 1);
        assert_eq!(a, b);
    }

    #[test]
    fn test_demo_respects_token_limits() {
        let spec = TableSpec::demo(Some(1), 3, 99, 99);
        assert_eq!(spec.hints, CircleGroup::new(START_HINTS, START_HINTS));
        assert_eq!(spec.failures, CircleGroup::new(MAX_FAILURES, MAX_FAILURES));
        assert_eq!(spec.hands.len(), 3);
        assert!(spec.hands.iter().all(|h| h.cards.len() == 5));
    }

    #[test]
    fn test_to_page_emits_the_markup_contract() {
        let spec = TableSpec::demo(Some(5), 4, 6, 2);
        let page = spec.to_page();

        let groups = page.ids_with_class(markup::CLASS_CIRCLE_GROUP);
        assert_eq!(groups.len(), 2);
        assert_eq!(page.node(groups[0]).get_attr(markup::ATTR_ON), Some("6"));
        assert_eq!(page.node(groups[0]).get_attr(markup::ATTR_TOTAL), Some("10"));

        let cards = page.ids_with_class(markup::CLASS_CARD);
        let dealt: usize = spec.hands.iter().map(|h| h.cards.len()).sum();
        assert_eq!(cards.len(), dealt);

        let overlays = page.ids_with_class(markup::CLASS_TURN);
        let noted: usize = spec
            .hands
            .iter()
            .flat_map(|h| &h.cards)
            .filter(|c| c.turn.is_some())
            .count();
        assert_eq!(overlays.len(), noted);
    }

    #[test]
    fn test_demo_page_hydrates_cleanly() {
        let mut page = TableSpec::demo(Some(3), 5, 4, 0).to_page();
        hydrate(&mut page).unwrap();

        // Every overlay starts hidden, every dealt dot row is full.
        for overlay in page.ids_with_class(markup::CLASS_TURN) {
            assert!(!page.is_visible(overlay));
        }
        let hints = page.ids_with_class(CLASS_HINTS)[0];
        assert_eq!(page.children(hints).len(), START_HINTS as usize);
    }
}
