//! End-to-end flow over a full table: build markup, hydrate once,
//! then drive the interaction model the way the UI does.

use hb_core::{hydrate, interact, markup, table::TableSpec};

#[test]
fn test_full_table_reveal_cycle_keeps_one_overlay_visible() {
    let mut page = TableSpec::demo(Some(42), 4, 5, 1).to_page();
    hydrate::hydrate(&mut page).unwrap();

    let cards = page.ids_with_class(markup::CLASS_CARD);
    assert!(!cards.is_empty());

    // Hover every card in turn, as a pointer sweeping the table would.
    for &card in &cards {
        interact::reveal_card(&mut page, card);

        let visible: Vec<_> = page
            .ids_with_class(markup::CLASS_TURN)
            .into_iter()
            .filter(|&o| page.is_visible(o))
            .collect();
        assert!(visible.len() <= 1, "more than one overlay visible");
        for &overlay in &visible {
            assert_eq!(page.parent(overlay), Some(card));
        }
    }

    // Leaving the last card hides everything again.
    if let Some(&last) = cards.last() {
        interact::conceal_card(&mut page, last);
    }
    assert_eq!(interact::visible_overlay(&page), None);
}

#[test]
fn test_hint_overlay_selects_every_card_the_hint_touched() {
    use hb_core::table::{Hand, TableCard, TurnNote};
    use hb_core::CircleGroup;

    // A blue hint to Ada touched her first and third card.
    let hint = TurnNote {
        id: 9,
        note: "Turn 9: Ada was told: blue".to_string(),
    };
    let spec = TableSpec {
        hints: CircleGroup::new(4, 10),
        failures: CircleGroup::new(0, 3),
        hands: vec![Hand {
            player: "Ada".to_string(),
            cards: vec![
                TableCard { value: -1, color: 1, turn: Some(hint.clone()) },
                TableCard { value: -1, color: -1, turn: None },
                TableCard { value: 2, color: 1, turn: Some(hint) },
            ],
        }],
    };

    let mut page = spec.to_page();
    hydrate::hydrate(&mut page).unwrap();

    let cards = page.ids_with_class(markup::CLASS_CARD);
    let overlays = page.ids_with_class(markup::CLASS_TURN);
    assert_eq!(overlays.len(), 2);

    interact::enter_overlay(&mut page, overlays[0]);
    assert!(page.has_class(cards[0], markup::CLASS_SELECTED));
    assert!(!page.has_class(cards[1], markup::CLASS_SELECTED));
    assert!(page.has_class(cards[2], markup::CLASS_SELECTED));

    interact::leave_overlay(&mut page);
    assert!(
        cards
            .iter()
            .all(|&card| !page.has_class(card, markup::CLASS_SELECTED))
    );
}

#[test]
fn test_back_faces_route_through_the_color_lookup() {
    let mut page = TableSpec::demo(Some(7), 3, 8, 0).to_page();
    hydrate::hydrate(&mut page).unwrap();

    for card in page.ids_with_class(markup::CLASS_CARD) {
        if let Some(color) = hydrate::back_color(&page, card) {
            // The class suffix and the label text are the same name.
            assert!(page.has_class(card, &format!("card-color-{}", color.name())));
            let label = page
                .children(card)
                .iter()
                .find(|&&c| {
                    page.has_class(c, markup::CLASS_CARD_COLOR)
                        && page.has_class(c, markup::CLASS_CARD_TEXT)
                })
                .and_then(|&c| page.node(c).get_text());
            assert_eq!(label, Some(color.name()));
            assert!(page.has_class(card, markup::CLASS_CARD_BACK));
        }
    }
}
