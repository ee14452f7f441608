//! Application state and main UI controller
//!
//! `App` owns the hydrated page and replays terminal input as the
//! page interactions: pointer motion and clicks over the rendered
//! card boxes, or the keyboard cursor for mouse-less terminals.

use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use hb_core::{interact, markup, table, NodeId, Page};

use crate::input::key_to_command;
use crate::theme::Theme;
use crate::widgets::card::{CARD_HEIGHT, CARD_WIDTH};
use crate::widgets::{CardWidget, CircleRowWidget};

/// What the table view can be asked to do from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    NextCard,
    PrevCard,
    Reveal,
    Conceal,
}

/// Application state
pub struct App {
    /// The hydrated page; visibility and selection live in its classes
    page: Page,

    /// Color theme (adapts to light/dark terminal background)
    theme: Theme,

    /// All cards in document order
    cards: Vec<NodeId>,

    /// Hand containers in document order
    hands: Vec<NodeId>,

    hint_group: Option<NodeId>,
    failure_group: Option<NodeId>,

    /// Keyboard cursor into `cards`
    cursor: usize,

    /// Card currently under the pointer
    hovered: Option<NodeId>,

    /// Pointer is over the turn popup
    overlay_hot: bool,

    should_quit: bool,

    /// Hit boxes from the last frame, for mouse dispatch
    card_areas: Vec<(Rect, NodeId)>,
    overlay_area: Option<(Rect, NodeId)>,
}

impl App {
    /// Wrap an already-hydrated page.
    pub fn new(page: Page, theme: Theme) -> Self {
        let cards = page.ids_with_class(markup::CLASS_CARD);
        let hands = page.ids_with_class(table::CLASS_HAND);
        let hint_group = page.ids_with_class(table::CLASS_HINTS).first().copied();
        let failure_group = page.ids_with_class(table::CLASS_FAILURES).first().copied();
        Self {
            page,
            theme,
            cards,
            hands,
            hint_group,
            failure_group,
            cursor: 0,
            hovered: None,
            overlay_hot: false,
            should_quit: false,
            card_areas: Vec::new(),
            overlay_area: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(command) = key_to_command(key) {
                    self.execute(command);
                }
            }
            Event::Mouse(mouse) => self.on_mouse(mouse),
            _ => {}
        }
    }

    pub fn execute(&mut self, command: Command) {
        match command {
            Command::Quit => self.should_quit = true,
            Command::NextCard => {
                if !self.cards.is_empty() {
                    self.cursor = (self.cursor + 1) % self.cards.len();
                }
            }
            Command::PrevCard => {
                if !self.cards.is_empty() {
                    self.cursor = (self.cursor + self.cards.len() - 1) % self.cards.len();
                }
            }
            Command::Reveal => {
                if let Some(&card) = self.cards.get(self.cursor) {
                    interact::reveal_card(&mut self.page, card);
                }
            }
            Command::Conceal => {
                if let Some(&card) = self.cards.get(self.cursor) {
                    interact::conceal_card(&mut self.page, card);
                }
            }
        }
    }

    fn on_mouse(&mut self, mouse: MouseEvent) {
        let pos = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(card) = self.card_at(pos) {
                    self.set_cursor(card);
                    self.hovered = Some(card);
                    interact::reveal_card(&mut self.page, card);
                }
            }
            MouseEventKind::Moved => self.on_pointer_moved(pos),
            _ => {}
        }
    }

    fn on_pointer_moved(&mut self, pos: Position) {
        // The popup draws on top; while the pointer is on it, the card
        // that revealed it still counts as hovered.
        if let Some((area, overlay)) = self.overlay_area {
            if area.contains(pos) && self.page.is_visible(overlay) {
                if !self.overlay_hot {
                    self.overlay_hot = true;
                    interact::enter_overlay(&mut self.page, overlay);
                }
                return;
            }
        }
        if self.overlay_hot {
            self.overlay_hot = false;
            interact::leave_overlay(&mut self.page);
        }

        match self.card_at(pos) {
            Some(card) => {
                if self.hovered != Some(card) {
                    self.hovered = Some(card);
                    self.set_cursor(card);
                    interact::reveal_card(&mut self.page, card);
                }
            }
            None => {
                if let Some(card) = self.hovered.take() {
                    interact::conceal_card(&mut self.page, card);
                }
            }
        }
    }

    fn card_at(&self, pos: Position) -> Option<NodeId> {
        self.card_areas
            .iter()
            .find(|(area, _)| area.contains(pos))
            .map(|&(_, card)| card)
    }

    fn set_cursor(&mut self, card: NodeId) {
        if let Some(index) = self.cards.iter().position(|&c| c == card) {
            self.cursor = index;
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let mut card_areas = Vec::new();
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // title
                Constraint::Length(1), // hint tokens
                Constraint::Length(1), // failure tokens
                Constraint::Length(1),
                Constraint::Min(0),    // hands
                Constraint::Length(1), // footer
            ])
            .split(area);

        let title = Line::from(vec![
            Span::styled("Hanab", Style::default().fg(self.theme.border_accent).bold()),
            Span::styled(" · table", Style::default().fg(self.theme.text_dim)),
        ]);
        frame.render_widget(Paragraph::new(title), chunks[0]);

        if let Some(group) = self.hint_group {
            frame.render_widget(
                CircleRowWidget::new(&self.page, group, &self.theme).label("Hints"),
                chunks[1],
            );
        }
        if let Some(group) = self.failure_group {
            frame.render_widget(
                CircleRowWidget::new(&self.page, group, &self.theme).label("Failures"),
                chunks[2],
            );
        }

        let hands_area = chunks[4];
        let mut y = hands_area.y;
        for &hand in &self.hands {
            if y + 1 + CARD_HEIGHT > hands_area.bottom() {
                break;
            }

            let player = self.page.node(hand).get_attr(table::ATTR_PLAYER).unwrap_or("");
            frame.render_widget(
                Paragraph::new(Span::styled(
                    player.to_string(),
                    Style::default().fg(self.theme.text_dim),
                )),
                Rect::new(hands_area.x, y, hands_area.width, 1),
            );
            y += 1;

            let row = Rect::new(hands_area.x, y, hands_area.width, CARD_HEIGHT);
            let mut x = row.x;
            let hand_cards: Vec<NodeId> = self
                .page
                .children(hand)
                .iter()
                .copied()
                .filter(|&child| self.page.has_class(child, markup::CLASS_CARD))
                .collect();
            for card in hand_cards {
                let slot = Rect::new(x, row.y, CARD_WIDTH, CARD_HEIGHT).intersection(row);
                if slot.width < 3 || slot.height < 3 {
                    break;
                }
                let at_cursor = self.cards.get(self.cursor) == Some(&card);
                frame.render_widget(
                    CardWidget::new(&self.page, card, &self.theme).cursor(at_cursor),
                    slot,
                );
                card_areas.push((slot, card));
                x += CARD_WIDTH + 1;
            }
            y += CARD_HEIGHT + 1;
        }

        frame.render_widget(
            Paragraph::new(Span::styled(
                "←/→ select · Enter reveal · hover with the mouse · q quits",
                Style::default().fg(self.theme.text_dim),
            )),
            chunks[5],
        );

        // Turn popup, over everything else.
        self.overlay_area = None;
        if let Some(overlay) = interact::visible_overlay(&self.page) {
            let note = self.page.node(overlay).get_text().unwrap_or("").to_string();
            let popup = popup_rect(area);
            if popup.height >= 3 && popup.width >= 4 {
                frame.render_widget(Clear, popup);
                frame.render_widget(
                    Paragraph::new(note)
                        .style(Style::default().fg(self.theme.text))
                        .wrap(Wrap { trim: true })
                        .block(
                            Block::default()
                                .title(" Turn ")
                                .borders(Borders::ALL)
                                .border_style(Style::default().fg(self.theme.border_accent)),
                        ),
                    popup,
                );
                self.overlay_area = Some((popup, overlay));
            }
        }

        self.card_areas = card_areas;
    }
}

/// Bottom-anchored strip for the turn popup, just above the footer.
fn popup_rect(area: Rect) -> Rect {
    let width = area.width.saturating_sub(4).min(44);
    let height = 3u16.min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = (area.y + area.height.saturating_sub(height + 1)).max(area.y);
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use hb_core::hydrate::hydrate;
    use hb_core::table::TableSpec;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn demo_app() -> App {
        use hb_core::table::{Hand, TableCard, TurnNote};
        use hb_core::CircleGroup;

        let hand = |player: &str, first_turn: u32| Hand {
            player: player.to_string(),
            cards: vec![
                TableCard {
                    value: 3,
                    color: 1,
                    turn: Some(TurnNote {
                        id: first_turn,
                        note: format!("Turn {first_turn}: {player} was told: blue"),
                    }),
                },
                TableCard { value: -1, color: -1, turn: None },
                TableCard {
                    value: 5,
                    color: -1,
                    turn: Some(TurnNote {
                        id: first_turn + 1,
                        note: format!("Turn {}: {player} was told: 5", first_turn + 1),
                    }),
                },
            ],
        };
        let spec = TableSpec {
            hints: CircleGroup::new(6, 10),
            failures: CircleGroup::new(1, 3),
            hands: vec![hand("Ada", 1), hand("Ben", 3)],
        };

        let mut page = spec.to_page();
        hydrate(&mut page).unwrap();
        App::new(page, Theme::dark())
    }

    fn draw(app: &mut App) {
        let backend = TestBackend::new(80, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
    }

    #[test]
    fn test_quit_command() {
        let mut app = demo_app();
        assert!(!app.should_quit());
        app.execute(Command::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn test_cursor_wraps_around() {
        let mut app = demo_app();
        let count = app.cards.len();
        assert!(count > 0);

        app.execute(Command::PrevCard);
        assert_eq!(app.cursor, count - 1);
        app.execute(Command::NextCard);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_reveal_then_conceal_from_keyboard() {
        let mut app = demo_app();

        // Cursor starts on Ada's first card, which has a turn overlay.
        app.execute(Command::Reveal);
        assert!(interact::visible_overlay(app.page()).is_some());
        app.execute(Command::Conceal);
        assert!(interact::visible_overlay(app.page()).is_none());
    }

    #[test]
    fn test_mouse_hover_reveals_and_leaving_conceals() {
        let mut app = demo_app();
        draw(&mut app);
        assert!(!app.card_areas.is_empty());

        let (slot, card) = app.card_areas[0];
        app.handle_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: slot.x + 1,
            row: slot.y + 1,
            modifiers: KeyModifiers::NONE,
        }));
        assert_eq!(app.hovered, Some(card));
        if let Some(overlay) = interact::visible_overlay(app.page()) {
            assert_eq!(app.page().parent(overlay), Some(card));
        }

        // Off the table: nothing hovered, nothing visible.
        app.handle_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }));
        assert_eq!(app.hovered, None);
        assert!(interact::visible_overlay(app.page()).is_none());
    }

    #[test]
    fn test_click_moves_cursor_to_clicked_card() {
        let mut app = demo_app();
        draw(&mut app);

        let (slot, card) = *app.card_areas.last().unwrap();
        app.handle_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: slot.x + 1,
            row: slot.y + 1,
            modifiers: KeyModifiers::NONE,
        }));
        assert_eq!(app.cards[app.cursor], card);
    }
}
