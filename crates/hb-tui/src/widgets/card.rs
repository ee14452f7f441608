//! Card face widget
//!
//! Draws one hydrated card: bordered box, the back-face value and
//! color labels when present, a dim placeholder otherwise. Selection
//! and keyboard cursor show on the border.

use hb_core::{hydrate, markup, NodeId, Page};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders};

/// Cell width of one card, borders included.
pub const CARD_WIDTH: u16 = 9;
/// Cell height of one card, borders included.
pub const CARD_HEIGHT: u16 = 5;

pub struct CardWidget<'a> {
    page: &'a Page,
    card: NodeId,
    theme: &'a crate::theme::Theme,
    cursor: bool,
}

impl<'a> CardWidget<'a> {
    pub fn new(page: &'a Page, card: NodeId, theme: &'a crate::theme::Theme) -> Self {
        Self {
            page,
            card,
            theme,
            cursor: false,
        }
    }

    /// Mark this card as the keyboard cursor position.
    pub fn cursor(mut self, cursor: bool) -> Self {
        self.cursor = cursor;
        self
    }
}

impl Widget for CardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height < 3 {
            return;
        }

        let selected = self.page.has_class(self.card, markup::CLASS_SELECTED);
        let (border_style, border_type) = if self.cursor {
            (Style::default().fg(self.theme.cursor), BorderType::Thick)
        } else if selected {
            (Style::default().fg(self.theme.selected), BorderType::Double)
        } else {
            (Style::default().fg(self.theme.border), BorderType::Rounded)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        if self.page.has_class(self.card, markup::CLASS_CARD_BACK) {
            let color = hydrate::back_color(self.page, self.card);
            let ink = color.map_or(self.theme.text, |c| self.theme.card_color(c));
            if let Some(value) = hydrate::back_value_text(self.page, self.card) {
                set_centered(
                    buf,
                    inner,
                    inner.height / 2,
                    value,
                    Style::default().fg(ink).bold(),
                );
            }
            if let Some(color) = color {
                set_centered(
                    buf,
                    inner,
                    inner.height - 1,
                    color.name(),
                    Style::default().fg(ink),
                );
            }
        } else {
            set_centered(
                buf,
                inner,
                inner.height / 2,
                "?",
                Style::default().fg(self.theme.blank_card),
            );
        }
    }
}

fn set_centered(buf: &mut Buffer, inner: Rect, row: u16, text: &str, style: Style) {
    let width = text.chars().count() as u16;
    let x = inner.x + inner.width.saturating_sub(width) / 2;
    let y = inner.y + row.min(inner.height.saturating_sub(1));
    buf.set_stringn(x, y, text, inner.width as usize, style);
}
