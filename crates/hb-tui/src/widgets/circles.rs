//! Token row widget: a labelled line of on/off indicator dots

use hb_core::{hydrate, NodeId, Page};
use ratatui::prelude::*;

/// Renders a hydrated circle group as `Label  ● ● ● ○ ○`.
pub struct CircleRowWidget<'a> {
    page: &'a Page,
    group: NodeId,
    label: &'a str,
    theme: &'a crate::theme::Theme,
}

impl<'a> CircleRowWidget<'a> {
    pub fn new(page: &'a Page, group: NodeId, theme: &'a crate::theme::Theme) -> Self {
        Self {
            page,
            group,
            label: "",
            theme,
        }
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = label;
        self
    }
}

impl Widget for CircleRowWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let mut spans = vec![Span::styled(
            format!("{:<10}", self.label),
            Style::default().fg(self.theme.text_dim),
        )];
        for lit in hydrate::indicator_states(self.page, self.group) {
            let (dot, color) = if lit {
                ("● ", self.theme.indicator_on)
            } else {
                ("○ ", self.theme.indicator_off)
            };
            spans.push(Span::styled(dot, Style::default().fg(color)));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
