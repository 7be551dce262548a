use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::StatusBarViewModel;

use super::status_level_to_color;

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(inner);

        let color = status_level_to_color(self.model.level);
        Paragraph::new(Span::styled(
            self.model.message.as_str(),
            Style::default().fg(color),
        ))
        .render(chunks[0], buf);

        let mut spans = Vec::with_capacity(self.model.hints.len() * 2);
        for hint in &self.model.hints {
            spans.push(Span::styled(
                format!("[{}]", hint.key),
                Style::default().fg(Color::Yellow),
            ));
            spans.push(Span::raw(format!("{} ", hint.action)));
        }
        Paragraph::new(Line::from(spans)).render(chunks[1], buf);
    }
}
