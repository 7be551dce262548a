use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::presentation::formatters::stars;
use crate::presentation::view_models::{AddMovieDialogViewModel, FormField};

const DIALOG_HEIGHT: u16 = 15;

/// Modal add-movie form drawn over the current page
pub struct AddMovieDialogView<'a> {
    model: &'a AddMovieDialogViewModel,
}

impl<'a> AddMovieDialogView<'a> {
    pub fn new(model: &'a AddMovieDialogViewModel) -> Self {
        Self { model }
    }

    fn value(&self, field: FormField) -> String {
        match field {
            FormField::Title => self.model.title.clone(),
            FormField::Description => self.model.description.clone(),
            FormField::PosterUrl => self.model.poster_url.clone(),
            FormField::Rating => format!("◀ {} ▶", stars(self.model.rating)),
            FormField::TrailerUrl => self.model.trailer_url.clone(),
        }
    }

    fn field_line(&self, field: FormField) -> Line<'static> {
        let focused = self.model.focused == field;
        let marker = if focused { "▶ " } else { "  " };
        let label_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let cursor = if focused && field != FormField::Rating {
            "▏"
        } else {
            ""
        };

        Line::from(vec![
            Span::styled(format!("{}{:<15}", marker, field.label()), label_style),
            Span::raw(format!("{}{}", self.value(field), cursor)),
        ])
    }
}

fn centered(area: Rect, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [dialog] = Layout::horizontal([Constraint::Percentage(70)])
        .flex(Flex::Center)
        .areas(row);
    dialog
}

impl<'a> Widget for AddMovieDialogView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dialog = centered(area, DIALOG_HEIGHT);
        Clear.render(dialog, buf);

        let mut lines = Vec::with_capacity(FormField::ORDER.len() * 2 + 2);
        for field in FormField::ORDER {
            lines.push(self.field_line(field));
            lines.push(Line::raw(""));
        }
        if let Some(error) = &self.model.error {
            lines.push(Line::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            ));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Add New Movie ")
                    .title_bottom(" Enter: add movie  Esc: cancel "),
            )
            .render(dialog, buf);
    }
}
