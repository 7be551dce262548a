use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::formatters::{rating_label, stars};
use crate::presentation::view_models::DetailPageViewModel;

pub struct DetailPageView<'a> {
    model: &'a DetailPageViewModel,
    scroll: u16,
}

impl<'a> DetailPageView<'a> {
    pub fn new(model: &'a DetailPageViewModel, scroll: u16) -> Self {
        Self { model, scroll }
    }

    fn not_found_lines() -> Vec<Line<'static>> {
        vec![
            Line::styled(
                "Movie not found",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
            Line::raw("The movie you're looking for doesn't exist."),
            Line::styled(
                "Press Esc to go back home",
                Style::default().fg(Color::DarkGray),
            ),
        ]
    }
}

impl<'a> Widget for DetailPageView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);

        let Some(movie) = &self.model.movie else {
            Paragraph::new(Self::not_found_lines())
                .block(block)
                .render(area, buf);
            return;
        };

        let label = Style::default().fg(Color::DarkGray);
        let poster = if movie.has_poster {
            movie.poster_url.clone()
        } else {
            format!("{} (placeholder)", movie.poster_url)
        };

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Rating   ", label),
                Span::styled(stars(movie.rating), Style::default().fg(Color::Yellow)),
                Span::raw(" "),
                Span::raw(rating_label(movie.rating)),
            ]),
            Line::from(vec![Span::styled("Poster   ", label), Span::raw(poster)]),
        ];
        if let Some(trailer) = &movie.trailer_url {
            lines.push(Line::from(vec![
                Span::styled("Trailer  ", label),
                Span::styled(trailer.as_str(), Style::default().fg(Color::Cyan)),
            ]));
        }
        lines.push(Line::raw(""));
        lines.extend(movie.description.lines().map(Line::raw));

        Paragraph::new(lines)
            .block(block.title(Span::styled(
                format!(" {} ", movie.title),
                Style::default().add_modifier(Modifier::BOLD),
            )))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}
