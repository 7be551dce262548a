use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::presentation::formatters::{one_line, stars, truncate};
use crate::presentation::view_models::HomePageViewModel;

const DESCRIPTION_WIDTH: usize = 90;

pub struct MovieListView<'a> {
    model: &'a HomePageViewModel,
}

impl<'a> MovieListView<'a> {
    pub fn new(model: &'a HomePageViewModel) -> Self {
        Self { model }
    }

    fn block() -> Block<'static> {
        Block::default().borders(Borders::ALL).title(" Movies ")
    }

    /// Stateful list; the component supplies the `ListState`
    pub fn build_list(&self) -> List<'a> {
        let items: Vec<ListItem> = self
            .model
            .movies
            .iter()
            .map(|movie| {
                let header = Line::from(vec![
                    Span::styled(
                        format!("#{:<3} ", movie.id),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        movie.title.as_str(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(stars(movie.rating), Style::default().fg(Color::Yellow)),
                ]);
                let description = Line::from(Span::styled(
                    format!(
                        "     {}",
                        truncate(&one_line(&movie.description), DESCRIPTION_WIDTH)
                    ),
                    Style::default().fg(Color::Gray),
                ));
                ListItem::new(vec![header, description])
            })
            .collect();

        List::new(items)
            .block(Self::block())
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("▶ ")
    }

    pub fn build_empty(&self) -> Paragraph<'static> {
        Paragraph::new(vec![
            Line::raw(""),
            Line::styled(
                "No movies found matching your criteria",
                Style::default().fg(Color::Yellow),
            ),
            Line::styled(
                "Press c to clear the filters",
                Style::default().fg(Color::DarkGray),
            ),
        ])
        .alignment(Alignment::Center)
        .block(Self::block())
    }
}
