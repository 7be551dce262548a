use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::HomePageViewModel;

/// Page header: title search box, minimum rating and the result counter
pub struct FilterBarView<'a> {
    model: &'a HomePageViewModel,
    editing: bool,
}

impl<'a> FilterBarView<'a> {
    pub fn new(model: &'a HomePageViewModel, editing: bool) -> Self {
        Self { model, editing }
    }
}

impl<'a> Widget for FilterBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                " My Movie Collection ",
                Style::default().add_modifier(Modifier::BOLD),
            ));

        let search_style = if self.editing {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let search = if self.editing {
            format!("{}▏", self.model.title_query)
        } else if self.model.title_query.is_empty() {
            "Search movies...".to_string()
        } else {
            self.model.title_query.clone()
        };

        let rating = self
            .model
            .rating_options
            .iter()
            .find(|option| option.selected)
            .map(|option| option.label.clone())
            .unwrap_or_default();

        let line = Line::from(vec![
            Span::styled(search, search_style),
            Span::raw("  │  "),
            Span::styled(rating, Style::default().fg(Color::Yellow)),
            Span::raw("  │  "),
            Span::styled(
                format!(
                    "Showing {} of {} movies",
                    self.model.showing, self.model.total
                ),
                Style::default().fg(Color::DarkGray),
            ),
        ]);

        Paragraph::new(line).block(block).render(area, buf);
    }
}
