use cinelist_runtime::Intent;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect};

use crate::presentation::view_models::DetailPageViewModel;
use crate::presentation::views::tui::DetailPageView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailAction {
    Apply(Intent),
    Quit,
}

pub struct DetailComponent {
    scroll: u16,
}

impl DetailComponent {
    pub fn new() -> Self {
        Self { scroll: 0 }
    }

    pub fn handle_input(
        &mut self,
        key: KeyEvent,
        data: &DetailPageViewModel,
    ) -> Option<DetailAction> {
        match key.code {
            KeyCode::Esc
            | KeyCode::Backspace
            | KeyCode::Left
            | KeyCode::Char('h')
            | KeyCode::Char('b') => self.go_home(),
            KeyCode::Enter if data.is_not_found() => self.go_home(),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            KeyCode::Char('q') => Some(DetailAction::Quit),
            _ => None,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, data: &DetailPageViewModel) {
        if data.is_not_found() {
            self.scroll = 0;
        }
        f.render_widget(DetailPageView::new(data, self.scroll), area);
    }

    fn go_home(&mut self) -> Option<DetailAction> {
        self.scroll = 0;
        Some(DetailAction::Apply(Intent::GoHome))
    }
}

impl Default for DetailComponent {
    fn default() -> Self {
        Self::new()
    }
}
