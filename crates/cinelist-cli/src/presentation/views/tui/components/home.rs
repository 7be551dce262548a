//! Home Component
//!
//! Movie list selection plus the title search box.

use cinelist_runtime::{Intent, Route, RouteParams};
use cinelist_types::{MovieId, Rating};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    widgets::ListState,
};

use crate::presentation::view_models::HomePageViewModel;
use crate::presentation::views::tui::{FilterBarView, MovieListView};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeAction {
    Apply(Intent),
    OpenDialog,
    Quit,
}

pub struct HomeComponent {
    state: ListState,
    editing_title: bool,
}

impl HomeComponent {
    pub fn new() -> Self {
        Self {
            state: ListState::default(),
            editing_title: false,
        }
    }

    pub fn is_editing_title(&self) -> bool {
        self.editing_title
    }

    pub fn handle_input(&mut self, key: KeyEvent, data: &HomePageViewModel) -> Option<HomeAction> {
        if self.editing_title {
            return self.handle_title_input(key, data);
        }

        match key.code {
            KeyCode::Char('/') | KeyCode::Char('f') => {
                self.editing_title = true;
                None
            }
            KeyCode::Char('r') => Some(HomeAction::Apply(Intent::SetMinRating(
                step_min_rating(data, true),
            ))),
            KeyCode::Char('R') => Some(HomeAction::Apply(Intent::SetMinRating(
                step_min_rating(data, false),
            ))),
            KeyCode::Char('c') => Some(HomeAction::Apply(Intent::ClearFilters)),
            KeyCode::Char('a') => Some(HomeAction::OpenDialog),
            KeyCode::Char('q') => Some(HomeAction::Quit),
            KeyCode::Char('j') | KeyCode::Down => {
                self.next(data.movies.len());
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.previous();
                None
            }
            KeyCode::Home => {
                self.state.select(Some(0));
                None
            }
            KeyCode::End => {
                if !data.movies.is_empty() {
                    self.state.select(Some(data.movies.len() - 1));
                }
                None
            }
            KeyCode::Enter => {
                let index = self.state.selected().unwrap_or(0);
                let movie = data.movies.get(index)?;
                Some(HomeAction::Apply(Intent::Navigate {
                    route: Route::Detail,
                    params: RouteParams::movie(MovieId::new(movie.id)),
                }))
            }
            _ => None,
        }
    }

    fn handle_title_input(&mut self, key: KeyEvent, data: &HomePageViewModel) -> Option<HomeAction> {
        match key.code {
            KeyCode::Char(c) => {
                let mut query = data.title_query.clone();
                query.push(c);
                Some(HomeAction::Apply(Intent::SetTitleQuery(query)))
            }
            KeyCode::Backspace => {
                let mut query = data.title_query.clone();
                query.pop()?;
                Some(HomeAction::Apply(Intent::SetTitleQuery(query)))
            }
            KeyCode::Enter | KeyCode::Esc | KeyCode::Tab | KeyCode::Down => {
                self.editing_title = false;
                None
            }
            _ => None,
        }
    }

    /// Layout: [Filter bar | Movie list]
    pub fn render(&mut self, f: &mut Frame, area: Rect, data: &HomePageViewModel) {
        let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).split(area);

        f.render_widget(FilterBarView::new(data, self.editing_title), chunks[0]);

        // Index Safety: filtering can shrink the list under the selection
        if data.movies.is_empty() {
            self.state.select(None);
        } else {
            let selected = self.state.selected().unwrap_or(0);
            self.state.select(Some(selected.min(data.movies.len() - 1)));
        }

        let view = MovieListView::new(data);
        if data.no_results {
            f.render_widget(view.build_empty(), chunks[1]);
        } else {
            f.render_stateful_widget(view.build_list(), chunks[1], &mut self.state);
        }
    }

    fn next(&mut self, data_len: usize) {
        if data_len == 0 {
            return;
        }

        let next = match self.state.selected() {
            Some(i) => (i + 1).min(data_len - 1),
            None => 0,
        };
        self.state.select(Some(next));
    }

    fn previous(&mut self) {
        let prev = match self.state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.state.select(Some(prev));
    }
}

impl Default for HomeComponent {
    fn default() -> Self {
        Self::new()
    }
}

/// Next (or previous) entry of the rating select, wrapping around "All Ratings"
fn step_min_rating(data: &HomePageViewModel, forward: bool) -> Option<Rating> {
    let options = &data.rating_options;
    if options.is_empty() {
        return None;
    }

    let len = options.len();
    let current = options.iter().position(|o| o.selected).unwrap_or(0);
    let next = if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    };
    options[next].value.and_then(|value| Rating::new(value).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{MovieCardViewModel, RatingOptionViewModel};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn card(id: u64, title: &str) -> MovieCardViewModel {
        MovieCardViewModel {
            id,
            title: title.to_string(),
            description: String::new(),
            poster_url: String::new(),
            has_poster: false,
            rating: 3,
            trailer_url: None,
        }
    }

    fn home(title_query: &str, selected_rating: Option<u8>) -> HomePageViewModel {
        let mut rating_options = vec![RatingOptionViewModel {
            value: None,
            label: "All Ratings".to_string(),
            selected: selected_rating.is_none(),
        }];
        for value in 1..=5 {
            rating_options.push(RatingOptionViewModel {
                value: Some(value),
                label: format!("{}+ Stars", value),
                selected: selected_rating == Some(value),
            });
        }
        let movies = vec![card(1, "Alien"), card(2, "Aliens"), card(5, "Heat")];

        HomePageViewModel {
            title_query: title_query.to_string(),
            min_rating: selected_rating,
            rating_options,
            showing: movies.len(),
            total: movies.len(),
            no_results: false,
            movies,
        }
    }

    #[test]
    fn test_typing_extends_query() {
        let mut component = HomeComponent::new();
        let data = home("ali", None);

        assert_eq!(component.handle_input(key(KeyCode::Char('/')), &data), None);
        let action = component.handle_input(key(KeyCode::Char('e')), &data);

        assert_eq!(
            action,
            Some(HomeAction::Apply(Intent::SetTitleQuery("alie".to_string())))
        );
        assert!(component.is_editing_title());
    }

    #[test]
    fn test_backspace_on_empty_query_is_noop() {
        let mut component = HomeComponent::new();
        let data = home("", None);
        component.handle_input(key(KeyCode::Char('/')), &data);

        assert_eq!(component.handle_input(key(KeyCode::Backspace), &data), None);
    }

    #[test]
    fn test_rating_cycles_and_wraps() {
        let mut component = HomeComponent::new();

        let from_all = component.handle_input(key(KeyCode::Char('r')), &home("", None));
        let from_five = component.handle_input(key(KeyCode::Char('r')), &home("", Some(5)));
        let back_from_all = component.handle_input(key(KeyCode::Char('R')), &home("", None));

        assert_eq!(
            from_all,
            Some(HomeAction::Apply(Intent::SetMinRating(Rating::new(1).ok())))
        );
        assert_eq!(from_five, Some(HomeAction::Apply(Intent::SetMinRating(None))));
        assert_eq!(
            back_from_all,
            Some(HomeAction::Apply(Intent::SetMinRating(Rating::new(5).ok())))
        );
    }

    #[test]
    fn test_enter_opens_selected_movie() {
        let mut component = HomeComponent::new();
        let data = home("", None);

        component.handle_input(key(KeyCode::Down), &data);
        component.handle_input(key(KeyCode::Down), &data);
        component.handle_input(key(KeyCode::Down), &data);
        let action = component.handle_input(key(KeyCode::Enter), &data);

        assert_eq!(
            action,
            Some(HomeAction::Apply(Intent::Navigate {
                route: Route::Detail,
                params: RouteParams::movie(MovieId::new(5)),
            }))
        );
    }

    #[test]
    fn test_enter_on_empty_list_does_nothing() {
        let mut component = HomeComponent::new();
        let mut data = home("zzz", None);
        data.movies.clear();
        data.no_results = true;

        assert_eq!(component.handle_input(key(KeyCode::Enter), &data), None);
    }
}
