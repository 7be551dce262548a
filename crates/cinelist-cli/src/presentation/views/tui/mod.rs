//! TUI View Components
//!
//! Ratatui widgets over borrowed ViewModels. Views map data to widgets and
//! nothing else; selection, focus and scroll come from the components.

pub mod add_dialog;
pub mod components;
pub mod detail;
pub mod filter_bar;
pub mod movie_list;
pub mod status_bar;

pub use add_dialog::AddMovieDialogView;
pub use detail::DetailPageView;
pub use filter_bar::FilterBarView;
pub use movie_list::MovieListView;
pub use status_bar::StatusBarView;

use crate::presentation::view_models::StatusLevel;
use ratatui::style::Color;

/// Convert StatusLevel to Ratatui Color
pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}
