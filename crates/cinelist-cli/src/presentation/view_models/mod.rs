pub mod common;
pub mod config;
pub mod detail;
pub mod dialog;
pub mod home;
pub mod movie;
pub mod result;
pub mod screen;
pub mod status_bar;

pub use common::{CreateView, DisplayOptions, Guidance, StatusBadge, StatusLevel};
pub use config::ConfigViewModel;
pub use detail::DetailPageViewModel;
pub use dialog::{AddMovieDialogViewModel, FormField};
pub use home::{HomePageViewModel, RatingOptionViewModel};
pub use movie::MovieCardViewModel;
pub use result::CommandResultViewModel;
pub use screen::{PageViewModel, ScreenViewModel};
pub use status_bar::{KeyHint, StatusBarViewModel};
