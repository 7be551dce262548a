//! Presenters
//!
//! Pure functions that turn catalog state into ViewModels.

pub mod config;
pub mod detail;
pub mod dialog;
pub mod home;
pub mod movie;
pub mod screen;
pub mod status_bar;

pub use config::present_config;
pub use detail::{present_detail, present_detail_result};
pub use dialog::present_dialog;
pub use home::{present_home, present_home_result};
pub use movie::present_movie_card;
pub use screen::present_screen;
pub use status_bar::present_status_bar;
