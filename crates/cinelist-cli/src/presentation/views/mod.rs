//! Views
//!
//! Console views implement `fmt::Display` over a borrowed ViewModel and are
//! reached through `CreateView`. TUI views live under `tui/`.

mod config;
mod detail;
mod home;
mod screen;
pub mod tui;

pub use detail::DetailView;
pub use home::HomeView;
