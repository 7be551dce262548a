// NOTE: cinelist Architecture Rationale
//
// Why a single state owner (Catalog)?
// - Store, router and filter criteria change together in response to one key press
// - Views only read view models and hand back intents; nothing else mutates state
// - Trade-off: every intent goes through one match, but there are only a handful
//
// Why no background thread for the TUI?
// - Every change is caused by a user action; there is nothing to poll or stream
// - The loop blocks on the next key event, applies it, redraws
//
// Why read-only seed files (not persistence)?
// - Lets a user start from their own list without the app ever writing it back
// - Added movies live until the process exits

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
pub use handlers::tui::TuiApp;
