//! # Presentation Layer
//!
//! MVVM-style split between the catalog state and what ends up on screen.
//!
//! ## Data Flow
//!
//! ### For Console Output (JSON/Text):
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> [ serde_json ] --> Output
//!    (Controller)      (Converter)       (Data)          (Driver)  ==(Text)==> [ View ] --> Output
//! ```
//!
//! ### For the Interactive TUI:
//!
//! ```text
//! [ TuiApp ] --> [ Presenter ] --> [ ScreenViewModel ] --> [ TuiRenderer (Router) ]
//!     ^                                                             |
//!     |                                                             v
//!     +------------------- Intent ---------------------- [ Page Component ] <-- Key
//! ```
//!
//! The TUI loop is single-threaded: one key, at most one intent, one redraw.
//!
//! ## Rules
//!
//! 1. **ViewModels hold raw data.** `rating: u8`, not `"★★★☆☆"`. Stars are a
//!    view concern (`formatters::rating`).
//! 2. **Presenters decide content.** Placeholder posters, the "no results"
//!    flag, result counters and tips are computed here.
//! 3. **Components own UI state only.** Selection, focus and the add-movie
//!    form live in components; the movie list, filters and route live in
//!    the `Catalog`.
//! 4. **The renderer routes, it does not decide.** It picks the component
//!    for the active page and forwards keys; components emit intents.
//!
//! ## Directory Guide
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to the JSON output | `view_models/` |
//! | Change when a tip or badge shows | `presenters/` |
//! | Change console layout or colors | `views/` |
//! | Handle a key on a TUI page | `views/tui/components/` |
//! | Add a TUI page | `views/tui/components/` + `renderers/tui.rs` |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer, TuiRenderer};
pub use view_models::{
    CommandResultViewModel, CreateView, DisplayOptions, Guidance, StatusBadge, StatusLevel,
};
