//! TUI Components
//!
//! Components pair private UI state with the input handling and rendering
//! for one page (or the add-movie dialog). They never mutate the catalog;
//! when a key means something to the application they return an action
//! carrying an [`Intent`](cinelist_runtime::Intent).
//!
//! ## Pattern:
//! ```rust,ignore
//! impl FooComponent {
//!     pub fn handle_input(&mut self, key: KeyEvent, data: &FooViewModel) -> Option<FooAction>;
//!     pub fn render(&mut self, f: &mut Frame, area: Rect, data: &FooViewModel);
//! }
//! ```

pub mod add_dialog;
pub mod detail;
pub mod home;

pub use add_dialog::{AddDialogComponent, DialogAction};
pub use detail::{DetailAction, DetailComponent};
pub use home::{HomeAction, HomeComponent};
