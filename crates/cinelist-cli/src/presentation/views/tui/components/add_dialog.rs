//! Add-Movie Dialog Component
//!
//! Owns the form while the dialog is open. A rejected submission keeps the
//! typed values so the user can correct them; cancelling discards them.

use cinelist_engine::MovieForm;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect};

use crate::presentation::presenters::present_dialog;
use crate::presentation::view_models::FormField;
use crate::presentation::views::tui::AddMovieDialogView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogAction {
    Submit(MovieForm),
    Cancelled,
}

pub struct AddDialogComponent {
    open: bool,
    form: MovieForm,
    focused: FormField,
    error: Option<String>,
}

impl AddDialogComponent {
    pub fn new() -> Self {
        Self {
            open: false,
            form: MovieForm::default(),
            focused: FormField::Title,
            error: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close and clear the form
    pub fn close(&mut self) {
        self.open = false;
        self.form.reset();
        self.focused = FormField::Title;
        self.error = None;
    }

    /// Keep the dialog open with its values and show why the add failed
    pub fn reject(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn form(&self) -> &MovieForm {
        &self.form
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<DialogAction> {
        match key.code {
            KeyCode::Esc => {
                self.close();
                Some(DialogAction::Cancelled)
            }
            KeyCode::Enter => Some(DialogAction::Submit(self.form.clone())),
            KeyCode::Tab | KeyCode::Down => {
                self.focused = self.focused.next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focused = self.focused.previous();
                None
            }
            KeyCode::Left if self.focused == FormField::Rating => {
                self.form.rating = self.form.rating.cycle_down();
                None
            }
            KeyCode::Right if self.focused == FormField::Rating => {
                self.form.rating = self.form.rating.cycle_up();
                None
            }
            KeyCode::Char(c) if self.focused == FormField::Rating => {
                if let Err(err) = self.form.set_rating_str(&c.to_string()) {
                    self.error = Some(err.to_string());
                }
                None
            }
            KeyCode::Char(c) => {
                self.text_field_mut()?.push(c);
                None
            }
            KeyCode::Backspace => {
                self.text_field_mut()?.pop();
                None
            }
            _ => None,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        if !self.open {
            return;
        }
        let model = present_dialog(&self.form, self.focused, self.error.as_deref());
        f.render_widget(AddMovieDialogView::new(&model), area);
    }

    fn text_field_mut(&mut self) -> Option<&mut String> {
        match self.focused {
            FormField::Title => Some(&mut self.form.title),
            FormField::Description => Some(&mut self.form.description),
            FormField::PosterUrl => Some(&mut self.form.poster_url),
            FormField::TrailerUrl => Some(&mut self.form.trailer_url),
            FormField::Rating => None,
        }
    }
}

impl Default for AddDialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(dialog: &mut AddDialogComponent, text: &str) {
        for c in text.chars() {
            dialog.handle_input(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_fields_follow_focus() {
        let mut dialog = AddDialogComponent::new();
        dialog.open();

        type_text(&mut dialog, "Heat");
        dialog.handle_input(key(KeyCode::Tab));
        type_text(&mut dialog, "Cops");
        dialog.handle_input(key(KeyCode::Tab));
        dialog.handle_input(key(KeyCode::Tab));
        dialog.handle_input(key(KeyCode::Right));
        dialog.handle_input(key(KeyCode::Right));

        let Some(DialogAction::Submit(form)) = dialog.handle_input(key(KeyCode::Enter)) else {
            panic!("expected submit");
        };
        assert_eq!(form.title, "Heat");
        assert_eq!(form.description, "Cops");
        assert_eq!(form.rating.value(), 3);
    }

    #[test]
    fn test_rating_digit_and_wrap() {
        let mut dialog = AddDialogComponent::new();
        dialog.open();
        for _ in 0..3 {
            dialog.handle_input(key(KeyCode::Tab));
        }

        dialog.handle_input(key(KeyCode::Char('5')));
        assert_eq!(dialog.form().rating.value(), 5);
        dialog.handle_input(key(KeyCode::Right));
        assert_eq!(dialog.form().rating.value(), 1);

        dialog.handle_input(key(KeyCode::Char('9')));
        assert_eq!(dialog.form().rating.value(), 1);
        assert!(dialog.error().is_some());
    }

    #[test]
    fn test_cancel_discards_input() {
        let mut dialog = AddDialogComponent::new();
        dialog.open();
        type_text(&mut dialog, "Half typed");

        assert_eq!(
            dialog.handle_input(key(KeyCode::Esc)),
            Some(DialogAction::Cancelled)
        );
        assert!(!dialog.is_open());
        assert_eq!(dialog.form(), &MovieForm::default());
    }

    #[test]
    fn test_reject_keeps_values() {
        let mut dialog = AddDialogComponent::new();
        dialog.open();
        dialog.handle_input(key(KeyCode::Tab));
        type_text(&mut dialog, "No title");

        dialog.reject("Movie title is required");

        assert!(dialog.is_open());
        assert_eq!(dialog.form().description, "No title");
        assert_eq!(dialog.error(), Some("Movie title is required"));
    }
}
