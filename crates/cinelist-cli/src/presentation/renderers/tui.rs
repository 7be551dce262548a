//! TUI Renderer (Router)
//!
//! Picks the component for the active page, forwards keys to it and
//! draws the frame. It owns UI state only (through its components); the
//! catalog is owned by the caller, which applies the returned intents.
//!
//! ## Design:
//! - Page components for Home and Detail, plus the add-movie dialog overlay
//! - An open dialog captures every key
//! - A blank page (unknown route) draws nothing

use cinelist_runtime::Intent;
use cinelist_types::MovieId;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use crate::presentation::presenters::present_status_bar;
use crate::presentation::view_models::{PageViewModel, ScreenViewModel, StatusBadge};
use crate::presentation::views::tui::StatusBarView;
use crate::presentation::views::tui::components::{
    AddDialogComponent, DetailAction, DetailComponent, DialogAction, HomeAction, HomeComponent,
};

pub struct TuiRenderer {
    home: HomeComponent,
    detail: DetailComponent,
    dialog: AddDialogComponent,

    /// One-shot status message, cleared by the next key
    notice: Option<StatusBadge>,

    should_quit: bool,
}

impl TuiRenderer {
    pub fn new() -> Self {
        Self {
            home: HomeComponent::new(),
            detail: DetailComponent::new(),
            dialog: AddDialogComponent::new(),
            notice: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog.is_open()
    }

    /// Route a key to the active page; returns the intent to apply, if any
    pub fn handle_key(&mut self, key: KeyEvent, screen: &ScreenViewModel) -> Option<Intent> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return None;
        }

        self.notice = None;

        if self.dialog.is_open() {
            return match self.dialog.handle_input(key)? {
                DialogAction::Submit(form) => Some(Intent::AddMovie(form)),
                DialogAction::Cancelled => None,
            };
        }

        match &screen.page {
            PageViewModel::Home(home) => match self.home.handle_input(key, home)? {
                HomeAction::Apply(intent) => Some(intent),
                HomeAction::OpenDialog => {
                    self.dialog.open();
                    None
                }
                HomeAction::Quit => {
                    self.should_quit = true;
                    None
                }
            },
            PageViewModel::Detail(detail) => match self.detail.handle_input(key, detail)? {
                DetailAction::Apply(intent) => Some(intent),
                DetailAction::Quit => {
                    self.should_quit = true;
                    None
                }
            },
            PageViewModel::Blank => match key.code {
                KeyCode::Esc => Some(Intent::GoHome),
                KeyCode::Char('q') => {
                    self.should_quit = true;
                    None
                }
                _ => None,
            },
        }
    }

    /// The submitted form became a record: close the dialog and say so
    pub fn movie_added(&mut self, title: &str, id: MovieId) {
        self.dialog.close();
        self.notice = Some(StatusBadge::success(format!(
            "Added \"{}\" as #{}",
            title, id
        )));
    }

    /// The submitted form was rejected: keep the dialog open with the reason
    pub fn dialog_rejected(&mut self, message: impl Into<String>) {
        self.dialog.reject(message);
    }

    /// Layout: [Page | Status Bar], dialog drawn on top
    pub fn render(&mut self, f: &mut Frame, screen: &ScreenViewModel) {
        let size = f.area();

        let chunks = Layout::vertical([Constraint::Min(5), Constraint::Length(3)]).split(size);
        match &screen.page {
            PageViewModel::Home(home) => self.home.render(f, chunks[0], home),
            PageViewModel::Detail(detail) => self.detail.render(f, chunks[0], detail),
            PageViewModel::Blank => return,
        }

        let status = present_status_bar(screen, self.notice.as_ref(), self.dialog.is_open());
        f.render_widget(StatusBarView::new(&status), chunks[1]);

        self.dialog.render(f, size);
    }
}

impl Default for TuiRenderer {
    fn default() -> Self {
        Self::new()
    }
}
