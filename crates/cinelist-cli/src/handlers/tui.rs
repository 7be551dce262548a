use std::io;

use anyhow::Result;
use cinelist_runtime::{Catalog, Error as RuntimeError, IntentOutcome};
use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};

use super::navigation;
use crate::context::ExecutionContext;
use crate::presentation::TuiRenderer;
use crate::presentation::presenters::present_screen;
use crate::presentation::view_models::ScreenViewModel;

/// Interactive session: the catalog plus the page router drawing it
///
/// Terminal-independent so it can be driven key by key.
pub struct TuiApp {
    catalog: Catalog,
    renderer: TuiRenderer,
    placeholder_poster_url: String,
}

impl TuiApp {
    pub fn new(catalog: Catalog, placeholder_poster_url: impl Into<String>) -> Self {
        Self {
            catalog,
            renderer: TuiRenderer::new(),
            placeholder_poster_url: placeholder_poster_url.into(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn screen(&self) -> ScreenViewModel {
        present_screen(&self.catalog, &self.placeholder_poster_url)
    }

    pub fn should_quit(&self) -> bool {
        self.renderer.should_quit()
    }

    pub fn is_dialog_open(&self) -> bool {
        self.renderer.is_dialog_open()
    }

    /// Route one key and apply the resulting intent
    ///
    /// A rejected add keeps the dialog open; any other failure is returned.
    pub fn dispatch_key(&mut self, key: KeyEvent) -> Result<()> {
        let screen = self.screen();
        let Some(intent) = self.renderer.handle_key(key, &screen) else {
            return Ok(());
        };

        match self.catalog.apply(intent) {
            Ok(IntentOutcome::Applied) => {}
            Ok(IntentOutcome::Added(id)) => {
                let title = self
                    .catalog
                    .find(id)
                    .map(|movie| movie.title.clone())
                    .unwrap_or_default();
                tracing::info!(id = %id, "movie added");
                self.renderer.movie_added(&title, id);
            }
            Err(RuntimeError::Validation(err)) => self.renderer.dialog_rejected(err.to_string()),
            Err(err) => return Err(err.into()),
        }

        Ok(())
    }

    pub fn draw(&mut self, f: &mut Frame) {
        let screen = self.screen();
        self.renderer.render(f, &screen);
    }
}

pub fn handle(ctx: &ExecutionContext, route: &str, movie_id: Option<u64>) -> Result<()> {
    let mut catalog = ctx.catalog()?;
    catalog.apply(navigation(route, movie_id))?;

    let mut app = TuiApp::new(catalog, ctx.placeholder_poster_url());
    run(&mut app)
}

fn run(app: &mut TuiApp) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    ctrlc::set_handler(move || {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        std::process::exit(0);
    })?;

    let result = event_loop(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Draw, block for the next event, apply it; resize events just redraw
fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut TuiApp,
) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| app.draw(f))?;

        if let Event::Key(key) = event::read()? {
            app.dispatch_key(key)?;
        }
    }

    Ok(())
}
