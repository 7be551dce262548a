use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::view_models::{ConfigViewModel, CreateView, DisplayOptions};

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, options: &'a DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigView {
            data: self,
            options,
        })
    }
}

struct ConfigView<'a> {
    data: &'a ConfigViewModel,
    options: &'a DisplayOptions,
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.data.exists {
            ""
        } else {
            " (not created, using defaults)"
        };
        if self.options.enable_color {
            writeln!(f, "Config file: {}{}", self.data.path.cyan(), status)?;
        } else {
            writeln!(f, "Config file: {}{}", self.data.path, status)?;
        }
        writeln!(
            f,
            "  placeholder_poster_url = {}",
            self.data.placeholder_poster_url
        )?;
        match &self.data.seed_path {
            Some(path) => writeln!(f, "  seed_path              = {}", path),
            None => writeln!(f, "  seed_path              = (built-in catalog)"),
        }
    }
}
