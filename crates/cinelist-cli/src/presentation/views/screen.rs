use std::fmt;

use crate::presentation::view_models::{CreateView, DisplayOptions, PageViewModel, ScreenViewModel};

impl CreateView for ScreenViewModel {
    fn create_view<'a>(&'a self, options: &'a DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        match &self.page {
            PageViewModel::Home(home) => home.create_view(options),
            PageViewModel::Detail(detail) => detail.create_view(options),
            PageViewModel::Blank => Box::new(BlankView),
        }
    }
}

/// Unknown routes draw nothing
struct BlankView;

impl fmt::Display for BlankView {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}
