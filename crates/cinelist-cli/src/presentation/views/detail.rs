use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::formatters::{rating_label, stars};
use crate::presentation::view_models::{CreateView, DetailPageViewModel, DisplayOptions};

impl CreateView for DetailPageViewModel {
    fn create_view<'a>(&'a self, options: &'a DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(DetailView::new(self, options))
    }
}

pub struct DetailView<'a> {
    data: &'a DetailPageViewModel,
    options: &'a DisplayOptions,
}

impl<'a> DetailView<'a> {
    pub fn new(data: &'a DetailPageViewModel, options: &'a DisplayOptions) -> Self {
        Self { data, options }
    }
}

impl<'a> fmt::Display for DetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(movie) = &self.data.movie else {
            return match self.data.movie_id {
                Some(id) => writeln!(f, "No movie with id {} exists in the catalog.", id),
                None => writeln!(f, "No movie was selected."),
            };
        };

        let rating = format!("{} {}", stars(movie.rating), rating_label(movie.rating));
        if self.options.enable_color {
            writeln!(f, "{}", movie.title.bold())?;
            writeln!(f, "Rating:  {}", rating.yellow())?;
        } else {
            writeln!(f, "{}", movie.title)?;
            writeln!(f, "Rating:  {}", rating)?;
        }

        if movie.has_poster {
            writeln!(f, "Poster:  {}", movie.poster_url)?;
        } else {
            writeln!(f, "Poster:  {} (placeholder)", movie.poster_url)?;
        }
        if let Some(trailer) = &movie.trailer_url {
            writeln!(f, "Trailer: {}", trailer)?;
        }

        writeln!(f)?;
        writeln!(f, "{}", movie.description)
    }
}
