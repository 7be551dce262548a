use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::formatters::{one_line, rating_label, stars, truncate};
use crate::presentation::view_models::{CreateView, DisplayOptions, HomePageViewModel};

const DESCRIPTION_WIDTH: usize = 100;

impl CreateView for HomePageViewModel {
    fn create_view<'a>(&'a self, options: &'a DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(HomeView::new(self, options))
    }
}

pub struct HomeView<'a> {
    data: &'a HomePageViewModel,
    options: &'a DisplayOptions,
}

impl<'a> HomeView<'a> {
    pub fn new(data: &'a HomePageViewModel, options: &'a DisplayOptions) -> Self {
        Self { data, options }
    }

    fn filter_summary(&self) -> String {
        let rating = self
            .data
            .rating_options
            .iter()
            .find(|option| option.selected)
            .map(|option| option.label.as_str())
            .unwrap_or("All Ratings");

        if self.data.title_query.is_empty() {
            format!("Filters: any title, {}", rating)
        } else {
            format!("Filters: title contains \"{}\", {}", self.data.title_query, rating)
        }
    }
}

impl<'a> fmt::Display for HomeView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color = self.options.enable_color;

        if color {
            writeln!(f, "{}", "My Movie Collection".bold())?;
        } else {
            writeln!(f, "My Movie Collection")?;
        }
        writeln!(f, "{}", self.filter_summary())?;
        writeln!(
            f,
            "Showing {} of {} movies",
            self.data.showing, self.data.total
        )?;
        writeln!(f)?;

        if self.data.no_results {
            writeln!(f, "No movies found matching your criteria")?;
            return Ok(());
        }

        for movie in &self.data.movies {
            let id = format!("#{}", movie.id);
            let rating = format!("{} {}", stars(movie.rating), rating_label(movie.rating));
            if color {
                writeln!(
                    f,
                    "{:<5} {}  {}",
                    id.bright_black(),
                    movie.title.bold(),
                    rating.yellow()
                )?;
            } else {
                writeln!(f, "{:<5} {}  {}", id, movie.title, rating)?;
            }
            writeln!(
                f,
                "      {}",
                truncate(&one_line(&movie.description), DESCRIPTION_WIDTH)
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{MovieCardViewModel, RatingOptionViewModel};

    fn home(movies: Vec<MovieCardViewModel>, total: usize) -> HomePageViewModel {
        HomePageViewModel {
            title_query: "god".to_string(),
            min_rating: Some(3),
            rating_options: vec![
                RatingOptionViewModel {
                    value: None,
                    label: "All Ratings".to_string(),
                    selected: false,
                },
                RatingOptionViewModel {
                    value: Some(3),
                    label: "3+ Stars".to_string(),
                    selected: true,
                },
            ],
            showing: movies.len(),
            total,
            no_results: movies.is_empty(),
            movies,
        }
    }

    #[test]
    fn test_plain_listing() {
        let vm = home(
            vec![MovieCardViewModel {
                id: 2,
                title: "The Godfather".to_string(),
                description: "A family saga.".to_string(),
                poster_url: "https://example.com/p.jpg".to_string(),
                has_poster: true,
                rating: 5,
                trailer_url: None,
            }],
            6,
        );
        let options = DisplayOptions::default();

        let output = vm.create_view(&options).to_string();

        insta::assert_snapshot!(output, @r#"
        My Movie Collection
        Filters: title contains "god", 3+ Stars
        Showing 1 of 6 movies

        #2    The Godfather  ★★★★★ 5/5
              A family saga.
        "#);
    }

    #[test]
    fn test_empty_state() {
        let vm = home(Vec::new(), 6);
        let options = DisplayOptions::default();

        let output = vm.create_view(&options).to_string();

        assert!(output.contains("Showing 0 of 6 movies"));
        assert!(output.ends_with("No movies found matching your criteria\n"));
    }
}
