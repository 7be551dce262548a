use cinelist_runtime::Catalog;
use cinelist_types::Rating;

use super::movie::present_movie_card;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, HomePageViewModel, RatingOptionViewModel,
};

fn rating_options(selected: Option<Rating>) -> Vec<RatingOptionViewModel> {
    let all = RatingOptionViewModel {
        value: None,
        label: "All Ratings".to_string(),
        selected: selected.is_none(),
    };

    std::iter::once(all)
        .chain(Rating::ALL.iter().map(|rating| {
            let label = if *rating == Rating::MAX {
                format!("{} Stars", rating)
            } else {
                format!("{}+ Stars", rating)
            };
            RatingOptionViewModel {
                value: Some(rating.value()),
                label,
                selected: selected == Some(*rating),
            }
        }))
        .collect()
}

pub fn present_home(catalog: &Catalog, placeholder_poster_url: &str) -> HomePageViewModel {
    let criteria = catalog.criteria();
    let movies: Vec<_> = catalog
        .visible()
        .into_iter()
        .map(|movie| present_movie_card(movie, placeholder_poster_url))
        .collect();

    HomePageViewModel {
        title_query: criteria.title_query.clone(),
        min_rating: criteria.min_rating.map(Rating::value),
        rating_options: rating_options(criteria.min_rating),
        showing: movies.len(),
        total: catalog.movies().len(),
        no_results: movies.is_empty(),
        movies,
    }
}

pub fn present_home_result(content: HomePageViewModel) -> CommandResultViewModel<HomePageViewModel> {
    let no_results = content.no_results;
    let filtered = !content.title_query.is_empty() || content.min_rating.is_some();
    let mut result = CommandResultViewModel::new(content);

    if no_results && filtered {
        result = result.with_suggestion(
            Guidance::new("Try a shorter title or a lower minimum rating")
                .with_command("cinelist list"),
        );
    } else if !no_results {
        result = result.with_suggestion(
            Guidance::new("Open a movie's detail page").with_command("cinelist show <ID>"),
        );
    }

    result
}
