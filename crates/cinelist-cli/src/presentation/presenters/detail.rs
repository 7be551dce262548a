use cinelist_runtime::Catalog;
use cinelist_types::MovieId;

use super::movie::present_movie_card;
use crate::presentation::view_models::{
    CommandResultViewModel, DetailPageViewModel, Guidance, StatusBadge,
};

pub fn present_detail(
    catalog: &Catalog,
    movie_id: Option<MovieId>,
    placeholder_poster_url: &str,
) -> DetailPageViewModel {
    let movie = movie_id
        .and_then(|id| catalog.find(id))
        .map(|movie| present_movie_card(movie, placeholder_poster_url));

    DetailPageViewModel {
        movie_id: movie_id.map(MovieId::value),
        movie,
    }
}

pub fn present_detail_result(
    content: DetailPageViewModel,
) -> CommandResultViewModel<DetailPageViewModel> {
    if content.is_not_found() {
        return CommandResultViewModel::new(content)
            .with_badge(StatusBadge::error("Movie not found"))
            .with_suggestion(
                Guidance::new("Go back to the movie list").with_command("cinelist list"),
            );
    }

    CommandResultViewModel::new(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLACEHOLDER: &str = "https://example.com/none.png";

    #[test]
    fn test_existing_movie_is_bound() {
        let catalog = Catalog::with_default_seed().unwrap();

        let vm = present_detail(&catalog, Some(MovieId::new(3)), PLACEHOLDER);

        assert_eq!(vm.movie_id, Some(3));
        assert_eq!(vm.movie.map(|m| m.title), Some("The Dark Knight".to_string()));
    }

    #[test]
    fn test_missing_movie_is_not_found() {
        let catalog = Catalog::with_default_seed().unwrap();

        let result = present_detail_result(present_detail(&catalog, Some(MovieId::new(42)), PLACEHOLDER));

        assert!(result.content.is_not_found());
        assert_eq!(result.content.movie_id, Some(42));
        assert!(result.badge.is_some());
    }

    #[test]
    fn test_detail_without_param_is_not_found() {
        let catalog = Catalog::with_default_seed().unwrap();

        let vm = present_detail(&catalog, None, PLACEHOLDER);

        assert!(vm.is_not_found());
        assert_eq!(vm.movie_id, None);
    }
}
