use cinelist_types::Movie;

use crate::presentation::view_models::MovieCardViewModel;

pub fn present_movie_card(movie: &Movie, placeholder_poster_url: &str) -> MovieCardViewModel {
    let has_poster = movie.has_poster();
    let poster_url = if has_poster {
        movie.poster_url.clone()
    } else {
        placeholder_poster_url.to_string()
    };

    MovieCardViewModel {
        id: movie.id.value(),
        title: movie.title.clone(),
        description: movie.description.clone(),
        poster_url,
        has_poster,
        rating: movie.rating.value(),
        trailer_url: movie.has_trailer().then(|| movie.trailer_url.clone()),
    }
}
