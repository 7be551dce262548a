use serde::Serialize;

use super::movie::MovieCardViewModel;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailPageViewModel {
    /// Id requested by the route, if any
    pub movie_id: Option<u64>,
    /// `None` renders the "movie not found" fallback
    pub movie: Option<MovieCardViewModel>,
}

impl DetailPageViewModel {
    pub fn is_not_found(&self) -> bool {
        self.movie.is_none()
    }
}
