use serde::Serialize;

use super::movie::MovieCardViewModel;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomePageViewModel {
    pub title_query: String,
    pub min_rating: Option<u8>,
    pub rating_options: Vec<RatingOptionViewModel>,
    pub showing: usize,
    pub total: usize,
    pub movies: Vec<MovieCardViewModel>,
    /// True when the filters exclude every movie
    pub no_results: bool,
}

/// One entry of the minimum-rating select; `value: None` is "All Ratings"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingOptionViewModel {
    pub value: Option<u8>,
    pub label: String,
    pub selected: bool,
}
