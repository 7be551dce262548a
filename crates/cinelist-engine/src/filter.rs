use cinelist_types::{Movie, Rating, Result};
use serde::Serialize;

/// Title query plus optional minimum rating
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    pub title_query: String,
    pub min_rating: Option<Rating>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, query: impl Into<String>) -> Self {
        self.title_query = query.into();
        self
    }

    pub fn min_rating(mut self, rating: Rating) -> Self {
        self.min_rating = Some(rating);
        self
    }

    /// Coerce the rating select value: "" means all ratings, "1".."5" a threshold
    pub fn parse_min_rating(raw: &str) -> Result<Option<Rating>> {
        if raw.trim().is_empty() {
            return Ok(None);
        }
        raw.parse::<Rating>().map(Some)
    }

    pub fn is_empty(&self) -> bool {
        self.title_query.is_empty() && self.min_rating.is_none()
    }
}

/// Whether a single movie passes both conditions
pub fn matches(movie: &Movie, criteria: &FilterCriteria) -> bool {
    let matches_title = movie
        .title
        .to_lowercase()
        .contains(&criteria.title_query.to_lowercase());
    let matches_rating = criteria
        .min_rating
        .is_none_or(|min| movie.rating >= min);

    matches_title && matches_rating
}

/// Visible subset of `movies`, in input order
pub fn visible<'a>(movies: &'a [Movie], criteria: &FilterCriteria) -> Vec<&'a Movie> {
    movies
        .iter()
        .filter(|movie| matches(movie, criteria))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinelist_types::MovieId;

    fn movie(id: u64, title: &str, rating: u8) -> Movie {
        Movie {
            id: MovieId::new(id),
            title: title.to_string(),
            description: format!("{} description", title),
            poster_url: String::new(),
            rating: Rating::new(rating).unwrap(),
            trailer_url: String::new(),
        }
    }

    #[test]
    fn test_parse_min_rating() {
        assert_eq!(FilterCriteria::parse_min_rating("").unwrap(), None);
        assert_eq!(FilterCriteria::parse_min_rating("  ").unwrap(), None);
        assert_eq!(
            FilterCriteria::parse_min_rating("4").unwrap(),
            Some(Rating::new(4).unwrap())
        );
        assert!(FilterCriteria::parse_min_rating("7").is_err());
        assert!(FilterCriteria::parse_min_rating("four").is_err());
    }

    #[test]
    fn test_empty_criteria_matches_everything() {
        let movies = vec![movie(1, "Heat", 1), movie(2, "Alien", 5)];
        let criteria = FilterCriteria::new();

        assert!(criteria.is_empty());
        assert_eq!(visible(&movies, &criteria).len(), 2);
    }

    #[test]
    fn test_title_match_is_case_insensitive_substring() {
        let heat = movie(1, "Heat", 3);

        assert!(matches(&heat, &FilterCriteria::new().title("EA")));
        assert!(matches(&heat, &FilterCriteria::new().title("heat")));
        assert!(!matches(&heat, &FilterCriteria::new().title("heats")));
    }

    #[test]
    fn test_rating_threshold_is_inclusive() {
        let heat = movie(1, "Heat", 3);

        assert!(matches(&heat, &FilterCriteria::new().min_rating(Rating::new(3).unwrap())));
        assert!(!matches(&heat, &FilterCriteria::new().min_rating(Rating::new(4).unwrap())));
    }
}
