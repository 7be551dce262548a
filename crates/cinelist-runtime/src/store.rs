use cinelist_types::{Error as TypesError, Movie, MovieId};

use crate::Result;

/// Ordered, append-only movie collection
///
/// Records are never edited or removed. `revision` advances on every append
/// so consumers holding derived data can tell it is stale.
#[derive(Debug, Clone, Default)]
pub struct MovieStore {
    movies: Vec<Movie>,
    next_id: u64,
    revision: u64,
}

impl MovieStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from seed records, rejecting duplicate ids
    pub fn with_movies(movies: impl IntoIterator<Item = Movie>) -> Result<Self> {
        let mut store = Self::new();
        for movie in movies {
            store.add(movie)?;
        }
        Ok(store)
    }

    /// Append a fully-formed record
    pub fn add(&mut self, movie: Movie) -> Result<&Movie> {
        if self.find_by_id(movie.id).is_some() {
            return Err(TypesError::DuplicateId(movie.id).into());
        }

        self.next_id = self.next_id.max(movie.id.value().saturating_add(1));
        self.revision += 1;
        tracing::debug!(id = %movie.id, title = %movie.title, "movie appended");

        self.movies.push(movie);
        Ok(&self.movies[self.movies.len() - 1])
    }

    pub fn all(&self) -> &[Movie] {
        &self.movies
    }

    pub fn find_by_id(&self, id: MovieId) -> Option<&Movie> {
        self.movies.iter().find(|movie| movie.id == id)
    }

    /// Fresh id, greater than every id currently stored
    pub fn next_id(&self) -> MovieId {
        MovieId::new(self.next_id.max(1))
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use cinelist_types::Rating;

    fn movie(id: u64, title: &str) -> Movie {
        Movie {
            id: MovieId::new(id),
            title: title.to_string(),
            description: "A film.".to_string(),
            poster_url: String::new(),
            rating: Rating::new(3).unwrap(),
            trailer_url: String::new(),
        }
    }

    #[test]
    fn test_empty_store_starts_ids_at_one() {
        let store = MovieStore::new();

        assert!(store.is_empty());
        assert_eq!(store.next_id(), MovieId::new(1));
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_add_then_find_returns_record() {
        let mut store = MovieStore::new();
        let id = store.next_id();

        store.add(movie(id.value(), "Heat")).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.find_by_id(id).map(|m| m.title.as_str()), Some("Heat"));
    }

    #[test]
    fn test_next_id_stays_above_seeded_ids() {
        let store = MovieStore::with_movies(vec![movie(7, "Heat"), movie(3, "Alien")]).unwrap();

        assert_eq!(store.next_id(), MovieId::new(8));
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let mut store = MovieStore::with_movies(vec![movie(1, "Heat")]).unwrap();

        let err = store.add(movie(1, "Alien")).unwrap_err();

        assert!(matches!(
            err,
            Error::Types(TypesError::DuplicateId(id)) if id == MovieId::new(1)
        ));
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].title, "Heat");
    }

    #[test]
    fn test_find_missing_id_is_none() {
        let store = MovieStore::with_movies(vec![movie(1, "Heat")]).unwrap();

        assert!(store.find_by_id(MovieId::new(99)).is_none());
    }

    #[test]
    fn test_revision_advances_per_append() {
        let mut store = MovieStore::new();
        store.add(movie(1, "Heat")).unwrap();
        store.add(movie(2, "Alien")).unwrap();

        assert_eq!(store.revision(), 2);
    }
}
