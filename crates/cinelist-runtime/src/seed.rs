use cinelist_types::{Movie, MovieId, Rating};
use serde::Deserialize;
use std::path::Path;

use crate::{Error, Result};

/// On-disk seed catalog, `[[movies]]` tables in TOML or a JSON object
#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    movies: Vec<Movie>,
}

/// Load seed records from a `.toml` or `.json` file
pub fn load_seed_file(path: &Path) -> Result<Vec<Movie>> {
    let content = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let seed: SeedFile = if is_json {
        serde_json::from_str(&content)
            .map_err(|e| Error::Seed(format!("{}: {}", path.display(), e)))?
    } else {
        toml::from_str(&content).map_err(|e| Error::Seed(format!("{}: {}", path.display(), e)))?
    };

    tracing::info!(path = %path.display(), count = seed.movies.len(), "loaded seed catalog");
    Ok(seed.movies)
}

fn rating(value: u8) -> Rating {
    Rating::ALL[usize::from(value.clamp(1, 5)) - 1]
}

fn seed_movie(
    id: u64,
    title: &str,
    description: &str,
    poster_url: &str,
    stars: u8,
    trailer_url: &str,
) -> Movie {
    Movie {
        id: MovieId::new(id),
        title: title.to_string(),
        description: description.to_string(),
        poster_url: poster_url.to_string(),
        rating: rating(stars),
        trailer_url: trailer_url.to_string(),
    }
}

/// Built-in catalog used when no seed file is configured
pub fn default_movies() -> Vec<Movie> {
    vec![
        seed_movie(
            1,
            "The Shawshank Redemption",
            "Two imprisoned men bond over a number of years, finding solace and eventual redemption through acts of common decency.",
            "https://m.media-amazon.com/images/M/MV5BNDE3ODcxYzMtY2YzZC00NmNlLWJiNDMtZDViZWM2MzIxZDYwXkEyXkFqcGdeQXVyNjAwNDUxODI@._V1_.jpg",
            5,
            "https://www.youtube.com/embed/6hB3S9bIaco",
        ),
        seed_movie(
            2,
            "The Godfather",
            "The aging patriarch of an organized crime dynasty transfers control of his clandestine empire to his reluctant son.",
            "https://m.media-amazon.com/images/M/MV5BM2MyNjYxNmUtYTAwNi00MTYxLWJmNWYtYzZlODY3ZTk3OTFlXkEyXkFqcGdeQXVyNzkwMjQ5NzM@._V1_.jpg",
            5,
            "https://www.youtube.com/embed/sY1S34973zA",
        ),
        seed_movie(
            3,
            "The Dark Knight",
            "When the menace known as the Joker wreaks havoc on Gotham City, Batman must accept one of the greatest psychological and physical tests.",
            "https://m.media-amazon.com/images/M/MV5BMTMxNTMwODM0NF5BMl5BanBnXkFtZTcwODAyMTk2Mw@@._V1_.jpg",
            4,
            "https://www.youtube.com/embed/EXeTwQWrcwY",
        ),
        seed_movie(
            4,
            "Pulp Fiction",
            "The lives of two mob hitmen, a boxer, a gangster and his wife intertwine in four tales of violence and redemption.",
            "https://m.media-amazon.com/images/M/MV5BNGNhMDIzZTUtNTBlZi00MTRlLWFjM2ItYzViMjE3YzI5MjljXkEyXkFqcGdeQXVyNzkwMjQ5NzM@._V1_.jpg",
            4,
            "https://www.youtube.com/embed/s7EdQ4FqbhY",
        ),
        seed_movie(
            5,
            "Forrest Gump",
            "The presidencies of Kennedy and Johnson through the eyes of an Alabama man with an IQ of 75.",
            "https://m.media-amazon.com/images/M/MV5BNWIwODRlZTUtY2U3ZS00Yzg1LWJhNzYtMmZiYmEyNmU1NjMzXkEyXkFqcGdeQXVyMTQxNzMzNDI@._V1_.jpg",
            4,
            "https://www.youtube.com/embed/bLvqoHBptjg",
        ),
        seed_movie(
            6,
            "Inception",
            "A thief who steals corporate secrets through dream-sharing technology is given the inverse task of planting an idea.",
            "https://m.media-amazon.com/images/M/MV5BMjAxMzY3NjcxNF5BMl5BanBnXkFtZTcwNTI5OTM0Mw@@._V1_.jpg",
            5,
            "https://www.youtube.com/embed/YoHD9XEInc0",
        ),
    ]
}
