use std::fmt;

use crate::domain::MovieId;

/// Result type for cinelist-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Rating outside the closed 1..=5 range, or not a number at all
    InvalidRating(String),

    /// A record with this id is already in the collection
    DuplicateId(MovieId),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidRating(raw) => {
                write!(f, "Invalid rating '{}': expected an integer from 1 to 5", raw)
            }
            Error::DuplicateId(id) => write!(f, "Duplicate movie id: {}", id),
        }
    }
}

impl std::error::Error for Error {}
