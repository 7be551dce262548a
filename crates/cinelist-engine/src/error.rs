use serde::Serialize;
use std::fmt;

/// Required form fields checked by the intake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Description,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Title => write!(f, "title"),
            Field::Description => write!(f, "description"),
        }
    }
}

/// Rejection reasons for a submitted movie form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty after trimming
    MissingField(Field),

    /// Rating text could not be coerced into 1..=5
    InvalidRating(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField(field) => write!(f, "Movie {} is required", field),
            ValidationError::InvalidRating(raw) => {
                write!(f, "Invalid rating '{}': choose 1 to 5 stars", raw)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
