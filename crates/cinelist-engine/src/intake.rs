//! Add-movie intake
//!
//! Turns raw form input into a [`Movie`]. Only the required-field check is
//! performed here; the id is supplied by the caller, which owns the
//! collection and therefore knows which ids are free.

use cinelist_types::{Movie, MovieId, Rating};
use serde::Serialize;

use crate::error::{Field, ValidationError};

/// Field-by-field form state for the add dialog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MovieForm {
    pub title: String,
    pub description: String,
    pub poster_url: String,
    pub rating: Rating,
    pub trailer_url: String,
}

impl MovieForm {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_poster_url(mut self, url: impl Into<String>) -> Self {
        self.poster_url = url.into();
        self
    }

    pub fn with_trailer_url(mut self, url: impl Into<String>) -> Self {
        self.trailer_url = url.into();
        self
    }

    /// Set the rating from select-box text, re-checking the range
    pub fn set_rating_str(&mut self, raw: &str) -> Result<(), ValidationError> {
        let rating = raw
            .parse::<Rating>()
            .map_err(|_| ValidationError::InvalidRating(raw.trim().to_string()))?;
        self.rating = rating;
        Ok(())
    }

    /// Back to the blank state the dialog opens with
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// First required field that is blank, if any
    pub fn missing_field(&self) -> Option<Field> {
        if self.title.trim().is_empty() {
            Some(Field::Title)
        } else if self.description.trim().is_empty() {
            Some(Field::Description)
        } else {
            None
        }
    }
}

/// Validate `form` and build the record it describes under `id`
///
/// The form is left untouched so a rejected submission can be corrected.
pub fn submit(form: &MovieForm, id: MovieId) -> Result<Movie, ValidationError> {
    if let Some(field) = form.missing_field() {
        return Err(ValidationError::MissingField(field));
    }

    Ok(Movie {
        id,
        title: form.title.clone(),
        description: form.description.clone(),
        poster_url: form.poster_url.clone(),
        rating: form.rating,
        trailer_url: form.trailer_url.clone(),
    })
}
