use serde::{Deserialize, Serialize};
use std::fmt;

use super::Rating;

/// Movie identifier, unique within a catalog and never reassigned
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(u64);

impl MovieId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for MovieId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A catalog entry. Immutable once created.
///
/// `poster_url` and `trailer_url` use the empty string for "absent";
/// substituting a placeholder poster is left to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub poster_url: String,
    pub rating: Rating,
    #[serde(default)]
    pub trailer_url: String,
}

impl Movie {
    pub fn has_poster(&self) -> bool {
        !self.poster_url.trim().is_empty()
    }

    pub fn has_trailer(&self) -> bool {
        !self.trailer_url.trim().is_empty()
    }
}
