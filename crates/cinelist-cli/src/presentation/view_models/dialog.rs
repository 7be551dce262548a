use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Title,
    Description,
    PosterUrl,
    Rating,
    TrailerUrl,
}

impl FormField {
    pub const ORDER: [FormField; 5] = [
        FormField::Title,
        FormField::Description,
        FormField::PosterUrl,
        FormField::Rating,
        FormField::TrailerUrl,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Movie Title *",
            FormField::Description => "Description *",
            FormField::PosterUrl => "Poster URL",
            FormField::Rating => "Rating",
            FormField::TrailerUrl => "Trailer URL",
        }
    }

    pub fn next(self) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddMovieDialogViewModel {
    pub title: String,
    pub description: String,
    pub poster_url: String,
    pub rating: u8,
    pub trailer_url: String,
    pub focused: FormField,
    pub error: Option<String>,
}
