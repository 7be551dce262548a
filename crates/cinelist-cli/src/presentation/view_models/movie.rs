use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieCardViewModel {
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Placeholder already substituted when the movie has no poster
    pub poster_url: String,
    pub has_poster: bool,
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailer_url: Option<String>,
}
