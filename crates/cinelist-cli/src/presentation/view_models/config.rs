use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigViewModel {
    pub path: String,
    pub exists: bool,
    pub placeholder_poster_url: String,
    pub seed_path: Option<String>,
}
