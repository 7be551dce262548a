use serde::Serialize;

use super::detail::DetailPageViewModel;
use super::home::HomePageViewModel;

/// Everything the router needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenViewModel {
    pub route: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie_id: Option<u64>,
    pub page: PageViewModel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "lowercase")]
pub enum PageViewModel {
    Home(HomePageViewModel),
    Detail(DetailPageViewModel),
    /// Route with no matching page
    Blank,
}
