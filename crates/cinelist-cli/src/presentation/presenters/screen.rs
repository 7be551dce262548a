use cinelist_runtime::{ActivePage, Catalog};
use cinelist_types::MovieId;

use super::detail::present_detail;
use super::home::present_home;
use crate::presentation::view_models::{PageViewModel, ScreenViewModel};

/// Resolve the active route into the page to draw
pub fn present_screen(catalog: &Catalog, placeholder_poster_url: &str) -> ScreenViewModel {
    let route = catalog.route();
    let page = match catalog.active_page() {
        Some(ActivePage::Home) => PageViewModel::Home(present_home(catalog, placeholder_poster_url)),
        Some(ActivePage::Detail { movie_id }) => {
            PageViewModel::Detail(present_detail(catalog, movie_id, placeholder_poster_url))
        }
        None => PageViewModel::Blank,
    };

    ScreenViewModel {
        route: route.route.to_string(),
        movie_id: route.params.movie_id.map(MovieId::value),
        page,
    }
}
