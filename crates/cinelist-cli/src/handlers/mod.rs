pub mod config;
pub mod list;
pub mod open;
pub mod show;
pub mod tui;

use cinelist_runtime::{Intent, Route, RouteParams};
use cinelist_types::MovieId;

/// Navigation intent for a route id typed on the command line
pub(crate) fn navigation(route: &str, movie_id: Option<u64>) -> Intent {
    Intent::Navigate {
        route: Route::parse(route),
        params: RouteParams {
            movie_id: movie_id.map(MovieId::new),
        },
    }
}
