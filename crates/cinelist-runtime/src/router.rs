//! Minimal in-process router
//!
//! Tracks which page is active. There is no history stack; "back" is
//! simply [`Router::navigate_home`]. Unknown route identifiers are kept
//! as-is and resolve to no page at all, which the renderer shows as a
//! blank screen.

use cinelist_types::MovieId;
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Home,
    Detail,
    Unknown(String),
}

impl Route {
    pub fn parse(id: &str) -> Self {
        match id {
            "home" => Route::Home,
            "detail" => Route::Detail,
            other => Route::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Route::Home => "home",
            Route::Detail => "detail",
            Route::Unknown(id) => id,
        }
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Route parameters; only the detail route carries one
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie_id: Option<MovieId>,
}

impl RouteParams {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn movie(id: MovieId) -> Self {
        Self { movie_id: Some(id) }
    }

    pub fn is_empty(&self) -> bool {
        self.movie_id.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouteState {
    pub route: Route,
    pub params: RouteParams,
}

/// Page selected by the current route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivePage {
    Home,
    Detail { movie_id: Option<MovieId> },
}

/// Map a route state onto at most one page
pub fn resolve(state: &RouteState) -> Option<ActivePage> {
    match state.route {
        Route::Home => Some(ActivePage::Home),
        Route::Detail => Some(ActivePage::Detail {
            movie_id: state.params.movie_id,
        }),
        Route::Unknown(_) => None,
    }
}

#[derive(Debug, Clone, Default)]
pub struct Router {
    state: RouteState,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace route and params together
    pub fn navigate(&mut self, route: Route, params: RouteParams) {
        tracing::debug!(route = %route, params = ?params, "navigate");
        self.state = RouteState { route, params };
    }

    pub fn navigate_home(&mut self) {
        self.navigate(Route::Home, RouteParams::none());
    }

    pub fn navigate_to_movie(&mut self, id: MovieId) {
        self.navigate(Route::Detail, RouteParams::movie(id));
    }

    pub fn state(&self) -> &RouteState {
        &self.state
    }

    pub fn active_page(&self) -> Option<ActivePage> {
        resolve(&self.state)
    }
}
