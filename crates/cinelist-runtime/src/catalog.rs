//! Application state owner
//!
//! `Catalog` is the single source of truth: it owns the movie store, the
//! router and the active filter criteria. Views never touch these directly;
//! they read snapshots and hand back an [`Intent`], which is applied here
//! synchronously before the next frame is drawn.

use cinelist_engine::{FilterCriteria, MovieForm, intake};
use cinelist_types::{Movie, MovieId, Rating};
use std::path::Path;

use crate::config::Config;
use crate::router::{ActivePage, Route, RouteParams, RouteState, Router};
use crate::seed;
use crate::store::MovieStore;
use crate::Result;

/// User action emitted by a page view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SetTitleQuery(String),
    SetMinRating(Option<Rating>),
    ClearFilters,
    AddMovie(MovieForm),
    Navigate { route: Route, params: RouteParams },
    GoHome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentOutcome {
    Applied,
    Added(MovieId),
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    store: MovieStore,
    router: Router,
    criteria: FilterCriteria,
}

impl Catalog {
    pub fn new(store: MovieStore) -> Self {
        Self {
            store,
            router: Router::new(),
            criteria: FilterCriteria::default(),
        }
    }

    /// Catalog seeded with the built-in movie list
    pub fn with_default_seed() -> Result<Self> {
        Ok(Self::new(MovieStore::with_movies(seed::default_movies())?))
    }

    /// Catalog seeded from the configured seed file, or the built-in list
    pub fn from_config(config: &Config, config_path: &Path) -> Result<Self> {
        let movies = match config.resolved_seed_path(config_path) {
            Some(path) => seed::load_seed_file(&path)?,
            None => seed::default_movies(),
        };
        Ok(Self::new(MovieStore::with_movies(movies)?))
    }

    pub fn apply(&mut self, intent: Intent) -> Result<IntentOutcome> {
        match intent {
            Intent::SetTitleQuery(query) => {
                self.criteria.title_query = query;
                Ok(IntentOutcome::Applied)
            }
            Intent::SetMinRating(rating) => {
                self.criteria.min_rating = rating;
                Ok(IntentOutcome::Applied)
            }
            Intent::ClearFilters => {
                self.criteria = FilterCriteria::default();
                Ok(IntentOutcome::Applied)
            }
            Intent::AddMovie(form) => self.add_movie(&form).map(IntentOutcome::Added),
            Intent::Navigate { route, params } => {
                self.router.navigate(route, params);
                Ok(IntentOutcome::Applied)
            }
            Intent::GoHome => {
                self.router.navigate_home();
                Ok(IntentOutcome::Applied)
            }
        }
    }

    /// Validate the form and append the resulting record
    pub fn add_movie(&mut self, form: &MovieForm) -> Result<MovieId> {
        let id = self.store.next_id();
        let movie = intake::submit(form, id).inspect_err(|err| {
            tracing::debug!(error = %err, "movie form rejected");
        })?;
        self.store.add(movie)?;
        Ok(id)
    }

    pub fn movies(&self) -> &[Movie] {
        self.store.all()
    }

    pub fn visible(&self) -> Vec<&Movie> {
        cinelist_engine::visible(self.store.all(), &self.criteria)
    }

    pub fn find(&self, id: MovieId) -> Option<&Movie> {
        self.store.find_by_id(id)
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn route(&self) -> &RouteState {
        self.router.state()
    }

    pub fn active_page(&self) -> Option<ActivePage> {
        self.router.active_page()
    }

    pub fn store(&self) -> &MovieStore {
        &self.store
    }
}
