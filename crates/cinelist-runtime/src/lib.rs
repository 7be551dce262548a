pub mod catalog;
pub mod config;
pub mod error;
pub mod router;
pub mod seed;
pub mod store;

pub use catalog::{Catalog, Intent, IntentOutcome};
pub use config::{Config, resolve_config_path};
pub use error::{Error, Result};
pub use router::{ActivePage, Route, RouteParams, RouteState, Router};
pub use store::MovieStore;
