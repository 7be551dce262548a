// Engine module - pure catalog logic (filtering, intake validation)
// This layer sits between the data model (types) and the stateful runtime

pub mod error;
pub mod filter;
pub mod intake;

pub use error::{Field, ValidationError};
pub use filter::{FilterCriteria, matches, visible};
pub use intake::{MovieForm, submit};
