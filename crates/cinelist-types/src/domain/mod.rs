mod movie;
mod rating;

pub use movie::{Movie, MovieId};
pub use rating::Rating;
