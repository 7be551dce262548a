pub mod rating;
pub mod text;

pub use rating::{rating_label, stars};
pub use text::{one_line, truncate};
