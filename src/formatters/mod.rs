pub mod movie_formatter;

pub use movie_formatter::{format_history, format_movie};
