pub mod client;
pub mod error;

pub use client::{HISTORY_FALLBACK, MovieClient, SEARCH_FALLBACK};
pub use error::ApiError;
