pub mod api;
pub mod formatters;
pub mod interactive;
pub mod logging;
pub mod schemas;

pub use api::{ApiError, HISTORY_FALLBACK, MovieClient, SEARCH_FALLBACK};
pub use schemas::{ApiEnvelope, Movie};

/// Default endpoint of the movie-search service.
pub const DEFAULT_BASE_URL: &str = "https://localhost:7119";
