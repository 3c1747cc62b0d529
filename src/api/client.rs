use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::schemas::{ApiEnvelope, Movie};

use super::error::ApiError;

/// Default message when a search fails and the server gave no reason.
pub const SEARCH_FALLBACK: &str = "Error fetching search results. Please try again.";

/// Default message when a history fetch fails and the server gave no reason.
pub const HISTORY_FALLBACK: &str = "Error fetching search history. Please try again.";

/// Blocking client for the two movie-search endpoints.
///
/// Both operations are plain GETs returning the `{succeeded, message,
/// data}` envelope. Callers run this off the UI thread; the client itself
/// makes no attempt at retry or cancellation.
pub struct MovieClient {
    http: Client,
    base: Url,
}

impl MovieClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base = Url::parse(base_url)?;
        if base.cannot_be_a_base() {
            return Err(ApiError::BaseUrl(format!(
                "{base_url} cannot carry path segments"
            )));
        }
        let http = Client::builder().build().map_err(ApiError::from)?;
        Ok(Self { http, base })
    }

    /// `GET /api/Movie/search/{title}` — request the single best-match
    /// movie for a title.
    ///
    /// The title goes through `Url::path_segments_mut`, which
    /// percent-encodes it as one segment, so titles containing `/`, `?`
    /// or spaces cannot split or terminate the path.
    pub fn search_title(&self, title: &str) -> Result<Movie, ApiError> {
        let url = self.endpoint(&["api", "Movie", "search", title])?;
        let envelope: ApiEnvelope<Movie> = self.get(url)?;
        match envelope {
            ApiEnvelope {
                succeeded: true,
                data: Some(movie),
                ..
            } => Ok(movie),
            ApiEnvelope { message, .. } => Err(ApiError::Rejected { message }),
        }
    }

    /// `GET /api/Movie/searchHistory` — fetch the server-side list of past
    /// searches. An absent `data` field is an empty history, not an error.
    pub fn search_history(&self) -> Result<Vec<String>, ApiError> {
        let url = self.endpoint(&["api", "Movie", "searchHistory"])?;
        let envelope: ApiEnvelope<Vec<String>> = self.get(url)?;
        if envelope.succeeded {
            Ok(envelope.data.unwrap_or_default())
        } else {
            Err(ApiError::Rejected {
                message: envelope.message,
            })
        }
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::BaseUrl("base URL cannot carry path segments".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn get<T: DeserializeOwned + Default>(&self, url: Url) -> Result<ApiEnvelope<T>, ApiError> {
        debug!(%url, "GET");
        let response = self.http.get(url).send().map_err(ApiError::from)?;
        let status = response.status();
        if !status.is_success() {
            // An error status may still carry an envelope whose message is
            // worth surfacing.
            let message = response
                .json::<ApiEnvelope<serde_json::Value>>()
                .ok()
                .and_then(|envelope| envelope.message);
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }
        response.json::<ApiEnvelope<T>>().map_err(ApiError::from)
    }
}
