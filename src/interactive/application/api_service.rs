use tracing::debug;

use crate::api::{HISTORY_FALLBACK, MovieClient, SEARCH_FALLBACK};
use crate::interactive::domain::models::{ApiRequest, ApiResponse};

/// Worker-side service: turns queued requests into blocking API calls and
/// maps failures to the user-facing message for that call.
pub struct ApiService {
    client: MovieClient,
}

impl ApiService {
    pub fn new(client: MovieClient) -> Self {
        Self { client }
    }

    pub fn call(&self, request: ApiRequest) -> ApiResponse {
        match request {
            ApiRequest::Search { id, title } => {
                debug!(id, %title, "search request");
                ApiResponse::Search {
                    id,
                    outcome: self
                        .client
                        .search_title(&title)
                        .map_err(|err| err.user_message(SEARCH_FALLBACK)),
                }
            }
            ApiRequest::History { id } => {
                debug!(id, "history request");
                ApiResponse::History {
                    id,
                    outcome: self
                        .client
                        .search_history()
                        .map_err(|err| err.user_message(HISTORY_FALLBACK)),
                }
            }
        }
    }
}
