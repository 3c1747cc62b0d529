use crate::schemas::Movie;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Mode {
    Search,
    MovieDetail,
    Help,
}

/// Work item sent to the API worker thread.
///
/// Each kind carries a generation id; the event loop discards responses
/// whose id no longer matches the latest issued request of that kind, so
/// two overlapping calls cannot race each other into state.
#[derive(Clone, Debug)]
pub enum ApiRequest {
    Search { id: u64, title: String },
    History { id: u64 },
}

/// Worker thread answer. Failures arrive already rendered as the
/// user-facing message for their call.
#[derive(Clone, Debug)]
pub enum ApiResponse {
    Search {
        id: u64,
        outcome: Result<Movie, String>,
    },
    History {
        id: u64,
        outcome: Result<Vec<String>, String>,
    },
}
