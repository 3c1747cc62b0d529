use crate::interactive::ui::commands::Command;
use crate::interactive::ui::events::Message;
use crate::schemas::Movie;

// Re-export Mode
pub use crate::interactive::domain::models::Mode;

/// The view-state controller: one struct holding every state slot, updated
/// only through `update`.
pub struct AppState {
    pub mode: Mode,
    pub search: SearchState,
    pub history: HistoryState,
    pub ui: UiState,
}

pub struct SearchState {
    pub query: String,
    /// Rebuilt wholesale on every successful search; the server returns a
    /// single best match, so this holds at most one element.
    pub results: Vec<Movie>,
    pub selected_index: usize,
    pub is_searching: bool,
    /// Generation id of the latest issued search. Responses carrying an
    /// older id are dropped by the event loop.
    pub current_search_id: u64,
}

pub struct HistoryState {
    pub entries: Vec<String>,
    pub is_fetching: bool,
    pub current_fetch_id: u64,
}

pub struct UiState {
    /// The single error slot: replaced on every failure, cleared on the
    /// next success of either call.
    pub error: Option<String>,
    /// Transient status line ("searching...", the quit prompt).
    pub status: Option<String>,
    /// Snapshot of the movie under inspection. A copy, so a later result
    /// replacement cannot invalidate it.
    pub selected_movie: Option<Movie>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            mode: Mode::Search,
            search: SearchState {
                query: String::new(),
                results: Vec::new(),
                selected_index: 0,
                is_searching: false,
                current_search_id: 0,
            },
            history: HistoryState {
                entries: Vec::new(),
                is_fetching: false,
                current_fetch_id: 0,
            },
            ui: UiState {
                error: None,
                status: None,
                selected_movie: None,
            },
        }
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::QueryChanged(q) => {
                // No debounce and no validation: the search fires only on
                // an explicit SearchRequested.
                self.search.query = q;
                Command::None
            }
            Message::SearchRequested => {
                self.search.is_searching = true;
                self.search.current_search_id += 1;
                self.ui.status = Some("searching...".to_string());
                Command::ExecuteSearch
            }
            Message::SearchCompleted(movie) => {
                self.search.results = vec![movie];
                self.search.selected_index = 0;
                self.search.is_searching = false;
                self.ui.error = None;
                self.ui.status = None;
                Command::None
            }
            Message::SearchFailed(message) => {
                // Previous results stay visible; only the banner changes.
                self.search.is_searching = false;
                self.ui.error = Some(message);
                self.ui.status = None;
                Command::None
            }
            Message::SelectResult(index) => {
                if index < self.search.results.len() {
                    self.search.selected_index = index;
                }
                Command::None
            }
            Message::HistoryRequested => {
                self.history.is_fetching = true;
                self.history.current_fetch_id += 1;
                self.ui.status = Some("fetching history...".to_string());
                Command::FetchHistory
            }
            Message::HistoryLoaded(entries) => {
                self.history.entries = entries;
                self.history.is_fetching = false;
                self.ui.error = None;
                self.ui.status = None;
                Command::None
            }
            Message::HistoryFailed(message) => {
                self.history.is_fetching = false;
                self.ui.error = Some(message);
                self.ui.status = None;
                Command::None
            }
            Message::EnterMovieDetail => {
                if let Some(movie) = self.search.results.get(self.search.selected_index).cloned() {
                    self.ui.selected_movie = Some(movie);
                    self.mode = Mode::MovieDetail;
                }
                Command::None
            }
            Message::ExitToSearch => {
                self.mode = Mode::Search;
                Command::None
            }
            Message::ShowHelp => {
                self.mode = Mode::Help;
                Command::None
            }
            Message::CloseHelp => {
                self.mode = Mode::Search;
                Command::None
            }
            Message::SetStatus(status) => {
                self.ui.status = Some(status);
                Command::None
            }
            Message::ClearStatus => {
                self.ui.status = None;
                Command::None
            }
            Message::Quit => Command::None, // handled in the event loop
        }
    }
}
