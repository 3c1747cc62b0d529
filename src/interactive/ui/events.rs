use crate::schemas::Movie;

/// Events flowing into the reducer. Components and the event loop emit
/// these; `AppState::update` is the only place state changes.
#[derive(Clone, Debug)]
pub enum Message {
    // Search events
    QueryChanged(String),
    SearchRequested,
    SearchCompleted(Movie),
    SearchFailed(String),
    SelectResult(usize),

    // History events
    HistoryRequested,
    HistoryLoaded(Vec<String>),
    HistoryFailed(String),

    // Mode changes
    EnterMovieDetail,
    ExitToSearch,
    ShowHelp,
    CloseHelp,

    // UI events
    SetStatus(String),
    ClearStatus,

    Quit,
}
