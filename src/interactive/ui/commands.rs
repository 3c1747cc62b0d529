/// Side effects requested by the reducer. The event loop owns the worker
/// channel and performs these after each state update.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    ExecuteSearch,
    FetchHistory,
}
