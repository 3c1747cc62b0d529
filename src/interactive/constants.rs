//! Constants for the interactive TUI module.

// Timing constants
/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Double Ctrl+C timeout in seconds
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

/// Status message auto-clear delay in milliseconds
pub const STATUS_CLEAR_DELAY_MS: u64 = 3000;

// UI Layout constants
/// Height of the search bar component
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Maximum number of visible rows in the history panel
pub const HISTORY_PANEL_MAX_ROWS: u16 = 8;

/// Height of the error banner when an error is present
pub const ERROR_BANNER_HEIGHT: u16 = 1;

/// Page size for PageUp/PageDown navigation
pub const PAGE_SIZE: usize = 10;

// Help dialog dimensions
/// Maximum width for the help dialog
pub const HELP_DIALOG_MAX_WIDTH: u16 = 70;

/// Minimum margin around the help dialog
pub const HELP_DIALOG_MARGIN: u16 = 4;
