use crate::interactive::constants::{HELP_DIALOG_MARGIN, HELP_DIALOG_MAX_WIDTH};
use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

pub struct HelpDialog;

impl HelpDialog {
    pub fn new() -> Self {
        Self
    }

    fn help_text() -> Vec<Line<'static>> {
        let section = |name: &'static str| {
            Line::from(Span::styled(
                name,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
        };

        vec![
            Line::from(Span::styled(
                "Movie Search - Interactive Mode",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            section("Search Mode:"),
            Line::from("  Enter       - Search for the typed title"),
            Line::from("  ↑/↓         - Select a result card"),
            Line::from("  Ctrl+O      - Open details for the selected movie"),
            Line::from("  Ctrl+R      - Fetch the search history"),
            Line::from("  Esc         - Quit"),
            Line::from("  ?           - Show this help"),
            Line::from(""),
            section("Movie Detail Mode:"),
            Line::from("  ↑/↓         - Scroll"),
            Line::from("  PgUp/PgDn   - Scroll by page"),
            Line::from("  Backspace   - Back to search"),
            Line::from("  Esc         - Back to search"),
            Line::from(""),
            Line::from("Press any key to close this help..."),
        ]
    }
}

impl Default for HelpDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for HelpDialog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let help_text = Self::help_text();

        let width = HELP_DIALOG_MAX_WIDTH.min(area.width.saturating_sub(HELP_DIALOG_MARGIN));
        let height =
            (help_text.len() as u16 + 2).min(area.height.saturating_sub(HELP_DIALOG_MARGIN));
        let x = area.width.saturating_sub(width) / 2;
        let y = area.height.saturating_sub(height) / 2;
        let dialog_area = Rect::new(x, y, width, height);

        f.render_widget(Clear, dialog_area);
        let dialog = Paragraph::new(help_text)
            .block(Block::default().title(" Help ").borders(Borders::ALL));
        f.render_widget(dialog, dialog_area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        Some(Message::CloseHelp)
    }
}
