use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Read-only view of the server-side search history. Replaced wholesale on
/// every fetch; the panel itself takes no input.
#[derive(Default)]
pub struct HistoryPanel {
    entries: Vec<String>,
    is_fetching: bool,
}

impl HistoryPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_entries(&mut self, entries: Vec<String>) {
        self.entries = entries;
    }

    pub fn set_fetching(&mut self, is_fetching: bool) {
        self.is_fetching = is_fetching;
    }

    #[allow(dead_code)]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Component for HistoryPanel {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let title = if self.is_fetching {
            "Search History [fetching]".to_string()
        } else {
            format!("Search History ({})", self.entries.len())
        };

        let lines: Vec<Line> = if self.entries.is_empty() {
            vec![Line::from(Span::styled(
                "Press Ctrl+R to load the search history.",
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            self.entries
                .iter()
                .enumerate()
                .map(|(index, entry)| {
                    Line::from(vec![
                        Span::styled(
                            format!("{:>3}. ", index + 1),
                            Style::default().fg(Color::DarkGray),
                        ),
                        Span::raw(entry.clone()),
                    ])
                })
                .collect()
        };

        let panel =
            Paragraph::new(lines).block(Block::default().title(title).borders(Borders::ALL));
        f.render_widget(panel, area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        None
    }
}
