use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Single-line title input. Editing emits `QueryChanged`; the search
/// itself fires only when the event loop sees Enter.
#[derive(Default)]
pub struct SearchBar {
    query: String,
    cursor_position: usize,
    is_searching: bool,
    status: Option<String>,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt the query held by the app state. The component is usually the
    /// origin of that value, so the cursor is kept where the user left it
    /// and only clamped when the text actually differs.
    pub fn set_query(&mut self, query: String) {
        if query != self.query {
            self.query = query;
            self.cursor_position = self.cursor_position.min(self.char_count());
        }
    }

    pub fn set_searching(&mut self, is_searching: bool) {
        self.is_searching = is_searching;
    }

    pub fn set_status(&mut self, status: Option<String>) {
        self.status = status;
    }

    #[allow(dead_code)]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[allow(dead_code)]
    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Byte offset of the given character position.
    fn byte_offset(&self, char_pos: usize) -> usize {
        self.query
            .char_indices()
            .nth(char_pos)
            .map(|(offset, _)| offset)
            .unwrap_or(self.query.len())
    }

    fn char_count(&self) -> usize {
        self.query.chars().count()
    }

    /// Position of the start of the word before `from`.
    fn prev_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.query.chars().collect();
        let mut pos = from;
        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        pos
    }

    /// Remove the characters in `[start, end)` and leave the cursor at
    /// `start`. Returns false when the range is empty or out of bounds.
    fn delete_range(&mut self, start: usize, end: usize) -> bool {
        if start >= end || end > self.char_count() {
            return false;
        }
        let byte_start = self.byte_offset(start);
        let byte_end = self.byte_offset(end);
        self.query.drain(byte_start..byte_end);
        self.cursor_position = start;
        true
    }

    fn insert_char(&mut self, c: char) {
        let offset = self.byte_offset(self.cursor_position);
        self.query.insert(offset, c);
        self.cursor_position += 1;
    }

    fn changed(&self) -> Option<Message> {
        Some(Message::QueryChanged(self.query.clone()))
    }
}

impl Component for SearchBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let input_text = if self.query.is_empty() {
            vec![
                Span::styled(" ", Style::default().bg(Color::White).fg(Color::Black)),
                Span::styled("Enter movie title", Style::default().fg(Color::DarkGray)),
            ]
        } else {
            let cursor_byte = self.byte_offset(self.cursor_position);
            let (before, after) = self.query.split_at(cursor_byte);
            let cursor_char = after.chars().next().unwrap_or(' ');
            vec![
                Span::raw(before.to_string()),
                Span::styled(
                    cursor_char.to_string(),
                    Style::default().bg(Color::White).fg(Color::Black),
                ),
                Span::raw(after.chars().skip(1).collect::<String>()),
            ]
        };

        let mut title = "Movie Search".to_string();
        if self.is_searching {
            title.push_str(" [searching]");
        }
        if let Some(status) = &self.status {
            title.push_str(&format!(" - {status}"));
        }

        let input = Paragraph::new(Line::from(input_text))
            .block(Block::default().title(title).borders(Borders::ALL))
            .style(Style::default().fg(Color::Yellow));

        f.render_widget(input, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor_position = 0;
                    None
                }
                KeyCode::Char('e') => {
                    self.cursor_position = self.char_count();
                    None
                }
                KeyCode::Char('b') => {
                    self.cursor_position = self.cursor_position.saturating_sub(1);
                    None
                }
                KeyCode::Char('f') => {
                    if self.cursor_position < self.char_count() {
                        self.cursor_position += 1;
                    }
                    None
                }
                KeyCode::Char('h') => {
                    let pos = self.cursor_position;
                    self.delete_range(pos.saturating_sub(1), pos)
                        .then(|| self.changed())
                        .flatten()
                }
                KeyCode::Char('w') => {
                    let pos = self.cursor_position;
                    let start = self.prev_word_boundary(pos);
                    self.delete_range(start, pos).then(|| self.changed()).flatten()
                }
                KeyCode::Char('u') => {
                    let pos = self.cursor_position;
                    self.delete_range(0, pos).then(|| self.changed()).flatten()
                }
                KeyCode::Char('k') => {
                    let pos = self.cursor_position;
                    let end = self.char_count();
                    self.delete_range(pos, end).then(|| self.changed()).flatten()
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) => {
                if key.modifiers.contains(KeyModifiers::ALT) {
                    return None;
                }
                self.insert_char(c);
                self.changed()
            }
            KeyCode::Backspace => {
                let pos = self.cursor_position;
                self.delete_range(pos.saturating_sub(1), pos)
                    .then(|| self.changed())
                    .flatten()
            }
            KeyCode::Delete => {
                let pos = self.cursor_position;
                self.delete_range(pos, pos + 1).then(|| self.changed()).flatten()
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                if self.cursor_position < self.char_count() {
                    self.cursor_position += 1;
                }
                None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                None
            }
            KeyCode::End => {
                self.cursor_position = self.char_count();
                None
            }
            _ => None,
        }
    }
}
