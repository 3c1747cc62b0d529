use crate::interactive::constants::PAGE_SIZE;
use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crate::schemas::Movie;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// The movie cards. Each result renders as a title line plus a plot
/// snippet; the selected card is highlighted.
#[derive(Default)]
pub struct ResultList {
    results: Vec<Movie>,
    selected_index: usize,
}

impl ResultList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_results(&mut self, results: Vec<Movie>) {
        if self.selected_index >= results.len() {
            self.selected_index = 0;
        }
        self.results = results;
    }

    pub fn set_selected_index(&mut self, index: usize) {
        if index < self.results.len() {
            self.selected_index = index;
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    #[allow(dead_code)]
    pub fn selected_movie(&self) -> Option<&Movie> {
        self.results.get(self.selected_index)
    }

    fn move_up(&mut self) -> bool {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            true
        } else {
            false
        }
    }

    fn move_down(&mut self) -> bool {
        if self.selected_index + 1 < self.results.len() {
            self.selected_index += 1;
            true
        } else {
            false
        }
    }

    fn move_by(&mut self, delta: isize) -> bool {
        if self.results.is_empty() {
            return false;
        }
        let max = self.results.len() - 1;
        let target = if delta < 0 {
            self.selected_index.saturating_sub(delta.unsigned_abs())
        } else {
            self.selected_index.saturating_add(delta as usize).min(max)
        };
        if target != self.selected_index {
            self.selected_index = target;
            true
        } else {
            false
        }
    }

    fn card_lines(movie: &Movie, selected: bool) -> Vec<Line<'static>> {
        let marker = if selected { "▌ " } else { "  " };
        let title_style = if selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let mut heading = vec![
            Span::styled(marker.to_string(), Style::default().fg(Color::Cyan)),
            Span::styled(movie.title.clone(), title_style),
        ];
        if !movie.released.is_empty() {
            heading.push(Span::styled(
                format!(" ({})", movie.released),
                Style::default().fg(Color::DarkGray),
            ));
        }
        if !movie.imdb_rating.is_empty() {
            heading.push(Span::styled(
                format!("  ★ {}", movie.imdb_rating),
                Style::default().fg(Color::Yellow),
            ));
        }

        let plot = if movie.plot.is_empty() {
            "(no plot)".to_string()
        } else {
            movie.plot.clone()
        };

        vec![
            Line::from(heading),
            Line::from(vec![
                Span::raw("  "),
                Span::styled(plot, Style::default().fg(Color::Gray)),
                Span::styled(
                    "  [Ctrl+O for more]",
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            Line::from(""),
        ]
    }
}

impl Component for ResultList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        if self.results.is_empty() {
            let empty = Paragraph::new("No results. Type a title and press Enter to search.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(Block::default().title("Results").borders(Borders::ALL));
            f.render_widget(empty, area);
            return;
        }

        let mut lines = Vec::new();
        for (index, movie) in self.results.iter().enumerate() {
            lines.extend(Self::card_lines(movie, index == self.selected_index));
        }

        let list = Paragraph::new(lines)
            .block(Block::default().title("Results").borders(Borders::ALL))
            .wrap(Wrap { trim: false });
        f.render_widget(list, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up => self.move_up().then(|| Message::SelectResult(self.selected_index)),
            KeyCode::Down => self
                .move_down()
                .then(|| Message::SelectResult(self.selected_index)),
            KeyCode::PageUp => self
                .move_by(-(PAGE_SIZE as isize))
                .then(|| Message::SelectResult(self.selected_index)),
            KeyCode::PageDown => self
                .move_by(PAGE_SIZE as isize)
                .then(|| Message::SelectResult(self.selected_index)),
            KeyCode::Home => self.move_by(isize::MIN).then(|| Message::SelectResult(0)),
            KeyCode::End => self
                .move_by(isize::MAX)
                .then(|| Message::SelectResult(self.selected_index)),
            KeyCode::Char('o') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                (!self.results.is_empty()).then_some(Message::EnterMovieDetail)
            }
            _ => None,
        }
    }
}
