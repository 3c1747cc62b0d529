use crate::interactive::constants::PAGE_SIZE;
use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crate::schemas::Movie;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Full-screen view of the selected movie.
pub struct MovieDetail {
    movie: Option<Movie>,
    scroll_offset: usize,
}

impl MovieDetail {
    pub fn new() -> Self {
        Self {
            movie: None,
            scroll_offset: 0,
        }
    }

    pub fn set_movie(&mut self, movie: Movie) {
        // Reset scroll only when a different movie arrives, so re-entering
        // the same detail keeps its position for the duration of the frame.
        if self.movie.as_ref() != Some(&movie) {
            self.scroll_offset = 0;
        }
        self.movie = Some(movie);
    }

    #[allow(dead_code)]
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    fn detail_lines(movie: &Movie) -> Vec<Line<'static>> {
        let label = |name: &str| {
            Span::styled(
                format!("{name}: "),
                Style::default().fg(Color::Cyan),
            )
        };

        let mut lines = vec![
            Line::from(Span::styled(
                movie.title.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        let mut field = |name: &str, value: &str| {
            if !value.is_empty() {
                lines.push(Line::from(vec![label(name), Span::raw(value.to_string())]));
            }
        };

        field("IMDB Score", &movie.imdb_rating);
        field("Awards", &movie.awards);
        field("Released", &movie.released);
        field("Runtime", &movie.runtime);
        field("Genre", &movie.genre);
        field("Director", &movie.director);
        field("Writer", &movie.writer);
        field("Actors", &movie.actors);
        field("Poster", &movie.poster);

        if !movie.plot.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(movie.plot.clone()));
        }

        lines
    }
}

impl Default for MovieDetail {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for MovieDetail {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let Some(movie) = &self.movie else {
            return;
        };

        let paragraph = Paragraph::new(Self::detail_lines(movie))
            .block(
                Block::default()
                    .title(format!(" {} ", movie.title))
                    .borders(Borders::ALL),
            )
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset as u16, 0));

        f.render_widget(paragraph, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                self.scroll_offset += 1;
                None
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(PAGE_SIZE);
                None
            }
            KeyCode::PageDown => {
                self.scroll_offset += PAGE_SIZE;
                None
            }
            KeyCode::Backspace | KeyCode::Esc => Some(Message::ExitToSearch),
            _ => None,
        }
    }
}
