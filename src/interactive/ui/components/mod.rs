pub mod help_dialog;
pub mod history_panel;
pub mod movie_detail;
pub mod result_list;
pub mod search_bar;

#[cfg(test)]
mod result_list_test;

use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

pub trait Component {
    fn render(&mut self, f: &mut Frame, area: Rect);
    fn handle_key(&mut self, key: KeyEvent) -> Option<Message>;
}
