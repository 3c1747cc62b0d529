use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::interactive::constants::{
    ERROR_BANNER_HEIGHT, HISTORY_PANEL_MAX_ROWS, SEARCH_BAR_HEIGHT,
};
use crate::interactive::ui::app_state::{AppState, Mode};
use crate::interactive::ui::components::{
    Component, help_dialog::HelpDialog, history_panel::HistoryPanel, movie_detail::MovieDetail,
    result_list::ResultList, search_bar::SearchBar,
};

/// Pure projection of `AppState` onto the frame: state is pushed into the
/// components before every draw, so nothing here survives between frames
/// except scroll/cursor positions the components own.
pub struct Renderer {
    search_bar: SearchBar,
    result_list: ResultList,
    history_panel: HistoryPanel,
    movie_detail: MovieDetail,
    help_dialog: HelpDialog,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            search_bar: SearchBar::new(),
            result_list: ResultList::new(),
            history_panel: HistoryPanel::new(),
            movie_detail: MovieDetail::new(),
            help_dialog: HelpDialog::new(),
        }
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        match state.mode {
            Mode::Search => self.render_search_mode(f, state),
            Mode::MovieDetail => self.render_detail_mode(f, state),
            Mode::Help => {
                self.render_search_mode(f, state);
                self.help_dialog.render(f, f.area());
            }
        }
    }

    fn render_search_mode(&mut self, f: &mut Frame, state: &AppState) {
        let history_height = if state.history.entries.is_empty() && !state.history.is_fetching {
            3
        } else {
            (state.history.entries.len() as u16 + 2).min(HISTORY_PANEL_MAX_ROWS + 2)
        };

        let mut constraints = vec![
            Constraint::Length(SEARCH_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(history_height),
        ];
        if state.ui.error.is_some() {
            constraints.push(Constraint::Length(ERROR_BANNER_HEIGHT));
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(f.area());

        self.search_bar.set_query(state.search.query.clone());
        self.search_bar.set_searching(state.search.is_searching);
        self.search_bar.set_status(state.ui.status.clone());

        self.result_list.set_results(state.search.results.clone());
        self.result_list
            .set_selected_index(state.search.selected_index);

        self.history_panel
            .set_entries(state.history.entries.clone());
        self.history_panel.set_fetching(state.history.is_fetching);

        self.search_bar.render(f, chunks[0]);
        self.result_list.render(f, chunks[1]);
        self.history_panel.render(f, chunks[2]);

        if let Some(error) = &state.ui.error {
            let banner = Paragraph::new(error.clone())
                .style(Style::default().fg(Color::White).bg(Color::Red));
            f.render_widget(banner, chunks[3]);
        }
    }

    fn render_detail_mode(&mut self, f: &mut Frame, state: &AppState) {
        if let Some(movie) = &state.ui.selected_movie {
            self.movie_detail.set_movie(movie.clone());
            self.movie_detail.render(f, f.area());
        }
    }

    pub fn get_search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }

    pub fn get_result_list_mut(&mut self) -> &mut ResultList {
        &mut self.result_list
    }

    pub fn get_movie_detail_mut(&mut self) -> &mut MovieDetail {
        &mut self.movie_detail
    }

    pub fn get_help_dialog_mut(&mut self) -> &mut HelpDialog {
        &mut self.help_dialog
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
