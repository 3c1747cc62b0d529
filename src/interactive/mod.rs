use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};
use tracing::warn;

use crate::api::MovieClient;

mod application;
pub mod constants;
mod domain;
pub mod ui;

#[cfg(test)]
mod integration_tests;

use self::application::api_service::ApiService;
use self::constants::{DOUBLE_CTRL_C_TIMEOUT_SECS, EVENT_POLL_INTERVAL_MS, STATUS_CLEAR_DELAY_MS};
use self::domain::models::{ApiRequest, ApiResponse, Mode};
use self::ui::components::Component;
use self::ui::{app_state::AppState, commands::Command, events::Message, renderer::Renderer};

/// The interactive movie-search screen.
///
/// Owns the view state, the renderer, and the channel pair to the API
/// worker thread. All state mutation happens on this thread through
/// `AppState::update`; the worker only ever computes responses.
pub struct InteractiveSearch {
    state: AppState,
    renderer: Renderer,
    api_service: Option<ApiService>,
    api_sender: Option<Sender<ApiRequest>>,
    api_receiver: Option<Receiver<ApiResponse>>,
    last_ctrl_c_press: Option<Instant>,
    status_timer: Option<Instant>,
}

impl InteractiveSearch {
    pub fn new(client: MovieClient) -> Self {
        Self {
            state: AppState::new(),
            renderer: Renderer::new(),
            api_service: Some(ApiService::new(client)),
            api_sender: None,
            api_receiver: None,
            last_ctrl_c_press: None,
            status_timer: None,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = self.setup_terminal()?;

        let (tx, rx) = self.start_api_worker();
        self.api_sender = Some(tx);
        self.api_receiver = Some(rx);

        let result = self.run_app(&mut terminal);

        self.cleanup_terminal(&mut terminal)?;
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                self.renderer.render(f, &self.state);
            })?;

            self.drain_api_responses();

            // Expire the transient status line (e.g. the quit prompt).
            if let Some(timer) = self.status_timer {
                if timer.elapsed() >= Duration::from_millis(STATUS_CLEAR_DELAY_MS) {
                    self.status_timer = None;
                    self.handle_message(Message::ClearStatus);
                }
            }

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if self.handle_input(key)? {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    /// Apply completed API calls, dropping any response whose generation id
    /// is no longer the latest issued request of its kind.
    fn drain_api_responses(&mut self) {
        let Some(receiver) = &self.api_receiver else {
            return;
        };

        let mut messages = Vec::new();
        while let Ok(response) = receiver.try_recv() {
            match response {
                ApiResponse::Search { id, outcome } => {
                    if id != self.state.search.current_search_id {
                        continue; // stale: a newer search was issued
                    }
                    messages.push(match outcome {
                        Ok(movie) => Message::SearchCompleted(movie),
                        Err(error) => Message::SearchFailed(error),
                    });
                }
                ApiResponse::History { id, outcome } => {
                    if id != self.state.history.current_fetch_id {
                        continue;
                    }
                    messages.push(match outcome {
                        Ok(entries) => Message::HistoryLoaded(entries),
                        Err(error) => Message::HistoryFailed(error),
                    });
                }
            }
        }

        for message in messages {
            self.handle_message(message);
        }
    }

    fn handle_input(&mut self, key: KeyEvent) -> Result<bool> {
        // Global double-Ctrl+C exit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    return Ok(true);
                }
            }
            self.last_ctrl_c_press = Some(Instant::now());
            self.status_timer = Some(Instant::now());
            self.handle_message(Message::SetStatus("Press Ctrl+C again to exit".to_string()));
            return Ok(false);
        }

        if key.code == KeyCode::Char('?') && self.state.mode != Mode::Help {
            self.handle_message(Message::ShowHelp);
            return Ok(false);
        }

        if key.code == KeyCode::Esc && self.state.mode == Mode::Search {
            return Ok(true);
        }

        let message = match self.state.mode {
            Mode::Search => self.handle_search_mode_input(key),
            Mode::MovieDetail => self.renderer.get_movie_detail_mut().handle_key(key),
            Mode::Help => self.renderer.get_help_dialog_mut().handle_key(key),
        };

        if let Some(msg) = message {
            self.handle_message(msg);
        }

        Ok(false)
    }

    fn handle_search_mode_input(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Enter => Some(Message::SearchRequested),
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Message::HistoryRequested)
            }
            KeyCode::Up | KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown => {
                self.renderer.get_result_list_mut().handle_key(key)
            }
            KeyCode::Char('o') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.renderer.get_result_list_mut().handle_key(key)
            }
            _ => self.renderer.get_search_bar_mut().handle_key(key),
        }
    }

    fn handle_message(&mut self, message: Message) {
        let command = self.state.update(message);
        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::ExecuteSearch => {
                let request = ApiRequest::Search {
                    id: self.state.search.current_search_id,
                    title: self.state.search.query.clone(),
                };
                self.dispatch(request);
            }
            Command::FetchHistory => {
                let request = ApiRequest::History {
                    id: self.state.history.current_fetch_id,
                };
                self.dispatch(request);
            }
        }
    }

    fn dispatch(&mut self, request: ApiRequest) {
        if let Some(sender) = &self.api_sender {
            if sender.send(request).is_err() {
                warn!("api worker is gone; dropping request");
            }
        }
    }

    /// One worker thread serves both endpoints: requests queue in order,
    /// responses come back tagged with their generation id.
    fn start_api_worker(&mut self) -> (Sender<ApiRequest>, Receiver<ApiResponse>) {
        let (request_tx, request_rx) = mpsc::channel::<ApiRequest>();
        let (response_tx, response_rx) = mpsc::channel::<ApiResponse>();

        if let Some(service) = self.api_service.take() {
            thread::spawn(move || {
                while let Ok(request) = request_rx.recv() {
                    if response_tx.send(service.call(request)).is_err() {
                        break;
                    }
                }
            });
        }

        (request_tx, response_rx)
    }
}
