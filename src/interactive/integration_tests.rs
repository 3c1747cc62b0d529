use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use super::*;
use crate::schemas::Movie;

fn spawn_stub(body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        while let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len(),
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });
    format!("http://{addr}")
}

/// Client pointing at a port nothing listens on; used by tests that never
/// let a request reach the wire.
fn offline_app() -> InteractiveSearch {
    InteractiveSearch::new(MovieClient::new("http://127.0.0.1:9").unwrap())
}

fn wait_until(app: &mut InteractiveSearch, mut done: impl FnMut(&AppState) -> bool) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while !done(&app.state) {
        assert!(Instant::now() < deadline, "timed out waiting for response");
        app.drain_api_responses();
        thread::sleep(Duration::from_millis(10));
    }
}

#[test]
fn search_round_trip_through_the_worker() {
    let base = spawn_stub(
        r#"{"succeeded": true, "data": {"imdbID": "tt1375666", "title": "Inception", "imdbRating": "8.8"}}"#,
    );
    let mut app = InteractiveSearch::new(MovieClient::new(&base).unwrap());
    let (tx, rx) = app.start_api_worker();
    app.api_sender = Some(tx);
    app.api_receiver = Some(rx);

    app.handle_message(Message::QueryChanged("Inception".to_string()));
    app.handle_message(Message::SearchRequested);
    assert!(app.state.search.is_searching);

    wait_until(&mut app, |state| !state.search.results.is_empty());

    assert_eq!(app.state.search.results[0].title, "Inception");
    assert!(!app.state.search.is_searching);
    assert!(app.state.ui.error.is_none());
}

#[test]
fn history_round_trip_through_the_worker() {
    let base = spawn_stub(r#"{"succeeded": true, "data": ["Inception", "Heat"]}"#);
    let mut app = InteractiveSearch::new(MovieClient::new(&base).unwrap());
    let (tx, rx) = app.start_api_worker();
    app.api_sender = Some(tx);
    app.api_receiver = Some(rx);

    app.handle_message(Message::HistoryRequested);
    wait_until(&mut app, |state| !state.history.entries.is_empty());

    assert_eq!(app.state.history.entries, vec!["Inception", "Heat"]);
}

#[test]
fn unreachable_server_surfaces_network_error() {
    let mut app = offline_app();
    let (tx, rx) = app.start_api_worker();
    app.api_sender = Some(tx);
    app.api_receiver = Some(rx);

    app.handle_message(Message::SearchRequested);
    wait_until(&mut app, |state| state.ui.error.is_some());

    assert_eq!(
        app.state.ui.error.as_deref(),
        Some("Network Error: Unable to reach the server.")
    );
}

#[test]
fn stale_search_response_is_discarded() {
    let mut app = offline_app();
    let (response_tx, response_rx) = mpsc::channel();
    app.api_receiver = Some(response_rx);

    // Two searches issued; only generation 2 may land.
    app.state.update(Message::SearchRequested);
    app.state.update(Message::SearchRequested);
    assert_eq!(app.state.search.current_search_id, 2);

    response_tx
        .send(ApiResponse::Search {
            id: 1,
            outcome: Ok(Movie {
                title: "Stale".to_string(),
                ..Movie::default()
            }),
        })
        .unwrap();
    app.drain_api_responses();

    assert!(app.state.search.results.is_empty());
    assert!(app.state.search.is_searching);

    response_tx
        .send(ApiResponse::Search {
            id: 2,
            outcome: Ok(Movie {
                title: "Fresh".to_string(),
                ..Movie::default()
            }),
        })
        .unwrap();
    app.drain_api_responses();

    assert_eq!(app.state.search.results[0].title, "Fresh");
    assert!(!app.state.search.is_searching);
}

#[test]
fn stale_history_response_is_discarded() {
    let mut app = offline_app();
    let (response_tx, response_rx) = mpsc::channel();
    app.api_receiver = Some(response_rx);

    app.state.update(Message::HistoryRequested);
    app.state.update(Message::HistoryRequested);

    response_tx
        .send(ApiResponse::History {
            id: 1,
            outcome: Ok(vec!["stale".to_string()]),
        })
        .unwrap();
    app.drain_api_responses();
    assert!(app.state.history.entries.is_empty());

    response_tx
        .send(ApiResponse::History {
            id: 2,
            outcome: Ok(vec!["fresh".to_string()]),
        })
        .unwrap();
    app.drain_api_responses();
    assert_eq!(app.state.history.entries, vec!["fresh"]);
}

#[test]
fn search_failure_then_success_clears_the_banner() {
    let mut app = offline_app();
    let (response_tx, response_rx) = mpsc::channel();
    app.api_receiver = Some(response_rx);

    app.state.update(Message::SearchRequested);
    response_tx
        .send(ApiResponse::Search {
            id: 1,
            outcome: Err("Title required".to_string()),
        })
        .unwrap();
    app.drain_api_responses();
    assert_eq!(app.state.ui.error.as_deref(), Some("Title required"));

    app.state.update(Message::SearchRequested);
    response_tx
        .send(ApiResponse::Search {
            id: 2,
            outcome: Ok(Movie {
                title: "Inception".to_string(),
                ..Movie::default()
            }),
        })
        .unwrap();
    app.drain_api_responses();

    assert!(app.state.ui.error.is_none());
    assert_eq!(app.state.search.results[0].title, "Inception");
}
