use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use crate::api::MovieClient;
use crate::interactive::application::api_service::ApiService;
use crate::interactive::domain::models::{ApiRequest, ApiResponse};

fn spawn_stub(body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
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

#[test]
fn search_call_echoes_request_id() {
    let base = spawn_stub(r#"{"succeeded": true, "data": {"title": "Inception"}}"#);
    let service = ApiService::new(MovieClient::new(&base).unwrap());

    let response = service.call(ApiRequest::Search {
        id: 7,
        title: "Inception".to_string(),
    });

    match response {
        ApiResponse::Search { id, outcome } => {
            assert_eq!(id, 7);
            assert_eq!(outcome.unwrap().title, "Inception");
        }
        other => panic!("expected search response, got {other:?}"),
    }
}

#[test]
fn failed_search_is_rendered_for_the_user() {
    let base = spawn_stub(r#"{"succeeded": false, "message": "Title required"}"#);
    let service = ApiService::new(MovieClient::new(&base).unwrap());

    let response = service.call(ApiRequest::Search {
        id: 1,
        title: String::new(),
    });

    match response {
        ApiResponse::Search { outcome, .. } => {
            assert_eq!(outcome.unwrap_err(), "Title required");
        }
        other => panic!("expected search response, got {other:?}"),
    }
}

#[test]
fn history_call_uses_its_own_fallback() {
    let base = spawn_stub(r#"{"succeeded": false}"#);
    let service = ApiService::new(MovieClient::new(&base).unwrap());

    let response = service.call(ApiRequest::History { id: 3 });

    match response {
        ApiResponse::History { id, outcome } => {
            assert_eq!(id, 3);
            assert_eq!(
                outcome.unwrap_err(),
                "Error fetching search history. Please try again."
            );
        }
        other => panic!("expected history response, got {other:?}"),
    }
}
