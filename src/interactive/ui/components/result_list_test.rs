use crate::interactive::ui::components::Component;
use crate::interactive::ui::components::result_list::ResultList;
use crate::interactive::ui::events::Message;
use crate::schemas::Movie;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn movies(titles: &[&str]) -> Vec<Movie> {
    titles
        .iter()
        .map(|title| Movie {
            title: title.to_string(),
            ..Movie::default()
        })
        .collect()
}

#[test]
fn arrows_move_selection_within_bounds() {
    let mut list = ResultList::new();
    list.set_results(movies(&["a", "b", "c"]));

    assert!(list.handle_key(key(KeyCode::Up)).is_none());
    assert_eq!(list.selected_index(), 0);

    let msg = list.handle_key(key(KeyCode::Down));
    assert!(matches!(msg, Some(Message::SelectResult(1))));

    list.handle_key(key(KeyCode::Down));
    assert_eq!(list.selected_index(), 2);

    // Already at the bottom.
    assert!(list.handle_key(key(KeyCode::Down)).is_none());
    assert_eq!(list.selected_index(), 2);
}

#[test]
fn home_and_end_jump_to_edges() {
    let mut list = ResultList::new();
    list.set_results(movies(&["a", "b", "c"]));
    list.set_selected_index(1);

    let msg = list.handle_key(key(KeyCode::End));
    assert!(matches!(msg, Some(Message::SelectResult(2))));

    let msg = list.handle_key(key(KeyCode::Home));
    assert!(matches!(msg, Some(Message::SelectResult(0))));
}

#[test]
fn ctrl_o_opens_detail_only_with_results() {
    let mut list = ResultList::new();
    let ctrl_o = KeyEvent::new(KeyCode::Char('o'), KeyModifiers::CONTROL);

    assert!(list.handle_key(ctrl_o).is_none());

    list.set_results(movies(&["Inception"]));
    assert!(matches!(
        list.handle_key(ctrl_o),
        Some(Message::EnterMovieDetail)
    ));
}

#[test]
fn replacing_results_clamps_selection() {
    let mut list = ResultList::new();
    list.set_results(movies(&["a", "b", "c"]));
    list.set_selected_index(2);

    list.set_results(movies(&["only"]));
    assert_eq!(list.selected_index(), 0);
    assert_eq!(list.selected_movie().unwrap().title, "only");
}

#[test]
fn empty_list_ignores_navigation() {
    let mut list = ResultList::new();

    assert!(list.handle_key(key(KeyCode::Down)).is_none());
    assert!(list.handle_key(key(KeyCode::End)).is_none());
    assert!(list.selected_movie().is_none());
}
