// =====
// TESTS: 8
// =====
//
// Chat selection integration tests: clicks and keyboard navigation flowing
// through the event handlers into rendered output.

use crossterm::event::{KeyCode, MouseEventKind};
use pretty_assertions::assert_eq;

use crate::helpers::{click, draw, key, row_text, terminal, test_app, wheel};

#[test]
fn initial_selection_is_chat_zero() {
    let mut app = test_app();
    let mut term = terminal(120, 40);
    draw(&mut term, &mut app);
    assert_eq!(app.selected_chat, 0);
    assert!(row_text(&term, 0).ends_with("Chat with 0"));
}

#[test]
fn clicking_a_sidebar_row_selects_that_chat() {
    let mut app = test_app();
    let mut term = terminal(120, 40);
    draw(&mut term, &mut app);

    // Rows start below the "Chats" title; row y=20 shows chat 19.
    click(&mut app, 3, 20);
    assert_eq!(app.selected_chat, 19);

    draw(&mut term, &mut app);
    assert!(row_text(&term, 0).ends_with("Chat with 19"));
}

#[test]
fn clicking_row_42_renders_chat_with_42_in_the_header() {
    let mut app = test_app();
    let mut term = terminal(120, 40);
    app.sidebar_scroll = 23;
    draw(&mut term, &mut app);

    // With the roster scrolled to 23, row y=20 shows chat 23 + 19 = 42.
    click(&mut app, 3, 20);
    assert_eq!(app.selected_chat, 42);
    assert_eq!(chatpane::ui::header_title(&app), "Chat with 42");

    draw(&mut term, &mut app);
    assert!(row_text(&term, 0).ends_with("Chat with 42"));
}

#[test]
fn clicking_selects_exactly_one_chat() {
    let mut app = test_app();
    let mut term = terminal(120, 40);
    draw(&mut term, &mut app);

    let scroll_before = app.sidebar_scroll;
    click(&mut app, 3, 10);
    assert_eq!(app.selected_chat, 9);
    // The click changes the selection and nothing else.
    assert_eq!(app.sidebar_scroll, scroll_before);
    assert_eq!(app.feed.fetch_requests(), 0);
    assert!(!app.should_quit);
}

#[test]
fn clicking_the_divider_changes_nothing() {
    let mut app = test_app();
    let mut term = terminal(120, 40);
    draw(&mut term, &mut app);
    click(&mut app, 20, 10);
    assert_eq!(app.selected_chat, 0);
}

#[test]
fn keyboard_navigation_walks_the_roster() {
    let mut app = test_app();
    let mut term = terminal(120, 40);
    draw(&mut term, &mut app);

    key(&mut app, KeyCode::Down);
    key(&mut app, KeyCode::Down);
    key(&mut app, KeyCode::Down);
    key(&mut app, KeyCode::Up);
    assert_eq!(app.selected_chat, 2);

    draw(&mut term, &mut app);
    assert!(row_text(&term, 0).ends_with("Chat with 2"));
}

#[test]
fn wheel_scrolling_the_roster_keeps_the_selection() {
    let mut app = test_app();
    let mut term = terminal(120, 40);
    draw(&mut term, &mut app);

    wheel(&mut app, MouseEventKind::ScrollDown, 3, 10);
    wheel(&mut app, MouseEventKind::ScrollDown, 3, 10);
    draw(&mut term, &mut app);
    assert_eq!(app.sidebar_scroll, 6);
    assert_eq!(app.selected_chat, 0);
    // The selected row scrolled out of the window; the header still names it.
    assert!(row_text(&term, 0).ends_with("Chat with 0"));
    assert!(row_text(&term, 1).starts_with("Chat with 6"));
}

#[test]
fn q_quits_the_event_loop() {
    let mut app = test_app();
    key(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}
