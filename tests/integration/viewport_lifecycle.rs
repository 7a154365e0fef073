// =====
// TESTS: 6
// =====
//
// Viewport tracker lifecycle, driven through the terminal event handler.
// Mount, resize, unmount — and what the renderer does before measurement.

use chatpane::app::viewport::ViewportTracker;
use crossterm::event::Event;
use pretty_assertions::assert_eq;

use crate::helpers::{draw, row_text, terminal, test_app};

#[test]
fn resize_events_update_the_tracked_size() {
    let mut app = test_app();
    chatpane::app::handle_terminal_event(&mut app, Event::Resize(200, 50));
    let size = app.viewport.size().expect("size after resize");
    assert_eq!((size.width, size.height), (200, 50));
}

#[test]
fn last_resize_wins() {
    let mut app = test_app();
    chatpane::app::handle_terminal_event(&mut app, Event::Resize(200, 50));
    chatpane::app::handle_terminal_event(&mut app, Event::Resize(90, 30));
    let size = app.viewport.size().expect("size after resize");
    assert_eq!((size.width, size.height), (90, 30));
}

#[test]
fn no_updates_after_unmount() {
    let mut app = test_app();
    app.viewport.unmount();
    chatpane::app::handle_terminal_event(&mut app, Event::Resize(200, 50));
    assert_eq!(app.viewport.size(), None);
}

#[test]
fn unmeasured_viewport_renders_a_placeholder_frame() {
    let mut app = test_app();
    app.viewport = ViewportTracker::unmounted();
    let mut term = terminal(120, 40);
    draw(&mut term, &mut app);
    assert_eq!(row_text(&term, 0), "Measuring viewport...");
    // No panes: nothing below the placeholder line
    assert_eq!(row_text(&term, 1), "");
    assert_eq!(row_text(&term, 39), "");
}

#[test]
fn panes_follow_the_tracked_width() {
    let mut app = test_app();
    let mut term = terminal(120, 40);
    draw(&mut term, &mut app);
    // 120 columns: sidebar 20, divider at x=20
    assert_eq!(row_text(&term, 0).chars().nth(20), Some('\u{2502}'));

    // Shrink the tracked viewport; the divider moves to 60 / 6 = 10
    chatpane::app::handle_terminal_event(&mut app, Event::Resize(60, 40));
    draw(&mut term, &mut app);
    assert_eq!(row_text(&term, 0).chars().nth(10), Some('\u{2502}'));
}

#[test]
fn remount_after_unmount_starts_fresh() {
    let mut app = test_app();
    app.viewport.unmount();
    app.viewport = ViewportTracker::mounted_at(80, 24);
    let size = app.viewport.size().expect("size after remount");
    assert_eq!((size.width, size.height), (80, 24));
}
