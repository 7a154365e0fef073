// =====
// TESTS: 8
// =====
//
// Full-frame rendering tests against the ratatui test backend.
// Pane geometry, message alignment, bottom anchoring, footer.

use chatpane::app::App;
use chatpane::app::roster::{demo_chats, demo_transcript};
use chatpane::app::viewport::ViewportTracker;
use chatpane::ui::theme;
use pretty_assertions::assert_eq;
use ratatui::style::Modifier;

use crate::helpers::{draw, draw_settled, row_text, terminal, test_app};

#[test]
fn frame_shows_sidebar_divider_and_header() {
    let mut app = test_app();
    let mut term = terminal(120, 40);
    draw(&mut term, &mut app);

    let top = row_text(&term, 0);
    assert!(top.starts_with("Chats"));
    assert_eq!(top.chars().nth(20), Some('\u{2502}'));
    assert!(top.ends_with("Chat with 0"));
}

#[test]
fn sidebar_lists_chats_top_down() {
    let mut app = test_app();
    let mut term = terminal(120, 40);
    draw(&mut term, &mut app);

    assert!(row_text(&term, 1).starts_with("Chat with 0"));
    assert!(row_text(&term, 2).starts_with("Chat with 1"));
    assert!(row_text(&term, 38).starts_with("Chat with 37"));
}

#[test]
fn selected_row_is_highlighted() {
    let mut app = test_app();
    let mut term = terminal(120, 40);
    draw(&mut term, &mut app);

    let buffer = term.backend().buffer();
    let selected = buffer.cell((0, 1)).expect("cell");
    assert_eq!(selected.style().fg, Some(theme::ROW_SELECTED));
    assert!(selected.style().add_modifier.contains(Modifier::BOLD));
    let other = buffer.cell((0, 2)).expect("cell");
    assert_ne!(other.style().fg, Some(theme::ROW_SELECTED));
}

#[test]
fn divider_runs_the_full_pane_height() {
    let mut app = test_app();
    let mut term = terminal(120, 40);
    draw(&mut term, &mut app);

    let buffer = term.backend().buffer();
    for y in 0..39 {
        let cell = buffer.cell((20, y)).expect("cell");
        assert_eq!(cell.symbol(), "\u{2502}", "row {y}");
        assert_eq!(cell.style().fg, Some(theme::DIVIDER), "row {y}");
    }
}

#[test]
fn feed_follows_the_newest_message() {
    let mut app = test_app();
    let mut term = terminal(120, 40);
    draw_settled(&mut term, &mut app);

    // Newest message hugs the bottom of the feed, flush right.
    let bottom = row_text(&term, 38);
    assert!(bottom.ends_with("Message 89"));
    assert_eq!(bottom.chars().count(), 120);
}

#[test]
fn own_messages_sit_right_and_others_left() {
    let mut app = test_app();
    let mut term = terminal(120, 40);
    draw_settled(&mut term, &mut app);

    // Settled at scroll offset 52: the feed row at y shows message 52 + (y-1).
    // Message 54 (54 % 3 == 0) is "theirs" — flush against the divider.
    let left_row = row_text(&term, 3);
    let feed_cols: String = left_row.chars().skip(21).take(10).collect();
    assert_eq!(feed_cols, "Message 54");
    // Message 53 is "mine" — flush against the right edge.
    let right_row = row_text(&term, 2);
    assert!(right_row.ends_with("Message 53"));
    assert_eq!(right_row.chars().count(), 120);
}

#[test]
fn short_transcript_is_bottom_anchored() {
    let mut app = App::new(demo_chats(160), demo_transcript(10));
    app.viewport = ViewportTracker::mounted_at(120, 40);
    let mut term = terminal(120, 40);
    draw(&mut term, &mut app);

    // Ten messages occupy the last ten feed rows; above them the pane is empty.
    assert!(row_text(&term, 38).ends_with("Message 9"));
    assert!(row_text(&term, 29).ends_with("Message 0"));
    assert_eq!(row_text(&term, 28).chars().nth(21), None);
}

#[test]
fn footer_shows_hints_and_totals() {
    let mut app = test_app();
    let mut term = terminal(120, 40);
    draw(&mut term, &mut app);

    let footer = row_text(&term, 39);
    assert!(footer.contains("quit"));
    assert!(footer.ends_with("160 chats \u{b7} 90 messages"));
}
