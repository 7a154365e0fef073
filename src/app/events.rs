// chatpane — A two-pane chat layout for the terminal
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use super::selection::try_copy_selection;
use super::state::{App, SelectionPoint, SelectionState};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

pub fn handle_terminal_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            handle_key(app, key);
        }
        Event::Mouse(mouse) => {
            handle_mouse_event(app, mouse);
        }
        Event::Resize(width, height) => {
            app.viewport.on_resize(width, height);
        }
        _ => {}
    }
}

const MOUSE_SCROLL_LINES: usize = 3;

fn handle_key(app: &mut App, key: KeyEvent) {
    match (key.code, key.modifiers) {
        // Ctrl+C: copy an active selection, otherwise quit
        (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => {
            if try_copy_selection(app) {
                return;
            }
            app.should_quit = true;
        }
        (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => {
            app.should_quit = true;
        }
        // Roster navigation
        (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.select_prev_chat(),
        (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.select_next_chat(),
        // Feed scrolling
        (KeyCode::PageUp, _) => app.scroll_feed_up(app.feed_page_lines()),
        (KeyCode::PageDown, _) => app.scroll_feed_down(app.feed_page_lines()),
        (KeyCode::End, _) => app.follow_newest(),
        // Ctrl+L: force full terminal redraw
        (KeyCode::Char('l'), m) if m.contains(KeyModifiers::CONTROL) => {
            app.force_redraw = true;
        }
        _ => {}
    }
}

fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(id) = sidebar_row_at(app, mouse.column, mouse.row) {
                app.select_chat(id);
            } else if let Some(point) = chat_point_at(app, mouse.column, mouse.row) {
                app.selection = Some(SelectionState { start: point, end: point, dragging: true });
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            let point = chat_point_at(app, mouse.column, mouse.row);
            if let (Some(sel), Some(point)) = (&mut app.selection, point) {
                sel.end = point;
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if let Some(sel) = &mut app.selection {
                sel.dragging = false;
            }
        }
        _ => {}
    }
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            if area_contains(app.rendered_sidebar_rows, mouse.column, mouse.row) {
                app.sidebar_scroll = app.sidebar_scroll.saturating_sub(MOUSE_SCROLL_LINES);
            } else {
                app.scroll_feed_up(MOUSE_SCROLL_LINES);
            }
        }
        MouseEventKind::ScrollDown => {
            if area_contains(app.rendered_sidebar_rows, mouse.column, mouse.row) {
                // Clamped against the roster length during sidebar render
                app.sidebar_scroll = app.sidebar_scroll.saturating_add(MOUSE_SCROLL_LINES);
            } else {
                app.scroll_feed_down(MOUSE_SCROLL_LINES);
            }
        }
        _ => {}
    }
}

/// Map a mouse position to the roster index of the sidebar row under it.
fn sidebar_row_at(app: &App, column: u16, row: u16) -> Option<usize> {
    let area = app.rendered_sidebar_rows;
    if !area_contains(area, column, row) {
        return None;
    }
    let id = app.sidebar_scroll.saturating_add(usize::from(row - area.y));
    (id < app.chats.len()).then_some(id)
}

fn chat_point_at(app: &App, column: u16, row: u16) -> Option<SelectionPoint> {
    let area = app.rendered_chat_area;
    if !area_contains(area, column, row) {
        return None;
    }
    Some(SelectionPoint {
        row: usize::from(row - area.y),
        col: usize::from(column - area.x),
    })
}

fn area_contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}
