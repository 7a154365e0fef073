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

use ratatui::layout::{Constraint, Layout, Rect};

pub struct PaneLayout {
    pub sidebar_title: Rect,
    pub sidebar_rows: Rect,
    /// One-column divider between the panes (zero-width on tiny terminals).
    pub divider: Rect,
    pub chat_header: Rect,
    pub chat_body: Rect,
    pub footer: Option<Rect>,
}

/// Split a viewport width into (sidebar, chat) widths.
///
/// The sidebar takes a sixth of the viewport, the chat pane the remainder;
/// the two always sum back to the full width. Below six columns the sidebar
/// is floored at one column so both panes survive on tiny terminals.
#[must_use]
pub fn split_width(width: u16) -> (u16, u16) {
    if width == 0 {
        return (0, 0);
    }
    let sidebar = (width / 6).max(1);
    (sidebar, width - sidebar)
}

pub fn compute(area: Rect) -> PaneLayout {
    let (sidebar_width, chat_width) = split_width(area.width);

    let (main, footer) = if area.height < 8 {
        // Ultra-compact: no footer
        (area, None)
    } else {
        let [main, footer] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);
        (main, Some(footer))
    };

    // The divider column comes out of the chat pane's share, keeping the
    // sidebar/chat width split exact.
    let divider_width = chat_width.min(1);
    let [sidebar, divider, chat] = Layout::horizontal([
        Constraint::Length(sidebar_width),
        Constraint::Length(divider_width),
        Constraint::Length(chat_width.saturating_sub(divider_width)),
    ])
    .areas(main);

    let [sidebar_title, sidebar_rows] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(sidebar);
    let [chat_header, chat_body] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(chat);

    PaneLayout { sidebar_title, sidebar_rows, divider, chat_header, chat_body, footer }
}
