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

use crate::app::App;
use crate::ui::theme;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, title_area: Rect, rows_area: Rect, app: &mut App) {
    let title = Line::from(Span::styled(
        "Chats",
        Style::default().fg(theme::SIDEBAR_TITLE).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(title), title_area);

    app.sidebar_scroll = clamp_scroll(app.sidebar_scroll, app.chats.len(), rows_area.height);
    let lines: Vec<Line<'static>> = visible_rows(app, rows_area.height)
        .map(|id| row_line(app, id))
        .collect();
    frame.render_widget(Paragraph::new(lines), rows_area);

    // Remember where the rows landed so clicks and wheel events map back.
    app.rendered_sidebar_rows = rows_area;
}

/// Clamp the first visible row so the window never scrolls past the roster.
fn clamp_scroll(scroll: usize, roster_len: usize, height: u16) -> usize {
    scroll.min(roster_len.saturating_sub(usize::from(height)))
}

fn visible_rows(app: &App, height: u16) -> std::ops::Range<usize> {
    let start = app.sidebar_scroll;
    let end = start.saturating_add(usize::from(height)).min(app.chats.len());
    start..end
}

fn row_line(app: &App, id: usize) -> Line<'static> {
    let label = app.chats[id].label();
    if id == app.selected_chat {
        Line::from(Span::styled(
            label,
            Style::default().fg(theme::ROW_SELECTED).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::raw(label))
    }
}
