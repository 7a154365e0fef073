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
use crate::app::roster::{ChatEntry, Message};
use crate::ui::theme;
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Paragraph, Widget, Wrap};

pub fn render(frame: &mut Frame, header_area: Rect, body_area: Rect, app: &mut App) {
    render_header(frame, header_area, app);
    render_feed(frame, body_area, app);

    if let Some(sel) = app.selection {
        frame.render_widget(SelectionOverlay { selection: sel }, app.rendered_chat_area);
    }
}

/// Header text for the chat pane: the selected chat's label.
pub fn header_title(app: &App) -> String {
    app.chats.get(app.selected_chat).map_or_else(|| "No chats".to_owned(), ChatEntry::label)
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let line = Line::from(Span::styled(
        header_title(app),
        Style::default().fg(theme::CHAT_HEADER).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

/// One feed row. Two of every three messages are "mine" and sit flush right;
/// the rest sit flush left (a `Line` without an alignment inherits the
/// paragraph default, left).
pub fn message_line(msg: &Message) -> Line<'static> {
    if msg.is_mine() {
        Line::from(Span::styled(msg.body(), Style::default().fg(theme::MSG_MINE)))
            .alignment(Alignment::Right)
    } else {
        Line::from(Span::styled(msg.body(), Style::default().fg(theme::MSG_THEIRS)))
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
fn render_feed(frame: &mut Frame, area: Rect, app: &mut App) {
    let lines: Vec<Line<'static>> = app.messages.iter().map(message_line).collect();

    // Build paragraph once — line_count gives the real wrapped height
    let paragraph = Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false });
    let content_height = paragraph.line_count(area.width);
    let viewport_height = usize::from(area.height);

    if content_height <= viewport_height {
        // Short transcript: bottom-anchor in a sub-rect (reversed flow, the
        // newest message hugs the bottom edge)
        let offset = (viewport_height - content_height) as u16;
        let render_area = Rect {
            x: area.x,
            y: area.y + offset,
            width: area.width,
            height: content_height as u16,
        };
        app.scroll_offset = 0;
        app.scroll_target = 0;
        app.scroll_pos = 0.0;
        app.auto_follow = true;
        app.rendered_chat_area = render_area;
        app.rendered_chat_lines = render_lines_from_paragraph(&paragraph, render_area, 0);
        frame.render_widget(paragraph, render_area);
    } else {
        // Long transcript: scroll within the full viewport
        let max_scroll = content_height - viewport_height;
        if app.auto_follow {
            app.scroll_target = max_scroll;
        }
        app.scroll_target = app.scroll_target.min(max_scroll);

        let target = app.scroll_target as f32;
        let delta = target - app.scroll_pos;
        if delta.abs() < 0.01 {
            app.scroll_pos = target;
        } else {
            // Smooth over a few frames
            app.scroll_pos += delta * 0.5;
        }
        app.scroll_offset = app.scroll_pos.round() as usize;
        if app.scroll_offset >= max_scroll {
            app.auto_follow = true;
        }
        app.rendered_chat_area = area;
        app.rendered_chat_lines = render_lines_from_paragraph(&paragraph, area, app.scroll_offset);
        frame.render_widget(paragraph.scroll((app.scroll_offset as u16, 0)), area);
    }
}

struct SelectionOverlay {
    selection: crate::app::SelectionState,
}

impl Widget for SelectionOverlay {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (start, end) =
            crate::app::normalize_selection(self.selection.start, self.selection.end);
        for row in start.row..=end.row {
            let y = area.y.saturating_add(row as u16);
            if y >= area.bottom() {
                break;
            }
            let row_start = if row == start.row { start.col } else { 0 };
            let row_end = if row == end.row { end.col } else { usize::from(area.width) };
            for col in row_start..row_end {
                let x = area.x.saturating_add(col as u16);
                if x >= area.right() {
                    break;
                }
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_style(cell.style().add_modifier(Modifier::REVERSED));
                }
            }
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn render_lines_from_paragraph(
    paragraph: &Paragraph,
    area: Rect,
    scroll_offset: usize,
) -> Vec<String> {
    let mut buf = Buffer::empty(area);
    let widget = paragraph.clone().scroll((scroll_offset as u16, 0));
    widget.render(area, &mut buf);
    let mut lines = Vec::with_capacity(usize::from(area.height));
    for y in 0..area.height {
        let mut line = String::new();
        for x in 0..area.width {
            if let Some(cell) = buf.cell((area.x + x, area.y + y)) {
                line.push_str(cell.symbol());
            }
        }
        lines.push(line.trim_end().to_owned());
    }
    lines
}
