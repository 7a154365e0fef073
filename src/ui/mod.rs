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

mod chat;
mod layout;
mod sidebar;
pub mod theme;

pub use chat::{header_title, message_line};
pub use layout::split_width;

use crate::app::App;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn render(frame: &mut Frame, app: &mut App) {
    let frame_area = frame.area();
    app.cached_frame_area = frame_area;

    // Nothing is drawn before the first viewport measurement.
    let Some(size) = app.viewport.size() else {
        render_unmeasured(frame, frame_area);
        return;
    };

    let area = Rect {
        x: frame_area.x,
        y: frame_area.y,
        width: frame_area.width.min(size.width),
        height: frame_area.height.min(size.height),
    };
    let areas = layout::compute(area);

    sidebar::render(frame, areas.sidebar_title, areas.sidebar_rows, app);
    render_divider(frame, areas.divider);
    chat::render(frame, areas.chat_header, areas.chat_body, app);

    if let Some(footer_area) = areas.footer {
        render_footer(frame, footer_area, app);
    }
}

fn render_unmeasured(frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let line = Line::from(Span::styled("Measuring viewport...", Style::default().fg(theme::DIM)));
    frame.render_widget(Paragraph::new(line), area);
}

fn render_divider(frame: &mut Frame, area: Rect) {
    if area.width == 0 {
        return;
    }
    let lines: Vec<Line<'static>> = (0..area.height)
        .map(|_| Line::from(Span::styled(theme::DIVIDER_CHAR, Style::default().fg(theme::DIVIDER))))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

const FOOTER_PAD: u16 = 2;
const FOOTER_COLUMN_GAP: u16 = 1;

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let padded = Rect {
        x: area.x + FOOTER_PAD,
        y: area.y,
        width: area.width.saturating_sub(FOOTER_PAD * 2),
        height: area.height,
    };

    let hints = Line::from(vec![
        Span::styled("\u{2191}/\u{2193}", Style::default().fg(Color::White)),
        Span::styled(" chats  ", Style::default().fg(theme::DIM)),
        Span::styled("wheel", Style::default().fg(Color::White)),
        Span::styled(" scroll  ", Style::default().fg(theme::DIM)),
        Span::styled("q", Style::default().fg(Color::White)),
        Span::styled(" quit", Style::default().fg(theme::DIM)),
    ]);

    let (left_area, right_area) = split_footer_columns(padded);
    frame.render_widget(Paragraph::new(hints), left_area);
    render_footer_right_info(frame, right_area, &footer_status(app));
}

fn footer_status(app: &App) -> String {
    format!("{} chats \u{b7} {} messages", app.chats.len(), app.feed.len())
}

fn split_footer_columns(area: Rect) -> (Rect, Rect) {
    if area.width == 0 {
        return (area, Rect { width: 0, ..area });
    }

    let gap = if area.width > 2 { FOOTER_COLUMN_GAP } else { 0 };
    let usable_width = area.width.saturating_sub(gap);
    let left_width = usable_width.saturating_add(1) / 2;
    let right_width = usable_width.saturating_sub(left_width);

    let left = Rect { width: left_width, ..area };
    let right = Rect {
        x: area.x.saturating_add(left_width).saturating_add(gap),
        width: right_width,
        ..area
    };
    (left, right)
}

fn fit_footer_right_text(text: &str, max_width: usize) -> Option<String> {
    if max_width == 0 || text.trim().is_empty() {
        return None;
    }

    if UnicodeWidthStr::width(text) <= max_width {
        return Some(text.to_owned());
    }

    if max_width <= 3 {
        return Some(".".repeat(max_width));
    }

    let mut fitted = String::new();
    let mut width: usize = 0;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width.saturating_add(ch_width).saturating_add(3) > max_width {
            break;
        }
        fitted.push(ch);
        width = width.saturating_add(ch_width);
    }

    if fitted.is_empty() {
        return Some("...".to_owned());
    }
    fitted.push_str("...");
    Some(fitted)
}

fn render_footer_right_info(frame: &mut Frame, area: Rect, right_text: &str) {
    if area.width == 0 {
        return;
    }
    let Some(fitted) = fit_footer_right_text(right_text, usize::from(area.width)) else {
        return;
    };

    let line = Line::from(Span::styled(fitted, Style::default().fg(theme::DIM)));
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Right), area);
}
