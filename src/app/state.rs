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

use super::roster::{ChatEntry, Message, MessageFeed};
use super::viewport::ViewportTracker;
use ratatui::layout::Rect;

pub struct App {
    /// Scoped terminal-size subscription; mounted by `run_tui`, released on exit.
    pub viewport: ViewportTracker,
    pub chats: Vec<ChatEntry>,
    pub messages: Vec<Message>,
    pub feed: MessageFeed,
    /// Index into `chats`. Mutated only through `select_chat` and friends.
    pub selected_chat: usize,
    pub should_quit: bool,
    /// Force a full terminal clear on next render frame.
    pub force_redraw: bool,
    /// Rendered feed scroll offset (rounded from `scroll_pos`).
    pub scroll_offset: usize,
    /// Target feed scroll offset requested by user input or auto-follow.
    pub scroll_target: usize,
    /// Smooth scroll position (fractional) for animation.
    pub scroll_pos: f32,
    /// Keep the feed pinned to the newest message until the user scrolls up.
    pub auto_follow: bool,
    /// First roster row visible in the sidebar.
    pub sidebar_scroll: usize,
    /// Last known frame area (for mouse hit-testing).
    pub cached_frame_area: Rect,
    /// Current selection state for mouse-based selection.
    pub selection: Option<SelectionState>,
    /// Cached rendered feed lines for selection/copy.
    pub rendered_chat_lines: Vec<String>,
    /// Area where the feed was rendered (for selection and wheel mapping).
    pub rendered_chat_area: Rect,
    /// Area where the sidebar rows were rendered (for click mapping).
    pub rendered_sidebar_rows: Rect,
}

impl App {
    #[must_use]
    pub fn new(chats: Vec<ChatEntry>, messages: Vec<Message>) -> Self {
        let feed = MessageFeed::new(&messages);
        Self {
            viewport: ViewportTracker::unmounted(),
            chats,
            messages,
            feed,
            selected_chat: 0,
            should_quit: false,
            force_redraw: false,
            scroll_offset: 0,
            scroll_target: 0,
            scroll_pos: 0.0,
            auto_follow: true,
            sidebar_scroll: 0,
            cached_frame_area: Rect::default(),
            selection: None,
            rendered_chat_lines: Vec::new(),
            rendered_chat_area: Rect::default(),
            rendered_sidebar_rows: Rect::default(),
        }
    }

    /// Build a minimal `App` with a mounted 120x40 viewport and the default
    /// demo data. No real terminal — just state, for tests.
    #[must_use]
    pub fn test_default() -> Self {
        let mut app = Self::new(
            super::roster::demo_chats(super::roster::DEFAULT_CHAT_COUNT),
            super::roster::demo_transcript(super::roster::DEFAULT_MESSAGE_COUNT),
        );
        app.viewport = ViewportTracker::mounted_at(120, 40);
        app
    }

    /// Select the chat with index `id`. Out-of-range requests are ignored;
    /// nothing else changes either way.
    pub fn select_chat(&mut self, id: usize) {
        if id >= self.chats.len() {
            tracing::debug!(id, roster = self.chats.len(), "selection out of range, ignored");
            return;
        }
        self.selected_chat = id;
    }

    pub fn select_prev_chat(&mut self) {
        self.select_chat(self.selected_chat.saturating_sub(1));
        self.scroll_selected_into_view();
    }

    pub fn select_next_chat(&mut self) {
        self.select_chat(
            self.selected_chat.saturating_add(1).min(self.chats.len().saturating_sub(1)),
        );
        self.scroll_selected_into_view();
    }

    /// Keep the keyboard selection inside the visible sidebar window.
    /// Mouse clicks leave the window position unchanged.
    fn scroll_selected_into_view(&mut self) {
        let visible = usize::from(self.rendered_sidebar_rows.height).max(1);
        if self.selected_chat < self.sidebar_scroll {
            self.sidebar_scroll = self.selected_chat;
        } else if self.selected_chat >= self.sidebar_scroll.saturating_add(visible) {
            self.sidebar_scroll = self.selected_chat.saturating_add(1).saturating_sub(visible);
        }
    }

    /// Scroll the feed toward older messages. At the top, ask the feed for an
    /// older page instead (a no-op while `has_more` is false).
    pub fn scroll_feed_up(&mut self, lines: usize) {
        if self.scroll_target == 0 {
            self.feed.request_older_page();
            return;
        }
        self.scroll_target = self.scroll_target.saturating_sub(lines);
        self.auto_follow = false;
    }

    /// Scroll the feed toward the newest message. Clamped during render.
    pub fn scroll_feed_down(&mut self, lines: usize) {
        self.scroll_target = self.scroll_target.saturating_add(lines);
    }

    /// Jump back to the newest message and re-engage auto-follow.
    pub fn follow_newest(&mut self) {
        self.auto_follow = true;
    }

    /// One page of feed scrolling, from the last rendered feed height.
    #[must_use]
    pub fn feed_page_lines(&self) -> usize {
        usize::from(self.rendered_chat_area.height).max(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionPoint {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    pub start: SelectionPoint,
    pub end: SelectionPoint,
    pub dragging: bool,
}
