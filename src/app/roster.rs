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

pub const DEFAULT_CHAT_COUNT: usize = 160;
pub const DEFAULT_MESSAGE_COUNT: usize = 90;

/// One selectable entry in the sidebar roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    pub id: usize,
}

impl ChatEntry {
    #[must_use]
    pub fn label(&self) -> String {
        format!("Chat with {}", self.id)
    }
}

/// One row of the demo transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: usize,
}

impl Message {
    /// Placeholder grouping rule: two of every three messages are "mine"
    /// (right-aligned). Not tied to any real sender identity.
    #[must_use]
    pub fn is_mine(&self) -> bool {
        self.id % 3 != 0
    }

    #[must_use]
    pub fn body(&self) -> String {
        format!("Message {}", self.id)
    }
}

#[must_use]
pub fn demo_chats(count: usize) -> Vec<ChatEntry> {
    (0..count).map(|id| ChatEntry { id }).collect()
}

#[must_use]
pub fn demo_transcript(count: usize) -> Vec<Message> {
    (0..count).map(|id| Message { id }).collect()
}

/// Placeholder paging state for the message feed.
///
/// The declared length is derived from the transcript the feed was built
/// over, so it cannot drift from the number of rows actually rendered.
/// `has_more` is false for the scaffold: scrolling past the oldest loaded
/// message asks for an older page, and the request is counted but loads
/// nothing.
#[derive(Debug)]
pub struct MessageFeed {
    len: usize,
    has_more: bool,
    fetch_requests: usize,
}

impl MessageFeed {
    #[must_use]
    pub fn new(transcript: &[Message]) -> Self {
        Self { len: transcript.len(), has_more: false, fetch_requests: 0 }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Ask for a page of older messages. Returns whether anything new was
    /// loaded — always false while `has_more` is false.
    pub fn request_older_page(&mut self) -> bool {
        self.fetch_requests = self.fetch_requests.saturating_add(1);
        if !self.has_more {
            tracing::debug!(requests = self.fetch_requests, "older page requested, none available");
            return false;
        }
        false
    }

    /// How many times an older page was requested.
    #[must_use]
    pub fn fetch_requests(&self) -> usize {
        self.fetch_requests
    }
}
