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

use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportSize {
    pub width: u16,
    pub height: u16,
}

/// Tracks the terminal dimensions over the lifetime of one TUI view.
///
/// The tracker is created unmounted, measured once by `mount()`, fed by the
/// event loop on every resize, and released by `unmount()`. `size()` is `None`
/// before the first measurement and after unmount — consumers must handle the
/// unmeasured case instead of assuming a width is always present.
#[derive(Debug)]
pub struct ViewportTracker {
    size: Option<ViewportSize>,
    mounted: bool,
}

impl ViewportTracker {
    /// A tracker with no subscription and no measurement yet.
    #[must_use]
    pub fn unmounted() -> Self {
        Self { size: None, mounted: false }
    }

    /// A mounted tracker seeded with a known size. Test seam — production
    /// code goes through `mount()`.
    #[must_use]
    pub fn mounted_at(width: u16, height: u16) -> Self {
        Self { size: Some(ViewportSize { width, height }), mounted: true }
    }

    /// Take the initial measurement and start accepting resize events.
    pub fn mount(&mut self) -> io::Result<()> {
        let (width, height) = crossterm::terminal::size()?;
        self.size = Some(ViewportSize { width, height });
        self.mounted = true;
        tracing::debug!(width, height, "viewport mounted");
        Ok(())
    }

    /// Record a new size reported by the terminal. Ignored when unmounted.
    pub fn on_resize(&mut self, width: u16, height: u16) {
        if !self.mounted {
            tracing::debug!(width, height, "resize ignored after unmount");
            return;
        }
        self.size = Some(ViewportSize { width, height });
    }

    /// Release the subscription. Later resize events no longer update the
    /// tracker and `size()` reverts to `None`.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.size = None;
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Last observed size, or `None` before the first measurement.
    #[must_use]
    pub fn size(&self) -> Option<ViewportSize> {
        self.size
    }
}
