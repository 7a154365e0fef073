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

mod events;
mod selection;
mod state;

pub mod roster;
pub mod viewport;

// Re-export the public types so `crate::app::App` etc. still work.
pub use events::handle_terminal_event;
pub(crate) use selection::normalize_selection;
pub use state::{App, SelectionPoint, SelectionState};

use crate::error::AppError;
use crossterm::event::EventStream;
use futures::{FutureExt as _, StreamExt};
use std::time::{Duration, Instant};

// ---------------------------------------------------------------------------
// TUI event loop
// ---------------------------------------------------------------------------

pub async fn run_tui(app: &mut App) -> anyhow::Result<()> {
    // Measure before entering the alternate screen
    if let Err(e) = app.viewport.mount() {
        tracing::error!("viewport measurement failed: {e}");
        return Err(anyhow::Error::new(AppError::ViewportUnavailable));
    }

    let mut terminal = ratatui::init();

    // Mouse capture drives sidebar clicks, wheel scrolling and text selection
    // (ignore error on unsupported terminals)
    let _ = crossterm::execute!(std::io::stdout(), crossterm::event::EnableMouseCapture);

    let result = event_loop(app, &mut terminal).await;

    // --- Graceful shutdown ---
    app.viewport.unmount();
    let _ = crossterm::execute!(std::io::stdout(), crossterm::event::DisableMouseCapture);
    ratatui::restore();

    result
}

async fn event_loop(app: &mut App, terminal: &mut ratatui::DefaultTerminal) -> anyhow::Result<()> {
    let mut events = EventStream::new();
    let tick_duration = Duration::from_millis(16);
    let mut last_render = Instant::now();

    loop {
        // Phase 1: wait for at least one event or the next frame tick
        let time_to_next = tick_duration.saturating_sub(last_render.elapsed());
        tokio::select! {
            Some(Ok(event)) = events.next() => {
                events::handle_terminal_event(app, event);
            }
            () = tokio::time::sleep(time_to_next) => {}
        }

        // Phase 2: drain all remaining queued events (non-blocking)
        while let Some(Some(Ok(event))) = events.next().now_or_never() {
            events::handle_terminal_event(app, event);
        }

        if app.should_quit {
            break;
        }

        // Phase 3: render once
        if app.force_redraw {
            terminal
                .clear()
                .map_err(|e| terminal_failed("terminal clear failed", &e))?;
            app.force_redraw = false;
        }
        terminal
            .draw(|f| crate::ui::render(f, app))
            .map_err(|e| terminal_failed("terminal draw failed", &e))?;
        last_render = Instant::now();
    }

    Ok(())
}

fn terminal_failed(what: &str, e: &std::io::Error) -> anyhow::Error {
    tracing::error!("{what}: {e}");
    anyhow::Error::new(AppError::TerminalFailed)
}
