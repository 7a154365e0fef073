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

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("Viewport measurement failed")]
    ViewportUnavailable,
    #[error("Terminal backend failed")]
    TerminalFailed,
}

impl AppError {
    pub const VIEWPORT_UNAVAILABLE_EXIT_CODE: i32 = 20;
    pub const TERMINAL_FAILED_EXIT_CODE: i32 = 21;

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ViewportUnavailable => Self::VIEWPORT_UNAVAILABLE_EXIT_CODE,
            Self::TerminalFailed => Self::TERMINAL_FAILED_EXIT_CODE,
        }
    }

    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::ViewportUnavailable => {
                "Could not measure the terminal size. Run chatpane inside an interactive terminal."
            }
            Self::TerminalFailed => "The terminal backend failed to draw. See --log-file output.",
        }
    }
}
