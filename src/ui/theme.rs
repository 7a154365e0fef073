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

use ratatui::style::Color;

// UI chrome
pub const DIM: Color = Color::DarkGray;
pub const DIVIDER: Color = Color::Red;
pub const DIVIDER_CHAR: &str = "│";

// Sidebar
pub const SIDEBAR_TITLE: Color = Color::White;
pub const ROW_SELECTED: Color = Color::Cyan;

// Chat pane
pub const CHAT_HEADER: Color = Color::White;
pub const MSG_MINE: Color = Color::Green;
pub const MSG_THEIRS: Color = Color::White;
