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

pub mod app;
pub mod error;
pub mod ui;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "chatpane", about = "Two-pane chat layout for the terminal")]
pub struct Cli {
    /// Number of chats in the sidebar roster
    #[arg(long, default_value_t = app::roster::DEFAULT_CHAT_COUNT)]
    pub chats: usize,

    /// Number of messages in the demo transcript
    #[arg(long, default_value_t = app::roster::DEFAULT_MESSAGE_COUNT)]
    pub messages: usize,

    /// Write diagnostics to this file (the TUI owns stdout/stderr)
    #[arg(long)]
    pub log_file: Option<std::path::PathBuf>,

    /// Tracing filter directives (falls back to RUST_LOG, then "info")
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Append to the log file instead of truncating it
    #[arg(long)]
    pub log_append: bool,
}
