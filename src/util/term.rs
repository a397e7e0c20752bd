// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Terminal environment and styling utilities.
//!
//! # Compatibility
//!
//! Styling uses ANSI colour sequences, so it is only applied when standard
//! output is attached to a terminal. Output piped to a file or another
//! process is left plain.

use std::io;

use crossterm::{style::Stylize, tty::IsTty};

/// Whether standard output is an interactive terminal.
pub fn stdout_is_tty() -> bool {
    io::stdout().is_tty()
}

/// Whether standard input is an interactive terminal.
pub fn stdin_is_tty() -> bool {
    io::stdin().is_tty()
}

/// Wraps a failure message in the terminal's red foreground colour.
pub fn paint_failure(text: &str) -> String {
    text.red().to_string()
}
