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

//! Application input loop and command dispatching.
//!
//! This module connects the outside world to the controller. It reads lines
//! of user input, turns them into commands and renders each outcome.
//!
//! # Organization
//!
//! * [`session`]: The read, dispatch and render loop.
//! * [`commands`]: Dispatch of a single parsed command to the controller.

pub mod commands;
pub mod session;

use std::io::BufRead;

use anyhow::{Context, Result};

/// Reads one line of input, returning `None` at end of input.
pub(crate) fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buffer = String::new();
    let read = input
        .read_line(&mut buffer)
        .context("Failed to read input")?;

    Ok((read > 0).then_some(buffer))
}
