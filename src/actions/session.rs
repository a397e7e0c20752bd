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

//! The interactive session loop.
//!
//! A [`Session`] owns one [`Controller`] together with the input it reads
//! commands from and the console it renders to. Both streams are injected,
//! so the loop runs the same way against a terminal or an in-memory buffer.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::{
    actions::{
        commands::{Flow, handle_command},
        read_line,
    },
    commander::{CommandError, parse_command},
    controller::Controller,
    model::catalog::Catalog,
    render::{Console, GOODBYE, WELCOME},
};

pub struct Session<C: Catalog, R: BufRead, W: Write> {
    controller: Controller<C>,
    input: R,
    console: Console<W>,
}

impl<C: Catalog, R: BufRead, W: Write> Session<C, R, W> {
    pub fn new(controller: Controller<C>, input: R, console: Console<W>) -> Self {
        Self {
            controller,
            input,
            console,
        }
    }

    pub fn controller(&self) -> &Controller<C> {
        &self.controller
    }

    /// Processes commands until `EXIT` or the end of input.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    /// Invalid commands and controller failures are rendered and the loop
    /// carries on.
    pub fn run(&mut self) -> Result<()> {
        info!(videos = self.controller.number_of_videos(), "Session started");
        self.console.line(WELCOME)?;

        loop {
            self.console.prompt()?;

            let Some(line) = read_line(&mut self.input)? else {
                break;
            };

            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(CommandError::Empty) => continue,
                Err(e) => {
                    warn!(input = line.trim(), "Invalid command");
                    self.console.failure(e)?;
                    continue;
                }
            };

            let flow = handle_command(&mut self.controller, command, &mut self.console, &mut self.input)?;
            if flow == Flow::Exit {
                break;
            }
        }

        self.console.line(GOODBYE)?;
        self.console.flush().context("Failed to flush output")?;

        info!("Session finished");

        Ok(())
    }

    /// Consumes the session, returning the console it rendered to.
    pub fn into_console(self) -> Console<W> {
        self.console
    }
}
