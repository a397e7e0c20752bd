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

//! Command-line entry point for the video player simulator.

use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use vidplay::{
    Controller, VideoLibrary,
    actions::session::Session,
    config::{self, Overrides},
    logging,
    render::Console,
    util::term,
};

const PROMPT: &str = "> ";

#[derive(Parser, Debug)]
#[command(name = "vidplay", version, about = "An interactive video player simulator")]
struct Cli {
    /// Catalog file to load, one `Title | id | #tag1,#tag2` entry per line.
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Log filter, for example `info` or `vidplay=debug`.
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Write logs to this file instead of stderr.
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Disable coloured output.
    #[arg(long)]
    no_colour: bool,
}

/// The entry point of the application.
///
/// Loads the configuration, applies command-line overrides, loads the
/// catalog and runs an interactive session on stdin and stdout.
fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::load_config().apply(Overrides {
        catalog_file: cli.catalog,
        log_file: cli.log_file,
        log_level: cli.log_level,
        no_colour: cli.no_colour,
    });

    logging::init_tracing(&config.log_level, config.log_file.as_deref())
        .context("Failed to initialise logging")?;

    let catalog = match &config.catalog_file {
        Some(path) => VideoLibrary::load(path)?,
        None => VideoLibrary::builtin(),
    };

    let mut console = Console::new(io::stdout().lock()).with_style(config.colour && term::stdout_is_tty());
    if term::stdin_is_tty() {
        console = console.with_prompt(PROMPT);
    }

    let mut session = Session::new(Controller::new(catalog), io::stdin().lock(), console);

    session.run().context("Application error occurred")
}
