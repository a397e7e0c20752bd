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

//! Render playlist outcomes.
//!
//! Names are echoed exactly as the user typed them for the current command,
//! except in the full listing, which shows each playlist's stored name.

use std::io::{self, Write};

use crate::{
    controller::PlaylistContents,
    model::Video,
    render::Console,
    util::format::format_listing,
};

pub fn created<W: Write>(console: &mut Console<W>, name: &str) -> io::Result<()> {
    console.line(format!("Successfully created new playlist: {name}"))
}

pub fn added<W: Write>(console: &mut Console<W>, name: &str, video: &Video) -> io::Result<()> {
    console.line(format!("Added video to {name}: {}", video.title()))
}

pub fn all_playlists<W: Write>(console: &mut Console<W>, names: &[String]) -> io::Result<()> {
    if names.is_empty() {
        return console.line("No playlists exist yet");
    }

    console.line("Showing all playlists:")?;
    for name in names {
        console.line(format!("  {name}"))?;
    }
    Ok(())
}

pub fn contents<W: Write>(console: &mut Console<W>, contents: &PlaylistContents) -> io::Result<()> {
    console.line(format!("Showing playlist: {}", contents.name))?;

    if contents.videos.is_empty() {
        return console.line("  No videos here yet");
    }

    for video in &contents.videos {
        console.line(format!("  {}", format_listing(video)))?;
    }
    Ok(())
}

pub fn removed<W: Write>(console: &mut Console<W>, name: &str, video: &Video) -> io::Result<()> {
    console.line(format!("Removed video from {name}: {}", video.title()))
}

pub fn cleared<W: Write>(console: &mut Console<W>, name: &str) -> io::Result<()> {
    console.line(format!("Successfully removed all videos from {name}"))
}

pub fn deleted<W: Write>(console: &mut Console<W>, name: &str) -> io::Result<()> {
    console.line(format!("Deleted playlist: {name}"))
}
