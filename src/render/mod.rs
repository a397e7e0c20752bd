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

//! User-facing text rendering.
//!
//! This module turns controller payloads and failures into the exact
//! sentences shown to the user. The wording is part of the user contract,
//! so every sentence lives here and nowhere else.
//!
//! # Organization
//!
//! * [`player`]: playback outcomes.
//! * [`playlist`]: playlist outcomes.
//! * [`catalog`]: catalog listings, search results and moderation.

pub mod catalog;
pub mod player;
pub mod playlist;

use std::{
    fmt::Display,
    io::{self, Write},
};

use crate::{error::ControlError, util::term::paint_failure};

pub const WELCOME: &str = "Hello and welcome to the video player, what would you like to do?";
pub const GOODBYE: &str = "The video player has now terminated its execution. Thank you and goodbye!";

const HELP: &str = "Available commands:
    NUMBER_OF_VIDEOS - Shows how many videos are in the library.
    SHOW_ALL_VIDEOS - Lists all videos from the library.
    PLAY <video_id> - Plays specified video.
    PLAY_RANDOM - Plays a random video from the library.
    STOP - Stop the current video.
    PAUSE - Pause the current video.
    CONTINUE - Resume the current paused video.
    SHOW_PLAYING - Displays the title, video_id, video tags and paused status of the video that is currently playing (or paused).
    CREATE_PLAYLIST <playlist_name> - Creates a new (empty) playlist with the provided name.
    ADD_TO_PLAYLIST <playlist_name> <video_id> - Adds the requested video to the playlist.
    REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Removes the specified video from the specified playlist
    CLEAR_PLAYLIST <playlist_name> - Removes all videos from the playlist.
    DELETE_PLAYLIST <playlist_name> - Deletes the playlist.
    SHOW_PLAYLIST <playlist_name> - List all the videos in this playlist.
    SHOW_ALL_PLAYLISTS - Display all the available playlists.
    SEARCH_VIDEOS <search_term> - Display all the videos whose titles contain the search_term.
    SEARCH_VIDEOS_WITH_TAG <tag_name> - Display all videos whose tags contains the provided tag.
    FLAG_VIDEO <video_id> <flag_reason> - Mark a video as flagged.
    ALLOW_VIDEO <video_id> - Removes a flag from a video.
    HELP - Displays help.
    EXIT - Terminates the program execution.";

/// Line-oriented output surface.
///
/// Failure lines are coloured when styling is enabled, which the caller only
/// does for an interactive terminal.
pub struct Console<W: Write> {
    out: W,
    styled: bool,
    prompt: Option<String>,
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            styled: false,
            prompt: None,
        }
    }

    pub fn with_style(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    /// Sets a prompt written, without a newline, before each command is read.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    pub fn failure(&mut self, text: impl Display) -> io::Result<()> {
        let text = text.to_string();
        if self.styled {
            writeln!(self.out, "{}", paint_failure(&text))
        } else {
            writeln!(self.out, "{text}")
        }
    }

    pub fn prompt(&mut self) -> io::Result<()> {
        if let Some(prompt) = &self.prompt {
            write!(self.out, "{prompt}")?;
            self.out.flush()?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Renders a controller failure, prefixed by the action that failed.
///
/// A repeated pause and an empty catalog have sentences of their own and
/// are rendered without the prefix.
pub fn failure<W: Write>(console: &mut Console<W>, action: &str, err: &ControlError) -> io::Result<()> {
    match err {
        ControlError::AlreadyPaused { .. } => console.line(err),
        ControlError::CatalogEmpty => console.failure(err),
        _ => console.failure(format!("{action}: {err}")),
    }
}

pub fn help<W: Write>(console: &mut Console<W>) -> io::Result<()> {
    console.line(HELP)
}
