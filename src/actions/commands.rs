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

//! Command dispatch.
//!
//! This module executes one [`Command`] against the [`Controller`] and
//! renders the result. Controller failures are rendered, not propagated; the
//! only errors returned from here are I/O failures on the session streams.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::debug;

use crate::{
    actions::read_line,
    commander::Command,
    controller::Controller,
    model::{catalog::Catalog, search::SearchResults},
    render::{self, Console, catalog, player, playlist},
};

/// Whether the session should keep reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Orchestrates the execution of a single command.
///
/// `input` is only read from by the search commands, which ask the user to
/// pick a result once the matches have been shown.
pub fn handle_command<C, R, W>(
    controller: &mut Controller<C>,
    command: Command,
    console: &mut Console<W>,
    input: &mut R,
) -> Result<Flow>
where
    C: Catalog,
    R: BufRead,
    W: Write,
{
    debug!(?command, "Handling command");

    match command {
        Command::NumberOfVideos => {
            catalog::number_of_videos(console, controller.number_of_videos())?;
        }
        Command::ShowAllVideos => {
            catalog::all_videos(console, &controller.show_all_videos())?;
        }

        Command::Play(video_id) => match controller.play(&video_id) {
            Ok(played) => player::played(console, &played)?,
            Err(e) => render::failure(console, "Cannot play video", &e)?,
        },
        Command::PlayRandom => match controller.play_random() {
            Ok(played) => player::played(console, &played)?,
            Err(e) => render::failure(console, "Cannot play video", &e)?,
        },
        Command::Stop => match controller.stop() {
            Ok(video) => player::stopped_video(console, &video)?,
            Err(e) => render::failure(console, "Cannot stop video", &e)?,
        },
        Command::Pause => match controller.pause() {
            Ok(video) => player::paused(console, &video)?,
            Err(e) => render::failure(console, "Cannot pause video", &e)?,
        },
        Command::Continue => match controller.continue_() {
            Ok(video) => player::continued(console, &video)?,
            Err(e) => render::failure(console, "Cannot continue video", &e)?,
        },
        Command::ShowPlaying => {
            player::now_playing(console, controller.show_playing().as_ref())?;
        }

        Command::CreatePlaylist(name) => match controller.create_playlist(&name) {
            Ok(()) => playlist::created(console, &name)?,
            Err(e) => render::failure(console, "Cannot create playlist", &e)?,
        },
        Command::AddToPlaylist { name, video_id } => {
            match controller.add_to_playlist(&name, &video_id) {
                Ok(video) => playlist::added(console, &name, &video)?,
                Err(e) => render::failure(console, &format!("Cannot add video to {name}"), &e)?,
            }
        }
        Command::ShowAllPlaylists => {
            playlist::all_playlists(console, &controller.show_all_playlists())?;
        }
        Command::ShowPlaylist(name) => match controller.show_playlist(&name) {
            Ok(contents) => playlist::contents(console, &contents)?,
            Err(e) => render::failure(console, &format!("Cannot show playlist {name}"), &e)?,
        },
        Command::RemoveFromPlaylist { name, video_id } => {
            match controller.remove_from_playlist(&name, &video_id) {
                Ok(video) => playlist::removed(console, &name, &video)?,
                Err(e) => render::failure(console, &format!("Cannot remove video from {name}"), &e)?,
            }
        }
        Command::ClearPlaylist(name) => match controller.clear_playlist(&name) {
            Ok(()) => playlist::cleared(console, &name)?,
            Err(e) => render::failure(console, &format!("Cannot clear playlist {name}"), &e)?,
        },
        Command::DeletePlaylist(name) => match controller.delete_playlist(&name) {
            Ok(()) => playlist::deleted(console, &name)?,
            Err(e) => render::failure(console, &format!("Cannot delete playlist {name}"), &e)?,
        },

        Command::SearchVideos(term) => {
            let results = controller.search_by_title(&term);
            search_and_select(controller, &results, console, input)?;
        }
        Command::SearchVideosWithTag(tag) => {
            let results = controller.search_by_tag(&tag);
            search_and_select(controller, &results, console, input)?;
        }

        Command::FlagVideo { video_id, reason } => {
            match controller.flag_video(&video_id, reason.as_deref()) {
                Ok(flagged) => catalog::flagged(console, &flagged)?,
                Err(e) => render::failure(console, "Cannot flag video", &e)?,
            }
        }
        Command::AllowVideo(video_id) => match controller.allow_video(&video_id) {
            Ok(video) => catalog::allowed(console, &video)?,
            Err(e) => render::failure(console, "Cannot remove flag from video", &e)?,
        },

        Command::Help => render::help(console)?,

        Command::Exit => return Ok(Flow::Exit),
    }

    Ok(Flow::Continue)
}

/// Shows search results and, if there were any, reads the user's choice and
/// plays it.
///
/// End of input while waiting for the choice is treated as no selection.
fn search_and_select<C, R, W>(
    controller: &mut Controller<C>,
    results: &SearchResults,
    console: &mut Console<W>,
    input: &mut R,
) -> Result<()>
where
    C: Catalog,
    R: BufRead,
    W: Write,
{
    catalog::search_results(console, results)?;

    if results.is_empty() {
        return Ok(());
    }

    let Some(answer) = read_line(input)? else {
        return Ok(());
    };

    match controller.select_and_play(results, &answer) {
        Ok(Some(played)) => player::played(console, &played)?,
        Ok(None) => debug!(answer = answer.trim(), "No search result selected"),
        Err(e) => render::failure(console, "Cannot play video", &e)?,
    }

    Ok(())
}
