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

//! Render catalog listings, search results and moderation outcomes.

use std::io::{self, Write};

use crate::{
    controller::Flagged,
    model::{Video, search::SearchResults},
    render::{Console, player},
    util::format::{format_listing, format_video},
};

pub fn number_of_videos<W: Write>(console: &mut Console<W>, count: usize) -> io::Result<()> {
    console.line(format!("{count} videos in the library"))
}

pub fn all_videos<W: Write>(console: &mut Console<W>, videos: &[Video]) -> io::Result<()> {
    console.line("Here's a list of all available videos:")?;
    for video in videos {
        console.line(format!("  {}", format_listing(video)))?;
    }
    Ok(())
}

/// Renders numbered search results followed by the selection prompt, or the
/// empty-result sentence.
pub fn search_results<W: Write>(console: &mut Console<W>, results: &SearchResults) -> io::Result<()> {
    if results.is_empty() {
        return console.line(format!("No search results for {}", results.term));
    }

    console.line(format!("Here are the results for {}:", results.term))?;
    for (idx, video) in results.matches.iter().enumerate() {
        console.line(format!("  {}) {}", idx + 1, format_video(video)))?;
    }
    console.line("Would you like to play any of the above? If yes, specify the number of the video.")?;
    console.line("If your answer is not a valid number, we will assume it's a no.")?;
    console.flush()
}

pub fn flagged<W: Write>(console: &mut Console<W>, flagged: &Flagged) -> io::Result<()> {
    if let Some(stopped) = &flagged.stopped {
        player::stopped_video(console, stopped)?;
    }
    console.line(format!(
        "Successfully flagged video: {} (reason: {})",
        flagged.video.title(),
        flagged.reason
    ))
}

pub fn allowed<W: Write>(console: &mut Console<W>, video: &Video) -> io::Result<()> {
    console.line(format!("Successfully removed flag from video: {}", video.title()))
}
