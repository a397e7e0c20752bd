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

//! Render playback outcomes.

use std::io::{self, Write};

use crate::{
    controller::{NowPlaying, Played},
    model::Video,
    render::Console,
    util::format::format_video,
};

pub fn played<W: Write>(console: &mut Console<W>, played: &Played) -> io::Result<()> {
    if let Some(stopped) = &played.stopped {
        stopped_video(console, stopped)?;
    }
    console.line(format!("Playing video: {}", played.video.title()))
}

pub fn stopped_video<W: Write>(console: &mut Console<W>, video: &Video) -> io::Result<()> {
    console.line(format!("Stopping video: {}", video.title()))
}

pub fn paused<W: Write>(console: &mut Console<W>, video: &Video) -> io::Result<()> {
    console.line(format!("Pausing video: {}", video.title()))
}

pub fn continued<W: Write>(console: &mut Console<W>, video: &Video) -> io::Result<()> {
    console.line(format!("Continuing video: {}", video.title()))
}

pub fn now_playing<W: Write>(console: &mut Console<W>, now: Option<&NowPlaying>) -> io::Result<()> {
    match now {
        Some(NowPlaying { video, paused: true }) => {
            console.line(format!("Currently playing: {} - PAUSED", format_video(video)))
        }
        Some(NowPlaying { video, paused: false }) => {
            console.line(format!("Currently playing: {}", format_video(video)))
        }
        None => console.line("No video is currently playing"),
    }
}
