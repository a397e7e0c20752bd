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

//! Playback and playlist control.
//!
//! The [`Controller`] is the single owner of mutable application state: what
//! is playing, the playlist collection, and (through the catalog) each
//! video's moderation flag. Every user-facing operation is a method here and
//! returns either a structured payload or exactly one [`ControlError`].
//!
//! # Organization
//!
//! * [`playback`]: play, stop, pause, continue and random play.
//! * [`playlists`]: playlist create, update and delete.
//! * [`search`]: title and tag search, and selecting a result to play.
//! * [`moderation`]: flagging and allowing videos.
//!
//! The controller never writes to a display; rendering the payloads is the
//! job of [`crate::render`].

mod moderation;
mod playback;
mod playlists;
mod search;

use std::collections::BTreeMap;

use crate::{
    error::{ControlError, Result},
    model::{
        Video,
        catalog::{Catalog, VideoLibrary},
        playlist::Playlist,
    },
    player::PlaybackState,
};

pub use moderation::DEFAULT_FLAG_REASON;

/// Outcome of a successful play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Played {
    /// The video that was implicitly stopped to make way, if any.
    pub stopped: Option<Video>,
    pub video: Video,
}

/// Snapshot of the current video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying {
    pub video: Video,
    pub paused: bool,
}

/// The videos of one playlist, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistContents {
    /// The name as given by the caller, not necessarily the stored name.
    pub name: String,
    pub videos: Vec<Video>,
}

/// Outcome of a successful flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flagged {
    pub video: Video,
    pub reason: String,
    /// Set when the flagged video was the current one and has been stopped.
    pub stopped: Option<Video>,
}

/// Owns playback state and playlists for one session.
#[derive(Debug)]
pub struct Controller<C: Catalog = VideoLibrary> {
    catalog: C,
    playback: PlaybackState,
    playlists: BTreeMap<String, Playlist>,
}

impl<C: Catalog> Controller<C> {
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            playback: PlaybackState::new(),
            playlists: BTreeMap::new(),
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    /// Looks up a playlist by name, ignoring case.
    pub fn playlist(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(&Playlist::lookup_key(name))
    }

    pub fn number_of_videos(&self) -> usize {
        self.catalog.len()
    }

    /// Every catalog video, sorted by title.
    pub fn show_all_videos(&self) -> Vec<Video> {
        let mut videos = self.catalog.videos().to_vec();
        videos.sort_by(|a, b| a.title().cmp(b.title()));
        videos
    }

    fn video(&self, video_id: &str) -> Result<&Video> {
        self.catalog
            .video(video_id)
            .ok_or_else(|| ControlError::VideoNotFound {
                video_id: video_id.to_string(),
            })
    }

    fn current_video(&self) -> Option<&Video> {
        self.playback
            .current()
            .and_then(|id| self.catalog.video(id))
    }
}
