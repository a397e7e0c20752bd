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

//! Controller failure kinds.
//!
//! Every failure here is an expected, recoverable outcome of a user command.
//! The `Display` text is the reason part of the sentence shown to the user;
//! the presentation layer supplies the operation prefix.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControlError {
    #[error("Video does not exist")]
    VideoNotFound { video_id: String },

    #[error("Playlist does not exist")]
    PlaylistNotFound { name: String },

    #[error("A playlist with the same name already exists")]
    PlaylistExists { name: String },

    #[error("Video already added")]
    VideoAlreadyInPlaylist { name: String, video_id: String },

    #[error("Video is not in playlist")]
    VideoNotInPlaylist { name: String, video_id: String },

    #[error("No video is currently playing")]
    NothingPlaying,

    #[error("Video already paused: {title}")]
    AlreadyPaused { title: String },

    #[error("Video is not paused")]
    NotPaused { title: String },

    #[error("No videos available")]
    CatalogEmpty,

    #[error("Video is already flagged")]
    AlreadyFlagged { video_id: String },

    #[error("Video is not flagged")]
    NotFlagged { video_id: String },

    #[error("Video is currently flagged (reason: {reason})")]
    VideoFlagged { video_id: String, reason: String },
}

pub type Result<T> = std::result::Result<T, ControlError>;
