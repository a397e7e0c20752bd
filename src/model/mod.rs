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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, videos,
//! playlists and the catalog that owns every known video.

pub mod catalog;
pub mod playlist;
pub mod search;

/// A single catalog entry.
///
/// The id, title and tags are fixed when the catalog is loaded. The only
/// mutable part of a video is its moderation flag, which the controller sets
/// and clears.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    id: String,
    title: String,
    tags: Vec<String>,
    flag: Option<String>,
}

impl Video {
    pub fn new(title: impl Into<String>, id: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags,
            flag: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn is_flagged(&self) -> bool {
        self.flag.is_some()
    }

    /// The reason given when the video was flagged, if it is flagged.
    pub fn flag_reason(&self) -> Option<&str> {
        self.flag.as_deref()
    }

    /// Case-insensitive exact match against any one of the tags.
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == tag)
    }

    pub(crate) fn set_flag(&mut self, reason: String) {
        self.flag = Some(reason);
    }

    pub(crate) fn clear_flag(&mut self) {
        self.flag = None;
    }
}
