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

//! User playlist management.
//!
//! This module provides state for a named playlist, managing an ordered list
//! of catalog video ids with no duplicates.

/// A named, ordered set of references to catalog videos.
///
/// The playlist stores ids only; the catalog stays the owner of every video.
#[derive(Debug, Clone)]
pub struct Playlist {
    name: String,
    videos: Vec<String>,
}

impl Playlist {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            videos: Vec::new(),
        }
    }

    /// Derives the collection key for a playlist name.
    ///
    /// Every existence check goes through this key, so playlist names are
    /// matched without regard to case.
    pub fn lookup_key(name: &str) -> String {
        name.to_lowercase()
    }

    /// The name exactly as it was given when the playlist was created.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contains(&self, video_id: &str) -> bool {
        self.videos.iter().any(|id| id == video_id)
    }

    /// Appends a video. Existing members are left where they are.
    pub fn add(&mut self, video_id: &str) {
        if !self.contains(video_id) {
            self.videos.push(video_id.to_string());
        }
    }

    /// Removes a video, returning `false` if it was not a member.
    pub fn remove(&mut self, video_id: &str) -> bool {
        let before = self.videos.len();
        self.videos.retain(|id| id != video_id);
        self.videos.len() != before
    }

    pub fn clear(&mut self) {
        self.videos.clear();
    }

    /// Member ids in insertion order.
    pub fn video_ids(&self) -> &[String] {
        &self.videos
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}
