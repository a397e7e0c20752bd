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

//! Video catalog.
//!
//! This module defines the [`Catalog`] contract the controller consumes, and
//! [`VideoLibrary`], an in-memory catalog loaded once at startup from a
//! pipe-separated text source.
//!
//! # Format
//!
//! One video per line, `Title | id | #tag1,#tag2`. The tag field may be
//! empty or missing entirely. Malformed lines and duplicate ids are skipped
//! with a warning rather than failing the whole load.

use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::model::Video;

/// The catalog shipped with the application, used when no catalog file is
/// configured.
const DEFAULT_CATALOG: &str = include_str!("../../data/videos.txt");

/// Lookup and enumeration over every known video.
///
/// Enumeration order is stable but not sorted; callers that present a sorted
/// listing sort it themselves.
pub trait Catalog {
    fn video(&self, video_id: &str) -> Option<&Video>;

    /// Mutable access, used only for moderation flag changes.
    fn video_mut(&mut self, video_id: &str) -> Option<&mut Video>;

    fn videos(&self) -> &[Video];

    fn len(&self) -> usize {
        self.videos().len()
    }

    fn is_empty(&self) -> bool {
        self.videos().is_empty()
    }
}

/// An in-memory catalog, enumerated in load order.
#[derive(Debug, Clone, Default)]
pub struct VideoLibrary {
    videos: Vec<Video>,
    index: HashMap<String, usize>,
}

impl VideoLibrary {
    /// Builds a library from videos, keeping the first of any duplicate ids.
    pub fn new(videos: impl IntoIterator<Item = Video>) -> Self {
        let mut library = Self::default();
        for video in videos {
            if library.index.contains_key(video.id()) {
                warn!(video_id = video.id(), "Skipping duplicate video id");
                continue;
            }
            library.index.insert(video.id().to_string(), library.videos.len());
            library.videos.push(video);
        }
        library
    }

    /// The built-in catalog.
    pub fn builtin() -> Self {
        Self::parse(DEFAULT_CATALOG)
    }

    /// Loads a catalog file from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read. Individual malformed
    /// lines are not errors, they are skipped.
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;

        let library = Self::parse(&source);
        info!(path = %path.display(), count = library.len(), "Loaded catalog");

        Ok(library)
    }

    /// Parses catalog text, one video per line.
    pub fn parse(source: &str) -> Self {
        let videos = source
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .filter_map(|(idx, line)| {
                let video = parse_line(line);
                if video.is_none() {
                    warn!(line = idx + 1, "Skipping malformed catalog entry");
                }
                video
            });

        Self::new(videos)
    }
}

fn parse_line(line: &str) -> Option<Video> {
    let mut fields = line.split('|').map(str::trim);

    let title = fields.next().filter(|s| !s.is_empty())?;
    let id = fields.next().filter(|s| !s.is_empty())?;
    let tags = fields
        .next()
        .map(|tags| {
            tags.split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    Some(Video::new(title, id, tags))
}

impl Catalog for VideoLibrary {
    fn video(&self, video_id: &str) -> Option<&Video> {
        self.index.get(video_id).and_then(|&idx| self.videos.get(idx))
    }

    fn video_mut(&mut self, video_id: &str) -> Option<&mut Video> {
        let idx = *self.index.get(video_id)?;
        self.videos.get_mut(idx)
    }

    fn videos(&self) -> &[Video] {
        &self.videos
    }
}
