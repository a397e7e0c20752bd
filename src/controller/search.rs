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

//! Search, then select a result to play.
//!
//! Searching never changes state. Selection is a separate step so that the
//! caller owns reading the user's answer; an answer that is not a number in
//! range simply means "no".

use tracing::debug;

use crate::{
    controller::{Controller, Played},
    error::Result,
    model::{
        Video,
        catalog::Catalog,
        search::SearchResults,
    },
};

impl<C: Catalog> Controller<C> {
    /// Non-flagged videos whose title contains `term`, ignoring case.
    pub fn search_by_title(&self, term: &str) -> SearchResults {
        let needle = term.to_lowercase();
        self.search(term, |v| {
            v.title().to_lowercase().contains(&needle)
        })
    }

    /// Non-flagged videos carrying `tag`, ignoring case.
    pub fn search_by_tag(&self, tag: &str) -> SearchResults {
        self.search(tag, |v| v.has_tag(tag))
    }

    fn search(&self, term: &str, matches: impl Fn(&Video) -> bool) -> SearchResults {
        let matches: Vec<Video> = self
            .catalog
            .videos()
            .iter()
            .filter(|v| !v.is_flagged() && matches(v))
            .cloned()
            .collect();

        debug!(term, count = matches.len(), "Searched catalog");

        SearchResults {
            term: term.to_string(),
            matches,
        }
    }

    /// Plays the result numbered by `input`, counting from one.
    ///
    /// Returns `Ok(None)` when the input is not a number or is out of range.
    ///
    /// # Errors
    ///
    /// Any error from [`Controller::play`] for the chosen video.
    pub fn select_and_play(&mut self, results: &SearchResults, input: &str) -> Result<Option<Played>> {
        let Ok(choice) = input.trim().parse::<usize>() else {
            return Ok(None);
        };

        let Some(video) = results.get(choice) else {
            return Ok(None);
        };

        let video_id = video.id().to_string();
        self.play(&video_id).map(Some)
    }
}
