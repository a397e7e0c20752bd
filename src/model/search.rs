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

//! Video search results.
//!
//! This module provides the list of videos matching a search term, numbered
//! from one for display and selection.

use crate::model::Video;

#[derive(Debug, Clone)]
pub struct SearchResults {
    /// The term as the caller typed it.
    pub term: String,
    pub matches: Vec<Video>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Resolves a one-based selection to a match.
    pub fn get(&self, choice: usize) -> Option<&Video> {
        choice.checked_sub(1).and_then(|idx| self.matches.get(idx))
    }
}
