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

//! Playback state.
//!
//! This module holds what is currently playing and whether it is paused.
//! It performs no legality checks of its own; the controller decides which
//! transitions are allowed and only then applies them here.

/// Represents the current playback status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerState {
    Playing,
    Paused,
    Stopped,
}

/// The current video, by id, and its paused flag.
///
/// A stopped player is never paused: every transition that clears the
/// current video also clears the paused flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackState {
    current: Option<String>,
    paused: bool,
}

impl PlaybackState {
    pub fn new() -> Self {
        Self::default()
    }

    // Maps the current/paused pair to a simplified [`PlayerState`].
    fn player_state(is_paused: bool, is_idle: bool) -> PlayerState {
        if is_idle {
            PlayerState::Stopped
        } else if is_paused {
            PlayerState::Paused
        } else {
            PlayerState::Playing
        }
    }

    pub fn state(&self) -> PlayerState {
        Self::player_state(self.paused, self.current.is_none())
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Makes `video_id` the current video, unpaused, returning whatever was
    /// current before.
    pub(crate) fn start(&mut self, video_id: &str) -> Option<String> {
        self.paused = false;
        self.current.replace(video_id.to_string())
    }

    /// Clears the current video, returning it.
    pub(crate) fn stop(&mut self) -> Option<String> {
        self.paused = false;
        self.current.take()
    }

    pub(crate) fn set_paused(&mut self, paused: bool) {
        self.paused = paused && self.current.is_some();
    }
}
