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

//! Video moderation flags.
//!
//! A flagged video cannot be played, added to a playlist, found by search or
//! picked at random. Flagging the video that is playing stops it.

use tracing::debug;

use crate::{
    controller::{Controller, Flagged},
    error::{ControlError, Result},
    model::{Video, catalog::Catalog},
};

/// Reason recorded when a video is flagged without one.
pub const DEFAULT_FLAG_REASON: &str = "Not supplied";

impl<C: Catalog> Controller<C> {
    /// # Errors
    ///
    /// * [`ControlError::VideoNotFound`] if the id is not in the catalog.
    /// * [`ControlError::AlreadyFlagged`] if the video is already flagged.
    pub fn flag_video(&mut self, video_id: &str, reason: Option<&str>) -> Result<Flagged> {
        let reason = reason
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(DEFAULT_FLAG_REASON)
            .to_string();

        let video = self
            .catalog
            .video_mut(video_id)
            .ok_or_else(|| ControlError::VideoNotFound {
                video_id: video_id.to_string(),
            })?;

        if video.is_flagged() {
            return Err(ControlError::AlreadyFlagged {
                video_id: video_id.to_string(),
            });
        }

        video.set_flag(reason.clone());
        let video = video.clone();

        let stopped = if self.playback.current() == Some(video_id) {
            self.playback.stop();
            Some(video.clone())
        } else {
            None
        };

        debug!(video_id, reason = %reason, stopped = stopped.is_some(), "Flagged video");

        Ok(Flagged {
            video,
            reason,
            stopped,
        })
    }

    /// Clears a video's flag and reason.
    ///
    /// # Errors
    ///
    /// * [`ControlError::VideoNotFound`] if the id is not in the catalog.
    /// * [`ControlError::NotFlagged`] if the video is not flagged.
    pub fn allow_video(&mut self, video_id: &str) -> Result<Video> {
        let video = self
            .catalog
            .video_mut(video_id)
            .ok_or_else(|| ControlError::VideoNotFound {
                video_id: video_id.to_string(),
            })?;

        if !video.is_flagged() {
            return Err(ControlError::NotFlagged {
                video_id: video_id.to_string(),
            });
        }

        video.clear_flag();
        debug!(video_id, "Allowed video");

        Ok(video.clone())
    }
}
