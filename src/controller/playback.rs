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

//! Playback transitions.
//!
//! The player moves between `Stopped`, `Playing` and `Paused`. Playing a
//! video is always allowed once the video exists and is not flagged; the
//! remaining transitions each have one or two illegal source states that are
//! reported as errors without changing anything.

use rand::{Rng, rng, seq::IndexedRandom};
use tracing::debug;

use crate::{
    controller::{Controller, NowPlaying, Played},
    error::{ControlError, Result},
    model::{Video, catalog::Catalog},
};

impl<C: Catalog> Controller<C> {
    /// Plays a video by id, stopping whatever was playing first.
    ///
    /// # Errors
    ///
    /// * [`ControlError::VideoNotFound`] if the id is not in the catalog.
    /// * [`ControlError::VideoFlagged`] if the video has been flagged.
    pub fn play(&mut self, video_id: &str) -> Result<Played> {
        let video = self.video(video_id)?.clone();

        if let Some(reason) = video.flag_reason() {
            return Err(ControlError::VideoFlagged {
                video_id: video_id.to_string(),
                reason: reason.to_string(),
            });
        }

        let stopped = self
            .playback
            .start(video.id())
            .and_then(|id| self.catalog.video(&id).cloned());

        debug!(video_id, stopped = ?stopped.as_ref().map(Video::id), "Playing video");

        Ok(Played { stopped, video })
    }

    /// Stops the current video.
    ///
    /// # Errors
    ///
    /// [`ControlError::NothingPlaying`] if the player is already stopped.
    pub fn stop(&mut self) -> Result<Video> {
        let video = self.current_video().cloned().ok_or(ControlError::NothingPlaying)?;
        self.playback.stop();

        debug!(video_id = video.id(), "Stopped video");

        Ok(video)
    }

    /// Plays a random non-flagged video.
    ///
    /// # Errors
    ///
    /// [`ControlError::CatalogEmpty`] if there is nothing eligible to play.
    pub fn play_random(&mut self) -> Result<Played> {
        self.play_random_with(&mut rng())
    }

    /// Plays a random non-flagged video, choosing with the supplied generator.
    pub fn play_random_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Played> {
        let candidates: Vec<&Video> = self
            .catalog
            .videos()
            .iter()
            .filter(|v| !v.is_flagged())
            .collect();

        let video_id = candidates
            .choose(rng)
            .map(|v| v.id().to_string())
            .ok_or(ControlError::CatalogEmpty)?;

        self.play(&video_id)
    }

    /// Pauses the current video.
    ///
    /// # Errors
    ///
    /// * [`ControlError::NothingPlaying`] if the player is stopped.
    /// * [`ControlError::AlreadyPaused`] if the video is already paused.
    pub fn pause(&mut self) -> Result<Video> {
        let video = self.current_video().cloned().ok_or(ControlError::NothingPlaying)?;

        if self.playback.is_paused() {
            return Err(ControlError::AlreadyPaused {
                title: video.title().to_string(),
            });
        }

        self.playback.set_paused(true);
        debug!(video_id = video.id(), "Paused video");

        Ok(video)
    }

    /// Resumes the current video.
    ///
    /// # Errors
    ///
    /// * [`ControlError::NothingPlaying`] if the player is stopped.
    /// * [`ControlError::NotPaused`] if the video is playing.
    pub fn continue_(&mut self) -> Result<Video> {
        let video = self.current_video().cloned().ok_or(ControlError::NothingPlaying)?;

        if !self.playback.is_paused() {
            return Err(ControlError::NotPaused {
                title: video.title().to_string(),
            });
        }

        self.playback.set_paused(false);
        debug!(video_id = video.id(), "Continued video");

        Ok(video)
    }

    pub fn show_playing(&self) -> Option<NowPlaying> {
        self.current_video().map(|video| NowPlaying {
            video: video.clone(),
            paused: self.playback.is_paused(),
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use crate::{
        controller::{
            Controller,
            tests::{controller, library},
        },
        error::ControlError,
        model::catalog::{Catalog, VideoLibrary},
        player::PlayerState,
    };

    #[test]
    fn play_unknown_video_leaves_state_alone() {
        let mut controller = controller();
        controller.play("dog2").unwrap();
        let before = controller.playback().clone();

        let err = controller.play("nope").unwrap_err();

        assert_eq!(err, ControlError::VideoNotFound { video_id: "nope".into() });
        assert_eq!(controller.playback(), &before);
    }

    #[test]
    fn play_while_playing_reports_the_stopped_video() {
        let mut controller = controller();
        let first = controller.play("cat1").unwrap();
        assert!(first.stopped.is_none());

        let second = controller.play("dog2").unwrap();
        assert_eq!(second.stopped.unwrap().id(), "cat1");
        assert_eq!(second.video.title(), "Funny Dogs");
        assert_eq!(controller.playback().current(), Some("dog2"));
    }

    #[test]
    fn play_over_a_paused_video_unpauses() {
        let mut controller = controller();
        controller.play("cat1").unwrap();
        controller.pause().unwrap();

        controller.play("cat1").unwrap();
        assert_eq!(controller.playback().state(), PlayerState::Playing);
    }

    #[test]
    fn second_stop_reports_nothing_playing() {
        let mut controller = controller();
        controller.play("cat1").unwrap();

        assert_eq!(controller.stop().unwrap().id(), "cat1");
        assert_eq!(controller.stop().unwrap_err(), ControlError::NothingPlaying);
        assert_eq!(controller.playback().state(), PlayerState::Stopped);
    }

    #[test]
    fn pause_twice_reports_already_paused() {
        let mut controller = controller();
        controller.play("dog2").unwrap();
        controller.pause().unwrap();

        let err = controller.pause().unwrap_err();
        assert_eq!(err, ControlError::AlreadyPaused { title: "Funny Dogs".into() });
        assert!(controller.playback().is_paused());
    }

    #[test]
    fn pause_and_continue_need_a_current_video() {
        let mut controller = controller();
        assert_eq!(controller.pause().unwrap_err(), ControlError::NothingPlaying);
        assert_eq!(controller.continue_().unwrap_err(), ControlError::NothingPlaying);
    }

    #[test]
    fn continue_without_pause_reports_not_paused() {
        let mut controller = controller();
        controller.play("dog2").unwrap();

        assert!(matches!(
            controller.continue_().unwrap_err(),
            ControlError::NotPaused { .. }
        ));

        controller.pause().unwrap();
        assert_eq!(controller.continue_().unwrap().id(), "dog2");
        assert_eq!(controller.playback().state(), PlayerState::Playing);
    }

    #[test]
    fn show_playing_reports_pause_state() {
        let mut controller = controller();
        assert!(controller.show_playing().is_none());

        controller.play("dog2").unwrap();
        controller.pause().unwrap();

        let now = controller.show_playing().unwrap();
        assert_eq!(now.video.title(), "Funny Dogs");
        assert!(now.paused);
    }

    #[test]
    fn random_on_empty_catalog_fails() {
        let mut controller = Controller::new(VideoLibrary::default());
        assert_eq!(controller.play_random().unwrap_err(), ControlError::CatalogEmpty);
        assert_eq!(controller.playback().state(), PlayerState::Stopped);
    }

    #[test]
    fn random_plays_a_catalog_member() {
        let mut controller = controller();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let played = controller.play_random_with(&mut rng).unwrap();
            assert!(library().video(played.video.id()).is_some());
            assert_eq!(controller.playback().state(), PlayerState::Playing);
        }
    }

    #[test]
    fn random_skips_flagged_videos() {
        let mut controller = controller();
        controller.flag_video("cat1", None).unwrap();
        controller.flag_video("cat3", None).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..10 {
            assert_eq!(controller.play_random_with(&mut rng).unwrap().video.id(), "dog2");
        }

        controller.flag_video("dog2", None).unwrap();
        assert_eq!(controller.play_random().unwrap_err(), ControlError::CatalogEmpty);
    }
}
