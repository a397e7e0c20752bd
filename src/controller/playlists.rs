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

//! Playlist collection management.
//!
//! Playlists are keyed by their lowercased name, so every lookup here is
//! case-insensitive while the stored display name keeps its original casing.
//! Where an operation can fail in more than one way the checks run in a
//! fixed order and the first failure is reported.

use tracing::debug;

use crate::{
    controller::{Controller, PlaylistContents},
    error::{ControlError, Result},
    model::{Video, catalog::Catalog, playlist::Playlist},
};

impl<C: Catalog> Controller<C> {
    /// # Errors
    ///
    /// [`ControlError::PlaylistExists`] if a playlist with the same name,
    /// ignoring case, already exists.
    pub fn create_playlist(&mut self, name: &str) -> Result<()> {
        let key = Playlist::lookup_key(name);
        if self.playlists.contains_key(&key) {
            return Err(ControlError::PlaylistExists {
                name: name.to_string(),
            });
        }

        self.playlists.insert(key, Playlist::new(name));
        debug!(playlist = name, "Created playlist");

        Ok(())
    }

    /// Appends a video to a playlist.
    ///
    /// # Errors
    ///
    /// In order of precedence:
    /// * [`ControlError::PlaylistNotFound`]
    /// * [`ControlError::VideoNotFound`]
    /// * [`ControlError::VideoAlreadyInPlaylist`]
    /// * [`ControlError::VideoFlagged`]
    pub fn add_to_playlist(&mut self, name: &str, video_id: &str) -> Result<Video> {
        let playlist = self
            .playlists
            .get_mut(&Playlist::lookup_key(name))
            .ok_or_else(|| playlist_not_found(name))?;

        let video = self
            .catalog
            .video(video_id)
            .ok_or_else(|| ControlError::VideoNotFound {
                video_id: video_id.to_string(),
            })?;

        if playlist.contains(video_id) {
            return Err(ControlError::VideoAlreadyInPlaylist {
                name: name.to_string(),
                video_id: video_id.to_string(),
            });
        }

        if let Some(reason) = video.flag_reason() {
            return Err(ControlError::VideoFlagged {
                video_id: video_id.to_string(),
                reason: reason.to_string(),
            });
        }

        playlist.add(video_id);
        debug!(playlist = name, video_id, "Added video to playlist");

        Ok(video.clone())
    }

    /// Display names of every playlist, ordered by lookup key.
    ///
    /// An empty result means no playlists exist yet.
    pub fn show_all_playlists(&self) -> Vec<String> {
        self.playlists
            .values()
            .map(|p| p.name().to_string())
            .collect()
    }

    /// # Errors
    ///
    /// [`ControlError::PlaylistNotFound`] if there is no such playlist.
    pub fn show_playlist(&self, name: &str) -> Result<PlaylistContents> {
        let playlist = self.playlist(name).ok_or_else(|| playlist_not_found(name))?;

        let videos = playlist
            .video_ids()
            .iter()
            .filter_map(|id| self.catalog.video(id))
            .cloned()
            .collect();

        Ok(PlaylistContents {
            name: name.to_string(),
            videos,
        })
    }

    /// Removes a video from a playlist.
    ///
    /// # Errors
    ///
    /// In order of precedence:
    /// * [`ControlError::PlaylistNotFound`]
    /// * [`ControlError::VideoNotFound`]
    /// * [`ControlError::VideoNotInPlaylist`]
    pub fn remove_from_playlist(&mut self, name: &str, video_id: &str) -> Result<Video> {
        let playlist = self
            .playlists
            .get_mut(&Playlist::lookup_key(name))
            .ok_or_else(|| playlist_not_found(name))?;

        let video = self
            .catalog
            .video(video_id)
            .ok_or_else(|| ControlError::VideoNotFound {
                video_id: video_id.to_string(),
            })?;

        if !playlist.remove(video_id) {
            return Err(ControlError::VideoNotInPlaylist {
                name: name.to_string(),
                video_id: video_id.to_string(),
            });
        }

        debug!(playlist = name, video_id, "Removed video from playlist");

        Ok(video.clone())
    }

    /// Removes every video from a playlist, keeping the playlist itself.
    ///
    /// # Errors
    ///
    /// [`ControlError::PlaylistNotFound`] if there is no such playlist.
    pub fn clear_playlist(&mut self, name: &str) -> Result<()> {
        let playlist = self
            .playlists
            .get_mut(&Playlist::lookup_key(name))
            .ok_or_else(|| playlist_not_found(name))?;

        playlist.clear();
        debug!(playlist = name, "Cleared playlist");

        Ok(())
    }

    /// # Errors
    ///
    /// [`ControlError::PlaylistNotFound`] if there is no such playlist.
    pub fn delete_playlist(&mut self, name: &str) -> Result<()> {
        self.playlists
            .remove(&Playlist::lookup_key(name))
            .ok_or_else(|| playlist_not_found(name))?;

        debug!(playlist = name, "Deleted playlist");

        Ok(())
    }
}

fn playlist_not_found(name: &str) -> ControlError {
    ControlError::PlaylistNotFound {
        name: name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        controller::tests::controller,
        error::ControlError,
        model::Video,
    };

    #[test]
    fn names_collide_ignoring_case() {
        let mut controller = controller();
        controller.create_playlist("My List").unwrap();

        let err = controller.create_playlist("my list").unwrap_err();
        assert_eq!(err, ControlError::PlaylistExists { name: "my list".into() });
        assert_eq!(controller.show_all_playlists(), ["My List"]);
    }

    #[test]
    fn all_playlists_are_sorted_by_key() {
        let mut controller = controller();
        assert!(controller.show_all_playlists().is_empty());

        controller.create_playlist("zebra").unwrap();
        controller.create_playlist("Apple").unwrap();
        controller.create_playlist("mango").unwrap();

        assert_eq!(controller.show_all_playlists(), ["Apple", "mango", "zebra"]);
    }

    #[test]
    fn add_checks_run_in_order() {
        let mut controller = controller();

        // Missing playlist wins over a missing video.
        assert!(matches!(
            controller.add_to_playlist("fun", "nope").unwrap_err(),
            ControlError::PlaylistNotFound { .. }
        ));

        controller.create_playlist("Fun").unwrap();
        assert!(matches!(
            controller.add_to_playlist("FUN", "nope").unwrap_err(),
            ControlError::VideoNotFound { .. }
        ));

        assert_eq!(controller.add_to_playlist("fun", "cat1").unwrap().title(), "Amazing Cats");
        assert!(matches!(
            controller.add_to_playlist("Fun", "cat1").unwrap_err(),
            ControlError::VideoAlreadyInPlaylist { .. }
        ));
        assert_eq!(controller.playlist("fun").unwrap().len(), 1);
    }

    #[test]
    fn flagged_video_cannot_be_added() {
        let mut controller = controller();
        controller.create_playlist("Fun").unwrap();
        controller.flag_video("dog2", Some("spam")).unwrap();

        let err = controller.add_to_playlist("Fun", "dog2").unwrap_err();
        assert_eq!(
            err,
            ControlError::VideoFlagged {
                video_id: "dog2".into(),
                reason: "spam".into()
            }
        );
    }

    #[test]
    fn show_playlist_lists_in_insertion_order() {
        let mut controller = controller();
        controller.create_playlist("Fun").unwrap();
        assert!(controller.show_playlist("fun").unwrap().videos.is_empty());

        controller.add_to_playlist("Fun", "dog2").unwrap();
        controller.add_to_playlist("Fun", "cat1").unwrap();

        let contents = controller.show_playlist("FUN").unwrap();
        assert_eq!(contents.name, "FUN");
        let ids: Vec<&str> = contents.videos.iter().map(Video::id).collect();
        assert_eq!(ids, ["dog2", "cat1"]);
    }

    #[test]
    fn remove_video_never_added_fails() {
        let mut controller = controller();
        controller.create_playlist("Fun").unwrap();
        controller.create_playlist("Other").unwrap();
        controller.add_to_playlist("Other", "cat1").unwrap();

        assert!(matches!(
            controller.remove_from_playlist("Fun", "cat1").unwrap_err(),
            ControlError::VideoNotInPlaylist { .. }
        ));
        assert!(matches!(
            controller.remove_from_playlist("Fun", "nope").unwrap_err(),
            ControlError::VideoNotFound { .. }
        ));
        assert_eq!(
            controller.remove_from_playlist("nope", "nope").unwrap_err(),
            ControlError::PlaylistNotFound { name: "nope".into() }
        );
        assert!(controller.playlist("Other").unwrap().contains("cat1"));
        assert_eq!(controller.number_of_videos(), 3);
    }

    #[test]
    fn remove_reports_the_removed_title() {
        let mut controller = controller();
        controller.create_playlist("Fun").unwrap();
        controller.add_to_playlist("Fun", "cat1").unwrap();

        assert_eq!(controller.remove_from_playlist("fun", "cat1").unwrap().title(), "Amazing Cats");
        assert!(controller.playlist("Fun").unwrap().is_empty());
    }

    #[test]
    fn clear_keeps_the_playlist() {
        let mut controller = controller();
        assert!(matches!(
            controller.clear_playlist("Fun").unwrap_err(),
            ControlError::PlaylistNotFound { .. }
        ));

        controller.create_playlist("Fun").unwrap();
        controller.add_to_playlist("Fun", "cat1").unwrap();
        controller.clear_playlist("fun").unwrap();

        assert!(controller.show_playlist("Fun").unwrap().videos.is_empty());
    }

    #[test]
    fn deleted_playlist_is_gone() {
        let mut controller = controller();
        controller.create_playlist("Fun").unwrap();
        controller.delete_playlist("FUN").unwrap();

        assert_eq!(
            controller.show_playlist("Fun").unwrap_err(),
            ControlError::PlaylistNotFound { name: "Fun".into() }
        );
        assert!(matches!(
            controller.delete_playlist("Fun").unwrap_err(),
            ControlError::PlaylistNotFound { .. }
        ));
    }
}
