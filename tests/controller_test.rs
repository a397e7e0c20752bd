//! Controller integration tests
//!
//! Drives the public controller API through whole user scenarios, plus
//! property tests for the playback and playlist invariants.

use proptest::prelude::*;
use vidplay::{
    Catalog, ControlError, Controller, Video, VideoLibrary,
    player::PlayerState,
};

// ===== Test Helpers =====

fn library() -> VideoLibrary {
    VideoLibrary::new([
        Video::new("Amazing Cats", "cat1", vec!["#cat".into(), "#fun".into()]),
        Video::new("Funny Dogs", "dog2", vec!["#dog".into()]),
    ])
}

// ===== Scenario Tests =====

#[test]
fn test_playlist_playback_and_flagging_scenario() {
    let mut controller = Controller::new(library());

    controller.create_playlist("Fun").unwrap();

    let added = controller.add_to_playlist("Fun", "cat1").unwrap();
    assert_eq!(added.title(), "Amazing Cats");
    let contents = controller.show_playlist("Fun").unwrap();
    let titles: Vec<&str> = contents.videos.iter().map(Video::title).collect();
    assert_eq!(titles, ["Amazing Cats"]);

    controller.play("dog2").unwrap();
    assert_eq!(controller.playback().current(), Some("dog2"));
    assert!(!controller.playback().is_paused());

    controller.pause().unwrap();
    assert!(controller.playback().is_paused());

    let now = controller.show_playing().unwrap();
    assert_eq!(now.video.title(), "Funny Dogs");
    assert!(now.paused);

    controller.flag_video("cat1", Some("spam")).unwrap();

    let err = controller.play("cat1").unwrap_err();
    assert_eq!(
        err,
        ControlError::VideoFlagged {
            video_id: "cat1".into(),
            reason: "spam".into()
        }
    );
    assert_eq!(controller.playback().current(), Some("dog2"));
    assert_eq!(controller.playback().state(), PlayerState::Paused);
}

#[test]
fn test_case_insensitive_playlist_names_keep_first_spelling() {
    let mut controller = Controller::new(library());

    controller.create_playlist("My List").unwrap();
    assert!(matches!(
        controller.create_playlist("my list"),
        Err(ControlError::PlaylistExists { .. })
    ));

    assert_eq!(controller.show_all_playlists(), ["My List"]);
}

#[test]
fn test_search_then_select_out_of_range_changes_nothing() {
    let mut controller = Controller::new(library());
    let results = controller.search_by_title("");
    assert_eq!(results.len(), 2);

    assert_eq!(controller.select_and_play(&results, "0").unwrap(), None);
    assert_eq!(controller.select_and_play(&results, "3").unwrap(), None);
    assert_eq!(controller.playback().state(), PlayerState::Stopped);

    let played = controller.select_and_play(&results, "1").unwrap().unwrap();
    assert_eq!(played.video.id(), "cat1");
}

#[test]
fn test_flagged_video_selected_from_stale_results_is_refused() {
    let mut controller = Controller::new(library());
    let results = controller.search_by_tag("#DOG");
    controller.flag_video("dog2", None).unwrap();

    assert!(matches!(
        controller.select_and_play(&results, "1"),
        Err(ControlError::VideoFlagged { .. })
    ));
    assert_eq!(controller.playback().state(), PlayerState::Stopped);
}

#[test]
fn test_sessions_are_independent() {
    let mut first = Controller::new(library());
    let second = Controller::new(library());

    first.play("cat1").unwrap();
    first.create_playlist("Fun").unwrap();
    first.flag_video("dog2", None).unwrap();

    assert_eq!(second.playback().state(), PlayerState::Stopped);
    assert!(second.show_all_playlists().is_empty());
    assert!(!second.catalog().video("dog2").unwrap().is_flagged());
}

// ===== Property Tests =====

proptest! {
    #[test]
    fn prop_unknown_video_never_changes_playback(video_id in "[a-z0-9_]{1,16}", start_playing in any::<bool>()) {
        prop_assume!(video_id != "cat1" && video_id != "dog2");

        let mut controller = Controller::new(library());
        if start_playing {
            controller.play("cat1").unwrap();
        }
        let before = controller.playback().clone();

        let err = controller.play(&video_id).unwrap_err();

        let is_not_found = matches!(err, ControlError::VideoNotFound { .. });
        prop_assert!(is_not_found);
        prop_assert_eq!(controller.playback(), &before);
    }

    #[test]
    fn prop_playlist_names_collide_in_any_case(name in "[a-zA-Z][a-zA-Z ]{0,11}") {
        let mut controller = Controller::new(library());
        controller.create_playlist(&name).unwrap();

        let upper = controller.create_playlist(&name.to_uppercase());
        let lower = controller.create_playlist(&name.to_lowercase());
        let upper_exists = matches!(upper, Err(ControlError::PlaylistExists { .. }));
        let lower_exists = matches!(lower, Err(ControlError::PlaylistExists { .. }));

        prop_assert!(upper_exists);
        prop_assert!(lower_exists);
        prop_assert_eq!(controller.show_all_playlists(), vec![name.clone()]);
    }

    #[test]
    fn prop_adding_twice_keeps_one_entry(video_id in prop::sample::select(vec!["cat1", "dog2"])) {
        let mut controller = Controller::new(library());
        controller.create_playlist("Fun").unwrap();

        controller.add_to_playlist("Fun", video_id).unwrap();
        let again = controller.add_to_playlist("fun", video_id);
        let already_added = matches!(again, Err(ControlError::VideoAlreadyInPlaylist { .. }));

        prop_assert!(already_added);
        prop_assert_eq!(controller.playlist("FUN").unwrap().len(), 1);
    }

    #[test]
    fn prop_stopped_player_is_never_paused(ops in prop::collection::vec(0u8..5, 0..40)) {
        let mut controller = Controller::new(library());

        for op in ops {
            let _ = match op {
                0 => controller.play("cat1").map(|_| ()),
                1 => controller.stop().map(|_| ()),
                2 => controller.pause().map(|_| ()),
                3 => controller.continue_().map(|_| ()),
                _ => controller.play_random().map(|_| ()),
            };

            let playback = controller.playback();
            if playback.current().is_none() {
                prop_assert!(!playback.is_paused());
                prop_assert_eq!(playback.state(), PlayerState::Stopped);
            }
        }
    }
}
