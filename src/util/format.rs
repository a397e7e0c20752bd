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

use crate::model::Video;

/// Formats a tag list as a bracketed, space-separated string.
///
/// # Examples
///
/// ```
/// use vidplay::util::format::format_tags;
///
/// assert_eq!(format_tags(&["#cat".to_string(), "#fun".to_string()]), "[#cat #fun]");
/// assert_eq!(format_tags(&[]), "[]");
/// ```
pub fn format_tags(tags: &[String]) -> String {
    format!("[{}]", tags.join(" "))
}

/// Formats a video as `Title (id) [#tag1 #tag2]`.
///
/// This is the one-line form used wherever a video is shown in full.
pub fn format_video(video: &Video) -> String {
    format!("{} ({}) {}", video.title(), video.id(), format_tags(video.tags()))
}

/// Formats a video for a listing, appending its flag when it has one.
pub fn format_listing(video: &Video) -> String {
    match video.flag_reason() {
        Some(reason) => format!("{} - FLAGGED (reason: {})", format_video(video), reason),
        None => format_video(video),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_with_tags() {
        let video = Video::new("Amazing Cats", "cat1", vec!["#cat".into(), "#fun".into()]);
        assert_eq!(format_video(&video), "Amazing Cats (cat1) [#cat #fun]");
    }

    #[test]
    fn video_without_tags() {
        let video = Video::new("Video about nothing", "nothing", vec![]);
        assert_eq!(format_listing(&video), "Video about nothing (nothing) []");
    }

    #[test]
    fn flagged_listing_shows_reason() {
        let mut video = Video::new("Funny Dogs", "dog2", vec!["#dog".into()]);
        video.set_flag("spam".into());
        assert_eq!(
            format_listing(&video),
            "Funny Dogs (dog2) [#dog] - FLAGGED (reason: spam)"
        );
    }
}
