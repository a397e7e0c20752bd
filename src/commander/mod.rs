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

//! Command-line parsing.
//!
//! This module implements the parsing of a single line of user input into a
//! [`Command`]. The command word is matched without regard to case; the
//! arguments are passed through exactly as typed.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play(String),
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist(String),
    AddToPlaylist { name: String, video_id: String },
    ShowAllPlaylists,
    ShowPlaylist(String),
    RemoveFromPlaylist { name: String, video_id: String },
    ClearPlaylist(String),
    DeletePlaylist(String),
    SearchVideos(String),
    SearchVideosWithTag(String),
    FlagVideo { video_id: String, reason: Option<String> },
    AllowVideo(String),
    Help,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("No command entered")]
    Empty,

    #[error("Please enter a valid command, type HELP for a list of available commands.")]
    Invalid(String),
}

/// Parses one line of input into a command.
///
/// # Errors
///
/// * [`CommandError::Empty`] for a blank line.
/// * [`CommandError::Invalid`] for an unknown command or the wrong number of
///   arguments.
pub fn parse_command(buffer: &str) -> Result<Command, CommandError> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    let Some((cmd, args)) = parts.split_first() else {
        return Err(CommandError::Empty);
    };

    let command = match (cmd.to_uppercase().as_str(), args) {
        ("NUMBER_OF_VIDEOS", []) => Command::NumberOfVideos,
        ("SHOW_ALL_VIDEOS", []) => Command::ShowAllVideos,

        ("PLAY", [video_id]) => Command::Play(video_id.to_string()),
        ("PLAY_RANDOM", []) => Command::PlayRandom,
        ("STOP", []) => Command::Stop,
        ("PAUSE", []) => Command::Pause,
        ("CONTINUE", []) => Command::Continue,
        ("SHOW_PLAYING", []) => Command::ShowPlaying,

        ("CREATE_PLAYLIST", [name]) => Command::CreatePlaylist(name.to_string()),
        ("ADD_TO_PLAYLIST", [name, video_id]) => Command::AddToPlaylist {
            name: name.to_string(),
            video_id: video_id.to_string(),
        },
        ("SHOW_ALL_PLAYLISTS", []) => Command::ShowAllPlaylists,
        ("SHOW_PLAYLIST", [name]) => Command::ShowPlaylist(name.to_string()),
        ("REMOVE_FROM_PLAYLIST", [name, video_id]) => Command::RemoveFromPlaylist {
            name: name.to_string(),
            video_id: video_id.to_string(),
        },
        ("CLEAR_PLAYLIST", [name]) => Command::ClearPlaylist(name.to_string()),
        ("DELETE_PLAYLIST", [name]) => Command::DeletePlaylist(name.to_string()),

        ("SEARCH_VIDEOS", [term]) => Command::SearchVideos(term.to_string()),
        ("SEARCH_VIDEOS_WITH_TAG", [tag]) => Command::SearchVideosWithTag(tag.to_string()),

        ("FLAG_VIDEO", [video_id, reason @ ..]) => Command::FlagVideo {
            video_id: video_id.to_string(),
            reason: (!reason.is_empty()).then(|| reason.join(" ")),
        },
        ("ALLOW_VIDEO", [video_id]) => Command::AllowVideo(video_id.to_string()),

        ("HELP", []) => Command::Help,
        ("EXIT", []) => Command::Exit,

        _ => return Err(CommandError::Invalid(buffer.trim().to_string())),
    };

    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_word_ignores_case() {
        assert_eq!(parse_command("play cat1"), Ok(Command::Play("cat1".into())));
        assert_eq!(parse_command("Show_Playing"), Ok(Command::ShowPlaying));
    }

    #[test]
    fn arguments_keep_their_case() {
        assert_eq!(
            parse_command("ADD_TO_PLAYLIST My_List Cat1"),
            Ok(Command::AddToPlaylist {
                name: "My_List".into(),
                video_id: "Cat1".into()
            })
        );
    }

    #[test]
    fn flag_reason_is_optional_and_may_have_spaces() {
        assert_eq!(
            parse_command("FLAG_VIDEO cat1"),
            Ok(Command::FlagVideo { video_id: "cat1".into(), reason: None })
        );
        assert_eq!(
            parse_command("FLAG_VIDEO cat1 dont  like cats"),
            Ok(Command::FlagVideo {
                video_id: "cat1".into(),
                reason: Some("dont like cats".into())
            })
        );
    }

    #[test]
    fn blank_line_is_empty() {
        assert_eq!(parse_command("   \n"), Err(CommandError::Empty));
    }

    #[test]
    fn wrong_arity_and_unknown_commands_are_invalid() {
        assert!(matches!(parse_command("PLAY"), Err(CommandError::Invalid(_))));
        assert!(matches!(parse_command("STOP now"), Err(CommandError::Invalid(_))));
        assert!(matches!(parse_command("DANCE"), Err(CommandError::Invalid(_))));
    }
}
