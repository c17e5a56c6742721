use crate::app::actions::Action;
use thiserror::Error;

/// A parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Action(Action),
    Help,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a valid command, type HELP for a list of available commands.")]
    UnknownCommand(String),

    #[error("{command} expects {expected}")]
    BadArguments {
        command: &'static str,
        expected: &'static str,
    },
}

/// Parse one command line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Input>, InputError> {
    let line = line.trim();
    let Some(word) = line.split_whitespace().next() else {
        return Ok(None);
    };
    let rest = line[word.len()..].trim_start();
    let args: Vec<&str> = rest.split_whitespace().collect();
    let command = word.to_ascii_uppercase();

    let action = match command.as_str() {
        "NUMBER_OF_VIDEOS" => none(&args, "NUMBER_OF_VIDEOS", Action::NumberOfVideos)?,
        "SHOW_ALL_VIDEOS" => none(&args, "SHOW_ALL_VIDEOS", Action::ShowAllVideos)?,
        "PLAY" => Action::Play(one(&args, "PLAY", "<video_id>")?),
        "PLAY_RANDOM" => none(&args, "PLAY_RANDOM", Action::PlayRandom)?,
        "STOP" => none(&args, "STOP", Action::Stop)?,
        "PAUSE" => none(&args, "PAUSE", Action::Pause)?,
        "CONTINUE" => none(&args, "CONTINUE", Action::Continue)?,
        "SHOW_PLAYING" => none(&args, "SHOW_PLAYING", Action::ShowPlaying)?,

        "CREATE_PLAYLIST" => {
            Action::CreatePlaylist(one(&args, "CREATE_PLAYLIST", "<playlist_name>")?)
        }
        "ADD_TO_PLAYLIST" => {
            let (playlist, video_id) = two(&args, "ADD_TO_PLAYLIST")?;
            Action::AddToPlaylist { playlist, video_id }
        }
        "REMOVE_FROM_PLAYLIST" => {
            let (playlist, video_id) = two(&args, "REMOVE_FROM_PLAYLIST")?;
            Action::RemoveFromPlaylist { playlist, video_id }
        }
        "CLEAR_PLAYLIST" => Action::ClearPlaylist(one(&args, "CLEAR_PLAYLIST", "<playlist_name>")?),
        "DELETE_PLAYLIST" => {
            Action::DeletePlaylist(one(&args, "DELETE_PLAYLIST", "<playlist_name>")?)
        }
        "SHOW_PLAYLIST" => Action::ShowPlaylist(one(&args, "SHOW_PLAYLIST", "<playlist_name>")?),
        "SHOW_ALL_PLAYLISTS" => none(&args, "SHOW_ALL_PLAYLISTS", Action::ShowAllPlaylists)?,

        "SEARCH_VIDEOS" => Action::SearchVideos(one(&args, "SEARCH_VIDEOS", "<search_term>")?),
        "SEARCH_VIDEOS_WITH_TAG" => {
            Action::SearchVideosWithTag(one(&args, "SEARCH_VIDEOS_WITH_TAG", "<video_tag>")?)
        }

        "FLAG_VIDEO" => {
            let Some(video_id) = args.first() else {
                return Err(InputError::BadArguments {
                    command: "FLAG_VIDEO",
                    expected: "<video_id> [flag_reason]",
                });
            };
            // The reason is free text: everything after the id.
            let reason = rest[video_id.len()..].trim().to_string();
            Action::FlagVideo {
                video_id: video_id.to_string(),
                reason,
            }
        }
        "ALLOW_VIDEO" => Action::AllowVideo(one(&args, "ALLOW_VIDEO", "<video_id>")?),

        "HELP" => return Ok(Some(Input::Help)),
        "EXIT" => return Ok(Some(Input::Exit)),
        _ => return Err(InputError::UnknownCommand(word.to_string())),
    };

    Ok(Some(Input::Action(action)))
}

fn none(args: &[&str], command: &'static str, action: Action) -> Result<Action, InputError> {
    if args.is_empty() {
        Ok(action)
    } else {
        Err(InputError::BadArguments {
            command,
            expected: "no arguments",
        })
    }
}

fn one(args: &[&str], command: &'static str, expected: &'static str) -> Result<String, InputError> {
    match args {
        [a] => Ok(a.to_string()),
        _ => Err(InputError::BadArguments { command, expected }),
    }
}

fn two(args: &[&str], command: &'static str) -> Result<(String, String), InputError> {
    match args {
        [a, b] => Ok((a.to_string(), b.to_string())),
        _ => Err(InputError::BadArguments {
            command,
            expected: "<playlist_name> <video_id>",
        }),
    }
}

pub const HELP_TEXT: &str = "\
Available commands:
    NUMBER_OF_VIDEOS - Shows how many videos are in the library.
    SHOW_ALL_VIDEOS - Lists all videos from the library.
    PLAY <video_id> - Plays specified video.
    PLAY_RANDOM - Plays a random video from the library.
    STOP - Stop the current video.
    PAUSE - Pause the current video.
    CONTINUE - Resume the current paused video.
    SHOW_PLAYING - Displays the title, url and paused status of the video that is currently playing (or paused).
    CREATE_PLAYLIST <playlist_name> - Creates a new (empty) playlist with the provided name.
    ADD_TO_PLAYLIST <playlist_name> <video_id> - Adds the requested video to the playlist.
    REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Removes the specified video from the specified playlist
    CLEAR_PLAYLIST <playlist_name> - Removes all the videos from the playlist.
    DELETE_PLAYLIST <playlist_name> - Deletes the playlist.
    SHOW_PLAYLIST <playlist_name> - List all the videos in this playlist.
    SHOW_ALL_PLAYLISTS - Display all the available playlists.
    SEARCH_VIDEOS <search_term> - Display all the videos whose titles contain the search_term.
    SEARCH_VIDEOS_WITH_TAG <tag_name> - Display all videos whose tags contains the provided tag.
    FLAG_VIDEO <video_id> <flag_reason> - Mark a video as flagged.
    ALLOW_VIDEO <video_id> - Removes a flag from a video.
    HELP - Displays help.
    EXIT - Terminates the program execution.";
