//! Text rendering of command results.
//!
//! The wording follows the classic video-player exercise output, e.g.
//! `Playing video: Amazing Cats` or
//! `Cannot add video to my_list: Video already added`.

use crate::app::actions::Action;
use crate::app::error::CommandError;
use crate::app::events::Outcome;
use crate::catalog::Video;
use crate::flags::Annotated;
use crate::player::Slot;

/// `Title (id) [#tag1 #tag2]`
pub fn video(v: &Video) -> String {
    format!("{} ({}) [{}]", v.title, v.id, v.tags.join(" "))
}

fn annotated(entry: &Annotated) -> String {
    match &entry.flag_reason {
        Some(reason) => format!("{} - FLAGGED (reason: {reason})", video(&entry.video)),
        None => video(&entry.video),
    }
}

fn stopping(v: &Video) -> String {
    format!("Stopping video: {}", v.title)
}

pub fn outcome(outcome: &Outcome) -> Vec<String> {
    match outcome {
        Outcome::VideoCount { count } => vec![format!("{count} videos in the library")],
        Outcome::VideoList { videos } => {
            let mut lines = vec!["Here's a list of all available videos:".to_string()];
            lines.extend(videos.iter().map(|e| format!("  {}", annotated(e))));
            lines
        }

        Outcome::Playing { stopped, started } => stopped
            .iter()
            .map(|v| stopping(v))
            .chain(std::iter::once(format!("Playing video: {}", started.title)))
            .collect(),
        Outcome::Stopped { video } => vec![stopping(video)],
        Outcome::Paused { video } => vec![format!("Pausing video: {}", video.title)],
        Outcome::AlreadyPaused { video } => vec![format!("Video already paused: {}", video.title)],
        Outcome::Continued { video } => vec![format!("Continuing video: {}", video.title)],
        Outcome::NowPlaying { slot } => vec![match slot {
            Slot::Empty => "No video is currently playing".to_string(),
            Slot::Playing(v) => format!("Currently playing: {}", self::video(v)),
            Slot::Paused(v) => format!("Currently playing: {} - PAUSED", self::video(v)),
        }],

        Outcome::PlaylistCreated { playlist } => {
            vec![format!("Successfully created new playlist: {playlist}")]
        }
        Outcome::AddedToPlaylist { playlist, video } => {
            vec![format!("Added video to {playlist}: {}", video.title)]
        }
        Outcome::RemovedFromPlaylist { playlist, video } => {
            vec![format!("Removed video from {playlist}: {}", video.title)]
        }
        Outcome::PlaylistCleared { playlist } => {
            vec![format!("Successfully removed all videos from {playlist}")]
        }
        Outcome::PlaylistDeleted { playlist } => vec![format!("Deleted playlist: {playlist}")],
        Outcome::PlaylistContents { playlist, entries } => {
            let mut lines = vec![format!("Showing playlist: {playlist}")];
            lines.extend(entries.iter().map(|e| format!("  {}", annotated(e))));
            lines
        }
        Outcome::PlaylistEmpty { playlist } => vec![
            format!("Showing playlist: {playlist}"),
            "  No videos here yet".to_string(),
        ],
        Outcome::PlaylistIndex { playlists } => {
            let mut lines = vec!["Showing all playlists:".to_string()];
            lines.extend(playlists.iter().map(|p| format!("  {p}")));
            lines
        }
        Outcome::NoPlaylists => vec!["No playlists exist yet".to_string()],

        Outcome::SearchResults { term, videos } => {
            let mut lines = vec![format!("Here are the results for {term}:")];
            lines.extend(
                videos
                    .iter()
                    .enumerate()
                    .map(|(i, v)| format!("  {}) {}", i + 1, self::video(v))),
            );
            lines
        }
        Outcome::NoSearchResults { term } => vec![format!("No search results for {term}")],

        Outcome::Flagged {
            video,
            reason,
            stopped,
        } => stopped
            .iter()
            .map(|v| stopping(v))
            .chain(std::iter::once(format!(
                "Successfully flagged video: {} (reason: {reason})",
                video.title
            )))
            .collect(),
        Outcome::Allowed { video } => {
            vec![format!("Successfully removed flag from video: {}", video.title)]
        }
    }
}

/// The refusal message for `action`, e.g. `Cannot play video: Video does not exist`.
pub fn error(action: &Action, err: &CommandError) -> String {
    if *err == CommandError::NoPlayableVideos {
        return err.to_string();
    }

    let what = match action {
        Action::Play(_) | Action::PlayRandom => "Cannot play video".to_string(),
        Action::Stop => "Cannot stop video".to_string(),
        Action::Pause => "Cannot pause video".to_string(),
        Action::Continue => "Cannot continue video".to_string(),
        Action::CreatePlaylist(_) => "Cannot create playlist".to_string(),
        Action::AddToPlaylist { playlist, .. } => format!("Cannot add video to {playlist}"),
        Action::RemoveFromPlaylist { playlist, .. } => {
            format!("Cannot remove video from {playlist}")
        }
        Action::ClearPlaylist(p) => format!("Cannot clear playlist {p}"),
        Action::DeletePlaylist(p) => format!("Cannot delete playlist {p}"),
        Action::ShowPlaylist(p) => format!("Cannot show playlist {p}"),
        Action::FlagVideo { .. } => "Cannot flag video".to_string(),
        Action::AllowVideo(_) => "Cannot remove flag from video".to_string(),
        Action::NumberOfVideos
        | Action::ShowAllVideos
        | Action::ShowPlaying
        | Action::ShowAllPlaylists
        | Action::SearchVideos(_)
        | Action::SearchVideosWithTag(_) => "Cannot complete command".to_string(),
    };
    format!("{what}: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn cats() -> Rc<Video> {
        Rc::new(Video::new("amazing_cats_video_id", "Amazing Cats", &["#cat", "#animal"]))
    }

    #[test]
    fn test_video_line() {
        assert_eq!(video(&cats()), "Amazing Cats (amazing_cats_video_id) [#cat #animal]");
        assert_eq!(
            video(&Video::new("nothing_video_id", "Video about nothing", &[])),
            "Video about nothing (nothing_video_id) []"
        );
    }

    #[test]
    fn test_play_with_implicit_stop() {
        let lines = outcome(&Outcome::Playing {
            stopped: Some(cats()),
            started: Rc::new(Video::new("d", "Funny Dogs", &[])),
        });
        assert_eq!(lines, vec!["Stopping video: Amazing Cats", "Playing video: Funny Dogs"]);
    }

    #[test]
    fn test_now_playing_paused() {
        let lines = outcome(&Outcome::NowPlaying {
            slot: Slot::Paused(cats()),
        });
        assert_eq!(
            lines,
            vec!["Currently playing: Amazing Cats (amazing_cats_video_id) [#cat #animal] - PAUSED"]
        );
    }

    #[test]
    fn test_flagged_annotation() {
        let lines = outcome(&Outcome::PlaylistContents {
            playlist: "mix".into(),
            entries: vec![Annotated {
                video: cats(),
                flag_reason: Some("Not supplied".into()),
            }],
        });
        assert_eq!(
            lines[1],
            "  Amazing Cats (amazing_cats_video_id) [#cat #animal] - FLAGGED (reason: Not supplied)"
        );
    }

    #[test]
    fn test_error_prefix() {
        let add = Action::AddToPlaylist {
            playlist: "My_List".into(),
            video_id: "x".into(),
        };
        assert_eq!(
            error(&add, &CommandError::AlreadyInPlaylist),
            "Cannot add video to My_List: Video already added"
        );
        assert_eq!(
            error(&Action::Play("x".into()), &CommandError::Flagged { reason: "r".into() }),
            "Cannot play video: Video is currently flagged (reason: r)"
        );
        assert_eq!(
            error(&Action::PlayRandom, &CommandError::NoPlayableVideos),
            "No videos available"
        );
    }
}
