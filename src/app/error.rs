//! Error types for session commands

use serde::Serialize;
use thiserror::Error;

/// Why a command was refused. Every variant is an ordinary, recoverable
/// outcome; the session state is left untouched when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum CommandError {
    #[error("Video does not exist")]
    VideoNotFound,

    #[error("Playlist does not exist")]
    PlaylistNotFound,

    #[error("A playlist with the same name already exists")]
    DuplicateName,

    #[error("Video already added")]
    AlreadyInPlaylist,

    #[error("Video is not in playlist")]
    NotInPlaylist,

    #[error("Video is currently flagged (reason: {reason})")]
    Flagged { reason: String },

    #[error("Video is already flagged")]
    AlreadyFlagged,

    #[error("Video is not flagged")]
    NotFlagged,

    #[error("No video is currently playing")]
    NothingPlaying,

    #[error("Video is not paused")]
    NotPaused,

    #[error("No videos available")]
    NoPlayableVideos,
}

/// Result type for session commands
pub type Result<T> = std::result::Result<T, CommandError>;
