use crate::catalog::Video;
use crate::flags::Annotated;
use crate::player::Slot;
use serde::Serialize;
use std::rc::Rc;

/// What a successful command did. Empty listings have their own variants so
/// callers never have to inspect a vector to tell "nothing" apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    VideoCount { count: usize },
    VideoList { videos: Vec<Annotated> },

    /// `stopped` is set when a video had to be stopped first.
    Playing { stopped: Option<Rc<Video>>, started: Rc<Video> },
    Stopped { video: Rc<Video> },
    Paused { video: Rc<Video> },
    AlreadyPaused { video: Rc<Video> },
    Continued { video: Rc<Video> },
    NowPlaying { slot: Slot },

    PlaylistCreated { playlist: String },
    AddedToPlaylist { playlist: String, video: Rc<Video> },
    RemovedFromPlaylist { playlist: String, video: Rc<Video> },
    PlaylistCleared { playlist: String },
    PlaylistDeleted { playlist: String },
    PlaylistContents { playlist: String, entries: Vec<Annotated> },
    PlaylistEmpty { playlist: String },
    PlaylistIndex { playlists: Vec<String> },
    NoPlaylists,

    SearchResults { term: String, videos: Vec<Rc<Video>> },
    NoSearchResults { term: String },

    Flagged {
        video: Rc<Video>,
        reason: String,
        stopped: Option<Rc<Video>>,
    },
    Allowed { video: Rc<Video> },
}
