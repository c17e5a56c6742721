/// One session command, with its arguments already split out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    NumberOfVideos,
    ShowAllVideos,

    // Playback
    Play(String),
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,

    // Playlists
    CreatePlaylist(String),
    AddToPlaylist { playlist: String, video_id: String },
    RemoveFromPlaylist { playlist: String, video_id: String },
    ClearPlaylist(String),
    DeletePlaylist(String),
    ShowPlaylist(String),
    ShowAllPlaylists,

    // Search
    SearchVideos(String),
    SearchVideosWithTag(String),

    // Moderation
    FlagVideo { video_id: String, reason: String },
    AllowVideo(String),
}
