pub mod actions;
pub mod error;
pub mod events;

use crate::catalog::{self, Catalog, Video};
use crate::flags::FlagRegistry;
use crate::player::{Pause, Player, Started};
use crate::playlist::PlaylistRegistry;
use actions::Action;
use error::Result;
use events::Outcome;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::rc::Rc;

/// A single user session: the catalog plus everything the commands mutate.
pub struct App {
    catalog: Box<dyn Catalog>,
    player: Player,
    flags: FlagRegistry,
    playlists: PlaylistRegistry,
    rng: StdRng,
}

impl App {
    /// `seed` fixes the choices made by `PLAY_RANDOM`.
    pub fn new(catalog: Box<dyn Catalog>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            catalog,
            player: Player::new(),
            flags: FlagRegistry::new(),
            playlists: PlaylistRegistry::new(),
            rng,
        }
    }

    pub fn dispatch(&mut self, action: Action) -> Result<Outcome> {
        tracing::debug!(?action, "dispatch");
        let result = self.reduce(action);
        if let Err(e) = &result {
            tracing::debug!(error = %e, "command refused");
        }
        result
    }

    fn reduce(&mut self, action: Action) -> Result<Outcome> {
        let catalog = self.catalog.as_ref();
        match action {
            Action::NumberOfVideos => Ok(Outcome::VideoCount {
                count: catalog.get_all().len(),
            }),
            Action::ShowAllVideos => Ok(Outcome::VideoList {
                videos: catalog::sorted_by_title(catalog)
                    .iter()
                    .map(|v| self.flags.annotate(v))
                    .collect(),
            }),

            Action::Play(video_id) => {
                let started = self.player.play(catalog, &self.flags, &video_id)?;
                Ok(playing(started))
            }
            Action::PlayRandom => {
                let started = self.player.play_random(catalog, &self.flags, &mut self.rng)?;
                Ok(playing(started))
            }
            Action::Stop => {
                let video = self.player.stop()?;
                tracing::info!(video = %video.id, "stopped");
                Ok(Outcome::Stopped { video })
            }
            Action::Pause => Ok(match self.player.pause()? {
                Pause::Paused(video) => Outcome::Paused { video },
                Pause::AlreadyPaused(video) => Outcome::AlreadyPaused { video },
            }),
            Action::Continue => Ok(Outcome::Continued {
                video: self.player.resume()?,
            }),
            Action::ShowPlaying => Ok(Outcome::NowPlaying {
                slot: self.player.slot().clone(),
            }),

            Action::CreatePlaylist(name) => {
                self.playlists.create(&name)?;
                tracing::info!(playlist = %name, total = self.playlists.len(), "playlist created");
                Ok(Outcome::PlaylistCreated { playlist: name })
            }
            Action::AddToPlaylist { playlist, video_id } => {
                let (_, video) = self
                    .playlists
                    .add(catalog, &self.flags, &playlist, &video_id)?;
                Ok(Outcome::AddedToPlaylist { playlist, video })
            }
            Action::RemoveFromPlaylist { playlist, video_id } => {
                let (_, video) = self.playlists.remove(catalog, &playlist, &video_id)?;
                Ok(Outcome::RemovedFromPlaylist { playlist, video })
            }
            Action::ClearPlaylist(playlist) => {
                self.playlists.clear(&playlist)?;
                Ok(Outcome::PlaylistCleared { playlist })
            }
            Action::DeletePlaylist(playlist) => {
                self.playlists.delete(&playlist)?;
                Ok(Outcome::PlaylistDeleted { playlist })
            }
            Action::ShowPlaylist(playlist) => {
                let entries = self.playlists.show(&self.flags, &playlist)?;
                Ok(if entries.is_empty() {
                    Outcome::PlaylistEmpty { playlist }
                } else {
                    Outcome::PlaylistContents { playlist, entries }
                })
            }
            Action::ShowAllPlaylists => {
                let playlists = self.playlists.list_all();
                Ok(if playlists.is_empty() {
                    Outcome::NoPlaylists
                } else {
                    Outcome::PlaylistIndex { playlists }
                })
            }

            Action::SearchVideos(term) => {
                let needle = term.to_lowercase();
                let videos = self.search(|v| v.title.to_lowercase().contains(&needle));
                Ok(search_outcome(term, videos))
            }
            Action::SearchVideosWithTag(tag) => {
                let videos = self.search(|v| v.has_tag(&tag));
                Ok(search_outcome(tag, videos))
            }

            Action::FlagVideo { video_id, reason } => {
                let (video, reason) = self.flags.flag(catalog, &video_id, &reason)?;
                let stopped = self.player.stop_if_current(&video.id);
                tracing::info!(video = %video.id, %reason, flagged = self.flags.len(), "flagged");
                Ok(Outcome::Flagged {
                    video,
                    reason,
                    stopped,
                })
            }
            Action::AllowVideo(video_id) => {
                let video = self.flags.allow(catalog, &video_id)?;
                tracing::info!(video = %video.id, "allowed");
                Ok(Outcome::Allowed { video })
            }
        }
    }

    /// Unflagged videos matching `pred`, sorted by title.
    fn search(&self, pred: impl Fn(&Video) -> bool) -> Vec<Rc<Video>> {
        catalog::sorted_by_title(self.catalog.as_ref())
            .into_iter()
            .filter(|v| self.flags.is_flagged(&v.id).is_none() && pred(v))
            .collect()
    }
}

fn playing(started: Started) -> Outcome {
    tracing::info!(video = %started.started.id, "playing");
    Outcome::Playing {
        stopped: started.stopped,
        started: started.started,
    }
}

fn search_outcome(term: String, videos: Vec<Rc<Video>>) -> Outcome {
    if videos.is_empty() {
        Outcome::NoSearchResults { term }
    } else {
        Outcome::SearchResults { term, videos }
    }
}
