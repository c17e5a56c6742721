//! The "now playing" slot and its transitions.
//!
//! ```text
//!            play / play_random
//!   Empty ───────────────────────► Playing ◄──┐
//!     ▲                             │   ▲     │ play / play_random
//!     │ stop                  pause │   │ resume (implicit stop first)
//!     │                             ▼   │     │
//!     └─────────────────────────── Paused ────┘
//! ```

use crate::app::error::{CommandError, Result};
use crate::catalog::{self, Catalog, Video};
use crate::flags::FlagRegistry;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;
use std::rc::Rc;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "video", rename_all = "snake_case")]
pub enum Slot {
    #[default]
    Empty,
    Playing(Rc<Video>),
    Paused(Rc<Video>),
}

impl Slot {
    pub fn video(&self) -> Option<&Rc<Video>> {
        match self {
            Slot::Empty => None,
            Slot::Playing(v) | Slot::Paused(v) => Some(v),
        }
    }
}

/// A successful play: what was implicitly stopped (if anything) and what
/// started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Started {
    pub stopped: Option<Rc<Video>>,
    pub started: Rc<Video>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pause {
    Paused(Rc<Video>),
    /// Already paused; nothing changed.
    AlreadyPaused(Rc<Video>),
}

#[derive(Debug, Clone, Default)]
pub struct Player {
    slot: Slot,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot(&self) -> &Slot {
        &self.slot
    }

    /// Play a catalog video, stopping whatever is in the slot first.
    pub fn play(
        &mut self,
        catalog: &dyn Catalog,
        flags: &FlagRegistry,
        video_id: &str,
    ) -> Result<Started> {
        let video = catalog.get_by_id(video_id).ok_or(CommandError::VideoNotFound)?;
        flags.ensure_allowed(&video)?;
        Ok(self.start(video))
    }

    /// Play a uniformly chosen video among those that are not flagged.
    pub fn play_random<R: Rng + ?Sized>(
        &mut self,
        catalog: &dyn Catalog,
        flags: &FlagRegistry,
        rng: &mut R,
    ) -> Result<Started> {
        // Sorted so that a seeded rng picks reproducibly.
        let candidates: Vec<Rc<Video>> = catalog::sorted_by_title(catalog)
            .into_iter()
            .filter(|v| flags.is_flagged(&v.id).is_none())
            .collect();

        let video = candidates
            .choose(rng)
            .cloned()
            .ok_or(CommandError::NoPlayableVideos)?;
        Ok(self.start(video))
    }

    pub fn stop(&mut self) -> Result<Rc<Video>> {
        match std::mem::take(&mut self.slot) {
            Slot::Empty => Err(CommandError::NothingPlaying),
            Slot::Playing(v) | Slot::Paused(v) => Ok(v),
        }
    }

    /// Stop only if `video_id` is what is in the slot.
    pub fn stop_if_current(&mut self, video_id: &str) -> Option<Rc<Video>> {
        if self.slot.video().is_some_and(|v| v.id == video_id) {
            self.stop().ok()
        } else {
            None
        }
    }

    pub fn pause(&mut self) -> Result<Pause> {
        match &self.slot {
            Slot::Empty => Err(CommandError::NothingPlaying),
            Slot::Paused(v) => Ok(Pause::AlreadyPaused(v.clone())),
            Slot::Playing(v) => {
                let v = v.clone();
                self.slot = Slot::Paused(v.clone());
                Ok(Pause::Paused(v))
            }
        }
    }

    pub fn resume(&mut self) -> Result<Rc<Video>> {
        match &self.slot {
            Slot::Empty => Err(CommandError::NothingPlaying),
            Slot::Playing(_) => Err(CommandError::NotPaused),
            Slot::Paused(v) => {
                let v = v.clone();
                self.slot = Slot::Playing(v.clone());
                Ok(v)
            }
        }
    }

    fn start(&mut self, video: Rc<Video>) -> Started {
        let stopped = self.stop().ok();
        self.slot = Slot::Playing(video.clone());
        Started {
            stopped,
            started: video,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::VideoLibrary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn setup() -> (VideoLibrary, FlagRegistry, Player) {
        (VideoLibrary::bundled(), FlagRegistry::new(), Player::new())
    }

    #[test]
    fn test_play_from_empty() {
        let (lib, flags, mut player) = setup();

        let s = player.play(&lib, &flags, "amazing_cats_video_id").unwrap();
        assert!(s.stopped.is_none());
        assert_eq!(s.started.title, "Amazing Cats");
        assert!(matches!(player.slot(), Slot::Playing(v) if v.id == "amazing_cats_video_id"));
    }

    #[test]
    fn test_play_stops_current_even_when_paused() {
        let (lib, flags, mut player) = setup();
        player.play(&lib, &flags, "amazing_cats_video_id").unwrap();
        player.pause().unwrap();

        let s = player.play(&lib, &flags, "funny_dogs_video_id").unwrap();
        assert_eq!(s.stopped.unwrap().id, "amazing_cats_video_id");
        assert_eq!(player.slot(), &Slot::Playing(s.started));
    }

    #[test]
    fn test_replay_same_video_unpauses() {
        let (lib, flags, mut player) = setup();
        player.play(&lib, &flags, "nothing_video_id").unwrap();
        player.pause().unwrap();

        let s = player.play(&lib, &flags, "nothing_video_id").unwrap();
        assert_eq!(s.stopped.as_ref().map(|v| v.id.as_str()), Some("nothing_video_id"));
        assert!(matches!(player.slot(), Slot::Playing(_)));
    }

    #[test]
    fn test_play_unknown_keeps_current() {
        let (lib, flags, mut player) = setup();
        player.play(&lib, &flags, "amazing_cats_video_id").unwrap();

        assert_eq!(
            player.play(&lib, &flags, "missing").unwrap_err(),
            CommandError::VideoNotFound
        );
        assert_eq!(player.slot().video().unwrap().id, "amazing_cats_video_id");
    }

    #[test]
    fn test_play_flagged_refused() {
        let (lib, mut flags, mut player) = setup();
        flags.flag(&lib, "funny_dogs_video_id", "inappropriate").unwrap();

        assert_eq!(
            player.play(&lib, &flags, "funny_dogs_video_id").unwrap_err(),
            CommandError::Flagged {
                reason: "inappropriate".into()
            }
        );
        assert_eq!(player.slot(), &Slot::Empty);
    }

    #[test]
    fn test_stop() {
        let (lib, flags, mut player) = setup();
        assert_eq!(player.stop().unwrap_err(), CommandError::NothingPlaying);

        player.play(&lib, &flags, "amazing_cats_video_id").unwrap();
        player.pause().unwrap();
        assert_eq!(player.stop().unwrap().id, "amazing_cats_video_id");
        assert_eq!(player.slot(), &Slot::Empty);
        assert_eq!(player.stop().unwrap_err(), CommandError::NothingPlaying);
    }

    #[test]
    fn test_pause_twice_then_resume_once() {
        let (lib, flags, mut player) = setup();
        assert_eq!(player.pause().unwrap_err(), CommandError::NothingPlaying);

        player.play(&lib, &flags, "amazing_cats_video_id").unwrap();
        assert!(matches!(player.pause().unwrap(), Pause::Paused(_)));
        assert!(matches!(player.pause().unwrap(), Pause::AlreadyPaused(_)));
        assert!(matches!(player.slot(), Slot::Paused(_)));

        player.resume().unwrap();
        assert!(matches!(player.slot(), Slot::Playing(_)));
    }

    #[test]
    fn test_resume_errors() {
        let (lib, flags, mut player) = setup();
        assert_eq!(player.resume().unwrap_err(), CommandError::NothingPlaying);

        player.play(&lib, &flags, "amazing_cats_video_id").unwrap();
        assert_eq!(player.resume().unwrap_err(), CommandError::NotPaused);
    }

    #[test]
    fn test_play_random_skips_flagged() {
        let lib = VideoLibrary::new(vec![
            Video::new("v1", "Amazing Cats", &[]),
            Video::new("v2", "Funny Dogs", &[]),
        ]);
        let mut flags = FlagRegistry::new();
        flags.flag(&lib, "v2", "inappropriate").unwrap();
        let mut player = Player::new();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let s = player.play_random(&lib, &flags, &mut rng).unwrap();
            assert_eq!(s.started.id, "v1");
        }
    }

    #[test]
    fn test_play_random_stops_current() {
        let (lib, flags, mut player) = setup();
        let mut rng = StdRng::seed_from_u64(1);
        player.play(&lib, &flags, "amazing_cats_video_id").unwrap();

        let s = player.play_random(&lib, &flags, &mut rng).unwrap();
        assert_eq!(s.stopped.unwrap().id, "amazing_cats_video_id");
        assert_eq!(player.slot().video(), Some(&s.started));
    }

    #[test]
    fn test_play_random_all_flagged() {
        let (lib, mut flags, mut player) = setup();
        let mut rng = StdRng::seed_from_u64(1);
        player.play(&lib, &flags, "nothing_video_id").unwrap();
        for v in lib.get_all() {
            flags.flag(&lib, &v.id, "").unwrap();
        }

        assert_eq!(
            player.play_random(&lib, &flags, &mut rng).unwrap_err(),
            CommandError::NoPlayableVideos
        );
        // Nothing was stopped.
        assert_eq!(player.slot().video().unwrap().id, "nothing_video_id");
    }

    #[test]
    fn test_stop_if_current() {
        let (lib, flags, mut player) = setup();
        player.play(&lib, &flags, "amazing_cats_video_id").unwrap();

        assert!(player.stop_if_current("funny_dogs_video_id").is_none());
        assert!(player.stop_if_current("amazing_cats_video_id").is_some());
        assert_eq!(player.slot(), &Slot::Empty);
    }
}
