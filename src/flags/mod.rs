use crate::app::error::{CommandError, Result};
use crate::catalog::{Catalog, Video};
use serde::Serialize;
use std::collections::HashMap;
use std::rc::Rc;

/// Reason recorded when a video is flagged without one.
pub const DEFAULT_REASON: &str = "Not supplied";

/// A video paired with its flag reason, for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotated {
    pub video: Rc<Video>,
    pub flag_reason: Option<String>,
}

/// Videos currently blocked from playback, playlists and search, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct FlagRegistry {
    reasons: HashMap<String, String>,
}

impl FlagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag a catalog video. Returns the video and the reason actually stored.
    pub fn flag(
        &mut self,
        catalog: &dyn Catalog,
        video_id: &str,
        reason: &str,
    ) -> Result<(Rc<Video>, String)> {
        let video = catalog.get_by_id(video_id).ok_or(CommandError::VideoNotFound)?;
        if self.reasons.contains_key(&video.id) {
            return Err(CommandError::AlreadyFlagged);
        }

        let reason = match reason.trim() {
            "" => DEFAULT_REASON.to_string(),
            r => r.to_string(),
        };
        self.reasons.insert(video.id.clone(), reason.clone());
        Ok((video, reason))
    }

    /// Lift the flag on a catalog video.
    pub fn allow(&mut self, catalog: &dyn Catalog, video_id: &str) -> Result<Rc<Video>> {
        let video = catalog.get_by_id(video_id).ok_or(CommandError::VideoNotFound)?;
        match self.reasons.remove(&video.id) {
            Some(_) => Ok(video),
            None => Err(CommandError::NotFlagged),
        }
    }

    pub fn is_flagged(&self, video_id: &str) -> Option<&str> {
        self.reasons.get(video_id).map(String::as_str)
    }

    /// `Err(Flagged)` if the video may not be played or added anywhere.
    pub fn ensure_allowed(&self, video: &Video) -> Result<()> {
        match self.is_flagged(&video.id) {
            Some(reason) => Err(CommandError::Flagged {
                reason: reason.to_string(),
            }),
            None => Ok(()),
        }
    }

    pub fn annotate(&self, video: &Rc<Video>) -> Annotated {
        Annotated {
            video: video.clone(),
            flag_reason: self.is_flagged(&video.id).map(str::to_string),
        }
    }

    pub fn len(&self) -> usize {
        self.reasons.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::VideoLibrary;

    #[test]
    fn test_flag_and_allow() {
        let lib = VideoLibrary::bundled();
        let mut flags = FlagRegistry::new();

        let (video, reason) = flags.flag(&lib, "funny_dogs_video_id", "dont_like_dogs").unwrap();
        assert_eq!(video.title, "Funny Dogs");
        assert_eq!(reason, "dont_like_dogs");
        assert_eq!(flags.is_flagged("funny_dogs_video_id"), Some("dont_like_dogs"));

        flags.allow(&lib, "funny_dogs_video_id").unwrap();
        assert_eq!(flags.is_flagged("funny_dogs_video_id"), None);
        assert_eq!(flags.len(), 0);
    }

    #[test]
    fn test_default_reason() {
        let lib = VideoLibrary::bundled();
        let mut flags = FlagRegistry::new();

        let (_, reason) = flags.flag(&lib, "nothing_video_id", "").unwrap();
        assert_eq!(reason, DEFAULT_REASON);
        let (_, reason) = flags.flag(&lib, "amazing_cats_video_id", "   ").unwrap();
        assert_eq!(reason, DEFAULT_REASON);
    }

    #[test]
    fn test_flag_errors() {
        let lib = VideoLibrary::bundled();
        let mut flags = FlagRegistry::new();

        assert_eq!(
            flags.flag(&lib, "missing", "x").unwrap_err(),
            CommandError::VideoNotFound
        );
        flags.flag(&lib, "nothing_video_id", "x").unwrap();
        assert_eq!(
            flags.flag(&lib, "nothing_video_id", "y").unwrap_err(),
            CommandError::AlreadyFlagged
        );
        // First reason wins.
        assert_eq!(flags.is_flagged("nothing_video_id"), Some("x"));
    }

    #[test]
    fn test_allow_errors() {
        let lib = VideoLibrary::bundled();
        let mut flags = FlagRegistry::new();

        assert_eq!(
            flags.allow(&lib, "missing").unwrap_err(),
            CommandError::VideoNotFound
        );
        assert_eq!(
            flags.allow(&lib, "nothing_video_id").unwrap_err(),
            CommandError::NotFlagged
        );
    }
}
