use crate::app::error::{CommandError, Result};
use crate::catalog::{Catalog, Video};
use crate::flags::{Annotated, FlagRegistry};
use std::collections::HashMap;
use std::rc::Rc;

/// An ordered, duplicate-free list of videos.
#[derive(Debug, Clone)]
pub struct Playlist {
    display_name: String,
    videos: Vec<Rc<Video>>,
}

impl Playlist {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            videos: Vec::new(),
        }
    }

    /// Name as it was given at creation
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Append a video; returns false if it was already present
    pub fn add(&mut self, video: Rc<Video>) -> bool {
        if self.contains(&video.id) {
            return false;
        }
        self.videos.push(video);
        true
    }

    /// Remove a video by id, keeping the order of the rest
    pub fn remove(&mut self, video_id: &str) -> Option<Rc<Video>> {
        let index = self.videos.iter().position(|v| v.id == video_id)?;
        Some(self.videos.remove(index))
    }

    /// Remove every video, keeping the playlist itself
    pub fn clear(&mut self) {
        self.videos.clear();
    }

    pub fn contains(&self, video_id: &str) -> bool {
        self.videos.iter().any(|v| v.id == video_id)
    }

    /// Videos in insertion order
    pub fn videos(&self) -> &[Rc<Video>] {
        &self.videos
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

/// All playlists of the session, keyed by lowercased name.
#[derive(Debug, Clone, Default)]
pub struct PlaylistRegistry {
    playlists: HashMap<String, Playlist>,
}

fn key(name: &str) -> String {
    name.to_lowercase()
}

impl PlaylistRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, name: &str) -> Result<&Playlist> {
        let k = key(name);
        if self.playlists.contains_key(&k) {
            return Err(CommandError::DuplicateName);
        }
        Ok(&*self.playlists.entry(k).or_insert_with(|| Playlist::new(name)))
    }

    /// Append a catalog video. Checks, in order: playlist exists, video
    /// exists, video not flagged, video not already in the playlist.
    pub fn add(
        &mut self,
        catalog: &dyn Catalog,
        flags: &FlagRegistry,
        name: &str,
        video_id: &str,
    ) -> Result<(&Playlist, Rc<Video>)> {
        let playlist = self.get_mut(name)?;
        let video = catalog.get_by_id(video_id).ok_or(CommandError::VideoNotFound)?;
        flags.ensure_allowed(&video)?;
        if !playlist.add(video.clone()) {
            return Err(CommandError::AlreadyInPlaylist);
        }
        Ok((&*playlist, video))
    }

    pub fn remove(
        &mut self,
        catalog: &dyn Catalog,
        name: &str,
        video_id: &str,
    ) -> Result<(&Playlist, Rc<Video>)> {
        let playlist = self.get_mut(name)?;
        if catalog.get_by_id(video_id).is_none() {
            return Err(CommandError::VideoNotFound);
        }
        let video = playlist.remove(video_id).ok_or(CommandError::NotInPlaylist)?;
        Ok((&*playlist, video))
    }

    pub fn clear(&mut self, name: &str) -> Result<&Playlist> {
        let playlist = self.get_mut(name)?;
        playlist.clear();
        Ok(&*playlist)
    }

    /// Remove a playlist entirely; returns it.
    pub fn delete(&mut self, name: &str) -> Result<Playlist> {
        self.playlists
            .remove(&key(name))
            .ok_or(CommandError::PlaylistNotFound)
    }

    /// Videos in insertion order, each with its flag reason.
    pub fn show(&self, flags: &FlagRegistry, name: &str) -> Result<Vec<Annotated>> {
        let playlist = self.get(name)?;
        Ok(playlist.videos().iter().map(|v| flags.annotate(v)).collect())
    }

    /// Display names ordered case-insensitively.
    pub fn list_all(&self) -> Vec<String> {
        let mut keys: Vec<&String> = self.playlists.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|k| self.playlists[k].display_name().to_string())
            .collect()
    }

    pub fn get(&self, name: &str) -> Result<&Playlist> {
        self.playlists
            .get(&key(name))
            .ok_or(CommandError::PlaylistNotFound)
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut Playlist> {
        self.playlists
            .get_mut(&key(name))
            .ok_or(CommandError::PlaylistNotFound)
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }
}
