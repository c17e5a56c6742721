//! Video catalog: the read-only set of videos available in a session.
//!
//! The core only ever talks to the [`Catalog`] trait. [`VideoLibrary`] is the
//! in-memory implementation, built either from the bundled sample videos or
//! from a catalog file (see [`loader`]).

pub mod loader;

use serde::Serialize;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub tags: Vec<String>,
}

impl Video {
    pub fn new(id: impl Into<String>, title: impl Into<String>, tags: &[&str]) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Case-insensitive exact tag match.
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == tag)
    }
}

/// Lookup service over the session's videos.
pub trait Catalog {
    fn get_by_id(&self, id: &str) -> Option<Rc<Video>>;

    /// All videos, in no particular order.
    fn get_all(&self) -> Vec<Rc<Video>>;
}

#[derive(Debug, Clone, Default)]
pub struct VideoLibrary {
    videos: HashMap<String, Rc<Video>>,
}

impl VideoLibrary {
    pub fn new(videos: Vec<Video>) -> Self {
        let videos = videos
            .into_iter()
            .map(|v| (v.id.clone(), Rc::new(v)))
            .collect();
        Self { videos }
    }

    /// The sample library used when no catalog file is configured.
    pub fn bundled() -> Self {
        Self::new(vec![
            Video::new("amazing_cats_video_id", "Amazing Cats", &["#cat", "#animal"]),
            Video::new("another_cat_video_id", "Another Cat Video", &["#cat", "#animal"]),
            Video::new("funny_dogs_video_id", "Funny Dogs", &["#dog", "#animal"]),
            Video::new("life_at_google_video_id", "Life at Google", &["#google", "#career"]),
            Video::new("nothing_video_id", "Video about nothing", &[]),
        ])
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

impl Catalog for VideoLibrary {
    fn get_by_id(&self, id: &str) -> Option<Rc<Video>> {
        self.videos.get(id).cloned()
    }

    fn get_all(&self) -> Vec<Rc<Video>> {
        self.videos.values().cloned().collect()
    }
}

/// All videos sorted by title, the order every listing uses.
pub fn sorted_by_title(catalog: &dyn Catalog) -> Vec<Rc<Video>> {
    let mut all = catalog.get_all();
    all.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));
    all
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_lookup() {
        let lib = VideoLibrary::bundled();
        assert_eq!(lib.len(), 5);

        let cats = lib.get_by_id("amazing_cats_video_id").unwrap();
        assert_eq!(cats.title, "Amazing Cats");
        assert_eq!(cats.tags, vec!["#cat", "#animal"]);
        assert!(lib.get_by_id("missing").is_none());
    }

    #[test]
    fn test_sorted_by_title() {
        let lib = VideoLibrary::bundled();
        let titles: Vec<_> = sorted_by_title(&lib)
            .iter()
            .map(|v| v.title.clone())
            .collect();
        assert_eq!(
            titles,
            vec![
                "Amazing Cats",
                "Another Cat Video",
                "Funny Dogs",
                "Life at Google",
                "Video about nothing",
            ]
        );
    }

    #[test]
    fn test_has_tag_ignores_case() {
        let v = Video::new("x", "X", &["#Cat"]);
        assert!(v.has_tag("#cat"));
        assert!(!v.has_tag("cat"));
    }

    #[test]
    fn test_has_tag_non_ascii() {
        let v = Video::new("x", "Émile", &["#Éte"]);
        assert!(v.has_tag("#éte"));
        assert!(v.has_tag("#ÉTE"));
        assert!(!v.has_tag("#ete"));
    }
}
