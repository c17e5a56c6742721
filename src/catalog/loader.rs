//! Catalog file parser
//!
//! One video per line, pipe separated:
//! Title | video_id | #tag1, #tag2
//!
//! Example:
//! Amazing Cats | amazing_cats_video_id | #cat , #animal
//! Video about nothing | nothing_video_id |

use super::{Video, VideoLibrary};
use anyhow::{Context, bail};
use std::collections::HashSet;
use std::path::Path;

/// Read and parse a catalog file from disk.
pub fn load(path: &Path) -> anyhow::Result<VideoLibrary> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let videos = parse(&raw).with_context(|| format!("parse {}", path.display()))?;
    tracing::debug!(count = videos.len(), path = %path.display(), "loaded catalog");
    Ok(VideoLibrary::new(videos))
}

/// Parse catalog text into videos, in file order.
pub fn parse(content: &str) -> anyhow::Result<Vec<Video>> {
    let mut videos = Vec::new();
    let mut seen = HashSet::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let video = parse_line(line).with_context(|| format!("line {line_no}"))?;
        if !seen.insert(video.id.clone()) {
            bail!("line {line_no}: duplicate video id {}", video.id);
        }
        videos.push(video);
    }

    Ok(videos)
}

fn parse_line(line: &str) -> anyhow::Result<Video> {
    let mut fields = line.split('|').map(str::trim);

    let title = fields.next().unwrap_or_default();
    let Some(id) = fields.next() else {
        bail!("expected `title | id | tags`, got {line:?}");
    };
    if id.is_empty() {
        bail!("empty video id");
    }

    let tags = fields
        .next()
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Ok(Video {
        id: id.to_string(),
        title: title.to_string(),
        tags,
    })
}
