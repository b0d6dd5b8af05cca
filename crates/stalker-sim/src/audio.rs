//! Audio track discovery.
//!
//! The stalker's audio folder is scanned at spawn time and one track is
//! chosen at random. A missing or empty folder is not an error; the stalker
//! simply hunts in silence.

use rand::Rng;
use std::path::{Path, PathBuf};

/// Only files with this extension count as tracks.
pub const AUDIO_EXTENSION: &str = "ogg";

/// Lists the audio tracks in a folder, sorted by path so the random pick is
/// reproducible.
pub fn list_audio_tracks(dir: impl AsRef<Path>) -> Vec<PathBuf> {
    let dir = dir.as_ref();
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("could not read audio folder {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut tracks: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .map(|ext| ext == AUDIO_EXTENSION)
                .unwrap_or(false)
        })
        .collect();
    tracks.sort();
    tracks
}

/// Picks one track at random, or `None` when the folder has none.
pub fn pick_audio_track(dir: impl AsRef<Path>, rng: &mut impl Rng) -> Option<PathBuf> {
    let tracks = list_audio_tracks(dir);
    if tracks.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..tracks.len());
    Some(tracks[index].clone())
}
