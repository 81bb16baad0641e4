//! Loader fabricating playlists of a fixed size.
//!
//! Stands in for a real data layer in tests and demos.

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use super::PlaylistLoader;
use crate::error::Result;
use crate::models::{
    ArtistId, EntryId, Playlist, PlaylistEntry, PlaylistId, SharingLevel, Track, TrackId, UserId,
};

/// Internal id given to every generated playlist.
const GENERATED_PLAYLIST_ID: i64 = 49834;

/// Duration of each generated track, in seconds.
pub const GENERATED_TRACK_DURATION: f64 = 180.0;

/// Produces a playlist with `tracks_to_generate` entries for any handle.
///
/// Entry ids run from `first_entry_id` upwards and positions from zero,
/// so entry `first_entry_id + i` sits at position `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedPlaylistLoader {
    tracks_to_generate: usize,
    first_entry_id: i64,
}

impl GeneratedPlaylistLoader {
    pub fn new(tracks_to_generate: usize, first_entry_id: i64) -> Self {
        Self {
            tracks_to_generate,
            first_entry_id,
        }
    }

    /// Build the snapshot for `uuid` owned by `owner_id`.
    pub fn generate(&self, uuid: Uuid, owner_id: UserId) -> Playlist {
        let now = Utc::now();
        let entries: Vec<PlaylistEntry> = (0..self.tracks_to_generate)
            .map(|i| {
                let track = generated_track(i);
                PlaylistEntry {
                    index: i,
                    description: Some("A description".to_string()),
                    sharing_level: SharingLevel::Public,
                    ..PlaylistEntry::new(EntryId(self.first_entry_id + i as i64), track, now)
                }
            })
            .collect();

        Playlist {
            id: PlaylistId(GENERATED_PLAYLIST_ID),
            owner_id,
            uuid,
            name: "Collection of great songs".to_string(),
            description: Some("The mother of all playlists".to_string()),
            sharing_level: SharingLevel::Public,
            last_updated: now,
            deleted: false,
            duration: Some(GENERATED_TRACK_DURATION * entries.len() as f64),
            nr_of_tracks: entries.len(),
            entries,
        }
    }
}

impl PlaylistLoader for GeneratedPlaylistLoader {
    fn load_playlist(&self, uuid: &Uuid, owner_id: UserId) -> Result<Playlist> {
        debug!(
            "Generating playlist {} with {} tracks",
            uuid, self.tracks_to_generate
        );
        Ok(self.generate(*uuid, owner_id))
    }
}

fn generated_track(i: usize) -> Track {
    let track_number = (i % 15) as u32;
    Track {
        id: TrackId(i as i64),
        artist_id: ArtistId((i as i64 * 7919) % 10000),
        title: format!("Track no: {}", track_number),
        track_number_idx: track_number,
        duration: Some(GENERATED_TRACK_DURATION),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_playlist_is_consistent() {
        let loader = GeneratedPlaylistLoader::new(10, 0);
        let playlist = loader.load_playlist(&Uuid::new_v4(), UserId(1)).unwrap();

        assert_eq!(playlist.nr_of_tracks, 10);
        assert_eq!(playlist.duration, Some(1800.0));
        assert_eq!(playlist.check_invariants(), Ok(()));
    }

    #[test]
    fn test_entry_ids_follow_positions() {
        let playlist = GeneratedPlaylistLoader::new(3, 100).generate(Uuid::nil(), UserId(2));

        for entry in playlist.entries_sorted() {
            assert_eq!(entry.id.get(), 100 + entry.index as i64);
        }
        assert_eq!(playlist.owner_id, UserId(2));
        assert_eq!(playlist.uuid, Uuid::nil());
    }

    #[test]
    fn test_empty_playlist() {
        let playlist = GeneratedPlaylistLoader::new(0, 0).generate(Uuid::nil(), UserId(1));
        assert!(playlist.entries.is_empty());
        assert_eq!(playlist.duration_secs(), 0.0);
    }
}
