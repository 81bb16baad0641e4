//! Load-then-mutate interface.
//!
//! [`PlaylistService`] pairs a [`PlaylistLoader`] with a [`PlaylistMutator`]:
//! each call fetches a fresh snapshot, applies one mutation and hands the
//! updated snapshot back. Persisting it is left to the caller.

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use crate::error::Result;
use crate::loader::PlaylistLoader;
use crate::models::{EntryId, Playlist, Track, UserId};
use crate::mutator::{InsertRequest, PlaylistMutator, SequentialEntryIds};

/// Main playlist editing interface.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use playlist_engine::{GeneratedPlaylistLoader, PlaylistService, Track, UserId};
/// use uuid::Uuid;
///
/// let service = PlaylistService::new(GeneratedPlaylistLoader::new(2, 0), 500);
/// let playlist = service
///     .add_tracks(
///         &Uuid::new_v4(),
///         UserId(1),
///         vec![Track::new(100, 4, "New", 200.0)],
///         0,
///         Utc::now(),
///     )
///     .unwrap();
/// assert_eq!(playlist.nr_of_tracks, 3);
/// ```
#[derive(Debug, Clone)]
pub struct PlaylistService<L> {
    loader: L,
    mutator: PlaylistMutator,
}

impl<L: PlaylistLoader> PlaylistService<L> {
    /// Create a service enforcing `max_entries` on every playlist.
    pub fn new(loader: L, max_entries: usize) -> Self {
        Self::with_mutator(loader, PlaylistMutator::new(max_entries))
    }

    pub fn with_mutator(loader: L, mutator: PlaylistMutator) -> Self {
        Self { loader, mutator }
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    pub fn mutator(&self) -> &PlaylistMutator {
        &self.mutator
    }

    /// Insert `tracks` into the playlist at `to_index`.
    ///
    /// New entries get identifiers following the largest one already in
    /// the playlist. Pass [`APPEND`](crate::mutator::APPEND) to add at the end.
    ///
    /// # Errors
    ///
    /// Returns `PlaylistNotFound` from the loader, or a mutation error if
    /// the insert is rejected.
    pub fn add_tracks(
        &self,
        uuid: &Uuid,
        owner_id: UserId,
        tracks: Vec<Track>,
        to_index: i64,
        added_at: DateTime<Utc>,
    ) -> Result<Playlist> {
        let mut playlist = self.loader.load_playlist(uuid, owner_id)?;
        let mut ids = SequentialEntryIds::after(&playlist);
        let added = self.mutator.insert(
            &mut playlist,
            InsertRequest::new(tracks, to_index, added_at),
            &mut ids,
        )?;

        info!("Added {} tracks to playlist {}", added.len(), uuid);
        Ok(playlist)
    }

    /// Remove the entries with the given identifiers from the playlist.
    ///
    /// Unknown identifiers are ignored.
    pub fn remove_tracks(
        &self,
        uuid: &Uuid,
        owner_id: UserId,
        ids: &[EntryId],
    ) -> Result<Playlist> {
        let mut playlist = self.loader.load_playlist(uuid, owner_id)?;
        let removed = self.mutator.delete(&mut playlist, ids);

        info!("Removed {} tracks from playlist {}", removed.len(), uuid);
        Ok(playlist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{MutationError, PlaylistError};
    use crate::loader::GeneratedPlaylistLoader;

    fn service(
        tracks_to_generate: usize,
        max_entries: usize,
    ) -> PlaylistService<GeneratedPlaylistLoader> {
        PlaylistService::new(
            GeneratedPlaylistLoader::new(tracks_to_generate, 0),
            max_entries,
        )
    }

    #[test]
    fn test_add_tracks_assigns_fresh_ids() {
        let playlist = service(2, 10)
            .add_tracks(
                &Uuid::new_v4(),
                UserId(1),
                vec![Track::new(100, 4, "a", 1.0), Track::new(101, 4, "b", 1.0)],
                1,
                Utc::now(),
            )
            .unwrap();

        let ids: Vec<i64> = playlist
            .entries_sorted()
            .iter()
            .map(|e| e.id.get())
            .collect();
        assert_eq!(ids, vec![0, 2, 3, 1]);
        assert_eq!(playlist.check_invariants(), Ok(()));
    }

    #[test]
    fn test_add_tracks_propagates_capacity_error() {
        let err = service(10, 10)
            .add_tracks(
                &Uuid::new_v4(),
                UserId(1),
                vec![Track::new(100, 4, "a", 1.0)],
                1,
                Utc::now(),
            )
            .unwrap_err();

        assert!(matches!(
            err,
            PlaylistError::Mutation(MutationError::CapacityExceeded { max_entries: 10 })
        ));
    }

    #[test]
    fn test_remove_tracks() {
        let playlist = service(3, 10)
            .remove_tracks(&Uuid::new_v4(), UserId(1), &[EntryId(0), EntryId(42)])
            .unwrap();

        assert_eq!(playlist.nr_of_tracks, 2);
        assert_eq!(playlist.entries_sorted()[0].id, EntryId(1));
        assert_eq!(playlist.check_invariants(), Ok(()));
    }
}
