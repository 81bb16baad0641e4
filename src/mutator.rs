//! Playlist mutation engine.
//!
//! [`PlaylistMutator`] applies the two supported mutations to a playlist
//! snapshot: inserting a batch of tracks at a position and removing entries
//! by identifier. Every mutation leaves the snapshot with dense zero-based
//! positions, an entry count matching its membership and a running duration
//! total kept in step with what was added or removed.
//!
//! The mutator holds no state besides its capacity. Callers running in a
//! concurrent environment must serialize mutations per playlist themselves.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::config::MutatorConfig;
use crate::error::MutationError;
use crate::models::{EntryId, Playlist, PlaylistEntry, Track};

/// Insertion index meaning "append after the last entry".
pub const APPEND: i64 = -1;

/// Source of identifiers for newly created entries.
///
/// Implementations must hand out identifiers that are not already used in
/// the playlist being mutated.
pub trait EntryIdAllocator {
    /// Allocate the identifier for the entry about to wrap `track`.
    fn next_id(&mut self, track: &Track) -> EntryId;
}

/// Allocates consecutive identifiers from a starting value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequentialEntryIds {
    next: i64,
}

impl SequentialEntryIds {
    /// Start handing out identifiers at `first`.
    pub fn starting_at(first: i64) -> Self {
        Self { next: first }
    }

    /// Start right after the largest identifier present in `playlist`.
    pub fn after(playlist: &Playlist) -> Self {
        let next = playlist.max_entry_id().map_or(0, |id| id.get() + 1);
        Self { next }
    }
}

impl EntryIdAllocator for SequentialEntryIds {
    fn next_id(&mut self, _track: &Track) -> EntryId {
        let id = EntryId(self.next);
        self.next += 1;
        id
    }
}

/// A batch of tracks to insert at one position.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertRequest {
    /// Tracks in the order they should appear.
    pub tracks: Vec<Track>,
    /// Target position. [`APPEND`] or anything past the end appends.
    pub to_index: i64,
    /// Stamped on every new entry as its date of addition.
    pub added_at: DateTime<Utc>,
}

impl InsertRequest {
    pub fn new(tracks: Vec<Track>, to_index: i64, added_at: DateTime<Utc>) -> Self {
        Self {
            tracks,
            to_index,
            added_at,
        }
    }

    /// Append `tracks` at the end of the playlist.
    pub fn append(tracks: Vec<Track>, added_at: DateTime<Utc>) -> Self {
        Self::new(tracks, APPEND, added_at)
    }
}

/// Applies insert and delete mutations to playlist snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaylistMutator {
    max_entries: usize,
}

impl PlaylistMutator {
    /// Create a mutator enforcing the given capacity.
    pub fn new(max_entries: usize) -> Self {
        Self { max_entries }
    }

    pub fn from_config(config: &MutatorConfig) -> Self {
        Self::new(config.max_entries)
    }

    /// Largest number of entries a playlist may reach.
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Insert a batch of tracks into `playlist`.
    ///
    /// The tracks land contiguously, in request order, starting at the
    /// normalized insertion index. Returns the identifiers of the new
    /// entries in the same order.
    ///
    /// # Errors
    ///
    /// Returns `CapacityExceeded` if the batch does not fit and
    /// `InvalidIndex` for a negative index other than [`APPEND`]. In both
    /// cases the playlist is left untouched.
    pub fn insert<A>(
        &self,
        playlist: &mut Playlist,
        request: InsertRequest,
        ids: &mut A,
    ) -> Result<Vec<EntryId>, MutationError>
    where
        A: EntryIdAllocator + ?Sized,
    {
        let InsertRequest {
            tracks,
            to_index,
            added_at,
        } = request;

        if playlist.nr_of_tracks + tracks.len() > self.max_entries {
            warn!(
                "Rejecting {} tracks for playlist {}: {} of {} slots used",
                tracks.len(),
                playlist.uuid,
                playlist.nr_of_tracks,
                self.max_entries
            );
            return Err(MutationError::CapacityExceeded {
                max_entries: self.max_entries,
            });
        }

        // Clamp against the membership actually present, not the recorded count.
        let mut position = match normalize_index(to_index, playlist.entries.len()) {
            Ok(position) => position,
            Err(e) => {
                warn!("Rejecting insert into playlist {}: {}", playlist.uuid, e);
                return Err(e);
            }
        };

        debug!(
            "Inserting {} tracks into playlist {} at position {}",
            tracks.len(),
            playlist.uuid,
            position
        );

        let mut ordered = take_ordered(playlist);
        ordered.reserve(tracks.len());

        let mut added = Vec::with_capacity(tracks.len());
        for track in tracks {
            let mut entry = PlaylistEntry::new(ids.next_id(&track), track, added_at);
            entry.sharing_level = playlist.sharing_level;
            add_duration(playlist, entry.track.duration_secs());
            added.push(entry.id);
            ordered.insert(position, entry);
            position += 1;
        }

        commit(playlist, ordered);
        if !added.is_empty() {
            playlist.last_updated = added_at;
        }

        Ok(added)
    }

    /// Remove entries by identifier.
    ///
    /// Identifiers are processed in order; unknown ones are skipped. The
    /// remaining entries are re-indexed afterwards. Returns the identifiers
    /// that were actually removed.
    pub fn delete(&self, playlist: &mut Playlist, ids: &[EntryId]) -> Vec<EntryId> {
        let mut removed = Vec::with_capacity(ids.len());

        for &id in ids {
            match playlist.entries.iter().position(|e| e.id == id) {
                Some(found) => {
                    let entry = playlist.entries.remove(found);
                    subtract_duration(playlist, entry.track.duration_secs());
                    removed.push(id);
                }
                None => debug!("Entry {} not in playlist {}, skipping", id, playlist.uuid),
            }
        }

        let ordered = take_ordered(playlist);
        commit(playlist, ordered);

        debug!(
            "Removed {} of {} requested entries from playlist {}",
            removed.len(),
            ids.len(),
            playlist.uuid
        );

        removed
    }
}

/// Resolve a requested insertion index against the current entry count.
///
/// [`APPEND`] and any index past the end become `len`. Whatever is left
/// must fall inside `0..=len`.
pub fn normalize_index(to_index: i64, len: usize) -> Result<usize, MutationError> {
    let len_i = i64::try_from(len).unwrap_or(i64::MAX);
    let index = if to_index == APPEND || to_index > len_i {
        len_i
    } else {
        to_index
    };

    if !(0..=len_i).contains(&index) {
        return Err(MutationError::InvalidIndex(index));
    }

    usize::try_from(index).map_err(|_| MutationError::InvalidIndex(index))
}

/// Overwrite every entry's position with its place in `entries`.
pub fn reindex(entries: &mut [PlaylistEntry]) {
    for (i, entry) in entries.iter_mut().enumerate() {
        entry.index = i;
    }
}

/// Move the entries out of the playlist, sorted by position.
fn take_ordered(playlist: &mut Playlist) -> Vec<PlaylistEntry> {
    let mut ordered = std::mem::take(&mut playlist.entries);
    ordered.sort_by_key(|e| e.index);
    ordered
}

/// Re-index `ordered` and install it as the playlist's membership.
fn commit(playlist: &mut Playlist, mut ordered: Vec<PlaylistEntry>) {
    reindex(&mut ordered);
    playlist.nr_of_tracks = ordered.len();
    playlist.entries = ordered;
}

fn add_duration(playlist: &mut Playlist, secs: f64) {
    playlist.duration = Some(playlist.duration_secs() + secs);
}

fn subtract_duration(playlist: &mut Playlist, secs: f64) {
    playlist.duration = Some(playlist.duration_secs() - secs);
}
