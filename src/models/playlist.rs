//! Playlist snapshot models.
//!
//! A [`Playlist`] owns its [`PlaylistEntry`] records. The order in which
//! entries are stored carries no meaning; position is given only by
//! [`PlaylistEntry::index`], so readers should go through
//! [`Playlist::entries_sorted`].

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::common::{ArtistId, EntryId, PlaylistId, SharingLevel, UserId};
use super::track::Track;

/// Allowed drift between the running duration total and a full recompute.
pub const DURATION_TOLERANCE: f64 = 0.01;

/// One membership record binding a track to a playlist position.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlaylistEntry {
    /// Entry identifier, unique within the owning playlist.
    pub id: EntryId,

    /// The referenced track.
    pub track: Track,

    /// Artist of the track, copied when the entry was created.
    pub artist_id: ArtistId,

    /// When the track was added to the playlist.
    pub date_added: DateTime<Utc>,

    /// Zero-based position in the playlist.
    pub index: usize,

    /// Free-form note attached to the entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub sharing_level: SharingLevel,
}

impl PlaylistEntry {
    /// Create an entry for `track`, denormalizing its artist.
    ///
    /// The position is left at zero; the mutator assigns the real one.
    pub fn new(id: EntryId, track: Track, date_added: DateTime<Utc>) -> Self {
        Self {
            id,
            artist_id: track.artist_id,
            track,
            date_added,
            index: 0,
            description: None,
            sharing_level: SharingLevel::default(),
        }
    }
}

/// In-memory snapshot of one playlist and all its entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Playlist {
    /// Internal identifier.
    pub id: PlaylistId,

    /// Owning user.
    pub owner_id: UserId,

    /// External handle used by clients.
    pub uuid: Uuid,

    /// Playlist name.
    pub name: String,

    /// Playlist description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub sharing_level: SharingLevel,

    /// Time of the last successful mutation.
    pub last_updated: DateTime<Utc>,

    /// Soft-deletion marker.
    #[serde(default)]
    pub deleted: bool,

    /// Running total of entry durations, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,

    /// Number of entries.
    #[serde(default)]
    pub nr_of_tracks: usize,

    /// Membership records, in no particular order.
    #[serde(default)]
    pub entries: Vec<PlaylistEntry>,
}

impl Playlist {
    /// Create an empty playlist with a fresh external handle.
    pub fn new<S: Into<String>>(id: i64, owner_id: UserId, name: S) -> Self {
        Self {
            id: PlaylistId(id),
            owner_id,
            uuid: Uuid::new_v4(),
            name: name.into(),
            last_updated: Utc::now(),
            duration: Some(0.0),
            ..Default::default()
        }
    }

    /// Aggregate duration in seconds, zero when unknown.
    pub fn duration_secs(&self) -> f64 {
        self.duration.unwrap_or(0.0)
    }

    /// Entries ordered by position.
    pub fn entries_sorted(&self) -> Vec<&PlaylistEntry> {
        let mut sorted: Vec<&PlaylistEntry> = self.entries.iter().collect();
        sorted.sort_by_key(|e| e.index);
        sorted
    }

    /// Whether an entry with the given identifier is present.
    pub fn contains_entry(&self, id: EntryId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Largest entry identifier currently in use.
    pub fn max_entry_id(&self) -> Option<EntryId> {
        self.entries.iter().map(|e| e.id).max()
    }

    /// Sum of the durations of all entries, recomputed from scratch.
    pub fn entries_duration(&self) -> f64 {
        self.entries.iter().map(|e| e.track.duration_secs()).sum()
    }

    /// Get the aggregate duration formatted as H:MM:SS.
    pub fn duration_formatted(&self) -> String {
        let total = self.duration_secs().max(0.0) as u64;
        format!(
            "{}:{:02}:{:02}",
            total / 3600,
            (total % 3600) / 60,
            total % 60
        )
    }

    /// Verify the snapshot invariants, reporting the first violation found.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        if self.nr_of_tracks != self.entries.len() {
            return Err(InvariantViolation::CountMismatch {
                recorded: self.nr_of_tracks,
                actual: self.entries.len(),
            });
        }

        for (expected, entry) in self.entries_sorted().into_iter().enumerate() {
            if entry.index != expected {
                return Err(InvariantViolation::SparseIndex {
                    expected,
                    found: entry.index,
                });
            }
        }

        let recomputed = self.entries_duration();
        if (self.duration_secs() - recomputed).abs() > DURATION_TOLERANCE {
            return Err(InvariantViolation::DurationMismatch {
                recorded: self.duration_secs(),
                actual: recomputed,
            });
        }

        let mut seen = HashSet::with_capacity(self.entries.len());
        for entry in &self.entries {
            if !seen.insert(entry.id) {
                return Err(InvariantViolation::DuplicateEntryId(entry.id));
            }
        }

        Ok(())
    }
}

/// A broken snapshot invariant.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvariantViolation {
    #[error("entry count is {recorded} but playlist holds {actual} entries")]
    CountMismatch { recorded: usize, actual: usize },

    #[error("expected position {expected}, found {found}")]
    SparseIndex { expected: usize, found: usize },

    #[error("duration is {recorded}s but entries add up to {actual}s")]
    DurationMismatch { recorded: f64, actual: f64 },

    #[error("entry id {0} appears more than once")]
    DuplicateEntryId(EntryId),
}
