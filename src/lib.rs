//! # Playlist Engine
//!
//! Keeps the ordered track membership of a playlist consistent while it
//! is edited.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::Utc;
//! use playlist_engine::{
//!     EntryId, InsertRequest, Playlist, PlaylistMutator, SequentialEntryIds, Track, UserId,
//! };
//!
//! let mut playlist = Playlist::new(1, UserId(7), "Road trip");
//! let mutator = PlaylistMutator::new(500);
//!
//! let tracks = vec![
//!     Track::new(100, 4, "Intro", 95.0),
//!     Track::new(101, 4, "Outro", 120.0),
//! ];
//! let mut ids = SequentialEntryIds::after(&playlist);
//! mutator.insert(&mut playlist, InsertRequest::append(tracks, Utc::now()), &mut ids)?;
//! assert_eq!(playlist.nr_of_tracks, 2);
//!
//! mutator.delete(&mut playlist, &[EntryId(0)]);
//! assert_eq!(playlist.entries_sorted()[0].track.title, "Outro");
//! # Ok::<(), playlist_engine::MutationError>(())
//! ```
//!
//! ## Guarantees
//!
//! After every successful mutation:
//! - the entry count equals the number of entries
//! - positions read back in order are exactly `0..count`
//! - the aggregate duration equals the sum of entry durations
//! - entry identifiers are unique
//!
//! Rejected inserts leave the playlist untouched. Deletes never fail.
//!
//! ## Modules
//!
//! - [`mutator`] - insert and delete
//! - [`loader`] - sources of playlist snapshots
//! - [`PlaylistService`] - load a snapshot and mutate it in one call

pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod mutator;
mod service;

pub use config::{MutatorConfig, DEFAULT_MAX_ENTRIES};
pub use error::{MutationError, PlaylistError, Result};
pub use loader::{GeneratedPlaylistLoader, JsonFileLoader, PlaylistLoader};
pub use models::{
    ArtistId, EntryId, InvariantViolation, Playlist, PlaylistEntry, PlaylistId, SharingLevel,
    Track, TrackId, UserId,
};
pub use mutator::{EntryIdAllocator, InsertRequest, PlaylistMutator, SequentialEntryIds, APPEND};
pub use service::PlaylistService;
